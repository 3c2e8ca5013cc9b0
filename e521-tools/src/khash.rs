//! The `khash` subcommand: Keccak-derived digests of files or stdin.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use tracing::debug;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum HashOp {
    /// SHA3 with a fixed output length
    Sha3,
    /// cSHAKE256 with an optional customization string
    Cshake256,
    /// KMACXOF256 under a key read from a file
    Kmacxof256,
}

#[derive(Args)]
pub struct KhashArgs {
    /// Hash operation to perform
    #[arg(long = "op", value_enum, ignore_case = true, default_value = "sha3")]
    op: HashOp,

    /// Input file (stdin when absent)
    #[arg(short = 'f', long = "file")]
    file: Option<PathBuf>,

    /// Key file (KMACXOF256 only)
    #[arg(short = 'k', long = "key")]
    key: Option<PathBuf>,

    /// Customization string (cSHAKE256 and KMACXOF256)
    #[arg(long = "cs", default_value = "")]
    customization: String,

    /// Output length in bits; SHA3 accepts 224, 256, 384, or 512
    #[arg(short = 'l', long = "len", default_value_t = 512)]
    bits: usize,

    /// Also write the raw digest bytes to this path
    #[arg(short = 'w', long = "write")]
    write: Option<PathBuf>,
}

pub fn run(args: KhashArgs) -> Result<()> {
    if args.key.is_some() && !matches!(args.op, HashOp::Kmacxof256) {
        bail!("a key file only applies to kmacxof256");
    }

    let input = read_input(&args)?;
    debug!(bytes = input.len(), op = ?args.op, "hashing input");

    let digest = match args.op {
        HashOp::Sha3 => sha3_dalek::sha3(&input, args.bits)?,
        HashOp::Cshake256 => {
            sha3_dalek::cshake256(&input, args.bits, b"", args.customization.as_bytes())?
        }
        HashOp::Kmacxof256 => {
            let key_path = match args.key {
                Some(ref path) => path,
                None => bail!("kmacxof256 requires a key file (-k)"),
            };
            let key = fs::read(key_path)
                .with_context(|| format!("reading key file {}", key_path.display()))?;
            sha3_dalek::kmacxof256(&key, &input, args.bits, args.customization.as_bytes())?
        }
    };

    println!("{}", hex::encode(&digest));

    if let Some(ref path) = args.write {
        fs::write(path, &digest)
            .with_context(|| format!("writing digest to {}", path.display()))?;
        println!("digest written to {}", path.display());
    }
    Ok(())
}

fn read_input(args: &KhashArgs) -> Result<Vec<u8>> {
    match &args.file {
        Some(path) => {
            debug!(path = %path.display(), "reading input file");
            fs::read(path).with_context(|| format!("reading input file {}", path.display()))
        }
        None => {
            let mut buffer = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buffer)
                .context("reading stdin")?;
            Ok(buffer)
        }
    }
}
