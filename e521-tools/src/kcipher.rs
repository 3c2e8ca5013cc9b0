//! The `kcipher` subcommand: password-based authenticated encryption of
//! files.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use rand_core::OsRng;
use tracing::debug;

use sha3_dalek::kcrypt;

#[derive(Args)]
pub struct KcipherArgs {
    /// Encrypt the input
    #[arg(short = 'e', long = "encrypt")]
    encrypt: bool,

    /// Decrypt the input
    #[arg(short = 'd', long = "decrypt")]
    decrypt: bool,

    /// Input file
    #[arg(short = 'f', long = "file")]
    file: PathBuf,

    /// Password string
    #[arg(long = "pws")]
    password: Option<String>,

    /// File whose raw bytes are the password
    #[arg(long = "pwf")]
    password_file: Option<PathBuf>,

    /// Output path
    #[arg(short = 'o', long = "out")]
    out: PathBuf,

    /// On decrypt, write the output even when the tag does not match
    #[arg(short = 'i', long = "ignore-tag")]
    ignore_tag: bool,
}

pub fn run(args: KcipherArgs) -> Result<()> {
    if args.encrypt == args.decrypt {
        bail!("exactly one of -e or -d is required");
    }
    let password = match (&args.password, &args.password_file) {
        (Some(string), None) => string.as_bytes().to_vec(),
        (None, Some(path)) => {
            fs::read(path).with_context(|| format!("reading password file {}", path.display()))?
        }
        _ => bail!("exactly one of --pws or --pwf is required"),
    };

    let input =
        fs::read(&args.file).with_context(|| format!("reading {}", args.file.display()))?;
    debug!(bytes = input.len(), "input read");

    if args.encrypt {
        let record = kcrypt::encrypt(&password, &input, &mut OsRng);
        fs::write(&args.out, record)
            .with_context(|| format!("writing {}", args.out.display()))?;
        println!("encrypted file written to {}", args.out.display());
        return Ok(());
    }

    let decrypted = kcrypt::decrypt(&password, &input)?;
    if !decrypted.is_valid() && !args.ignore_tag {
        bail!(
            "computed tag does not match the transmitted tag; \
             no data was written (pass -i to write anyway)"
        );
    }
    fs::write(&args.out, decrypted.as_bytes())
        .with_context(|| format!("writing {}", args.out.display()))?;
    println!("decrypted file written to {}", args.out.display());
    println!(
        "authentication tag {}",
        if decrypted.is_valid() { "valid" } else { "INVALID" }
    );
    Ok(())
}
