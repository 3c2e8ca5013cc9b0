//! e521-tools - command-line toolkit for the Keccak and E-521 services.
//!
//! Provides three subcommands:
//! - `khash`: SHA3, cSHAKE256, and KMACXOF256 digests of files or stdin
//! - `kcipher`: password-based authenticated encryption of files
//! - `ecutils`: E-521 key generation, public-key encryption, and
//!   Schnorr signatures
//!
//! Every failure exits with status 1; results go to stdout.

mod ecutils;
mod kcipher;
mod khash;

use clap::{Parser, Subcommand};
use tracing::Level;

/// Keccak hashing, password-based encryption, and E-521 public-key
/// services.
#[derive(Parser)]
#[command(name = "e521-tools")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a SHA3, cSHAKE256, or KMACXOF256 digest
    Khash(khash::KhashArgs),
    /// Encrypt or decrypt a file under a password
    Kcipher(kcipher::KcipherArgs),
    /// E-521 key generation, encryption, decryption, signing, and
    /// verification
    Ecutils(ecutils::EcutilsArgs),
}

/// Multi-character flags the documented surface spells with a single
/// dash (`-op`, `-pub`, `-pws`, ...). clap only speaks one-character
/// shorts and double-dash longs, so these are promoted to their long
/// form before parsing; the double-dash spellings keep working.
const PROMOTED_FLAGS: [&str; 8] = ["op", "cs", "pws", "pwf", "pub", "prv", "pwd", "rpwd"];

fn promote_single_dash_flags(
    args: impl Iterator<Item = std::ffi::OsString>,
) -> Vec<std::ffi::OsString> {
    args.map(|arg| {
        if let Some(text) = arg.to_str() {
            if let Some(body) = text.strip_prefix('-') {
                let name = body.split('=').next().unwrap_or(body);
                if PROMOTED_FLAGS.contains(&name) {
                    return format!("-{}", text).into();
                }
            }
        }
        arg
    })
    .collect()
}

fn main() {
    let args = promote_single_dash_flags(std::env::args_os());
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(err) => {
            // clap renders help and usage itself; usage errors are
            // failures, help and version are not.
            let _ = err.print();
            std::process::exit(if err.use_stderr() { 1 } else { 0 });
        }
    };

    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Khash(args) => khash::run(args),
        Commands::Kcipher(args) => kcipher::run(args),
        Commands::Ecutils(args) => ecutils::run(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
