//! The `ecutils` subcommand: E-521 key generation, public-key
//! encryption, and Schnorr signatures.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use rand_core::OsRng;
use tracing::debug;

use schnorr_dalek::{Signature, SigningKey, VerifyingKey};

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum EcOp {
    /// Generate a key pair and write both halves to disk
    Keygen,
    /// ECDHIES-encrypt a file under a public key
    Encrypt,
    /// Decrypt an ECDHIES record with the private key
    Decrypt,
    /// Produce a Schnorr signature of a file
    Sign,
    /// Verify a Schnorr signature against a public key
    Verify,
}

#[derive(Args)]
pub struct EcutilsArgs {
    /// Operation to perform
    #[arg(long = "op", value_enum, ignore_case = true)]
    op: EcOp,

    /// Public-key file
    #[arg(long = "pub")]
    public: Option<PathBuf>,

    /// Private-key file (an encrypted record)
    #[arg(long = "prv")]
    private: Option<PathBuf>,

    /// Key-generation password
    #[arg(long = "pwd")]
    password: Option<String>,

    /// Password protecting the private-key file (defaults to --pwd for
    /// keygen)
    #[arg(long = "rpwd")]
    file_password: Option<String>,

    /// Data file
    #[arg(short = 'f', long = "file")]
    file: Option<PathBuf>,

    /// Signature file
    #[arg(short = 's', long = "sig")]
    signature: Option<PathBuf>,

    /// Output path
    #[arg(short = 'o', long = "out")]
    out: Option<PathBuf>,
}

pub fn run(args: EcutilsArgs) -> Result<()> {
    match args.op {
        EcOp::Keygen => keygen(&args),
        EcOp::Encrypt => encrypt(&args),
        EcOp::Decrypt => decrypt(&args),
        EcOp::Sign => sign(&args),
        EcOp::Verify => verify(&args),
    }
}

fn keygen(args: &EcutilsArgs) -> Result<()> {
    let public = required(&args.public, "--pub")?;
    let private = required(&args.private, "--prv")?;
    let password = required(&args.password, "--pwd")?;
    let file_password = args.file_password.as_ref().unwrap_or(password);

    let key = SigningKey::from_password(password.as_bytes());
    println!("new E-521 key pair generated");

    key.write_encrypted(private, file_password.as_bytes(), &mut OsRng)
        .with_context(|| format!("writing private key to {}", private.display()))?;
    println!("private key encrypted and written to {}", private.display());

    key.verifying_key()
        .write_to(public)
        .with_context(|| format!("writing public key to {}", public.display()))?;
    println!("public key written to {}", public.display());
    Ok(())
}

fn encrypt(args: &EcutilsArgs) -> Result<()> {
    let public = required(&args.public, "--pub")?;
    let file = required(&args.file, "-f")?;
    let out = required(&args.out, "-o")?;

    let key = VerifyingKey::read_from(public)
        .with_context(|| format!("reading public key {}", public.display()))?;
    let input = fs::read(file).with_context(|| format!("reading {}", file.display()))?;
    debug!(bytes = input.len(), "encrypting");

    let record = key.encrypt(&input, &mut OsRng);
    fs::write(out, record).with_context(|| format!("writing {}", out.display()))?;
    println!(
        "encrypted {} under public key {}; record written to {}",
        file.display(),
        public.display(),
        out.display()
    );
    Ok(())
}

fn decrypt(args: &EcutilsArgs) -> Result<()> {
    let file = required(&args.file, "-f")?;
    let out = required(&args.out, "-o")?;
    let key = load_signing_key(args)?;

    let record = fs::read(file).with_context(|| format!("reading {}", file.display()))?;
    let decrypted = key.decrypt(&record)?;
    if !decrypted.is_valid() {
        bail!("the decrypted data could not be authenticated; no data was written");
    }
    fs::write(out, decrypted.as_bytes())
        .with_context(|| format!("writing {}", out.display()))?;
    println!(
        "authentication tag OK; decrypted data written to {}",
        out.display()
    );
    Ok(())
}

fn sign(args: &EcutilsArgs) -> Result<()> {
    let file = required(&args.file, "-f")?;
    let out = required(&args.out, "-o")?;
    let key = load_signing_key(args)?;

    let input = fs::read(file).with_context(|| format!("reading {}", file.display()))?;
    let signature = key.sign(&input);
    fs::write(out, signature.to_bytes())
        .with_context(|| format!("writing {}", out.display()))?;
    println!("signature written to {}", out.display());
    Ok(())
}

fn verify(args: &EcutilsArgs) -> Result<()> {
    let public = required(&args.public, "--pub")?;
    let sig_path = required(&args.signature, "-s")?;
    let file = required(&args.file, "-f")?;

    let key = VerifyingKey::read_from(public)
        .with_context(|| format!("reading public key {}", public.display()))?;
    let sig_bytes =
        fs::read(sig_path).with_context(|| format!("reading signature {}", sig_path.display()))?;
    let signature = Signature::from_bytes(&sig_bytes)?;
    let message = fs::read(file).with_context(|| format!("reading {}", file.display()))?;

    if key.verify(&message, &signature) {
        println!(
            "signature OK: {} is valid for {} under {}",
            sig_path.display(),
            file.display(),
            public.display()
        );
        Ok(())
    } else {
        bail!(
            "signature NOT valid: {} does not verify for {} under {}",
            sig_path.display(),
            file.display(),
            public.display()
        );
    }
}

/// Load the signing key from a private-key file (which requires the file
/// password) or derive it from the generation password; the two paths
/// are mutually exclusive the way the original toolkit resolved them:
/// the key file wins when present.
fn load_signing_key(args: &EcutilsArgs) -> Result<SigningKey> {
    match (&args.private, &args.password) {
        (Some(path), _) => {
            let file_password = required(&args.file_password, "--rpwd")?;
            let key = SigningKey::read_encrypted(path, file_password.as_bytes())
                .with_context(|| format!("reading private key {}", path.display()))?;
            println!("private key read from {}", path.display());
            Ok(key)
        }
        (None, Some(password)) => {
            debug!("deriving private key from password");
            Ok(SigningKey::from_password(password.as_bytes()))
        }
        (None, None) => bail!("either --prv (with --rpwd) or --pwd is required"),
    }
}

fn required<'a, T>(value: &'a Option<T>, flag: &str) -> Result<&'a T> {
    match value {
        Some(inner) => Ok(inner),
        None => bail!("{} is required for this operation", flag),
    }
}
