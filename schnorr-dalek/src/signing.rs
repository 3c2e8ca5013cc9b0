// -*- mode: rust; -*-
//
// This file is part of schnorr-dalek.
// Copyright (c) 2020-2021 The e521-dalek Authors
// See LICENSE for licensing information.

//! Signing keys: password derivation, Schnorr signing, ECDHIES
//! decryption, and encrypted persistence.

use core::fmt;
use core::fmt::Debug;
use std::fs;
use std::path::Path;

use rand_core::CryptoRngCore;
use zeroize::Zeroize;

use e521_dalek::constants::E521_BASEPOINT_POINT;
use e521_dalek::Scalar;
use sha3_dalek::kcrypt;
use sha3_dalek::{CipherError, Decrypted};

use crate::ecies;
use crate::errors::{Error, InternalError};
use crate::kmac;
use crate::signature::{Signature, H_LENGTH};
use crate::verifying::VerifyingKey;

/// The length in bytes of the secret seed derived from a password.
pub const SECRET_KEY_LENGTH: usize = 64;

/// An E-521 signing key.
///
/// Holds the password-derived secret seed, the working scalar `4·s`
/// (kept unreduced; point multiplication reduces modulo the subgroup
/// order internally), and the corresponding public key.
pub struct SigningKey {
    /// `KMACXOF256(password, "", 512, "K")`.
    pub(crate) prv_bytes: [u8; SECRET_KEY_LENGTH],
    /// The working scalar `4·s`.
    pub(crate) scalar: Scalar,
    pub(crate) verifying_key: VerifyingKey,
}

impl Drop for SigningKey {
    fn drop(&mut self) {
        // The seed is the recoverable secret; the BigInt-backed scalar
        // offers no wiping facility and is documented as such.
        self.prv_bytes.zeroize();
    }
}

impl Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SigningKey {{ verifying_key: {:?}, .. }}", self.verifying_key)
    }
}

impl PartialEq for SigningKey {
    /// Key pairs are equal when both the secret seed and the public
    /// point agree.
    fn eq(&self, other: &SigningKey) -> bool {
        self.prv_bytes == other.prv_bytes && self.verifying_key == other.verifying_key
    }
}

impl Eq for SigningKey {}

impl SigningKey {
    /// Derive a key pair from a password.
    ///
    /// The secret integer `s = int(prv_bytes)` is premultiplied by the
    /// cofactor at load; the working scalar `4·s` is what signs,
    /// decrypts, and generates the public point, so the whole key pair
    /// lives in the prime-order subgroup.
    pub fn from_password(password: &[u8]) -> SigningKey {
        let derived = kmac(password, &[], 8 * SECRET_KEY_LENGTH, b"K");
        let mut prv_bytes = [0u8; SECRET_KEY_LENGTH];
        prv_bytes.copy_from_slice(&derived);
        SigningKey::from_seed(prv_bytes)
    }

    fn from_seed(prv_bytes: [u8; SECRET_KEY_LENGTH]) -> SigningKey {
        let scalar = Scalar::from_signed_bytes_be(&prv_bytes).mul_by_cofactor();
        let point = &*E521_BASEPOINT_POINT * &scalar;
        SigningKey {
            prv_bytes,
            scalar,
            verifying_key: VerifyingKey::from_point(point),
        }
    }

    /// The corresponding public key.
    pub fn verifying_key(&self) -> &VerifyingKey {
        &self.verifying_key
    }

    /// Sign `message` with this key.
    ///
    /// The per-signature nonce is derived from the working scalar and
    /// the message, so signing is deterministic for a given key.
    pub fn sign(&self, message: &[u8]) -> Signature {
        let k_bytes = kmac(&self.scalar.to_signed_bytes_be(), message, 512, b"N");
        let k = Scalar::from_signed_bytes_be(&k_bytes).mul_by_cofactor();

        let u = &*E521_BASEPOINT_POINT * &k;
        let h_bytes = kmac(&u.x().to_signed_bytes_be(), message, 512, b"T");
        let mut h = [0u8; H_LENGTH];
        h.copy_from_slice(&h_bytes);

        let h_scalar = Scalar::from_signed_bytes_be(&h);
        let z = (&k - &(&h_scalar * &self.scalar)).reduce();
        Signature::from_parts(h, &z)
    }

    /// ECDHIES decryption of `record` with this key's working scalar.
    ///
    /// A tag mismatch is reported through the [`Decrypted`] flag; only a
    /// structurally broken record is an error.
    pub fn decrypt(&self, record: &[u8]) -> Result<Decrypted, Error> {
        ecies::decrypt(&self.scalar, record)
    }

    /// Encrypt the secret seed under `file_password` and write the
    /// resulting cipher record to `path`.
    pub fn write_encrypted<R: CryptoRngCore + ?Sized>(
        &self,
        path: impl AsRef<Path>,
        file_password: &[u8],
        csprng: &mut R,
    ) -> Result<(), Error> {
        let record = kcrypt::encrypt(file_password, &self.prv_bytes, csprng);
        fs::write(path, record)?;
        Ok(())
    }

    /// Read an encrypted secret seed from `path` and rebuild the key
    /// pair.
    ///
    /// Fails with an authentication error when the record's tag does not
    /// verify under `file_password`; the stored key may be corrupted, or
    /// the password wrong.
    pub fn read_encrypted(
        path: impl AsRef<Path>,
        file_password: &[u8],
    ) -> Result<SigningKey, Error> {
        let record = fs::read(path)?;
        let decrypted = kcrypt::decrypt(file_password, &record).map_err(
            |CipherError::MalformedRecord(length)| InternalError::MalformedRecord { length },
        )?;
        if !decrypted.is_valid() {
            return Err(InternalError::AuthFailed.into());
        }

        let bytes = decrypted.into_bytes();
        if bytes.len() != SECRET_KEY_LENGTH {
            return Err(InternalError::BytesLength {
                name: "SecretKey",
                length: bytes.len(),
            }
            .into());
        }
        let mut prv_bytes = [0u8; SECRET_KEY_LENGTH];
        prv_bytes.copy_from_slice(&bytes);
        Ok(SigningKey::from_seed(prv_bytes))
    }
}
