// -*- mode: rust; -*-
//
// This file is part of schnorr-dalek.
// Copyright (c) 2020-2021 The e521-dalek Authors
// See LICENSE for licensing information.

//! Public keys: signature verification, ECDHIES encryption, and the
//! canonical on-disk form.

use std::fs;
use std::path::Path;

use rand_core::CryptoRngCore;

use e521_dalek::constants::E521_BASEPOINT_POINT;
use e521_dalek::edwards::{EdwardsPoint, ENCODED_LENGTH};

use crate::ecies;
use crate::errors::Error;
use crate::kmac;
use crate::signature::Signature;

/// The length in bytes of a serialized public key.
pub const PUBLIC_KEY_LENGTH: usize = ENCODED_LENGTH;

/// An E-521 public key: the variable point `V = G·s` of a key pair.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VerifyingKey {
    pub(crate) point: EdwardsPoint,
}

impl VerifyingKey {
    pub(crate) fn from_point(point: EdwardsPoint) -> VerifyingKey {
        VerifyingKey { point }
    }

    /// Borrow the underlying curve point.
    pub fn as_point(&self) -> &EdwardsPoint {
        &self.point
    }

    /// Serialize to the canonical 132-byte form.
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_LENGTH] {
        self.point.to_bytes()
    }

    /// Parse a canonical 132-byte public key, validating that the point
    /// lies on the curve.
    pub fn from_bytes(bytes: &[u8]) -> Result<VerifyingKey, Error> {
        Ok(VerifyingKey {
            point: EdwardsPoint::from_bytes(bytes)?,
        })
    }

    /// Verify a Schnorr signature over `message`.
    ///
    /// Recomputes the commitment as `U' = G·z + V·h` and accepts iff the
    /// tagged hash of `U'` and the message equals the signature's `h`.
    pub fn verify(&self, message: &[u8], signature: &Signature) -> bool {
        let u = &(&*E521_BASEPOINT_POINT * &signature.z_scalar())
            + &(&self.point * &signature.h_scalar());
        let h = kmac(&u.x().to_signed_bytes_be(), message, 512, b"T");
        h[..] == signature.h[..]
    }

    /// ECDHIES encryption of `plaintext` under this public key.
    pub fn encrypt<R: CryptoRngCore + ?Sized>(
        &self,
        plaintext: &[u8],
        csprng: &mut R,
    ) -> Vec<u8> {
        ecies::encrypt(&self.point, plaintext, csprng)
    }

    /// Write the canonical public-key bytes to `path`.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        fs::write(path, self.to_bytes())?;
        Ok(())
    }

    /// Read a canonical public key from `path`.
    pub fn read_from(path: impl AsRef<Path>) -> Result<VerifyingKey, Error> {
        let bytes = fs::read(path)?;
        VerifyingKey::from_bytes(&bytes)
    }
}
