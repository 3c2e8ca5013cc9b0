// -*- mode: rust; -*-
//
// This file is part of schnorr-dalek.
// Copyright (c) 2020-2021 The e521-dalek Authors
// See LICENSE for licensing information.

//! The Schnorr signature type and its fixed 129-byte wire form.

use e521_dalek::Scalar;

use crate::errors::{Error, InternalError};

/// The length in bytes of a serialized signature: a 64-byte tagged hash
/// followed by a 65-byte response scalar, both big-endian signed
/// two's complement.
pub const SIGNATURE_LENGTH: usize = 129;

pub(crate) const H_LENGTH: usize = 64;
pub(crate) const Z_LENGTH: usize = SIGNATURE_LENGTH - H_LENGTH;

/// A Schnorr signature `(h, z)`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Signature {
    /// The tagged hash binding the commitment's x-coordinate to the
    /// message; kept as the raw XOF output.
    pub(crate) h: [u8; H_LENGTH],
    /// The response scalar, reduced modulo the subgroup order and
    /// sign-extended to 65 bytes.
    pub(crate) z: [u8; Z_LENGTH],
}

impl Signature {
    pub(crate) fn from_parts(h: [u8; H_LENGTH], z: &Scalar) -> Signature {
        let mut z_bytes = [0u8; Z_LENGTH];
        z_bytes.copy_from_slice(&z.to_signed_bytes_fixed(Z_LENGTH));
        Signature { h, z: z_bytes }
    }

    /// Serialize to `h ‖ z`, exactly [`SIGNATURE_LENGTH`] bytes.
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LENGTH] {
        let mut bytes = [0u8; SIGNATURE_LENGTH];
        bytes[..H_LENGTH].copy_from_slice(&self.h);
        bytes[H_LENGTH..].copy_from_slice(&self.z);
        bytes
    }

    /// Parse a signature from exactly [`SIGNATURE_LENGTH`] bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Signature, Error> {
        if bytes.len() != SIGNATURE_LENGTH {
            return Err(InternalError::BytesLength {
                name: "Signature",
                length: bytes.len(),
            }
            .into());
        }
        let mut h = [0u8; H_LENGTH];
        let mut z = [0u8; Z_LENGTH];
        h.copy_from_slice(&bytes[..H_LENGTH]);
        z.copy_from_slice(&bytes[H_LENGTH..]);
        Ok(Signature { h, z })
    }

    /// The tagged hash as a signed scalar.
    pub(crate) fn h_scalar(&self) -> Scalar {
        Scalar::from_signed_bytes_be(&self.h)
    }

    /// The response as a signed scalar.
    pub(crate) fn z_scalar(&self) -> Scalar {
        Scalar::from_signed_bytes_be(&self.z)
    }
}
