// -*- mode: rust; -*-
//
// This file is part of schnorr-dalek.
// Copyright (c) 2020-2021 The e521-dalek Authors
// See LICENSE for licensing information.

//! ECDHIES encryption and decryption.
//!
//! A record is `Z ‖ ciphertext ‖ tag`: the encoded ephemeral public
//! point (132 bytes), a ciphertext as long as the plaintext, and a
//! 64-byte tag over the plaintext. The session secret is the
//! x-coordinate of the Diffie-Hellman share `W`.

use rand_core::CryptoRngCore;
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use e521_dalek::constants::E521_BASEPOINT_POINT;
use e521_dalek::edwards::{EdwardsPoint, ENCODED_LENGTH};
use e521_dalek::Scalar;
use sha3_dalek::Decrypted;

use crate::errors::{Error, InternalError};
use crate::kmac;

const TAG_LENGTH: usize = 64;
const MIN_RECORD_LENGTH: usize = ENCODED_LENGTH + TAG_LENGTH;

pub(crate) fn encrypt<R: CryptoRngCore + ?Sized>(
    public_point: &EdwardsPoint,
    plaintext: &[u8],
    csprng: &mut R,
) -> Vec<u8> {
    // 65 random bytes with the leading byte cleared, so the ephemeral
    // scalar parses as a non-negative 512-bit integer; the cofactor
    // multiple then lands it in the prime-order subgroup.
    let mut seed = [0u8; 65];
    csprng.fill_bytes(&mut seed);
    seed[0] = 0x00;
    let k = Scalar::from_signed_bytes_be(&seed).mul_by_cofactor();
    seed.zeroize();

    let w = public_point * &k;
    let z = &*E521_BASEPOINT_POINT * &k;

    let mut keys = kmac(&w.x().to_signed_bytes_be(), &[], 1024, b"P");
    let (key1, key2) = keys.split_at(64);

    let ciphertext = apply_keystream(key1, plaintext);
    let tag = kmac(key2, plaintext, 512, b"PKA");
    keys.zeroize();

    let mut record = Vec::with_capacity(ENCODED_LENGTH + ciphertext.len() + TAG_LENGTH);
    record.extend_from_slice(&z.to_bytes());
    record.extend_from_slice(&ciphertext);
    record.extend_from_slice(&tag);
    record
}

pub(crate) fn decrypt(scalar: &Scalar, record: &[u8]) -> Result<Decrypted, Error> {
    if record.len() < MIN_RECORD_LENGTH {
        return Err(InternalError::MalformedRecord {
            length: record.len(),
        }
        .into());
    }
    let (z_bytes, rest) = record.split_at(ENCODED_LENGTH);
    let (ciphertext, tag) = rest.split_at(rest.len() - TAG_LENGTH);

    let z = EdwardsPoint::from_bytes(z_bytes)?;
    let w = &z * scalar;

    let mut keys = kmac(&w.x().to_signed_bytes_be(), &[], 1024, b"P");
    let (key1, key2) = keys.split_at(64);

    let plaintext = apply_keystream(key1, ciphertext);
    let expected = kmac(key2, &plaintext, 512, b"PKA");
    let valid = bool::from(expected.as_slice().ct_eq(tag));
    keys.zeroize();

    Ok(Decrypted::new(valid, plaintext))
}

/// XOR `data` against a KMAC keystream under the "PKE" customization;
/// the empty input short-circuits the zero-bit squeeze.
fn apply_keystream(key: &[u8], data: &[u8]) -> Vec<u8> {
    if data.is_empty() {
        return Vec::new();
    }
    let mut mask = kmac(key, &[], 8 * data.len(), b"PKE");
    let out = mask.iter().zip(data).map(|(m, d)| m ^ d).collect();
    mask.zeroize();
    out
}
