// -*- mode: rust; -*-
//
// This file is part of sha3-dalek.
// Copyright (c) 2020-2021 The e521-dalek Authors
// See LICENSE for licensing information.

//! Password-keyed authenticated encryption over KMACXOF256.
//!
//! A cipher record is `nonce ‖ ciphertext ‖ tag`: a 64-byte random
//! nonce, a ciphertext exactly as long as the plaintext, and a 64-byte
//! authentication tag computed over the plaintext.

use rand_core::CryptoRngCore;
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use crate::errors::CipherError;
use crate::kmacxof256;

/// Length in bytes of the random nonce leading a cipher record.
pub const NONCE_LENGTH: usize = 64;
/// Length in bytes of the authentication tag trailing a cipher record.
pub const TAG_LENGTH: usize = 64;

/// The output of an authenticated decryption: the recovered bytes plus
/// the result of the tag comparison.
///
/// A failed comparison is data, not an error; the caller decides whether
/// to honor the plaintext.
#[derive(Clone, Debug)]
pub struct Decrypted {
    valid: bool,
    plaintext: Vec<u8>,
}

impl Decrypted {
    /// Package a decryption result.
    pub fn new(valid: bool, plaintext: Vec<u8>) -> Decrypted {
        Decrypted { valid, plaintext }
    }

    /// Whether the recomputed tag matched the transmitted one.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// View the recovered plaintext.
    pub fn as_bytes(&self) -> &[u8] {
        &self.plaintext
    }

    /// Consume the result, returning the recovered plaintext.
    pub fn into_bytes(self) -> Vec<u8> {
        self.plaintext
    }
}

/// Encrypt `plaintext` under `password`, returning the cipher record
/// `nonce ‖ ciphertext ‖ tag`.
pub fn encrypt<R: CryptoRngCore + ?Sized>(
    password: &[u8],
    plaintext: &[u8],
    csprng: &mut R,
) -> Vec<u8> {
    let mut nonce = [0u8; NONCE_LENGTH];
    csprng.fill_bytes(&mut nonce);

    let mut keyed = Vec::with_capacity(NONCE_LENGTH + password.len());
    keyed.extend_from_slice(&nonce);
    keyed.extend_from_slice(password);
    let mut keys = kmac(&keyed, &[], 1024, b"S");
    let (key1, key2) = keys.split_at(64);

    let ciphertext = apply_keystream(key1, b"SKE", plaintext);
    let tag = kmac(key2, plaintext, 512, b"SKA");
    keys.zeroize();

    let mut record = Vec::with_capacity(NONCE_LENGTH + ciphertext.len() + TAG_LENGTH);
    record.extend_from_slice(&nonce);
    record.extend_from_slice(&ciphertext);
    record.extend_from_slice(&tag);
    record
}

/// Decrypt a cipher record under `password`.
///
/// Returns [`CipherError::MalformedRecord`] when the record cannot even
/// carry a nonce and tag; a tag mismatch is reported through the
/// [`Decrypted`] flag instead.
pub fn decrypt(password: &[u8], record: &[u8]) -> Result<Decrypted, CipherError> {
    if record.len() < NONCE_LENGTH + TAG_LENGTH {
        return Err(CipherError::MalformedRecord(record.len()));
    }
    let (nonce, rest) = record.split_at(NONCE_LENGTH);
    let (ciphertext, tag) = rest.split_at(rest.len() - TAG_LENGTH);

    let mut keyed = Vec::with_capacity(NONCE_LENGTH + password.len());
    keyed.extend_from_slice(nonce);
    keyed.extend_from_slice(password);
    let mut keys = kmac(&keyed, &[], 1024, b"S");
    let (key1, key2) = keys.split_at(64);

    let plaintext = apply_keystream(key1, b"SKE", ciphertext);
    let expected = kmac(key2, &plaintext, 512, b"SKA");
    let valid = bool::from(expected.as_slice().ct_eq(tag));
    keys.zeroize();

    Ok(Decrypted::new(valid, plaintext))
}

/// XOR `data` against a KMAC keystream of the same length.
///
/// The empty input short-circuits: a zero-bit squeeze is not a valid
/// request, and the empty message has an empty ciphertext anyway.
fn apply_keystream(key: &[u8], customization: &[u8], data: &[u8]) -> Vec<u8> {
    if data.is_empty() {
        return Vec::new();
    }
    let mut mask = kmac(key, &[], 8 * data.len(), customization);
    let out = mask.iter().zip(data).map(|(m, d)| m ^ d).collect();
    mask.zeroize();
    out
}

fn kmac(key: &[u8], input: &[u8], output_bits: usize, customization: &[u8]) -> Vec<u8> {
    kmacxof256(key, input, output_bits, customization)
        .expect("output length is a positive multiple of 8")
}
