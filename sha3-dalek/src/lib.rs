// -*- mode: rust; -*-
//
// This file is part of sha3-dalek.
// Copyright (c) 2020-2021 The e521-dalek Authors
// See LICENSE for licensing information.

#![deny(missing_docs)]

//! # sha3-dalek
//!
//! **A pure-Rust implementation of the Keccak-p\[1600, 24\] permutation,
//! the NIST FIPS 202 and SP 800-185 derived functions, and a
//! KMACXOF256-based authenticated cipher.**
//!
//! The derived functions buffer their input in full; there is no
//! incremental API. All of them are plain functions of their inputs and
//! are safe to call from any number of threads.

pub mod encoding;
pub mod errors;
pub mod kcrypt;
pub mod keccak;
mod sponge;

pub use crate::errors::{CipherError, HashError};
pub use crate::kcrypt::Decrypted;

use crate::encoding::{bytepad, encode_string, right_encode};
use crate::sponge::sponge;

/// Domain suffix for the SHA3 fixed-output functions (FIPS 202 §6.1).
const SHA3_SUFFIX: u8 = 0x06;
/// Domain suffix for the SHAKE XOFs (FIPS 202 §6.2).
const SHAKE_SUFFIX: u8 = 0x1f;
/// Domain suffix for cSHAKE with a non-empty name or customization
/// (SP 800-185 §3.3).
const CSHAKE_SUFFIX: u8 = 0x04;

/// Sponge capacity for the 256-bit-strength XOFs.
const XOF_CAPACITY: usize = 512;
/// The `bytepad` width for cSHAKE256: its rate in bytes.
const CSHAKE_RATE_BYTES: usize = 136;

/// Compute a SHA3 digest of `input`.
///
/// `output_bits` selects the variant and must be one of 224, 256, 384,
/// or 512; anything else is an [`HashError::InvalidLength`].
pub fn sha3(input: &[u8], output_bits: usize) -> Result<Vec<u8>, HashError> {
    match output_bits {
        224 | 256 | 384 | 512 => {}
        _ => return Err(HashError::InvalidLength(output_bits)),
    }
    let mut m = Vec::with_capacity(input.len() + 1);
    m.extend_from_slice(input);
    m.push(SHA3_SUFFIX);
    Ok(sponge(&m, output_bits, 2 * output_bits))
}

/// Compute `output_bits` bits of SHAKE256 output over `input`.
pub fn shake256(input: &[u8], output_bits: usize) -> Result<Vec<u8>, HashError> {
    check_xof_length(output_bits)?;
    let mut m = Vec::with_capacity(input.len() + 1);
    m.extend_from_slice(input);
    m.push(SHAKE_SUFFIX);
    Ok(sponge(&m, output_bits, XOF_CAPACITY))
}

/// Compute `output_bits` bits of cSHAKE256 output over `input`, domain
/// separated by `function_name` and `customization`.
///
/// With both strings empty this is exactly [`shake256`] (SP 800-185
/// §3.3).
pub fn cshake256(
    input: &[u8],
    output_bits: usize,
    function_name: &[u8],
    customization: &[u8],
) -> Result<Vec<u8>, HashError> {
    if function_name.is_empty() && customization.is_empty() {
        return shake256(input, output_bits);
    }
    check_xof_length(output_bits)?;

    let mut prefix = encode_string(function_name);
    prefix.extend_from_slice(&encode_string(customization));

    let mut m = bytepad(&prefix, CSHAKE_RATE_BYTES);
    m.extend_from_slice(input);
    m.push(CSHAKE_SUFFIX);
    Ok(sponge(&m, output_bits, XOF_CAPACITY))
}

/// Compute `output_bits` bits of KMACXOF256 output over `input` under
/// `key` (SP 800-185 §4.3.1, arbitrary-length-output variant).
pub fn kmacxof256(
    key: &[u8],
    input: &[u8],
    output_bits: usize,
    customization: &[u8],
) -> Result<Vec<u8>, HashError> {
    let mut m = bytepad(&encode_string(key), CSHAKE_RATE_BYTES);
    m.extend_from_slice(input);
    m.extend_from_slice(&right_encode(0));
    cshake256(&m, output_bits, b"KMAC", customization)
}

fn check_xof_length(output_bits: usize) -> Result<(), HashError> {
    if output_bits == 0 || output_bits % 8 != 0 {
        return Err(HashError::InvalidLength(output_bits));
    }
    Ok(())
}
