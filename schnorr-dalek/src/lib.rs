// -*- mode: rust; -*-
//
// This file is part of schnorr-dalek.
// Copyright (c) 2020-2021 The e521-dalek Authors
// See LICENSE for licensing information.

#![deny(missing_docs)]

//! # schnorr-dalek
//!
//! **Schnorr signatures, ECDHIES public-key encryption, and key-pair
//! persistence over the Edwards curve E-521, with KMACXOF256 as the only
//! symmetric primitive.**
//!
//! A key pair is derived deterministically from a password: the secret
//! seed is `KMACXOF256(password, "", 512, "K")`, the working scalar is
//! four times the seed's signed integer value so that every secret
//! multiplier lands in the prime-order subgroup (the curve cofactor is
//! 4), and the public key is the basepoint times that working scalar.

mod ecies;

pub mod errors;
pub mod signature;
pub mod signing;
pub mod verifying;

pub use crate::errors::Error;
pub use crate::signature::{Signature, SIGNATURE_LENGTH};
pub use crate::signing::{SigningKey, SECRET_KEY_LENGTH};
pub use crate::verifying::{VerifyingKey, PUBLIC_KEY_LENGTH};
pub use sha3_dalek::Decrypted;

/// KMACXOF256 with an output length the call sites guarantee valid.
pub(crate) fn kmac(key: &[u8], input: &[u8], output_bits: usize, customization: &[u8]) -> Vec<u8> {
    sha3_dalek::kmacxof256(key, input, output_bits, customization)
        .expect("output length is a positive multiple of 8")
}
