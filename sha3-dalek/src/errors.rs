// -*- mode: rust; -*-
//
// This file is part of sha3-dalek.
// Copyright (c) 2020-2021 The e521-dalek Authors
// See LICENSE for licensing information.

//! Errors for the Keccak-derived functions and the symmetric cipher.

use core::fmt;
use core::fmt::Display;

/// Errors raised by the FIPS 202 / SP 800-185 derived functions.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum HashError {
    /// The requested output length in bits is zero, not a multiple of 8,
    /// or (for SHA3) outside {224, 256, 384, 512}.
    InvalidLength(usize),
}

impl Display for HashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            HashError::InvalidLength(bits) => {
                write!(f, "{} is not a valid output length in bits", bits)
            }
        }
    }
}

impl std::error::Error for HashError {}

/// Errors raised while parsing an authenticated-cipher record.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CipherError {
    /// The record is shorter than the nonce and tag it must carry.
    MalformedRecord(usize),
}

impl Display for CipherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            CipherError::MalformedRecord(length) => {
                write!(f, "cipher record of {} bytes is too short", length)
            }
        }
    }
}

impl std::error::Error for CipherError {}
