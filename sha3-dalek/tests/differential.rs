// -*- mode: rust; -*-
//
// This file is part of sha3-dalek.
// Copyright (c) 2020-2021 The e521-dalek Authors
// See LICENSE for licensing information.

//! Differential conformance tests against the RustCrypto `sha3` crate.
//!
//! Message lengths 0..=200 cross every padding case at the SHA3 and
//! SHAKE rates (including the merged-final-bit case one byte below a
//! rate boundary), standing in for the CAVP short-message corpus.

use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::Digest;

/// The NIST pattern bytes 0x00, 0x01, ... used by the CAVP fixtures.
fn pattern(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8).collect()
}

#[test]
fn sha3_224_matches_the_reference() {
    for len in 0..=200 {
        let msg = pattern(len);
        let ours = sha3_dalek::sha3(&msg, 224).unwrap();
        let theirs = sha3::Sha3_224::digest(&msg);
        assert_eq!(ours.as_slice(), theirs.as_slice(), "length {}", len);
    }
}

#[test]
fn sha3_256_matches_the_reference() {
    for len in 0..=200 {
        let msg = pattern(len);
        let ours = sha3_dalek::sha3(&msg, 256).unwrap();
        let theirs = sha3::Sha3_256::digest(&msg);
        assert_eq!(ours.as_slice(), theirs.as_slice(), "length {}", len);
    }
}

#[test]
fn sha3_384_matches_the_reference() {
    for len in 0..=200 {
        let msg = pattern(len);
        let ours = sha3_dalek::sha3(&msg, 384).unwrap();
        let theirs = sha3::Sha3_384::digest(&msg);
        assert_eq!(ours.as_slice(), theirs.as_slice(), "length {}", len);
    }
}

#[test]
fn sha3_512_matches_the_reference() {
    for len in 0..=200 {
        let msg = pattern(len);
        let ours = sha3_dalek::sha3(&msg, 512).unwrap();
        let theirs = sha3::Sha3_512::digest(&msg);
        assert_eq!(ours.as_slice(), theirs.as_slice(), "length {}", len);
    }
}

#[test]
fn shake256_matches_the_reference() {
    for len in 0..=200 {
        let msg = pattern(len);
        let ours = sha3_dalek::shake256(&msg, 512).unwrap();

        let mut hasher = sha3::Shake256::default();
        hasher.update(&msg);
        let mut theirs = [0u8; 64];
        hasher.finalize_xof().read(&mut theirs);

        assert_eq!(ours.as_slice(), theirs.as_slice(), "length {}", len);
    }
}

#[test]
fn shake256_matches_the_reference_across_output_lengths() {
    let msg = pattern(137);
    for out_len in [1usize, 17, 32, 64, 135, 136, 137, 272, 500] {
        let ours = sha3_dalek::shake256(&msg, out_len * 8).unwrap();

        let mut hasher = sha3::Shake256::default();
        hasher.update(&msg);
        let mut theirs = vec![0u8; out_len];
        hasher.finalize_xof().read(&mut theirs);

        assert_eq!(ours, theirs, "output length {}", out_len);
    }
}
