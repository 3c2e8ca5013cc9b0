// -*- mode: rust; -*-
//
// This file is part of sha3-dalek.
// Copyright (c) 2020-2021 The e521-dalek Authors
// See LICENSE for licensing information.

//! The sponge construction over Keccak-p\[1600, 24\] (FIPS 202 §4).

use crate::keccak::{keccak_p, LANES};

/// Absorb `input` at the given capacity and squeeze out `output_bits`
/// bits.
///
/// The caller has already appended the domain-separation suffix byte to
/// `input`, and guarantees `output_bits` is a positive multiple of 8
/// (the derived functions check before calling). Lanes are loaded and
/// emitted little-endian.
pub(crate) fn sponge(input: &[u8], output_bits: usize, capacity: usize) -> Vec<u8> {
    debug_assert!(output_bits > 0 && output_bits % 8 == 0);
    debug_assert!(capacity % 64 == 0 && capacity < 1600);

    let rate_bytes = (1600 - capacity) / 8;
    let padded = pad_ten_one(input.to_vec(), rate_bytes);

    let mut state = [0u64; LANES];
    for block in padded.chunks_exact(rate_bytes) {
        for (lane, bytes) in state.iter_mut().zip(block.chunks_exact(8)) {
            let mut word = [0u8; 8];
            word.copy_from_slice(bytes);
            *lane ^= u64::from_le_bytes(word);
        }
        keccak_p(&mut state);
    }

    let output_len = output_bits / 8;
    let mut output = Vec::with_capacity(output_len + rate_bytes);
    loop {
        for lane in state.iter().take(rate_bytes / 8) {
            output.extend_from_slice(&lane.to_le_bytes());
        }
        if output.len() >= output_len {
            break;
        }
        keccak_p(&mut state);
    }
    output.truncate(output_len);
    output
}

/// Byte-oriented pad10*1 (FIPS 202 §5.1).
///
/// The first padding bit is carried by the caller's suffix byte, so the
/// residual work is zero-fill to the next rate boundary plus the final
/// `1` bit. When the suffixed input already sits on a boundary, that
/// final bit merges into the last byte instead of opening a new block.
fn pad_ten_one(mut input: Vec<u8>, rate_bytes: usize) -> Vec<u8> {
    debug_assert!(!input.is_empty(), "domain suffix must be present");
    let rem = input.len() % rate_bytes;
    if rem != 0 {
        input.resize(input.len() + rate_bytes - rem, 0);
    }
    let last = input.len() - 1;
    input[last] |= 0x80;
    input
}
