// -*- mode: rust; -*-
//
// This file is part of sha3-dalek.
// Copyright (c) 2020-2021 The e521-dalek Authors
// See LICENSE for licensing information.

//! The Keccak-p\[1600, 24\] permutation, NIST FIPS 202 §3.

/// The permutation state in 64-bit lanes: the lane at row \\(y\\),
/// column \\(x\\) lives at index \\(x + 5y\\) (FIPS 202 §3.1.2).
pub(crate) const LANES: usize = 25;

/// Round constants for the ι step mapping, one per round.
const ROUND_CONSTANTS: [u64; 24] = [
    0x0000000000000001, 0x0000000000008082, 0x800000000000808a, 0x8000000080008000,
    0x000000000000808b, 0x0000000080000001, 0x8000000080008081, 0x8000000000008009,
    0x000000000000008a, 0x0000000000000088, 0x0000000080008009, 0x000000008000000a,
    0x000000008000808b, 0x800000000000008b, 0x8000000000008089, 0x8000000000008003,
    0x8000000000008002, 0x8000000000000080, 0x000000000000800a, 0x800000008000000a,
    0x8000000080008081, 0x8000000000008080, 0x0000000080000001, 0x8000000080008008,
];

/// Rotation offsets for the ρ step, in the order the π lane walk visits
/// them.
const RHO_OFFSETS: [u32; 24] = [
     1,  3,  6, 10, 15, 21, 28, 36, 45, 55,  2, 14,
    27, 41, 56,  8, 25, 43, 62, 18, 39, 61, 20, 44,
];

/// Lane visitation order for the combined ρ and π steps.
const PI_LANES: [usize; 24] = [
    10,  7, 11, 17, 18,  3,  5, 16,  8, 21, 24,  4,
    15, 23, 19, 13, 12,  2, 20, 14, 22,  9,  6,  1,
];

/// Apply the Keccak-p\[1600, 24\] permutation in place.
pub fn keccak_p(state: &mut [u64; LANES]) {
    for &rc in ROUND_CONSTANTS.iter() {
        theta(state);
        rho_pi(state);
        chi(state);
        // ι (FIPS 202 §3.2.5)
        state[0] ^= rc;
    }
}

/// θ: XOR each lane with the parities of two nearby columns
/// (FIPS 202 §3.2.1).
fn theta(state: &mut [u64; LANES]) {
    let mut parity = [0u64; 5];
    for x in 0..5 {
        parity[x] = state[x] ^ state[x + 5] ^ state[x + 10] ^ state[x + 15] ^ state[x + 20];
    }
    for x in 0..5 {
        let d = parity[(x + 4) % 5] ^ parity[(x + 1) % 5].rotate_left(1);
        for y in 0..5 {
            state[x + 5 * y] ^= d;
        }
    }
}

/// ρ and π combined: rotate each lane and permute lane positions
/// (FIPS 202 §3.2.2–3).
fn rho_pi(state: &mut [u64; LANES]) {
    let mut carry = state[1];
    for (&lane, &offset) in PI_LANES.iter().zip(RHO_OFFSETS.iter()) {
        let t = state[lane];
        state[lane] = carry.rotate_left(offset);
        carry = t;
    }
}

/// χ: XOR each lane with a nonlinear function of the next two lanes in
/// its row (FIPS 202 §3.2.4).
fn chi(state: &mut [u64; LANES]) {
    for y in 0..5 {
        let row = [
            state[5 * y],
            state[5 * y + 1],
            state[5 * y + 2],
            state[5 * y + 3],
            state[5 * y + 4],
        ];
        for x in 0..5 {
            state[x + 5 * y] = row[x] ^ (!row[(x + 1) % 5] & row[(x + 2) % 5]);
        }
    }
}
