// -*- mode: rust; -*-
//
// This file is part of sha3-dalek.
// Copyright (c) 2020-2021 The e521-dalek Authors
// See LICENSE for licensing information.

//! Integer and string encodings from NIST SP 800-185 §2.3.

/// `left_encode(x)`: the minimal big-endian encoding of `x`, preceded by
/// its byte count (one zero byte for `x = 0`).
pub fn left_encode(x: u64) -> Vec<u8> {
    let body = minimal_be_bytes(x);
    let mut out = Vec::with_capacity(body.len() + 1);
    out.push(body.len() as u8);
    out.extend_from_slice(&body);
    out
}

/// `right_encode(x)`: the minimal big-endian encoding of `x`, followed by
/// its byte count.
pub fn right_encode(x: u64) -> Vec<u8> {
    let body = minimal_be_bytes(x);
    let mut out = Vec::with_capacity(body.len() + 1);
    out.extend_from_slice(&body);
    out.push(body.len() as u8);
    out
}

/// `encode_string(s) = left_encode(8·|s|) ‖ s`.
pub fn encode_string(s: &[u8]) -> Vec<u8> {
    let mut out = left_encode((s.len() as u64) * 8);
    out.extend_from_slice(s);
    out
}

/// `bytepad(s, w)`: prefix `s` with `left_encode(w)` and zero-fill the
/// result to a multiple of `w` bytes.
pub fn bytepad(s: &[u8], w: usize) -> Vec<u8> {
    let mut out = left_encode(w as u64);
    out.extend_from_slice(s);
    let rem = out.len() % w;
    if rem != 0 {
        out.resize(out.len() + w - rem, 0);
    }
    out
}

/// Strip leading zero bytes down to at most seven, so zero still encodes
/// as a single byte.
fn minimal_be_bytes(x: u64) -> Vec<u8> {
    let bytes = x.to_be_bytes();
    let skip = bytes.iter().take_while(|&&b| b == 0).count().min(7);
    bytes[skip..].to_vec()
}
