// -*- mode: rust; -*-
//
// This file is part of sha3-dalek.
// Copyright (c) 2020-2021 The e521-dalek Authors
// See LICENSE for licensing information.

//! Known-answer tests against the published FIPS 202 and SP 800-185
//! vectors.

use sha3_dalek::{cshake256, kmacxof256, sha3, shake256};

fn check(actual: Vec<u8>, expected_hex: &str) {
    assert_eq!(hex::encode(actual), expected_hex);
}

#[test]
fn sha3_of_the_empty_string() {
    check(
        sha3(b"", 224).unwrap(),
        "6b4e03423667dbb73b6e15454f0eb1abd4597f9a1b078e3f5b5a6bc7",
    );
    check(
        sha3(b"", 256).unwrap(),
        "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a",
    );
    check(
        sha3(b"", 384).unwrap(),
        "0c63a75b845e4f7d01107d852e4c2485c51a50aaaa94fc61995e71bbee983a2a\
         c3713831264adb47fb6bd1e058d5f004",
    );
    check(
        sha3(b"", 512).unwrap(),
        "a69f73cca23a9ac5c8b567dc185a756e97c982164fe25859e0d1dcc1475c80a6\
         15b2123af1f5f94c11e3e9402c3ac558f500199d95b6d3e301758586281dcd26",
    );
}

#[test]
fn sha3_of_abc() {
    check(
        sha3(b"abc", 224).unwrap(),
        "e642824c3f8cf24ad09234ee7d3c766fc9a3a5168d0c94ad73b46fdf",
    );
    check(
        sha3(b"abc", 256).unwrap(),
        "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532",
    );
    check(
        sha3(b"abc", 384).unwrap(),
        "ec01498288516fc926459f58e2c6ad8df9b473cb0fc08c2596da7cf0e49be4b2\
         98d88cea927ac7f539f1edf228376d25",
    );
    check(
        sha3(b"abc", 512).unwrap(),
        "b751850b1a57168a5693cd924b6b096e08f621827444f70d884f5d0240d2712e\
         10e116e9192af3c91a7ec57647e3934057340b4cf408d5a56592f8274eec53f0",
    );
}

#[test]
fn shake256_of_the_empty_string() {
    check(
        shake256(b"", 256).unwrap(),
        "46b9dd2b0ba88d13233b3feb743eeb243fcd52ea62b81b82b50c27646ed5762f",
    );
    check(
        shake256(b"", 512).unwrap(),
        "46b9dd2b0ba88d13233b3feb743eeb243fcd52ea62b81b82b50c27646ed5762f\
         d75dc4ddd8c0f200cb05019d67b592f6fc821c49479ab48640292eacb3b7c4be",
    );
}

#[test]
fn shake256_of_abc() {
    check(
        shake256(b"abc", 512).unwrap(),
        "483366601360a8771c6863080cc4114d8db44530f8f1e1ee4f94ea37e78b5739\
         d5a15bef186a5386c75744c0527e1faa9f8726e462a12a4feb06bd8801e751e4",
    );
}

#[test]
fn shake256_output_is_a_prefix_chain() {
    // An XOF squeeze of n bits is a prefix of a longer squeeze.
    let short = shake256(b"prefix property", 256).unwrap();
    let long = shake256(b"prefix property", 2048).unwrap();
    assert_eq!(short, long[..32]);
}

#[test]
fn kmacxof256_sp800_185_sample_four() {
    // SP 800-185 KMACXOF256 sample #4.
    let key = hex::decode("404142434445464748494a4b4c4d4e4f505152535455565758595a5b5c5d5e5f")
        .unwrap();
    let data = hex::decode("00010203").unwrap();
    check(
        kmacxof256(&key, &data, 512, b"My Tagged Application").unwrap(),
        "1755133f1534752aad0748f2c706fb5c784512cab835cd15676b16c0c6647fa9\
         6faa7af634a0bf8ff6df39374fa00fad9a39e322a7c92065a64eb1fb0801eb2b",
    );
}

#[test]
fn cshake256_empty_strings_fall_through_to_shake256() {
    check(
        cshake256(b"", 256, b"", b"").unwrap(),
        "46b9dd2b0ba88d13233b3feb743eeb243fcd52ea62b81b82b50c27646ed5762f",
    );
}
