// -*- mode: rust; -*-
//
// This file is part of e521-dalek.
// Copyright (c) 2020-2021 The e521-dalek Authors
// See LICENSE for licensing information.

use criterion::{criterion_group, criterion_main, Criterion};

use e521_dalek::constants::E521_BASEPOINT_POINT;
use e521_dalek::Scalar;

fn basepoint_mult(c: &mut Criterion) {
    let k = Scalar::from_signed_bytes_be(&[0x5a; 64]);
    c.bench_function("E-521 basepoint multiplication", |b| {
        b.iter(|| &*E521_BASEPOINT_POINT * &k)
    });
}

fn point_addition(c: &mut Criterion) {
    let g = &*E521_BASEPOINT_POINT;
    let h = g + g;
    c.bench_function("E-521 point addition", |b| b.iter(|| g + &h));
}

criterion_group!(benches, basepoint_mult, point_addition);
criterion_main!(benches);
