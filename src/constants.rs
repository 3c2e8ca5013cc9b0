// -*- mode: rust; -*-
//
// This file is part of e521-dalek.
// Copyright (c) 2020-2021 The e521-dalek Authors
// See LICENSE for licensing information.

//! Field and curve constants for E-521.
//!
//! Arbitrary-precision values cannot be `const`, so these are
//! lazily-initialized immutable statics, shared safely process-wide.

#![allow(non_snake_case)]

use num_bigint::BigInt;
use num_traits::One;
use once_cell::sync::Lazy;

use crate::edwards::EdwardsPoint;
use crate::field::FieldElement;

/// The field prime \\(p = 2^{521} - 1\\), a Mersenne prime.
pub static FIELD_PRIME: Lazy<BigInt> =
    Lazy::new(|| (BigInt::one() << 521u32) - BigInt::one());

/// The Edwards coefficient \\(d = -376014\\), as a field element.
pub static EDWARDS_D: Lazy<FieldElement> =
    Lazy::new(|| FieldElement::from(-376014));

/// The order \\(r\\) of the prime-order subgroup generated by the
/// basepoint. The curve group has order \\(4r\\); the cofactor is 4.
pub static BASEPOINT_ORDER: Lazy<BigInt> = Lazy::new(|| {
    let tail = BigInt::parse_bytes(
        b"337554763258501705789107630418782636071904961214051226618635150085779108655765",
        10,
    )
    .expect("the subgroup-order constant is valid decimal");
    (BigInt::one() << 519u32) - tail
});

/// The basepoint \\(G\\): the unique point on E-521 with \\(x = 4\\) and
/// even \\(y\\).
pub static E521_BASEPOINT_POINT: Lazy<EdwardsPoint> = Lazy::new(|| {
    EdwardsPoint::from_x(FieldElement::from(4), false)
        .expect("x = 4 decompresses to the basepoint")
});
