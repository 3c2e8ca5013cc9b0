// -*- mode: rust; -*-
//
// This file is part of e521-dalek.
// Copyright (c) 2020-2021 The e521-dalek Authors
// See LICENSE for licensing information.

//! Scalar multipliers for E-521 points.

use core::ops::{Add, Mul, Sub};

use num_bigint::BigInt;
use num_integer::Integer;

use crate::constants;
use crate::field::write_signed_fixed;

/// An integer used to scale curve points.
///
/// A `Scalar` carries whatever signed value it was built from, without
/// canonicalization: the protocols above feed the *unreduced*
/// cofactor-multiplied secret back into their KDF, so reduction modulo
/// the subgroup order happens only inside point multiplication and
/// through an explicit [`reduce`](Scalar::reduce).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Scalar(BigInt);

impl Scalar {
    /// Parse a signed two's-complement big-endian integer.
    pub fn from_signed_bytes_be(bytes: &[u8]) -> Scalar {
        Scalar(BigInt::from_signed_bytes_be(bytes))
    }

    /// Construct from a small unsigned value.
    pub fn from_u64(value: u64) -> Scalar {
        Scalar(BigInt::from(value))
    }

    /// Multiply by the curve cofactor (4) without reducing.
    pub fn mul_by_cofactor(&self) -> Scalar {
        Scalar(&self.0 * BigInt::from(4u8))
    }

    /// The canonical representative modulo the subgroup order \\(r\\),
    /// non-negative even for negative inputs.
    pub fn reduce(&self) -> Scalar {
        Scalar(self.0.mod_floor(&constants::BASEPOINT_ORDER))
    }

    /// The minimal signed two's-complement big-endian encoding.
    pub fn to_signed_bytes_be(&self) -> Vec<u8> {
        self.0.to_signed_bytes_be()
    }

    /// Sign-extend the value into exactly `length` bytes.
    ///
    /// Panics if the minimal encoding is longer than `length`.
    pub fn to_signed_bytes_fixed(&self, length: usize) -> Vec<u8> {
        let mut out = vec![0u8; length];
        write_signed_fixed(&mut out, &self.0);
        out
    }

    /// The bit length of the value.
    pub(crate) fn bits(&self) -> u64 {
        self.0.bits()
    }

    /// Test a bit of the value.
    pub(crate) fn bit(&self, index: u64) -> bool {
        self.0.bit(index)
    }
}

impl<'a, 'b> Add<&'b Scalar> for &'a Scalar {
    type Output = Scalar;
    fn add(self, rhs: &'b Scalar) -> Scalar {
        Scalar(&self.0 + &rhs.0)
    }
}

impl<'a, 'b> Sub<&'b Scalar> for &'a Scalar {
    type Output = Scalar;
    fn sub(self, rhs: &'b Scalar) -> Scalar {
        Scalar(&self.0 - &rhs.0)
    }
}

impl<'a, 'b> Mul<&'b Scalar> for &'a Scalar {
    type Output = Scalar;
    fn mul(self, rhs: &'b Scalar) -> Scalar {
        Scalar(&self.0 * &rhs.0)
    }
}
