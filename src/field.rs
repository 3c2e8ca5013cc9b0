// -*- mode: rust; -*-
//
// This file is part of e521-dalek.
// Copyright (c) 2020-2021 The e521-dalek Authors
// See LICENSE for licensing information.

//! Field arithmetic modulo \\(p = 2^{521} - 1\\).
//!
//! Unlike a fixed-radix representation, elements here wrap a signed
//! arbitrary-precision integer, because the protocol layers above
//! interpret hash outputs and wire bytes with two's-complement sign
//! semantics. Every operation reduces its result, so the inner value is
//! always the canonical residue.

use core::ops::{Add, Mul, Neg, Sub};

use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::constants;

/// An element of GF(2^521 − 1).
///
/// Invariant: the inner integer satisfies `0 ≤ value < p`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldElement(BigInt);

impl FieldElement {
    /// The additive identity.
    pub fn zero() -> FieldElement {
        FieldElement(BigInt::zero())
    }

    /// The multiplicative identity.
    pub fn one() -> FieldElement {
        FieldElement(BigInt::one())
    }

    /// Reduce an arbitrary signed integer into the field.
    pub fn from_bigint(value: BigInt) -> FieldElement {
        FieldElement(value.mod_floor(&constants::FIELD_PRIME))
    }

    /// Borrow the canonical residue.
    pub fn as_bigint(&self) -> &BigInt {
        &self.0
    }

    /// Test for zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Test for one.
    pub fn is_one(&self) -> bool {
        self.0.is_one()
    }

    /// Compute the square of this field element.
    pub fn square(&self) -> FieldElement {
        self * self
    }

    /// Compute the multiplicative inverse by Fermat exponentiation
    /// (`p` is prime). The inverse of zero is defined to be zero.
    pub fn invert(&self) -> FieldElement {
        let p = &*constants::FIELD_PRIME;
        FieldElement(self.0.modpow(&(p - BigInt::from(2u8)), p))
    }

    /// Compute the square root with the prescribed least-significant
    /// bit, if one exists.
    ///
    /// Since \\(p \equiv 3 \pmod 4\\), a candidate root is
    /// \\(v^{(p+1)/4}\\); the candidate or its negation carries the
    /// requested bit, and squaring back detects non-residues. Zero maps
    /// to zero regardless of `lsb`.
    pub fn sqrt_with_lsb(&self, lsb: bool) -> Option<FieldElement> {
        if self.0.is_zero() {
            return Some(FieldElement::zero());
        }
        let p = &*constants::FIELD_PRIME;
        let exponent = (p + BigInt::one()) >> 2u32;
        let mut root = self.0.modpow(&exponent, p);
        if root.bit(0) != lsb {
            root = p - root;
        }
        if (&root * &root).mod_floor(p) != self.0 {
            return None;
        }
        Some(FieldElement(root))
    }

    /// The minimal signed two's-complement big-endian encoding of the
    /// residue (a non-negative value gains a leading zero byte when its
    /// top bit is set).
    pub fn to_signed_bytes_be(&self) -> Vec<u8> {
        self.0.to_signed_bytes_be()
    }

    /// Sign-extend the residue into `dst` for the fixed-width point
    /// encoding.
    pub(crate) fn write_signed_fixed(&self, dst: &mut [u8]) {
        write_signed_fixed(dst, &self.0);
    }
}

impl From<i64> for FieldElement {
    fn from(value: i64) -> FieldElement {
        FieldElement::from_bigint(BigInt::from(value))
    }
}

/// Sign-extend `value` into `dst` as big-endian two's complement.
///
/// Panics if the minimal encoding of `value` does not fit in `dst`.
pub(crate) fn write_signed_fixed(dst: &mut [u8], value: &BigInt) {
    let bytes = value.to_signed_bytes_be();
    assert!(
        bytes.len() <= dst.len(),
        "value needs {} bytes but only {} are available",
        bytes.len(),
        dst.len()
    );
    let fill = if value.sign() == Sign::Minus { 0xff } else { 0x00 };
    let split = dst.len() - bytes.len();
    dst[..split].fill(fill);
    dst[split..].copy_from_slice(&bytes);
}

// ------------------------------------------------------------------------
// Arithmetic, by reference; every result is reduced.
// ------------------------------------------------------------------------

impl<'a, 'b> Add<&'b FieldElement> for &'a FieldElement {
    type Output = FieldElement;
    fn add(self, rhs: &'b FieldElement) -> FieldElement {
        FieldElement::from_bigint(&self.0 + &rhs.0)
    }
}

impl<'a, 'b> Sub<&'b FieldElement> for &'a FieldElement {
    type Output = FieldElement;
    fn sub(self, rhs: &'b FieldElement) -> FieldElement {
        FieldElement::from_bigint(&self.0 - &rhs.0)
    }
}

impl<'a, 'b> Mul<&'b FieldElement> for &'a FieldElement {
    type Output = FieldElement;
    fn mul(self, rhs: &'b FieldElement) -> FieldElement {
        FieldElement::from_bigint(&self.0 * &rhs.0)
    }
}

impl<'a> Neg for &'a FieldElement {
    type Output = FieldElement;
    fn neg(self) -> FieldElement {
        FieldElement::from_bigint(-&self.0)
    }
}
