// -*- mode: rust; -*-
//
// This file is part of e521-dalek.
// Copyright (c) 2020-2021 The e521-dalek Authors
// See LICENSE for licensing information.

//! Group operations for E-521, in affine Edwards form.

use core::ops::{Add, Mul, Neg};

use num_bigint::BigInt;

use crate::constants;
use crate::errors::PointError;
use crate::field::FieldElement;
use crate::scalar::Scalar;
use crate::traits::{Identity, ValidityCheck};

/// The length in bytes of a serialized point: two 66-byte signed
/// two's-complement coordinates, x first.
pub const ENCODED_LENGTH: usize = 132;

const COORDINATE_LENGTH: usize = ENCODED_LENGTH / 2;

// ------------------------------------------------------------------------
// Affine points
// ------------------------------------------------------------------------

/// A point on E-521 in affine coordinates.
///
/// Every constructed value satisfies the curve equation
/// \\(x^2 + y^2 = 1 + d x^2 y^2\\); the decoding constructors enforce it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EdwardsPoint {
    pub(crate) x: FieldElement,
    pub(crate) y: FieldElement,
}

impl Identity for EdwardsPoint {
    fn identity() -> EdwardsPoint {
        EdwardsPoint {
            x: FieldElement::zero(),
            y: FieldElement::one(),
        }
    }
}

impl ValidityCheck for EdwardsPoint {
    fn is_valid(&self) -> bool {
        // The neutral element is accepted without evaluating the general
        // equation; everything else must satisfy it.
        if self.x.is_zero() && self.y.is_one() {
            return true;
        }
        let xx = self.x.square();
        let yy = self.y.square();
        let lhs = &xx + &yy;
        let rhs = &FieldElement::one() + &(&*constants::EDWARDS_D * &(&xx * &yy));
        lhs == rhs
    }
}

// ------------------------------------------------------------------------
// Constructors and encodings
// ------------------------------------------------------------------------

impl EdwardsPoint {
    /// Construct a point from affine coordinates, verifying the curve
    /// equation.
    pub fn from_affine(x: FieldElement, y: FieldElement) -> Result<EdwardsPoint, PointError> {
        let candidate = EdwardsPoint { x, y };
        if candidate.is_valid() {
            Ok(candidate)
        } else {
            Err(PointError::NotOnCurve)
        }
    }

    /// Decompress the point with the given x-coordinate and prescribed
    /// least-significant bit of y, solving
    /// \\(y = \sqrt{(1 - x^2) / (1 - d x^2)}\\).
    pub fn from_x(x: FieldElement, lsb: bool) -> Result<EdwardsPoint, PointError> {
        let xx = x.square();
        let numerator = &FieldElement::one() - &xx;
        let denominator = &FieldElement::one() - &(&*constants::EDWARDS_D * &xx);
        let y = (&numerator * &denominator.invert())
            .sqrt_with_lsb(lsb)
            .ok_or(PointError::NoSquareRoot)?;
        Ok(EdwardsPoint { x, y })
    }

    /// The affine x-coordinate.
    pub fn x(&self) -> &FieldElement {
        &self.x
    }

    /// The affine y-coordinate.
    pub fn y(&self) -> &FieldElement {
        &self.y
    }

    /// Serialize to the canonical 132-byte form: x then y, each as
    /// 66 bytes of sign-extended big-endian two's complement.
    pub fn to_bytes(&self) -> [u8; ENCODED_LENGTH] {
        let mut bytes = [0u8; ENCODED_LENGTH];
        self.x.write_signed_fixed(&mut bytes[..COORDINATE_LENGTH]);
        self.y.write_signed_fixed(&mut bytes[COORDINATE_LENGTH..]);
        bytes
    }

    /// Deserialize the canonical 132-byte form, validating the curve
    /// equation.
    pub fn from_bytes(bytes: &[u8]) -> Result<EdwardsPoint, PointError> {
        if bytes.len() != ENCODED_LENGTH {
            return Err(PointError::MalformedEncoding {
                name: "EdwardsPoint",
                length: bytes.len(),
            });
        }
        let x = FieldElement::from_bigint(BigInt::from_signed_bytes_be(
            &bytes[..COORDINATE_LENGTH],
        ));
        let y = FieldElement::from_bigint(BigInt::from_signed_bytes_be(
            &bytes[COORDINATE_LENGTH..],
        ));
        EdwardsPoint::from_affine(x, y)
    }
}

// ------------------------------------------------------------------------
// Group arithmetic
// ------------------------------------------------------------------------

impl<'a, 'b> Add<&'b EdwardsPoint> for &'a EdwardsPoint {
    type Output = EdwardsPoint;

    /// Complete Edwards addition:
    /// \\(x_3 = (x_1 y_2 + y_1 x_2) / (1 + d x_1 x_2 y_1 y_2)\\),
    /// \\(y_3 = (y_1 y_2 - x_1 x_2) / (1 - d x_1 x_2 y_1 y_2)\\).
    ///
    /// The shared product \\(x_1 x_2 y_1 y_2\\) is a reduced field
    /// element before it meets \\(d\\).
    fn add(self, other: &'b EdwardsPoint) -> EdwardsPoint {
        let xy = &(&self.x * &other.x) * &(&self.y * &other.y);
        let dxy = &*constants::EDWARDS_D * &xy;

        let x_numerator = &(&self.x * &other.y) + &(&self.y * &other.x);
        let x_denominator = &FieldElement::one() + &dxy;
        let y_numerator = &(&self.y * &other.y) - &(&self.x * &other.x);
        let y_denominator = &FieldElement::one() - &dxy;

        EdwardsPoint {
            x: &x_numerator * &x_denominator.invert(),
            y: &y_numerator * &y_denominator.invert(),
        }
    }
}

impl<'a> Neg for &'a EdwardsPoint {
    type Output = EdwardsPoint;

    fn neg(self) -> EdwardsPoint {
        EdwardsPoint {
            x: -&self.x,
            y: self.y.clone(),
        }
    }
}

impl Neg for EdwardsPoint {
    type Output = EdwardsPoint;

    fn neg(self) -> EdwardsPoint {
        -&self
    }
}

impl<'a, 'b> Mul<&'b Scalar> for &'a EdwardsPoint {
    type Output = EdwardsPoint;

    /// Variable-time double-and-add scalar multiplication, most
    /// significant bit first.
    ///
    /// The scalar is reduced modulo the subgroup order before use; this
    /// bounds the loop and keeps every multiplier in the prime-order
    /// subgroup arithmetic the signature scheme expects.
    fn mul(self, scalar: &'b Scalar) -> EdwardsPoint {
        let k = scalar.reduce();
        let mut result = EdwardsPoint::identity();
        for i in (0..k.bits()).rev() {
            result = &result + &result;
            if k.bit(i) {
                result = &result + self;
            }
        }
        result
    }
}

impl<'a, 'b> Mul<&'b EdwardsPoint> for &'a Scalar {
    type Output = EdwardsPoint;

    fn mul(self, point: &'b EdwardsPoint) -> EdwardsPoint {
        point * self
    }
}
