// -*- mode: rust; -*-
//
// This file is part of e521-dalek.
// Copyright (c) 2020-2021 The e521-dalek Authors
// See LICENSE for licensing information.

#![deny(missing_docs)]

//! # e521-dalek
//!
//! **A Rust implementation of field and group operations on the Edwards
//! curve E-521 over GF(2^521 − 1).**
//!
//! E-521 is the complete Edwards curve
//! \\(x^2 + y^2 = 1 + d x^2 y^2\\) with \\(d = -376014\\) over the field
//! of the Mersenne prime \\(p = 2^{521} - 1\\). The basepoint generates a
//! subgroup of prime order \\(r\\) with cofactor 4.
//!
//! The arithmetic here is arbitrary-precision and variable-time; no
//! constant-time claims are made for field or group operations.

// Modules for low-level operations directly on field elements and curve
// points.

pub mod edwards;
pub mod field;
pub mod scalar;

// Shared traits and miscellaneous machinery.

pub mod errors;
pub mod traits;

// Curve and field constants, including the basepoint.

pub mod constants;

pub use crate::edwards::EdwardsPoint;
pub use crate::errors::PointError;
pub use crate::field::FieldElement;
pub use crate::scalar::Scalar;
