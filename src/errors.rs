// -*- mode: rust; -*-
//
// This file is part of e521-dalek.
// Copyright (c) 2020-2021 The e521-dalek Authors
// See LICENSE for licensing information.

//! Errors which may occur while constructing or decoding curve points.

use core::fmt;
use core::fmt::Display;

/// Reasons a coordinate pair or byte string fails to produce a point.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PointError {
    /// The coordinate pair does not satisfy the curve equation.
    NotOnCurve,
    /// No square root exists for the requested x-coordinate.
    NoSquareRoot,
    /// An error in the length of bytes handed to a decoder.
    ///
    /// `name` identifies the type being decoded and `length` is the
    /// number of bytes actually provided.
    MalformedEncoding {
        /// The type that failed to decode.
        name: &'static str,
        /// The offending length in bytes.
        length: usize,
    },
}

impl Display for PointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PointError::NotOnCurve => write!(f, "Coordinate pair is not a point on E-521"),
            PointError::NoSquareRoot => {
                write!(f, "No square root exists for the provided x-coordinate")
            }
            PointError::MalformedEncoding { name, length } => {
                write!(f, "{} cannot be decoded from {} bytes", name, length)
            }
        }
    }
}

impl std::error::Error for PointError {}
