// -*- mode: rust; -*-
//
// This file is part of schnorr-dalek.
// Copyright (c) 2020-2021 The e521-dalek Authors
// See LICENSE for licensing information.

//! Errors which may occur when processing keys, records, and signatures.

use core::fmt;
use core::fmt::Display;

use e521_dalek::PointError;

/// Internal errors. Most application-level developers will likely not
/// need to pay any attention to these.
#[derive(Debug)]
pub(crate) enum InternalError {
    /// A curve point failed to decode.
    Point(PointError),
    /// An error in the length of bytes handed to a constructor.
    ///
    /// To use this, pass a string specifying the `name` of the type
    /// which is returning the error, and the `length` in bytes actually
    /// received.
    BytesLength { name: &'static str, length: usize },
    /// A cipher record is too short to carry its framing.
    MalformedRecord { length: usize },
    /// The encrypted private key failed authentication.
    AuthFailed,
    /// An underlying file operation failed.
    Io(std::io::Error),
}

impl Display for InternalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            InternalError::Point(ref err) => write!(f, "{}", err),
            InternalError::BytesLength { name, length } => {
                write!(f, "{} cannot be decoded from {} bytes", name, length)
            }
            InternalError::MalformedRecord { length } => {
                write!(f, "cipher record of {} bytes is too short", length)
            }
            InternalError::AuthFailed => {
                write!(f, "authentication of the encrypted private key failed")
            }
            InternalError::Io(ref err) => write!(f, "{}", err),
        }
    }
}

/// Errors which may occur when processing keys, records, and signatures.
///
/// This error may arise due to:
///
/// * Being given bytes with a length different to what was expected.
///
/// * A problem decoding the curve point in a public key or an ECDHIES
///   record.
///
/// * A tag mismatch while loading an encrypted private key.
///
/// * An underlying file operation failing during key persistence.
#[derive(Debug)]
pub struct Error(pub(crate) InternalError);

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.0 {
            InternalError::Point(ref err) => Some(err),
            InternalError::Io(ref err) => Some(err),
            _ => None,
        }
    }
}

impl Error {
    /// True when this error is an authentication failure while loading
    /// an encrypted private key.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self.0, InternalError::AuthFailed)
    }
}

impl From<InternalError> for Error {
    fn from(err: InternalError) -> Error {
        Error(err)
    }
}

impl From<PointError> for Error {
    fn from(err: PointError) -> Error {
        Error(InternalError::Point(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error(InternalError::Io(err))
    }
}
