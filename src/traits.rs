// -*- mode: rust; -*-
//
// This file is part of e521-dalek.
// Copyright (c) 2020-2021 The e521-dalek Authors
// See LICENSE for licensing information.

//! Module for common traits.

/// Trait for getting the identity element of a group.
pub trait Identity {
    /// Returns the identity element of the group.
    fn identity() -> Self;
}

/// Trait for testing if a group element is the identity.
pub trait IsIdentity: Identity + PartialEq + Sized {
    /// Return true if this element is the identity element of the group.
    fn is_identity(&self) -> bool {
        *self == Self::identity()
    }
}

impl<T> IsIdentity for T where T: Identity + PartialEq {}

/// Trait for checking whether a group element is well-formed.
pub trait ValidityCheck {
    /// Checks whether the element satisfies its structural invariants
    /// (for E-521 points, the curve equation).
    ///
    /// This is intended for debugging and decoding; it is not
    /// constant-time.
    fn is_valid(&self) -> bool;
}
