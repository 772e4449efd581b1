// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for entity construction.
//!
//! Validation errors identify the offending parameter and are raised before
//! any handle is allocated; schema errors indicate a builder/registry
//! mismatch and pass through from the schema crate. Enum-resolution fallback
//! and best-effort attribute assignment are absorbed inside the builder and
//! never surface here.

use ifc_forge_schema::EntityKind;
use thiserror::Error;

/// Result type alias for builder operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during entity construction.
#[derive(Error, Debug)]
pub enum Error {
    /// A required input was null.
    #[error("{param}: value is required")]
    Missing { param: &'static str },

    /// A handle does not reference a live entity in the target file.
    #[error("{param}: handle does not reference an entity in this file")]
    Dangling { param: &'static str },

    /// A handle's kind fails the required supertype constraint.
    #[error("{param}: {kind} is not a subtype of {expected}")]
    NotASubtype {
        param: &'static str,
        kind: EntityKind,
        expected: String,
    },

    /// A collection violates its minimum cardinality.
    #[error("{param}: expected at least {min} item(s), got {len}")]
    TooFew {
        param: &'static str,
        min: usize,
        len: usize,
    },

    /// A collection violates its maximum cardinality.
    #[error("{param}: expected at most {max} item(s), got {len}")]
    TooMany {
        param: &'static str,
        max: usize,
        len: usize,
    },

    /// A list-of-list input violates its outer/inner bounds.
    #[error("{param}: {detail}")]
    BadShape {
        param: &'static str,
        detail: String,
    },

    /// A numeric input is not positive within tolerance.
    #[error("{param}: expected a positive value, got {value}")]
    NotPositive { param: &'static str, value: f64 },

    /// A string input is required to be non-empty.
    #[error("{param}: must not be empty")]
    EmptyString { param: &'static str },

    /// An attribute slot was written twice. Slots are write-once; cosmetic
    /// attributes that may legitimately fail go through the best-effort
    /// path instead.
    #[error("attribute {name} is already assigned on this entity")]
    AttributeAlreadySet { name: &'static str },

    /// Builder/registry mismatch — fatal, not user-recoverable.
    #[error(transparent)]
    Schema(#[from] ifc_forge_schema::Error),
}
