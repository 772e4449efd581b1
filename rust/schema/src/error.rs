// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for schema registry queries.
//!
//! These are fatal programming errors: a kind unknown to the active version
//! points at a builder/registry mismatch, not at bad user data. Enumerator
//! fallback resolution is deliberately not represented here — an
//! unrecognized predefined-type value resolves to the fallback and is only
//! logged.

use crate::kind::EntityKind;
use crate::version::SchemaVersion;

/// Result type alias for registry operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by [`SchemaRegistry`](crate::SchemaRegistry) queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The kind exists in the enum but is not part of the active schema
    /// version (e.g. IfcWallType under IFC2x2).
    #[error("entity kind {kind} is not available in schema {version}")]
    KindUnavailable {
        kind: EntityKind,
        version: SchemaVersion,
    },

    /// A kind name that no supported schema version recognizes.
    #[error("unknown entity kind name: {0:?}")]
    UnknownKindName(String),
}
