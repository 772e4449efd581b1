// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Export session configuration.
//!
//! The session owns the schema registry and the tunable construction
//! policy. It replaces process-wide state: two sessions with different
//! versions or options can coexist in one process.

use ifc_forge_schema::{SchemaRegistry, SchemaVersion};

/// Tunable construction policy.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    /// Tolerance for positivity checks on radii, thicknesses, lengths.
    /// Values at or below this are rejected.
    pub positive_eps: f64,
    /// Enforce the at-most-one related-object rule for decomposition
    /// relationships under IFC4 and newer. Off by default.
    pub enforce_aggregate_cardinality: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            positive_eps: 1e-9,
            enforce_aggregate_cardinality: false,
        }
    }
}

/// One export session: a schema registry plus policy, shared read-only by
/// the builder for its lifetime.
#[derive(Debug, Clone)]
pub struct ExportSession {
    registry: SchemaRegistry,
    options: SessionOptions,
}

impl ExportSession {
    /// Session with default options.
    pub fn new(version: SchemaVersion) -> Self {
        Self::with_options(version, SessionOptions::default())
    }

    pub fn with_options(version: SchemaVersion, options: SessionOptions) -> Self {
        Self {
            registry: SchemaRegistry::new(version),
            options,
        }
    }

    #[inline]
    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    #[inline]
    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    #[inline]
    pub fn version(&self) -> SchemaVersion {
        self.registry.version()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sessions_are_independent() {
        let legacy = ExportSession::new(SchemaVersion::Ifc2x2);
        let current = ExportSession::new(SchemaVersion::Ifc4);
        assert_eq!(legacy.version(), SchemaVersion::Ifc2x2);
        assert_eq!(current.version(), SchemaVersion::Ifc4);
    }

    #[test]
    fn test_default_options() {
        let session = ExportSession::new(SchemaVersion::Ifc4);
        assert!(!session.options().enforce_aggregate_cardinality);
        assert!(session.options().positive_eps > 0.0);
    }
}
