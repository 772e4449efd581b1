// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! IFC schema version tags.
//!
//! A version is selected once per export session and decides which entity
//! kinds exist, how supertype chains are shaped, and which predefined-type
//! enumerators are legal. Versions are ordered chronologically, so
//! [`SchemaVersion::at_least`] is a plain comparison.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported IFC schema dialects, ordered by release date.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SchemaVersion {
    Ifc2x2,
    #[default]
    Ifc2x3,
    Ifc4,
    Ifc4x3,
}

impl SchemaVersion {
    /// All supported versions, oldest first.
    pub const ALL: [SchemaVersion; 4] = [
        SchemaVersion::Ifc2x2,
        SchemaVersion::Ifc2x3,
        SchemaVersion::Ifc4,
        SchemaVersion::Ifc4x3,
    ];

    /// Official schema identifier as written into the FILE_SCHEMA header
    /// record.
    pub fn label(self) -> &'static str {
        match self {
            SchemaVersion::Ifc2x2 => "IFC2X2",
            SchemaVersion::Ifc2x3 => "IFC2X3",
            SchemaVersion::Ifc4 => "IFC4",
            SchemaVersion::Ifc4x3 => "IFC4X3_ADD2",
        }
    }

    /// Parse a schema identifier, tolerating case and addendum/technical
    /// corrigendum suffixes ("IFC2X3_TC1", "IFC4X3_ADD2").
    pub fn from_label(label: &str) -> Option<Self> {
        let upper = label.trim().to_ascii_uppercase();
        let base = upper.split('_').next().unwrap_or("");
        match base {
            "IFC2X2" => Some(SchemaVersion::Ifc2x2),
            "IFC2X3" => Some(SchemaVersion::Ifc2x3),
            "IFC4" => Some(SchemaVersion::Ifc4),
            "IFC4X3" => Some(SchemaVersion::Ifc4x3),
            _ => None,
        }
    }

    /// True if this version is `other` or newer.
    #[inline]
    pub fn at_least(self, other: SchemaVersion) -> bool {
        self >= other
    }

    /// True for the legacy dialect that predates IfcObjectDefinition.
    #[inline]
    pub fn is_legacy(self) -> bool {
        matches!(self, SchemaVersion::Ifc2x2)
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(SchemaVersion::Ifc2x2 < SchemaVersion::Ifc2x3);
        assert!(SchemaVersion::Ifc4 < SchemaVersion::Ifc4x3);
        assert!(SchemaVersion::Ifc4.at_least(SchemaVersion::Ifc2x3));
        assert!(!SchemaVersion::Ifc2x3.at_least(SchemaVersion::Ifc4));
        assert!(SchemaVersion::Ifc4.at_least(SchemaVersion::Ifc4));
    }

    #[test]
    fn test_from_label() {
        assert_eq!(
            SchemaVersion::from_label("IFC2X3"),
            Some(SchemaVersion::Ifc2x3)
        );
        assert_eq!(
            SchemaVersion::from_label("ifc2x3_tc1"),
            Some(SchemaVersion::Ifc2x3)
        );
        assert_eq!(
            SchemaVersion::from_label(" IFC4X3_ADD2 "),
            Some(SchemaVersion::Ifc4x3)
        );
        assert_eq!(SchemaVersion::from_label("IFC5"), None);
        assert_eq!(SchemaVersion::from_label(""), None);
    }

    #[test]
    fn test_label_round_trip() {
        for version in SchemaVersion::ALL {
            assert_eq!(SchemaVersion::from_label(version.label()), Some(version));
        }
    }

    #[test]
    fn test_is_legacy() {
        assert!(SchemaVersion::Ifc2x2.is_legacy());
        assert!(!SchemaVersion::Ifc2x3.is_legacy());
    }
}
