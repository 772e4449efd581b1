// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Narrow view of a host-model object.
//!
//! The host application's object graph is external; construction only needs
//! name/description/tag overrides and an optional stable identifier seed.
//! Entities without a host counterpart (relationships, resources) pass
//! `None`.

/// Overrides sourced from the element being exported.
#[derive(Debug, Clone, Default)]
pub struct SourceObject {
    /// Stable identifier derived from the host element, used instead of a
    /// freshly generated one when present.
    pub guid: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    /// Traceability tag; assignment is best-effort.
    pub tag: Option<String>,
    pub object_type: Option<String>,
}

impl SourceObject {
    /// Source carrying only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}
