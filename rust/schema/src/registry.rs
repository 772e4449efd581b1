// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Version-scoped schema registry.
//!
//! Built once per export session from a [`SchemaVersion`], immutable
//! afterwards, and safe to share across read-only consumers. All subtype,
//! name-lookup, and predefined-type queries go through here so the "which
//! version knows which kind" policy exists in exactly one place.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::error::{Error, Result};
use crate::hierarchy::{parent_of, Link};
use crate::kind::EntityKind;
use crate::predefined::{EnumTable, FALLBACK, TABLES};
use crate::version::SchemaVersion;

/// Materialized enumeration for one kind under the active version.
#[derive(Debug, Clone)]
struct EnumSet {
    values: Vec<&'static str>,
    deprecated: Vec<&'static str>,
}

/// Supertype chain for one kind, root first, ending with the kind itself.
pub type SupertypeChain = SmallVec<[EntityKind; 8]>;

/// Answers subtype and enumeration-membership queries scoped to one schema
/// version.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    version: SchemaVersion,
    parents: FxHashMap<EntityKind, Option<EntityKind>>,
    by_name: FxHashMap<String, EntityKind>,
    predefined: FxHashMap<EntityKind, EnumSet>,
}

impl SchemaRegistry {
    /// Build the registry for one schema version.
    pub fn new(version: SchemaVersion) -> Self {
        let mut parents = FxHashMap::default();
        let mut by_name = FxHashMap::default();
        for kind in EntityKind::ALL {
            match parent_of(version, kind) {
                Link::NotInSchema => continue,
                Link::Top => {
                    parents.insert(kind, None);
                }
                Link::Under(parent) => {
                    parents.insert(kind, Some(parent));
                }
            }
            by_name.insert(kind.name().to_ascii_uppercase(), kind);
        }

        let mut predefined = FxHashMap::default();
        for table in TABLES {
            if !version.at_least(table.introduced) || !parents.contains_key(&table.kind) {
                continue;
            }
            predefined.insert(table.kind, materialize(table, version));
        }

        Self {
            version,
            parents,
            by_name,
            predefined,
        }
    }

    /// The version this registry was built for.
    #[inline]
    pub fn version(&self) -> SchemaVersion {
        self.version
    }

    /// True if the kind exists in the active version.
    #[inline]
    pub fn knows(&self, kind: EntityKind) -> bool {
        self.parents.contains_key(&kind)
    }

    /// True if `kind` equals or descends from any of `ancestors` under the
    /// active version's chain.
    ///
    /// A `kind` unknown to this version is a hard error, never `false`.
    /// Unknown members of `ancestors` simply never match.
    pub fn is_subtype_of(&self, kind: EntityKind, ancestors: &[EntityKind]) -> Result<bool> {
        if !self.knows(kind) {
            return Err(Error::KindUnavailable {
                kind,
                version: self.version,
            });
        }
        let mut cursor = Some(kind);
        while let Some(k) = cursor {
            if ancestors.contains(&k) {
                return Ok(true);
            }
            cursor = self.parents.get(&k).copied().flatten();
        }
        Ok(false)
    }

    /// The ancestor chain of `kind`, root first, ending with `kind` itself.
    pub fn supertype_chain(&self, kind: EntityKind) -> Result<SupertypeChain> {
        if !self.knows(kind) {
            return Err(Error::KindUnavailable {
                kind,
                version: self.version,
            });
        }
        let mut chain = SupertypeChain::new();
        let mut cursor = Some(kind);
        while let Some(k) = cursor {
            chain.push(k);
            cursor = self.parents.get(&k).copied().flatten();
        }
        chain.reverse();
        Ok(chain)
    }

    /// Version-scoped kind lookup by name, case-insensitive.
    pub fn kind_by_name(&self, name: &str) -> Option<EntityKind> {
        self.by_name.get(&name.trim().to_ascii_uppercase()).copied()
    }

    /// Like [`kind_by_name`](Self::kind_by_name) but an unrecognized name is
    /// an error.
    pub fn require_kind(&self, name: &str) -> Result<EntityKind> {
        self.kind_by_name(name)
            .ok_or_else(|| Error::UnknownKindName(name.to_string()))
    }

    /// Legal predefined-type enumerators for `kind` under the active
    /// version. Empty if the kind has no such attribute in this version —
    /// callers skip enum assignment entirely in that case.
    pub fn valid_predefined_types(&self, kind: EntityKind) -> &[&'static str] {
        self.predefined
            .get(&kind)
            .map(|set| set.values.as_slice())
            .unwrap_or(&[])
    }

    /// True if `value` is part of the enumeration but must not be emitted
    /// for this version. Case-insensitive.
    pub fn is_deprecated_value(&self, kind: EntityKind, value: &str) -> bool {
        self.predefined
            .get(&kind)
            .map(|set| {
                set.deprecated
                    .iter()
                    .any(|dep| dep.eq_ignore_ascii_case(value))
            })
            .unwrap_or(false)
    }

    /// Resolve a raw predefined-type candidate to an emittable enumerator.
    ///
    /// Centralized for every kind that carries the attribute: a null/empty
    /// candidate or a deprecated value becomes the fallback; a valid value
    /// returns its canonical spelling; anything else logs a warning and
    /// falls back. Never errors and never lets an invalid enumerator
    /// through.
    pub fn resolve_predefined_type(&self, kind: EntityKind, raw: Option<&str>) -> &'static str {
        let Some(candidate) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return FALLBACK;
        };
        let canonical = self
            .valid_predefined_types(kind)
            .iter()
            .copied()
            .find(|v| v.eq_ignore_ascii_case(candidate));
        match canonical {
            Some(value) if self.is_deprecated_value(kind, value) => {
                tracing::debug!(
                    kind = %kind,
                    value = %candidate,
                    version = %self.version,
                    "Deprecated predefined type remapped to fallback"
                );
                FALLBACK
            }
            Some(value) => value,
            None => {
                tracing::warn!(
                    kind = %kind,
                    value = %candidate,
                    version = %self.version,
                    "Unrecognized predefined type, using fallback"
                );
                FALLBACK
            }
        }
    }
}

fn materialize(table: &EnumTable, version: SchemaVersion) -> EnumSet {
    EnumSet {
        values: table
            .values
            .iter()
            .filter(|(intro, _)| version.at_least(*intro))
            .map(|(_, v)| *v)
            .collect(),
        deprecated: table
            .deprecated
            .iter()
            .filter(|(from, _)| version.at_least(*from))
            .map(|(_, v)| *v)
            .collect(),
    }
}
