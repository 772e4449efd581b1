// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # IFC-Forge Schema
//!
//! Version-indexed IFC schema registry: entity kinds, supertype chains, and
//! predefined-type enumerations for IFC2x2 through IFC4x3.
//!
//! ## Overview
//!
//! Export sessions target one schema dialect. This crate answers the three
//! questions entity construction keeps asking about that dialect:
//!
//! - **Subtype checks**: is kind A a subtype of kind B (or of any kind in a
//!   set) under this version's inheritance tree?
//! - **Chain introspection**: what is the full root-first supertype chain of
//!   a kind, so attribute setters can be layered along it?
//! - **Enumeration membership**: which predefined-type enumerators are legal
//!   for a kind, which are deprecated, and what does a raw candidate string
//!   resolve to?
//!
//! ## Quick Start
//!
//! ```rust
//! use ifc_forge_schema::{EntityKind, SchemaRegistry, SchemaVersion};
//!
//! let registry = SchemaRegistry::new(SchemaVersion::Ifc4);
//! assert!(registry
//!     .is_subtype_of(EntityKind::IfcWall, &[EntityKind::IfcProduct])
//!     .unwrap());
//! assert_eq!(
//!     registry.resolve_predefined_type(EntityKind::IfcWall, Some("SOLIDWALL")),
//!     "SOLIDWALL"
//! );
//! ```
//!
//! The registry is immutable after construction and `Send + Sync`; build it
//! once per session and share it.

pub mod error;
mod hierarchy;
pub mod kind;
pub mod predefined;
pub mod registry;
pub mod version;

pub use error::{Error, Result};
pub use kind::EntityKind;
pub use predefined::FALLBACK;
pub use registry::{SchemaRegistry, SupertypeChain};
pub use version::SchemaVersion;
