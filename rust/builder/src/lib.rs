// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # IFC-Forge Builder
//!
//! Validating IFC entity factory over an in-memory model file.
//!
//! ## Overview
//!
//! Every construction operation follows one protocol: validate all inputs
//! against the session's schema registry, allocate a handle, assign the
//! kind's own attributes, then run the ordered setter plan up the supertype
//! chain. No handle exists until validation has fully passed, so a failure
//! never leaves partial state in the file.
//!
//! - **Model file**: [`ModelFile`] is the file/document contract;
//!   [`InMemoryFile`] is the slotmap-backed default. Handles are opaque and
//!   file-owned.
//! - **Session**: [`ExportSession`] carries the
//!   [`SchemaRegistry`](ifc_forge_schema::SchemaRegistry) and construction
//!   policy; two sessions with different versions coexist freely.
//! - **Builder**: [`EntityBuilder`] exposes one factory per constructible
//!   kind, grouped into elements, spatial structure, type objects,
//!   relationships, and property resources.
//!
//! ## Quick Start
//!
//! ```rust
//! use ifc_forge_builder::{EntityBuilder, ExportSession, InMemoryFile, SequentialIds};
//! use ifc_forge_schema::SchemaVersion;
//!
//! let mut file = InMemoryFile::new();
//! let mut ids = SequentialIds::new(&mut file);
//! let session = ExportSession::new(SchemaVersion::Ifc4);
//! let mut builder = EntityBuilder::new(&mut file, &session, &mut ids);
//!
//! let wall = builder
//!     .create_wall(None, None, None, Some("SOLIDWALL"))
//!     .unwrap();
//! assert!(file.record(wall).is_some());
//! ```
//!
//! Construction is single-threaded by design: the builder holds the one
//! mutable borrow of the file for its lifetime.

pub mod builder;
mod chain;
mod elements;
pub mod error;
pub mod file;
pub mod header;
pub mod host;
pub mod ident;
mod properties;
mod relations;
pub mod session;
pub mod snapshot;
mod spatial;
mod types;
pub mod validate;

pub use builder::EntityBuilder;
pub use error::{Error, Result};
pub use file::{
    AttrValue, EntityHandle, EntityRecord, HeaderEntry, HeaderRecord, InMemoryFile, ListShape,
    ModelFile,
};
pub use header::HeaderInfo;
pub use host::SourceObject;
pub use ident::{IdProvider, SequentialIds};
pub use session::{ExportSession, SessionOptions};
pub use snapshot::{snapshot, FileSnapshot};
