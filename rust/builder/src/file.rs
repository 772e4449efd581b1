// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Model file abstraction and the default in-memory store.
//!
//! The file owns every constructed entity. Handles are generational slotmap
//! keys: opaque, `Copy`, and stable for the life of the file. The builder
//! never retains a handle beyond the call that creates it.
//!
//! Attribute slots are write-once. A second write to the same slot is an
//! error on the plain path; cosmetic attributes go through the builder's
//! best-effort path, which absorbs the failure.

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};

use ifc_forge_schema::EntityKind;

use crate::error::{Error, Result};
use crate::validate;

new_key_type! {
    /// Opaque reference to a constructed entity, owned by the file.
    pub struct EntityHandle;
}

/// Attribute value union for entity slots.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    /// String value
    Text(String),
    /// Floating-point value
    Real(f64),
    /// Integer value
    Integer(i64),
    /// Boolean value
    Boolean(bool),
    /// Enumerator (canonical spelling from the schema tables)
    Enum(&'static str),
    /// Reference to another entity in the same file
    Handle(EntityHandle),
    /// Ordered list of entity references
    HandleList(Vec<EntityHandle>),
    /// List of strings
    TextList(Vec<String>),
    /// Matrix-like nested list, stored through the shape-checked setter
    RealMatrix(Vec<Vec<f64>>),
}

impl AttrValue {
    /// Get as string
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            AttrValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get as float
    #[inline]
    pub fn as_real(&self) -> Option<f64> {
        match self {
            AttrValue::Real(f) => Some(*f),
            AttrValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Get as enumerator
    #[inline]
    pub fn as_enum(&self) -> Option<&str> {
        match self {
            AttrValue::Enum(e) => Some(e),
            _ => None,
        }
    }

    /// Get as entity reference
    #[inline]
    pub fn as_handle(&self) -> Option<EntityHandle> {
        match self {
            AttrValue::Handle(h) => Some(*h),
            _ => None,
        }
    }

    /// Get as entity reference list
    #[inline]
    pub fn as_handle_list(&self) -> Option<&[EntityHandle]> {
        match self {
            AttrValue::HandleList(items) => Some(items),
            _ => None,
        }
    }
}

/// Outer/inner cardinality bounds for matrix-like attributes.
#[derive(Debug, Clone, Copy)]
pub struct ListShape {
    pub allow_empty: bool,
    pub min_outer: usize,
    pub max_outer: usize,
    pub min_inner: usize,
    pub max_inner: usize,
}

impl ListShape {
    /// Minimum outer and inner cardinality, no upper bounds.
    pub fn at_least(min_outer: usize, min_inner: usize) -> Self {
        Self {
            allow_empty: false,
            min_outer,
            max_outer: usize::MAX,
            min_inner,
            max_inner: usize::MAX,
        }
    }
}

impl Default for ListShape {
    fn default() -> Self {
        Self::at_least(1, 1)
    }
}

/// Header preamble record kinds — file-level metadata with no supertype
/// chain and no entity handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderRecord {
    FileDescription,
    FileName,
    FileSchema,
}

/// One emitted header record.
#[derive(Debug, Clone)]
pub struct HeaderEntry {
    pub record: HeaderRecord,
    pub fields: Vec<AttrValue>,
}

/// The file/document contract the builder constructs against.
///
/// Allocation is append-only and infallible; attribute writes are
/// write-once. The file is the single owner of persistence — this layer
/// never deletes or serializes entities.
pub trait ModelFile {
    /// Allocate a new, attribute-less entity of `kind`.
    fn allocate(&mut self, kind: EntityKind) -> EntityHandle;

    /// Kind of a live handle, `None` for a dangling one.
    fn kind_of(&self, handle: EntityHandle) -> Option<EntityKind>;

    /// Assign an attribute slot. Errors on a dangling handle or an already
    /// assigned slot.
    fn set_attribute(
        &mut self,
        handle: EntityHandle,
        name: &'static str,
        value: AttrValue,
    ) -> Result<()>;

    /// Shape-checked variant for matrix-like attributes.
    fn set_matrix_attribute(
        &mut self,
        handle: EntityHandle,
        name: &'static str,
        rows: Vec<Vec<f64>>,
        shape: ListShape,
    ) -> Result<()>;

    /// Read back a string attribute, if assigned.
    fn string_attribute(&self, handle: EntityHandle, name: &str) -> Option<String>;

    /// True if the slot has been assigned.
    fn has_attribute(&self, handle: EntityHandle, name: &str) -> bool;

    /// Emit a header preamble record.
    fn add_header(&mut self, record: HeaderRecord, fields: Vec<AttrValue>);
}

/// Stored data for one entity.
#[derive(Debug, Clone)]
pub struct EntityRecord {
    pub kind: EntityKind,
    attrs: FxHashMap<&'static str, AttrValue>,
    order: Vec<&'static str>,
}

impl EntityRecord {
    fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            attrs: FxHashMap::default(),
            order: Vec::new(),
        }
    }

    /// Attribute by name.
    pub fn get(&self, name: &str) -> Option<&AttrValue> {
        self.attrs.get(name)
    }

    /// Attributes in assignment order.
    pub fn attributes(&self) -> impl Iterator<Item = (&'static str, &AttrValue)> + '_ {
        self.order.iter().map(move |name| (*name, &self.attrs[name]))
    }
}

/// Default in-memory model file backed by a slotmap arena.
#[derive(Debug, Default)]
pub struct InMemoryFile {
    entities: SlotMap<EntityHandle, EntityRecord>,
    headers: Vec<HeaderEntry>,
}

impl InMemoryFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live entities.
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Stored record for a handle.
    pub fn record(&self, handle: EntityHandle) -> Option<&EntityRecord> {
        self.entities.get(handle)
    }

    /// All entities, in arena order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityHandle, &EntityRecord)> {
        self.entities.iter()
    }

    /// Handles of every entity of `kind`.
    pub fn entities_of_kind(&self, kind: EntityKind) -> Vec<EntityHandle> {
        self.entities
            .iter()
            .filter(|(_, record)| record.kind == kind)
            .map(|(handle, _)| handle)
            .collect()
    }

    /// Emitted header records, in emission order.
    pub fn headers(&self) -> &[HeaderEntry] {
        &self.headers
    }
}

impl ModelFile for InMemoryFile {
    fn allocate(&mut self, kind: EntityKind) -> EntityHandle {
        self.entities.insert(EntityRecord::new(kind))
    }

    fn kind_of(&self, handle: EntityHandle) -> Option<EntityKind> {
        self.entities.get(handle).map(|record| record.kind)
    }

    fn set_attribute(
        &mut self,
        handle: EntityHandle,
        name: &'static str,
        value: AttrValue,
    ) -> Result<()> {
        let record = self
            .entities
            .get_mut(handle)
            .ok_or(Error::Dangling { param: "handle" })?;
        if record.attrs.contains_key(name) {
            return Err(Error::AttributeAlreadySet { name });
        }
        record.attrs.insert(name, value);
        record.order.push(name);
        Ok(())
    }

    fn set_matrix_attribute(
        &mut self,
        handle: EntityHandle,
        name: &'static str,
        rows: Vec<Vec<f64>>,
        shape: ListShape,
    ) -> Result<()> {
        validate::list_shape(name, &rows, shape)?;
        self.set_attribute(handle, name, AttrValue::RealMatrix(rows))
    }

    fn string_attribute(&self, handle: EntityHandle, name: &str) -> Option<String> {
        self.entities
            .get(handle)?
            .get(name)
            .and_then(|value| value.as_text())
            .map(str::to_owned)
    }

    fn has_attribute(&self, handle: EntityHandle, name: &str) -> bool {
        self.entities
            .get(handle)
            .map(|record| record.attrs.contains_key(name))
            .unwrap_or(false)
    }

    fn add_header(&mut self, record: HeaderRecord, fields: Vec<AttrValue>) {
        self.headers.push(HeaderEntry { record, fields });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_and_kind_of() {
        let mut file = InMemoryFile::new();
        let wall = file.allocate(EntityKind::IfcWall);
        assert_eq!(file.kind_of(wall), Some(EntityKind::IfcWall));
        assert_eq!(file.entity_count(), 1);
    }

    #[test]
    fn test_attributes_are_write_once() {
        let mut file = InMemoryFile::new();
        let wall = file.allocate(EntityKind::IfcWall);
        file.set_attribute(wall, "Name", AttrValue::Text("W-01".into()))
            .unwrap();
        let err = file
            .set_attribute(wall, "Name", AttrValue::Text("W-02".into()))
            .unwrap_err();
        assert!(matches!(err, Error::AttributeAlreadySet { name: "Name" }));
        assert_eq!(file.string_attribute(wall, "Name").as_deref(), Some("W-01"));
    }

    #[test]
    fn test_dangling_handle_rejected() {
        let mut file = InMemoryFile::new();
        let wall = file.allocate(EntityKind::IfcWall);
        let mut other = InMemoryFile::new();
        let foreign = other.allocate(EntityKind::IfcWall);
        // a key minted by another arena is dangling here unless it collides;
        // the default key is never live
        let dangling = EntityHandle::default();
        assert!(file.kind_of(dangling).is_none());
        assert!(file
            .set_attribute(dangling, "Name", AttrValue::Text("x".into()))
            .is_err());
        let _ = (wall, foreign);
    }

    #[test]
    fn test_matrix_attribute_is_shape_checked() {
        let mut file = InMemoryFile::new();
        let points = file.allocate(EntityKind::IfcShapeRepresentation);
        let err = file
            .set_matrix_attribute(points, "Coordinates", vec![], ListShape::at_least(1, 2))
            .unwrap_err();
        assert!(matches!(err, Error::BadShape { param: "Coordinates", .. }));

        file.set_matrix_attribute(
            points,
            "Coordinates",
            vec![vec![0.0, 0.0], vec![1.0, 0.0]],
            ListShape::at_least(1, 2),
        )
        .unwrap();
        assert!(file.has_attribute(points, "Coordinates"));
    }

    #[test]
    fn test_attribute_order_is_preserved() {
        let mut file = InMemoryFile::new();
        let wall = file.allocate(EntityKind::IfcWall);
        file.set_attribute(wall, "GlobalId", AttrValue::Text("g".into()))
            .unwrap();
        file.set_attribute(wall, "Name", AttrValue::Text("n".into()))
            .unwrap();
        let names: Vec<_> = file
            .record(wall)
            .unwrap()
            .attributes()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, vec!["GlobalId", "Name"]);
    }
}
