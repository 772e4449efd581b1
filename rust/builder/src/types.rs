// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Factories for type-defining entities.
//!
//! Type objects run the parallel TypeObject → TypeProduct chain: property
//! set associations and representation maps instead of a placement and
//! representation pair. Element types carry their predefined-type
//! enumeration from IFC2x3 on; under IFC2x2 these kinds do not exist and
//! construction fails with a schema error before any allocation.

use ifc_forge_schema::EntityKind;

use crate::builder::EntityBuilder;
use crate::error::{Error, Result};
use crate::file::{AttrValue, EntityHandle, ModelFile};
use crate::host::SourceObject;
use crate::validate;

const PROPERTY_SET_DEFINITION: &[EntityKind] = &[EntityKind::IfcPropertySetDefinition];
const REPRESENTATION_MAP: &[EntityKind] = &[EntityKind::IfcRepresentationMap];

impl<'a, F: ModelFile> EntityBuilder<'a, F> {
    /// Construct a type object of any kind under IfcElementType.
    pub fn create_element_type(
        &mut self,
        kind: EntityKind,
        source: Option<&SourceObject>,
        element_type: Option<&str>,
        predefined_type: Option<&str>,
        property_sets: &[EntityHandle],
        representation_maps: &[EntityHandle],
    ) -> Result<EntityHandle> {
        let registry = self.session.registry();
        if !registry.is_subtype_of(kind, &[EntityKind::IfcElementType])? {
            return Err(Error::NotASubtype {
                param: "kind",
                kind,
                expected: EntityKind::IfcElementType.name().to_string(),
            });
        }
        validate::handle_set(
            &*self.file,
            registry,
            "propertySets",
            property_sets,
            PROPERTY_SET_DEFINITION,
            0,
            None,
        )?;
        validate::handle_set(
            &*self.file,
            registry,
            "representationMaps",
            representation_maps,
            REPRESENTATION_MAP,
            0,
            None,
        )?;

        let mut own = Vec::new();
        if !registry.valid_predefined_types(kind).is_empty() {
            let resolved = registry.resolve_predefined_type(kind, predefined_type);
            own.push(("PredefinedType", AttrValue::Enum(resolved)));
        }
        if let Some(element_type) = element_type {
            own.push(("ElementType", AttrValue::Text(element_type.to_string())));
        }

        let mut seed = self.rooted_seed(source);
        seed.tag = source.and_then(|s| s.tag.clone());
        seed.property_sets = property_sets.to_vec();
        seed.representation_maps = representation_maps.to_vec();
        self.construct(kind, source, seed, own)
    }

    pub fn create_wall_type(
        &mut self,
        source: Option<&SourceObject>,
        predefined_type: Option<&str>,
        property_sets: &[EntityHandle],
    ) -> Result<EntityHandle> {
        self.create_element_type(
            EntityKind::IfcWallType,
            source,
            None,
            predefined_type,
            property_sets,
            &[],
        )
    }

    pub fn create_slab_type(
        &mut self,
        source: Option<&SourceObject>,
        predefined_type: Option<&str>,
        property_sets: &[EntityHandle],
    ) -> Result<EntityHandle> {
        self.create_element_type(
            EntityKind::IfcSlabType,
            source,
            None,
            predefined_type,
            property_sets,
            &[],
        )
    }

    pub fn create_beam_type(
        &mut self,
        source: Option<&SourceObject>,
        predefined_type: Option<&str>,
        property_sets: &[EntityHandle],
    ) -> Result<EntityHandle> {
        self.create_element_type(
            EntityKind::IfcBeamType,
            source,
            None,
            predefined_type,
            property_sets,
            &[],
        )
    }

    pub fn create_column_type(
        &mut self,
        source: Option<&SourceObject>,
        predefined_type: Option<&str>,
        property_sets: &[EntityHandle],
    ) -> Result<EntityHandle> {
        self.create_element_type(
            EntityKind::IfcColumnType,
            source,
            None,
            predefined_type,
            property_sets,
            &[],
        )
    }

    pub fn create_member_type(
        &mut self,
        source: Option<&SourceObject>,
        predefined_type: Option<&str>,
        property_sets: &[EntityHandle],
    ) -> Result<EntityHandle> {
        self.create_element_type(
            EntityKind::IfcMemberType,
            source,
            None,
            predefined_type,
            property_sets,
            &[],
        )
    }

    pub fn create_plate_type(
        &mut self,
        source: Option<&SourceObject>,
        predefined_type: Option<&str>,
        property_sets: &[EntityHandle],
    ) -> Result<EntityHandle> {
        self.create_element_type(
            EntityKind::IfcPlateType,
            source,
            None,
            predefined_type,
            property_sets,
            &[],
        )
    }

    pub fn create_covering_type(
        &mut self,
        source: Option<&SourceObject>,
        predefined_type: Option<&str>,
        property_sets: &[EntityHandle],
    ) -> Result<EntityHandle> {
        self.create_element_type(
            EntityKind::IfcCoveringType,
            source,
            None,
            predefined_type,
            property_sets,
            &[],
        )
    }

    pub fn create_railing_type(
        &mut self,
        source: Option<&SourceObject>,
        predefined_type: Option<&str>,
        property_sets: &[EntityHandle],
    ) -> Result<EntityHandle> {
        self.create_element_type(
            EntityKind::IfcRailingType,
            source,
            None,
            predefined_type,
            property_sets,
            &[],
        )
    }
}
