// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Factories for occurrence elements.
//!
//! All element kinds share one construction path: optional placement and
//! representation inputs validated against their supertypes, the tag taken
//! best-effort from the source object, and the predefined type resolved
//! only when the active version gives the kind that attribute. IfcRoof and
//! IfcStair carried the attribute as "ShapeType" before IFC4.

use ifc_forge_schema::{EntityKind, SchemaVersion};

use crate::builder::{EntityBuilder, OBJECT_PLACEMENT, PRODUCT_REPRESENTATION};
use crate::error::{Error, Result};
use crate::file::{AttrValue, EntityHandle, ModelFile};
use crate::host::SourceObject;
use crate::validate;

fn predefined_attr(kind: EntityKind, version: SchemaVersion) -> &'static str {
    match kind {
        EntityKind::IfcRoof | EntityKind::IfcStair
            if !version.at_least(SchemaVersion::Ifc4) =>
        {
            "ShapeType"
        }
        _ => "PredefinedType",
    }
}

impl<'a, F: ModelFile> EntityBuilder<'a, F> {
    /// Construct an occurrence element of any kind under IfcElement.
    pub fn create_element(
        &mut self,
        kind: EntityKind,
        source: Option<&SourceObject>,
        placement: Option<EntityHandle>,
        representation: Option<EntityHandle>,
        predefined_type: Option<&str>,
    ) -> Result<EntityHandle> {
        let registry = self.session.registry();
        if !registry.is_subtype_of(kind, &[EntityKind::IfcElement])? {
            return Err(Error::NotASubtype {
                param: "kind",
                kind,
                expected: EntityKind::IfcElement.name().to_string(),
            });
        }
        validate::optional_handle(&*self.file, registry, "placement", placement, OBJECT_PLACEMENT)?;
        validate::optional_handle(
            &*self.file,
            registry,
            "representation",
            representation,
            PRODUCT_REPRESENTATION,
        )?;

        let mut own = Vec::new();
        if !registry.valid_predefined_types(kind).is_empty() {
            let resolved = registry.resolve_predefined_type(kind, predefined_type);
            own.push((
                predefined_attr(kind, registry.version()),
                AttrValue::Enum(resolved),
            ));
        }

        let mut seed = self.rooted_seed(source);
        seed.object_type = source.and_then(|s| s.object_type.clone());
        seed.placement = placement;
        seed.representation = representation;
        seed.tag = source.and_then(|s| s.tag.clone());
        self.construct(kind, source, seed, own)
    }

    pub fn create_wall(
        &mut self,
        source: Option<&SourceObject>,
        placement: Option<EntityHandle>,
        representation: Option<EntityHandle>,
        predefined_type: Option<&str>,
    ) -> Result<EntityHandle> {
        self.create_element(
            EntityKind::IfcWall,
            source,
            placement,
            representation,
            predefined_type,
        )
    }

    pub fn create_wall_standard_case(
        &mut self,
        source: Option<&SourceObject>,
        placement: Option<EntityHandle>,
        representation: Option<EntityHandle>,
        predefined_type: Option<&str>,
    ) -> Result<EntityHandle> {
        self.create_element(
            EntityKind::IfcWallStandardCase,
            source,
            placement,
            representation,
            predefined_type,
        )
    }

    pub fn create_slab(
        &mut self,
        source: Option<&SourceObject>,
        placement: Option<EntityHandle>,
        representation: Option<EntityHandle>,
        predefined_type: Option<&str>,
    ) -> Result<EntityHandle> {
        self.create_element(
            EntityKind::IfcSlab,
            source,
            placement,
            representation,
            predefined_type,
        )
    }

    pub fn create_beam(
        &mut self,
        source: Option<&SourceObject>,
        placement: Option<EntityHandle>,
        representation: Option<EntityHandle>,
        predefined_type: Option<&str>,
    ) -> Result<EntityHandle> {
        self.create_element(
            EntityKind::IfcBeam,
            source,
            placement,
            representation,
            predefined_type,
        )
    }

    pub fn create_column(
        &mut self,
        source: Option<&SourceObject>,
        placement: Option<EntityHandle>,
        representation: Option<EntityHandle>,
        predefined_type: Option<&str>,
    ) -> Result<EntityHandle> {
        self.create_element(
            EntityKind::IfcColumn,
            source,
            placement,
            representation,
            predefined_type,
        )
    }

    pub fn create_door(
        &mut self,
        source: Option<&SourceObject>,
        placement: Option<EntityHandle>,
        representation: Option<EntityHandle>,
        predefined_type: Option<&str>,
    ) -> Result<EntityHandle> {
        self.create_element(
            EntityKind::IfcDoor,
            source,
            placement,
            representation,
            predefined_type,
        )
    }

    pub fn create_window(
        &mut self,
        source: Option<&SourceObject>,
        placement: Option<EntityHandle>,
        representation: Option<EntityHandle>,
        predefined_type: Option<&str>,
    ) -> Result<EntityHandle> {
        self.create_element(
            EntityKind::IfcWindow,
            source,
            placement,
            representation,
            predefined_type,
        )
    }

    pub fn create_covering(
        &mut self,
        source: Option<&SourceObject>,
        placement: Option<EntityHandle>,
        representation: Option<EntityHandle>,
        predefined_type: Option<&str>,
    ) -> Result<EntityHandle> {
        self.create_element(
            EntityKind::IfcCovering,
            source,
            placement,
            representation,
            predefined_type,
        )
    }

    pub fn create_roof(
        &mut self,
        source: Option<&SourceObject>,
        placement: Option<EntityHandle>,
        representation: Option<EntityHandle>,
        predefined_type: Option<&str>,
    ) -> Result<EntityHandle> {
        self.create_element(
            EntityKind::IfcRoof,
            source,
            placement,
            representation,
            predefined_type,
        )
    }

    pub fn create_stair(
        &mut self,
        source: Option<&SourceObject>,
        placement: Option<EntityHandle>,
        representation: Option<EntityHandle>,
        predefined_type: Option<&str>,
    ) -> Result<EntityHandle> {
        self.create_element(
            EntityKind::IfcStair,
            source,
            placement,
            representation,
            predefined_type,
        )
    }

    pub fn create_railing(
        &mut self,
        source: Option<&SourceObject>,
        placement: Option<EntityHandle>,
        representation: Option<EntityHandle>,
        predefined_type: Option<&str>,
    ) -> Result<EntityHandle> {
        self.create_element(
            EntityKind::IfcRailing,
            source,
            placement,
            representation,
            predefined_type,
        )
    }

    pub fn create_member(
        &mut self,
        source: Option<&SourceObject>,
        placement: Option<EntityHandle>,
        representation: Option<EntityHandle>,
        predefined_type: Option<&str>,
    ) -> Result<EntityHandle> {
        self.create_element(
            EntityKind::IfcMember,
            source,
            placement,
            representation,
            predefined_type,
        )
    }

    pub fn create_plate(
        &mut self,
        source: Option<&SourceObject>,
        placement: Option<EntityHandle>,
        representation: Option<EntityHandle>,
        predefined_type: Option<&str>,
    ) -> Result<EntityHandle> {
        self.create_element(
            EntityKind::IfcPlate,
            source,
            placement,
            representation,
            predefined_type,
        )
    }

    pub fn create_footing(
        &mut self,
        source: Option<&SourceObject>,
        placement: Option<EntityHandle>,
        representation: Option<EntityHandle>,
        predefined_type: Option<&str>,
    ) -> Result<EntityHandle> {
        self.create_element(
            EntityKind::IfcFooting,
            source,
            placement,
            representation,
            predefined_type,
        )
    }

    /// Curtain walls have no predefined-type attribute in any supported
    /// version; the shared path skips enum assignment for them.
    pub fn create_curtain_wall(
        &mut self,
        source: Option<&SourceObject>,
        placement: Option<EntityHandle>,
        representation: Option<EntityHandle>,
    ) -> Result<EntityHandle> {
        self.create_element(EntityKind::IfcCurtainWall, source, placement, representation, None)
    }

    pub fn create_building_element_proxy(
        &mut self,
        source: Option<&SourceObject>,
        placement: Option<EntityHandle>,
        representation: Option<EntityHandle>,
        predefined_type: Option<&str>,
    ) -> Result<EntityHandle> {
        self.create_element(
            EntityKind::IfcBuildingElementProxy,
            source,
            placement,
            representation,
            predefined_type,
        )
    }

    pub fn create_opening_element(
        &mut self,
        source: Option<&SourceObject>,
        placement: Option<EntityHandle>,
        representation: Option<EntityHandle>,
        predefined_type: Option<&str>,
    ) -> Result<EntityHandle> {
        self.create_element(
            EntityKind::IfcOpeningElement,
            source,
            placement,
            representation,
            predefined_type,
        )
    }
}
