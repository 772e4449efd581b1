// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Factories for the spatial structure: project, site, building, storey,
//! space.
//!
//! Spatial elements compose into the project hierarchy through aggregation
//! relationships; this module only constructs the nodes. The project is
//! special: it is not a spatial structure element, needs a non-empty name,
//! and carries long-name and phase as own attributes in every supported
//! version (their inheritance level moved in IFC4, their spelling did not).

use ifc_forge_schema::EntityKind;

use crate::builder::{EntityBuilder, OBJECT_PLACEMENT};
use crate::error::Result;
use crate::file::{AttrValue, EntityHandle, ModelFile};
use crate::host::SourceObject;
use crate::validate;

impl<'a, F: ModelFile> EntityBuilder<'a, F> {
    /// The one project entity of an export.
    pub fn create_project(
        &mut self,
        source: Option<&SourceObject>,
        name: &str,
        long_name: Option<&str>,
        phase: Option<&str>,
    ) -> Result<EntityHandle> {
        validate::non_empty_str("name", name)?;

        let mut own = Vec::new();
        if let Some(long_name) = long_name {
            own.push(("LongName", AttrValue::Text(long_name.to_string())));
        }
        if let Some(phase) = phase {
            own.push(("Phase", AttrValue::Text(phase.to_string())));
        }

        let mut seed = self.rooted_seed(source);
        seed.name = Some(name.to_string());
        seed.object_type = source.and_then(|s| s.object_type.clone());
        self.construct(EntityKind::IfcProject, source, seed, own)
    }

    fn create_spatial(
        &mut self,
        kind: EntityKind,
        source: Option<&SourceObject>,
        placement: Option<EntityHandle>,
        long_name: Option<&str>,
        predefined_type: Option<&str>,
        mut own: Vec<(&'static str, AttrValue)>,
    ) -> Result<EntityHandle> {
        let registry = self.session.registry();
        validate::optional_handle(&*self.file, registry, "placement", placement, OBJECT_PLACEMENT)?;

        if !registry.valid_predefined_types(kind).is_empty() {
            let resolved = registry.resolve_predefined_type(kind, predefined_type);
            own.push(("PredefinedType", AttrValue::Enum(resolved)));
        }

        let mut seed = self.rooted_seed(source);
        seed.object_type = source.and_then(|s| s.object_type.clone());
        seed.placement = placement;
        seed.long_name = long_name.map(str::to_string);
        seed.composition = Some("ELEMENT");
        self.construct(kind, source, seed, own)
    }

    pub fn create_site(
        &mut self,
        source: Option<&SourceObject>,
        placement: Option<EntityHandle>,
        long_name: Option<&str>,
    ) -> Result<EntityHandle> {
        self.create_spatial(EntityKind::IfcSite, source, placement, long_name, None, Vec::new())
    }

    pub fn create_building(
        &mut self,
        source: Option<&SourceObject>,
        placement: Option<EntityHandle>,
        long_name: Option<&str>,
    ) -> Result<EntityHandle> {
        self.create_spatial(
            EntityKind::IfcBuilding,
            source,
            placement,
            long_name,
            None,
            Vec::new(),
        )
    }

    /// Storey elevation may legitimately be negative (basements); it is not
    /// a positivity-checked input.
    pub fn create_building_storey(
        &mut self,
        source: Option<&SourceObject>,
        placement: Option<EntityHandle>,
        long_name: Option<&str>,
        elevation: Option<f64>,
    ) -> Result<EntityHandle> {
        let mut own = Vec::new();
        if let Some(elevation) = elevation {
            own.push(("Elevation", AttrValue::Real(elevation)));
        }
        self.create_spatial(
            EntityKind::IfcBuildingStorey,
            source,
            placement,
            long_name,
            None,
            own,
        )
    }

    pub fn create_space(
        &mut self,
        source: Option<&SourceObject>,
        placement: Option<EntityHandle>,
        long_name: Option<&str>,
        predefined_type: Option<&str>,
    ) -> Result<EntityHandle> {
        self.create_spatial(
            EntityKind::IfcSpace,
            source,
            placement,
            long_name,
            predefined_type,
            Vec::new(),
        )
    }
}
