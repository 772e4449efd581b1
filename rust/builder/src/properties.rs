// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Factories for property resources and small non-rooted resources.
//!
//! Property sets are rooted; single-value properties, classification
//! references, and materials are not — their setter plans are empty and
//! construction reduces to own-attribute assignment. The classification
//! reference demonstrates a version-renamed attribute: "ItemReference"
//! before IFC4, "Identification" from IFC4 on.

use ifc_forge_schema::{EntityKind, SchemaVersion};

use crate::builder::EntityBuilder;
use crate::chain::Seed;
use crate::error::Result;
use crate::file::{AttrValue, EntityHandle, ModelFile};
use crate::host::SourceObject;
use crate::validate;

const PROPERTY: &[EntityKind] = &[EntityKind::IfcProperty];
const PHYSICAL_QUANTITY: &[EntityKind] = &[EntityKind::IfcPhysicalQuantity];

impl<'a, F: ModelFile> EntityBuilder<'a, F> {
    /// A named, non-empty set of properties.
    pub fn create_property_set(
        &mut self,
        source: Option<&SourceObject>,
        name: &str,
        properties: &[EntityHandle],
    ) -> Result<EntityHandle> {
        let registry = self.session.registry();
        validate::non_empty_str("name", name)?;
        validate::handle_set(
            &*self.file,
            registry,
            "properties",
            properties,
            PROPERTY,
            1,
            None,
        )?;

        let mut seed = self.rooted_seed(source);
        seed.name = Some(name.to_string());
        let own = vec![(
            "HasProperties",
            AttrValue::HandleList(properties.to_vec()),
        )];
        self.construct(EntityKind::IfcPropertySet, source, seed, own)
    }

    /// A single-value property. Not rooted: no identifier, no owner
    /// history.
    pub fn create_property_single_value(
        &mut self,
        name: &str,
        description: Option<&str>,
        value: AttrValue,
    ) -> Result<EntityHandle> {
        validate::non_empty_str("name", name)?;

        let mut own = vec![("Name", AttrValue::Text(name.to_string()))];
        if let Some(description) = description {
            own.push(("Description", AttrValue::Text(description.to_string())));
        }
        own.push(("NominalValue", value));
        self.construct(EntityKind::IfcPropertySingleValue, None, Seed::default(), own)
    }

    /// A named, non-empty set of physical quantities.
    pub fn create_element_quantity(
        &mut self,
        source: Option<&SourceObject>,
        name: &str,
        method_of_measurement: Option<&str>,
        quantities: &[EntityHandle],
    ) -> Result<EntityHandle> {
        let registry = self.session.registry();
        validate::non_empty_str("name", name)?;
        validate::handle_set(
            &*self.file,
            registry,
            "quantities",
            quantities,
            PHYSICAL_QUANTITY,
            1,
            None,
        )?;

        let mut seed = self.rooted_seed(source);
        seed.name = Some(name.to_string());
        let mut own = Vec::new();
        if let Some(method) = method_of_measurement {
            own.push(("MethodOfMeasurement", AttrValue::Text(method.to_string())));
        }
        own.push(("Quantities", AttrValue::HandleList(quantities.to_vec())));
        self.construct(EntityKind::IfcElementQuantity, source, seed, own)
    }

    /// A classification reference. The reference identifier attribute was
    /// renamed in IFC4.
    pub fn create_classification_reference(
        &mut self,
        location: Option<&str>,
        identification: Option<&str>,
        name: Option<&str>,
    ) -> Result<EntityHandle> {
        let identifier_attr = if self.session.version().at_least(SchemaVersion::Ifc4) {
            "Identification"
        } else {
            "ItemReference"
        };

        let mut own = Vec::new();
        if let Some(location) = location {
            own.push(("Location", AttrValue::Text(location.to_string())));
        }
        if let Some(identification) = identification {
            own.push((identifier_attr, AttrValue::Text(identification.to_string())));
        }
        if let Some(name) = name {
            own.push(("Name", AttrValue::Text(name.to_string())));
        }
        self.construct(
            EntityKind::IfcClassificationReference,
            None,
            Seed::default(),
            own,
        )
    }

    /// A material. The description slot only exists from IFC4 on.
    pub fn create_material(
        &mut self,
        name: &str,
        description: Option<&str>,
    ) -> Result<EntityHandle> {
        validate::non_empty_str("name", name)?;

        let mut own = vec![("Name", AttrValue::Text(name.to_string()))];
        if self.session.version().at_least(SchemaVersion::Ifc4) {
            if let Some(description) = description {
                own.push(("Description", AttrValue::Text(description.to_string())));
            }
        }
        self.construct(EntityKind::IfcMaterial, None, Seed::default(), own)
    }

    /// One layer of a layered material build-up. Upstream geometry can
    /// produce thicknesses that are zero within floating tolerance; those
    /// reject rather than silently pass.
    pub fn create_material_layer(
        &mut self,
        material: Option<EntityHandle>,
        layer_thickness: f64,
        is_ventilated: Option<bool>,
    ) -> Result<EntityHandle> {
        let registry = self.session.registry();
        validate::optional_handle(
            &*self.file,
            registry,
            "material",
            material,
            &[EntityKind::IfcMaterial],
        )?;
        let thickness = validate::positive(
            "layerThickness",
            layer_thickness,
            self.session.options().positive_eps,
        )?;

        let mut own = Vec::new();
        if let Some(material) = material {
            own.push(("Material", AttrValue::Handle(material)));
        }
        own.push(("LayerThickness", AttrValue::Real(thickness)));
        if let Some(ventilated) = is_ventilated {
            own.push(("IsVentilated", AttrValue::Boolean(ventilated)));
        }
        self.construct(EntityKind::IfcMaterialLayer, None, Seed::default(), own)
    }
}
