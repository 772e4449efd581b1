// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Factories for relationship entities.
//!
//! Relationships are rooted but carry no placement, representation, or
//! tag — their attributes are the relating/related handles, each validated
//! against the supertype set the active version prescribes. The allowed
//! related-object supertype is IfcObjectDefinition from IFC2x3 on and
//! IfcObject under IFC2x2.
//!
//! The at-most-one related-object rule for aggregation under IFC4+ is a
//! session option (`enforce_aggregate_cardinality`), off by default.

use ifc_forge_schema::{EntityKind, SchemaVersion};

use crate::builder::EntityBuilder;
use crate::error::Result;
use crate::file::{AttrValue, EntityHandle, ModelFile};
use crate::host::SourceObject;
use crate::validate;

const ELEMENT: &[EntityKind] = &[EntityKind::IfcElement];
const PRODUCT: &[EntityKind] = &[EntityKind::IfcProduct];
const SPATIAL_STRUCTURE: &[EntityKind] = &[EntityKind::IfcSpatialStructureElement];
const PROPERTY_SET_DEFINITION: &[EntityKind] = &[EntityKind::IfcPropertySetDefinition];
const TYPE_OBJECT: &[EntityKind] = &[EntityKind::IfcTypeObject];
const MATERIAL: &[EntityKind] = &[EntityKind::IfcMaterial];
const CLASSIFICATION: &[EntityKind] = &[EntityKind::IfcClassificationReference];
const OPENING: &[EntityKind] = &[EntityKind::IfcOpeningElement];
const FEATURE_SUBTRACTION: &[EntityKind] = &[EntityKind::IfcFeatureElementSubtraction];
const OBJECT: &[EntityKind] = &[EntityKind::IfcObject];

impl<'a, F: ModelFile> EntityBuilder<'a, F> {
    /// Whole/part decomposition.
    pub fn create_rel_aggregates(
        &mut self,
        source: Option<&SourceObject>,
        relating_object: Option<EntityHandle>,
        related_objects: &[EntityHandle],
    ) -> Result<EntityHandle> {
        let registry = self.session.registry();
        let supertype = self.related_objects_supertype();
        let relating = validate::required_handle(
            &*self.file,
            registry,
            "relatingObject",
            relating_object,
            supertype,
        )?;
        let max = if self.session.options().enforce_aggregate_cardinality
            && self.session.version().at_least(SchemaVersion::Ifc4)
        {
            Some(1)
        } else {
            None
        };
        validate::handle_set(
            &*self.file,
            registry,
            "relatedObjects",
            related_objects,
            supertype,
            1,
            max,
        )?;

        let seed = self.rooted_seed(source);
        let own = vec![
            ("RelatingObject", AttrValue::Handle(relating)),
            (
                "RelatedObjects",
                AttrValue::HandleList(related_objects.to_vec()),
            ),
        ];
        self.construct(EntityKind::IfcRelAggregates, source, seed, own)
    }

    /// Containment of products in one spatial structure element.
    pub fn create_rel_contained_in_spatial_structure(
        &mut self,
        source: Option<&SourceObject>,
        relating_structure: Option<EntityHandle>,
        related_elements: &[EntityHandle],
    ) -> Result<EntityHandle> {
        let registry = self.session.registry();
        let relating = validate::required_handle(
            &*self.file,
            registry,
            "relatingStructure",
            relating_structure,
            SPATIAL_STRUCTURE,
        )?;
        validate::handle_set(
            &*self.file,
            registry,
            "relatedElements",
            related_elements,
            PRODUCT,
            1,
            None,
        )?;

        let seed = self.rooted_seed(source);
        let own = vec![
            ("RelatingStructure", AttrValue::Handle(relating)),
            (
                "RelatedElements",
                AttrValue::HandleList(related_elements.to_vec()),
            ),
        ];
        self.construct(
            EntityKind::IfcRelContainedInSpatialStructure,
            source,
            seed,
            own,
        )
    }

    /// Property set attachment. Related objects are occurrences, so the
    /// allowed supertype is IfcObject in every version.
    pub fn create_rel_defines_by_properties(
        &mut self,
        source: Option<&SourceObject>,
        relating_property_definition: Option<EntityHandle>,
        related_objects: &[EntityHandle],
    ) -> Result<EntityHandle> {
        let registry = self.session.registry();
        let relating = validate::required_handle(
            &*self.file,
            registry,
            "relatingPropertyDefinition",
            relating_property_definition,
            PROPERTY_SET_DEFINITION,
        )?;
        validate::handle_set(
            &*self.file,
            registry,
            "relatedObjects",
            related_objects,
            OBJECT,
            1,
            None,
        )?;

        let seed = self.rooted_seed(source);
        let own = vec![
            ("RelatingPropertyDefinition", AttrValue::Handle(relating)),
            (
                "RelatedObjects",
                AttrValue::HandleList(related_objects.to_vec()),
            ),
        ];
        self.construct(EntityKind::IfcRelDefinesByProperties, source, seed, own)
    }

    /// Type assignment to occurrences.
    pub fn create_rel_defines_by_type(
        &mut self,
        source: Option<&SourceObject>,
        relating_type: Option<EntityHandle>,
        related_objects: &[EntityHandle],
    ) -> Result<EntityHandle> {
        let registry = self.session.registry();
        let relating = validate::required_handle(
            &*self.file,
            registry,
            "relatingType",
            relating_type,
            TYPE_OBJECT,
        )?;
        validate::handle_set(
            &*self.file,
            registry,
            "relatedObjects",
            related_objects,
            OBJECT,
            1,
            None,
        )?;

        let seed = self.rooted_seed(source);
        let own = vec![
            ("RelatingType", AttrValue::Handle(relating)),
            (
                "RelatedObjects",
                AttrValue::HandleList(related_objects.to_vec()),
            ),
        ];
        self.construct(EntityKind::IfcRelDefinesByType, source, seed, own)
    }

    /// Material association.
    pub fn create_rel_associates_material(
        &mut self,
        source: Option<&SourceObject>,
        relating_material: Option<EntityHandle>,
        related_objects: &[EntityHandle],
    ) -> Result<EntityHandle> {
        let registry = self.session.registry();
        let supertype = self.related_objects_supertype();
        let relating = validate::required_handle(
            &*self.file,
            registry,
            "relatingMaterial",
            relating_material,
            MATERIAL,
        )?;
        validate::handle_set(
            &*self.file,
            registry,
            "relatedObjects",
            related_objects,
            supertype,
            1,
            None,
        )?;

        let seed = self.rooted_seed(source);
        let own = vec![
            ("RelatingMaterial", AttrValue::Handle(relating)),
            (
                "RelatedObjects",
                AttrValue::HandleList(related_objects.to_vec()),
            ),
        ];
        self.construct(EntityKind::IfcRelAssociatesMaterial, source, seed, own)
    }

    /// Classification association.
    pub fn create_rel_associates_classification(
        &mut self,
        source: Option<&SourceObject>,
        relating_classification: Option<EntityHandle>,
        related_objects: &[EntityHandle],
    ) -> Result<EntityHandle> {
        let registry = self.session.registry();
        let supertype = self.related_objects_supertype();
        let relating = validate::required_handle(
            &*self.file,
            registry,
            "relatingClassification",
            relating_classification,
            CLASSIFICATION,
        )?;
        validate::handle_set(
            &*self.file,
            registry,
            "relatedObjects",
            related_objects,
            supertype,
            1,
            None,
        )?;

        let seed = self.rooted_seed(source);
        let own = vec![
            ("RelatingClassification", AttrValue::Handle(relating)),
            (
                "RelatedObjects",
                AttrValue::HandleList(related_objects.to_vec()),
            ),
        ];
        self.construct(EntityKind::IfcRelAssociatesClassification, source, seed, own)
    }

    /// An opening cut out of an element.
    pub fn create_rel_voids_element(
        &mut self,
        source: Option<&SourceObject>,
        relating_element: Option<EntityHandle>,
        related_opening: Option<EntityHandle>,
    ) -> Result<EntityHandle> {
        let registry = self.session.registry();
        let relating = validate::required_handle(
            &*self.file,
            registry,
            "relatingBuildingElement",
            relating_element,
            ELEMENT,
        )?;
        let opening = validate::required_handle(
            &*self.file,
            registry,
            "relatedOpeningElement",
            related_opening,
            FEATURE_SUBTRACTION,
        )?;

        let seed = self.rooted_seed(source);
        let own = vec![
            ("RelatingBuildingElement", AttrValue::Handle(relating)),
            ("RelatedOpeningElement", AttrValue::Handle(opening)),
        ];
        self.construct(EntityKind::IfcRelVoidsElement, source, seed, own)
    }

    /// An element filling an opening.
    pub fn create_rel_fills_element(
        &mut self,
        source: Option<&SourceObject>,
        relating_opening: Option<EntityHandle>,
        related_element: Option<EntityHandle>,
    ) -> Result<EntityHandle> {
        let registry = self.session.registry();
        let opening = validate::required_handle(
            &*self.file,
            registry,
            "relatingOpeningElement",
            relating_opening,
            OPENING,
        )?;
        let element = validate::required_handle(
            &*self.file,
            registry,
            "relatedBuildingElement",
            related_element,
            ELEMENT,
        )?;

        let seed = self.rooted_seed(source);
        let own = vec![
            ("RelatingOpeningElement", AttrValue::Handle(opening)),
            ("RelatedBuildingElement", AttrValue::Handle(element)),
        ];
        self.construct(EntityKind::IfcRelFillsElement, source, seed, own)
    }

    /// Generic element-to-element connectivity.
    pub fn create_rel_connects_elements(
        &mut self,
        source: Option<&SourceObject>,
        relating_element: Option<EntityHandle>,
        related_element: Option<EntityHandle>,
    ) -> Result<EntityHandle> {
        let registry = self.session.registry();
        let relating = validate::required_handle(
            &*self.file,
            registry,
            "relatingElement",
            relating_element,
            ELEMENT,
        )?;
        let related = validate::required_handle(
            &*self.file,
            registry,
            "relatedElement",
            related_element,
            ELEMENT,
        )?;

        let seed = self.rooted_seed(source);
        let own = vec![
            ("RelatingElement", AttrValue::Handle(relating)),
            ("RelatedElement", AttrValue::Handle(related)),
        ];
        self.construct(EntityKind::IfcRelConnectsElements, source, seed, own)
    }
}
