// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! End-to-end construction scenarios against a spy file that records every
//! allocation, so validate-before-allocate is observable.

use ifc_forge_builder::{
    AttrValue, EntityBuilder, EntityHandle, Error, ExportSession, HeaderInfo, HeaderRecord,
    InMemoryFile, ListShape, ModelFile, SequentialIds, SessionOptions, SourceObject,
};
use ifc_forge_schema::{EntityKind, SchemaVersion};

/// Delegates to the in-memory store and records allocation order.
#[derive(Default)]
struct SpyFile {
    inner: InMemoryFile,
    allocations: Vec<EntityKind>,
}

impl ModelFile for SpyFile {
    fn allocate(&mut self, kind: EntityKind) -> EntityHandle {
        self.allocations.push(kind);
        self.inner.allocate(kind)
    }

    fn kind_of(&self, handle: EntityHandle) -> Option<EntityKind> {
        self.inner.kind_of(handle)
    }

    fn set_attribute(
        &mut self,
        handle: EntityHandle,
        name: &'static str,
        value: AttrValue,
    ) -> ifc_forge_builder::Result<()> {
        self.inner.set_attribute(handle, name, value)
    }

    fn set_matrix_attribute(
        &mut self,
        handle: EntityHandle,
        name: &'static str,
        rows: Vec<Vec<f64>>,
        shape: ListShape,
    ) -> ifc_forge_builder::Result<()> {
        self.inner.set_matrix_attribute(handle, name, rows, shape)
    }

    fn string_attribute(&self, handle: EntityHandle, name: &str) -> Option<String> {
        self.inner.string_attribute(handle, name)
    }

    fn has_attribute(&self, handle: EntityHandle, name: &str) -> bool {
        self.inner.has_attribute(handle, name)
    }

    fn add_header(&mut self, record: HeaderRecord, fields: Vec<AttrValue>) {
        self.inner.add_header(record, fields)
    }
}

struct Fixture {
    file: SpyFile,
    ids: SequentialIds,
    session: ExportSession,
}

impl Fixture {
    fn new(version: SchemaVersion) -> Self {
        Self::with_options(version, SessionOptions::default())
    }

    fn with_options(version: SchemaVersion, options: SessionOptions) -> Self {
        let mut file = SpyFile::default();
        let ids = SequentialIds::new(&mut file);
        Self {
            file,
            ids,
            session: ExportSession::with_options(version, options),
        }
    }

    fn builder(&mut self) -> EntityBuilder<'_, SpyFile> {
        EntityBuilder::new(&mut self.file, &self.session, &mut self.ids)
    }

    /// Allocate a raw collaborator entity, bypassing the builder — stands in
    /// for handles produced by the excluded geometry/file services.
    fn raw(&mut self, kind: EntityKind) -> EntityHandle {
        self.file.allocate(kind)
    }
}

#[test]
fn wall_with_valid_inputs_sets_all_levels() {
    let mut fx = Fixture::new(SchemaVersion::Ifc4);
    let placement = fx.raw(EntityKind::IfcLocalPlacement);
    let shape = fx.raw(EntityKind::IfcProductDefinitionShape);

    let source = SourceObject {
        name: Some("Basement wall".to_string()),
        tag: Some("338553".to_string()),
        ..SourceObject::default()
    };
    let wall = fx
        .builder()
        .create_wall(Some(&source), Some(placement), Some(shape), Some("SOLIDWALL"))
        .unwrap();

    let record = fx.file.inner.record(wall).unwrap();
    assert_eq!(record.kind, EntityKind::IfcWall);
    assert_eq!(
        record.get("PredefinedType").and_then(|v| v.as_enum()),
        Some("SOLIDWALL")
    );
    assert_eq!(
        record.get("ObjectPlacement").and_then(|v| v.as_handle()),
        Some(placement)
    );
    assert_eq!(
        record.get("Representation").and_then(|v| v.as_handle()),
        Some(shape)
    );
    assert_eq!(record.get("Name").and_then(|v| v.as_text()), Some("Basement wall"));
    assert_eq!(record.get("Tag").and_then(|v| v.as_text()), Some("338553"));
    // root-level identifier and owner history, set exactly once
    assert!(record.get("GlobalId").is_some());
    assert!(record.get("OwnerHistory").is_some());
}

#[test]
fn unrecognized_predefined_type_falls_back_without_error() {
    let mut fx = Fixture::new(SchemaVersion::Ifc4);
    let wall = fx
        .builder()
        .create_wall(None, None, None, Some("GARBAGE"))
        .unwrap();
    let record = fx.file.inner.record(wall).unwrap();
    assert_eq!(
        record.get("PredefinedType").and_then(|v| v.as_enum()),
        Some("NOTDEFINED")
    );
}

#[test]
fn deprecated_predefined_type_remaps_to_fallback() {
    let mut fx = Fixture::new(SchemaVersion::Ifc4);
    let wall = fx
        .builder()
        .create_wall(None, None, None, Some("STANDARD"))
        .unwrap();
    let record = fx.file.inner.record(wall).unwrap();
    assert_eq!(
        record.get("PredefinedType").and_then(|v| v.as_enum()),
        Some("NOTDEFINED")
    );

    // the same value is still legal under IFC2x3 on the wall type
    let mut fx = Fixture::new(SchemaVersion::Ifc2x3);
    let wall_type = fx
        .builder()
        .create_wall_type(None, Some("STANDARD"), &[])
        .unwrap();
    let record = fx.file.inner.record(wall_type).unwrap();
    assert_eq!(
        record.get("PredefinedType").and_then(|v| v.as_enum()),
        Some("STANDARD")
    );
}

#[test]
fn optional_placement_may_be_null() {
    let mut fx = Fixture::new(SchemaVersion::Ifc4);
    let wall = fx
        .builder()
        .create_wall(None, None, None, None)
        .unwrap();
    let record = fx.file.inner.record(wall).unwrap();
    assert!(record.get("ObjectPlacement").is_none());
    assert!(record.get("Representation").is_none());
}

#[test]
fn invalid_representation_fails_before_allocation() {
    let mut fx = Fixture::new(SchemaVersion::Ifc4);
    let not_a_shape = fx.raw(EntityKind::IfcMaterial);

    let allocated_before = fx.file.allocations.len();
    let err = fx
        .builder()
        .create_wall(None, None, Some(not_a_shape), None)
        .unwrap_err();

    assert!(matches!(
        err,
        Error::NotASubtype {
            param: "representation",
            kind: EntityKind::IfcMaterial,
            ..
        }
    ));
    assert_eq!(fx.file.allocations.len(), allocated_before);
}

#[test]
fn empty_related_objects_fails_before_allocation() {
    let mut fx = Fixture::new(SchemaVersion::Ifc4);
    let project = fx
        .builder()
        .create_project(None, "Project", None, None)
        .unwrap();

    let allocated_before = fx.file.allocations.len();
    let err = fx
        .builder()
        .create_rel_aggregates(None, Some(project), &[])
        .unwrap_err();

    assert!(matches!(
        err,
        Error::TooFew {
            param: "relatedObjects",
            min: 1,
            len: 0
        }
    ));
    assert_eq!(fx.file.allocations.len(), allocated_before);
}

#[test]
fn legacy_version_skips_enum_assignment_entirely() {
    // IfcWall only gains PredefinedType in IFC4; under IFC2x3 the caller
    // logic must skip resolution instead of attempting it.
    let mut fx = Fixture::new(SchemaVersion::Ifc2x3);
    assert!(fx
        .session
        .registry()
        .valid_predefined_types(EntityKind::IfcWall)
        .is_empty());

    let wall = fx
        .builder()
        .create_wall(None, None, None, Some("SOLIDWALL"))
        .unwrap();
    let record = fx.file.inner.record(wall).unwrap();
    assert!(record.get("PredefinedType").is_none());
    assert!(record.get("ShapeType").is_none());
}

#[test]
fn roof_uses_shape_type_attribute_before_ifc4() {
    let mut fx = Fixture::new(SchemaVersion::Ifc2x3);
    let roof = fx
        .builder()
        .create_roof(None, None, None, Some("GABLE_ROOF"))
        .unwrap();
    let record = fx.file.inner.record(roof).unwrap();
    assert_eq!(
        record.get("ShapeType").and_then(|v| v.as_enum()),
        Some("GABLE_ROOF")
    );
    assert!(record.get("PredefinedType").is_none());

    let mut fx = Fixture::new(SchemaVersion::Ifc4);
    let roof = fx
        .builder()
        .create_roof(None, None, None, Some("GABLE_ROOF"))
        .unwrap();
    let record = fx.file.inner.record(roof).unwrap();
    assert_eq!(
        record.get("PredefinedType").and_then(|v| v.as_enum()),
        Some("GABLE_ROOF")
    );
}

#[test]
fn element_type_is_unavailable_in_legacy_schema() {
    let mut fx = Fixture::new(SchemaVersion::Ifc2x2);
    let allocated_before = fx.file.allocations.len();
    let err = fx
        .builder()
        .create_wall_type(None, Some("SHEAR"), &[])
        .unwrap_err();
    assert!(matches!(err, Error::Schema(_)));
    assert_eq!(fx.file.allocations.len(), allocated_before);
}

#[test]
fn related_object_supertype_is_version_conditional() {
    // A type object is an IfcObjectDefinition from IFC2x3 on, so it may be
    // aggregated; under IFC2x2 it sits outside the IfcObject subtree and
    // must be rejected.
    let mut fx = Fixture::new(SchemaVersion::Ifc2x3);
    let project = fx
        .builder()
        .create_project(None, "P", None, None)
        .unwrap();
    let type_object = fx.raw(EntityKind::IfcTypeObject);
    assert!(fx
        .builder()
        .create_rel_aggregates(None, Some(project), &[type_object])
        .is_ok());

    let mut fx = Fixture::new(SchemaVersion::Ifc2x2);
    let project = fx
        .builder()
        .create_project(None, "P", None, None)
        .unwrap();
    let type_object = fx.raw(EntityKind::IfcTypeObject);
    let err = fx
        .builder()
        .create_rel_aggregates(None, Some(project), &[type_object])
        .unwrap_err();
    assert!(matches!(
        err,
        Error::NotASubtype {
            param: "relatedObjects",
            ..
        }
    ));
}

#[test]
fn aggregate_cardinality_rule_is_toggleable() {
    let strict = SessionOptions {
        enforce_aggregate_cardinality: true,
        ..SessionOptions::default()
    };

    let mut fx = Fixture::with_options(SchemaVersion::Ifc4, strict.clone());
    let project = fx
        .builder()
        .create_project(None, "P", None, None)
        .unwrap();
    let a = fx.builder().create_building(None, None, None).unwrap();
    let b = fx.builder().create_building(None, None, None).unwrap();

    let err = fx
        .builder()
        .create_rel_aggregates(None, Some(project), &[a, b])
        .unwrap_err();
    assert!(matches!(
        err,
        Error::TooMany {
            param: "relatedObjects",
            max: 1,
            ..
        }
    ));
    assert!(fx
        .builder()
        .create_rel_aggregates(None, Some(project), &[a])
        .is_ok());

    // the rule only binds from IFC4 on, even when enforcement is enabled
    let mut fx = Fixture::with_options(SchemaVersion::Ifc2x3, strict);
    let project = fx
        .builder()
        .create_project(None, "P", None, None)
        .unwrap();
    let a = fx.builder().create_building(None, None, None).unwrap();
    let b = fx.builder().create_building(None, None, None).unwrap();
    assert!(fx
        .builder()
        .create_rel_aggregates(None, Some(project), &[a, b])
        .is_ok());
}

#[test]
fn property_set_flow_attaches_to_wall() {
    let mut fx = Fixture::new(SchemaVersion::Ifc4);
    let wall = fx.builder().create_wall(None, None, None, None).unwrap();
    let is_external = fx
        .builder()
        .create_property_single_value("IsExternal", None, AttrValue::Boolean(true))
        .unwrap();
    let pset = fx
        .builder()
        .create_property_set(None, "Pset_WallCommon", &[is_external])
        .unwrap();
    let rel = fx
        .builder()
        .create_rel_defines_by_properties(None, Some(pset), &[wall])
        .unwrap();

    // the single-value property is not rooted
    let prop_record = fx.file.inner.record(is_external).unwrap();
    assert!(prop_record.get("GlobalId").is_none());
    assert_eq!(
        prop_record.get("NominalValue"),
        Some(&AttrValue::Boolean(true))
    );

    let pset_record = fx.file.inner.record(pset).unwrap();
    assert_eq!(
        pset_record.get("Name").and_then(|v| v.as_text()),
        Some("Pset_WallCommon")
    );
    assert_eq!(
        pset_record.get("HasProperties").and_then(|v| v.as_handle_list()),
        Some(&[is_external][..])
    );

    let rel_record = fx.file.inner.record(rel).unwrap();
    assert_eq!(
        rel_record
            .get("RelatedObjects")
            .and_then(|v| v.as_handle_list()),
        Some(&[wall][..])
    );
}

#[test]
fn classification_reference_attribute_renames_in_ifc4() {
    let mut fx = Fixture::new(SchemaVersion::Ifc2x3);
    let reference = fx
        .builder()
        .create_classification_reference(None, Some("21-02 20 20"), Some("Walls"))
        .unwrap();
    let record = fx.file.inner.record(reference).unwrap();
    assert!(record.get("ItemReference").is_some());
    assert!(record.get("Identification").is_none());

    let mut fx = Fixture::new(SchemaVersion::Ifc4);
    let reference = fx
        .builder()
        .create_classification_reference(None, Some("21-02 20 20"), Some("Walls"))
        .unwrap();
    let record = fx.file.inner.record(reference).unwrap();
    assert!(record.get("Identification").is_some());
    assert!(record.get("ItemReference").is_none());
}

#[test]
fn material_layer_thickness_must_be_positive_within_tolerance() {
    let mut fx = Fixture::new(SchemaVersion::Ifc4);
    let material = fx.builder().create_material("Concrete", None).unwrap();

    let allocated_before = fx.file.allocations.len();
    let err = fx
        .builder()
        .create_material_layer(Some(material), 0.0, None)
        .unwrap_err();
    assert!(matches!(
        err,
        Error::NotPositive {
            param: "layerThickness",
            ..
        }
    ));
    // a nominally-zero value within tolerance must reject too
    assert!(fx
        .builder()
        .create_material_layer(Some(material), 1e-12, None)
        .is_err());
    assert_eq!(fx.file.allocations.len(), allocated_before);

    let layer = fx
        .builder()
        .create_material_layer(Some(material), 0.3, None)
        .unwrap();
    let record = fx.file.inner.record(layer).unwrap();
    assert_eq!(
        record.get("LayerThickness").and_then(|v| v.as_real()),
        Some(0.3)
    );
}

#[test]
fn source_guid_overrides_generated_identifier() {
    let mut fx = Fixture::new(SchemaVersion::Ifc4);
    let source = SourceObject {
        guid: Some("0YvctVUKr0kugbFTf53O9L".to_string()),
        ..SourceObject::default()
    };
    let wall = fx
        .builder()
        .create_wall(Some(&source), None, None, None)
        .unwrap();
    assert_eq!(
        fx.file.inner.string_attribute(wall, "GlobalId").as_deref(),
        Some("0YvctVUKr0kugbFTf53O9L")
    );
}

#[test]
fn spatial_hierarchy_builds_end_to_end() {
    let mut fx = Fixture::new(SchemaVersion::Ifc4);
    let project = fx
        .builder()
        .create_project(None, "Hospital", Some("North wing"), Some("Design"))
        .unwrap();
    let site = fx.builder().create_site(None, None, None).unwrap();
    let building = fx.builder().create_building(None, None, None).unwrap();
    let storey = fx
        .builder()
        .create_building_storey(None, None, Some("Level 1"), Some(-2.8))
        .unwrap();

    fx.builder()
        .create_rel_aggregates(None, Some(project), &[site])
        .unwrap();
    fx.builder()
        .create_rel_aggregates(None, Some(site), &[building])
        .unwrap();
    fx.builder()
        .create_rel_aggregates(None, Some(building), &[storey])
        .unwrap();

    let storey_record = fx.file.inner.record(storey).unwrap();
    assert_eq!(
        storey_record.get("Elevation").and_then(|v| v.as_real()),
        Some(-2.8)
    );
    assert_eq!(
        storey_record.get("CompositionType").and_then(|v| v.as_enum()),
        Some("ELEMENT")
    );
    assert_eq!(
        storey_record.get("LongName").and_then(|v| v.as_text()),
        Some("Level 1")
    );

    let project_record = fx.file.inner.record(project).unwrap();
    assert_eq!(
        project_record.get("LongName").and_then(|v| v.as_text()),
        Some("North wing")
    );
    assert_eq!(
        project_record.get("Phase").and_then(|v| v.as_text()),
        Some("Design")
    );
    // the project is not a spatial structure element
    assert!(project_record.get("CompositionType").is_none());
}

#[test]
fn opening_and_fill_relationships_validate_their_kinds() {
    let mut fx = Fixture::new(SchemaVersion::Ifc4);
    let wall = fx.builder().create_wall(None, None, None, None).unwrap();
    let opening = fx
        .builder()
        .create_opening_element(None, None, None, Some("OPENING"))
        .unwrap();
    let door = fx
        .builder()
        .create_door(None, None, None, Some("DOOR"))
        .unwrap();

    fx.builder()
        .create_rel_voids_element(None, Some(wall), Some(opening))
        .unwrap();
    fx.builder()
        .create_rel_fills_element(None, Some(opening), Some(door))
        .unwrap();

    // a wall cannot act as the opening side of a fill
    let err = fx
        .builder()
        .create_rel_fills_element(None, Some(wall), Some(door))
        .unwrap_err();
    assert!(matches!(
        err,
        Error::NotASubtype {
            param: "relatingOpeningElement",
            ..
        }
    ));
}

#[test]
fn header_records_carry_the_session_schema_label() {
    for (version, label) in [
        (SchemaVersion::Ifc2x3, "IFC2X3"),
        (SchemaVersion::Ifc4, "IFC4"),
        (SchemaVersion::Ifc4x3, "IFC4X3_ADD2"),
    ] {
        let mut fx = Fixture::new(version);
        fx.builder().write_header(&HeaderInfo::default());

        let headers = fx.file.inner.headers();
        assert_eq!(headers.len(), 3);
        let schema = headers
            .iter()
            .find(|h| h.record == HeaderRecord::FileSchema)
            .unwrap();
        assert_eq!(
            schema.fields[0],
            AttrValue::TextList(vec![label.to_string()])
        );
    }
}

#[test]
fn type_object_chain_sets_property_associations() {
    let mut fx = Fixture::new(SchemaVersion::Ifc4);
    let prop = fx
        .builder()
        .create_property_single_value("LoadBearing", None, AttrValue::Boolean(true))
        .unwrap();
    let pset = fx
        .builder()
        .create_property_set(None, "Pset_WallCommon", &[prop])
        .unwrap();
    let wall_type = fx
        .builder()
        .create_wall_type(None, Some("SHEAR"), &[pset])
        .unwrap();

    let record = fx.file.inner.record(wall_type).unwrap();
    assert_eq!(record.kind, EntityKind::IfcWallType);
    assert_eq!(
        record.get("HasPropertySets").and_then(|v| v.as_handle_list()),
        Some(&[pset][..])
    );
    assert_eq!(
        record.get("PredefinedType").and_then(|v| v.as_enum()),
        Some("SHEAR")
    );
    assert!(record.get("GlobalId").is_some());

    let wall = fx.builder().create_wall(None, None, None, None).unwrap();
    fx.builder()
        .create_rel_defines_by_type(None, Some(wall_type), &[wall])
        .unwrap();
}
