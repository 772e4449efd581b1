// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! IFC entity kinds.
//!
//! A closed enum over the schema entity types this layer constructs or
//! validates against, instead of string comparison. Which kinds exist in a
//! given schema version, and how they relate, is answered by the
//! [`SchemaRegistry`](crate::SchemaRegistry) — this module only names them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Entity kinds known to the builder layer.
///
/// Abstract supertypes are listed alongside constructible kinds: subtype
/// validation needs both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    // Rooted abstract supertypes
    IfcRoot,
    IfcObjectDefinition,
    IfcObject,
    IfcContext,
    IfcTypeObject,
    IfcTypeProduct,
    IfcElementType,
    IfcProduct,
    IfcElement,
    IfcBuildingElement,
    IfcFeatureElement,
    IfcFeatureElementSubtraction,
    IfcSpatialStructureElement,
    IfcPropertyDefinition,
    IfcPropertySetDefinition,
    IfcRelationship,
    IfcRelDecomposes,
    IfcRelDefines,
    IfcRelAssociates,
    IfcRelConnects,

    // Spatial structure
    IfcProject,
    IfcSite,
    IfcBuilding,
    IfcBuildingStorey,
    IfcSpace,

    // Building elements
    IfcWall,
    IfcWallStandardCase,
    IfcSlab,
    IfcBeam,
    IfcColumn,
    IfcDoor,
    IfcWindow,
    IfcCovering,
    IfcRoof,
    IfcStair,
    IfcRailing,
    IfcMember,
    IfcPlate,
    IfcFooting,
    IfcCurtainWall,
    IfcBuildingElementProxy,
    IfcOpeningElement,

    // Type objects
    IfcWallType,
    IfcSlabType,
    IfcBeamType,
    IfcColumnType,
    IfcMemberType,
    IfcPlateType,
    IfcCoveringType,
    IfcRailingType,

    // Relationships
    IfcRelAggregates,
    IfcRelContainedInSpatialStructure,
    IfcRelDefinesByProperties,
    IfcRelDefinesByType,
    IfcRelAssociatesMaterial,
    IfcRelAssociatesClassification,
    IfcRelVoidsElement,
    IfcRelFillsElement,
    IfcRelConnectsElements,

    // Properties and quantities
    IfcPropertySet,
    IfcElementQuantity,
    IfcProperty,
    IfcSimpleProperty,
    IfcPropertySingleValue,
    IfcPhysicalQuantity,

    // Non-rooted resources
    IfcObjectPlacement,
    IfcLocalPlacement,
    IfcGridPlacement,
    IfcProductRepresentation,
    IfcProductDefinitionShape,
    IfcRepresentation,
    IfcShapeRepresentation,
    IfcRepresentationMap,
    IfcMaterial,
    IfcMaterialLayer,
    IfcOwnerHistory,
    IfcExternalReference,
    IfcClassificationReference,
}

impl EntityKind {
    /// Every kind, in declaration order. Used to materialize the registry
    /// tables for a given version.
    pub const ALL: [EntityKind; 78] = [
        EntityKind::IfcRoot,
        EntityKind::IfcObjectDefinition,
        EntityKind::IfcObject,
        EntityKind::IfcContext,
        EntityKind::IfcTypeObject,
        EntityKind::IfcTypeProduct,
        EntityKind::IfcElementType,
        EntityKind::IfcProduct,
        EntityKind::IfcElement,
        EntityKind::IfcBuildingElement,
        EntityKind::IfcFeatureElement,
        EntityKind::IfcFeatureElementSubtraction,
        EntityKind::IfcSpatialStructureElement,
        EntityKind::IfcPropertyDefinition,
        EntityKind::IfcPropertySetDefinition,
        EntityKind::IfcRelationship,
        EntityKind::IfcRelDecomposes,
        EntityKind::IfcRelDefines,
        EntityKind::IfcRelAssociates,
        EntityKind::IfcRelConnects,
        EntityKind::IfcProject,
        EntityKind::IfcSite,
        EntityKind::IfcBuilding,
        EntityKind::IfcBuildingStorey,
        EntityKind::IfcSpace,
        EntityKind::IfcWall,
        EntityKind::IfcWallStandardCase,
        EntityKind::IfcSlab,
        EntityKind::IfcBeam,
        EntityKind::IfcColumn,
        EntityKind::IfcDoor,
        EntityKind::IfcWindow,
        EntityKind::IfcCovering,
        EntityKind::IfcRoof,
        EntityKind::IfcStair,
        EntityKind::IfcRailing,
        EntityKind::IfcMember,
        EntityKind::IfcPlate,
        EntityKind::IfcFooting,
        EntityKind::IfcCurtainWall,
        EntityKind::IfcBuildingElementProxy,
        EntityKind::IfcOpeningElement,
        EntityKind::IfcWallType,
        EntityKind::IfcSlabType,
        EntityKind::IfcBeamType,
        EntityKind::IfcColumnType,
        EntityKind::IfcMemberType,
        EntityKind::IfcPlateType,
        EntityKind::IfcCoveringType,
        EntityKind::IfcRailingType,
        EntityKind::IfcRelAggregates,
        EntityKind::IfcRelContainedInSpatialStructure,
        EntityKind::IfcRelDefinesByProperties,
        EntityKind::IfcRelDefinesByType,
        EntityKind::IfcRelAssociatesMaterial,
        EntityKind::IfcRelAssociatesClassification,
        EntityKind::IfcRelVoidsElement,
        EntityKind::IfcRelFillsElement,
        EntityKind::IfcRelConnectsElements,
        EntityKind::IfcPropertySet,
        EntityKind::IfcElementQuantity,
        EntityKind::IfcProperty,
        EntityKind::IfcSimpleProperty,
        EntityKind::IfcPropertySingleValue,
        EntityKind::IfcPhysicalQuantity,
        EntityKind::IfcObjectPlacement,
        EntityKind::IfcLocalPlacement,
        EntityKind::IfcGridPlacement,
        EntityKind::IfcProductRepresentation,
        EntityKind::IfcProductDefinitionShape,
        EntityKind::IfcRepresentation,
        EntityKind::IfcShapeRepresentation,
        EntityKind::IfcRepresentationMap,
        EntityKind::IfcMaterial,
        EntityKind::IfcMaterialLayer,
        EntityKind::IfcOwnerHistory,
        EntityKind::IfcExternalReference,
        EntityKind::IfcClassificationReference,
    ];

    /// Canonical schema spelling ("IfcWall").
    pub fn name(self) -> &'static str {
        match self {
            EntityKind::IfcRoot => "IfcRoot",
            EntityKind::IfcObjectDefinition => "IfcObjectDefinition",
            EntityKind::IfcObject => "IfcObject",
            EntityKind::IfcContext => "IfcContext",
            EntityKind::IfcTypeObject => "IfcTypeObject",
            EntityKind::IfcTypeProduct => "IfcTypeProduct",
            EntityKind::IfcElementType => "IfcElementType",
            EntityKind::IfcProduct => "IfcProduct",
            EntityKind::IfcElement => "IfcElement",
            EntityKind::IfcBuildingElement => "IfcBuildingElement",
            EntityKind::IfcFeatureElement => "IfcFeatureElement",
            EntityKind::IfcFeatureElementSubtraction => "IfcFeatureElementSubtraction",
            EntityKind::IfcSpatialStructureElement => "IfcSpatialStructureElement",
            EntityKind::IfcPropertyDefinition => "IfcPropertyDefinition",
            EntityKind::IfcPropertySetDefinition => "IfcPropertySetDefinition",
            EntityKind::IfcRelationship => "IfcRelationship",
            EntityKind::IfcRelDecomposes => "IfcRelDecomposes",
            EntityKind::IfcRelDefines => "IfcRelDefines",
            EntityKind::IfcRelAssociates => "IfcRelAssociates",
            EntityKind::IfcRelConnects => "IfcRelConnects",
            EntityKind::IfcProject => "IfcProject",
            EntityKind::IfcSite => "IfcSite",
            EntityKind::IfcBuilding => "IfcBuilding",
            EntityKind::IfcBuildingStorey => "IfcBuildingStorey",
            EntityKind::IfcSpace => "IfcSpace",
            EntityKind::IfcWall => "IfcWall",
            EntityKind::IfcWallStandardCase => "IfcWallStandardCase",
            EntityKind::IfcSlab => "IfcSlab",
            EntityKind::IfcBeam => "IfcBeam",
            EntityKind::IfcColumn => "IfcColumn",
            EntityKind::IfcDoor => "IfcDoor",
            EntityKind::IfcWindow => "IfcWindow",
            EntityKind::IfcCovering => "IfcCovering",
            EntityKind::IfcRoof => "IfcRoof",
            EntityKind::IfcStair => "IfcStair",
            EntityKind::IfcRailing => "IfcRailing",
            EntityKind::IfcMember => "IfcMember",
            EntityKind::IfcPlate => "IfcPlate",
            EntityKind::IfcFooting => "IfcFooting",
            EntityKind::IfcCurtainWall => "IfcCurtainWall",
            EntityKind::IfcBuildingElementProxy => "IfcBuildingElementProxy",
            EntityKind::IfcOpeningElement => "IfcOpeningElement",
            EntityKind::IfcWallType => "IfcWallType",
            EntityKind::IfcSlabType => "IfcSlabType",
            EntityKind::IfcBeamType => "IfcBeamType",
            EntityKind::IfcColumnType => "IfcColumnType",
            EntityKind::IfcMemberType => "IfcMemberType",
            EntityKind::IfcPlateType => "IfcPlateType",
            EntityKind::IfcCoveringType => "IfcCoveringType",
            EntityKind::IfcRailingType => "IfcRailingType",
            EntityKind::IfcRelAggregates => "IfcRelAggregates",
            EntityKind::IfcRelContainedInSpatialStructure => "IfcRelContainedInSpatialStructure",
            EntityKind::IfcRelDefinesByProperties => "IfcRelDefinesByProperties",
            EntityKind::IfcRelDefinesByType => "IfcRelDefinesByType",
            EntityKind::IfcRelAssociatesMaterial => "IfcRelAssociatesMaterial",
            EntityKind::IfcRelAssociatesClassification => "IfcRelAssociatesClassification",
            EntityKind::IfcRelVoidsElement => "IfcRelVoidsElement",
            EntityKind::IfcRelFillsElement => "IfcRelFillsElement",
            EntityKind::IfcRelConnectsElements => "IfcRelConnectsElements",
            EntityKind::IfcPropertySet => "IfcPropertySet",
            EntityKind::IfcElementQuantity => "IfcElementQuantity",
            EntityKind::IfcProperty => "IfcProperty",
            EntityKind::IfcSimpleProperty => "IfcSimpleProperty",
            EntityKind::IfcPropertySingleValue => "IfcPropertySingleValue",
            EntityKind::IfcPhysicalQuantity => "IfcPhysicalQuantity",
            EntityKind::IfcObjectPlacement => "IfcObjectPlacement",
            EntityKind::IfcLocalPlacement => "IfcLocalPlacement",
            EntityKind::IfcGridPlacement => "IfcGridPlacement",
            EntityKind::IfcProductRepresentation => "IfcProductRepresentation",
            EntityKind::IfcProductDefinitionShape => "IfcProductDefinitionShape",
            EntityKind::IfcRepresentation => "IfcRepresentation",
            EntityKind::IfcShapeRepresentation => "IfcShapeRepresentation",
            EntityKind::IfcRepresentationMap => "IfcRepresentationMap",
            EntityKind::IfcMaterial => "IfcMaterial",
            EntityKind::IfcMaterialLayer => "IfcMaterialLayer",
            EntityKind::IfcOwnerHistory => "IfcOwnerHistory",
            EntityKind::IfcExternalReference => "IfcExternalReference",
            EntityKind::IfcClassificationReference => "IfcClassificationReference",
        }
    }

    /// True for the relationship family (IfcRelationship and descendants in
    /// every supported version).
    pub fn is_relationship(self) -> bool {
        matches!(
            self,
            EntityKind::IfcRelationship
                | EntityKind::IfcRelDecomposes
                | EntityKind::IfcRelDefines
                | EntityKind::IfcRelAssociates
                | EntityKind::IfcRelConnects
                | EntityKind::IfcRelAggregates
                | EntityKind::IfcRelContainedInSpatialStructure
                | EntityKind::IfcRelDefinesByProperties
                | EntityKind::IfcRelDefinesByType
                | EntityKind::IfcRelAssociatesMaterial
                | EntityKind::IfcRelAssociatesClassification
                | EntityKind::IfcRelVoidsElement
                | EntityKind::IfcRelFillsElement
                | EntityKind::IfcRelConnectsElements
        )
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_complete_and_unique() {
        let mut seen = std::collections::HashSet::new();
        for kind in EntityKind::ALL {
            assert!(seen.insert(kind.name()), "duplicate kind {kind}");
        }
        assert_eq!(seen.len(), EntityKind::ALL.len());
    }

    #[test]
    fn test_name() {
        assert_eq!(EntityKind::IfcWall.name(), "IfcWall");
        assert_eq!(
            EntityKind::IfcRelContainedInSpatialStructure.name(),
            "IfcRelContainedInSpatialStructure"
        );
    }

    #[test]
    fn test_is_relationship() {
        assert!(EntityKind::IfcRelAggregates.is_relationship());
        assert!(!EntityKind::IfcWall.is_relationship());
    }
}
