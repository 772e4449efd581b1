// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Version-conditional supertype tables.
//!
//! One function answers, for a given schema version, where each entity kind
//! sits in the inheritance tree. The registry materializes this into a parent
//! map once per session, so chain-shape policy lives in exactly one place.
//!
//! Version differences encoded here:
//! - IfcObjectDefinition does not exist in IFC2x2; IfcObject and
//!   IfcTypeObject hang directly under IfcRoot there.
//! - IfcContext exists from IFC4; IfcProject moves from under IfcObject to
//!   under IfcContext.
//! - Element type kinds (IfcWallType, ...) exist from IFC2x3.

use crate::kind::EntityKind;
use crate::version::SchemaVersion;

/// Placement of a kind in one version's inheritance tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Link {
    /// The kind is not part of this schema version.
    NotInSchema,
    /// The kind has no supertype (tree root, or a non-rooted resource).
    Top,
    /// The kind's immediate supertype.
    Under(EntityKind),
}

pub(crate) fn parent_of(version: SchemaVersion, kind: EntityKind) -> Link {
    use EntityKind::*;
    use SchemaVersion::*;

    match kind {
        IfcRoot => Link::Top,
        IfcObjectDefinition => {
            if version.at_least(Ifc2x3) {
                Link::Under(IfcRoot)
            } else {
                Link::NotInSchema
            }
        }
        IfcObject => {
            if version.at_least(Ifc2x3) {
                Link::Under(IfcObjectDefinition)
            } else {
                Link::Under(IfcRoot)
            }
        }
        IfcContext => {
            if version.at_least(Ifc4) {
                Link::Under(IfcObjectDefinition)
            } else {
                Link::NotInSchema
            }
        }
        IfcTypeObject => {
            if version.at_least(Ifc2x3) {
                Link::Under(IfcObjectDefinition)
            } else {
                Link::Under(IfcRoot)
            }
        }
        IfcTypeProduct => Link::Under(IfcTypeObject),
        IfcElementType => {
            if version.at_least(Ifc2x3) {
                Link::Under(IfcTypeProduct)
            } else {
                Link::NotInSchema
            }
        }

        IfcProduct => Link::Under(IfcObject),
        IfcElement => Link::Under(IfcProduct),
        IfcBuildingElement => Link::Under(IfcElement),
        IfcFeatureElement => Link::Under(IfcElement),
        IfcFeatureElementSubtraction => Link::Under(IfcFeatureElement),
        IfcSpatialStructureElement => Link::Under(IfcProduct),

        IfcPropertyDefinition => Link::Under(IfcRoot),
        IfcPropertySetDefinition => Link::Under(IfcPropertyDefinition),

        IfcRelationship => Link::Under(IfcRoot),
        IfcRelDecomposes | IfcRelDefines | IfcRelAssociates | IfcRelConnects => {
            Link::Under(IfcRelationship)
        }

        // IfcProject is an IfcContext from IFC4 on, a plain IfcObject before.
        IfcProject => {
            if version.at_least(Ifc4) {
                Link::Under(IfcContext)
            } else {
                Link::Under(IfcObject)
            }
        }
        IfcSite | IfcBuilding | IfcBuildingStorey | IfcSpace => {
            Link::Under(IfcSpatialStructureElement)
        }

        IfcWall | IfcSlab | IfcBeam | IfcColumn | IfcDoor | IfcWindow | IfcCovering | IfcRoof
        | IfcStair | IfcRailing | IfcMember | IfcPlate | IfcFooting | IfcCurtainWall
        | IfcBuildingElementProxy => Link::Under(IfcBuildingElement),
        IfcWallStandardCase => Link::Under(IfcWall),
        IfcOpeningElement => Link::Under(IfcFeatureElementSubtraction),

        IfcWallType | IfcSlabType | IfcBeamType | IfcColumnType | IfcMemberType | IfcPlateType
        | IfcCoveringType | IfcRailingType => {
            if version.at_least(Ifc2x3) {
                Link::Under(IfcElementType)
            } else {
                Link::NotInSchema
            }
        }

        IfcRelAggregates => Link::Under(IfcRelDecomposes),
        IfcRelDefinesByProperties | IfcRelDefinesByType => Link::Under(IfcRelDefines),
        IfcRelAssociatesMaterial | IfcRelAssociatesClassification => Link::Under(IfcRelAssociates),
        IfcRelContainedInSpatialStructure
        | IfcRelVoidsElement
        | IfcRelFillsElement
        | IfcRelConnectsElements => Link::Under(IfcRelConnects),

        IfcPropertySet => Link::Under(IfcPropertySetDefinition),
        IfcElementQuantity => Link::Under(IfcPropertySetDefinition),
        IfcProperty => Link::Top,
        IfcSimpleProperty => Link::Under(IfcProperty),
        IfcPropertySingleValue => Link::Under(IfcSimpleProperty),
        IfcPhysicalQuantity => Link::Top,

        IfcObjectPlacement => Link::Top,
        IfcLocalPlacement | IfcGridPlacement => Link::Under(IfcObjectPlacement),
        IfcProductRepresentation => Link::Top,
        IfcProductDefinitionShape => Link::Under(IfcProductRepresentation),
        IfcRepresentation => Link::Top,
        IfcShapeRepresentation => Link::Under(IfcRepresentation),
        IfcRepresentationMap => Link::Top,
        IfcMaterial => Link::Top,
        IfcMaterialLayer => Link::Top,
        IfcOwnerHistory => Link::Top,
        IfcExternalReference => Link::Top,
        IfcClassificationReference => Link::Under(IfcExternalReference),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every `Under` parent must itself be part of the same version,
    /// otherwise the registry's parent map would dangle.
    #[test]
    fn test_parents_are_closed_per_version() {
        for version in SchemaVersion::ALL {
            for kind in EntityKind::ALL {
                if let Link::Under(parent) = parent_of(version, kind) {
                    assert_ne!(
                        parent_of(version, parent),
                        Link::NotInSchema,
                        "{kind} under {parent} which is absent in {version}"
                    );
                }
            }
        }
    }

    /// Chains must be acyclic and terminate at a Top kind.
    #[test]
    fn test_chains_terminate() {
        for version in SchemaVersion::ALL {
            for kind in EntityKind::ALL {
                let mut cursor = kind;
                let mut steps = 0;
                loop {
                    match parent_of(version, cursor) {
                        Link::NotInSchema | Link::Top => break,
                        Link::Under(parent) => {
                            cursor = parent;
                            steps += 1;
                            assert!(steps < 16, "cycle through {kind} in {version}");
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_legacy_object_sits_under_root() {
        assert_eq!(
            parent_of(SchemaVersion::Ifc2x2, EntityKind::IfcObject),
            Link::Under(EntityKind::IfcRoot)
        );
        assert_eq!(
            parent_of(SchemaVersion::Ifc2x3, EntityKind::IfcObject),
            Link::Under(EntityKind::IfcObjectDefinition)
        );
    }

    #[test]
    fn test_project_moves_under_context_in_ifc4() {
        assert_eq!(
            parent_of(SchemaVersion::Ifc2x3, EntityKind::IfcProject),
            Link::Under(EntityKind::IfcObject)
        );
        assert_eq!(
            parent_of(SchemaVersion::Ifc4, EntityKind::IfcProject),
            Link::Under(EntityKind::IfcContext)
        );
    }
}
