// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Predefined-type enumeration tables.
//!
//! One table per entity kind that carries a predefined-type attribute,
//! keyed by the version the kind gained the attribute, the version each
//! enumerator became legal, and the version from which an enumerator is
//! deprecated and must be remapped to the fallback.
//!
//! Occurrence elements (IfcWall, IfcBeam, ...) mostly gained the attribute
//! in IFC4; their type objects carry it from IFC2x3. IfcRoof and IfcStair
//! carried it in IFC2x3 under the older "ShapeType" attribute name — the
//! rename is handled by the builder, the value set here is shared.

use crate::kind::EntityKind;
use crate::version::SchemaVersion;

/// Fallback enumerator used whenever a candidate cannot be emitted.
pub const FALLBACK: &str = "NOTDEFINED";

const V2X3: SchemaVersion = SchemaVersion::Ifc2x3;
const V4: SchemaVersion = SchemaVersion::Ifc4;
const V4X3: SchemaVersion = SchemaVersion::Ifc4x3;

/// Enumeration table for one (kind, attribute) pair.
pub(crate) struct EnumTable {
    pub kind: EntityKind,
    /// First version in which the kind carries the attribute at all.
    pub introduced: SchemaVersion,
    /// (first version the enumerator is legal in, enumerator)
    pub values: &'static [(SchemaVersion, &'static str)],
    /// (version from which the enumerator is remapped to the fallback, enumerator)
    pub deprecated: &'static [(SchemaVersion, &'static str)],
}

type Values = &'static [(SchemaVersion, &'static str)];

const WALL: Values = &[
    (V2X3, "STANDARD"),
    (V2X3, "POLYGONAL"),
    (V2X3, "SHEAR"),
    (V2X3, "ELEMENTEDWALL"),
    (V2X3, "PLUMBINGWALL"),
    (V4, "MOVABLE"),
    (V4, "PARAPET"),
    (V4, "PARTITIONING"),
    (V4, "SOLIDWALL"),
    (V2X3, "USERDEFINED"),
    (V2X3, "NOTDEFINED"),
];
const WALL_DEPRECATED: &[(SchemaVersion, &str)] = &[
    (V4, "STANDARD"),
    (V4, "POLYGONAL"),
    (V4, "ELEMENTEDWALL"),
];

const SLAB: Values = &[
    (V2X3, "FLOOR"),
    (V2X3, "ROOF"),
    (V2X3, "LANDING"),
    (V2X3, "BASESLAB"),
    (V4X3, "APPROACH_SLAB"),
    (V4X3, "PAVING"),
    (V4X3, "TRACKSLAB"),
    (V4X3, "WEARING"),
    (V2X3, "USERDEFINED"),
    (V2X3, "NOTDEFINED"),
];

const BEAM: Values = &[
    (V2X3, "BEAM"),
    (V2X3, "JOIST"),
    (V2X3, "HOLLOWCORE"),
    (V2X3, "LINTEL"),
    (V2X3, "SPANDREL"),
    (V2X3, "T_BEAM"),
    (V4X3, "CORNICE"),
    (V4X3, "DIAPHRAGM"),
    (V4X3, "EDGEBEAM"),
    (V4X3, "GIRDER_SEGMENT"),
    (V2X3, "USERDEFINED"),
    (V2X3, "NOTDEFINED"),
];

const COLUMN: Values = &[
    (V2X3, "COLUMN"),
    (V4, "PILASTER"),
    (V4X3, "PIERSTEM"),
    (V4X3, "STANDCOLUMN"),
    (V2X3, "USERDEFINED"),
    (V2X3, "NOTDEFINED"),
];

const DOOR: Values = &[
    (V4, "DOOR"),
    (V4, "GATE"),
    (V4, "TRAPDOOR"),
    (V4X3, "BOOM_BARRIER"),
    (V4X3, "TURNSTILE"),
    (V4, "USERDEFINED"),
    (V4, "NOTDEFINED"),
];

const WINDOW: Values = &[
    (V4, "WINDOW"),
    (V4, "SKYLIGHT"),
    (V4, "LIGHTDOME"),
    (V4, "USERDEFINED"),
    (V4, "NOTDEFINED"),
];

const COVERING: Values = &[
    (V2X3, "CEILING"),
    (V2X3, "FLOORING"),
    (V2X3, "CLADDING"),
    (V2X3, "ROOFING"),
    (V2X3, "MOLDING"),
    (V2X3, "SKIRTINGBOARD"),
    (V4, "INSULATION"),
    (V4, "MEMBRANE"),
    (V4, "SLEEVING"),
    (V4, "WRAPPING"),
    (V2X3, "USERDEFINED"),
    (V2X3, "NOTDEFINED"),
];

const ROOF: Values = &[
    (V2X3, "FLAT_ROOF"),
    (V2X3, "SHED_ROOF"),
    (V2X3, "GABLE_ROOF"),
    (V2X3, "HIP_ROOF"),
    (V2X3, "HIPPED_GABLE_ROOF"),
    (V2X3, "GAMBREL_ROOF"),
    (V2X3, "MANSARD_ROOF"),
    (V2X3, "BARREL_ROOF"),
    (V2X3, "RAINBOW_ROOF"),
    (V2X3, "BUTTERFLY_ROOF"),
    (V2X3, "PAVILION_ROOF"),
    (V2X3, "DOME_ROOF"),
    (V2X3, "FREEFORM"),
    (V4, "USERDEFINED"),
    (V2X3, "NOTDEFINED"),
];

const STAIR: Values = &[
    (V2X3, "STRAIGHT_RUN_STAIR"),
    (V2X3, "TWO_STRAIGHT_RUN_STAIR"),
    (V2X3, "QUARTER_WINDING_STAIR"),
    (V2X3, "QUARTER_TURN_STAIR"),
    (V2X3, "HALF_WINDING_STAIR"),
    (V2X3, "HALF_TURN_STAIR"),
    (V2X3, "THREE_QUARTER_WINDING_STAIR"),
    (V2X3, "THREE_QUARTER_TURN_STAIR"),
    (V2X3, "SPIRAL_STAIR"),
    (V2X3, "DOUBLE_RETURN_STAIR"),
    (V2X3, "CURVED_RUN_STAIR"),
    (V2X3, "TWO_CURVED_RUN_STAIR"),
    (V4, "USERDEFINED"),
    (V2X3, "NOTDEFINED"),
];

const RAILING: Values = &[
    (V2X3, "HANDRAIL"),
    (V2X3, "GUARDRAIL"),
    (V2X3, "BALUSTRADE"),
    (V4X3, "FENCE"),
    (V2X3, "USERDEFINED"),
    (V2X3, "NOTDEFINED"),
];

const MEMBER: Values = &[
    (V2X3, "BRACE"),
    (V2X3, "CHORD"),
    (V2X3, "COLLAR"),
    (V2X3, "MEMBER"),
    (V2X3, "MULLION"),
    (V2X3, "PLATE"),
    (V2X3, "POST"),
    (V2X3, "PURLIN"),
    (V2X3, "RAFTER"),
    (V2X3, "STRINGER"),
    (V2X3, "STRUT"),
    (V2X3, "STUD"),
    (V2X3, "USERDEFINED"),
    (V2X3, "NOTDEFINED"),
];

const PLATE: Values = &[
    (V2X3, "CURTAIN_PANEL"),
    (V2X3, "SHEET"),
    (V4X3, "BASE_PLATE"),
    (V2X3, "USERDEFINED"),
    (V2X3, "NOTDEFINED"),
];

const FOOTING: Values = &[
    (V2X3, "CAISSON_FOUNDATION"),
    (V2X3, "FOOTING_BEAM"),
    (V2X3, "PAD_FOOTING"),
    (V2X3, "PILE_CAP"),
    (V2X3, "STRIP_FOOTING"),
    (V2X3, "USERDEFINED"),
    (V2X3, "NOTDEFINED"),
];

const PROXY: Values = &[
    (V4, "COMPLEX"),
    (V4, "ELEMENT"),
    (V4, "PARTIAL"),
    (V4, "PROVISIONFORVOID"),
    (V4, "USERDEFINED"),
    (V4, "NOTDEFINED"),
];
const PROXY_DEPRECATED: &[(SchemaVersion, &str)] =
    &[(V4X3, "COMPLEX"), (V4X3, "ELEMENT"), (V4X3, "PARTIAL")];

const OPENING: Values = &[
    (V4, "OPENING"),
    (V4, "RECESS"),
    (V4, "USERDEFINED"),
    (V4, "NOTDEFINED"),
];

const SPACE: Values = &[
    (V4, "SPACE"),
    (V4, "PARKING"),
    (V4, "GFA"),
    (V4, "INTERNAL"),
    (V4, "EXTERNAL"),
    (V4, "USERDEFINED"),
    (V4, "NOTDEFINED"),
];
const SPACE_DEPRECATED: &[(SchemaVersion, &str)] = &[(V4X3, "GFA")];

macro_rules! table {
    ($kind:ident, $introduced:expr, $values:expr) => {
        EnumTable {
            kind: EntityKind::$kind,
            introduced: $introduced,
            values: $values,
            deprecated: &[],
        }
    };
    ($kind:ident, $introduced:expr, $values:expr, $deprecated:expr) => {
        EnumTable {
            kind: EntityKind::$kind,
            introduced: $introduced,
            values: $values,
            deprecated: $deprecated,
        }
    };
}

pub(crate) const TABLES: &[EnumTable] = &[
    // Occurrence elements
    table!(IfcWall, V4, WALL, WALL_DEPRECATED),
    table!(IfcWallStandardCase, V4, WALL, WALL_DEPRECATED),
    table!(IfcSlab, V2X3, SLAB),
    table!(IfcBeam, V4, BEAM),
    table!(IfcColumn, V4, COLUMN),
    table!(IfcDoor, V4, DOOR),
    table!(IfcWindow, V4, WINDOW),
    table!(IfcCovering, V2X3, COVERING),
    table!(IfcRoof, V2X3, ROOF),
    table!(IfcStair, V2X3, STAIR),
    table!(IfcRailing, V2X3, RAILING),
    table!(IfcMember, V4, MEMBER),
    table!(IfcPlate, V4, PLATE),
    table!(IfcFooting, V2X3, FOOTING),
    table!(IfcBuildingElementProxy, V4, PROXY, PROXY_DEPRECATED),
    table!(IfcOpeningElement, V4, OPENING),
    table!(IfcSpace, V4, SPACE, SPACE_DEPRECATED),
    // Type objects carry the attribute from IFC2x3 on
    table!(IfcWallType, V2X3, WALL, WALL_DEPRECATED),
    table!(IfcSlabType, V2X3, SLAB),
    table!(IfcBeamType, V2X3, BEAM),
    table!(IfcColumnType, V2X3, COLUMN),
    table!(IfcMemberType, V2X3, MEMBER),
    table!(IfcPlateType, V2X3, PLATE),
    table!(IfcCoveringType, V2X3, COVERING),
    table!(IfcRailingType, V2X3, RAILING),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_table_carries_fallback() {
        for table in TABLES {
            assert!(
                table.values.iter().any(|(_, v)| *v == FALLBACK),
                "{} enumeration lacks {FALLBACK}",
                table.kind
            );
        }
    }

    #[test]
    fn test_deprecated_values_exist_in_enumeration() {
        for table in TABLES {
            for (_, dep) in table.deprecated {
                assert!(
                    table.values.iter().any(|(_, v)| v == dep),
                    "{}: deprecated {dep} not in value set",
                    table.kind
                );
            }
        }
    }

    #[test]
    fn test_no_duplicate_kinds() {
        let mut seen = std::collections::HashSet::new();
        for table in TABLES {
            assert!(seen.insert(table.kind), "duplicate table for {}", table.kind);
        }
    }
}
