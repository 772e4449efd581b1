// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Supertype attribute-chain setters.
//!
//! Instead of every factory calling its supertype's setter in a literal
//! nested chain, each inheritance level that introduces attributes has one
//! setter function, and the builder resolves a kind's ordered setter plan
//! from the registry's supertype chain. Plans run root-first, so the
//! mandatory identifier and owner-history land before level-specific
//! attributes. Levels that introduce no attributes (IfcObjectDefinition,
//! IfcRelationship) contribute nothing to the plan.

use smallvec::SmallVec;

use ifc_forge_schema::EntityKind;

use crate::error::{Error, Result};
use crate::file::{AttrValue, EntityHandle, ModelFile};

/// Ancestor-relevant inputs for one construction, bundled so every level
/// setter takes only the handle and this.
#[derive(Debug, Default)]
pub(crate) struct Seed {
    pub guid: String,
    pub owner_history: Option<EntityHandle>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub object_type: Option<String>,
    pub long_name: Option<String>,
    pub composition: Option<&'static str>,
    pub placement: Option<EntityHandle>,
    pub representation: Option<EntityHandle>,
    pub tag: Option<String>,
    pub applicable_occurrence: Option<String>,
    pub property_sets: Vec<EntityHandle>,
    pub representation_maps: Vec<EntityHandle>,
}

/// One inheritance level's attribute setter.
pub(crate) type AttrSetter<F> = fn(&mut F, &Seed, EntityHandle) -> Result<()>;

/// Ordered, root-first setter list for one entity kind.
pub(crate) type SetterPlan<F> = SmallVec<[AttrSetter<F>; 6]>;

/// The setter contributed by an inheritance level, if any.
pub(crate) fn level_setter<F: ModelFile>(kind: EntityKind) -> Option<AttrSetter<F>> {
    match kind {
        EntityKind::IfcRoot => Some(set_root::<F>),
        EntityKind::IfcObject => Some(set_object::<F>),
        EntityKind::IfcProduct => Some(set_product::<F>),
        EntityKind::IfcSpatialStructureElement => Some(set_spatial::<F>),
        EntityKind::IfcElement => Some(set_element::<F>),
        EntityKind::IfcTypeObject => Some(set_type_object::<F>),
        EntityKind::IfcTypeProduct => Some(set_type_product::<F>),
        _ => None,
    }
}

/// Assign a cosmetic attribute, absorbing failure. Returns whether the
/// slot was assigned.
pub(crate) fn try_set_optional<F: ModelFile + ?Sized>(
    file: &mut F,
    handle: EntityHandle,
    name: &'static str,
    value: AttrValue,
) -> bool {
    match file.set_attribute(handle, name, value) {
        Ok(()) => true,
        Err(err) => {
            tracing::debug!(attribute = name, error = %err, "Optional attribute not assigned");
            false
        }
    }
}

/// Root level: mandatory identifier and owner-history, conditional
/// name/description. Name/description overrides from the source object are
/// applied at allocation, so assigned slots are left alone here.
fn set_root<F: ModelFile>(file: &mut F, seed: &Seed, handle: EntityHandle) -> Result<()> {
    file.set_attribute(handle, "GlobalId", AttrValue::Text(seed.guid.clone()))?;
    let owner = seed.owner_history.ok_or(Error::Missing {
        param: "ownerHistory",
    })?;
    file.set_attribute(handle, "OwnerHistory", AttrValue::Handle(owner))?;
    if let Some(name) = &seed.name {
        if !file.has_attribute(handle, "Name") {
            file.set_attribute(handle, "Name", AttrValue::Text(name.clone()))?;
        }
    }
    if let Some(description) = &seed.description {
        if !file.has_attribute(handle, "Description") {
            file.set_attribute(handle, "Description", AttrValue::Text(description.clone()))?;
        }
    }
    Ok(())
}

fn set_object<F: ModelFile>(file: &mut F, seed: &Seed, handle: EntityHandle) -> Result<()> {
    if let Some(object_type) = &seed.object_type {
        file.set_attribute(handle, "ObjectType", AttrValue::Text(object_type.clone()))?;
    }
    Ok(())
}

/// Product level: placement and representation handles were subtype-checked
/// during validation.
fn set_product<F: ModelFile>(file: &mut F, seed: &Seed, handle: EntityHandle) -> Result<()> {
    if let Some(placement) = seed.placement {
        file.set_attribute(handle, "ObjectPlacement", AttrValue::Handle(placement))?;
    }
    if let Some(representation) = seed.representation {
        file.set_attribute(handle, "Representation", AttrValue::Handle(representation))?;
    }
    Ok(())
}

fn set_spatial<F: ModelFile>(file: &mut F, seed: &Seed, handle: EntityHandle) -> Result<()> {
    if let Some(long_name) = &seed.long_name {
        file.set_attribute(handle, "LongName", AttrValue::Text(long_name.clone()))?;
    }
    if let Some(composition) = seed.composition {
        file.set_attribute(handle, "CompositionType", AttrValue::Enum(composition))?;
    }
    Ok(())
}

/// Element level: the tag is traceability data, not structure — assignment
/// is best-effort and never aborts the construction.
fn set_element<F: ModelFile>(file: &mut F, seed: &Seed, handle: EntityHandle) -> Result<()> {
    if let Some(tag) = &seed.tag {
        try_set_optional(file, handle, "Tag", AttrValue::Text(tag.clone()));
    }
    Ok(())
}

fn set_type_object<F: ModelFile>(file: &mut F, seed: &Seed, handle: EntityHandle) -> Result<()> {
    if let Some(applicable) = &seed.applicable_occurrence {
        file.set_attribute(
            handle,
            "ApplicableOccurrence",
            AttrValue::Text(applicable.clone()),
        )?;
    }
    if !seed.property_sets.is_empty() {
        file.set_attribute(
            handle,
            "HasPropertySets",
            AttrValue::HandleList(seed.property_sets.clone()),
        )?;
    }
    Ok(())
}

fn set_type_product<F: ModelFile>(file: &mut F, seed: &Seed, handle: EntityHandle) -> Result<()> {
    if !seed.representation_maps.is_empty() {
        file.set_attribute(
            handle,
            "RepresentationMaps",
            AttrValue::HandleList(seed.representation_maps.clone()),
        )?;
    }
    if let Some(tag) = &seed.tag {
        try_set_optional(file, handle, "Tag", AttrValue::Text(tag.clone()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file::InMemoryFile;

    fn seed_with_owner(file: &mut InMemoryFile) -> Seed {
        let owner = file.allocate(EntityKind::IfcOwnerHistory);
        Seed {
            guid: "1111111111111111111111".to_string(),
            owner_history: Some(owner),
            ..Seed::default()
        }
    }

    #[test]
    fn test_root_setter_assigns_mandatory_slots() {
        let mut file = InMemoryFile::new();
        let mut seed = seed_with_owner(&mut file);
        seed.name = Some("Wall".to_string());
        let wall = file.allocate(EntityKind::IfcWall);
        set_root(&mut file, &seed, wall).unwrap();
        assert!(file.has_attribute(wall, "GlobalId"));
        assert!(file.has_attribute(wall, "OwnerHistory"));
        assert_eq!(file.string_attribute(wall, "Name").as_deref(), Some("Wall"));
    }

    #[test]
    fn test_root_setter_leaves_override_in_place() {
        let mut file = InMemoryFile::new();
        let mut seed = seed_with_owner(&mut file);
        seed.name = Some("from-seed".to_string());
        let wall = file.allocate(EntityKind::IfcWall);
        // allocation-time override from the source object
        file.set_attribute(wall, "Name", AttrValue::Text("from-source".into()))
            .unwrap();
        set_root(&mut file, &seed, wall).unwrap();
        assert_eq!(
            file.string_attribute(wall, "Name").as_deref(),
            Some("from-source")
        );
    }

    #[test]
    fn test_root_setter_requires_owner_history() {
        let mut file = InMemoryFile::new();
        let seed = Seed {
            guid: "x".to_string(),
            ..Seed::default()
        };
        let wall = file.allocate(EntityKind::IfcWall);
        assert!(matches!(
            set_root(&mut file, &seed, wall),
            Err(Error::Missing {
                param: "ownerHistory"
            })
        ));
    }

    #[test]
    fn test_try_set_optional_absorbs_conflict() {
        let mut file = InMemoryFile::new();
        let wall = file.allocate(EntityKind::IfcWall);
        assert!(try_set_optional(
            &mut file,
            wall,
            "Tag",
            AttrValue::Text("t1".into())
        ));
        // second write would be an error on the plain path; here it is a flag
        assert!(!try_set_optional(
            &mut file,
            wall,
            "Tag",
            AttrValue::Text("t2".into())
        ));
        assert_eq!(file.string_attribute(wall, "Tag").as_deref(), Some("t1"));
    }

    #[test]
    fn test_levels_without_attributes_contribute_no_setter() {
        assert!(level_setter::<InMemoryFile>(EntityKind::IfcObjectDefinition).is_none());
        assert!(level_setter::<InMemoryFile>(EntityKind::IfcRelationship).is_none());
        assert!(level_setter::<InMemoryFile>(EntityKind::IfcRoot).is_some());
        assert!(level_setter::<InMemoryFile>(EntityKind::IfcElement).is_some());
    }
}
