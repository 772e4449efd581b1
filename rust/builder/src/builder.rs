// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The entity builder core.
//!
//! Every factory follows the same four-step protocol:
//!
//! 1. validate all inputs — own constraints plus the ancestor-relevant
//!    ones — before anything is allocated;
//! 2. allocate the handle and apply name/description overrides from the
//!    host source object;
//! 3. assign the kind's own attributes (assembled before allocation, so
//!    assembly cannot leave partial state behind);
//! 4. run the kind's setter plan up the supertype chain, root first.
//!
//! The ordering invariant — a validation failure anywhere leaves zero
//! allocations — holds because steps 3 and 4 only run attribute writes that
//! were already validated, and the setter plan is resolved before the
//! handle exists.

use rustc_hash::FxHashMap;

use ifc_forge_schema::{EntityKind, SchemaVersion};

use crate::chain::{level_setter, Seed, SetterPlan};
use crate::error::Result;
use crate::file::{AttrValue, EntityHandle, ModelFile};
use crate::host::SourceObject;
use crate::ident::IdProvider;
use crate::session::ExportSession;

/// Supertype set for placement inputs.
pub(crate) const OBJECT_PLACEMENT: &[EntityKind] = &[EntityKind::IfcObjectPlacement];
/// Supertype set for representation inputs.
pub(crate) const PRODUCT_REPRESENTATION: &[EntityKind] = &[EntityKind::IfcProductRepresentation];

/// Constructs validated schema entities into a borrowed model file.
///
/// The builder owns nothing: the file owns the entities, the session owns
/// the registry and policy, the id provider owns identifier state. One
/// builder serves one exporting borrow; handles are returned to the caller
/// and never retained.
pub struct EntityBuilder<'a, F: ModelFile> {
    pub(crate) file: &'a mut F,
    pub(crate) session: &'a ExportSession,
    pub(crate) ids: &'a mut dyn IdProvider,
    plans: FxHashMap<EntityKind, SetterPlan<F>>,
}

impl<'a, F: ModelFile> EntityBuilder<'a, F> {
    pub fn new(
        file: &'a mut F,
        session: &'a ExportSession,
        ids: &'a mut dyn IdProvider,
    ) -> Self {
        Self {
            file,
            session,
            ids,
            plans: FxHashMap::default(),
        }
    }

    /// The session this builder constructs for.
    #[inline]
    pub fn session(&self) -> &ExportSession {
        self.session
    }

    /// Resolved setter plan for a kind, cached after first use. A kind
    /// outside the active version errors here — before any allocation.
    pub(crate) fn plan_for(&mut self, kind: EntityKind) -> Result<SetterPlan<F>> {
        if let Some(plan) = self.plans.get(&kind) {
            return Ok(plan.clone());
        }
        let chain = self.session.registry().supertype_chain(kind)?;
        let plan: SetterPlan<F> = chain.iter().copied().filter_map(level_setter::<F>).collect();
        self.plans.insert(kind, plan.clone());
        Ok(plan)
    }

    /// Steps 2–4 of the protocol. Callers have finished validating.
    pub(crate) fn construct(
        &mut self,
        kind: EntityKind,
        source: Option<&SourceObject>,
        seed: Seed,
        own: Vec<(&'static str, AttrValue)>,
    ) -> Result<EntityHandle> {
        let plan = self.plan_for(kind)?;
        let handle = self.file.allocate(kind);
        if let Some(source) = source {
            if let Some(name) = &source.name {
                self.file
                    .set_attribute(handle, "Name", AttrValue::Text(name.clone()))?;
            }
            if let Some(description) = &source.description {
                self.file
                    .set_attribute(handle, "Description", AttrValue::Text(description.clone()))?;
            }
        }
        for (name, value) in own {
            self.file.set_attribute(handle, name, value)?;
        }
        for setter in &plan {
            setter(self.file, &seed, handle)?;
        }
        Ok(handle)
    }

    /// Seed for a rooted entity: identifier from the source object when it
    /// carries one, otherwise freshly generated, plus the session's shared
    /// owner-history reference.
    pub(crate) fn rooted_seed(&mut self, source: Option<&SourceObject>) -> Seed {
        let guid = source
            .and_then(|s| s.guid.clone())
            .unwrap_or_else(|| self.ids.next_guid());
        Seed {
            guid,
            owner_history: Some(self.ids.owner_history()),
            ..Seed::default()
        }
    }

    /// The allowed supertype for related objects of relationships —
    /// IfcObjectDefinition from IFC2x3 on, IfcObject under the legacy
    /// dialect that lacks it.
    pub(crate) fn related_objects_supertype(&self) -> &'static [EntityKind] {
        if self.session.version().at_least(SchemaVersion::Ifc2x3) {
            &[EntityKind::IfcObjectDefinition]
        } else {
            &[EntityKind::IfcObject]
        }
    }
}
