// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Identifier provider seam.
//!
//! Every rooted entity needs a globally unique identifier and a shared
//! owner-history reference. Real GUID compression lives in the host's
//! identifier service; [`SequentialIds`] is the embeddable default used by
//! tests and demos.

use ifc_forge_schema::EntityKind;

use crate::file::{EntityHandle, ModelFile};

/// Supplies identifiers and the session's shared owner-history handle.
pub trait IdProvider {
    /// Next globally unique identifier.
    fn next_guid(&mut self) -> String;

    /// The owner-history record shared by every rooted entity this session.
    fn owner_history(&self) -> EntityHandle;
}

/// Deterministic provider: zero-padded sequential ids and one owner-history
/// record allocated up front.
#[derive(Debug)]
pub struct SequentialIds {
    counter: u64,
    owner_history: EntityHandle,
}

impl SequentialIds {
    /// Allocates the shared owner-history record in `file`.
    pub fn new(file: &mut impl ModelFile) -> Self {
        Self {
            counter: 0,
            owner_history: file.allocate(EntityKind::IfcOwnerHistory),
        }
    }
}

impl IdProvider for SequentialIds {
    fn next_guid(&mut self) -> String {
        self.counter += 1;
        format!("{:022}", self.counter)
    }

    fn owner_history(&self) -> EntityHandle {
        self.owner_history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file::InMemoryFile;

    #[test]
    fn test_sequential_ids_are_unique_and_fixed_width() {
        let mut file = InMemoryFile::new();
        let mut ids = SequentialIds::new(&mut file);
        let a = ids.next_guid();
        let b = ids.next_guid();
        assert_ne!(a, b);
        // IFC GlobalId slots are 22 characters
        assert_eq!(a.len(), 22);
        assert_eq!(b.len(), 22);
    }

    #[test]
    fn test_owner_history_is_allocated_in_file() {
        let mut file = InMemoryFile::new();
        let ids = SequentialIds::new(&mut file);
        assert_eq!(
            file.kind_of(ids.owner_history()),
            Some(EntityKind::IfcOwnerHistory)
        );
    }
}
