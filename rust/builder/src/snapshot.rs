// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! JSON snapshots of an in-memory file.
//!
//! Handles are generational keys with no stable external meaning, so the
//! snapshot flattens them to sequential record ids. The format is for
//! debugging and interop tests; the physical STEP serialization belongs to
//! the real file service.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::file::{AttrValue, EntityHandle, HeaderRecord, InMemoryFile};

/// Serializable image of a full in-memory file.
#[derive(Debug, Serialize, Deserialize)]
pub struct FileSnapshot {
    pub headers: Vec<HeaderSnapshot>,
    pub entities: Vec<EntitySnapshot>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HeaderSnapshot {
    pub record: String,
    pub fields: Vec<serde_json::Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct EntitySnapshot {
    pub id: usize,
    pub kind: String,
    pub attributes: Vec<AttributeSnapshot>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AttributeSnapshot {
    pub name: String,
    pub value: serde_json::Value,
}

/// Capture the file's entities and headers.
pub fn snapshot(file: &InMemoryFile) -> FileSnapshot {
    let mut ids: FxHashMap<EntityHandle, usize> = FxHashMap::default();
    for (index, (handle, _)) in file.iter().enumerate() {
        ids.insert(handle, index + 1);
    }

    let entities = file
        .iter()
        .map(|(handle, record)| EntitySnapshot {
            id: ids[&handle],
            kind: record.kind.name().to_string(),
            attributes: record
                .attributes()
                .map(|(name, value)| AttributeSnapshot {
                    name: name.to_string(),
                    value: value_to_json(&ids, value),
                })
                .collect(),
        })
        .collect();

    let headers = file
        .headers()
        .iter()
        .map(|entry| HeaderSnapshot {
            record: header_name(entry.record).to_string(),
            fields: entry.fields.iter().map(|v| value_to_json(&ids, v)).collect(),
        })
        .collect();

    FileSnapshot { headers, entities }
}

fn header_name(record: HeaderRecord) -> &'static str {
    match record {
        HeaderRecord::FileDescription => "FILE_DESCRIPTION",
        HeaderRecord::FileName => "FILE_NAME",
        HeaderRecord::FileSchema => "FILE_SCHEMA",
    }
}

fn value_to_json(ids: &FxHashMap<EntityHandle, usize>, value: &AttrValue) -> serde_json::Value {
    use serde_json::json;
    match value {
        AttrValue::Text(s) => json!(s),
        AttrValue::Real(f) => json!(f),
        AttrValue::Integer(i) => json!(i),
        AttrValue::Boolean(b) => json!(b),
        AttrValue::Enum(e) => json!({ "enum": e }),
        AttrValue::Handle(h) => json!({ "ref": ids.get(h) }),
        AttrValue::HandleList(handles) => {
            json!(handles
                .iter()
                .map(|h| json!({ "ref": ids.get(h) }))
                .collect::<Vec<_>>())
        }
        AttrValue::TextList(items) => json!(items),
        AttrValue::RealMatrix(rows) => json!(rows),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file::ModelFile;
    use ifc_forge_schema::EntityKind;

    #[test]
    fn test_snapshot_flattens_handles_to_ids() {
        let mut file = InMemoryFile::new();
        let owner = file.allocate(EntityKind::IfcOwnerHistory);
        let wall = file.allocate(EntityKind::IfcWall);
        file.set_attribute(wall, "OwnerHistory", AttrValue::Handle(owner))
            .unwrap();

        let snap = snapshot(&file);
        assert_eq!(snap.entities.len(), 2);
        let wall_snap = snap
            .entities
            .iter()
            .find(|e| e.kind == "IfcWall")
            .unwrap();
        let owner_ref = &wall_snap.attributes[0];
        assert_eq!(owner_ref.name, "OwnerHistory");
        assert!(owner_ref.value["ref"].is_u64());
    }

    #[test]
    fn test_snapshot_round_trips_through_json() {
        let mut file = InMemoryFile::new();
        let wall = file.allocate(EntityKind::IfcWall);
        file.set_attribute(wall, "Name", AttrValue::Text("W-01".into()))
            .unwrap();
        file.set_attribute(wall, "PredefinedType", AttrValue::Enum("SOLIDWALL"))
            .unwrap();

        let snap = snapshot(&file);
        let text = serde_json::to_string(&snap).unwrap();
        let back: FileSnapshot = serde_json::from_str(&text).unwrap();
        assert_eq!(back.entities.len(), 1);
        assert_eq!(back.entities[0].kind, "IfcWall");
        assert_eq!(back.entities[0].attributes.len(), 2);
    }
}
