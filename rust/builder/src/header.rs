// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! File header preamble.
//!
//! The three STEP header records are constructed like entities but carry no
//! supertype chain and return no handle. The schema identifier comes from
//! the session version, never from the caller.

use crate::builder::EntityBuilder;
use crate::file::{AttrValue, HeaderRecord, ModelFile};

/// File-level metadata for the header preamble.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    pub description: Vec<String>,
    pub implementation_level: String,
    pub name: String,
    pub time_stamp: String,
    pub author: Vec<String>,
    pub organization: Vec<String>,
    pub preprocessor_version: String,
    pub originating_system: String,
    pub authorization: String,
}

impl Default for HeaderInfo {
    fn default() -> Self {
        Self {
            description: vec!["ViewDefinition [CoordinationView]".to_string()],
            implementation_level: "2;1".to_string(),
            name: String::new(),
            time_stamp: String::new(),
            author: Vec::new(),
            organization: Vec::new(),
            preprocessor_version: "ifc-forge".to_string(),
            originating_system: String::new(),
            authorization: String::new(),
        }
    }
}

impl<'a, F: ModelFile> EntityBuilder<'a, F> {
    /// Emit the FILE_DESCRIPTION, FILE_NAME, and FILE_SCHEMA records.
    pub fn write_header(&mut self, info: &HeaderInfo) {
        self.file.add_header(
            HeaderRecord::FileDescription,
            vec![
                AttrValue::TextList(info.description.clone()),
                AttrValue::Text(info.implementation_level.clone()),
            ],
        );
        self.file.add_header(
            HeaderRecord::FileName,
            vec![
                AttrValue::Text(info.name.clone()),
                AttrValue::Text(info.time_stamp.clone()),
                AttrValue::TextList(info.author.clone()),
                AttrValue::TextList(info.organization.clone()),
                AttrValue::Text(info.preprocessor_version.clone()),
                AttrValue::Text(info.originating_system.clone()),
                AttrValue::Text(info.authorization.clone()),
            ],
        );
        self.file.add_header(
            HeaderRecord::FileSchema,
            vec![AttrValue::TextList(vec![self
                .session
                .version()
                .label()
                .to_string()])],
        );
    }
}
