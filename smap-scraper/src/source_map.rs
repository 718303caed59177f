// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use smap_common::*;

/// Everything SMAP knows about one string resource once the `R.txt`
/// identifier and the declaring strings.xml file have been cross-referenced.
/// Serialized directly into the output document under these field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StringSourceEntry {
    /// The identifier aapt assigned, rendered as `0x`-prefixed zero-padded
    /// uppercase hexadecimal (eg. `0x7F0800E6`).
    pub android_resource_id: String,
    /// Relative path of the strings.xml file that first declared this
    /// resource.
    pub strings_xml_path: String
}

impl StringSourceEntry {
    pub fn new(resource_id: u32, strings_xml_path: &str) -> Self {
        StringSourceEntry {
            android_resource_id: format!("0x{resource_id:08X}"),
            strings_xml_path: strings_xml_path.into()
        }
    }
}

/// The assembled output map: resource name → entry. Sorted keys make
/// repeated runs over identical inputs emit byte-identical files.
pub type StringSourceMap = BTreeMap<String, StringSourceEntry>;

/// Folds one strings file's scraped names into the map.
///
/// Names with no `R.txt` identifier are dropped outright (the resource was
/// stripped or never compiled). Names already claimed by an earlier file are
/// left untouched, so whichever file the caller presents first owns the name
/// for the rest of the run.
pub fn merge_scraped_names(
    mut map: StringSourceMap,
    scraped_names: &[String],
    name_to_id: &HashMap<String, u32>,
    strings_xml_path: &str
) -> StringSourceMap {
    for name in scraped_names {
        if let Some(resource_id) = name_to_id.get(name) {
            if !map.contains_key(name) {
                map.insert(
                    name.clone(),
                    StringSourceEntry::new(*resource_id, strings_xml_path)
                );
            }
        }
    }
    map
}

/// Serializes the map to the compact JSON document written out as
/// `strings.json`.
pub fn to_json_bytes(map: &StringSourceMap) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(map)?)
}
