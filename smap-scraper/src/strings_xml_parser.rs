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

// The res/values/strings.xml file is the only resource file SMAP reads.
// Each <string>, <plurals> and <string-array> element declares one resource,
// keyed by its `name` attribute; the element bodies are aapt's business,
// not ours.
use std::io::Read;

use xml::{reader::XmlEvent, EventReader};

use smap_common::*;

/// Element kinds that declare a string resource. Matches the kinds aapt
/// assigns identifiers to in `R.txt`.
const SCRAPED_ELEMENT_KINDS: [&str; 3] = ["string", "plurals", "string-array"];

/// Returns the `name` attribute of every string resource element in the
/// document, in document order.
///
/// Fails the whole file on a reader error or on a string resource element
/// with no `name` attribute (there is nothing to key that resource by, and a
/// partially-scraped file would be misleading). Callers drop a failed file's
/// contributions atomically and carry on with the next one.
pub fn parse_string_resource_names<T: Read>(byte_source: &mut T) -> Result<Vec<String>> {
    let xml_source = EventReader::new(byte_source);
    let mut names = vec![];

    for event in xml_source {
        match event {
            Ok(XmlEvent::StartElement {
                name,
                attributes,
                namespace: _namespace
            }) => {
                if !SCRAPED_ELEMENT_KINDS.contains(&name.local_name.as_str()) {
                    // <resources>, <item> children, stray elements
                    continue;
                }
                let name_attr = attributes
                    .into_iter()
                    .find(|attr| attr.name.local_name == "name")
                    .ok_or(SmapError::StringResourceMissingName(name.local_name))?;
                names.push(name_attr.value);
            }
            Err(e) => return Err(SmapError::XmlParsingFailed(e)),
            // Don't care about characters or structural events
            _ => {}
        }
    }

    Ok(names)
}
