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

//! # SMAP API
//!
//! This crate exposes the main public API through which other projects can
//! use SMAP's string source-map generation without going through `smap-cli`.
//!
//! ## Generating a source map
//!
//! The whole step runs in memory; the caller owns all file I/O.
//!
//! ```ignore
//! let sources = StringSources {
//!     r_dot_txt: fs::read("aapt-out/R.txt")?,
//!     strings_files: vec![
//!         StringsXmlFile {
//!             path: "res/values/strings.xml".into(),
//!             contents: fs::read("res/values/strings.xml")?
//!         },
//!         StringsXmlFile {
//!             path: "res-overlay/values/strings.xml".into(),
//!             contents: fs::read("res-overlay/values/strings.xml")?
//!         }
//!     ]
//! };
//!
//! let (json, skipped) = gen_string_source_map_json(&sources)?;
//! fs::write("build/strings.json", json)?;
//! ```

use std::io::Cursor;

use smap_scraper::{
    r_dot_txt::parse_r_dot_txt,
    source_map::{merge_scraped_names, to_json_bytes, StringSourceMap},
    strings_xml_parser::parse_string_resource_names
};

pub use smap_common::{Result, SmapError};
pub use smap_scraper::source_map::StringSourceEntry;

/// One `values/strings.xml` file. The path is the one recorded in the output
/// map for every resource this file is the first to declare; pass whatever
/// path you want readers of `strings.json` to see (usually repo-relative).
pub struct StringsXmlFile {
    pub path: String,
    pub contents: Vec<u8>
}

/// Represents the inputs of one source-map generation step.
pub struct StringSources {
    /// The `R.txt` identifier table aapt wrote during resource compilation.
    pub r_dot_txt: Vec<u8>,
    /// strings.xml files in priority order. When two files declare the same
    /// resource name, the earlier one owns it in the output.
    pub strings_files: Vec<StringsXmlFile>
}

/// A strings file that couldn't be scraped. Skipped files never abort the
/// step; they are reported back so frontends can warn about them.
#[derive(Debug, Clone)]
pub struct SkippedStringsFile {
    pub path: String,
    pub error: SmapError
}

/// Performs all the steps in generating a string source map.
///
/// This includes:
///
///  - Parsing `R.txt` into the resource name → identifier table
///  - Scraping resource names out of each strings.xml file, in order
///  - Cross-referencing the two, first-file-wins per resource name
///
/// Returns: the assembled map, plus the files that were skipped because they
/// couldn't be scraped. A fatal `Err` only comes from the `R.txt` table;
/// unparsable strings files just end up in the skipped list.
///
/// The map is built in-memory without using the local filesystem.
pub fn gen_string_source_map(
    sources: &StringSources
) -> Result<(StringSourceMap, Vec<SkippedStringsFile>)> {
    let name_to_id = parse_r_dot_txt(&sources.r_dot_txt)?;

    let mut map = StringSourceMap::new();
    let mut skipped = vec![];
    for file in &sources.strings_files {
        let mut byte_source = Cursor::new(&file.contents);
        match parse_string_resource_names(&mut byte_source) {
            Ok(names) => map = merge_scraped_names(map, &names, &name_to_id, &file.path),
            Err(error) => skipped.push(SkippedStringsFile {
                path: file.path.clone(),
                error
            })
        }
    }

    Ok((map, skipped))
}

/// Like [gen_string_source_map], but returns the serialized `strings.json`
/// document ready to be written to disk.
pub fn gen_string_source_map_json(
    sources: &StringSources
) -> Result<(Vec<u8>, Vec<SkippedStringsFile>)> {
    let (map, skipped) = gen_string_source_map(sources)?;
    Ok((to_json_bytes(&map)?, skipped))
}

#[cfg(test)]
mod tests {
    use super::*;

    const R_DOT_TXT: &str = concat!(
        "int drawable icon 0x7f020000\n",
        "int string app_name 0x7f080001\n",
        "int string goodbye 0x7f080002\n",
        "int plurals unread_count 0x7f090000\n"
    );

    fn strings_file(path: &str, xml: &str) -> StringsXmlFile {
        StringsXmlFile {
            path: path.into(),
            contents: xml.as_bytes().to_vec()
        }
    }

    fn sources(strings_files: Vec<StringsXmlFile>) -> StringSources {
        StringSources {
            r_dot_txt: R_DOT_TXT.as_bytes().to_vec(),
            strings_files
        }
    }

    #[test]
    fn first_directory_wins_and_unknown_names_vanish() {
        // The worked example: app_name is declared twice, unused_str has no
        // R.txt entry at all.
        let sources = sources(vec![
            strings_file(
                "d1/values/strings.xml",
                "<resources><string name=\"app_name\">Foo</string></resources>"
            ),
            strings_file(
                "d2/values/strings.xml",
                concat!(
                    "<resources>",
                    "<string name=\"app_name\">Bar</string>",
                    "<string name=\"unused_str\">Baz</string>",
                    "</resources>"
                )
            ),
        ]);

        let (map, skipped) = gen_string_source_map(&sources).unwrap();

        assert!(skipped.is_empty());
        assert_eq!(map.len(), 1);
        assert_eq!(map["app_name"].android_resource_id, "0x7F080001");
        assert_eq!(map["app_name"].strings_xml_path, "d1/values/strings.xml");
    }

    #[test]
    fn malformed_file_in_the_middle_is_skipped_not_fatal() {
        let sources = sources(vec![
            strings_file(
                "d1/values/strings.xml",
                "<resources><string name=\"app_name\">Foo</string></resources>"
            ),
            strings_file("d2/values/strings.xml", "<resources><string"),
            strings_file(
                "d3/values/strings.xml",
                "<resources><string name=\"goodbye\">Bye</string></resources>"
            ),
        ]);

        let (map, skipped) = gen_string_source_map(&sources).unwrap();

        assert_eq!(map.len(), 2);
        assert_eq!(map["app_name"].strings_xml_path, "d1/values/strings.xml");
        assert_eq!(map["goodbye"].strings_xml_path, "d3/values/strings.xml");
        assert_eq!(skipped.len(), 1);
        assert_eq!(skipped[0].path, "d2/values/strings.xml");
        assert!(matches!(skipped[0].error, SmapError::XmlParsingFailed(_)));
    }

    #[test]
    fn file_with_nameless_resource_is_dropped_atomically() {
        // goodbye is declared before the malformed element, but the whole
        // file is skipped, so neither contributes.
        let sources = sources(vec![strings_file(
            "d1/values/strings.xml",
            concat!(
                "<resources>",
                "<string name=\"goodbye\">Bye</string>",
                "<plurals><item quantity=\"one\">%d</item></plurals>",
                "</resources>"
            )
        )]);

        let (map, skipped) = gen_string_source_map(&sources).unwrap();

        assert!(map.is_empty());
        assert_eq!(skipped.len(), 1);
        assert!(matches!(
            skipped[0].error,
            SmapError::StringResourceMissingName(_)
        ));
    }

    #[test]
    fn corrupt_r_dot_txt_is_fatal() {
        let sources = StringSources {
            r_dot_txt: b"int string app_name".to_vec(),
            strings_files: vec![]
        };
        assert!(matches!(
            gen_string_source_map(&sources),
            Err(SmapError::RDotTxtMalformedLine(_))
        ));
    }

    #[test]
    fn identical_inputs_serialize_identically() {
        let make = || {
            sources(vec![
                strings_file(
                    "d1/values/strings.xml",
                    concat!(
                        "<resources>",
                        "<string name=\"goodbye\">Bye</string>",
                        "<string name=\"app_name\">Foo</string>",
                        "</resources>"
                    )
                ),
                strings_file(
                    "d2/values/strings.xml",
                    "<resources><plurals name=\"unread_count\"/></resources>"
                ),
            ])
        };

        let (first, _) = gen_string_source_map_json(&make()).unwrap();
        let (second, _) = gen_string_source_map_json(&make()).unwrap();
        assert_eq!(first, second);
    }
}
