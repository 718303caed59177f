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

// R.txt is the plain-text identifier table aapt writes during resource
// compilation: one `int <kind> <name> 0x<id>` line per scalar resource, plus
// `int[] styleable <name> { ... }` blocks we never care about.
use std::collections::HashMap;

use smap_common::*;

/// The `R.txt` kinds that correspond to resources declared in strings.xml.
/// aapt files `<string-array>` resources under the `array` kind.
const STRING_RESOURCE_KINDS: [&str; 3] = ["string", "plurals", "array"];

/// Builds the resource name → identifier table from the bytes of an `R.txt`
/// file, keeping only the string-like kinds.
///
/// Lines for other kinds (drawables, ids, styleable blocks) are skipped
/// without comment. A line that *does* declare a string-like kind but can't
/// be read back is a fatal error: silently dropping a string resource would
/// make the output map wrong, not merely smaller.
pub fn parse_r_dot_txt(bytes: &[u8]) -> Result<HashMap<String, u32>> {
    let table = std::str::from_utf8(bytes).map_err(|_e| SmapError::RDotTxtNotUtf8)?;
    let mut name_to_id = HashMap::new();

    for line in table.lines() {
        let mut fields = line.split_whitespace();
        // `int[]` opens a styleable block, which spans lines and holds no
        // string resources. Skipping every non-`int` first field also skips
        // the block's continuation lines and any blank lines.
        if fields.next() != Some("int") {
            continue;
        }
        match fields.next() {
            Some(kind) if STRING_RESOURCE_KINDS.contains(&kind) => {}
            _ => continue
        }
        let name = fields
            .next()
            .ok_or(SmapError::RDotTxtMalformedLine(line.into()))?;
        let id = fields
            .next()
            .and_then(|id| id.strip_prefix("0x"))
            .ok_or(SmapError::RDotTxtMalformedLine(line.into()))?;
        let id = u32::from_str_radix(id, 16)?;

        // aapt never writes the same name twice within a kind, but a
        // hand-edited table might. Last declaration wins.
        name_to_id.insert(name.into(), id);
    }

    Ok(name_to_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_string_like_kinds() {
        let table = concat!(
            "int drawable icon 0x7f020000\n",
            "int string app_name 0x7f080001\n",
            "int plurals unread_count 0x7f090000\n",
            "int array planets 0x7f0a0000\n",
            "int id toolbar 0x7f0b0000\n"
        );
        let name_to_id = parse_r_dot_txt(table.as_bytes()).unwrap();
        assert_eq!(name_to_id.len(), 3);
        assert_eq!(name_to_id["app_name"], 0x7f080001);
        assert_eq!(name_to_id["unread_count"], 0x7f090000);
        assert_eq!(name_to_id["planets"], 0x7f0a0000);
    }

    #[test]
    fn skips_styleable_blocks_and_blank_lines() {
        let table = concat!(
            "int string app_name 0x7f080001\n",
            "\n",
            "int[] styleable ActionBar { 0x7f010001, 0x7f010003 }\n",
            "int styleable ActionBar_background 0\n"
        );
        let name_to_id = parse_r_dot_txt(table.as_bytes()).unwrap();
        assert_eq!(name_to_id.len(), 1);
        assert!(name_to_id.contains_key("app_name"));
    }

    #[test]
    fn duplicate_names_resolve_last_wins() {
        let table = concat!(
            "int string app_name 0x7f080001\n",
            "int string app_name 0x7f080002\n"
        );
        let name_to_id = parse_r_dot_txt(table.as_bytes()).unwrap();
        assert_eq!(name_to_id["app_name"], 0x7f080002);
    }

    #[test]
    fn truncated_string_line_is_fatal() {
        let result = parse_r_dot_txt(b"int string app_name");
        assert!(matches!(result, Err(SmapError::RDotTxtMalformedLine(_))));
    }

    #[test]
    fn unprefixed_identifier_is_fatal() {
        let result = parse_r_dot_txt(b"int string app_name 7f080001");
        assert!(matches!(result, Err(SmapError::RDotTxtMalformedLine(_))));
    }

    #[test]
    fn non_hexadecimal_identifier_is_fatal() {
        let result = parse_r_dot_txt(b"int string app_name 0xG5");
        assert!(matches!(result, Err(SmapError::ResourceIdParsingFailed(_))));
    }

    #[test]
    fn non_utf8_table_is_fatal() {
        let result = parse_r_dot_txt(&[0x69, 0x6e, 0x74, 0xff, 0xfe]);
        assert!(matches!(result, Err(SmapError::RDotTxtNotUtf8)));
    }

    #[test]
    fn empty_table_yields_empty_map() {
        assert!(parse_r_dot_txt(b"").unwrap().is_empty());
    }
}
