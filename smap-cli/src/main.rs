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

use res_files::{collect_strings_files, read_r_dot_txt};
use smap_api::{gen_string_source_map_json, Result, SmapError, StringSources};
use std::path::PathBuf;
use std::{env, fs};

pub mod res_files;

/// Run after `aapt` to map each string resource back to the strings.xml file
/// that defined it.
///
/// ```
/// $ ls ./aapt-out
/// R.txt
/// $ smap-cli ./aapt-out ./build ./res ./res-overlay
/// $ ls ./build
/// strings.json
/// ```
///
/// Resource directories are scanned in the order given (use the same order
/// that was passed to `aapt`); when two of them declare the same resource
/// name, the earlier directory's strings.xml is the one recorded.
fn main() -> Result<()> {
    let aapt_dir = env::args().nth(1).ok_or(SmapError::Cli(
        "aapt output directory path (containing R.txt) not provided".into()
    ))?;
    let dest_dir = env::args()
        .nth(2)
        .ok_or(SmapError::Cli("Destination directory path not provided".into()))?;
    let res_dirs: Vec<String> = env::args().skip(3).collect();
    if res_dirs.is_empty() {
        return Err(SmapError::Cli(
            "At least one resource directory path must be provided".into()
        ));
    }

    let sources = StringSources {
        r_dot_txt: read_r_dot_txt(&aapt_dir)?,
        strings_files: collect_strings_files(&res_dirs)?
    };

    let (json, skipped) = gen_string_source_map_json(&sources)?;
    for skip in &skipped {
        eprintln!(
            "Warning: Skipping unparsable strings file {} ({:?})",
            skip.path, skip.error
        );
    }

    let mut out_path = PathBuf::from(&dest_dir);
    out_path.push("strings.json");
    fs::write(&out_path, json).map_err(|e| SmapError::OutputWriteFailed(e.into()))?;
    println!("Wrote {:?} to disk", out_path);

    Ok(())
}
