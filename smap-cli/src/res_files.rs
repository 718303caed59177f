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

use smap_api::{Result, SmapError, StringsXmlFile};
use std::{fs, io, path::PathBuf};

/// Reads `R.txt` from the aapt output directory.
///
/// A missing file gets its own error kind since it usually means the
/// resource compilation step never ran; any other read failure is an
/// ordinary I/O error.
pub fn read_r_dot_txt(aapt_dir: &str) -> Result<Vec<u8>> {
    let mut r_dot_txt_path = PathBuf::from(aapt_dir);
    r_dot_txt_path.push("R.txt");
    match fs::read(&r_dot_txt_path) {
        Ok(bytes) => Ok(bytes),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Err(SmapError::RDotTxtNotFound(
            r_dot_txt_path.to_string_lossy().into()
        )),
        Err(err) => Err(err.into())
    }
}

/// Collects `<res-dir>/values/strings.xml` from each resource directory,
/// preserving the order the directories were passed in (that order decides
/// which file owns a resource name declared more than once).
///
/// A directory with no strings file is skipped silently; locale and variant
/// splits often have none. A strings file that exists but can't be read is
/// fatal.
pub fn collect_strings_files(res_dirs: &[String]) -> Result<Vec<StringsXmlFile>> {
    let mut strings_files = vec![];
    for res_dir in res_dirs {
        let mut strings_path = PathBuf::from(res_dir);
        strings_path.push("values");
        strings_path.push("strings.xml");
        match fs::read(&strings_path) {
            Ok(contents) => strings_files.push(StringsXmlFile {
                path: strings_path.to_string_lossy().into(),
                contents
            }),
            Err(err) if err.kind() == io::ErrorKind::NotFound => continue,
            Err(err) => return Err(err.into())
        }
    }
    Ok(strings_files)
}
