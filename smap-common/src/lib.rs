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

use std::{io, num::ParseIntError, rc::Rc};

/// Common error type making it easier to share `Result`s between SMAP crates.
///
/// In general designed to avoid needing utilities like `map_err`.
#[derive(Debug, Clone)]
pub enum SmapError {
    /// smap-cli encountered an error while processing something specific to the
    /// command line implementation. For example, not enough arguments were
    /// passed via the shell.
    Cli(String),
    /// No `R.txt` exists at the expected path inside the aapt output
    /// directory. Usually means the resource compilation step didn't run
    /// (or ran somewhere else). Carries the path that was probed.
    RDotTxtNotFound(String),
    /// `R.txt` exists but isn't valid UTF-8. aapt only ever writes ASCII,
    /// so the file is either corrupt or not an `R.txt` at all.
    RDotTxtNotUtf8,
    /// A line in `R.txt` declared a string-like resource but didn't have the
    /// expected `int <kind> <name> 0x<id>` shape. A string resource whose
    /// identifier can't be recovered would silently vanish from the output
    /// map, so this is treated as corrupt input rather than skipped.
    /// Carries the offending line.
    RDotTxtMalformedLine(String),
    /// A string-like resource line in `R.txt` had an identifier field that
    /// wasn't parseable as hexadecimal (eg. `0xG5`). See the note on
    /// [RDotTxtMalformedLine](SmapError::RDotTxtMalformedLine) for why this
    /// isn't skipped.
    ResourceIdParsingFailed(ParseIntError),
    /// Parsing failed while reading a `strings.xml` file. See
    /// [xml::reader::Error]. Fatal for that one file only: the build step
    /// drops the file's contributions and keeps going.
    XmlParsingFailed(xml::reader::Error),
    /// A `<string>`, `<plurals>` or `<string-array>` element had no `name`
    /// attribute, so there is nothing to key the resource by. Handled the
    /// same way as [XmlParsingFailed](SmapError::XmlParsingFailed): the file
    /// is dropped, the step continues. Carries the element kind.
    StringResourceMissingName(String),
    /// An error occurred while reading input files from disk. Since only
    /// `smap-cli` interacts with the disk, it's likely that one of the file
    /// paths you passed to it is invalid.
    FileIoError(Rc<io::Error>),
    /// The assembled map couldn't be serialized to JSON. See
    /// [serde_json::Error].
    JsonSerialisationFailed(Rc<serde_json::Error>),
    /// `strings.json` couldn't be written to the destination directory
    /// (directory missing, bad permissions, full disk).
    OutputWriteFailed(Rc<io::Error>)
}

/// Result type where the error is always [SmapError].
pub type Result<T> = std::result::Result<T, SmapError>;

// Automatic conversion from other types of error to SmapError makes the rest of the code cleaner
impl From<io::Error> for SmapError {
    fn from(value: io::Error) -> Self {
        SmapError::FileIoError(value.into())
    }
}

impl From<ParseIntError> for SmapError {
    fn from(value: ParseIntError) -> Self {
        SmapError::ResourceIdParsingFailed(value)
    }
}

impl From<serde_json::Error> for SmapError {
    fn from(value: serde_json::Error) -> Self {
        SmapError::JsonSerialisationFailed(value.into())
    }
}
