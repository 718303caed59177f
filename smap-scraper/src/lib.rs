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

//! Scraping core for SMAP: parses aapt's `R.txt` identifier table, scrapes
//! resource names out of strings.xml documents, and assembles the
//! name → `{identifier, origin path}` map serialized into `strings.json`.

pub mod r_dot_txt;
pub mod source_map;
pub mod strings_xml_parser;
