// Braceconf - Brace-delimited configuration reader
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Section command - isolate and print one section

use super::{dump_records, open_reader};
use crate::error::CliError;
use braceconf::{ConfigReader, ReaderConfig};
use std::io;
use tracing::debug;

/// Print the body of the first section named `name` (and, when given,
/// with parameter `param`).
pub fn section(
    file: &str,
    name: &str,
    param: Option<&str>,
    json: bool,
    config: &ReaderConfig,
) -> Result<(), CliError> {
    let mut reader = open_reader(file, config)?;
    let isolated = find_section(&mut reader, name, param)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    dump_records(isolated, &mut out, json)
}

/// Scan `reader` for the first matching section and isolate it.
///
/// Nested sections are matched too. On success `reader` is left just
/// after the matching opening line.
pub fn find_section(
    reader: &mut ConfigReader,
    name: &str,
    param: Option<&str>,
) -> Result<ConfigReader, CliError> {
    while let Some(line) = reader.read_line()? {
        let matched = match line.as_section() {
            Some((n, p)) => n == name && param.map_or(true, |want| want == p),
            None => false,
        };

        if matched {
            debug!(name, line = line.line(), "found section");
            return Ok(reader.isolate_section(&line)?);
        }
    }

    let name = match param {
        Some(p) => format!("{} {}", name, p),
        None => name.to_string(),
    };
    Err(CliError::SectionNotFound { name })
}
