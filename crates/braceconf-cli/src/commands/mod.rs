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

//! CLI command implementations

mod check;
mod dump;
mod section;

pub use check::{check, summarize, Summary};
pub use dump::{dump, dump_records};
pub use section::{find_section, section};

use crate::error::CliError;
use braceconf::{ConfigReader, ReaderConfig};

/// Environment variable overriding the maximum physical line length.
pub const MAX_LINE_LENGTH_ENV: &str = "BRACECONF_MAX_LINE_LENGTH";

/// Get the maximum line length from the environment, if set and valid.
fn max_line_length_from_env() -> Option<usize> {
    std::env::var(MAX_LINE_LENGTH_ENV)
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
}

/// Build the reader configuration for a command.
///
/// An explicit `--max-line-length` wins over
/// [`MAX_LINE_LENGTH_ENV`], which wins over the library default.
pub fn reader_config(max_line_length: Option<usize>) -> ReaderConfig {
    match max_line_length.or_else(max_line_length_from_env) {
        Some(max) => ReaderConfig::default().with_max_line_length(max),
        None => ReaderConfig::default(),
    }
}

/// Open a configuration file for reading.
pub fn open_reader(file: &str, config: &ReaderConfig) -> Result<ConfigReader, CliError> {
    Ok(ConfigReader::open_with_config(file, config.clone())?)
}
