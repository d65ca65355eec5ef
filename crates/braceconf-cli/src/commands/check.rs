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

//! Check command - validate a configuration file

use super::open_reader;
use crate::error::CliError;
use braceconf::{ConfigLine, ConfigResult, ReaderConfig};
use colored::Colorize;
use tracing::debug;

/// Counts gathered while validating a file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Number of `key = value` records
    pub assignments: usize,
    /// Number of section openings
    pub sections: usize,
    /// Deepest nesting level seen
    pub max_depth: usize,
}

/// Validate `file` and print a one-line summary.
pub fn check(file: &str, config: &ReaderConfig) -> Result<(), CliError> {
    let summary = summarize(open_reader(file, config)?)?;

    println!(
        "{} {}: {} assignments, {} sections, max depth {}",
        "✓".green().bold(),
        file,
        summary.assignments,
        summary.sections,
        summary.max_depth
    );

    Ok(())
}

/// Read a whole record stream, checking that sections balance.
///
/// The reader itself accepts a stray `}` or a missing one at end of
/// input, so balance is verified here.
pub fn summarize<I>(records: I) -> Result<Summary, CliError>
where
    I: IntoIterator<Item = ConfigResult<ConfigLine>>,
{
    let mut summary = Summary::default();
    let mut depth = 0usize;

    for record in records {
        match record? {
            ConfigLine::Assignment { .. } => summary.assignments += 1,
            ConfigLine::SectionOpen { .. } => {
                summary.sections += 1;
                depth += 1;
                summary.max_depth = summary.max_depth.max(depth);
            }
            ConfigLine::SectionClose { line } => {
                if depth == 0 {
                    return Err(CliError::StrayClose { line });
                }
                depth -= 1;
            }
        }
    }

    if depth > 0 {
        return Err(CliError::UnclosedSections { count: depth });
    }

    debug!(?summary, "check complete");
    Ok(summary)
}
