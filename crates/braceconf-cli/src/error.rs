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

//! Structured error types for the braceconf CLI.

use braceconf::ConfigError;
use thiserror::Error;

/// The main error type for CLI operations.
#[derive(Error, Debug)]
pub enum CliError {
    /// The reader rejected the file.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// A `}` with no open section.
    #[error("Unexpected '}}' at line {line}")]
    StrayClose {
        /// Line holding the `}`
        line: usize,
    },

    /// End of file reached with sections still open.
    #[error("{count} section(s) left open at end of file")]
    UnclosedSections {
        /// Number of sections never closed
        count: usize,
    },

    /// No section matched the requested name and parameter.
    #[error("Section '{name}' not found")]
    SectionNotFound {
        /// Requested `name` or `name param`
        name: String,
    },

    /// JSON serialization error.
    #[error("JSON format error: {0}")]
    Json(String),

    /// Writing to the output failed.
    #[error("Failed to write output: {0}")]
    Output(String),
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Output(err.to_string())
    }
}
