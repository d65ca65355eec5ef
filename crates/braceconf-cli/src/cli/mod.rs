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

//! CLI command definitions and argument parsing.

use crate::commands;
use crate::error::CliError;
use braceconf::ReaderConfig;
use clap::Subcommand;

/// Top-level CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Validate a configuration file and summarize its contents
    Check {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,
    },

    /// Print every record of a configuration file
    Dump {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Print one JSON object per record
        #[arg(long)]
        json: bool,
    },

    /// Print the body of the first matching section
    Section {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Section name
        #[arg(value_name = "NAME")]
        name: String,

        /// Section parameter to match (any parameter if omitted)
        #[arg(value_name = "PARAM")]
        param: Option<String>,

        /// Print one JSON object per record
        #[arg(long)]
        json: bool,
    },
}

impl Commands {
    /// Execute the command with the given reader configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file cannot be read, is malformed, or output
    /// cannot be written.
    pub fn execute(self, config: &ReaderConfig) -> Result<(), CliError> {
        match self {
            Commands::Check { file } => commands::check(&file, config),
            Commands::Dump { file, json } => commands::dump(&file, json, config),
            Commands::Section {
                file,
                name,
                param,
                json,
            } => commands::section(&file, &name, param.as_deref(), json, config),
        }
    }
}
