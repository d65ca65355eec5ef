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

//! braceconf Command Line Interface

use braceconf_cli::cli::Commands;
use braceconf_cli::commands::reader_config;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// braceconf - brace-delimited configuration file tool
///
/// # Examples
///
/// ```bash
/// # Validate a file
/// braceconf check server.conf
///
/// # Print all records as JSON
/// braceconf dump server.conf --json
///
/// # Print the body of `site example.com { ... }`
/// braceconf section server.conf site example.com
/// ```
#[derive(Parser)]
#[command(name = "braceconf")]
#[command(author, version, about = "braceconf - brace-delimited configuration file tool", long_about = None)]
struct Cli {
    /// Maximum physical line length in bytes
    /// (overrides BRACECONF_MAX_LINE_LENGTH)
    #[arg(long, global = true, value_name = "BYTES")]
    max_line_length: Option<usize>,

    /// Log reader activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn init_tracing(verbose: bool) {
    let directive = if verbose { "braceconf=debug" } else { "braceconf=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(directive.parse().expect("valid directive")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = reader_config(cli.max_line_length);
    match cli.command.execute(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
