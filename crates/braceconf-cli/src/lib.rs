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

//! braceconf CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **check**: Validate a file, verify that sections balance and print
//!   assignment and section counts
//! - **dump**: Print the classified record stream as indented text or
//!   one JSON object per line
//! - **section**: Isolate the first section with a given name (and
//!   optionally parameter) and print its body
//!
//! # Examples
//!
//! ```no_run
//! use braceconf_cli::commands::{check, reader_config};
//!
//! # fn main() -> Result<(), braceconf_cli::error::CliError> {
//! let config = reader_config(None);
//! check("server.conf", &config)?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
