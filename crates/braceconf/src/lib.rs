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

//! Brace-Delimited Configuration Reader
//!
//! This crate reads a hierarchical, line-oriented configuration format one
//! logical line at a time. The caller drives the parse and decides what to
//! build from the records it receives.
//!
//! # Format
//!
//! ```text
//! # comments run to the end of the line
//! keep_alive_timeout = 15
//! expires = 1M 1w
//!
//! listener *:8080 {
//!     serve_files / {
//!         path = ./wwwroot
//!         error template = '''
//!             <html><body>Oops</body></html>
//!         '''
//!     }
//! }
//! ```
//!
//! - `name param {` opens a section, `}` closes it
//! - `key = value` assigns; spaces in keys become underscores
//! - `'''` starts a multiline value ended by a line holding only `'''`
//! - `#` starts a comment anywhere, even inside a value
//!
//! # Features
//!
//! - **Streaming**: only the current line (and a multiline value) is held in
//!   memory
//! - **Section skipping**: discard a whole section, nested sections included,
//!   with a fixed depth cap
//! - **Section isolation**: carve a section out into an independent, bounded
//!   reader that can be parsed later or on another thread
//! - **Error latch**: the first error is kept and returned on every later call
//! - **Limits**: configurable caps on line length and multiline value size
//!
//! # Example
//!
//! ```rust,no_run
//! use braceconf::{ConfigLine, ConfigReader};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut reader = ConfigReader::open("lwan.conf")?;
//! let mut depth = 0usize;
//!
//! while let Some(line) = reader.read_line()? {
//!     match line {
//!         ConfigLine::SectionOpen { name, param, .. } => {
//!             println!("{}{} {} {{", "  ".repeat(depth), name, param);
//!             depth += 1;
//!         }
//!         ConfigLine::SectionClose { .. } => {
//!             depth = depth.saturating_sub(1);
//!             println!("{}}}", "  ".repeat(depth));
//!         }
//!         ConfigLine::Assignment { key, value, .. } => {
//!             println!("{}{} = {}", "  ".repeat(depth), key, value);
//!         }
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod config;
mod error;
mod line;
mod parser;
mod reader;

pub mod normalize;
pub mod value;

pub use config::{ReaderConfig, MAX_SECTION_DEPTH};
pub use error::{ConfigError, ConfigResult};
pub use line::ConfigLine;
pub use parser::ConfigReader;
pub use reader::LineReader;
