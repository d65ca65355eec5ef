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

//! Error types for the configuration reader.
//!
//! Every failure a [`ConfigReader`](crate::ConfigReader) can report is a
//! [`ConfigError`]. Readers latch the first error they produce and hand the
//! same value back on every later structural call, so the type is `Clone`
//! (I/O errors are shared through an [`Arc`]).
//!
//! # Error Categories
//!
//! - **I/O Errors**: opening, seeking or reading the backing file
//! - **Format Errors**: malformed section openings, assignments without `=`
//! - **Structure Errors**: unterminated multiline values, unbalanced or too
//!   deeply nested sections
//! - **Limit Errors**: physical lines or multiline values above the
//!   configured caps
//! - **Isolation Errors**: a section could not be carved out into a sub-reader
//!
//! # Examples
//!
//! ```rust,no_run
//! use braceconf::{ConfigError, ConfigReader};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut reader = ConfigReader::open("lwan.conf")?;
//!
//! loop {
//!     match reader.read_line() {
//!         Ok(Some(line)) => println!("{:?}", line),
//!         Ok(None) => break,
//!         Err(ConfigError::RecursionTooDeep { line }) => {
//!             eprintln!("sections nested too deeply near line {}", line);
//!             break;
//!         }
//!         Err(e) => {
//!             eprintln!("Error: {}", e);
//!             break;
//!         }
//!     }
//! }
//! # Ok(())
//! # }
//! ```

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur while reading a configuration stream.
///
/// Most variants carry the physical line number where the problem was
/// detected; use [`line()`](Self::line) to extract it uniformly.
#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    /// IO error while reading or seeking the backing file.
    #[error("IO error: {0}")]
    Io(Arc<io::Error>),

    /// The backing file could not be opened.
    #[error("Could not open '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: Arc<io::Error>,
    },

    /// Invalid UTF-8 encoding.
    #[error("Invalid UTF-8 at line {line}: {message}")]
    Utf8 { line: usize, message: String },

    /// A physical line exceeded the configured maximum length.
    #[error("Line {line} exceeds maximum length of {limit} bytes")]
    LineTooLong { line: usize, limit: usize },

    /// A line ending in `{` did not have a name and a parameter.
    #[error("Malformed section opening at line {line}")]
    MalformedSection { line: usize },

    /// A line that is neither a section boundary nor contains `=`.
    #[error("Expecting section or key=value at line {line}")]
    MissingSeparator { line: usize },

    /// Input ended before the closing `'''` of a multiline value.
    #[error("EOF while scanning for end of multiline string started at line {line}")]
    UnterminatedMultiline { line: usize },

    /// A multiline value grew beyond the configured maximum size.
    #[error("Multiline string started at line {line} exceeds maximum size of {limit} bytes")]
    MultilineTooLarge { line: usize, limit: usize },

    /// Sections nested beyond the skip depth cap.
    #[error("Recursion level too deep at line {line}")]
    RecursionTooDeep { line: usize },

    /// Input ended before the matching `}` of a section.
    #[error("Unexpected end of input inside section opened at line {line}")]
    UnexpectedEof { line: usize },

    /// Skip or isolation was requested for a line that does not open a section.
    #[error("Line {line} does not open a section")]
    NotASection { line: usize },

    /// Skip or isolation was requested for a section that is not the most
    /// recently read line, so the cursor no longer sits right after it.
    #[error("Section opened at line {line} is not the last line read")]
    StaleSection { line: usize },

    /// A section could not be isolated into a sub-reader.
    #[error("Unknown error while isolating section at line {line}: {source}")]
    Isolation {
        line: usize,
        #[source]
        source: Box<ConfigError>,
    },
}

impl ConfigError {
    /// Wrap the cause of a failed isolation attempt.
    #[inline]
    pub fn isolation(line: usize, source: ConfigError) -> Self {
        Self::Isolation {
            line,
            source: Box::new(source),
        }
    }

    /// Get the line number if available.
    #[inline]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Utf8 { line, .. }
            | Self::LineTooLong { line, .. }
            | Self::MalformedSection { line }
            | Self::MissingSeparator { line }
            | Self::UnterminatedMultiline { line }
            | Self::MultilineTooLarge { line, .. }
            | Self::RecursionTooDeep { line }
            | Self::UnexpectedEof { line }
            | Self::NotASection { line }
            | Self::StaleSection { line }
            | Self::Isolation { line, .. } => Some(*line),
            Self::Io(_) | Self::Open { .. } => None,
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        Self::Io(Arc::new(err))
    }
}

/// Result type for configuration reading.
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Display tests ====================

    #[test]
    fn test_io_display() {
        let err = ConfigError::from(io::Error::new(io::ErrorKind::NotFound, "gone"));
        let display = err.to_string();
        assert!(display.contains("IO error"));
        assert!(display.contains("gone"));
    }

    #[test]
    fn test_open_display_includes_path() {
        let err = ConfigError::Open {
            path: PathBuf::from("/etc/lwan.conf"),
            source: Arc::new(io::Error::new(io::ErrorKind::NotFound, "missing")),
        };
        let display = err.to_string();
        assert!(display.contains("/etc/lwan.conf"));
        assert!(display.contains("missing"));
    }

    #[test]
    fn test_format_messages() {
        assert_eq!(
            ConfigError::MalformedSection { line: 3 }.to_string(),
            "Malformed section opening at line 3"
        );
        assert_eq!(
            ConfigError::MissingSeparator { line: 7 }.to_string(),
            "Expecting section or key=value at line 7"
        );
        assert_eq!(
            ConfigError::RecursionTooDeep { line: 12 }.to_string(),
            "Recursion level too deep at line 12"
        );
        assert!(ConfigError::UnterminatedMultiline { line: 2 }
            .to_string()
            .starts_with("EOF while scanning for end of multiline string"));
    }

    #[test]
    fn test_isolation_display_includes_cause() {
        let err = ConfigError::isolation(4, ConfigError::UnexpectedEof { line: 4 });
        let display = err.to_string();
        assert!(display.contains("isolating section"));
        assert!(display.contains("Unexpected end of input"));
    }

    // ==================== Line accessor tests ====================

    #[test]
    fn test_line_accessor() {
        assert_eq!(ConfigError::MissingSeparator { line: 9 }.line(), Some(9));
        assert_eq!(
            ConfigError::LineTooLong {
                line: 1,
                limit: 10
            }
            .line(),
            Some(1)
        );
        assert_eq!(
            ConfigError::from(io::Error::new(io::ErrorKind::Other, "x")).line(),
            None
        );
    }

    #[test]
    fn test_source_chain() {
        use std::error::Error as _;

        let err = ConfigError::isolation(1, ConfigError::RecursionTooDeep { line: 11 });
        let source = err.source().expect("isolation error has a source");
        assert_eq!(source.to_string(), "Recursion level too deep at line 11");
    }

    #[test]
    fn test_clone_preserves_message() {
        let err = ConfigError::from(io::Error::new(io::ErrorKind::Other, "disk"));
        let cloned = err.clone();
        assert_eq!(err.to_string(), cloned.to_string());
    }
}
