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

//! Structured line records produced by the classifier.
//!
//! # Example Record Sequence
//!
//! For this configuration:
//!
//! ```text
//! keep_alive_timeout = 15
//! listener *:8080 {
//!     serve_files / {
//!         path = ./wwwroot
//!     }
//! }
//! ```
//!
//! [`ConfigReader::read_line`](crate::ConfigReader::read_line) yields:
//!
//! ```text
//! Assignment { key: "keep_alive_timeout", value: "15" }
//! SectionOpen { name: "listener", param: "*:8080" }
//! SectionOpen { name: "serve_files", param: "/" }
//! Assignment { key: "path", value: "./wwwroot" }
//! SectionClose
//! SectionClose
//! ```

/// One classified logical line.
///
/// Every variant records the physical line number it came from. For a
/// multiline assignment this is the line holding `key = '''`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum ConfigLine {
    /// `key = value`. Spaces inside the key are replaced with `_`.
    Assignment {
        key: String,
        value: String,
        line: usize,
    },

    /// `name param {`.
    SectionOpen {
        name: String,
        param: String,
        line: usize,
    },

    /// `}`.
    SectionClose { line: usize },
}

impl ConfigLine {
    /// Line number the record was read from.
    #[inline]
    pub fn line(&self) -> usize {
        match self {
            Self::Assignment { line, .. }
            | Self::SectionOpen { line, .. }
            | Self::SectionClose { line } => *line,
        }
    }

    /// Check if this record opens a section.
    #[inline]
    pub fn is_section_open(&self) -> bool {
        matches!(self, Self::SectionOpen { .. })
    }

    /// Check if this record closes a section.
    #[inline]
    pub fn is_section_close(&self) -> bool {
        matches!(self, Self::SectionClose { .. })
    }

    /// Get `(key, value)` if this is an assignment.
    #[inline]
    pub fn as_assignment(&self) -> Option<(&str, &str)> {
        match self {
            Self::Assignment { key, value, .. } => Some((key, value)),
            _ => None,
        }
    }

    /// Get `(name, param)` if this opens a section.
    #[inline]
    pub fn as_section(&self) -> Option<(&str, &str)> {
        match self {
            Self::SectionOpen { name, param, .. } => Some((name, param)),
            _ => None,
        }
    }
}
