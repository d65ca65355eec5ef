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

//! Reader configuration and resource limits.

/// Hard cap on section nesting while skipping or isolating a section.
///
/// The section being skipped counts as depth 1; opening a section at depth
/// 11 fails with [`ConfigError::RecursionTooDeep`](crate::ConfigError::RecursionTooDeep).
pub const MAX_SECTION_DEPTH: usize = 10;

/// Configuration options for a [`ConfigReader`](crate::ConfigReader).
///
/// Isolated readers inherit the configuration of the reader they were
/// carved out of.
///
/// # Examples
///
/// ## Default Configuration
///
/// ```rust
/// use braceconf::ReaderConfig;
///
/// let config = ReaderConfig::default();
/// assert_eq!(config.max_line_length, 4096);
/// assert_eq!(config.max_multiline_size, 1024 * 1024);
/// assert_eq!(config.buffer_size, 8 * 1024);
/// ```
///
/// ## Configuration for Untrusted Input
///
/// ```rust
/// use braceconf::ReaderConfig;
///
/// let config = ReaderConfig::default()
///     .with_max_line_length(512)
///     .with_max_multiline_size(16 * 1024);
/// assert_eq!(config.max_line_length, 512);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderConfig {
    /// Maximum physical line length in bytes, excluding the `\n` terminator.
    ///
    /// Longer lines fail with `ConfigError::LineTooLong`; they are never
    /// silently truncated.
    ///
    /// Default: 4096 bytes
    pub max_line_length: usize,

    /// Maximum size of an accumulated multiline value in bytes.
    ///
    /// Default: 1MB
    pub max_multiline_size: usize,

    /// Buffer size for reading the backing file.
    ///
    /// Default: 8KB
    pub buffer_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            max_line_length: 4096,
            max_multiline_size: 1024 * 1024,
            buffer_size: 8 * 1024,
        }
    }
}

impl ReaderConfig {
    /// Configuration with no size restrictions (for testing).
    pub fn unlimited() -> Self {
        Self {
            max_line_length: usize::MAX,
            max_multiline_size: usize::MAX,
            ..Self::default()
        }
    }

    /// Set the maximum physical line length.
    pub fn with_max_line_length(mut self, max: usize) -> Self {
        self.max_line_length = max;
        self
    }

    /// Set the maximum multiline value size.
    pub fn with_max_multiline_size(mut self, max: usize) -> Self {
        self.max_multiline_size = max;
        self
    }

    /// Set the read buffer size. Zero is bumped to one byte.
    pub fn with_buffer_size(mut self, size: usize) -> Self {
        self.buffer_size = size.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let config = ReaderConfig::default();
        assert_eq!(config.max_line_length, 4096);
        assert_eq!(config.max_multiline_size, 1024 * 1024);
        assert_eq!(config.buffer_size, 8 * 1024);
    }

    #[test]
    fn test_unlimited() {
        let config = ReaderConfig::unlimited();
        assert_eq!(config.max_line_length, usize::MAX);
        assert_eq!(config.max_multiline_size, usize::MAX);
        assert_eq!(config.buffer_size, ReaderConfig::default().buffer_size);
    }

    #[test]
    fn test_builders() {
        let config = ReaderConfig::default()
            .with_max_line_length(80)
            .with_max_multiline_size(100)
            .with_buffer_size(0);
        assert_eq!(config.max_line_length, 80);
        assert_eq!(config.max_multiline_size, 100);
        assert_eq!(config.buffer_size, 1);
    }

    #[test]
    fn test_depth_cap() {
        assert_eq!(MAX_SECTION_DEPTH, 10);
    }
}
