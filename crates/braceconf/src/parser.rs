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

//! Configuration reader implementation.
//!
//! [`ConfigReader`] turns a configuration file into a stream of
//! [`ConfigLine`] records, one logical line per call. The caller drives the
//! parse: on every section opening it can keep reading line by line, skip the
//! whole section, or isolate the section into an independent reader that
//! sees only the section body.
//!
//! # Basic Usage
//!
//! ```rust,no_run
//! use braceconf::{ConfigLine, ConfigReader};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut reader = ConfigReader::open("lwan.conf")?;
//!
//! while let Some(line) = reader.read_line()? {
//!     match &line {
//!         ConfigLine::Assignment { key, value, .. } => println!("{} = {}", key, value),
//!         ConfigLine::SectionOpen { name, .. } if name == "straitjacket" => {
//!             reader.skip_section(&line)?;
//!         }
//!         ConfigLine::SectionOpen { name, param, .. } => println!("{} {} {{", name, param),
//!         ConfigLine::SectionClose { .. } => println!("}}"),
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Isolating a Section
//!
//! ```rust,no_run
//! use braceconf::ConfigReader;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let mut reader = ConfigReader::open("lwan.conf")?;
//!
//! while let Some(line) = reader.read_line()? {
//!     if line.as_section() == Some(("site", "main")) {
//!         let site = reader.isolate_section(&line)?;
//!         // `site` can be handed to another thread; `reader` continues with
//!         // the first line of the section body.
//!         std::thread::spawn(move || site.count()).join().unwrap();
//!     }
//! }
//! # Ok(())
//! # }
//! ```

use crate::config::{ReaderConfig, MAX_SECTION_DEPTH};
use crate::error::{ConfigError, ConfigResult};
use crate::line::ConfigLine;
use crate::normalize::{
    is_multiline_sentinel, normalize_key, strip_comment, trim, trim_end, MULTILINE_SENTINEL,
};
use crate::reader::{decode, LineReader};
use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, trace};

/// Streaming reader over one configuration file.
///
/// # Error Latch
///
/// The first error a reader produces is stored. From then on every
/// structural call ([`read_line`](Self::read_line),
/// [`skip_section`](Self::skip_section),
/// [`isolate_section`](Self::isolate_section)) returns a clone of that error
/// without touching the file. Errors are terminal: open a new reader to
/// start over.
///
/// # Isolation
///
/// [`isolate_section`](Self::isolate_section) opens a second handle on the
/// same path, positioned at the start of the section body and bounded at
/// the end of its closing line. The two readers share nothing but the path,
/// so each can be driven from a different thread.
///
/// # Iterator Interface
///
/// `ConfigReader` implements `Iterator<Item = ConfigResult<ConfigLine>>`.
/// Iteration ends after the first error.
pub struct ConfigReader {
    lines: LineReader<File>,
    path: PathBuf,
    config: ReaderConfig,
    multiline: String,
    error: Option<ConfigError>,
}

/// Outcome of classifying one normalized line.
enum Classified {
    Complete(ConfigLine),
    Multiline { key: String, line: usize },
}

impl ConfigReader {
    /// Open a configuration file with the default configuration.
    pub fn open(path: impl AsRef<Path>) -> ConfigResult<Self> {
        Self::open_with_config(path, ReaderConfig::default())
    }

    /// Open a configuration file with custom limits.
    pub fn open_with_config(path: impl AsRef<Path>, config: ReaderConfig) -> ConfigResult<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::open(&path).map_err(|e| ConfigError::Open {
            path: path.clone(),
            source: Arc::new(e),
        })?;

        Ok(Self {
            lines: LineReader::with_config(file, &config),
            path,
            config,
            multiline: String::new(),
            error: None,
        })
    }

    /// Open a fresh handle on `path` that starts at byte `start`.
    fn open_range(
        path: &Path,
        config: &ReaderConfig,
        start: u64,
        end: Option<u64>,
        line_number: usize,
    ) -> ConfigResult<Self> {
        let mut reader = Self::open_with_config(path, config.clone())?;
        reader.lines.seek_to(start)?;
        if let Some(end) = end {
            reader.lines.set_limit(end);
        }
        reader.lines.set_line_number(line_number);
        Ok(reader)
    }

    /// Path of the backing file.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Limits this reader was opened with.
    #[inline]
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Number of the last physical line consumed.
    #[inline]
    pub fn line_number(&self) -> usize {
        self.lines.line_number()
    }

    /// Byte offset just past the last physical line consumed.
    #[inline]
    pub fn position(&self) -> u64 {
        self.lines.position()
    }

    /// End offset of the isolated range, `None` when unbounded.
    #[inline]
    pub fn isolation_end(&self) -> Option<u64> {
        self.lines.limit()
    }

    /// The latched error, if the reader has failed.
    #[inline]
    pub fn error(&self) -> Option<&ConfigError> {
        self.error.as_ref()
    }

    /// Message of the latched error, if the reader has failed.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }

    fn check_latch(&self) -> ConfigResult<()> {
        match &self.error {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn latch<T>(&mut self, result: ConfigResult<T>) -> ConfigResult<T> {
        if let Err(err) = &result {
            if self.error.is_none() {
                self.error = Some(err.clone());
            }
        }
        result
    }

    /// Read the next logical line.
    ///
    /// Blank and comment-only lines are skipped. Returns `Ok(None)` at end of
    /// input, which for an isolated reader is the end of the section body.
    pub fn read_line(&mut self) -> ConfigResult<Option<ConfigLine>> {
        self.check_latch()?;
        let result = self.next_record();
        self.latch(result)
    }

    fn next_record(&mut self) -> ConfigResult<Option<ConfigLine>> {
        let classified = loop {
            let Some((line, raw)) = self.lines.next_raw_line()? else {
                return Ok(None);
            };
            let content = trim(decode(line, strip_comment(raw))?);
            if !content.is_empty() {
                break classify(content, line)?;
            }
        };

        let record = match classified {
            Classified::Complete(record) => record,
            Classified::Multiline { key, line } => {
                let value = self.read_multiline(line)?;
                ConfigLine::Assignment { key, value, line }
            }
        };
        trace!(line = record.line(), ?record, "classified line");
        Ok(Some(record))
    }

    /// Accumulate raw lines until a line that is exactly `'''` once trimmed.
    ///
    /// Leading whitespace of each captured line is kept; trailing whitespace
    /// is dropped and every line, the last included, is followed by `\n`.
    fn read_multiline(&mut self, start_line: usize) -> ConfigResult<String> {
        self.multiline.clear();
        let limit = self.config.max_multiline_size;

        while let Some((_, raw)) = self.lines.next_line()? {
            if is_multiline_sentinel(raw) {
                return Ok(self.multiline.clone());
            }

            let text = trim_end(raw);
            let new_size = self
                .multiline
                .len()
                .saturating_add(text.len())
                .saturating_add(1);
            if new_size > limit {
                return Err(ConfigError::MultilineTooLarge {
                    line: start_line,
                    limit,
                });
            }
            self.multiline.push_str(text);
            self.multiline.push('\n');
        }

        Err(ConfigError::UnterminatedMultiline { line: start_line })
    }

    /// Reject records that are not the section opening just read.
    fn expect_current_section(&self, section: &ConfigLine) -> ConfigResult<usize> {
        match section {
            ConfigLine::SectionOpen { line, .. } if *line == self.lines.line_number() => Ok(*line),
            ConfigLine::SectionOpen { line, .. } => Err(ConfigError::StaleSection { line: *line }),
            other => Err(ConfigError::NotASection { line: other.line() }),
        }
    }

    /// Consume and discard everything up to the `}` matching `section`.
    ///
    /// `section` must be the section opening most recently returned by
    /// [`read_line`](Self::read_line). Nested sections are followed up to
    /// [`MAX_SECTION_DEPTH`] levels, counting `section` itself as the first.
    pub fn skip_section(&mut self, section: &ConfigLine) -> ConfigResult<()> {
        self.check_latch()?;
        let line = self.expect_current_section(section)?;
        debug!(line, section = ?section.as_section(), "skipping section");

        let result = self.find_section_end(line, 1);
        self.latch(result)
    }

    fn find_section_end(&mut self, open_line: usize, depth: usize) -> ConfigResult<()> {
        if depth > MAX_SECTION_DEPTH {
            return Err(ConfigError::RecursionTooDeep { line: open_line });
        }

        while let Some(record) = self.next_record()? {
            match record {
                ConfigLine::Assignment { .. } => {}
                ConfigLine::SectionOpen { line, .. } => self.find_section_end(line, depth + 1)?,
                ConfigLine::SectionClose { .. } => return Ok(()),
            }
        }

        Err(ConfigError::UnexpectedEof { line: open_line })
    }

    /// Carve the body of `section` out into an independent reader.
    ///
    /// `section` must be the section opening most recently returned by
    /// [`read_line`](Self::read_line). The returned reader yields exactly the
    /// lines between the opening and its matching `}` and then reports end of
    /// input. This reader is left untouched: its next
    /// [`read_line`](Self::read_line) returns the first line of the body.
    ///
    /// A failed isolation returns [`ConfigError::Isolation`] and does not
    /// latch an error on this reader.
    pub fn isolate_section(&mut self, section: &ConfigLine) -> ConfigResult<ConfigReader> {
        self.check_latch()?;
        let line = self.expect_current_section(section)?;
        let start = self.lines.position();

        let end = self
            .scan_section_end(start, line)
            .map_err(|e| ConfigError::isolation(line, e))?;
        let isolated = Self::open_range(&self.path, &self.config, start, Some(end), line)
            .map_err(|e| ConfigError::isolation(line, e))?;

        debug!(
            line,
            section = ?section.as_section(),
            start,
            end,
            "isolated section"
        );
        Ok(isolated)
    }

    /// Find the offset just past the `}` closing the section whose body
    /// starts at `start`, using a probe handle so this reader stays put.
    fn scan_section_end(&self, start: u64, open_line: usize) -> ConfigResult<u64> {
        let mut probe = Self::open_range(
            &self.path,
            &self.config,
            start,
            self.lines.limit(),
            open_line,
        )?;
        probe.find_section_end(open_line, 1)?;
        Ok(probe.lines.position())
    }
}

/// Classify one non-empty, comment-free, trimmed line.
fn classify(content: &str, line: usize) -> ConfigResult<Classified> {
    if let Some(head) = content.strip_suffix('{') {
        let (name, param) = trim(head)
            .split_once(' ')
            .ok_or(ConfigError::MalformedSection { line })?;
        return Ok(Classified::Complete(ConfigLine::SectionOpen {
            name: trim(name).to_string(),
            param: trim(param).to_string(),
            line,
        }));
    }

    if content == "}" {
        return Ok(Classified::Complete(ConfigLine::SectionClose { line }));
    }

    let (key, value) = content
        .split_once('=')
        .ok_or(ConfigError::MissingSeparator { line })?;
    let key = normalize_key(key);
    let value = trim(value);
    if value == MULTILINE_SENTINEL {
        return Ok(Classified::Multiline { key, line });
    }

    Ok(Classified::Complete(ConfigLine::Assignment {
        key,
        value: value.to_string(),
        line,
    }))
}

impl Iterator for ConfigReader {
    type Item = ConfigResult<ConfigLine>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.error.is_some() {
            return None;
        }
        self.read_line().transpose()
    }
}

impl fmt::Debug for ConfigReader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigReader")
            .field("path", &self.path)
            .field("line_number", &self.lines.line_number())
            .field("position", &self.lines.position())
            .field("isolation_end", &self.lines.limit())
            .field("error", &self.error)
            .finish()
    }
}
