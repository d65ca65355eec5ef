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

//! Bounded physical line reader.
//!
//! Provides buffered line-by-line reading with line number tracking, a
//! consumed-byte cursor, an optional isolation end offset, and a hard cap on
//! physical line length.
//!
//! This module is primarily an internal implementation detail of
//! [`ConfigReader`](crate::ConfigReader), but is exposed for advanced use
//! cases.

use crate::config::ReaderConfig;
use crate::error::{ConfigError, ConfigResult};
use std::io::{BufRead, BufReader, Read, Seek, SeekFrom};

/// Buffered line reader with line number and byte offset tracking.
///
/// Reads input line-by-line, stripping LF or CRLF terminators. The reader
/// counts every byte it hands out, so [`position()`](Self::position) is the
/// offset of the next unread line in the underlying stream regardless of how
/// much the internal buffer has read ahead.
///
/// # Examples
///
/// ## Basic Line Reading
///
/// ```rust
/// use braceconf::LineReader;
/// use std::io::Cursor;
///
/// let mut reader = LineReader::new(Cursor::new("line1\nline2\n"));
///
/// assert_eq!(reader.next_line().unwrap(), Some((1, "line1")));
/// assert_eq!(reader.position(), 6);
/// assert_eq!(reader.next_line().unwrap(), Some((2, "line2")));
/// assert_eq!(reader.next_line().unwrap(), None);
/// ```
///
/// ## Bounded Reading
///
/// ```rust
/// use braceconf::LineReader;
/// use std::io::Cursor;
///
/// let mut reader = LineReader::new(Cursor::new("a\nb\nc\n"));
/// reader.set_limit(4);
///
/// assert_eq!(reader.next_line().unwrap(), Some((1, "a")));
/// // "b\n" ends at offset 4, which reaches the limit
/// assert_eq!(reader.next_line().unwrap(), None);
/// ```
pub struct LineReader<R: Read> {
    reader: BufReader<R>,
    line_number: usize,
    buffer: Vec<u8>,
    position: u64,
    limit: Option<u64>,
    max_line_length: usize,
}

impl<R: Read> LineReader<R> {
    /// Create a new line reader with the default configuration.
    pub fn new(reader: R) -> Self {
        Self::with_config(reader, &ReaderConfig::default())
    }

    /// Create with an explicit buffer size and line length cap.
    pub fn with_config(reader: R, config: &ReaderConfig) -> Self {
        Self {
            reader: BufReader::with_capacity(config.buffer_size.max(1), reader),
            line_number: 0,
            buffer: Vec::new(),
            position: 0,
            limit: None,
            max_line_length: config.max_line_length,
        }
    }

    /// Get the number of the last line handed out.
    #[inline]
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Byte offset just past the last line handed out.
    #[inline]
    pub fn position(&self) -> u64 {
        self.position
    }

    /// The isolation end offset, if any.
    #[inline]
    pub fn limit(&self) -> Option<u64> {
        self.limit
    }

    /// Refuse to deliver any line whose consumption reaches `end`.
    ///
    /// The limit can only shrink: a wider `end` than the current one is
    /// ignored.
    pub fn set_limit(&mut self, end: u64) {
        self.limit = Some(self.limit.map_or(end, |current| current.min(end)));
    }

    pub(crate) fn set_line_number(&mut self, line_number: usize) {
        self.line_number = line_number;
    }

    fn at_limit(&self) -> bool {
        self.limit.is_some_and(|end| self.position >= end)
    }

    /// Read the next physical line as raw bytes, without its terminator.
    ///
    /// Returns `Ok(None)` at end of stream and when the isolation limit is
    /// reached. The returned slice is valid until the next call.
    pub fn next_raw_line(&mut self) -> ConfigResult<Option<(usize, &[u8])>> {
        if self.at_limit() {
            return Ok(None);
        }

        self.buffer.clear();
        let cap = (self.max_line_length as u64).saturating_add(1);
        let read = (&mut self.reader)
            .take(cap)
            .read_until(b'\n', &mut self.buffer)?;
        if read == 0 {
            return Ok(None);
        }

        self.position += read as u64;
        let line = self.line_number + 1;

        if self.buffer.last() != Some(&b'\n') && read as u64 > self.max_line_length as u64 {
            return Err(ConfigError::LineTooLong {
                line,
                limit: self.max_line_length,
            });
        }
        if self.at_limit() {
            return Ok(None);
        }
        self.line_number = line;

        if self.buffer.last() == Some(&b'\n') {
            self.buffer.pop();
            if self.buffer.last() == Some(&b'\r') {
                self.buffer.pop();
            }
        }

        Ok(Some((line, self.buffer.as_slice())))
    }

    /// Read the next physical line as UTF-8 text.
    pub fn next_line(&mut self) -> ConfigResult<Option<(usize, &str)>> {
        match self.next_raw_line()? {
            Some((line, bytes)) => Ok(Some((line, decode(line, bytes)?))),
            None => Ok(None),
        }
    }
}

/// Decode the bytes of physical line `line` as UTF-8.
pub(crate) fn decode(line: usize, bytes: &[u8]) -> ConfigResult<&str> {
    std::str::from_utf8(bytes).map_err(|e| ConfigError::Utf8 {
        line,
        message: e.to_string(),
    })
}

impl<R: Read + Seek> LineReader<R> {
    /// Move the cursor to an absolute byte offset, discarding buffered input.
    pub fn seek_to(&mut self, offset: u64) -> ConfigResult<()> {
        self.reader.seek(SeekFrom::Start(offset))?;
        self.position = offset;
        Ok(())
    }
}
