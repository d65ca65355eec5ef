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

//! Text normalization for physical lines.
//!
//! Comments run from the first `#` to the end of the line. There is no
//! quoting or escaping, so a value can never contain `#`.

/// The marker that opens and closes a multiline value.
pub const MULTILINE_SENTINEL: &str = "'''";

/// Whitespace as the format understands it (the C `isspace` class).
#[inline]
pub fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

/// Trim format whitespace from both ends.
#[inline]
pub fn trim(s: &str) -> &str {
    s.trim_matches(is_space)
}

/// Trim format whitespace from the end only.
#[inline]
pub fn trim_end(s: &str) -> &str {
    s.trim_end_matches(is_space)
}

/// Remove everything from the first `#` onward.
///
/// Works on raw bytes so that a comment never has to be valid UTF-8.
pub fn strip_comment(line: &[u8]) -> &[u8] {
    match memchr::memchr(b'#', line) {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Whether a raw line terminates (or opens) a multiline value.
#[inline]
pub fn is_multiline_sentinel(line: &str) -> bool {
    trim(line) == MULTILINE_SENTINEL
}

/// Keys may contain spaces; they are stored with underscores instead.
pub fn normalize_key(key: &str) -> String {
    trim(key).replace(' ', "_")
}
