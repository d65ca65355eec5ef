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

//! Scalar conversions for assignment values.
//!
//! These helpers never fail: input that does not parse yields the caller's
//! default, which is how configuration values fall back to built-in
//! settings.
//!
//! ```rust
//! use braceconf::value::{parse_bool, parse_int, parse_time_period};
//!
//! assert_eq!(parse_time_period("30s 5m", 0), 330);
//! assert_eq!(parse_int("0x1f", 0), 31);
//! assert!(parse_bool("on", false));
//! assert!(!parse_bool("maybe", false));
//! ```

use crate::normalize::is_space;
use tracing::warn;

/// Seconds in a minute.
pub const ONE_MINUTE: u32 = 60;
/// Seconds in an hour.
pub const ONE_HOUR: u32 = 60 * ONE_MINUTE;
/// Seconds in a day.
pub const ONE_DAY: u32 = 24 * ONE_HOUR;
/// Seconds in a week.
pub const ONE_WEEK: u32 = 7 * ONE_DAY;
/// Seconds in a month, counted as 31 days.
pub const ONE_MONTH: u32 = 31 * ONE_DAY;
/// Seconds in a year, counted as 12 months of 31 days.
pub const ONE_YEAR: u32 = 12 * ONE_MONTH;

fn multiplier(unit: char) -> Option<u32> {
    match unit {
        's' => Some(1),
        'm' => Some(ONE_MINUTE),
        'h' => Some(ONE_HOUR),
        'd' => Some(ONE_DAY),
        'w' => Some(ONE_WEEK),
        'M' => Some(ONE_MONTH),
        'y' => Some(ONE_YEAR),
        _ => None,
    }
}

/// Parse a duration such as `1h 30m` into seconds.
///
/// The input is a sequence of `<number><unit>` groups, each optionally
/// preceded by whitespace. Units are `s`, `m`, `h`, `d`, `w`, `M` (31 days)
/// and `y` (12 such months). A group with an unknown unit is logged and
/// ignored. Parsing stops at the first group that is not a number followed
/// by a unit. A total of zero yields `default_value`.
pub fn parse_time_period(value: &str, default_value: u32) -> u32 {
    let mut total: u32 = 0;
    let mut rest = value;

    loop {
        let group = rest.trim_start_matches(is_space);
        let digits = group.bytes().take_while(u8::is_ascii_digit).count();
        if digits == 0 {
            break;
        }
        let Some(unit) = group[digits..].chars().next() else {
            break;
        };
        let Ok(period) = group[..digits].parse::<u32>() else {
            break;
        };

        match multiplier(unit) {
            Some(seconds) => total = total.saturating_add(period.saturating_mul(seconds)),
            None => warn!(%unit, "ignoring unknown multiplier"),
        }
        rest = &group[digits + unit.len_utf8()..];
    }

    if total == 0 {
        default_value
    } else {
        total
    }
}

/// Integer literal with C `strtol` base-0 rules: optional leading
/// whitespace, optional sign, `0x` hex, leading-`0` octal, otherwise
/// decimal. The whole string must be consumed.
fn parse_c_integer(value: &str) -> Option<i64> {
    let s = value.trim_start_matches(is_space);
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, digits) = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        (16, hex)
    } else if s.len() > 1 && s.starts_with('0') {
        (8, &s[1..])
    } else {
        (10, s)
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }

    let magnitude = i128::from_str_radix(digits, radix).ok()?;
    let signed = if negative { -magnitude } else { magnitude };
    i64::try_from(signed).ok()
}

/// Parse a long integer, returning `default_value` on any error.
pub fn parse_long(value: &str, default_value: i64) -> i64 {
    parse_c_integer(value).unwrap_or(default_value)
}

/// Parse an integer that must fit in `i32`, returning `default_value`
/// otherwise.
pub fn parse_int(value: &str, default_value: i32) -> i32 {
    i32::try_from(parse_long(value, i64::from(default_value))).unwrap_or(default_value)
}

/// Parse a boolean.
///
/// `true`, `on` and `yes` are true; `false`, `off` and `no` are false (all
/// case-sensitive). Anything else is read as an integer, non-zero meaning
/// true, with `default_value` used when that fails too.
pub fn parse_bool(value: &str, default_value: bool) -> bool {
    match value {
        "true" | "on" | "yes" => true,
        "false" | "off" | "no" => false,
        _ => parse_int(value, i32::from(default_value)) != 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Time period tests ====================

    #[test]
    fn test_time_period_single_units() {
        assert_eq!(parse_time_period("45s", 0), 45);
        assert_eq!(parse_time_period("2m", 0), 120);
        assert_eq!(parse_time_period("1h", 0), 3600);
        assert_eq!(parse_time_period("1d", 0), 86_400);
        assert_eq!(parse_time_period("1w", 0), 604_800);
        assert_eq!(parse_time_period("1M", 0), 2_678_400);
        assert_eq!(parse_time_period("1y", 0), 32_140_800);
    }

    #[test]
    fn test_time_period_groups() {
        assert_eq!(parse_time_period("30s 5m", 0), 330);
        assert_eq!(parse_time_period("1h30m", 0), 5400);
        assert_eq!(parse_time_period("  1d  1h", 0), 90_000);
    }

    #[test]
    fn test_time_period_unknown_unit_ignored() {
        assert_eq!(parse_time_period("5x 10s", 0), 10);
    }

    #[test]
    fn test_time_period_stops_at_garbage() {
        assert_eq!(parse_time_period("10s junk 5m", 0), 10);
        assert_eq!(parse_time_period("10", 7), 7);
    }

    #[test]
    fn test_time_period_default() {
        assert_eq!(parse_time_period("", 60), 60);
        assert_eq!(parse_time_period("forever", 60), 60);
        assert_eq!(parse_time_period("0s", 60), 60);
    }

    #[test]
    fn test_time_period_saturates() {
        assert_eq!(parse_time_period("1000y", 0), u32::MAX);
    }

    // ==================== Integer tests ====================

    #[test]
    fn test_parse_long_bases() {
        assert_eq!(parse_long("42", 0), 42);
        assert_eq!(parse_long("-42", 0), -42);
        assert_eq!(parse_long("+7", 0), 7);
        assert_eq!(parse_long("0x1F", 0), 31);
        assert_eq!(parse_long("0X10", 0), 16);
        assert_eq!(parse_long("010", 0), 8);
        assert_eq!(parse_long("0", 9), 0);
        assert_eq!(parse_long("  12", 0), 12);
    }

    #[test]
    fn test_parse_long_rejects_partial() {
        assert_eq!(parse_long("12abc", -1), -1);
        assert_eq!(parse_long("12 ", -1), -1);
        assert_eq!(parse_long("", -1), -1);
        assert_eq!(parse_long("0x", -1), -1);
        assert_eq!(parse_long("08", -1), -1);
        assert_eq!(parse_long("-", -1), -1);
    }

    #[test]
    fn test_parse_long_overflow() {
        assert_eq!(parse_long("9223372036854775807", 0), i64::MAX);
        assert_eq!(parse_long("-9223372036854775808", 0), i64::MIN);
        assert_eq!(parse_long("9223372036854775808", 5), 5);
        assert_eq!(parse_long(&"9".repeat(60), 5), 5);
    }

    #[test]
    fn test_parse_int_range() {
        assert_eq!(parse_int("2147483647", 0), i32::MAX);
        assert_eq!(parse_int("2147483648", 3), 3);
        assert_eq!(parse_int("-2147483649", 3), 3);
        assert_eq!(parse_int("nope", 3), 3);
    }

    // ==================== Boolean tests ====================

    #[test]
    fn test_parse_bool_synonyms() {
        for value in ["true", "on", "yes"] {
            assert!(parse_bool(value, false), "{value}");
        }
        for value in ["false", "off", "no"] {
            assert!(!parse_bool(value, true), "{value}");
        }
    }

    #[test]
    fn test_parse_bool_case_sensitive() {
        assert!(!parse_bool("TRUE", false));
        assert!(parse_bool("No", true));
    }

    #[test]
    fn test_parse_bool_integer_fallback() {
        assert!(parse_bool("1", false));
        assert!(parse_bool("-3", false));
        assert!(!parse_bool("0", true));
        assert!(!parse_bool("maybe", false));
        assert!(parse_bool("maybe", true));
    }
}
