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

//! Dump command - print the classified line stream

use super::open_reader;
use crate::error::CliError;
use braceconf::{ConfigLine, ConfigResult, ReaderConfig};
use colored::Colorize;
use std::io::{self, Write};

/// Print every record of `file` to stdout.
///
/// Text output is indented by nesting depth and is itself valid
/// configuration. With `json`, each record is printed as one JSON object
/// per line.
pub fn dump(file: &str, json: bool, config: &ReaderConfig) -> Result<(), CliError> {
    let reader = open_reader(file, config)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    dump_records(reader, &mut out, json)
}

/// Write a record stream to `out`, stopping at the first error.
pub fn dump_records<I, W>(records: I, out: &mut W, json: bool) -> Result<(), CliError>
where
    I: IntoIterator<Item = ConfigResult<ConfigLine>>,
    W: Write,
{
    let mut depth = 0usize;

    for record in records {
        let record = record?;
        if json {
            writeln!(out, "{}", serde_json::to_string(&record)?)?;
            continue;
        }

        match &record {
            ConfigLine::SectionOpen { name, param, .. } => {
                writeln!(out, "{}{} {} {{", indent(depth), name.green(), param)?;
                depth += 1;
            }
            ConfigLine::SectionClose { .. } => {
                depth = depth.saturating_sub(1);
                writeln!(out, "{}}}", indent(depth))?;
            }
            ConfigLine::Assignment { key, value, .. } if value.contains('\n') => {
                writeln!(out, "{}{} = '''", indent(depth), key.yellow())?;
                write!(out, "{}", value)?;
                writeln!(out, "{}'''", indent(depth))?;
            }
            ConfigLine::Assignment { key, value, .. } => {
                writeln!(out, "{}{} = {}", indent(depth), key.yellow(), value)?;
            }
        }
    }

    out.flush()?;
    Ok(())
}

fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use braceconf::ConfigError;

    fn records() -> Vec<ConfigResult<ConfigLine>> {
        vec![
            Ok(ConfigLine::SectionOpen {
                name: "listener".to_string(),
                param: "*:8080".to_string(),
                line: 1,
            }),
            Ok(ConfigLine::Assignment {
                key: "motd".to_string(),
                value: "hello\nworld\n".to_string(),
                line: 2,
            }),
            Ok(ConfigLine::SectionClose { line: 6 }),
        ]
    }

    #[test]
    fn test_text_output() {
        colored::control::set_override(false);
        let mut out = Vec::new();
        dump_records(records(), &mut out, false).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "listener *:8080 {\n    motd = '''\nhello\nworld\n    '''\n}\n"
        );
    }

    #[test]
    fn test_json_output() {
        let mut out = Vec::new();
        dump_records(records(), &mut out, true).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["type"], "section_open");
        assert_eq!(first["name"], "listener");
        assert_eq!(first["param"], "*:8080");
        assert_eq!(first["line"], 1);

        let last: serde_json::Value = serde_json::from_str(lines[2]).unwrap();
        assert_eq!(last["type"], "section_close");
    }

    #[test]
    fn test_stops_at_error() {
        let records = vec![
            Ok(ConfigLine::SectionClose { line: 1 }),
            Err(ConfigError::MissingSeparator { line: 2 }),
            Ok(ConfigLine::SectionClose { line: 3 }),
        ];
        let mut out = Vec::new();
        let err = dump_records(records, &mut out, true).unwrap_err();
        assert!(matches!(err, CliError::Config(ConfigError::MissingSeparator { line: 2 })));
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 1);
    }
}
