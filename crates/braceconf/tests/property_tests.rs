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

//! Property-based tests for the configuration reader.

use braceconf::{ConfigLine, ConfigReader};
use proptest::prelude::*;
use std::fs;
use tempfile::NamedTempFile;

fn config_file(content: &str) -> NamedTempFile {
    let file = NamedTempFile::new().expect("Failed to create temp file");
    fs::write(file.path(), content).expect("Failed to write temp file");
    file
}

/// A generated document item with the records it should produce.
#[derive(Debug, Clone)]
enum Item {
    Assign(String, String),
    Section(String, String, Vec<Item>),
}

fn key() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,12}"
}

fn plain_value() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9/:._-]{0,20}"
}

fn item() -> impl Strategy<Value = Item> {
    let leaf = (key(), plain_value()).prop_map(|(k, v)| Item::Assign(k, v));
    leaf.prop_recursive(4, 48, 6, |inner| {
        prop_oneof![
            (key(), plain_value()).prop_map(|(k, v)| Item::Assign(k, v)),
            (key(), "[a-z0-9*:/]{1,10}", prop::collection::vec(inner, 0..6))
                .prop_map(|(n, p, body)| Item::Section(n, p, body)),
        ]
    })
}

fn render(items: &[Item], depth: usize, out: &mut String, expected: &mut Vec<ConfigLine>) {
    let indent = "    ".repeat(depth);
    for item in items {
        match item {
            Item::Assign(k, v) => {
                out.push_str(&format!("{}{} = {}\n", indent, k, v));
                expected.push(ConfigLine::Assignment {
                    key: k.clone(),
                    value: v.clone(),
                    line: out.lines().count(),
                });
            }
            Item::Section(n, p, body) => {
                out.push_str(&format!("{}{} {} {{\n", indent, n, p));
                expected.push(ConfigLine::SectionOpen {
                    name: n.clone(),
                    param: p.clone(),
                    line: out.lines().count(),
                });
                render(body, depth + 1, out, expected);
                out.push_str(&format!("{}}}\n", indent));
                expected.push(ConfigLine::SectionClose {
                    line: out.lines().count(),
                });
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Property: balanced input reproduces every record once, in order.
    #[test]
    fn prop_balanced_input_round_trips(items in prop::collection::vec(item(), 0..8)) {
        let mut doc = String::new();
        let mut expected = Vec::new();
        render(&items, 0, &mut doc, &mut expected);

        let file = config_file(&doc);
        let reader = ConfigReader::open(file.path()).unwrap();
        let lines: Vec<_> = reader.collect::<Result<_, _>>().unwrap();

        prop_assert_eq!(lines, expected);
    }

    /// Property: multiline values are captured verbatim, each line followed by `\n`.
    #[test]
    fn prop_multiline_verbatim(
        body in prop::collection::vec("( {0,4}[a-z#{}=]{0,12}[a-z#{}=])?", 0..10)
    ) {
        let mut doc = String::from("text = '''\n");
        let mut expected = String::new();
        for line in &body {
            doc.push_str(line);
            doc.push('\n');
            expected.push_str(line);
            expected.push('\n');
        }
        doc.push_str("'''\nafter = 1\n");

        let file = config_file(&doc);
        let mut reader = ConfigReader::open(file.path()).unwrap();
        let first = reader.read_line().unwrap().unwrap();
        prop_assert_eq!(first.as_assignment(), Some(("text", expected.as_str())));
        let second = reader.read_line().unwrap().unwrap();
        prop_assert_eq!(second.as_assignment(), Some(("after", "1")));
    }

    /// Property: isolating any top-level section yields exactly its body.
    #[test]
    fn prop_isolation_matches_sequential_body(items in prop::collection::vec(item(), 1..6)) {
        let mut doc = String::new();
        let mut expected = Vec::new();
        render(&items, 0, &mut doc, &mut expected);

        let file = config_file(&doc);
        let mut reader = ConfigReader::open(file.path()).unwrap();
        let mut index = 0;
        while let Some(line) = reader.read_line().unwrap() {
            prop_assert_eq!(&line, &expected[index]);
            if line.is_section_open() {
                // Find the matching close in the expected sequence.
                let mut depth = 0usize;
                let mut close = index;
                for (i, record) in expected.iter().enumerate().skip(index) {
                    match record {
                        ConfigLine::SectionOpen { .. } => depth += 1,
                        ConfigLine::SectionClose { .. } => {
                            depth -= 1;
                            if depth == 0 {
                                close = i;
                                break;
                            }
                        }
                        ConfigLine::Assignment { .. } => {}
                    }
                }

                let isolated = reader.isolate_section(&line).unwrap();
                let body: Vec<_> = isolated.collect::<Result<_, _>>().unwrap();
                prop_assert_eq!(&body[..], &expected[index + 1..close]);

                reader.skip_section(&line).unwrap();
                index = close;
            }
            index += 1;
        }
        prop_assert_eq!(index, expected.len());
    }
}
