// Copyright 2026 The pairdrill Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

/// The preferred separator. Lines without it are split on commas.
const DASH_SEPARATOR: &str = " - ";

const COMMA_SEPARATOR: &str = ",";

/// Parse bulk-import text into (front, back) pairs, one per line.
///
/// Lines that do not split into at least two parts are dropped. Extra parts
/// are ignored. Sides may come back empty; the collection rejects those.
pub fn parse_entries(text: &str) -> Vec<(String, String)> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> Option<(String, String)> {
    let separator = if line.contains(DASH_SEPARATOR) {
        DASH_SEPARATOR
    } else {
        COMMA_SEPARATOR
    };
    let mut parts = line.split(separator).map(|part| part.trim());
    let front = parts.next()?;
    let back = parts.next()?;
    Some((front.to_string(), back.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::Collection;
    use crate::error::Fallible;
    use crate::types::date::Date;

    #[test]
    fn test_parse_dash() {
        let entries = parse_entries("hund - dog");
        assert_eq!(entries, vec![("hund".to_string(), "dog".to_string())]);
    }

    #[test]
    fn test_parse_comma() {
        let entries = parse_entries("katt, cat");
        assert_eq!(entries, vec![("katt".to_string(), "cat".to_string())]);
    }

    #[test]
    fn test_dash_takes_precedence_over_comma() {
        let entries = parse_entries("ja, visst - yes, of course");
        assert_eq!(
            entries,
            vec![("ja, visst".to_string(), "yes, of course".to_string())]
        );
    }

    #[test]
    fn test_hyphenated_words_are_not_split() {
        let entries = parse_entries("e-post, e-mail");
        assert_eq!(entries, vec![("e-post".to_string(), "e-mail".to_string())]);
    }

    #[test]
    fn test_extra_parts_ignored() {
        let entries = parse_entries("a - b - c");
        assert_eq!(entries, vec![("a".to_string(), "b".to_string())]);
    }

    #[test]
    fn test_trailing_separator_splits_before_trimming() {
        let entries = parse_entries("a - b - \nc - d -");
        assert_eq!(
            entries,
            vec![
                ("a".to_string(), "b".to_string()),
                ("c".to_string(), "d -".to_string()),
            ]
        );
    }

    #[test]
    fn test_single_column_dropped() {
        assert!(parse_entries("bara en kolumn").is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_entries("").is_empty());
        assert!(parse_entries("\n   \n  \n").is_empty());
    }

    #[test]
    fn test_empty_side_kept_for_caller() {
        let entries = parse_entries("hus,");
        assert_eq!(entries, vec![("hus".to_string(), "".to_string())]);
    }

    #[test]
    fn test_bulk_import_adds_valid_lines_only() -> Fallible<()> {
        let today = Date::parse("2025-04-01")?;
        let text = ["hund - dog", "katt, cat", "", "bara en kolumn"].join("\n");
        let mut coll = Collection::empty();
        let added = coll.add_cards(parse_entries(&text), today);
        assert_eq!(added, 2);
        assert_eq!(coll.cards[0].front, "hund");
        assert_eq!(coll.cards[1].back, "cat");
        Ok(())
    }

    #[test]
    fn test_windows_line_endings() {
        let entries = parse_entries("hund - dog\r\nkatt - cat\r\n");
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1], ("katt".to_string(), "cat".to_string()));
    }
}
