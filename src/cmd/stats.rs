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

use std::fmt::Display;
use std::fmt::Formatter;
use std::path::Path;

use clap::ValueEnum;
use serde::Serialize;

use crate::backup::plural;
use crate::collection::Collection;
use crate::error::Fallible;
use crate::storage::JsonStorage;
use crate::storage::Storage;
use crate::types::date::Date;

#[derive(ValueEnum, Clone)]
pub enum StatsFormat {
    /// Plain text output.
    Text,
    /// JSON output.
    Json,
}

impl Display for StatsFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StatsFormat::Text => write!(f, "text"),
            StatsFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Serialize, Clone, Copy, PartialEq, Eq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub due_today: usize,
    pub total_cards: usize,
}

impl Stats {
    pub fn of(collection: &Collection, today: Date) -> Self {
        Self {
            due_today: collection.due_ids(today).len(),
            total_cards: collection.cards.len(),
        }
    }

    /// E.g. "3 cards due".
    pub fn due_label(&self) -> String {
        format!("{} {} due", self.due_today, plural(self.due_today, "card"))
    }

    /// E.g. "10 total".
    pub fn total_label(&self) -> String {
        format!("{} total", self.total_cards)
    }
}

pub fn print_stats(directory: &Path, format: StatsFormat) -> Fallible<()> {
    let collection = JsonStorage::in_directory(directory).load()?;
    let stats = Stats::of(&collection, Date::today());
    println!("{}", render_stats(&stats, format)?);
    Ok(())
}

fn render_stats(stats: &Stats, format: StatsFormat) -> Fallible<String> {
    match format {
        StatsFormat::Text => Ok(format!("{}, {}", stats.due_label(), stats.total_label())),
        StatsFormat::Json => Ok(serde_json::to_string_pretty(stats)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of() -> Fallible<()> {
        let today = Date::parse("2025-08-01")?;
        let mut coll = Collection::empty();
        coll.add_cards([("a", "1"), ("b", "2"), ("c", "3")], today);
        if let Some(card) = coll.get_mut(1) {
            card.next_review = today.add_days(4);
        }
        let stats = Stats::of(&coll, today);
        assert_eq!(
            stats,
            Stats {
                due_today: 2,
                total_cards: 3
            }
        );
        Ok(())
    }

    #[test]
    fn test_labels() {
        let one = Stats {
            due_today: 1,
            total_cards: 1,
        };
        assert_eq!(one.due_label(), "1 card due");
        let many = Stats {
            due_today: 0,
            total_cards: 5,
        };
        assert_eq!(many.due_label(), "0 cards due");
        assert_eq!(many.total_label(), "5 total");
    }

    #[test]
    fn test_render() -> Fallible<()> {
        let stats = Stats {
            due_today: 2,
            total_cards: 9,
        };
        assert_eq!(
            render_stats(&stats, StatsFormat::Text)?,
            "2 cards due, 9 total"
        );
        let json: serde_json::Value =
            serde_json::from_str(&render_stats(&stats, StatsFormat::Json)?)?;
        assert_eq!(json["dueToday"], 2);
        assert_eq!(json["totalCards"], 9);
        Ok(())
    }
}
