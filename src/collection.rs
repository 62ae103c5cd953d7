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

use serde::Deserialize;
use serde::Serialize;

use crate::types::card::Card;
use crate::types::card::CardId;
use crate::types::date::Date;

/// Every card the user owns, plus the counter used to allocate new IDs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub cards: Vec<Card>,
    pub next_id: CardId,
}

impl Collection {
    pub fn empty() -> Self {
        Self {
            cards: Vec::new(),
            next_id: 1,
        }
    }

    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    pub fn get_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|card| card.id == id)
    }

    /// Remove a card. Returns whether a card with that ID existed.
    pub fn remove(&mut self, id: CardId) -> bool {
        let before = self.cards.len();
        self.cards.retain(|card| card.id != id);
        self.cards.len() != before
    }

    /// The IDs of the cards due on the given date, in collection order.
    pub fn due_ids(&self, today: Date) -> Vec<CardId> {
        self.cards
            .iter()
            .filter(|card| card.is_due(today))
            .map(|card| card.id)
            .collect()
    }

    /// Add a card for every entry whose sides are both non-empty after
    /// trimming. Returns the number of cards added.
    pub fn add_cards<I, S>(&mut self, entries: I, today: Date) -> usize
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let mut added = 0;
        for (front, back) in entries {
            let front = front.as_ref().trim();
            let back = back.as_ref().trim();
            if front.is_empty() || back.is_empty() {
                continue;
            }
            let id = self.next_id;
            self.next_id += 1;
            self.cards
                .push(Card::new(id, front.to_string(), back.to_string(), today));
            added += 1;
        }
        added
    }

    /// The most recently added cards, newest first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &Card> {
        self.cards.iter().rev().take(limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Fallible;

    #[test]
    fn test_add_cards_allocates_ids() -> Fallible<()> {
        let today = Date::parse("2025-04-01")?;
        let mut coll = Collection::empty();
        let added = coll.add_cards([("hund", "dog"), ("katt", "cat")], today);
        assert_eq!(added, 2);
        assert_eq!(coll.next_id, 3);
        assert_eq!(coll.cards[0].id, 1);
        assert_eq!(coll.cards[1].id, 2);
        assert_eq!(coll.cards[1].next_review, today);
        Ok(())
    }

    #[test]
    fn test_add_cards_skips_blank_sides() -> Fallible<()> {
        let today = Date::parse("2025-04-01")?;
        let mut coll = Collection::empty();
        let added = coll.add_cards(
            [("  hus ", " house"), ("   ", "x"), ("bil", ""), ("", "")],
            today,
        );
        assert_eq!(added, 1);
        assert_eq!(coll.cards[0].front, "hus");
        assert_eq!(coll.cards[0].back, "house");
        assert_eq!(coll.next_id, 2);
        Ok(())
    }

    #[test]
    fn test_ids_are_not_reused_after_removal() -> Fallible<()> {
        let today = Date::parse("2025-04-01")?;
        let mut coll = Collection::empty();
        coll.add_cards([("a", "1"), ("b", "2")], today);
        assert!(coll.remove(2));
        assert!(!coll.remove(2));
        coll.add_cards([("c", "3")], today);
        assert_eq!(coll.cards[1].id, 3);
        Ok(())
    }

    #[test]
    fn test_due_ids() -> Fallible<()> {
        let today = Date::parse("2025-04-01")?;
        let mut coll = Collection::empty();
        coll.add_cards([("a", "1"), ("b", "2"), ("c", "3")], today);
        if let Some(card) = coll.get_mut(2) {
            card.next_review = today.add_days(1);
        }
        assert_eq!(coll.due_ids(today), vec![1, 3]);
        assert_eq!(coll.due_ids(today.add_days(1)), vec![1, 2, 3]);
        Ok(())
    }

    #[test]
    fn test_recent() -> Fallible<()> {
        let today = Date::parse("2025-04-01")?;
        let mut coll = Collection::empty();
        coll.add_cards([("a", "1"), ("b", "2"), ("c", "3")], today);
        let fronts: Vec<&str> = coll.recent(2).map(|c| c.front.as_str()).collect();
        assert_eq!(fronts, vec!["c", "b"]);
        Ok(())
    }
}
