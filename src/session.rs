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

use std::collections::VecDeque;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::backup::BackupEvent;
use crate::cmd::stats::Stats;
use crate::collection::Collection;
use crate::error::Fallible;
use crate::error::fail;
use crate::scheduler::compute_next_state;
use crate::types::card::Card;
use crate::types::card::CardId;
use crate::types::date::Date;
use crate::types::rating::Rating;

/// Side effects the caller must carry out after a session operation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Event {
    /// The collection changed and should be saved.
    Persist,
    /// The due or total counts may have changed.
    StatsChanged,
    /// Cards were added to the collection.
    CardsAdded(usize),
    /// The last due card was rated.
    SessionCompleted,
}

impl Event {
    pub fn backup(&self) -> Option<BackupEvent> {
        match self {
            Event::CardsAdded(count) => Some(BackupEvent::CardsAdded(*count)),
            Event::SessionCompleted => Some(BackupEvent::SessionCompleted),
            Event::Persist | Event::StatsChanged => None,
        }
    }
}

/// A review session over a collection. The session owns the collection and
/// the due queue. The card under review is the head of the queue.
pub struct Session {
    collection: Collection,
    /// IDs of the cards awaiting review today.
    queue: VecDeque<CardId>,
    /// Whether the back of the current card is shown.
    revealed: bool,
    /// The day the queue was last built for.
    built_for: Option<Date>,
}

impl Session {
    /// Create a session with an empty queue. Call `build_queue` to start
    /// reviewing.
    pub fn new(collection: Collection) -> Self {
        Self {
            collection,
            queue: VecDeque::new(),
            revealed: false,
            built_for: None,
        }
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    /// Rebuild the queue from every card due on `today`, in random order.
    /// Returns the queue length.
    pub fn build_queue<R: Rng + ?Sized>(&mut self, today: Date, rng: &mut R) -> usize {
        let mut ids = self.collection.due_ids(today);
        ids.shuffle(rng);
        self.queue = VecDeque::from(ids);
        self.revealed = false;
        self.built_for = Some(today);
        log::debug!("{} cards due on {today}.", self.queue.len());
        self.queue.len()
    }

    /// Whether the queue was built for a day other than `today`.
    pub fn is_stale(&self, today: Date) -> bool {
        self.built_for != Some(today)
    }

    /// The IDs in the queue, head first.
    #[cfg(test)]
    pub fn queue(&self) -> impl Iterator<Item = CardId> + '_ {
        self.queue.iter().copied()
    }

    #[cfg(test)]
    pub fn due_count(&self) -> usize {
        self.queue.len()
    }

    /// The card under review, if any.
    pub fn current(&self) -> Option<&Card> {
        self.queue
            .front()
            .and_then(|id| self.collection.get(*id))
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn stats(&self) -> Stats {
        Stats {
            due_today: self.queue.len(),
            total_cards: self.collection.cards.len(),
        }
    }

    /// Show the back of the current card. Returns whether anything changed.
    pub fn reveal(&mut self) -> bool {
        if self.queue.is_empty() || self.revealed {
            return false;
        }
        self.revealed = true;
        true
    }

    /// Rate the current card. `Again` sends it to the back of the queue with
    /// its schedule untouched; any other rating reschedules it and takes it
    /// out of today's queue.
    pub fn rate(&mut self, rating: Rating, today: Date) -> Fallible<Vec<Event>> {
        let Some(id) = self.queue.pop_front() else {
            return fail("no card under review.");
        };
        let prev_len = self.queue.len() + 1;
        let mut events = Vec::new();
        match rating.recall() {
            None => {
                log::debug!("card {id} rated {}, requeued", rating.as_str());
                self.queue.push_back(id);
            }
            Some(recall) => {
                if let Some(card) = self.collection.get_mut(id) {
                    let update = compute_next_state(card, recall, today);
                    log::debug!(
                        "card {id} rated {} interval={}d ease={:.2} reps={} due={}",
                        rating.as_str(),
                        update.interval,
                        update.ease_factor,
                        update.repetitions,
                        update.next_review
                    );
                    card.apply(update);
                }
                events.push(Event::Persist);
            }
        }
        self.revealed = false;
        events.push(Event::StatsChanged);
        if prev_len > 0 && self.queue.is_empty() {
            log::debug!("Session completed.");
            events.push(Event::SessionCompleted);
        }
        Ok(events)
    }

    /// Delete the current card from the collection. Deletion is not a review,
    /// so it never completes the session.
    pub fn delete_current(&mut self) -> Fallible<Vec<Event>> {
        let Some(id) = self.queue.pop_front() else {
            return fail("no card under review.");
        };
        self.collection.remove(id);
        log::debug!("card {id} deleted");
        self.revealed = false;
        Ok(vec![Event::Persist, Event::StatsChanged])
    }

    /// Add cards to the collection. The queue is left alone; rebuild it to
    /// review the new cards. Returns the number of cards added.
    pub fn add_cards<I, S>(&mut self, entries: I, today: Date) -> (usize, Vec<Event>)
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let added = self.collection.add_cards(entries, today);
        if added == 0 {
            return (0, Vec::new());
        }
        log::debug!("Added {added} cards.");
        (
            added,
            vec![Event::Persist, Event::StatsChanged, Event::CardsAdded(added)],
        )
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn today() -> Date {
        Date::parse("2025-09-01").unwrap()
    }

    fn session_with(count: usize) -> Session {
        let mut coll = Collection::empty();
        let entries: Vec<(String, String)> = (0..count)
            .map(|i| (format!("front {i}"), format!("back {i}")))
            .collect();
        coll.add_cards(entries, today());
        Session::new(coll)
    }

    fn started(count: usize) -> Session {
        let mut session = session_with(count);
        session.build_queue(today(), &mut StdRng::seed_from_u64(7));
        session
    }

    #[test]
    fn test_build_queue_only_due_cards() {
        let mut session = session_with(4);
        if let Some(card) = session.collection.get_mut(2) {
            card.next_review = today().add_days(1);
        }
        let len = session.build_queue(today(), &mut StdRng::seed_from_u64(1));
        assert_eq!(len, 3);
        let mut ids: Vec<CardId> = session.queue().collect();
        ids.sort();
        assert_eq!(ids, vec![1, 3, 4]);
        assert!(session.current().is_some());
        assert!(!session.is_revealed());
    }

    #[test]
    fn test_build_queue_order_varies() {
        let mut session = session_with(20);
        let mut rng = StdRng::seed_from_u64(42);
        session.build_queue(today(), &mut rng);
        let first: Vec<CardId> = session.queue().collect();
        session.build_queue(today(), &mut rng);
        let second: Vec<CardId> = session.queue().collect();
        assert_ne!(first, second);
    }

    #[test]
    fn test_queue_goes_stale_the_next_day() {
        let mut session = session_with(2);
        assert!(session.is_stale(today()));
        session.build_queue(today(), &mut StdRng::seed_from_u64(1));
        assert!(!session.is_stale(today()));
        assert!(session.is_stale(today().add_days(1)));
    }

    #[test]
    fn test_empty_session() {
        let mut session = session_with(0);
        assert_eq!(session.build_queue(today(), &mut StdRng::seed_from_u64(1)), 0);
        assert!(session.current().is_none());
        assert!(!session.reveal());
        assert!(!session.is_revealed());
    }

    #[test]
    fn test_rate_without_current_card_fails() {
        let mut session = session_with(2);
        let before = session.collection().clone();
        assert!(session.rate(Rating::Good, today()).is_err());
        assert!(session.delete_current().is_err());
        assert_eq!(session.collection(), &before);
    }

    #[test]
    fn test_reveal_is_idempotent() {
        let mut session = started(2);
        assert!(session.reveal());
        assert!(session.is_revealed());
        assert!(!session.reveal());
        assert!(session.is_revealed());
    }

    #[test]
    fn test_again_requeues_without_rescheduling() -> Fallible<()> {
        let mut session = started(3);
        let queue_before: Vec<CardId> = session.queue().collect();
        let head = queue_before[0];
        let card_before = session.collection().get(head).cloned();
        session.reveal();
        let events = session.rate(Rating::Again, today())?;
        assert_eq!(events, vec![Event::StatsChanged]);
        let queue_after: Vec<CardId> = session.queue().collect();
        assert_eq!(queue_after.len(), queue_before.len());
        assert_eq!(queue_after.last(), Some(&head));
        assert_eq!(queue_after[0], queue_before[1]);
        assert_eq!(session.collection().get(head).cloned(), card_before);
        assert!(!session.is_revealed());
        Ok(())
    }

    #[test]
    fn test_again_on_last_card_does_not_complete() -> Fallible<()> {
        let mut session = started(1);
        let events = session.rate(Rating::Again, today())?;
        assert!(!events.contains(&Event::SessionCompleted));
        assert_eq!(session.due_count(), 1);
        Ok(())
    }

    #[test]
    fn test_rate_good_reschedules_and_removes() -> Fallible<()> {
        let mut session = started(2);
        let head = session.current().map(|c| c.id);
        let events = session.rate(Rating::Good, today())?;
        assert_eq!(events, vec![Event::Persist, Event::StatsChanged]);
        assert_eq!(session.due_count(), 1);
        let id = head.unwrap();
        assert!(!session.queue().any(|i| i == id));
        let card = session.collection().get(id).unwrap();
        assert_eq!(card.repetitions, 1);
        assert_eq!(card.interval, 1);
        assert_eq!(card.next_review, today().add_days(1));
        Ok(())
    }

    #[test]
    fn test_session_completed_fires_once_on_last_rating() -> Fallible<()> {
        let mut session = started(3);
        let mut completions = 0;
        for _ in 0..3 {
            session.reveal();
            let events = session.rate(Rating::Easy, today())?;
            completions += events
                .iter()
                .filter(|e| **e == Event::SessionCompleted)
                .count();
            if session.due_count() > 0 {
                assert_eq!(completions, 0);
            }
        }
        assert_eq!(completions, 1);
        assert!(session.current().is_none());
        assert!(session.rate(Rating::Good, today()).is_err());
        Ok(())
    }

    #[test]
    fn test_delete_last_card_does_not_complete() -> Fallible<()> {
        let mut session = started(1);
        session.reveal();
        let events = session.delete_current()?;
        assert_eq!(events, vec![Event::Persist, Event::StatsChanged]);
        assert_eq!(session.due_count(), 0);
        assert!(session.collection().cards.is_empty());
        assert!(session.current().is_none());
        Ok(())
    }

    #[test]
    fn test_delete_advances_to_next_card() -> Fallible<()> {
        let mut session = started(3);
        let queue: Vec<CardId> = session.queue().collect();
        session.reveal();
        session.delete_current()?;
        assert_eq!(session.current().map(|c| c.id), Some(queue[1]));
        assert!(session.collection().get(queue[0]).is_none());
        assert_eq!(session.collection().cards.len(), 2);
        assert!(!session.is_revealed());
        Ok(())
    }

    #[test]
    fn test_add_cards_leaves_queue_alone() {
        let mut session = started(1);
        let (added, events) = session.add_cards(
            [("hund - dog", ""), ("katt", "cat"), ("", "x")],
            today(),
        );
        assert_eq!(added, 1);
        assert_eq!(
            events,
            vec![Event::Persist, Event::StatsChanged, Event::CardsAdded(1)]
        );
        assert_eq!(session.due_count(), 1);
        assert_eq!(session.stats().total_cards, 2);
    }

    #[test]
    fn test_add_nothing_emits_nothing() {
        let mut session = started(1);
        let (added, events) = session.add_cards([("  ", "cat")], today());
        assert_eq!(added, 0);
        assert!(events.is_empty());
    }

    #[test]
    fn test_rating_everything_good_clears_the_day() -> Fallible<()> {
        let mut session = started(5);
        let mut rounds = 0;
        while session.current().is_some() {
            session.reveal();
            session.rate(Rating::Good, today())?;
            rounds += 1;
        }
        assert_eq!(rounds, 5);
        for card in &session.collection().cards {
            assert!(card.next_review > today());
        }
        assert_eq!(session.build_queue(today(), &mut StdRng::seed_from_u64(3)), 0);
        Ok(())
    }

    #[test]
    fn test_mixed_ratings() -> Fallible<()> {
        let mut session = started(2);
        let first = session.current().map(|c| c.id).unwrap();
        // Fail the first card, pass the second, then pass the first.
        session.rate(Rating::Again, today())?;
        let second = session.current().map(|c| c.id).unwrap();
        assert_ne!(first, second);
        let events = session.rate(Rating::Hard, today())?;
        assert!(!events.contains(&Event::SessionCompleted));
        assert_eq!(session.current().map(|c| c.id), Some(first));
        let events = session.rate(Rating::Good, today())?;
        assert!(events.contains(&Event::SessionCompleted));
        let hard = session.collection().get(second).unwrap();
        assert_eq!(hard.repetitions, 0);
        assert!((hard.ease_factor - 2.35).abs() < 1e-9);
        Ok(())
    }

    #[test]
    fn test_backup_mapping() {
        assert_eq!(Event::Persist.backup(), None);
        assert_eq!(Event::StatsChanged.backup(), None);
        assert_eq!(
            Event::CardsAdded(3).backup(),
            Some(BackupEvent::CardsAdded(3))
        );
        assert_eq!(
            Event::SessionCompleted.backup(),
            Some(BackupEvent::SessionCompleted)
        );
    }
}
