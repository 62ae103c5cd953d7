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

use crate::scheduler::SchedulingUpdate;
use crate::types::date::Date;

pub type CardId = u64;

/// The interval assigned to a freshly created card.
pub const INITIAL_INTERVAL: u32 = 1;

/// The ease factor assigned to a freshly created card.
pub const INITIAL_EASE_FACTOR: f64 = 2.5;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Stable identity across sessions.
    pub id: CardId,
    #[serde(alias = "english")]
    pub front: String,
    #[serde(alias = "swedish")]
    pub back: String,
    /// The card is eligible for review on or after this date.
    pub next_review: Date,
    /// The current spacing interval in days. Always at least one.
    pub interval: u32,
    pub ease_factor: f64,
    /// Count of non-`Again` ratings.
    pub repetitions: u32,
}

impl Card {
    /// Create a card that is due immediately.
    pub fn new(id: CardId, front: String, back: String, today: Date) -> Self {
        Self {
            id,
            front,
            back,
            next_review: today,
            interval: INITIAL_INTERVAL,
            ease_factor: INITIAL_EASE_FACTOR,
            repetitions: 0,
        }
    }

    pub fn is_due(&self, today: Date) -> bool {
        self.next_review <= today
    }

    pub fn apply(&mut self, update: SchedulingUpdate) {
        self.interval = update.interval;
        self.ease_factor = update.ease_factor;
        self.repetitions = update.repetitions;
        self.next_review = update.next_review;
    }
}
