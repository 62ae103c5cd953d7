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

//! A simplified SM-2 scheduler. Young cards follow fixed interval steps;
//! once they graduate, intervals grow by the card's ease factor.

use crate::types::card::Card;
use crate::types::date::Date;

/// The lowest ease factor a card can have.
pub const MIN_EASE_FACTOR: f64 = 1.3;

/// How much `Hard` takes from and `Easy` adds to the ease factor.
const EASE_STEP: f64 = 0.15;

/// Extra growth applied to graduated cards rated `Easy`.
const EASY_BONUS: f64 = 1.3;

/// Fixed intervals for `Good`, indexed by the repetition count.
const GOOD_STEPS: [u32; 4] = [1, 3, 7, 14];

/// Fixed intervals for `Easy`, indexed by the repetition count.
const EASY_STEPS: [u32; 3] = [1, 6, 14];

/// A rating that reschedules the card. `Again` is not one of these: it
/// requeues the card within the session and leaves its schedule alone.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Recall {
    Hard,
    Good,
    Easy,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SchedulingUpdate {
    pub interval: u32,
    pub ease_factor: f64,
    pub repetitions: u32,
    pub next_review: Date,
}

pub fn compute_next_state(card: &Card, recall: Recall, today: Date) -> SchedulingUpdate {
    let (interval, ease_factor, repetitions) = (card.interval, card.ease_factor, card.repetitions);
    let (interval, ease_factor, repetitions) = match recall {
        Recall::Hard => (1, (ease_factor - EASE_STEP).max(MIN_EASE_FACTOR), repetitions),
        Recall::Good => {
            let interval = match GOOD_STEPS.get(repetitions as usize) {
                Some(step) => *step,
                None => grow(interval, ease_factor),
            };
            (interval, ease_factor, repetitions + 1)
        }
        Recall::Easy => {
            let interval = match EASY_STEPS.get(repetitions as usize) {
                Some(step) => *step,
                None => grow(interval, ease_factor * EASY_BONUS),
            };
            (interval, ease_factor + EASE_STEP, repetitions + 1)
        }
    };
    SchedulingUpdate {
        interval,
        ease_factor,
        repetitions,
        next_review: today.add_days(interval),
    }
}

/// Fractional days round up, so growth never yields less than one day.
fn grow(interval: u32, factor: f64) -> u32 {
    let grown = (interval as f64 * factor).ceil();
    (grown as u32).max(1)
}
