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

use crate::scheduler::Recall;

/// How well the user recalled a card.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Rating {
    /// Failed to recall. The card comes back later in the same session.
    Again,
    Hard,
    Good,
    Easy,
}

impl Rating {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::Again => "again",
            Rating::Hard => "hard",
            Rating::Good => "good",
            Rating::Easy => "easy",
        }
    }

    /// The scheduler input for this rating, or `None` for `Again`, which
    /// does not reschedule.
    pub fn recall(&self) -> Option<Recall> {
        match self {
            Rating::Again => None,
            Rating::Hard => Some(Recall::Hard),
            Rating::Good => Some(Recall::Good),
            Rating::Easy => Some(Recall::Easy),
        }
    }
}
