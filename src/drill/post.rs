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

use axum::Form;
use axum::extract::State;
use axum::response::Redirect;
use serde::Deserialize;

use crate::backup::plural;
use crate::drill::state::ServerState;
use crate::drill::template::View;
use crate::error::Fallible;
use crate::parser::parse_entries;
use crate::types::date::Date;
use crate::types::rating::Rating;

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
enum Action {
    Reveal,
    Again,
    Hard,
    Good,
    Easy,
    Delete,
}

impl Action {
    fn rating(&self) -> Option<Rating> {
        match self {
            Action::Again => Some(Rating::Again),
            Action::Hard => Some(Rating::Hard),
            Action::Good => Some(Rating::Good),
            Action::Easy => Some(Rating::Easy),
            Action::Reveal | Action::Delete => None,
        }
    }
}

#[derive(Deserialize)]
pub struct FormData {
    action: Action,
}

#[derive(Deserialize)]
pub struct AddFormData {
    text: String,
}

pub async fn post_handler(
    State(state): State<ServerState>,
    Form(form): Form<FormData>,
) -> Redirect {
    match action_handler(&state, form.action, Date::today()) {
        Ok(_) => {}
        Err(e) => {
            log::error!("error: {e}");
        }
    }
    Redirect::to("/")
}

pub async fn post_add_handler(
    State(state): State<ServerState>,
    Form(form): Form<AddFormData>,
) -> Redirect {
    match add_handler(&state, &form.text, Date::today()) {
        Ok(_) => {}
        Err(e) => {
            log::error!("error: {e}");
        }
    }
    Redirect::to("/add")
}

fn action_handler(state: &ServerState, action: Action, today: Date) -> Fallible<()> {
    let mut mutable = state.lock()?;
    mutable.enter(View::Study, today);
    if action == Action::Reveal {
        mutable.session.reveal();
        return Ok(());
    }
    // Rating and deleting need the answer on screen.
    if !mutable.session.is_revealed() {
        log::debug!("Ignoring {action:?}: card not revealed.");
        return Ok(());
    }
    let events = match action.rating() {
        Some(rating) => mutable.session.rate(rating, today)?,
        None => mutable.session.delete_current()?,
    };
    state.handle_events(&mut mutable, &events, today);
    Ok(())
}

fn add_handler(state: &ServerState, text: &str, today: Date) -> Fallible<()> {
    let mut mutable = state.lock()?;
    mutable.enter(View::Add, today);
    let (added, events) = mutable.session.add_cards(parse_entries(text), today);
    if added == 0 {
        mutable.add_feedback = Some("No valid cards found".to_string());
        return Ok(());
    }
    mutable.add_feedback = Some(format!("Added {added} {}", plural(added, "card")));
    state.handle_events(&mut mutable, &events, today);
    mutable.session.build_queue(today, &mut rand::thread_rng());
    Ok(())
}
