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

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Html;
use maud::Markup;
use maud::html;

use crate::drill::state::MutableState;
use crate::drill::state::ServerState;
use crate::drill::template::View;
use crate::drill::template::page_template;
use crate::error::Fallible;
use crate::types::date::Date;

/// The number of recently added cards listed on the add page.
const RECENT_LIMIT: usize = 10;

pub async fn get_handler(State(state): State<ServerState>) -> (StatusCode, Html<String>) {
    render(&state, View::Study, Date::today())
}

pub async fn get_add_handler(State(state): State<ServerState>) -> (StatusCode, Html<String>) {
    render(&state, View::Add, Date::today())
}

fn render(state: &ServerState, view: View, today: Date) -> (StatusCode, Html<String>) {
    match render_page(state, view, today) {
        Ok(html) => (StatusCode::OK, Html(html)),
        Err(e) => {
            log::error!("error: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html("Internal Server Error".to_string()),
            )
        }
    }
}

fn render_page(state: &ServerState, view: View, today: Date) -> Fallible<String> {
    let mut mutable = state.lock()?;
    mutable.enter(view, today);
    let body = match view {
        View::Study => study_view(&mutable),
        View::Add => {
            let feedback = mutable.add_feedback.take();
            add_view(&mutable, feedback)
        }
    };
    let stats = mutable.session.stats();
    let page = page_template(view, stats, mutable.status.as_ref(), body);
    Ok(page.into_string())
}

fn study_view(mutable: &MutableState) -> Markup {
    let session = &mutable.session;
    let Some(card) = session.current() else {
        return html! {
            div.empty {
                h1 { "All done for today" }
                p { "No cards are due. Come back tomorrow, or add some cards." }
            }
        };
    };
    let revealed = session.is_revealed();
    html! {
        div .card .revealed[revealed] {
            div.front {
                p { (card.front) }
            }
            @if revealed {
                div.back {
                    p { (card.back) }
                }
            } @else {
                div.hint { "Press space to reveal" }
            }
        }
        div.controls {
            form action="/" method="post" {
                @if revealed {
                    input id="again" type="submit" name="action" value="Again";
                    input id="hard" type="submit" name="action" value="Hard";
                    input id="good" type="submit" name="action" value="Good";
                    input id="easy" type="submit" name="action" value="Easy";
                    div.spacer {}
                    input id="delete" type="submit" name="action" value="Delete";
                } @else {
                    input id="reveal" type="submit" name="action" value="Reveal";
                }
            }
        }
    }
}

fn add_view(mutable: &MutableState, feedback: Option<String>) -> Markup {
    let recent = mutable.session.collection().recent(RECENT_LIMIT);
    html! {
        div.add {
            form id="add-form" action="/add" method="post" {
                textarea id="bulk-input" name="text" rows="10"
                    placeholder="hund - dog\nkatt, cat" {}
                input id="add" type="submit" value="Add cards";
            }
            @if let Some(feedback) = feedback {
                p.feedback { (feedback) }
            }
            h2 { "Recently added" }
            ul.recent {
                @for card in recent {
                    li {
                        span.front { (card.front) }
                        span.back { (card.back) }
                    }
                }
            }
        }
    }
}
