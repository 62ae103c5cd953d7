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

use maud::DOCTYPE;
use maud::Markup;
use maud::html;

use crate::cmd::stats::Stats;
use crate::drill::state::Status;

/// Which view is active, for highlighting the navigation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum View {
    Study,
    Add,
}

pub fn page_template(view: View, stats: Stats, status: Option<&Status>, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "pairdrill" }
                link rel="stylesheet" href="/style.css";
            }
            body {
                header {
                    nav {
                        a .nav-link .active[view == View::Study] href="/" { "Study" }
                        a .nav-link .active[view == View::Add] href="/add" { "Add" }
                    }
                    div.stats {
                        span #due-count { (stats.due_label()) }
                        span #total-count { (stats.total_label()) }
                    }
                }
                @if let Some(status) = status {
                    div #status .error[status.error] {
                        (status.message)
                    }
                }
                main {
                    (body)
                }
                script src="/script.js" {};
            }
        }
    }
}
