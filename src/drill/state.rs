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

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;

use chrono::Local;

use crate::backup::GitBackup;
use crate::drill::template::View;
use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::session::Event;
use crate::session::Session;
use crate::storage::Storage;
use crate::types::date::Date;

#[derive(Clone)]
pub struct ServerState {
    /// `None` if backups are disabled.
    pub backup: Option<GitBackup>,
    pub mutable: Arc<Mutex<MutableState>>,
}

/// Everything handlers change. A single lock guards it, so only one
/// mutation is ever in flight.
pub struct MutableState {
    pub session: Session,
    pub storage: Box<dyn Storage + Send>,
    /// The last save or backup outcome.
    pub status: Option<Status>,
    /// The outcome of the last bulk add, shown once.
    pub add_feedback: Option<String>,
    /// The last view rendered.
    pub view: View,
}

impl MutableState {
    /// Switch to `view`. The queue is rebuilt when the day has turned over,
    /// or when coming back to the study view from the add view.
    pub fn enter(&mut self, view: View, today: Date) {
        let returning = view == View::Study && self.view == View::Add;
        if returning || self.session.is_stale(today) {
            let due = self.session.build_queue(today, &mut rand::thread_rng());
            log::debug!("Rebuilt the queue: {due} cards due.");
        }
        self.view = view;
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Status {
    pub message: String,
    pub error: bool,
}

impl Status {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: false,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: true,
        }
    }
}

impl ServerState {
    pub fn new(session: Session, storage: Box<dyn Storage + Send>, backup: Option<GitBackup>) -> Self {
        Self {
            backup,
            mutable: Arc::new(Mutex::new(MutableState {
                session,
                storage,
                status: None,
                add_feedback: None,
                view: View::Study,
            })),
        }
    }

    pub fn lock(&self) -> Fallible<MutexGuard<'_, MutableState>> {
        self.mutable
            .lock()
            .map_err(|_| ErrorReport::new("server state lock poisoned"))
    }

    /// Carry out the side effects of a session operation. Save and backup
    /// failures are reported through the status line; the session itself is
    /// never rolled back.
    pub fn handle_events(&self, mutable: &mut MutableState, events: &[Event], today: Date) {
        for event in events {
            if *event == Event::Persist {
                match mutable.storage.save(mutable.session.collection()) {
                    Ok(()) => {}
                    Err(e) => {
                        log::error!("save failed: {e}");
                        mutable.status = Some(Status::error("Save failed"));
                    }
                }
            }
            if let Some(backup_event) = event.backup() {
                let message = backup_event.message(today);
                match &self.backup {
                    Some(backup) => self.spawn_backup(backup.clone(), message),
                    None => log::debug!("Backups disabled, skipping: {message}"),
                }
            }
        }
    }

    fn spawn_backup(&self, backup: GitBackup, message: String) {
        let mutable = self.mutable.clone();
        tokio::spawn(async move {
            let status = match backup.run(&message).await {
                Ok(()) => {
                    let now = Local::now().format("%H:%M:%S");
                    log::debug!("Backup done: {message}");
                    Status::ok(format!("Backed up at {now}"))
                }
                Err(e) => {
                    log::error!("backup failed: {e}");
                    Status::error("Backup failed")
                }
            };
            if let Ok(mut mutable) = mutable.lock() {
                mutable.status = Some(status);
            }
        });
    }
}
