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

//! Versioned backups of the collection file. Backups are advisory: a failed
//! backup is reported, and nothing else changes.

use std::path::PathBuf;

use tokio::process::Command;

use crate::config::BackupConfig;
use crate::error::Fallible;
use crate::error::fail;
use crate::types::date::Date;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BackupEvent {
    /// Cards were added to the collection.
    CardsAdded(usize),
    /// The due queue went from non-empty to empty.
    SessionCompleted,
}

impl BackupEvent {
    /// The commit message recorded for this event.
    pub fn message(&self, today: Date) -> String {
        match self {
            BackupEvent::CardsAdded(count) => {
                format!("added {count} {} - {today}", plural(*count, "card"))
            }
            BackupEvent::SessionCompleted => format!("session completed - {today}"),
        }
    }
}

pub fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        noun.to_string()
    } else {
        format!("{noun}s")
    }
}

/// Commits the collection file to the git repository it lives in.
#[derive(Clone)]
pub struct GitBackup {
    /// The git executable.
    program: String,
    /// The directory holding the collection, inside a git work tree.
    directory: PathBuf,
    /// The collection file, relative to `directory`.
    file_name: String,
}

impl GitBackup {
    pub fn new(config: &BackupConfig, directory: PathBuf, file_name: impl Into<String>) -> Self {
        Self {
            program: config.command.clone(),
            directory,
            file_name: file_name.into(),
        }
    }

    pub async fn run(&self, message: &str) -> Fallible<()> {
        log::debug!("Backing up: {message}");
        self.git(&["add", "--", &self.file_name]).await?;
        self.git(&["commit", "-m", message, "--", &self.file_name])
            .await?;
        Ok(())
    }

    async fn git(&self, args: &[&str]) -> Fallible<()> {
        let output = Command::new(&self.program)
            .args(args)
            .current_dir(&self.directory)
            .output()
            .await?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return fail(format!(
                "`{} {}` failed: {}",
                self.program,
                args.join(" "),
                stderr.trim()
            ));
        }
        Ok(())
    }
}
