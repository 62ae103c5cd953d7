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

use std::io::Read;
use std::io::stdin;
use std::path::Path;
use std::path::PathBuf;

use crate::backup::BackupEvent;
use crate::backup::GitBackup;
use crate::backup::plural;
use crate::config::Config;
use crate::error::Fallible;
use crate::parser::parse_entries;
use crate::session::Session;
use crate::storage::COLLECTION_FILE;
use crate::storage::JsonStorage;
use crate::storage::Storage;
use crate::types::date::Date;

/// Import cards from a file, or from stdin if no file is given.
pub async fn add_cards(directory: &Path, file: Option<PathBuf>) -> Fallible<()> {
    let text = match file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut text = String::new();
            stdin().read_to_string(&mut text)?;
            text
        }
    };
    let config = Config::load(directory)?;
    let storage = JsonStorage::in_directory(directory);
    let today = Date::today();
    let added = import(&storage, &text, today)?;
    if added == 0 {
        println!("No valid cards found.");
        return Ok(());
    }
    println!("Added {added} {}.", plural(added, "card"));
    if config.backup.enabled {
        let backup = GitBackup::new(&config.backup, directory.to_path_buf(), COLLECTION_FILE);
        let message = BackupEvent::CardsAdded(added).message(today);
        if let Err(e) = backup.run(&message).await {
            log::error!("backup failed: {e}");
            eprintln!("Backup failed.");
        }
    }
    Ok(())
}

/// Parse the text, add the cards and save. Returns the number added.
fn import(storage: &impl Storage, text: &str, today: Date) -> Fallible<usize> {
    let mut session = Session::new(storage.load()?);
    let (added, events) = session.add_cards(parse_entries(text), today);
    if !events.is_empty() {
        storage.save(session.collection())?;
    }
    Ok(added)
}
