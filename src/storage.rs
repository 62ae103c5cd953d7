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

use std::fs::read_to_string;
use std::fs::rename;
use std::fs::write;
use std::path::Path;
use std::path::PathBuf;
use std::time::Instant;

use crate::collection::Collection;
use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::error::fail;

/// The name of the collection file in the collection directory.
pub const COLLECTION_FILE: &str = "cards.json";

pub trait Storage {
    /// Load the collection. Fails if the store is missing or corrupt.
    fn load(&self) -> Fallible<Collection>;

    fn save(&self, collection: &Collection) -> Fallible<()>;
}

/// Stores the collection as a single JSON document.
#[derive(Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The collection file inside the given directory.
    pub fn in_directory(directory: &Path) -> Self {
        Self::new(directory.join(COLLECTION_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write an empty collection. Fails if the file already exists.
    pub fn init(&self) -> Fallible<()> {
        if self.exists() {
            return fail(format!(
                "collection file already exists: {}",
                self.path.display()
            ));
        }
        self.save(&Collection::empty())
    }
}

impl Storage for JsonStorage {
    fn load(&self) -> Fallible<Collection> {
        if !self.exists() {
            return fail(format!(
                "collection file does not exist: {}",
                self.path.display()
            ));
        }
        log::debug!("Loading collection...");
        let start = Instant::now();
        let content = read_to_string(&self.path)?;
        let collection: Collection = serde_json::from_str(&content).map_err(|e| {
            ErrorReport::new(format!(
                "collection file is corrupt: {}: {e}",
                self.path.display()
            ))
        })?;
        let duration = start.elapsed().as_millis();
        log::debug!(
            "Loaded {} cards in {duration}ms.",
            collection.cards.len()
        );
        Ok(collection)
    }

    fn save(&self, collection: &Collection) -> Fallible<()> {
        let json = serde_json::to_string_pretty(collection)?;
        // Write a sibling file and move it into place.
        let tmp = self.path.with_extension("json.tmp");
        write(&tmp, json)?;
        rename(&tmp, &self.path)?;
        log::debug!("Saved {} cards.", collection.cards.len());
        Ok(())
    }
}
