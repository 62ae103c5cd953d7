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
use std::path::Path;

use serde::Deserialize;

use crate::error::Fallible;

/// The name of the optional config file in the collection directory.
pub const CONFIG_FILE: &str = "pairdrill.toml";

const DEFAULT_PORT: u16 = 8000;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// The port the study server listens on.
    pub port: u16,
    /// Whether to open the browser when the server starts.
    pub open_browser: bool,
    pub backup: BackupConfig,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BackupConfig {
    pub enabled: bool,
    /// The git executable to run.
    pub command: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            open_browser: true,
            backup: BackupConfig::default(),
        }
    }
}

impl Default for BackupConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            command: "git".to_string(),
        }
    }
}

impl Config {
    /// Read the config file in the given directory, falling back to the
    /// defaults if there is none.
    pub fn load(directory: &Path) -> Fallible<Self> {
        let path = directory.join(CONFIG_FILE);
        if !path.exists() {
            log::debug!("No config file, using defaults.");
            return Ok(Self::default());
        }
        let content = read_to_string(&path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Fallible<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::fs::write;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_defaults() -> Fallible<()> {
        let config = Config::parse("")?;
        assert_eq!(config, Config::default());
        assert_eq!(config.port, 8000);
        assert!(config.open_browser);
        assert!(!config.backup.enabled);
        assert_eq!(config.backup.command, "git");
        Ok(())
    }

    #[test]
    fn test_parse() -> Fallible<()> {
        let content = "port = 9001\nopen_browser = false\n\n[backup]\nenabled = true\n";
        let config = Config::parse(content)?;
        assert_eq!(config.port, 9001);
        assert!(!config.open_browser);
        assert!(config.backup.enabled);
        assert_eq!(config.backup.command, "git");
        Ok(())
    }

    #[test]
    fn test_unknown_field() {
        assert!(Config::parse("colour = \"blue\"").is_err());
    }

    #[test]
    fn test_load_missing_file() -> Fallible<()> {
        let dir = tempdir()?;
        assert_eq!(Config::load(dir.path())?, Config::default());
        Ok(())
    }

    #[test]
    fn test_load_file() -> Fallible<()> {
        let dir = tempdir()?;
        write(dir.path().join(CONFIG_FILE), "port = 8123\n")?;
        assert_eq!(Config::load(dir.path())?.port, 8123);
        Ok(())
    }
}
