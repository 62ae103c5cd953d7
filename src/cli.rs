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

use std::env::current_dir;
use std::path::PathBuf;

use clap::Parser;

use crate::cmd::add::add_cards;
use crate::cmd::init::init_collection;
use crate::cmd::stats::StatsFormat;
use crate::cmd::stats::print_stats;
use crate::config::Config;
use crate::drill::server::start_server;
use crate::error::Fallible;
use crate::error::fail;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Create an empty collection.
    Init {
        /// Optional path to the collection directory.
        directory: Option<String>,
    },
    /// Review the cards due today in the browser.
    Drill {
        /// Optional path to the collection directory.
        directory: Option<String>,
        /// The port to listen on. Overrides the config file.
        #[arg(long)]
        port: Option<u16>,
        /// Don't open the browser.
        #[arg(long)]
        no_open: bool,
    },
    /// Add cards, one `front - back` or `front, back` pair per line.
    Add {
        /// Optional path to the collection directory.
        directory: Option<String>,
        /// Read cards from this file instead of stdin.
        #[arg(long)]
        file: Option<String>,
    },
    /// Print collection statistics.
    Stats {
        /// Optional path to the collection directory.
        directory: Option<String>,
        /// Output format.
        #[arg(long, default_value_t = StatsFormat::Text)]
        format: StatsFormat,
    },
}

pub async fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Init { directory } => {
            let directory = resolve_directory(directory)?;
            init_collection(&directory)
        }
        Command::Drill {
            directory,
            port,
            no_open,
        } => {
            let directory = resolve_directory(directory)?;
            let mut config = Config::load(&directory)?;
            if let Some(port) = port {
                config.port = port;
            }
            if no_open {
                config.open_browser = false;
            }
            start_server(directory, config).await
        }
        Command::Add { directory, file } => {
            let directory = resolve_directory(directory)?;
            add_cards(&directory, file.map(PathBuf::from)).await
        }
        Command::Stats { directory, format } => {
            let directory = resolve_directory(directory)?;
            print_stats(&directory, format)
        }
    }
}

fn resolve_directory(directory: Option<String>) -> Fallible<PathBuf> {
    let directory: PathBuf = match directory {
        Some(dir) => PathBuf::from(dir),
        None => current_dir()?,
    };
    if !directory.exists() {
        return fail("directory does not exist.");
    }
    Ok(directory.canonicalize()?)
}
