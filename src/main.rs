//! Terminal front end for openlib.
//!
//! Reads one line at a time from stdin. Each line replaces the search query,
//! except for the commands:
//!
//! - `:tab N`: select tab `N` (0 = search results, 1 = favorites)
//! - `:quit`: exit
//!
//! Every published state snapshot is rendered as a text frame on stdout.

use futures_util::{Stream, StreamExt};
use openlib::infrastructure::get_config_file;
use openlib::{BookListAction, BookListState, Config};
use std::io::{IsTerminal, Write};
use tokio::io::{AsyncBufReadExt, BufReader};

const FRAME_WIDTH: usize = 80;

/// One parsed input line.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Query(String),
    Tab(usize),
    Quit,
    Unknown(String),
}

impl Command {
    fn parse(line: &str) -> Self {
        let Some(command) = line.trim().strip_prefix(':') else {
            return Self::Query(line.trim_end_matches(['\r', '\n']).to_string());
        };

        let mut parts = command.split_whitespace();
        match (parts.next(), parts.next(), parts.next()) {
            (Some("quit" | "q"), None, None) => Self::Quit,
            (Some("tab"), Some(index), None) => index
                .parse()
                .map_or_else(|_| Self::Unknown(line.trim().to_string()), Self::Tab),
            _ => Self::Unknown(line.trim().to_string()),
        }
    }
}

#[tokio::main]
async fn main() -> openlib::Result<()> {
    let config = load_config()?;
    openlib::observability::init_tracing(&config);

    let coordinator = openlib::initialize(&config)?;
    let printer = tokio::spawn(print_frames(coordinator.observe()));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match Command::parse(&line) {
            Command::Query(query) => {
                coordinator.on_action(BookListAction::OnSearchQueryChange(query));
            }
            Command::Tab(index) => coordinator.on_action(BookListAction::OnTabSelected(index)),
            Command::Quit => break,
            Command::Unknown(input) => {
                eprintln!("unknown command {input:?}; try `:tab 0`, `:tab 1` or `:quit`");
            }
        }
    }

    tracing::debug!("input closed, shutting down");
    coordinator.shutdown();
    let _ = printer.await;
    Ok(())
}

fn load_config() -> openlib::Result<Config> {
    let path = get_config_file();
    if path.exists() {
        Config::load(&path)
    } else {
        Ok(Config::default())
    }
}

async fn print_frames(states: impl Stream<Item = BookListState>) {
    let clear = std::io::stdout().is_terminal();
    let mut states = Box::pin(states);

    while let Some(state) = states.next().await {
        let frame = openlib::ui::render(&state, FRAME_WIDTH);
        let mut stdout = std::io::stdout().lock();
        let written = if clear {
            write!(stdout, "\x1b[2J\x1b[H{frame}")
        } else {
            writeln!(stdout, "{frame}")
        };
        if written.and_then(|()| stdout.flush()).is_err() {
            break;
        }
    }
}
