pub(crate) mod awards;
pub(crate) mod config;
pub(crate) mod lookup;
pub(crate) mod report;
pub(crate) mod stats;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamedex_core::VideoGame;

use crate::format::pretty_join;

/// Printed under a list header when a filter matches nothing.
pub(crate) const NO_GAMES: &str = "  No games found.";

/// The answer to a single-result question, or why there is none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Outcome {
    /// The answer, possibly spanning several lines.
    Found(String),
    /// The message shown when the query has no result.
    Missing(String),
}

impl Outcome {
    pub(crate) fn from_option(found: Option<String>, missing: impl Into<String>) -> Self {
        match found {
            Some(text) => Self::Found(text),
            None => Self::Missing(missing.into()),
        }
    }
}

/// Print a bold header followed by the joined titles of `games`.
pub(crate) fn print_titles(header: &str, games: &[&VideoGame]) {
    log::info!("{}", header.if_supports_color(Stdout, |t| t.bold()));
    if games.is_empty() {
        log::info!("{}", NO_GAMES.if_supports_color(Stdout, |t| t.dimmed()));
    } else {
        log::info!("  {}", pretty_join(games.iter().map(|g| &g.title)));
    }
    crate::log_blank();
}

/// Print an outcome; missing results are dimmed.
pub(crate) fn print_outcome(outcome: Outcome) {
    match outcome {
        Outcome::Found(text) => log::info!("{}", text),
        Outcome::Missing(text) => log::info!("{}", text.if_supports_color(Stdout, |t| t.dimmed())),
    }
    crate::log_blank();
}
