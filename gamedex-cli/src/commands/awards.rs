use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamedex_core::{Catalog, queries};

use super::{Outcome, print_outcome};
use crate::format::{pretty_join, pretty_pair};

pub(crate) fn most_awarded_outcome(catalog: &Catalog, label: Option<&str>) -> Outcome {
    match label {
        Some(label) => {
            let found = queries::most_awarded_game_by_award_label(catalog, label)
                .map(|best| best.map(|game| game.title.as_str()))
                .map(|best| {
                    format!(
                        "The most awarded game by \"{}\" is \"{}\" with {} win(s).",
                        label,
                        best.value.if_supports_color(Stdout, |t| t.cyan()),
                        best.count,
                    )
                });
            Outcome::from_option(found, format!("No game awarded by \"{}\" found.", label))
        }
        None => {
            let found = queries::most_awarded_game(catalog)
                .map(|best| best.map(|game| game.title.as_str()))
                .map(|best| {
                    format!(
                        "The most awarded game is \"{}\" with {} win(s).",
                        best.value.if_supports_color(Stdout, |t| t.cyan()),
                        best.count,
                    )
                });
            Outcome::from_option(found, "No awarded game found.")
        }
    }
}

pub(crate) fn oldest_multiplayer_winner_outcome(catalog: &Catalog) -> Outcome {
    let found = queries::oldest_multiplayer_to_win_an_award(catalog).map(|game| {
        format!(
            "The oldest multiplayer video game to win an award is \"{}\" ({}).",
            game.title.if_supports_color(Stdout, |t| t.cyan()),
            game.release_year(),
        )
    });
    Outcome::from_option(found, "No multiplayer awarded game found.")
}

pub(crate) fn most_nominated_outcome(catalog: &Catalog, limit: usize) -> Outcome {
    let ranked: Vec<_> = queries::most_nominated_games(catalog, limit)
        .into_iter()
        .map(|tally| tally.map(|game| game.title.as_str()))
        .collect();
    if ranked.len() > limit {
        log::debug!(
            "{} game(s) tied into the top {} slot(s)",
            ranked.len(),
            limit
        );
    }

    let found = (!ranked.is_empty()).then(|| {
        format!(
            "{}\n  {}",
            format!("This is the top {} most nominated games:", limit)
                .if_supports_color(Stdout, |t| t.bold()),
            pretty_join(ranked.iter().map(|t| pretty_pair(t.value, t.count))),
        )
    });
    Outcome::from_option(found, "No nominated game found.")
}

pub(crate) fn run_most_awarded(catalog: &Catalog, label: Option<&str>) {
    print_outcome(most_awarded_outcome(catalog, label));
}

pub(crate) fn run_oldest_multiplayer_winner(catalog: &Catalog) {
    print_outcome(oldest_multiplayer_winner_outcome(catalog));
}

pub(crate) fn run_most_nominated(catalog: &Catalog, limit: usize) {
    print_outcome(most_nominated_outcome(catalog, limit));
}
