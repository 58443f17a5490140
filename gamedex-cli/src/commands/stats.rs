use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamedex_core::{Catalog, queries};

use super::{Outcome, print_outcome};
use crate::format::{format_duration_hms, pretty_join};

pub(crate) fn favourite_genre_outcome(catalog: &Catalog) -> Outcome {
    let found = queries::favourite_genre(catalog).map(|fav| {
        format!(
            "The most common genre is \"{}\" with {} game(s).",
            fav.value.if_supports_color(Stdout, |t| t.cyan()),
            fav.count,
        )
    });
    Outcome::from_option(found, "No game with a genre found.")
}

pub(crate) fn rare_platforms_outcome(catalog: &Catalog) -> Outcome {
    let found = queries::less_common_platforms(catalog).map(|rare| {
        format!(
            "{}\n  {}",
            format!(
                "These are the less common platforms with just {} occurrence(s):",
                rare.count
            )
            .if_supports_color(Stdout, |t| t.bold()),
            pretty_join(&rare.value),
        )
    });
    Outcome::from_option(found, "No used platform found.")
}

pub(crate) fn average_time_outcome(catalog: &Catalog) -> Outcome {
    let found = queries::average_playing_time(catalog).map(|avg| {
        format!(
            "The average estimated playing time per game is {} HH:MM:SS.",
            format_duration_hms(avg).if_supports_color(Stdout, |t| t.cyan()),
        )
    });
    Outcome::from_option(found, "No game or estimated playing time found.")
}

pub(crate) fn shortest_outcome(catalog: &Catalog) -> Outcome {
    let found = queries::shortest_game(catalog).map(|game| {
        format!(
            "The shortest game based on the estimated playing hours is \"{}\" with {} hrs.",
            game.title.if_supports_color(Stdout, |t| t.cyan()),
            game.estimated_hours,
        )
    });
    Outcome::from_option(found, "No game found.")
}

pub(crate) fn run_favourite_genre(catalog: &Catalog) {
    print_outcome(favourite_genre_outcome(catalog));
}

pub(crate) fn run_rare_platforms(catalog: &Catalog) {
    print_outcome(rare_platforms_outcome(catalog));
}

pub(crate) fn run_average_time(catalog: &Catalog) {
    print_outcome(average_time_outcome(catalog));
}

pub(crate) fn run_shortest(catalog: &Catalog) {
    print_outcome(shortest_outcome(catalog));
}
