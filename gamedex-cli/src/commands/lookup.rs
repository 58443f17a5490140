use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamedex_core::{Catalog, Genre, queries};

use super::{NO_GAMES, Outcome, print_outcome, print_titles};
use crate::format::{game_summary, pretty_join, pretty_pair};

pub(crate) fn run_list(catalog: &Catalog) {
    log::info!(
        "{}",
        "These are all the available video games:".if_supports_color(Stdout, |t| t.bold()),
    );
    if catalog.is_empty() {
        log::info!("{}", NO_GAMES.if_supports_color(Stdout, |t| t.dimmed()));
    }
    for game in catalog {
        log::info!("  {}", game_summary(game));
    }
    crate::log_blank();
}

pub(crate) fn title_outcome(catalog: &Catalog, title: &str) -> Outcome {
    let found = queries::by_title(catalog, title).map(|game| {
        format!(
            "{}\n  {}",
            format!("Here's the video game with title \"{}\":", title)
                .if_supports_color(Stdout, |t| t.bold()),
            game_summary(game),
        )
    });
    Outcome::from_option(found, format!("No video game found with title \"{}\".", title))
}

pub(crate) fn run_title(catalog: &Catalog, title: &str) {
    print_outcome(title_outcome(catalog, title));
}

pub(crate) fn run_developer(catalog: &Catalog, developer: &str) {
    let games = queries::by_developer(catalog, developer);
    print_titles(
        &format!("These are all the video games developed by \"{}\":", developer),
        &games,
    );
}

pub(crate) fn run_genre(catalog: &Catalog, genre: Genre, developer: Option<&str>) {
    match developer {
        Some(developer) => {
            let games = queries::by_genre_and_developer(catalog, genre, developer);
            print_titles(
                &format!(
                    "These are all the video games of \"{}\" genre developed by \"{}\":",
                    genre, developer
                ),
                &games,
            );
        }
        None => {
            let games = queries::by_genre(catalog, genre);
            print_titles(
                &format!("These are all the \"{}\" genre video games:", genre),
                &games,
            );
        }
    }
}

/// List every known genre and the names accepted for it.
pub(crate) fn run_genres() {
    log::info!("{}", "Known genres:".if_supports_color(Stdout, |t| t.bold()));
    for genre in Genre::all() {
        log::info!(
            "  {} [{}]",
            genre.short_name().if_supports_color(Stdout, |t| t.bold()),
            genre.display_name().if_supports_color(Stdout, |t| t.cyan()),
        );
        log::info!("    Aliases: {}", genre.aliases().join(", "));
    }
}

pub(crate) fn run_platform(catalog: &Catalog, platform: &str) {
    let games = queries::by_platform(catalog, platform);
    print_titles(
        &format!("These are all the games available in \"{}\" platform:", platform),
        &games,
    );
}

pub(crate) fn run_year(catalog: &Catalog, year: i32) {
    let games = queries::by_release_year(catalog, year);
    print_titles(
        &format!("These are all the video games released in \"{}\":", year),
        &games,
    );
}

pub(crate) fn run_before(catalog: &Catalog, year: i32) {
    let games = queries::released_before_year(catalog, year);
    print_titles(
        &format!("These are all the video games released before \"{}\":", year),
        &games,
    );
}

pub(crate) fn run_before_or_after(catalog: &Catalog, before_year: i32, after_year: i32) {
    let mut games = queries::released_before_or_after(catalog, before_year, after_year);
    games.sort_by_key(|g| g.release_year());

    log::info!(
        "{}",
        format!(
            "These are all the video games released before \"{}\" or after \"{}\":",
            before_year, after_year
        )
        .if_supports_color(Stdout, |t| t.bold()),
    );
    if games.is_empty() {
        log::info!("{}", NO_GAMES.if_supports_color(Stdout, |t| t.dimmed()));
    } else {
        log::info!(
            "  {}",
            pretty_join(games.iter().map(|g| pretty_pair(&g.title, g.release_year())))
        );
    }
    crate::log_blank();
}

pub(crate) fn run_multiplayer(catalog: &Catalog) {
    let games = queries::multiplayer_games(catalog);
    print_titles("These are all the multiplayer titles:", &games);
}
