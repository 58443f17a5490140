//! Read-only queries over a [`Catalog`].
//!
//! Every function here is total: an empty catalog, games without
//! nominations, or malformed values (negative hours) never cause a panic.
//! "Nothing qualifies" is `None` for single-subject queries and an empty
//! `Vec` for filters. Ties always go to the game inserted first.

use std::collections::{BTreeSet, HashMap};

use chrono::TimeDelta;

use crate::catalog::Catalog;
use crate::genre::Genre;
use crate::types::{Tally, VideoGame};

const MILLIS_PER_HOUR: i64 = 60 * 60 * 1000;

// ── Lookup ──────────────────────────────────────────────────────────────────

/// First game whose title matches `title`, ignoring case.
pub fn by_title<'a>(catalog: &'a Catalog, title: &str) -> Option<&'a VideoGame> {
    catalog.iter().find(|g| g.has_title(title))
}

// ── Filters ─────────────────────────────────────────────────────────────────

fn filter<'a>(catalog: &'a Catalog, pred: impl Fn(&VideoGame) -> bool) -> Vec<&'a VideoGame> {
    catalog.iter().filter(|&g| pred(g)).collect()
}

/// Games by `developer`, ignoring case.
pub fn by_developer<'a>(catalog: &'a Catalog, developer: &str) -> Vec<&'a VideoGame> {
    filter(catalog, |g| g.is_developed_by(developer))
}

pub fn by_genre(catalog: &Catalog, genre: Genre) -> Vec<&VideoGame> {
    filter(catalog, |g| g.genres.contains(&genre))
}

pub fn by_genre_and_developer<'a>(
    catalog: &'a Catalog,
    genre: Genre,
    developer: &str,
) -> Vec<&'a VideoGame> {
    filter(catalog, |g| {
        g.genres.contains(&genre) && g.is_developed_by(developer)
    })
}

/// Games available on `platform`. Platform names are matched exactly.
pub fn by_platform<'a>(catalog: &'a Catalog, platform: &str) -> Vec<&'a VideoGame> {
    filter(catalog, |g| g.platforms.contains(platform))
}

pub fn by_release_year(catalog: &Catalog, year: i32) -> Vec<&VideoGame> {
    filter(catalog, |g| g.release_year() == year)
}

/// Games released strictly before `year`.
pub fn released_before_year(catalog: &Catalog, year: i32) -> Vec<&VideoGame> {
    filter(catalog, |g| g.release_year() < year)
}

/// Games released before `before_year` or in/after `after_year`.
///
/// The bounds are asymmetric: a game from `after_year` is included, a game
/// from `before_year` is not.
pub fn released_before_or_after(
    catalog: &Catalog,
    before_year: i32,
    after_year: i32,
) -> Vec<&VideoGame> {
    filter(catalog, |g| {
        let year = g.release_year();
        year < before_year || year >= after_year
    })
}

pub fn multiplayer_games(catalog: &Catalog) -> Vec<&VideoGame> {
    filter(catalog, |g| g.multiplayer)
}

// ── Grouping / Ranking ──────────────────────────────────────────────────────

/// The genre carried by the most games, with its game count.
///
/// A game with several genres counts once towards each. On a tie the genre
/// seen first wins, walking games in insertion order and each game's genres
/// in `Genre` order. `None` when no game has any genre.
pub fn favourite_genre(catalog: &Catalog) -> Option<Tally<Genre>> {
    // (genre, count) in order of first appearance
    let mut counts: Vec<(Genre, usize)> = Vec::new();
    for game in catalog {
        for &genre in &game.genres {
            match counts.iter_mut().find(|(g, _)| *g == genre) {
                Some((_, n)) => *n += 1,
                None => counts.push((genre, 1)),
            }
        }
    }
    log::trace!("Genre counts: {:?}", counts);

    let mut best: Option<Tally<Genre>> = None;
    for (genre, count) in counts {
        if best.as_ref().is_none_or(|b| count > b.count) {
            best = Some(Tally::new(genre, count));
        }
    }
    best
}

/// All platforms sharing the lowest occurrence count, with that count.
///
/// Ties are expected; every platform at the minimum is returned. `None`
/// when no game lists a platform.
pub fn less_common_platforms(catalog: &Catalog) -> Option<Tally<BTreeSet<String>>> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for game in catalog {
        for platform in &game.platforms {
            *counts.entry(platform.as_str()).or_insert(0) += 1;
        }
    }

    let min = counts.values().copied().min()?;
    let platforms: BTreeSet<String> = counts
        .into_iter()
        .filter(|&(_, n)| n == min)
        .map(|(p, _)| p.to_string())
        .collect();
    log::debug!("{} platform(s) share the minimum of {}", platforms.len(), min);
    Some(Tally::new(platforms, min))
}

/// Mean estimated playing time across all games.
///
/// `None` on an empty catalog; an actual zero mean is `Some(TimeDelta::zero())`.
pub fn average_playing_time(catalog: &Catalog) -> Option<TimeDelta> {
    if catalog.is_empty() {
        return None;
    }
    let total_hours: i64 = catalog.iter().map(|g| i64::from(g.estimated_hours)).sum();
    // TimeDelta spans exactly +/- i64::MAX milliseconds
    let millis = (total_hours.saturating_mul(MILLIS_PER_HOUR) / catalog.len() as i64)
        .max(-i64::MAX);
    Some(TimeDelta::try_milliseconds(millis).unwrap_or_default())
}

/// The game with the fewest estimated hours; the first one on ties.
pub fn shortest_game(catalog: &Catalog) -> Option<&VideoGame> {
    catalog.iter().min_by_key(|g| g.estimated_hours)
}

/// Games with the most nominations (won or not), most nominated first.
///
/// All nomination counts are sorted in descending order and the values in
/// the first `limit` slots form the qualifying set. Every game whose count
/// is in that set is returned, so ties can surface more than `limit` games.
/// Games without nominations never qualify. `limit == 0` yields nothing.
pub fn most_nominated_games(catalog: &Catalog, limit: usize) -> Vec<Tally<&VideoGame>> {
    let nominated: Vec<&VideoGame> = catalog.iter().filter(|g| g.has_nominations()).collect();

    let mut top_counts: Vec<usize> = nominated.iter().map(|g| g.nomination_count()).collect();
    top_counts.sort_unstable_by(|a, b| b.cmp(a));
    top_counts.truncate(limit);
    log::trace!("Top {} nomination slot(s): {:?}", limit, top_counts);

    let mut ranked: Vec<Tally<&VideoGame>> = nominated
        .into_iter()
        .filter(|g| top_counts.contains(&g.nomination_count()))
        .map(|g| Tally::new(g, g.nomination_count()))
        .collect();
    // stable: equal counts keep insertion order
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
}

/// The game with the most won nominations.
///
/// `None` when the catalog is empty or no game has won anything.
pub fn most_awarded_game(catalog: &Catalog) -> Option<Tally<&VideoGame>> {
    most_wins(catalog, VideoGame::win_count)
}

/// The game with the most wins of a particular award, matched ignoring case.
///
/// `None` when no game has won that award.
pub fn most_awarded_game_by_award_label<'a>(
    catalog: &'a Catalog,
    award_label: &str,
) -> Option<Tally<&'a VideoGame>> {
    most_wins(catalog, |g| g.win_count_for(award_label))
}

fn most_wins<'a>(
    catalog: &'a Catalog,
    wins: impl Fn(&VideoGame) -> usize,
) -> Option<Tally<&'a VideoGame>> {
    let mut best: Option<Tally<&VideoGame>> = None;
    for game in catalog {
        let count = wins(game);
        if count > best.as_ref().map_or(0, |b| b.count) {
            best = Some(Tally::new(game, count));
        }
    }
    best
}

/// The earliest-released multiplayer game that has won at least one award.
///
/// Only the release year is compared; the first game wins a tie.
pub fn oldest_multiplayer_to_win_an_award(catalog: &Catalog) -> Option<&VideoGame> {
    catalog
        .iter()
        .filter(|g| g.multiplayer && g.has_won_award())
        .min_by_key(|g| g.release_year())
}
