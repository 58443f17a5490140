//! Record types for the game catalog.
//!
//! These are plain value types: a [`VideoGame`] has no identity beyond its
//! fields, and nothing in the engine mutates one after it is loaded.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize};

use crate::genre::Genre;

// ── Nomination ──────────────────────────────────────────────────────────────

/// One award-consideration outcome attached to a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nomination {
    /// Name of the awarding body or ceremony (e.g., "The Game Awards").
    #[serde(alias = "awards")]
    pub award_label: String,
    /// Whether the nomination turned into a win.
    #[serde(default)]
    pub won: bool,
}

impl Nomination {
    pub fn new(award_label: impl Into<String>, won: bool) -> Self {
        Self {
            award_label: award_label.into(),
            won,
        }
    }

    /// Case-insensitive comparison against an award label.
    pub fn is_for(&self, award_label: &str) -> bool {
        eq_ignore_case(&self.award_label, award_label)
    }
}

// ── Video Game ──────────────────────────────────────────────────────────────

/// A single catalog record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoGame {
    pub title: String,
    pub developer: String,
    #[serde(default)]
    pub genres: BTreeSet<Genre>,
    /// Platform names are opaque, case-sensitive tokens.
    #[serde(default)]
    pub platforms: BTreeSet<String>,
    pub release_date: NaiveDate,
    /// Estimated completion time. Signed so malformed input loads as-is.
    pub estimated_hours: i32,
    #[serde(default)]
    pub multiplayer: bool,
    /// A missing or `null` list deserializes to empty, which means "never nominated".
    #[serde(default, deserialize_with = "null_as_empty")]
    pub nominations: Vec<Nomination>,
}

impl VideoGame {
    /// Start a record with the required fields; the rest default to empty/false.
    pub fn new(
        title: impl Into<String>,
        developer: impl Into<String>,
        release_date: NaiveDate,
        estimated_hours: i32,
    ) -> Self {
        Self {
            title: title.into(),
            developer: developer.into(),
            genres: BTreeSet::new(),
            platforms: BTreeSet::new(),
            release_date,
            estimated_hours,
            multiplayer: false,
            nominations: Vec::new(),
        }
    }

    pub fn with_genre(mut self, genre: Genre) -> Self {
        self.genres.insert(genre);
        self
    }

    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platforms.insert(platform.into());
        self
    }

    pub fn multiplayer(mut self, multiplayer: bool) -> Self {
        self.multiplayer = multiplayer;
        self
    }

    pub fn with_nomination(mut self, award_label: impl Into<String>, won: bool) -> Self {
        self.nominations.push(Nomination::new(award_label, won));
        self
    }

    pub fn release_year(&self) -> i32 {
        self.release_date.year()
    }

    pub fn has_nominations(&self) -> bool {
        !self.nominations.is_empty()
    }

    pub fn nomination_count(&self) -> usize {
        self.nominations.len()
    }

    /// Number of nominations that were won.
    pub fn win_count(&self) -> usize {
        self.nominations.iter().filter(|n| n.won).count()
    }

    /// Number of wins whose award label matches `award_label` (case-insensitive).
    pub fn win_count_for(&self, award_label: &str) -> usize {
        self.nominations
            .iter()
            .filter(|n| n.won && n.is_for(award_label))
            .count()
    }

    pub fn has_won_award(&self) -> bool {
        self.nominations.iter().any(|n| n.won)
    }

    pub fn has_title(&self, title: &str) -> bool {
        eq_ignore_case(&self.title, title)
    }

    pub fn is_developed_by(&self, developer: &str) -> bool {
        eq_ignore_case(&self.developer, developer)
    }
}

// ── Tally ───────────────────────────────────────────────────────────────────

/// A query subject paired with the count that qualified it.
///
/// Aggregate queries return `Option<Tally<T>>`: `None` means nothing
/// qualified, so a tally never carries a placeholder value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally<T> {
    pub value: T,
    pub count: usize,
}

impl<T> Tally<T> {
    pub fn new(value: T, count: usize) -> Self {
        Self { value, count }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Tally<U> {
        Tally {
            value: f(self.value),
            count: self.count,
        }
    }
}

/// Unicode-aware case-insensitive equality without allocating.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn case_insensitive_equality() {
        assert!(eq_ignore_case("Final Fantasy VII", "final fantasy vii"));
        assert!(eq_ignore_case("ÔKAMI", "ôkami"));
        assert!(!eq_ignore_case("Halo", "Halo 2"));
    }

    #[test]
    fn win_counts() {
        let game = VideoGame::new("Hades", "Supergiant Games", date(2020, 9, 17), 22)
            .with_nomination("The Game Awards", true)
            .with_nomination("The Game Awards", false)
            .with_nomination("BAFTA Games Awards", true);
        assert_eq!(game.nomination_count(), 3);
        assert_eq!(game.win_count(), 2);
        assert_eq!(game.win_count_for("the game awards"), 1);
        assert_eq!(game.win_count_for("Golden Joystick Awards"), 0);
        assert!(game.has_won_award());
    }

    #[test]
    fn deserializes_camel_case_record() {
        let json = r#"{
            "title": "Portal 2",
            "developer": "Valve",
            "genres": ["PUZZLE", "FIRST_PERSON_SHOOTER"],
            "platforms": ["PC", "Xbox 360", "PlayStation 3"],
            "releaseDate": "2011-04-19",
            "estimatedHours": 9,
            "multiplayer": true,
            "nominations": [
                {"awardLabel": "BAFTA Games Awards", "won": true},
                {"awards": "Golden Joystick Awards", "won": false}
            ]
        }"#;
        let game: VideoGame = serde_json::from_str(json).unwrap();
        assert_eq!(game.release_year(), 2011);
        assert_eq!(game.genres.len(), 2);
        assert!(game.platforms.contains("Xbox 360"));
        assert_eq!(game.nominations[1].award_label, "Golden Joystick Awards");
        assert_eq!(game.win_count(), 1);
    }

    #[test]
    fn null_nominations_become_empty() {
        let json = r#"{
            "title": "Tetris",
            "developer": "Alexey Pajitnov",
            "releaseDate": "1984-06-06",
            "estimatedHours": 1,
            "nominations": null
        }"#;
        let game: VideoGame = serde_json::from_str(json).unwrap();
        assert!(!game.has_nominations());
        assert!(!game.multiplayer);
        assert!(game.genres.is_empty());
    }
}
