use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamedex_core::{Catalog, Genre};

use super::{awards, lookup, stats};

pub(crate) const DEFAULT_TITLE: &str = "Final Fantasy VII";
pub(crate) const DEFAULT_GENRE: Genre = Genre::HackAndSlash;
pub(crate) const DEFAULT_GENRE_AND_DEVELOPER: (Genre, &str) = (Genre::RolePlaying, "Square Enix");
pub(crate) const DEFAULT_PLATFORM: &str = "Xbox One";
pub(crate) const DEFAULT_RELEASE_YEAR: i32 = 2017;
pub(crate) const DEFAULT_BEFORE_OR_AFTER: (i32, i32) = (2000, 2018);

/// Arguments for every question the report asks.
#[derive(Debug, Clone)]
pub(crate) struct ReportOptions<'a> {
    pub title: &'a str,
    pub genre: Genre,
    pub genre_and_developer: (Genre, &'a str),
    pub platform: &'a str,
    pub release_year: i32,
    pub before_or_after: (i32, i32),
    pub award_label: &'a str,
    pub nomination_limit: usize,
}

impl<'a> ReportOptions<'a> {
    /// Sample questions, with the configured award label and nomination limit.
    pub(crate) fn new(award_label: &'a str, nomination_limit: usize) -> Self {
        Self {
            title: DEFAULT_TITLE,
            genre: DEFAULT_GENRE,
            genre_and_developer: DEFAULT_GENRE_AND_DEVELOPER,
            platform: DEFAULT_PLATFORM,
            release_year: DEFAULT_RELEASE_YEAR,
            before_or_after: DEFAULT_BEFORE_OR_AFTER,
            award_label,
            nomination_limit,
        }
    }
}

/// One block of report output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Section {
    AllGames,
    Multiplayer,
    Title,
    Genre,
    GenreAndDeveloper,
    FavouriteGenre,
    Platform,
    ReleaseYear,
    BeforeOrAfter,
    AverageTime,
    Shortest,
    MostAwarded,
    MostAwardedByLabel,
    OldestMultiplayerWinner,
    MostNominated,
    RarePlatforms,
}

/// Report sections in print order.
pub(crate) const SECTIONS: [Section; 16] = [
    Section::AllGames,
    Section::Multiplayer,
    Section::Title,
    Section::Genre,
    Section::GenreAndDeveloper,
    Section::FavouriteGenre,
    Section::Platform,
    Section::ReleaseYear,
    Section::BeforeOrAfter,
    Section::AverageTime,
    Section::Shortest,
    Section::MostAwarded,
    Section::MostAwardedByLabel,
    Section::OldestMultiplayerWinner,
    Section::MostNominated,
    Section::RarePlatforms,
];

/// Ask every question in turn.
pub(crate) fn run_report(catalog: &Catalog, options: &ReportOptions<'_>) {
    log::info!(
        "{}",
        format!("Catalog report ({} game(s))", catalog.len())
            .if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    for section in SECTIONS {
        log::trace!("Report section {:?}", section);
        run_section(catalog, options, section);
    }
}

fn run_section(catalog: &Catalog, options: &ReportOptions<'_>, section: Section) {
    match section {
        Section::AllGames => lookup::run_list(catalog),
        Section::Multiplayer => lookup::run_multiplayer(catalog),
        Section::Title => lookup::run_title(catalog, options.title),
        Section::Genre => lookup::run_genre(catalog, options.genre, None),
        Section::GenreAndDeveloper => {
            let (genre, developer) = options.genre_and_developer;
            lookup::run_genre(catalog, genre, Some(developer));
        }
        Section::FavouriteGenre => stats::run_favourite_genre(catalog),
        Section::Platform => lookup::run_platform(catalog, options.platform),
        Section::ReleaseYear => lookup::run_year(catalog, options.release_year),
        Section::BeforeOrAfter => {
            let (before, after) = options.before_or_after;
            lookup::run_before_or_after(catalog, before, after);
        }
        Section::AverageTime => stats::run_average_time(catalog),
        Section::Shortest => stats::run_shortest(catalog),
        Section::MostAwarded => awards::run_most_awarded(catalog, None),
        Section::MostAwardedByLabel => {
            awards::run_most_awarded(catalog, Some(options.award_label))
        }
        Section::OldestMultiplayerWinner => awards::run_oldest_multiplayer_winner(catalog),
        Section::MostNominated => awards::run_most_nominated(catalog, options.nomination_limit),
        Section::RarePlatforms => stats::run_rare_platforms(catalog),
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use gamedex_core::queries;

    use super::*;
    use crate::commands::Outcome;

    fn sample_catalog() -> Catalog {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("..")
            .join("data")
            .join("videogames.json");
        gamedex_loader::load_catalog(&path).unwrap()
    }

    #[test]
    fn sections_cover_every_question_once() {
        assert_eq!(SECTIONS[0], Section::AllGames);
        assert_eq!(SECTIONS[SECTIONS.len() - 1], Section::RarePlatforms);
        for (i, section) in SECTIONS.iter().enumerate() {
            assert!(
                !SECTIONS[i + 1..].contains(section),
                "{section:?} appears twice"
            );
        }
    }

    #[test]
    fn lookups_come_before_aggregates() {
        let position = |s: Section| SECTIONS.iter().position(|&x| x == s).unwrap();
        assert!(position(Section::Multiplayer) < position(Section::Title));
        assert!(position(Section::Title) < position(Section::Genre));
        assert!(position(Section::GenreAndDeveloper) < position(Section::FavouriteGenre));
        assert!(position(Section::FavouriteGenre) < position(Section::Platform));
        assert!(position(Section::BeforeOrAfter) < position(Section::AverageTime));
        assert!(position(Section::MostNominated) < position(Section::RarePlatforms));
    }

    #[test]
    fn default_questions_have_answers_in_sample_data() {
        let catalog = sample_catalog();
        let options = ReportOptions::new("The Game Awards", 5);

        assert!(matches!(
            lookup::title_outcome(&catalog, options.title),
            Outcome::Found(_)
        ));
        assert!(!queries::by_genre(&catalog, options.genre).is_empty());

        let (genre, developer) = options.genre_and_developer;
        let titles: Vec<&str> = queries::by_genre_and_developer(&catalog, genre, developer)
            .iter()
            .map(|g| g.title.as_str())
            .collect();
        assert_eq!(
            titles,
            vec!["Final Fantasy XV", "Kingdom Hearts III", "Final Fantasy XVI"]
        );

        assert!(!queries::by_platform(&catalog, options.platform).is_empty());
        assert_eq!(
            queries::by_release_year(&catalog, options.release_year).len(),
            3
        );

        let (before, after) = options.before_or_after;
        let years: Vec<i32> = queries::released_before_or_after(&catalog, before, after)
            .iter()
            .map(|g| g.release_year())
            .collect();
        assert!(years.iter().all(|&y| y < 2000 || y >= 2018));
        assert!(years.contains(&1997) && years.contains(&2023));
    }
}
