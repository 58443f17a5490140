//! Text formatting for query results.

use std::fmt::Display;

use chrono::TimeDelta;
use gamedex_core::VideoGame;

/// Upper-case the first character.
pub(crate) fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Capitalize each item and join with `" | "`.
pub(crate) fn pretty_join<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    items
        .into_iter()
        .map(|item| capitalize(&item.to_string()))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// `"Value [detail]"`.
pub(crate) fn pretty_pair(value: impl Display, detail: impl Display) -> String {
    format!("{} [{}]", value, detail)
}

/// `HH:MM:SS`; hours are not wrapped at 24.
pub(crate) fn format_duration_hms(duration: TimeDelta) -> String {
    let total = duration.num_seconds();
    let sign = if total < 0 { "-" } else { "" };
    let secs = total.unsigned_abs();
    format!(
        "{}{:02}:{:02}:{:02}",
        sign,
        secs / 3600,
        secs / 60 % 60,
        secs % 60
    )
}

/// One-line description of a game.
pub(crate) fn game_summary(game: &VideoGame) -> String {
    let genres = game
        .genres
        .iter()
        .map(|g| g.to_string())
        .collect::<Vec<_>>()
        .join(", ");
    let platforms = game.platforms.iter().cloned().collect::<Vec<_>>().join(", ");
    format!(
        "{} ({}) by {} | {} | {} | {} hrs | {} | {} nomination(s), {} win(s)",
        game.title,
        game.release_year(),
        game.developer,
        if genres.is_empty() { "-" } else { genres.as_str() },
        if platforms.is_empty() { "-" } else { platforms.as_str() },
        game.estimated_hours,
        if game.multiplayer {
            "multiplayer"
        } else {
            "single-player"
        },
        game.nomination_count(),
        game.win_count(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use gamedex_core::Genre;

    #[test]
    fn capitalize_first_char_only() {
        assert_eq!(capitalize("nier: automata"), "Nier: automata");
        assert_eq!(capitalize("élan"), "Élan");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn pretty_join_separator() {
        assert_eq!(pretty_join(["halo 2", "Celeste"]), "Halo 2 | Celeste");
        assert_eq!(pretty_join(Vec::<String>::new()), "");
    }

    #[test]
    fn pretty_pair_format() {
        assert_eq!(pretty_pair("Celeste", 2018), "Celeste [2018]");
    }

    #[test]
    fn duration_hms() {
        let d = TimeDelta::hours(26) + TimeDelta::minutes(30) + TimeDelta::seconds(5);
        assert_eq!(format_duration_hms(d), "26:30:05");
        assert_eq!(format_duration_hms(TimeDelta::zero()), "00:00:00");
        assert_eq!(format_duration_hms(TimeDelta::minutes(-90)), "-01:30:00");
    }

    #[test]
    fn summary_line() {
        let game = VideoGame::new(
            "Celeste",
            "Maddy Makes Games",
            NaiveDate::from_ymd_opt(2018, 1, 25).unwrap(),
            9,
        )
        .with_genre(Genre::Platformer)
        .with_platform("PC")
        .with_platform("Nintendo Switch")
        .with_nomination("The Game Awards", true);
        assert_eq!(
            game_summary(&game),
            "Celeste (2018) by Maddy Makes Games | Platformer | Nintendo Switch, PC | 9 hrs | single-player | 1 nomination(s), 1 win(s)"
        );
    }
}
