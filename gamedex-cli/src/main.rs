//! gamedex CLI
//!
//! Command-line interface for asking questions about a video game catalog.

mod commands;
mod config;
mod error;
mod format;
mod logging;

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

use gamedex_core::{Catalog, Genre};

use crate::commands::report::ReportOptions;
use crate::commands::{awards, lookup, report, stats};
use crate::config::Config;
pub(crate) use crate::error::CliError;

#[derive(Parser)]
#[command(name = "gamedex")]
#[command(about = "Answer questions about a video game catalog", long_about = None)]
struct Cli {
    /// Games file (.json/.yaml) or directory of games files
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    /// More output (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Only print warnings and errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask every question about the catalog in turn (the default)
    Report(ReportArgs),

    /// List every game in the catalog
    List,

    /// Show the game with this title (case-insensitive)
    Title { title: String },

    /// Games by a developer (case-insensitive)
    Developer { developer: String },

    /// Games of a genre (e.g., rpg, hack-and-slash, ROLE_PLAYING)
    Genre {
        genre: Genre,

        /// Only games by this developer
        #[arg(long)]
        developer: Option<String>,
    },

    /// List known genres and their aliases
    Genres,

    /// Games available on a platform (exact, case-sensitive)
    Platform { platform: String },

    /// Games released in a year
    Year { year: i32 },

    /// Games released before a year
    Before { year: i32 },

    /// Games released before BEFORE or in/after AFTER
    BeforeOrAfter { before: i32, after: i32 },

    /// Multiplayer games
    Multiplayer,

    /// The genre carried by the most games
    FavouriteGenre,

    /// Platforms with the fewest games
    RarePlatforms,

    /// Average estimated playing time
    AverageTime,

    /// The game with the fewest estimated hours
    Shortest,

    /// The game with the most award wins
    MostAwarded {
        /// Only count wins of this award (case-insensitive)
        #[arg(long)]
        label: Option<String>,
    },

    /// The oldest multiplayer game that won an award
    OldestMultiplayerWinner,

    /// Games with the most nominations
    MostNominated {
        /// Number of ranking slots; ties can surface more games
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Manage the gamedex config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Args, Default)]
struct ReportArgs {
    /// Title to look up
    #[arg(long)]
    title: Option<String>,

    /// Genre to list
    #[arg(long)]
    genre: Option<Genre>,

    /// Genre for the genre-and-developer listing
    #[arg(long)]
    developer_genre: Option<Genre>,

    /// Developer for the genre-and-developer listing
    #[arg(long)]
    developer: Option<String>,

    /// Platform to list
    #[arg(long)]
    platform: Option<String>,

    /// Release year to list
    #[arg(long)]
    year: Option<i32>,

    /// Lower bound for the before-or-after listing
    #[arg(long)]
    before: Option<i32>,

    /// Upper bound for the before-or-after listing
    #[arg(long)]
    after: Option<i32>,

    /// Award label for the per-award ranking
    #[arg(long)]
    label: Option<String>,

    /// Slot count for the most-nominated ranking
    #[arg(long)]
    limit: Option<usize>,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show effective settings and their sources
    Show,

    /// Print the config file path
    Path,

    /// Write a config file with the current settings
    Init,
}

fn main() {
    let cli = Cli::parse();

    let (config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    if let Err(e) = logging::init_logging(
        config.log_level(),
        logging::flag_level(cli.verbose, cli.quiet),
    ) {
        eprintln!("{}", e);
    }
    if let Some(e) = config_error {
        log::warn!("Ignoring config file: {}", e);
    }

    if let Err(e) = run(cli, &config) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli, config: &Config) -> Result<(), CliError> {
    let command = cli
        .command
        .unwrap_or_else(|| Commands::Report(ReportArgs::default()));

    let catalog = || load_catalog(config, cli.data.clone());

    match command {
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(config, cli.data.as_deref()),
            ConfigAction::Path => commands::config::run_config_path()?,
            ConfigAction::Init => commands::config::run_config_init(config)?,
        },
        Commands::Report(args) => {
            let options = report_options(&args, config);
            report::run_report(&catalog()?, &options);
        }
        Commands::List => lookup::run_list(&catalog()?),
        Commands::Title { title } => lookup::run_title(&catalog()?, &title),
        Commands::Developer { developer } => lookup::run_developer(&catalog()?, &developer),
        Commands::Genre { genre, developer } => {
            lookup::run_genre(&catalog()?, genre, developer.as_deref())
        }
        Commands::Genres => lookup::run_genres(),
        Commands::Platform { platform } => lookup::run_platform(&catalog()?, &platform),
        Commands::Year { year } => lookup::run_year(&catalog()?, year),
        Commands::Before { year } => lookup::run_before(&catalog()?, year),
        Commands::BeforeOrAfter { before, after } => {
            lookup::run_before_or_after(&catalog()?, before, after)
        }
        Commands::Multiplayer => lookup::run_multiplayer(&catalog()?),
        Commands::FavouriteGenre => stats::run_favourite_genre(&catalog()?),
        Commands::RarePlatforms => stats::run_rare_platforms(&catalog()?),
        Commands::AverageTime => stats::run_average_time(&catalog()?),
        Commands::Shortest => stats::run_shortest(&catalog()?),
        Commands::MostAwarded { label } => {
            awards::run_most_awarded(&catalog()?, label.as_deref())
        }
        Commands::OldestMultiplayerWinner => {
            awards::run_oldest_multiplayer_winner(&catalog()?)
        }
        Commands::MostNominated { limit } => awards::run_most_nominated(
            &catalog()?,
            limit.unwrap_or(config.nomination_limit().0),
        ),
    }

    Ok(())
}

/// Report questions: flags first, then config, then the built-in samples.
fn report_options<'a>(args: &'a ReportArgs, config: &'a Config) -> ReportOptions<'a> {
    let mut options = ReportOptions::new(
        args.label.as_deref().unwrap_or(config.award_label().0),
        args.limit.unwrap_or(config.nomination_limit().0),
    );
    if let Some(title) = &args.title {
        options.title = title;
    }
    if let Some(genre) = args.genre {
        options.genre = genre;
    }
    if let Some(genre) = args.developer_genre {
        options.genre_and_developer.0 = genre;
    }
    if let Some(developer) = &args.developer {
        options.genre_and_developer.1 = developer;
    }
    if let Some(platform) = &args.platform {
        options.platform = platform;
    }
    if let Some(year) = args.year {
        options.release_year = year;
    }
    if let Some(before) = args.before {
        options.before_or_after.0 = before;
    }
    if let Some(after) = args.after {
        options.before_or_after.1 = after;
    }
    options
}

/// Resolve the data path and load the catalog from it.
fn load_catalog(config: &Config, data_flag: Option<PathBuf>) -> Result<Catalog, CliError> {
    let (path, source) = config::data_path(config, data_flag.as_deref());
    log::debug!("Loading games from {} ({})", path.display(), source);
    let catalog = gamedex_loader::load_catalog(&path)?;
    log::debug!("Catalog holds {} game(s)", catalog.len());
    Ok(catalog)
}

/// Emit an empty info line.
pub(crate) fn log_blank() {
    log::info!("");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_args(argv: &[&str]) -> ReportArgs {
        let cli = Cli::try_parse_from(argv.iter().copied()).unwrap();
        match cli.command {
            Some(Commands::Report(args)) => args,
            _ => panic!("expected the report command"),
        }
    }

    #[test]
    fn no_subcommand_means_report() {
        let cli = Cli::try_parse_from(["gamedex"]).unwrap();
        assert!(cli.command.is_none());

        let args = ReportArgs::default();
        let config = Config::default();
        let options = report_options(&args, &config);
        assert_eq!(options.title, report::DEFAULT_TITLE);
        assert_eq!(options.genre, report::DEFAULT_GENRE);
        assert_eq!(options.before_or_after, report::DEFAULT_BEFORE_OR_AFTER);
        assert_eq!(options.award_label, config.award_label().0);
        assert_eq!(options.nomination_limit, config.nomination_limit().0);
    }

    #[test]
    fn report_flags_override_samples_and_config() {
        let args = report_args(&[
            "gamedex", "report", "--title", "Celeste", "--genre", "rpg", "--developer",
            "Capcom", "--year", "2001", "--after", "2020", "--label", "BAFTA", "--limit", "2",
        ]);
        let config = Config {
            award_label: Some("Golden Joystick Awards".to_string()),
            nomination_limit: Some(9),
            ..Config::default()
        };

        let options = report_options(&args, &config);
        assert_eq!(options.title, "Celeste");
        assert_eq!(options.genre, Genre::RolePlaying);
        assert_eq!(options.genre_and_developer, (Genre::RolePlaying, "Capcom"));
        assert_eq!(options.release_year, 2001);
        assert_eq!(options.before_or_after, (2000, 2020));
        assert_eq!(options.award_label, "BAFTA");
        assert_eq!(options.nomination_limit, 2);
    }

    #[test]
    fn report_falls_back_to_config() {
        let args = ReportArgs::default();
        let config = Config {
            award_label: Some("Golden Joystick Awards".to_string()),
            nomination_limit: Some(9),
            ..Config::default()
        };

        let options = report_options(&args, &config);
        assert_eq!(options.award_label, "Golden Joystick Awards");
        assert_eq!(options.nomination_limit, 9);
    }

    #[test]
    fn config_actions_parse() {
        for action in ["show", "path", "init"] {
            let cli = Cli::try_parse_from(["gamedex", "config", action]).unwrap();
            assert!(matches!(cli.command, Some(Commands::Config { .. })));
        }
    }
}
