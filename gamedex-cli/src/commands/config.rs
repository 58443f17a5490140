use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;
use crate::config::{Config, config_path, data_path};

/// Show effective settings and where each one came from.
pub(crate) fn run_config_show(config: &Config, data_flag: Option<&Path>) {
    log::info!(
        "{}",
        "gamedex Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    match config_path() {
        Some(p) if p.exists() => {
            log::info!(
                "  Config file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(exists)".if_supports_color(Stdout, |t| t.green()),
            );
        }
        Some(p) => {
            log::info!(
                "  Config file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
        None => {
            log::info!(
                "  Config file: {}",
                "could not determine path".if_supports_color(Stdout, |t| t.red()),
            );
        }
    }
    crate::log_blank();

    let (data, data_source) = data_path(config, data_flag);
    let (label, label_source) = config.award_label();
    let (limit, limit_source) = config.nomination_limit();

    log::info!(
        "  {:<18} {} {}",
        "Data:",
        data.display(),
        format!("({})", data_source).if_supports_color(Stdout, |t| t.dimmed()),
    );
    log::info!(
        "  {:<18} {} {}",
        "Award label:",
        label,
        format!("({})", label_source).if_supports_color(Stdout, |t| t.dimmed()),
    );
    log::info!(
        "  {:<18} {} {}",
        "Nomination limit:",
        limit,
        format!("({})", limit_source).if_supports_color(Stdout, |t| t.dimmed()),
    );
    log::info!(
        "  {:<18} {}",
        "Log level:",
        config.log_level.as_deref().unwrap_or("info"),
    );
}

/// Print the config file path.
pub(crate) fn run_config_path() -> Result<(), CliError> {
    let path =
        config_path().ok_or_else(|| CliError::config("Could not determine config directory"))?;
    log::info!("{}", path.display());
    Ok(())
}

/// Write the current settings to the config file unless one already exists.
pub(crate) fn run_config_init(config: &Config) -> Result<(), CliError> {
    let path =
        config_path().ok_or_else(|| CliError::config("Could not determine config directory"))?;
    if path.exists() {
        log::warn!("Config file already exists at {}", path.display());
        return Ok(());
    }

    let (label, _) = config.award_label();
    let (limit, _) = config.nomination_limit();
    let written = Config {
        award_label: Some(label.to_string()),
        nomination_limit: Some(limit),
        ..config.clone()
    };
    written.save_to(&path)?;
    log::info!(
        "{} {}",
        "Wrote".if_supports_color(Stdout, |t| t.green()),
        path.display(),
    );
    Ok(())
}
