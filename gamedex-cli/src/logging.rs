use std::io::Write;

use log::{Level, LevelFilter};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

/// Install the stdout logger that carries all user-facing output.
///
/// `info` lines print the bare message. Level precedence, lowest first:
/// the configured level (default `info`), `RUST_LOG`, then `-v`/`-q`.
pub(crate) fn init_logging(
    configured: Option<LevelFilter>,
    flag: Option<LevelFilter>,
) -> Result<(), CliError> {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(configured.unwrap_or(LevelFilter::Info))
        .parse_default_env();
    if let Some(level) = flag {
        builder.filter_level(level);
    }

    builder
        .target(env_logger::Target::Stdout)
        .format(|buf, record| match record.level() {
            Level::Info => writeln!(buf, "{}", record.args()),
            Level::Warn => writeln!(
                buf,
                "{} {}",
                "warning:".if_supports_color(Stdout, |t| t.yellow()),
                record.args()
            ),
            Level::Error => writeln!(
                buf,
                "{} {}",
                "error:".if_supports_color(Stdout, |t| t.red()),
                record.args()
            ),
            level => writeln!(
                buf,
                "{}",
                format!("[{} {}] {}", level, record.target(), record.args())
                    .if_supports_color(Stdout, |t| t.dimmed())
            ),
        })
        .try_init()
        .map_err(|e| CliError::logger(e.to_string()))
}

/// Level implied by the verbosity flags, if any were given.
pub(crate) fn flag_level(verbose: u8, quiet: bool) -> Option<LevelFilter> {
    if quiet {
        return Some(LevelFilter::Warn);
    }
    match verbose {
        0 => None,
        1 => Some(LevelFilter::Debug),
        _ => Some(LevelFilter::Trace),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_wins_over_verbose() {
        assert_eq!(flag_level(2, true), Some(LevelFilter::Warn));
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(flag_level(0, false), None);
        assert_eq!(flag_level(1, false), Some(LevelFilter::Debug));
        assert_eq!(flag_level(3, false), Some(LevelFilter::Trace));
    }
}
