use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::CliError;

pub(crate) const DATA_ENV_VAR: &str = "GAMEDEX_DATA";
pub(crate) const DEFAULT_DATA_PATH: &str = "data/videogames.json";
pub(crate) const DEFAULT_AWARD_LABEL: &str = "The Game Awards";
pub(crate) const DEFAULT_NOMINATION_LIMIT: usize = 5;

/// TOML config file format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Config {
    /// Games file or directory of games files.
    pub data: Option<PathBuf>,
    /// Award label used by the report's per-award ranking.
    pub award_label: Option<String>,
    /// Slot count for the most-nominated ranking.
    pub nomination_limit: Option<usize>,
    /// Default log level (error, warn, info, debug, trace).
    pub log_level: Option<String>,
}

/// Where a setting's value came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Source {
    /// Given on the command line.
    Flag,
    /// Loaded from an environment variable.
    EnvVar(&'static str),
    /// Loaded from the config file.
    ConfigFile,
    /// Built-in default.
    Default,
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flag => write!(f, "command line"),
            Self::EnvVar(var) => write!(f, "env ${}", var),
            Self::ConfigFile => write!(f, "config file"),
            Self::Default => write!(f, "default"),
        }
    }
}

/// Return the path to the config file.
pub(crate) fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("gamedex").join("config.toml"))
}

impl Config {
    /// Load the config file from its standard location.
    ///
    /// A missing file (or an undeterminable config directory) yields defaults.
    pub(crate) fn load() -> Result<Self, CliError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub(crate) fn load_from(path: &Path) -> Result<Self, CliError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)
            .map_err(|e| CliError::config(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// Write this config to `path`, creating parent directories as needed.
    pub(crate) fn save_to(&self, path: &Path) -> Result<(), CliError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)
            .map_err(|e| CliError::config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, toml_str)?;
        Ok(())
    }

    /// Resolve the games data path.
    ///
    /// Priority: command line > env var > config file > default.
    pub(crate) fn resolve_data_path(
        &self,
        flag: Option<&Path>,
        env_value: Option<String>,
    ) -> (PathBuf, Source) {
        if let Some(path) = flag {
            return (path.to_path_buf(), Source::Flag);
        }
        if let Some(value) = env_value.filter(|v| !v.is_empty()) {
            return (PathBuf::from(value), Source::EnvVar(DATA_ENV_VAR));
        }
        if let Some(path) = &self.data {
            return (path.clone(), Source::ConfigFile);
        }
        (PathBuf::from(DEFAULT_DATA_PATH), Source::Default)
    }

    pub(crate) fn award_label(&self) -> (&str, Source) {
        match &self.award_label {
            Some(label) => (label, Source::ConfigFile),
            None => (DEFAULT_AWARD_LABEL, Source::Default),
        }
    }

    pub(crate) fn nomination_limit(&self) -> (usize, Source) {
        match self.nomination_limit {
            Some(limit) => (limit, Source::ConfigFile),
            None => (DEFAULT_NOMINATION_LIMIT, Source::Default),
        }
    }

    /// Configured log level, if it names a valid level.
    pub(crate) fn log_level(&self) -> Option<log::LevelFilter> {
        self.log_level.as_deref().and_then(|l| l.parse().ok())
    }
}

/// Data path resolved from the process environment.
pub(crate) fn data_path(config: &Config, flag: Option<&Path>) -> (PathBuf, Source) {
    config.resolve_data_path(flag, std::env::var(DATA_ENV_VAR).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = Config::load_from(&tmp.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.award_label(), (DEFAULT_AWARD_LABEL, Source::Default));
        assert_eq!(
            config.nomination_limit(),
            (DEFAULT_NOMINATION_LIMIT, Source::Default)
        );
    }

    #[test]
    fn parses_partial_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "award_label = \"BAFTA Games Awards\"\nlog_level = \"debug\"\n")
            .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.award_label(), ("BAFTA Games Awards", Source::ConfigFile));
        assert_eq!(config.log_level(), Some(log::LevelFilter::Debug));
        assert!(config.data.is_none());
    }

    #[test]
    fn invalid_toml_is_config_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "nomination_limit = \"five\"").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn save_then_load() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nested").join("config.toml");
        let config = Config {
            data: Some(PathBuf::from("/srv/games.yaml")),
            award_label: None,
            nomination_limit: Some(3),
            log_level: Some("warn".to_string()),
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn data_path_priority() {
        let config = Config {
            data: Some(PathBuf::from("from-config.json")),
            ..Config::default()
        };

        let (path, source) =
            config.resolve_data_path(Some(Path::new("flag.json")), Some("env.json".into()));
        assert_eq!((path, source), (PathBuf::from("flag.json"), Source::Flag));

        let (path, source) = config.resolve_data_path(None, Some("env.json".into()));
        assert_eq!(
            (path, source),
            (PathBuf::from("env.json"), Source::EnvVar(DATA_ENV_VAR))
        );

        let (path, source) = config.resolve_data_path(None, Some(String::new()));
        assert_eq!(
            (path, source),
            (PathBuf::from("from-config.json"), Source::ConfigFile)
        );

        let (path, source) = Config::default().resolve_data_path(None, None);
        assert_eq!((path, source), (PathBuf::from(DEFAULT_DATA_PATH), Source::Default));
    }

    #[test]
    fn unknown_log_level_is_ignored() {
        let config = Config {
            log_level: Some("chatty".to_string()),
            ..Config::default()
        };
        assert_eq!(config.log_level(), None);
    }
}
