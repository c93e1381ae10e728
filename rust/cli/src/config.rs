use serde::{Deserialize, Serialize};
use std::fs;

use railbuild_engine::settings::EngineSettings;

pub const CONFIG_ENV: &str = "RAILBUILD_CONFIG";
pub const LEGACY_GAMES_ENV: &str = "RAILBUILD_LEGACY_GAMES";
pub const LOG_ENV: &str = "RAILBUILD_LOG";
pub const JOURNAL_ENV: &str = "RAILBUILD_JOURNAL";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Games whose builds skip the board's post-build checks
    pub legacy_games: Vec<String>,
    /// `tracing` filter directive for the stderr log
    pub log_filter: String,
    /// JSONL file that receives one record per `apply`
    pub journal: Option<String>,
}

impl Config {
    pub fn engine_settings(&self) -> EngineSettings {
        EngineSettings::with_legacy_games(self.legacy_games.iter().cloned())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub legacy_games: ValueSource,
    pub log_filter: ValueSource,
    pub journal: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            legacy_games: ValueSource::Default,
            log_filter: ValueSource::Default,
            journal: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            legacy_games: Vec::new(),
            log_filter: "warn".into(),
            journal: None,
        }
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "cannot read config file: {}", e),
            ConfigError::Parse(e) => write!(f, "cannot parse config file: {}", e),
            ConfigError::Invalid(msg) => write!(f, "{}", msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV)
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.legacy_games {
            cfg.legacy_games = v;
            sources.legacy_games = ValueSource::File;
        }
        if let Some(v) = f.log_filter {
            cfg.log_filter = v;
            sources.log_filter = ValueSource::File;
        }
        if let Some(v) = f.journal {
            cfg.journal = Some(v);
            sources.journal = ValueSource::File;
        }
    }

    if let Ok(games) = std::env::var(LEGACY_GAMES_ENV)
        && !games.is_empty()
    {
        cfg.legacy_games = split_list(&games);
        sources.legacy_games = ValueSource::Env;
    }
    if let Ok(filter) = std::env::var(LOG_ENV)
        && !filter.is_empty()
    {
        cfg.log_filter = filter;
        sources.log_filter = ValueSource::Env;
    }
    if let Ok(journal) = std::env::var(JOURNAL_ENV)
        && !journal.is_empty()
    {
        cfg.journal = Some(journal);
        sources.journal = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    legacy_games: Option<Vec<String>>,
    #[serde(default)]
    log_filter: Option<String>,
    #[serde(default)]
    journal: Option<String>,
}

fn split_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(String::from)
        .collect()
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.legacy_games.iter().any(|id| id.trim().is_empty()) {
        return Err(ConfigError::Invalid(
            "Invalid configuration: legacy_games may not contain empty ids".into(),
        ));
    }
    if let Err(e) = tracing_subscriber::EnvFilter::try_new(&cfg.log_filter) {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: log_filter '{}': {}",
            cfg.log_filter, e
        )));
    }
    if cfg.journal.as_deref().is_some_and(|p| p.trim().is_empty()) {
        return Err(ConfigError::Invalid(
            "Invalid configuration: journal path is empty".into(),
        ));
    }
    Ok(())
}
