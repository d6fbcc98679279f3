use mindshift_engine::state::Difficulty;
use serde::{Deserialize, Serialize};
use std::fs;

/// Longest accepted pause before the bot moves.
pub const MAX_BOT_DELAY_MS: u64 = 10_000;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub difficulty: Difficulty,
    pub seed: Option<String>,
    /// Pause before each bot move in interactive play
    pub bot_delay_ms: u64,
    /// JSONL file finished games are appended to
    pub records: Option<String>,
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
    pub difficulty: ValueSource,
    pub seed: ValueSource,
    pub bot_delay_ms: ValueSource,
    pub records: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            difficulty: ValueSource::Default,
            seed: ValueSource::Default,
            bot_delay_ms: ValueSource::Default,
            records: ValueSource::Default,
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
            difficulty: Difficulty::Medium,
            seed: None,
            bot_delay_ms: 900,
            records: None,
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
            ConfigError::Invalid(msg) => f.write_str(msg),
        }
    }
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

/// Defaults, then the TOML file named by `MINDSHIFT_CONFIG`, then the
/// `MINDSHIFT_*` environment variables.
pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("MINDSHIFT_CONFIG")
        && !path.is_empty()
    {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.difficulty {
            cfg.difficulty = v.parse().map_err(ConfigError::Invalid)?;
            sources.difficulty = ValueSource::File;
        }
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.bot_delay_ms {
            cfg.bot_delay_ms = v;
            sources.bot_delay_ms = ValueSource::File;
        }
        if let Some(v) = f.records {
            cfg.records = Some(v);
            sources.records = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("MINDSHIFT_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(seed);
        sources.seed = ValueSource::Env;
    }
    if let Ok(difficulty) = std::env::var("MINDSHIFT_DIFFICULTY")
        && !difficulty.is_empty()
    {
        cfg.difficulty = difficulty.parse().map_err(ConfigError::Invalid)?;
        sources.difficulty = ValueSource::Env;
    }
    if let Ok(delay) = std::env::var("MINDSHIFT_BOT_DELAY_MS")
        && !delay.is_empty()
    {
        cfg.bot_delay_ms = delay
            .parse()
            .map_err(|_| ConfigError::Invalid("Invalid bot_delay_ms".into()))?;
        sources.bot_delay_ms = ValueSource::Env;
    }
    if let Ok(records) = std::env::var("MINDSHIFT_RECORDS")
        && !records.is_empty()
    {
        cfg.records = Some(records);
        sources.records = ValueSource::Env;
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
    difficulty: Option<String>,
    #[serde(default)]
    seed: Option<String>,
    #[serde(default)]
    bot_delay_ms: Option<u64>,
    #[serde(default)]
    records: Option<String>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.bot_delay_ms > MAX_BOT_DELAY_MS {
        return Err(ConfigError::Invalid(format!(
            "Invalid configuration: bot_delay_ms must be <= {}",
            MAX_BOT_DELAY_MS
        )));
    }
    Ok(())
}
