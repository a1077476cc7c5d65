use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub games: u64,
    pub announce_repeats: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub games: ValueSource,
    pub announce_repeats: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            games: ValueSource::Default,
            announce_repeats: ValueSource::Default,
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
            seed: None,
            games: 1,
            announce_repeats: false,
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
        write!(f, "{:?}", self)
    }
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("BINGO_CONFIG") {
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.games {
            cfg.games = v;
            sources.games = ValueSource::File;
        }
        if let Some(v) = f.announce_repeats {
            cfg.announce_repeats = v;
            sources.announce_repeats = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("BINGO_SEED") {
        if !seed.is_empty() {
            let parsed: u64 = seed
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("BINGO_SEED must be a u64: {}", seed)))?;
            cfg.seed = Some(parsed);
            sources.seed = ValueSource::Env;
        }
    }

    if cfg.games == 0 {
        return Err(ConfigError::Invalid("games must be >= 1".to_string()));
    }

    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    seed: Option<u64>,
    games: Option<u64>,
    announce_repeats: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = Config::default();
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.games, 1);
        assert!(!cfg.announce_repeats);
    }

    #[test]
    fn test_file_config_parses_partial_toml() {
        let f: FileConfig = toml::from_str("games = 10\n").unwrap();
        assert_eq!(f.games, Some(10));
        assert_eq!(f.seed, None);
        assert_eq!(f.announce_repeats, None);
    }

    #[test]
    fn test_file_config_parses_all_fields() {
        let f: FileConfig = toml::from_str("seed = 42\ngames = 3\nannounce_repeats = true\n").unwrap();
        assert_eq!(f.seed, Some(42));
        assert_eq!(f.games, Some(3));
        assert_eq!(f.announce_repeats, Some(true));
    }
}
