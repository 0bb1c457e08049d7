use std::fs;
use std::path::PathBuf;

use log::warn;
use serde::Deserialize;

const CONFIG_FILE_NAME: &str = ".fintrack.toml";

#[derive(Deserialize, Debug, Default)]
pub(crate) struct Config {
    /// Default ledger file path, overridden by the CLI argument.
    pub(crate) ledger_file: Option<String>,
}

impl Config {
    pub(crate) fn empty() -> Config {
        Config { ledger_file: None }
    }

    /// Load `.fintrack.toml` from the home directory if it exists.
    pub(crate) fn load() -> Config {
        match dirs::home_dir() {
            Some(home) => Config::load_from_file(home.join(CONFIG_FILE_NAME)),
            None => Config::empty(),
        }
    }

    pub(crate) fn load_from_file(path: PathBuf) -> Config {
        if path.exists() && path.is_file() {
            let contents = match fs::read_to_string(&path) {
                Ok(contents) => contents,
                Err(e) => {
                    warn!("Ignoring unreadable config {}: {e}", path.display());
                    return Config::empty();
                }
            };

            match toml::from_str::<Config>(&contents) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Ignoring invalid config {}: {e}", path.display());
                    Config::empty()
                }
            }
        } else {
            Config::empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_load_missing_file_returns_empty() {
        let dir = tempdir().unwrap();
        let config = Config::load_from_file(dir.path().join("absent.toml"));
        assert!(config.ledger_file.is_none());
    }

    #[test]
    fn test_load_from_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("fintrack.toml");
        std::fs::write(&path, "ledger_file = '/home/user/ledger.dat'\n").unwrap();

        let config = Config::load_from_file(path);
        assert_eq!(config.ledger_file.as_deref(), Some("/home/user/ledger.dat"));
    }
}
