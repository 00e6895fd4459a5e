use crate::config::{CliConfig, Config, TomlConfig};
use crate::logger;
use registration::{Console, StoreError, UserStore};

use clap::Parser;
use user_error::UserFacingError;

use std::fs::read_to_string;
use std::io;
use std::io::ErrorKind;
use std::str::FromStr;

static DEFAULT_CONFIG_PATHS: &[&str] = &["registration.toml"];

pub struct App {}

impl App {
    pub fn run() -> Result<(), UserFacingError> {
        let mut config = Config::default();

        let cli_config = CliConfig::parse();

        let toml_config = if let Some(toml_path) = &cli_config.config_file {
            let toml_input = Self::fallible_config_read(toml_path)?;
            Some((toml_path.to_string(), toml_input))
        } else {
            Self::read_default_config()
        };

        if let Some((toml_path, toml_input)) = toml_config {
            let toml_config = Self::decode_toml(&toml_path, &toml_input)?;
            config.merge(&toml_config);
        }

        config.merge(&cli_config);

        logger::init(&config.log)?;

        let store = Self::open_store(&config)?;
        Self::run_console(&store, config.repeat)
    }

    fn open_store(config: &Config) -> Result<UserStore, UserFacingError> {
        let store = UserStore::new(config.database.clone());
        if let Err(err) = store.create_db() {
            let error = UserFacingError::new(format!(
                "Failed to prepare database {}",
                store.path().display()
            ));
            let error = match &err {
                StoreError::Open { .. } => error
                    .reason("The database file could not be opened or created")
                    .help("Check that the directory exists and is writable or pass another path with --database"),
                _ => error
                    .reason("The users table could not be created")
                    .help(format!("Action returned with error {}", err)),
            };
            return Err(error);
        }
        log::debug!("Using database {}", store.path().display());
        Ok(store)
    }

    fn run_console(store: &UserStore, repeat: bool) -> Result<(), UserFacingError> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut console = Console::new(store, stdin.lock(), stdout.lock());
        let result = if repeat {
            console.run()
        } else {
            console.run_once()
        };
        result.map_err(|err| {
            log::error!("Console session failed: {:#}", err);
            UserFacingError::new("Could not complete the requested action")
                .reason(format!("{:#}", err))
        })
    }

    fn fallible_config_read(path: &str) -> Result<String, UserFacingError> {
        match read_to_string(path) {
            Ok(config) => Ok(config),
            Err(err) => {
                let error = UserFacingError::new(format!("Could not read {} config file", path));
                let error = match err.kind() {
                    ErrorKind::NotFound => error.reason("File not found"),
                    ErrorKind::PermissionDenied => {
                        error.reason("Insufficient permissions to open the file")
                    }
                    ErrorKind::InvalidData => error.reason("Config file is probably invalid UTF-8"),
                    _ => error.reason("It is due to unexpected reasons"),
                };
                Err(error.help(err.to_string()))
            }
        }
    }

    fn read_default_config() -> Option<(String, String)> {
        for path in DEFAULT_CONFIG_PATHS {
            if let Ok(config) = read_to_string(path) {
                return Some((path.to_string(), config));
            }
        }
        None
    }

    fn decode_toml(toml_path: &str, toml_input: &str) -> Result<TomlConfig, UserFacingError> {
        TomlConfig::from_str(toml_input).map_err(|err| {
            let error = UserFacingError::new(format!("Unable to decode {} file", toml_path))
                .reason("Could not deserialize toml input");
            let error = match err.line_col() {
                None => error,
                Some((line, col)) => {
                    error.help(format!("The problem is on line {} column {}", line + 1, col + 1))
                }
            };
            error.help(err.to_string())
        })
    }
}
