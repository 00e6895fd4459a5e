use std::path::PathBuf;
use std::str::FromStr;

use super::{Config, ConfigChanges};

use log::LevelFilter;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct TomlConfig {
    database: Option<DatabaseConfig>,
    console: Option<ConsoleConfig>,
    #[serde(rename(deserialize = "log"))]
    log_opts: Option<LogOpts>,
}

impl FromStr for TomlConfig {
    type Err = toml::de::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config = toml::from_str(s)?;
        Ok(config)
    }
}

impl ConfigChanges for TomlConfig {
    fn apply(&self, config: &mut Config) {
        if let Some(database) = &self.database {
            if let Some(path) = &database.path {
                config.database = path.clone();
            }
        }
        if let Some(console) = &self.console {
            if let Some(repeat) = console.repeat {
                config.repeat = repeat;
            }
        }
        if let Some(log_opts) = &self.log_opts {
            if let Some(file_log_opts) = &log_opts.file_log_opts {
                config.log.file = Some(super::FileLogOpts {
                    file_path: file_log_opts.path.clone(),
                    level: file_log_opts.level.into(),
                });
            }
            if let Some(console_log_opts) = &log_opts.console_log_opts {
                config.log.console.level = console_log_opts.level.into();
            }
        }
    }
}

#[derive(Deserialize)]
struct DatabaseConfig {
    path: Option<PathBuf>,
}

#[derive(Deserialize)]
struct ConsoleConfig {
    repeat: Option<bool>,
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq)]
#[serde(rename_all = "lowercase")]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Deserialize)]
struct FileLogOpts {
    path: PathBuf,
    level: LogLevel,
}

#[derive(Deserialize)]
struct ConsoleLogOpts {
    level: LogLevel,
}

#[derive(Deserialize)]
struct LogOpts {
    #[serde(rename(deserialize = "file"))]
    file_log_opts: Option<FileLogOpts>,
    #[serde(rename(deserialize = "console"))]
    console_log_opts: Option<ConsoleLogOpts>,
}
