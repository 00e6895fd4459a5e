use std::default::Default;
use std::path::PathBuf;

use log::LevelFilter;

pub struct Config {
    pub database: PathBuf,
    pub repeat: bool,
    pub log: LogOpts,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database: PathBuf::from("users.db"),
            repeat: false,
            log: LogOpts::default(),
        }
    }
}

impl Config {
    pub fn merge<C: ?Sized>(&mut self, changes: &C)
    where
        C: ConfigChanges,
    {
        changes.apply(self)
    }
}

pub trait ConfigChanges {
    fn apply(&self, config: &mut Config);
}

#[derive(Default)]
pub struct LogOpts {
    pub file: Option<FileLogOpts>,
    pub console: ConsoleLogOpts,
}

pub struct FileLogOpts {
    pub file_path: PathBuf,
    pub level: LevelFilter,
}

pub struct ConsoleLogOpts {
    pub level: LevelFilter,
}

// Anything chattier would interleave with the menu on the terminal.
impl Default for ConsoleLogOpts {
    fn default() -> Self {
        ConsoleLogOpts {
            level: LevelFilter::Warn,
        }
    }
}
