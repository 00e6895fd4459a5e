use std::path::PathBuf;

use clap::Parser;

use super::{Config, ConfigChanges};

#[derive(Parser)]
#[clap(version, author, about = "Register users and check their credentials")]
pub struct CliConfig {
    /// Sets the path to toml configuration file
    #[clap(name = "config", short, long)]
    pub config_file: Option<String>,

    /// Sets the database file users are stored in
    #[clap(short, long)]
    pub database: Option<PathBuf>,
    /// Keeps showing the menu until input ends
    #[clap(short, long)]
    pub repeat: bool,
}

impl ConfigChanges for CliConfig {
    fn apply(&self, config: &mut Config) {
        if let Some(database) = &self.database {
            config.database = database.clone();
        }
        if self.repeat {
            config.repeat = true;
        }
    }
}
