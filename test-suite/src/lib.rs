#[cfg(test)]
mod test_console;
#[cfg(test)]
mod test_store;

use std::fs::File;
use std::path::PathBuf;
use std::sync::Once;

use registration::{Console, UserStore};

use simplelog::*;
use tempdir::TempDir;

pub struct TestEnvironment {
    pub dir: TempDir,
    pub store: UserStore,
}

static INIT_LOG: Once = Once::new();

fn initialize_logger() {
    CombinedLogger::init(vec![
        TermLogger::new(
            LevelFilter::Warn,
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ),
        WriteLogger::new(
            LevelFilter::Debug,
            Config::default(),
            File::create("test.log").unwrap(),
        ),
    ])
    .unwrap();
}

impl TestEnvironment {
    pub fn new() -> TestEnvironment {
        INIT_LOG.call_once(initialize_logger);
        let dir = TempDir::new("registration-test").unwrap();
        let store = UserStore::new(dir.path().join("users.db"));
        store.create_db().unwrap();
        TestEnvironment { dir, store }
    }

    pub fn db_path(&self) -> PathBuf {
        self.dir.path().join("users.db")
    }

    /// Feeds `input` to a single menu pass and returns everything printed.
    pub fn run_once(&self, input: &str) -> String {
        let mut console = Console::new(&self.store, input.as_bytes(), Vec::new());
        console.run_once().unwrap();
        String::from_utf8(console.into_output()).unwrap()
    }

    pub fn run(&self, input: &str) -> String {
        let mut console = Console::new(&self.store, input.as_bytes(), Vec::new());
        console.run().unwrap();
        String::from_utf8(console.into_output()).unwrap()
    }

    pub fn display_users(&self) -> String {
        let mut out = Vec::new();
        self.store.display_users(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }
}

impl Default for TestEnvironment {
    fn default() -> Self {
        Self::new()
    }
}
