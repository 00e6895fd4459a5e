use std::fs::OpenOptions;

use crate::config::LogOpts;

use simplelog::*;
use user_error::UserFacingError;

/// Terminal logging goes to stderr; stdout belongs to the menu dialog.
pub fn init(opts: &LogOpts) -> Result<(), UserFacingError> {
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        opts.console.level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )];

    if let Some(file_opts) = &opts.file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&file_opts.file_path)
            .map_err(|err| {
                UserFacingError::new(format!(
                    "Could not open log file {}",
                    file_opts.file_path.display()
                ))
                .reason(err.to_string())
                .help("Change log.file.path in the config file or make its directory writable")
            })?;
        loggers.push(WriteLogger::new(file_opts.level, Config::default(), file));
    }

    CombinedLogger::init(loggers).map_err(|err| {
        UserFacingError::new("Could not initialize logging").reason(err.to_string())
    })
}
