use std::path::Path;

use log::LevelFilter;
use log4rs::{
    append::console::ConsoleAppender,
    config::{Appender, Config as LogConfig, Root},
    encode::pattern::PatternEncoder,
};

/// Pattern used by the fallback console logger.
const FALLBACK_PATTERN: &str = "{d(%H:%M:%S)} {h({l:5})} {t} - {m}{n}";

/// Initialise logging. Uses the log4rs config file at `path` if it exists,
/// otherwise logs to the console at `Info` level.
///
/// Returns an error message if neither could be installed, e.g. because a
/// logger is already set.
pub fn init(path: impl AsRef<Path>) -> Result<(), String> {
    let path = path.as_ref();
    if path.exists() {
        return log4rs::init_file(path, Default::default()).map_err(|e| e.to_string());
    }

    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new(FALLBACK_PATTERN)))
        .build();
    let config = LogConfig::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(LevelFilter::Info))
        .map_err(|e| e.to_string())?;
    log4rs::init_config(config)
        .map(|_| ())
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_then_already_set() {
        // No config file, so the console fallback is installed.
        init("no such log config.yaml").unwrap();
        log::info!("Logging initialised");
        // The global logger can only be set once.
        assert!(init("no such log config.yaml").is_err());
    }
}
