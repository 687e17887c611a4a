use crate::config::Config;
use crate::errors::Result;
use crate::logging::Logger;
use std::path::PathBuf;

/// Everything a session needs that outlives a single run: the loaded
/// configuration and the session logger.
#[derive(Debug)]
pub struct AppContext {
    pub config: Config,
    pub logger: Logger,
    pub config_path: PathBuf,
    pub logs_dir: PathBuf,
}

impl AppContext {
    pub fn new_with_paths(config_path: PathBuf, logs_dir: PathBuf) -> Result<Self> {
        let config = Config::load_from(&config_path)?;

        let logger = Logger::new();
        logger.set_log_dir(&logs_dir);
        logger.set_file_logging_enabled(config.file_logging_enabled());

        Ok(Self {
            config,
            logger,
            config_path,
            logs_dir,
        })
    }
}
