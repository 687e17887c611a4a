pub mod models;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

use crate::config::models::{
    ConfigItem, ControlCommandConfigItem, FileLoggingConfigItem, NginxPathConfigItem,
};
use crate::errors::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIterDerive, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfigKey {
    NginxPath,
    ControlCommand,
    FileLoggingEnabled,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub nginx_path: NginxPathConfigItem,
    #[serde(default)]
    pub control_command: ControlCommandConfigItem,
    #[serde(default)]
    pub file_logging_enabled: FileLoggingConfigItem,
}

#[derive(Debug, Clone)]
pub struct Config {
    path: PathBuf,
    data: ConfigFile,
    from_file: bool,
}

impl Config {
    /// Missing file means defaults; a file that exists must parse.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Ok(Self {
                path,
                data: ConfigFile::default(),
                from_file: false,
            });
        }
        let text = fs::read_to_string(&path)
            .map_err(|e| Error::config(format!("Failed to read {}: {}", path.display(), e)))?;
        let data: ConfigFile = serde_json::from_str(&text)
            .map_err(|e| Error::config(format!("Invalid JSON in '{}': {}", path.display(), e)))?;
        Ok(Self {
            path,
            data,
            from_file: true,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn loaded_from_file(&self) -> bool {
        self.from_file
    }

    pub fn nginx_path(&self) -> PathBuf {
        PathBuf::from(self.data.nginx_path.get_value())
    }

    /// Program and leading arguments of the control command.
    pub fn control_command(&self) -> Result<(String, Vec<String>)> {
        let mut parts = self
            .data
            .control_command
            .get_value()
            .split_whitespace()
            .map(str::to_string);
        let program = parts
            .next()
            .ok_or_else(|| Error::config("control_command must not be empty"))?;
        Ok((program, parts.collect()))
    }

    pub fn file_logging_enabled(&self) -> bool {
        self.data.file_logging_enabled.get_value().0
    }

    /// `(key, description, value)` for every known setting.
    pub fn rows(&self) -> Vec<(String, String, String)> {
        ConfigKey::iter()
            .map(|key| {
                let (desc, value) = match key {
                    ConfigKey::NginxPath => (
                        self.data.nginx_path.description(),
                        self.data.nginx_path.get_value().clone(),
                    ),
                    ConfigKey::ControlCommand => (
                        self.data.control_command.description(),
                        self.data.control_command.get_value().clone(),
                    ),
                    ConfigKey::FileLoggingEnabled => (
                        self.data.file_logging_enabled.description(),
                        self.data.file_logging_enabled.get_value().to_string(),
                    ),
                };
                (key.to_string(), desc.to_string(), value)
            })
            .collect()
    }
}
