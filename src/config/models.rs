use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

pub trait ConfigItem<T> {
    fn get_value(&self) -> &T;
    fn description(&self) -> &str;
}

/// Boolean stored as `"True"` / `"False"` in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flag(pub bool);

impl Flag {
    pub fn try_from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "1" => Some(Flag(true)),
            "false" | "no" | "0" => Some(Flag(false)),
            _ => None,
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.0 { "True" } else { "False" })
    }
}

impl Serialize for Flag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Flag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Flag::try_from_str(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("expected True or False, got '{raw}'")))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NginxPathConfigItem {
    pub value: String,
    pub description: String,
}

impl Default for NginxPathConfigItem {
    fn default() -> Self {
        Self {
            value: "/etc/nginx/".into(),
            description: "Directory holding sites-available and sites-enabled.".into(),
        }
    }
}

impl ConfigItem<String> for NginxPathConfigItem {
    fn get_value(&self) -> &String {
        &self.value
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlCommandConfigItem {
    pub value: String,
    pub description: String,
}

impl Default for ControlCommandConfigItem {
    fn default() -> Self {
        Self {
            value: "service nginx".into(),
            description: "Command that receives the lifecycle verb as its last argument.".into(),
        }
    }
}

impl ConfigItem<String> for ControlCommandConfigItem {
    fn get_value(&self) -> &String {
        &self.value
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileLoggingConfigItem {
    pub value: Flag,
    pub description: String,
}

impl Default for FileLoggingConfigItem {
    fn default() -> Self {
        Self {
            value: Flag(true),
            description: "Enable writing log messages to file.".into(),
        }
    }
}

impl ConfigItem<Flag> for FileLoggingConfigItem {
    fn get_value(&self) -> &Flag {
        &self.value
    }
    fn description(&self) -> &str {
        &self.description
    }
}
