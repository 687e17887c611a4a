use crate::errors::{Error, Result};
use crate::sites::SiteManager;

/// A named virtual host. `enabled` implies `available`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Site {
    pub name: String,
    pub available: bool,
    pub enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticSite {
    pub port: String,
    pub server_name: String,
    pub site_root: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxySite {
    pub port: String,
    pub server_name: String,
    pub proxy_host: String,
    pub proxy_port: String,
}

/// Available and enabled site names, read once at session start.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteInventory {
    available: Vec<String>,
    enabled: Vec<String>,
}

impl SiteInventory {
    pub fn new(available: Vec<String>, enabled: Vec<String>) -> Self {
        Self { available, enabled }
    }

    /// Any listing failure is reported as an inventory error.
    pub fn capture<M: SiteManager + ?Sized>(manager: &M) -> Result<Self> {
        let available = manager.list_available_sites().map_err(into_inventory)?;
        let enabled = manager.list_enabled_sites().map_err(into_inventory)?;
        Ok(Self::new(available, enabled))
    }

    pub fn available(&self) -> &[String] {
        &self.available
    }

    /// Raw enabled listing, including entries with no available counterpart.
    pub fn enabled(&self) -> &[String] {
        &self.enabled
    }

    pub fn is_enabled(&self, name: &str) -> bool {
        self.enabled.iter().any(|e| e == name)
    }

    pub fn sites(&self) -> Vec<Site> {
        self.available
            .iter()
            .map(|name| Site {
                name: name.clone(),
                available: true,
                enabled: self.is_enabled(name),
            })
            .collect()
    }
}

fn into_inventory(err: Error) -> Error {
    match err {
        Error::Inventory(_) => err,
        other => Error::inventory(other.to_string()),
    }
}
