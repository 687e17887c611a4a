use std::path::Path;

use crate::core::models::{ProxySite, StaticSite};
use crate::core::types::ManageAction;
use crate::errors::{Error, Result};
use crate::sites::SiteManager;

/// Call recorder for unit tests. Listings are fixed at construction and
/// never change; each call is kept as a short label (`"enable c"`,
/// `"manage reload"`) unless it matches `fail_on`, which fails it instead.
#[derive(Debug, Default)]
pub(crate) struct RecordingSites {
    available: Vec<String>,
    enabled: Vec<String>,
    pub calls: Vec<String>,
    fail_on: Option<String>,
}

impl RecordingSites {
    pub fn new(available: &[&str], enabled: &[&str]) -> Self {
        Self {
            available: available.iter().map(|s| s.to_string()).collect(),
            enabled: enabled.iter().map(|s| s.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn failing_on(mut self, label: &str) -> Self {
        self.fail_on = Some(label.to_string());
        self
    }

    fn call(&mut self, label: String) -> Result<()> {
        if self.fail_on.as_deref() == Some(label.as_str()) {
            return Err(Error::action(format!("{label} refused")));
        }
        self.calls.push(label);
        Ok(())
    }
}

impl SiteManager for RecordingSites {
    fn list_available_sites(&self) -> Result<Vec<String>> {
        Ok(self.available.clone())
    }

    fn list_enabled_sites(&self) -> Result<Vec<String>> {
        Ok(self.enabled.clone())
    }

    fn enable_site(&mut self, name: &str) -> Result<()> {
        self.call(format!("enable {name}"))
    }

    fn disable_site(&mut self, name: &str) -> Result<()> {
        self.call(format!("disable {name}"))
    }

    fn add_site_from_file(&mut self, path: &Path) -> Result<()> {
        self.call(format!("add_file {}", path.display()))
    }

    fn add_static_site(&mut self, site: &StaticSite) -> Result<String> {
        let label = format!("add_static {} {} {}", site.port, site.server_name, site.site_root);
        self.call(label).map(|()| format!("created {}", site.server_name))
    }

    fn add_proxy_site(&mut self, site: &ProxySite) -> Result<String> {
        let label = format!(
            "add_proxy {} {} {} {}",
            site.port, site.server_name, site.proxy_host, site.proxy_port
        );
        self.call(label).map(|()| format!("created {}", site.server_name))
    }

    fn remove_site(&mut self, name: &str) -> Result<()> {
        self.call(format!("remove {name}"))
    }

    fn manage_server(&mut self, action: ManageAction) -> Result<()> {
        self.call(format!("manage {action}"))
    }
}
