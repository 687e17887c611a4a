//! The site-management collaborator: listing, enabling and disabling sites,
//! writing new site configs, and driving the server process.

#[cfg(test)]
pub(crate) mod fake;
pub mod nginx;
pub mod templates;

use std::path::Path;

use crate::core::models::{ProxySite, StaticSite};
use crate::core::types::ManageAction;
use crate::errors::Result;

pub use nginx::NginxSites;

pub trait SiteManager {
    fn list_available_sites(&self) -> Result<Vec<String>>;
    fn list_enabled_sites(&self) -> Result<Vec<String>>;

    fn enable_site(&mut self, name: &str) -> Result<()>;
    fn disable_site(&mut self, name: &str) -> Result<()>;

    fn add_site_from_file(&mut self, path: &Path) -> Result<()>;
    /// Returns a message describing what was created.
    fn add_static_site(&mut self, site: &StaticSite) -> Result<String>;
    /// Returns a message describing what was created.
    fn add_proxy_site(&mut self, site: &ProxySite) -> Result<String>;
    fn remove_site(&mut self, name: &str) -> Result<()>;

    fn manage_server(&mut self, action: ManageAction) -> Result<()>;
}
