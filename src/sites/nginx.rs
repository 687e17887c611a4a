use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::Config;
use crate::core::models::{ProxySite, StaticSite};
use crate::core::types::ManageAction;
use crate::errors::{Error, Result};
use crate::sites::{SiteManager, templates};

pub const SITES_AVAILABLE: &str = "sites-available";
pub const SITES_ENABLED: &str = "sites-enabled";

/// Sites stored the Debian way: config files in `sites-available`, symlinks
/// to them in `sites-enabled`.
#[derive(Debug, Clone)]
pub struct NginxSites {
    root: PathBuf,
    control_program: String,
    control_args: Vec<String>,
}

impl NginxSites {
    pub fn new(root: impl Into<PathBuf>, control_program: impl Into<String>, control_args: Vec<String>) -> Self {
        Self {
            root: root.into(),
            control_program: control_program.into(),
            control_args,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let (program, args) = config.control_command()?;
        Ok(Self::new(config.nginx_path(), program, args))
    }

    pub fn available_dir(&self) -> PathBuf {
        self.root.join(SITES_AVAILABLE)
    }

    pub fn enabled_dir(&self) -> PathBuf {
        self.root.join(SITES_ENABLED)
    }

    /// The nginx directory must hold at least one of the two site folders.
    pub fn check_layout(&self) -> Result<()> {
        let entries = fs::read_dir(&self.root).map_err(|e| {
            Error::inventory(format!("cannot read {}: {e}", self.root.display()))
        })?;
        let has_sites = entries.filter_map(|e| e.ok()).any(|e| {
            let name = e.file_name();
            name == SITES_AVAILABLE || name == SITES_ENABLED
        });
        if has_sites {
            Ok(())
        } else {
            Err(Error::inventory(format!(
                "{} contains neither {SITES_AVAILABLE} nor {SITES_ENABLED}",
                self.root.display()
            )))
        }
    }

    fn list(dir: &Path) -> Result<Vec<String>> {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(Error::inventory(format!(
                    "cannot read {}: {e}",
                    dir.display()
                )));
            }
        };
        let mut names = Vec::new();
        for entry in entries {
            let entry = entry?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        names.sort();
        Ok(names)
    }

    fn available_path(&self, name: &str) -> Result<PathBuf> {
        Ok(self.available_dir().join(checked_name(name)?))
    }

    fn enabled_path(&self, name: &str) -> Result<PathBuf> {
        Ok(self.enabled_dir().join(checked_name(name)?))
    }

    fn is_enabled(&self, name: &str) -> Result<bool> {
        // symlink_metadata so a dangling link still counts
        Ok(fs::symlink_metadata(self.enabled_path(name)?).is_ok())
    }

    fn write_new_site(&self, name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.available_path(name)?;
        if path.exists() {
            return Err(Error::action(format!("site '{name}' already exists")));
        }
        fs::create_dir_all(self.available_dir())
            .map_err(|e| action_io(format!("cannot create {}", self.available_dir().display()), e))?;
        fs::write(&path, contents)
            .map_err(|e| action_io(format!("cannot write {}", path.display()), e))?;
        Ok(path)
    }
}

fn checked_name(name: &str) -> Result<&str> {
    if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
        return Err(Error::action(format!("'{name}' is not a valid site name")));
    }
    Ok(name)
}

fn action_io(context: String, err: std::io::Error) -> Error {
    Error::action(format!("{context}: {err}"))
}

#[cfg(unix)]
fn link(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(not(unix))]
fn link(target: &Path, link: &Path) -> std::io::Result<()> {
    fs::copy(target, link).map(|_| ())
}

impl SiteManager for NginxSites {
    fn list_available_sites(&self) -> Result<Vec<String>> {
        Self::list(&self.available_dir())
    }

    fn list_enabled_sites(&self) -> Result<Vec<String>> {
        Self::list(&self.enabled_dir())
    }

    fn enable_site(&mut self, name: &str) -> Result<()> {
        let target = self.available_path(name)?;
        if !target.is_file() {
            return Err(Error::action(format!("site '{name}' is not available")));
        }
        if self.is_enabled(name)? {
            return Err(Error::action(format!("site '{name}' is already enabled")));
        }
        fs::create_dir_all(self.enabled_dir())
            .map_err(|e| action_io(format!("cannot create {}", self.enabled_dir().display()), e))?;
        link(&target, &self.enabled_path(name)?)
            .map_err(|e| action_io(format!("cannot enable '{name}'"), e))
    }

    fn disable_site(&mut self, name: &str) -> Result<()> {
        if !self.is_enabled(name)? {
            return Err(Error::action(format!("site '{name}' is not enabled")));
        }
        fs::remove_file(self.enabled_path(name)?)
            .map_err(|e| action_io(format!("cannot disable '{name}'"), e))
    }

    fn add_site_from_file(&mut self, path: &Path) -> Result<()> {
        if !path.is_file() {
            return Err(Error::action(format!("{} is not a file", path.display())));
        }
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| Error::action(format!("{} has no file name", path.display())))?;
        let contents = fs::read_to_string(path)
            .map_err(|e| action_io(format!("cannot read {}", path.display()), e))?;
        self.write_new_site(&name, &contents).map(|_| ())
    }

    fn add_static_site(&mut self, site: &StaticSite) -> Result<String> {
        let path = self.write_new_site(&site.server_name, &templates::static_site(site))?;
        Ok(format!("Created static site {} at {}", site.server_name, path.display()))
    }

    fn add_proxy_site(&mut self, site: &ProxySite) -> Result<String> {
        let path = self.write_new_site(&site.server_name, &templates::proxy_site(site))?;
        Ok(format!(
            "Created proxy site {} -> {}:{} at {}",
            site.server_name,
            site.proxy_host,
            site.proxy_port,
            path.display()
        ))
    }

    fn remove_site(&mut self, name: &str) -> Result<()> {
        let path = self.available_path(name)?;
        if !path.exists() {
            return Err(Error::action(format!("site '{name}' is not available")));
        }
        if self.is_enabled(name)? {
            self.disable_site(name)?;
        }
        fs::remove_file(&path).map_err(|e| action_io(format!("cannot remove '{name}'"), e))
    }

    fn manage_server(&mut self, action: ManageAction) -> Result<()> {
        let output = Command::new(&self.control_program)
            .args(&self.control_args)
            .arg(action.as_ref())
            .output()
            .map_err(|e| action_io(format!("cannot run {}", self.control_program), e))?;
        if output.status.success() {
            return Ok(());
        }
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        Err(Error::action(if stderr.is_empty() {
            format!("{} {action} exited with {}", self.control_program, output.status)
        } else {
            stderr
        }))
    }
}
