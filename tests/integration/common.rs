use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use std::sync::atomic::{AtomicUsize, Ordering};

use sitectl::core::models::{ProxySite, StaticSite};
use sitectl::core::types::ManageAction;
use sitectl::errors::{Error, Result};
use sitectl::logging::Logger;
use sitectl::sites::SiteManager;

pub fn binary_path() -> String {
    let raw = PathBuf::from(env!("CARGO_BIN_EXE_sitectl"));
    if raw.is_absolute() {
        return raw.to_string_lossy().to_string();
    }
    let from_manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(&raw);
    if from_manifest.exists() {
        return from_manifest.to_string_lossy().to_string();
    }
    raw.to_string_lossy().to_string()
}

static COUNTER: AtomicUsize = AtomicUsize::new(0);

pub fn make_temp_dir(prefix: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "{prefix}-{}-{}",
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos(),
        COUNTER.fetch_add(1, Ordering::Relaxed)
    ));
    let _ = fs::create_dir_all(&dir);
    dir
}

/// `<dir>/nginx/sites-available` holding `available`, plus an empty
/// `sites-enabled`.
pub fn make_nginx_tree(dir: &Path, available: &[&str]) -> PathBuf {
    let root = dir.join("nginx");
    fs::create_dir_all(root.join("sites-available")).unwrap();
    fs::create_dir_all(root.join("sites-enabled")).unwrap();
    for name in available {
        fs::write(root.join("sites-available").join(name), "server {}\n").unwrap();
    }
    root
}

pub fn write_config(dir: &Path, nginx_path: &Path, control_command: &str) {
    let cfg = format!(
        r#"{{
      "nginx_path": {{ "value": "{}", "description": "nginx directory" }},
      "control_command": {{ "value": "{}", "description": "control" }},
      "file_logging_enabled": {{ "value": "True", "description": "file logging" }}
    }}"#,
        nginx_path.display(),
        control_command
    );
    fs::write(dir.join("config.json"), cfg).unwrap();
}

pub fn run_with_input(dir: &Path, input: &str) -> Output {
    run_with_args(dir, &[], input)
}

pub fn run_with_args(dir: &Path, args: &[&str], input: &str) -> Output {
    let mut child = Command::new(binary_path())
        .args(args)
        .current_dir(dir)
        .env("SITECTL_CONFIG", dir.join("config.json"))
        .env("SITECTL_LOGS", dir.join("logs"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn binary");

    // the process may exit before reading stdin
    let _ = child.stdin.as_mut().unwrap().write_all(input.as_bytes());

    child.wait_with_output().unwrap()
}

fn strip_ansi_and_control(s: &str) -> String {
    let mut out = Vec::with_capacity(s.len());
    let mut bytes = s.bytes().peekable();

    while let Some(b) = bytes.next() {
        if b == 0x1B && matches!(bytes.peek(), Some(b'[')) {
            let _ = bytes.next();
            for nb in bytes.by_ref() {
                if nb.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        if b.is_ascii_control() {
            continue;
        }
        out.push(b);
    }

    String::from_utf8_lossy(&out).into_owned()
}

pub fn normalized_lines(buf: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(buf)
        .lines()
        .map(|l| {
            let stripped = strip_ansi_and_control(l);
            let trimmed = stripped.trim();
            if let Some(rest) = trimmed.strip_prefix('>') {
                rest.trim().to_string()
            } else {
                trimmed.to_string()
            }
        })
        .filter(|l| !l.is_empty())
        .collect()
}

pub fn read_log_contents(dir: &Path) -> Option<String> {
    let mut entries = fs::read_dir(dir.join("logs")).ok()?;
    let entry = entries.find_map(|e| e.ok())?;
    fs::read_to_string(entry.path()).ok()
}

pub fn quiet_logger() -> Logger {
    let logger = Logger::new();
    logger.set_file_logging_enabled(false);
    logger
}

/// In-memory `SiteManager` that keeps its listings in step with each call and
/// refuses the same things the filesystem manager refuses. Every accepted
/// mutating call is recorded.
#[derive(Debug, Default)]
pub struct FakeSites {
    pub available: Vec<String>,
    pub enabled: Vec<String>,
    pub calls: Vec<String>,
    pub fail_on: Option<String>,
}

impl FakeSites {
    pub fn new(available: &[&str], enabled: &[&str]) -> Self {
        Self {
            available: available.iter().map(|s| s.to_string()).collect(),
            enabled: enabled.iter().map(|s| s.to_string()).collect(),
            ..Self::default()
        }
    }

    pub fn failing_on(mut self, call: &str) -> Self {
        self.fail_on = Some(call.to_string());
        self
    }

    fn record(&mut self, call: String) -> Result<()> {
        if self.fail_on.as_deref() == Some(call.as_str()) {
            return Err(Error::action(format!("{call} refused")));
        }
        self.calls.push(call);
        Ok(())
    }
}

impl SiteManager for FakeSites {
    fn list_available_sites(&self) -> Result<Vec<String>> {
        Ok(self.available.clone())
    }

    fn list_enabled_sites(&self) -> Result<Vec<String>> {
        Ok(self.enabled.clone())
    }

    fn enable_site(&mut self, name: &str) -> Result<()> {
        if !self.available.iter().any(|a| a == name) {
            return Err(Error::action(format!("site '{name}' is not available")));
        }
        if self.enabled.iter().any(|e| e == name) {
            return Err(Error::action(format!("site '{name}' is already enabled")));
        }
        self.record(format!("enable {name}"))?;
        self.enabled.push(name.to_string());
        Ok(())
    }

    fn disable_site(&mut self, name: &str) -> Result<()> {
        if !self.enabled.iter().any(|e| e == name) {
            return Err(Error::action(format!("site '{name}' is not enabled")));
        }
        self.record(format!("disable {name}"))?;
        self.enabled.retain(|e| e != name);
        Ok(())
    }

    fn add_site_from_file(&mut self, path: &Path) -> Result<()> {
        self.record(format!("add_file {}", path.display()))
    }

    fn add_static_site(&mut self, site: &StaticSite) -> Result<String> {
        self.record(format!(
            "add_static {} {} {}",
            site.port, site.server_name, site.site_root
        ))?;
        self.available.push(site.server_name.clone());
        Ok(format!("created {}", site.server_name))
    }

    fn add_proxy_site(&mut self, site: &ProxySite) -> Result<String> {
        self.record(format!(
            "add_proxy {} {} {} {}",
            site.port, site.server_name, site.proxy_host, site.proxy_port
        ))?;
        self.available.push(site.server_name.clone());
        Ok(format!("created {}", site.server_name))
    }

    fn remove_site(&mut self, name: &str) -> Result<()> {
        if !self.available.iter().any(|a| a == name) {
            return Err(Error::action(format!("site '{name}' is not available")));
        }
        self.record(format!("remove {name}"))?;
        self.enabled.retain(|e| e != name);
        self.available.retain(|a| a != name);
        Ok(())
    }

    fn manage_server(&mut self, action: ManageAction) -> Result<()> {
        self.record(format!("manage {action}"))
    }
}
