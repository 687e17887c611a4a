use std::path::PathBuf;

pub const CONFIG_ENV: &str = "SITECTL_CONFIG";
pub const LOGS_ENV: &str = "SITECTL_LOGS";

/// File locations. The program takes no flags, so these come from the
/// environment.
#[derive(Debug, Clone)]
pub struct CliPaths {
    pub config_path: PathBuf,
    pub logs_dir: PathBuf,
}

impl CliPaths {
    pub fn from_env() -> Result<Self, String> {
        Self::from_parts(
            std::env::args().skip(1),
            std::env::var_os(CONFIG_ENV).map(PathBuf::from),
            std::env::var_os(LOGS_ENV).map(PathBuf::from),
        )
    }

    pub fn from_parts<I>(
        mut args: I,
        config_path: Option<PathBuf>,
        logs_dir: Option<PathBuf>,
    ) -> Result<Self, String>
    where
        I: Iterator<Item = String>,
    {
        if let Some(arg) = args.next() {
            return Err(format!(
                "Unknown argument: {arg}\nUsage: sitectl (takes no arguments; set {CONFIG_ENV} or {LOGS_ENV} to relocate files)"
            ));
        }
        let defaults = Self::defaults();
        Ok(Self {
            config_path: config_path.unwrap_or(defaults.config_path),
            logs_dir: logs_dir.unwrap_or(defaults.logs_dir),
        })
    }

    fn defaults() -> Self {
        Self {
            config_path: PathBuf::from("/etc/sitectl/config.json"),
            logs_dir: PathBuf::from("/var/log/sitectl"),
        }
    }
}
