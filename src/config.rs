use directories::ProjectDirs;
use log::debug;
use serde::Deserialize;
use std::{
    env, fs,
    path::{Path, PathBuf},
};

pub const CONFIG_ENV: &str = "CARAVEL_CONFIG";
pub const SERVER_URL_ENV: &str = "CARAVEL_SERVER_URL";
pub const APP_NAME_ENV: &str = "CARAVEL_APP_NAME";
const CONFIG_FILE: &str = "caravel.json";

/// Shell-side configuration handed to the content host. The navigation
/// allowlist is carried, not enforced; that is the content runtime's job.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub app_id: String,
    pub app_name: String,
    /// Bundled asset directory, the fallback when no live server is set.
    pub web_dir: PathBuf,
    /// Live-server mode: load hosted content from this URL instead of
    /// bundled assets.
    pub server_url: Option<String>,
    /// Host patterns kept inside the embedded view instead of handed to an
    /// external browser.
    pub allow_navigation: Vec<String>,
    pub allow_cleartext: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        ShellConfig {
            app_id: "org.caravel.app".to_string(),
            app_name: "Caravel".to_string(),
            web_dir: PathBuf::from("public"),
            server_url: None,
            allow_navigation: Vec::new(),
            allow_cleartext: false,
        }
    }
}

impl ShellConfig {
    /// Explicit `CARAVEL_CONFIG` path, then the per-user config directory,
    /// then `./caravel.json`. A missing file falls back to defaults; a file
    /// that fails to parse is an error.
    pub fn load() -> Result<Self, Box<dyn std::error::Error + 'static>> {
        let mut config = match Self::probe() {
            Some(path) => Self::from_file(&path)?,
            None => ShellConfig::default(),
        };
        config.apply_env(|key| env::var(key).ok());
        Ok(config)
    }

    fn probe() -> Option<PathBuf> {
        if let Ok(path) = env::var(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        if let Some(dirs) = ProjectDirs::from("org", "caravel", "caravel") {
            let path = dirs.config_dir().join(CONFIG_FILE);
            if path.exists() {
                return Some(path);
            }
        }
        let local = PathBuf::from(CONFIG_FILE);
        local.exists().then_some(local)
    }

    pub fn from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error + 'static>> {
        debug!("reading shell config from {}", path.display());
        let text = fs::read_to_string(path)?;
        let config = serde_json::from_str(&text)?;
        Ok(config)
    }

    /// Environment wins over the file. The lookup is injected so override
    /// logic tests without touching the process environment.
    pub(crate) fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(SERVER_URL_ENV) {
            if !url.trim().is_empty() {
                self.server_url = Some(url.trim().to_string());
            }
        }
        if let Some(name) = lookup(APP_NAME_ENV) {
            if !name.trim().is_empty() {
                self.app_name = name.trim().to_string();
            }
        }
    }

    /// Where the content host loads from: the live server when configured,
    /// the bundled asset directory otherwise.
    pub fn content_source(&self) -> String {
        match &self.server_url {
            Some(url) => url.clone(),
            None => self.web_dir.display().to_string(),
        }
    }
}
