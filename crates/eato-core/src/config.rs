use crate::error::{EatoError, Result};
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

impl ConfigWarning {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: WarnLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: WarnLevel::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// AssetConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetConfig {
    /// URL prefix for system images.
    #[serde(default = "default_image_base")]
    pub image_base: String,
    #[serde(default = "default_placeholder_width")]
    pub placeholder_width: u32,
    #[serde(default = "default_placeholder_height")]
    pub placeholder_height: u32,
    /// Directory (relative to the project root) served under `/images`.
    #[serde(default = "default_public_dir")]
    pub public_dir: String,
}

fn default_image_base() -> String {
    "/images/systems".to_string()
}

fn default_placeholder_width() -> u32 {
    400
}

fn default_placeholder_height() -> u32 {
    192
}

fn default_public_dir() -> String {
    paths::PUBLIC_DIR.to_string()
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            image_base: default_image_base(),
            placeholder_width: default_placeholder_width(),
            placeholder_height: default_placeholder_height(),
            public_dir: default_public_dir(),
        }
    }
}

// ---------------------------------------------------------------------------
// ServerConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
    /// Seconds a page instance may go without a request or an open event
    /// stream before the server unmounts it.
    #[serde(default = "default_page_ttl_secs")]
    pub page_ttl_secs: u64,
    /// Upper bound on concurrently open page instances.
    #[serde(default = "default_max_pages")]
    pub max_pages: usize,
}

fn default_port() -> u16 {
    3141
}

fn default_page_ttl_secs() -> u64 {
    300
}

fn default_max_pages() -> usize {
    256
}

impl ServerConfig {
    pub fn page_ttl(&self) -> Duration {
        Duration::from_secs(self.page_ttl_secs)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            page_ttl_secs: default_page_ttl_secs(),
            max_pages: default_max_pages(),
        }
    }
}

// ---------------------------------------------------------------------------
// SiteConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

// ---------------------------------------------------------------------------
// Config (top-level)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,
    pub site: SiteConfig,
    #[serde(default)]
    pub assets: AssetConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

fn default_version() -> u32 {
    1
}

impl Config {
    pub fn new(site_name: impl Into<String>) -> Self {
        Self {
            version: 1,
            site: SiteConfig {
                name: site_name.into(),
                description: None,
            },
            assets: AssetConfig::default(),
            server: ServerConfig::default(),
        }
    }

    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Err(EatoError::NotInitialized);
        }
        crate::io::read_yaml(&path)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        crate::io::write_yaml(&paths::config_path(root), self)
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if self.version != 1 {
            warnings.push(ConfigWarning::warning(format!(
                "unsupported config version {} (expected 1)",
                self.version
            )));
        }

        if self.site.name.trim().is_empty() {
            warnings.push(ConfigWarning::error("site.name is empty"));
        }

        if !self.assets.image_base.starts_with('/') {
            warnings.push(ConfigWarning::warning(format!(
                "assets.image_base '{}' should be an absolute URL path",
                self.assets.image_base
            )));
        }

        if self.assets.placeholder_width == 0 || self.assets.placeholder_height == 0 {
            warnings.push(ConfigWarning::warning(format!(
                "placeholder size {}x{} has a zero dimension",
                self.assets.placeholder_width, self.assets.placeholder_height
            )));
        }

        if self.server.page_ttl_secs == 0 {
            warnings.push(ConfigWarning::warning(
                "server.page_ttl_secs is 0: idle pages are unmounted at the next sweep",
            ));
        }

        if self.server.max_pages == 0 {
            warnings.push(ConfigWarning::error(
                "server.max_pages is 0: no page instance can be opened",
            ));
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
