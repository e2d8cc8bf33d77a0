use crate::error::MsdsError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming a config file, used when no path is given.
pub const CONFIG_ENV: &str = "MSDS_CONFIG";

/// Default configuration embedded in the binary.
pub const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "http://localhost:5001"

[site]
base_url = "http://localhost:3000"

[qr]
service_url = "https://api.qrserver.com/v1/create-qr-code/"
size = 300

[display]
per_page = 12
location_preview = 2
"#;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub qr: QrConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Where the REST backend serves PDFs and attachment images.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: "http://localhost:5001".into(),
        }
    }
}

/// Public origin of the web console; QR codes point at detail pages here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub base_url: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            base_url: "http://localhost:3000".into(),
        }
    }
}

/// External service that renders a detail-page URL as a QR PNG.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrConfig {
    #[serde(default = "default_qr_service")]
    pub service_url: String,
    /// Edge length in pixels.
    #[serde(default = "default_qr_size")]
    pub size: u32,
}

fn default_qr_service() -> String {
    "https://api.qrserver.com/v1/create-qr-code/".into()
}

fn default_qr_size() -> u32 {
    300
}

impl Default for QrConfig {
    fn default() -> Self {
        QrConfig {
            service_url: default_qr_service(),
            size: default_qr_size(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_per_page")]
    pub per_page: usize,
    /// How many usage locations a summary lists before "+N개 더".
    #[serde(default = "default_location_preview")]
    pub location_preview: usize,
}

fn default_per_page() -> usize {
    12
}

fn default_location_preview() -> usize {
    2
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            per_page: default_per_page(),
            location_preview: default_location_preview(),
        }
    }
}

/// Parse a TOML config string. `source` is only used in error messages.
pub fn parse_config(toml_str: &str, source: &Path) -> Result<Config, MsdsError> {
    toml::from_str(toml_str).map_err(|e| MsdsError::ConfigLoad {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Load a config file.
pub fn load_config_file(path: &Path) -> Result<Config, MsdsError> {
    let content = std::fs::read_to_string(path).map_err(|e| MsdsError::ConfigLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_config(&content, path)
}

/// Resolve the active configuration.
///
/// Search order:
/// 1. The explicit `path`
/// 2. The file named by `MSDS_CONFIG`
/// 3. The embedded default
pub fn load_config(path: Option<&Path>) -> Result<Config, MsdsError> {
    if let Some(path) = path {
        tracing::info!("Loading config from: {}", path.display());
        return load_config_file(path);
    }

    if let Some(env_path) = std::env::var_os(CONFIG_ENV) {
        let env_path = PathBuf::from(env_path);
        tracing::info!("Loading config from {}: {}", CONFIG_ENV, env_path.display());
        return load_config_file(&env_path);
    }

    tracing::debug!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG, Path::new("<embedded>"))
}
