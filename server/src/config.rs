use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_SITE_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_SITE_ROOT: &str = "target/site";
const DEFAULT_DATA_PATH: &str = "data/list.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError(String);

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Configuration error: {}", self.0)
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub site_addr: SocketAddr,
    /// Built site; the WASM bundle is served from `<site_root>/pkg`.
    pub site_root: PathBuf,
    /// Dataset served as `/list.json`.
    pub data_path: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let site_addr = dotenvy::var("SITE_ADDR")
            .unwrap_or_else(|_| DEFAULT_SITE_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError("Invalid SITE_ADDR".to_string()))?;

        let site_root = dotenvy::var("SITE_ROOT")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_SITE_ROOT.to_string());

        let data_path = dotenvy::var("DIRECTORY_DATA")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_DATA_PATH.to_string());

        Ok(Self {
            site_addr,
            site_root: PathBuf::from(site_root),
            data_path: PathBuf::from(data_path),
        })
    }

    pub fn pkg_dir(&self) -> PathBuf {
        self.site_root.join("pkg")
    }
}
