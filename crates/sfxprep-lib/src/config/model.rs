use super::defaults::{
    DEFAULT_ACCEPT, DEFAULT_OUTPUT_PATH, DEFAULT_REFERER, DEFAULT_TIMEOUT_SECS,
    DEFAULT_USER_AGENT, builtin_assets, builtin_manual_sources,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct AssetDescriptor {
    /// File name inside the output directory
    pub name: String,
    /// Human-readable label shown while downloading
    pub description: String,
    /// Candidate mirror URLs, tried in order
    pub urls: Vec<String>,
    /// Keywords suggested for a manual search when every mirror fails
    #[serde(default)]
    pub search_keywords: Vec<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ManualSource {
    pub label: String,
    pub url: String,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, default)]
pub struct OutputConfig {
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_OUTPUT_PATH),
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, default)]
pub struct HttpConfig {
    pub timeout_secs: u64,
    pub user_agent: String,
    pub accept: String,
    pub referer: String,
}

impl HttpConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            accept: DEFAULT_ACCEPT.to_string(),
            referer: DEFAULT_REFERER.to_string(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields, default)]
pub struct Config {
    pub output: OutputConfig,
    pub http: HttpConfig,
    pub assets: Vec<AssetDescriptor>,
    pub manual_sources: Vec<ManualSource>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputConfig::default(),
            http: HttpConfig::default(),
            assets: builtin_assets(),
            manual_sources: builtin_manual_sources(),
        }
    }
}
