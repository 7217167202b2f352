use super::FetchError;
use crate::config::{Asset, HttpConfig};
use std::path::PathBuf;
use url::Url;

#[derive(Clone, Debug)]
pub struct ProvisionRequest {
    pub assets: Vec<Asset>,
    pub output_dir: PathBuf,
    pub http: HttpConfig,
}

#[derive(Debug)]
pub struct FailedAttempt {
    pub url: Url,
    pub error: FetchError,
}

#[derive(Debug)]
pub enum AssetOutcome {
    Downloaded {
        name: String,
        path: PathBuf,
        url: Url,
        size: u64,
    },
    Failed {
        name: String,
        attempts: Vec<FailedAttempt>,
    },
}

impl AssetOutcome {
    pub fn name(&self) -> &str {
        match self {
            AssetOutcome::Downloaded { name, .. } | AssetOutcome::Failed { name, .. } => name,
        }
    }

    pub fn is_downloaded(&self) -> bool {
        matches!(self, AssetOutcome::Downloaded { .. })
    }
}

/// Outcomes of one provisioning run, in asset declaration order.
#[derive(Debug, Default)]
pub struct ProvisionReport {
    pub outcomes: Vec<AssetOutcome>,
}

impl ProvisionReport {
    pub fn succeeded(&self) -> impl Iterator<Item = &AssetOutcome> {
        self.outcomes.iter().filter(|o| o.is_downloaded())
    }

    pub fn failed(&self) -> impl Iterator<Item = &AssetOutcome> {
        self.outcomes.iter().filter(|o| !o.is_downloaded())
    }

    pub fn is_complete(&self) -> bool {
        self.outcomes.iter().all(AssetOutcome::is_downloaded)
    }
}
