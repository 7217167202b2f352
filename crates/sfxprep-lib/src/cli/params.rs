use crate::config::{Asset, ManualSource};
use crate::download::ProvisionRequest;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FetchParams {
    pub request: ProvisionRequest,
    pub manual_sources: Vec<ManualSource>,
}

#[derive(Debug, Clone)]
pub struct ListParams {
    pub assets: Vec<Asset>,
    pub output_dir: PathBuf,
}
