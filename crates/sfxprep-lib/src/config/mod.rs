mod asset;
mod defaults;
mod loader;
mod model;

pub use asset::{Asset, resolve_assets};
pub use defaults::{
    DEFAULT_ACCEPT, DEFAULT_OUTPUT_PATH, DEFAULT_REFERER, DEFAULT_TIMEOUT_SECS,
    DEFAULT_USER_AGENT, builtin_assets, builtin_manual_sources,
};
pub use loader::load_config;
pub use model::{AssetDescriptor, Config, HttpConfig, ManualSource, OutputConfig};
