use crate::cli::args::Command;
use crate::cli::params::{FetchParams, ListParams};
use crate::config::{Config, load_config, resolve_assets};
use crate::download::ProvisionRequest;
use crate::error::SfxPrepError;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum ResolvedCommand {
    Fetch(FetchParams),
    List(ListParams),
}

fn load_config_or_default(config_path: Option<String>) -> Result<Config, SfxPrepError> {
    match config_path {
        Some(config_path) => {
            tracing::info!("Loading configuration from {}", config_path);
            load_config(&config_path)
        }
        None => Ok(Config::default()),
    }
}

pub fn resolve_command(command: Command) -> Result<ResolvedCommand, SfxPrepError> {
    match command {
        Command::Fetch {
            config_path,
            output_dir,
            timeout_secs,
        } => {
            let mut app_config = load_config_or_default(config_path)?;

            if let Some(timeout_secs) = timeout_secs {
                if timeout_secs == 0 {
                    return Err(SfxPrepError::CliArgumentValidation {
                        details: "timeout must be greater than 0.".to_string(),
                    });
                }
                app_config.http.timeout_secs = timeout_secs;
            }
            if app_config.http.timeout_secs == 0 {
                return Err(SfxPrepError::ConfigValidation {
                    details: "http.timeout_secs must be greater than 0.".to_string(),
                });
            }

            let assets = resolve_assets(&app_config.assets)?;
            let output_dir = output_dir
                .map(PathBuf::from)
                .unwrap_or(app_config.output.path);

            Ok(ResolvedCommand::Fetch(FetchParams {
                request: ProvisionRequest {
                    assets,
                    output_dir,
                    http: app_config.http,
                },
                manual_sources: app_config.manual_sources,
            }))
        }
        Command::List { config_path } => {
            let app_config = load_config_or_default(config_path)?;
            let assets = resolve_assets(&app_config.assets)?;

            Ok(ResolvedCommand::List(ListParams {
                assets,
                output_dir: app_config.output.path,
            }))
        }
    }
}
