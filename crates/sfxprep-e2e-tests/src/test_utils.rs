use eyre::{Result, eyre};
use sfxprep_lib::cli::{Command, ResolvedCommand, resolve_command};
use sfxprep_lib::config::{AssetDescriptor, Config, HttpConfig, OutputConfig, builtin_manual_sources};
use sfxprep_lib::download::{ProvisionReport, provision_all};
use sfxprep_lib::report::Reporter;
use std::path::{Path, PathBuf};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub fn asset_descriptor(name: &str, urls: Vec<String>) -> AssetDescriptor {
    AssetDescriptor {
        name: name.to_string(),
        description: format!("{name} test sound"),
        urls,
        search_keywords: vec![format!("{name} keyword")],
    }
}

pub fn create_test_config(output_path: PathBuf, assets: Vec<AssetDescriptor>) -> Config {
    Config {
        output: OutputConfig { path: output_path },
        http: HttpConfig {
            timeout_secs: 2,
            ..HttpConfig::default()
        },
        assets,
        manual_sources: builtin_manual_sources(),
    }
}

/// Writes `config` as JSON into `dir` and returns the path of the file.
pub fn write_test_config(dir: &Path, config: &Config) -> Result<PathBuf> {
    let config_path = dir.join("config.json");
    std::fs::write(&config_path, serde_json::to_string_pretty(config)?)?;
    Ok(config_path)
}

pub async fn mount_asset(server: &MockServer, rel_path: &str, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(rel_path))
        .respond_with(template)
        .mount(server)
        .await;
}

pub fn mock_url(server: &MockServer, rel_path: &str) -> String {
    format!("{}{}", server.uri(), rel_path)
}

/// Resolves a fetch command from a config file and runs it, capturing the
/// console output instead of printing it.
pub async fn run_fetch_captured(config_path: &Path) -> Result<(ProvisionReport, String)> {
    let command = Command::Fetch {
        config_path: Some(
            config_path
                .to_str()
                .ok_or_else(|| eyre!("non UTF-8 config path"))?
                .to_string(),
        ),
        output_dir: None,
        timeout_secs: None,
    };

    let ResolvedCommand::Fetch(params) = resolve_command(command)? else {
        return Err(eyre!("resolved command type mismatch"));
    };

    let mut reporter = Reporter::new(Vec::new(), params.manual_sources);
    let report = provision_all(params.request, &mut reporter).await?;
    let output = String::from_utf8(reporter.into_inner())?;
    Ok((report, output))
}
