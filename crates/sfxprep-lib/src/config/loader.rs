use super::Config;
use crate::error::SfxPrepError;
use config::Config as ConfigBuilder;

pub fn load_config(config_path: &str) -> Result<Config, SfxPrepError> {
    let config_builder = ConfigBuilder::builder()
        .add_source(config::File::with_name(config_path))
        .build()?;

    config_builder.try_deserialize().map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_REFERER, DEFAULT_TIMEOUT_SECS};
    use std::path::PathBuf;

    fn write_config(dir: &tempfile::TempDir, file_name: &str, contents: &str) -> String {
        let path = dir.path().join(file_name);
        std::fs::write(&path, contents).unwrap();
        path.to_str().unwrap().to_string()
    }

    #[test]
    fn test_partial_yaml_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            "sfx.yaml",
            "output:\n  path: assets/audio\nhttp:\n  timeout_secs: 3\n",
        );

        let config = load_config(&path).unwrap();

        assert_eq!(config.output.path, PathBuf::from("assets/audio"));
        assert_eq!(config.http.timeout_secs, 3);
        assert_eq!(config.http.referer, DEFAULT_REFERER);
        assert_eq!(config.assets, Config::default().assets);
        assert_eq!(config.manual_sources.len(), 3);
    }

    #[test]
    fn test_toml_asset_table_replaces_builtin_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            "sfx.toml",
            r#"
[[assets]]
name = "tick.mp3"
description = "Tick"
urls = ["https://mirror-a.example/tick.mp3", "https://mirror-b.example/tick.mp3"]
search_keywords = ["tick", "clock"]
"#,
        );

        let config = load_config(&path).unwrap();

        assert_eq!(config.assets.len(), 1);
        assert_eq!(config.assets[0].name, "tick.mp3");
        assert_eq!(config.assets[0].urls.len(), 2);
        assert_eq!(config.assets[0].search_keywords, vec!["tick", "clock"]);
        assert_eq!(config.http.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "sfx.yaml", "output:\n  dir: somewhere\n");

        assert!(matches!(load_config(&path), Err(SfxPrepError::Config(_))));
    }

    #[test]
    fn test_missing_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.yaml");

        assert!(matches!(
            load_config(path.to_str().unwrap()),
            Err(SfxPrepError::Config(_))
        ));
    }
}
