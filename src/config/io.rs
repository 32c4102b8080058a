use std::path::{Path, PathBuf};

use crate::app_dirs;

use super::errors::ConfigError;
use super::types::AppConfig;

/// Default filename used to store the dashboard configuration.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Resolve the configuration file path, ensuring the parent directory exists.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    Ok(app_dirs::app_root_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the config from the app directory.
///
/// When no file exists yet the defaults are written out so they can be edited.
pub fn load_or_default() -> Result<AppConfig, ConfigError> {
    let path = config_path()?;
    if path.exists() {
        return load_from(&path);
    }
    let config = AppConfig::default();
    save_to_path(&config, &path)?;
    tracing::info!("Wrote default config to {}", path.display());
    Ok(config)
}

/// Parse and normalize the config at `path`.
pub fn load_from(path: &Path) -> Result<AppConfig, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str::<AppConfig>(&text)
        .map(AppConfig::normalized)
        .map_err(|source| ConfigError::ParseToml {
            path: path.to_path_buf(),
            source,
        })
}

/// Save the config to `path`, creating parent directories as needed.
pub fn save_to_path(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    let data = toml::to_string_pretty(config).map_err(|source| ConfigError::SerializeToml {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, data).map_err(|source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::table::PageSize;
    use tempfile::tempdir;

    #[test]
    fn saves_and_reloads_settings() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE_NAME);
        let mut config = AppConfig::default();
        config.dataset_path = PathBuf::from("data/TIX-ID.csv");
        config.delimiter = ';';
        config.word_cloud.extra_stopwords = vec!["yang".to_string()];
        save_to_path(&config, &path).unwrap();

        let loaded = load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "dataset_path = \"reviews_2024.csv\"\n").unwrap();

        let loaded = load_from(&path).unwrap();
        assert_eq!(loaded.dataset_path, PathBuf::from("reviews_2024.csv"));
        assert_eq!(loaded.delimiter, ',');
        assert_eq!(loaded.table.page_size(), PageSize::TwentyFive);
        assert_eq!(
            loaded.models.classifier_path,
            Some(PathBuf::from("svm_model.json"))
        );
        assert_eq!(loaded.word_cloud.max_words, 200);
    }

    #[test]
    fn out_of_range_values_are_normalized() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(
            &path,
            r#"
delimiter = "é"

[table]
default_page_size = 33

[word_cloud]
max_words = 0
min_font_size = 1.0
max_font_size = 2.0
extra_stopwords = ["  Dan ", ""]
"#,
        )
        .unwrap();

        let loaded = load_from(&path).unwrap();
        assert_eq!(loaded.delimiter, ',');
        assert_eq!(loaded.table.default_page_size, 25);
        assert_eq!(loaded.word_cloud.max_words, 1);
        assert_eq!(loaded.word_cloud.min_font_size, 4.0);
        assert_eq!(loaded.word_cloud.max_font_size, 4.0);
        assert_eq!(loaded.word_cloud.extra_stopwords, vec!["dan".to_string()]);
    }

    #[test]
    fn model_table_without_a_key_disables_that_artifact() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "[models]\nclassifier_path = \"clf.json\"\n").unwrap();

        let loaded = load_from(&path).unwrap();
        assert_eq!(loaded.models.classifier_path, Some(PathBuf::from("clf.json")));
        assert_eq!(loaded.models.vectorizer_path, None);
    }

    #[test]
    fn invalid_toml_is_reported_with_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "delimiter = [").unwrap();
        let err = load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseToml { .. }));
        assert!(err.to_string().contains(CONFIG_FILE_NAME));
    }
}
