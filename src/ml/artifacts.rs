use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("Failed to read model artifact {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid model artifact {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Serialized sentiment classifier.
///
/// Only the identifying fields are typed; parameters are kept as raw JSON.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassifierArtifact {
    #[serde(default)]
    pub model_id: Option<String>,
    #[serde(default = "default_model_version")]
    pub model_version: i64,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(flatten)]
    pub parameters: BTreeMap<String, serde_json::Value>,
}

/// Serialized text vectorizer paired with the classifier.
#[derive(Debug, Clone, Deserialize)]
pub struct VectorizerArtifact {
    #[serde(default)]
    pub vectorizer_id: Option<String>,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub vocabulary: BTreeMap<String, usize>,
    #[serde(flatten)]
    pub parameters: BTreeMap<String, serde_json::Value>,
}

fn default_model_version() -> i64 {
    1
}

impl ClassifierArtifact {
    /// Short human-readable identity for the sidebar.
    pub fn describe(&self) -> String {
        let name = self
            .model_id
            .as_deref()
            .or(self.kind.as_deref())
            .unwrap_or("classifier");
        format!(
            "{name} v{} ({} classes)",
            self.model_version,
            self.classes.len()
        )
    }
}

impl VectorizerArtifact {
    pub fn describe(&self) -> String {
        let name = self
            .vectorizer_id
            .as_deref()
            .or(self.kind.as_deref())
            .unwrap_or("vectorizer");
        format!("{name} ({} terms)", self.vocabulary.len())
    }
}

/// Read and deserialize a JSON artifact.
pub fn load_artifact<T: DeserializeOwned>(path: &Path) -> Result<T, ArtifactError> {
    let bytes = std::fs::read(path).map_err(|source| ArtifactError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| ArtifactError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Optional collaborators loaded at startup.
///
/// A missing or broken artifact leaves its slot empty; the dashboard keeps
/// working without it.
#[derive(Debug, Clone, Default)]
pub struct ModelArtifacts {
    pub classifier: Option<ClassifierArtifact>,
    pub vectorizer: Option<VectorizerArtifact>,
}

impl ModelArtifacts {
    pub fn load(classifier_path: Option<&Path>, vectorizer_path: Option<&Path>) -> Self {
        Self {
            classifier: classifier_path.and_then(|path| load_optional(path, "classifier")),
            vectorizer: vectorizer_path.and_then(|path| load_optional(path, "vectorizer")),
        }
    }
}

fn load_optional<T: DeserializeOwned>(path: &Path, what: &str) -> Option<T> {
    match load_artifact(path) {
        Ok(artifact) => {
            tracing::info!("Loaded {what} artifact from {}", path.display());
            Some(artifact)
        }
        Err(err) => {
            tracing::warn!("Continuing without {what}: {err}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn loads_classifier_and_keeps_unknown_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("svm.json");
        std::fs::write(
            &path,
            r#"{"model_id":"svm_sentiment","kind":"linear_svm","classes":["negatif","netral","positif"],"coef":[[0.1]],"intercept":[0.0]}"#,
        )
        .unwrap();
        let classifier: ClassifierArtifact = load_artifact(&path).unwrap();
        assert_eq!(classifier.model_version, 1);
        assert_eq!(classifier.classes.len(), 3);
        assert!(classifier.parameters.contains_key("coef"));
        assert_eq!(classifier.describe(), "svm_sentiment v1 (3 classes)");
    }

    #[test]
    fn missing_and_invalid_artifacts_are_skipped() {
        let dir = tempdir().unwrap();
        let broken = dir.path().join("tfidf.json");
        std::fs::write(&broken, "not json").unwrap();
        let artifacts = ModelArtifacts::load(Some(&dir.path().join("absent.json")), Some(&broken));
        assert!(artifacts.classifier.is_none());
        assert!(artifacts.vectorizer.is_none());
    }

    #[test]
    fn vectorizer_reports_vocabulary_size() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tfidf.json");
        std::fs::write(&path, r#"{"kind":"tfidf","vocabulary":{"bagus":0,"lambat":1}}"#).unwrap();
        let artifacts = ModelArtifacts::load(None, Some(&path));
        let vectorizer = artifacts.vectorizer.unwrap();
        assert_eq!(vectorizer.describe(), "tfidf (2 terms)");
    }
}
