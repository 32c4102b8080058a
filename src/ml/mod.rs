//! Pre-trained model artifacts shipped alongside the dataset.
//!
//! The dashboard only loads and reports these; nothing here runs inference.

mod artifacts;

pub use artifacts::{
    ArtifactError, ClassifierArtifact, ModelArtifacts, VectorizerArtifact, load_artifact,
};
