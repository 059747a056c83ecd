//! Manifests: configuration files listing the resources to build.
//!
//! A manifest is an ordered list of resources, each with a logical id, a kind and its inputs. In
//! TOML:
//!
//! ```toml
//! description = "Application image registry"
//!
//! [[resources]]
//! logical_id = "Repository"
//! kind = "aws_ecr_repository"
//!
//! [resources.inputs]
//! name = "repo1"
//! encryption_type = "KMS"
//! kms_key = "arn:aws:kms:eu-west-1:012345678910:key/k1"
//! tags = { Owner = "team-a" }
//! ```
#![allow(clippy::module_name_repetitions)]

use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

use crate::{naming, AnyResource, BuildError, InputSet, ResourceDescription, ResourceKind};

/// A set of resources to build.
#[derive(Clone, Debug, Default, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// A description carried through to rendered templates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The resources, in build order.
    #[serde(default)]
    pub resources: Vec<ManifestEntry>,
}

/// One resource in a [`Manifest`].
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestEntry {
    /// Identifies the resource within the manifest.
    ///
    /// Logical ids must be alphanumeric and unique, since they become CloudFormation logical
    /// resource ids.
    pub logical_id: String,

    /// The resource type.
    pub kind: ResourceKind,

    /// The resource's inputs.
    #[serde(default)]
    pub inputs: InputSet,
}

/// Errors emitted when loading or building a manifest.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    /// The manifest file couldn't be read.
    #[error("failed to read manifest {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest file extension isn't one we know how to parse.
    #[error("unsupported manifest format for {}; expected a .json or .toml file", .0.display())]
    UnsupportedFormat(PathBuf),

    /// The manifest wasn't valid JSON, or didn't have the expected shape.
    #[error("invalid JSON manifest: {0}")]
    Json(#[from] serde_json::Error),

    /// The manifest wasn't valid TOML, or didn't have the expected shape.
    #[error("invalid TOML manifest: {0}")]
    Toml(#[from] toml::de::Error),

    /// A logical id was empty or contained non-alphanumeric characters.
    #[error("invalid logical id {0:?}; logical ids must be alphanumeric")]
    InvalidLogicalId(String),

    /// Two resources had the same logical id.
    #[error("duplicate logical id {0:?}")]
    DuplicateLogicalId(String),

    /// A resource failed to build.
    #[error("failed to build {logical_id}: {source}")]
    Build {
        logical_id: String,
        #[source]
        source: BuildError,
    },
}

impl Manifest {
    /// Load a manifest from a `.json` or `.toml` file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file can't be read or parsed, or if its logical ids are invalid.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        let extension = path.extension().and_then(|extension| extension.to_str());
        if !matches!(extension, Some("json" | "toml")) {
            return Err(ManifestError::UnsupportedFormat(path.to_path_buf()));
        }

        let contents = fs::read_to_string(path).map_err(|source| ManifestError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let manifest = if extension == Some("json") {
            Self::from_json(&contents)?
        } else {
            Self::from_toml(&contents)?
        };
        tracing::debug!(
            path = %path.display(),
            resources = manifest.resources.len(),
            "loaded manifest"
        );
        Ok(manifest)
    }

    /// Parse a manifest from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if `json` can't be parsed, or if its logical ids are invalid.
    pub fn from_json(json: &str) -> Result<Self, ManifestError> {
        let manifest: Self = serde_json::from_str(json)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Parse a manifest from TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if `toml` can't be parsed, or if its logical ids are invalid.
    pub fn from_toml(toml: &str) -> Result<Self, ManifestError> {
        let manifest: Self = toml::from_str(toml)?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Check that logical ids are alphanumeric and unique.
    ///
    /// # Errors
    ///
    /// Returns the first invalid or duplicate logical id.
    pub fn validate(&self) -> Result<(), ManifestError> {
        let mut seen = BTreeSet::new();
        for entry in &self.resources {
            if !naming::is_logical_id(&entry.logical_id) {
                return Err(ManifestError::InvalidLogicalId(entry.logical_id.clone()));
            }
            if !seen.insert(entry.logical_id.as_str()) {
                return Err(ManifestError::DuplicateLogicalId(entry.logical_id.clone()));
            }
        }
        Ok(())
    }

    /// Parse and validate every resource, in order.
    ///
    /// # Errors
    ///
    /// Returns the first resource that fails to build, identified by logical id.
    pub fn resources(&self) -> Result<Vec<(String, AnyResource)>, ManifestError> {
        self.validate()?;
        self.resources
            .iter()
            .map(|entry| {
                entry
                    .kind
                    .instantiate(&entry.inputs)
                    .map(|resource| (entry.logical_id.clone(), resource))
                    .map_err(|source| ManifestError::Build {
                        logical_id: entry.logical_id.clone(),
                        source,
                    })
            })
            .collect()
    }

    /// Build the description of every resource, in order.
    ///
    /// # Errors
    ///
    /// Returns the first resource that fails to build, identified by logical id.
    pub fn build(&self) -> Result<Vec<(String, ResourceDescription)>, ManifestError> {
        Ok(self
            .resources()?
            .into_iter()
            .map(|(logical_id, resource)| (logical_id, resource.describe()))
            .collect())
    }
}
