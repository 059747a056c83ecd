//! Rendering resources as a CloudFormation template.

use serde_json::{json, Map, Value};

use crate::{AnyResource, Manifest, ManifestError};

/// The only template format version CloudFormation has ever defined.
pub const TEMPLATE_FORMAT_VERSION: &str = "2010-09-09";

/// A CloudFormation template made of built resources.
///
/// The rendered body can be passed inline to CloudFormation stack and change set APIs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Template {
    /// The template `Description`.
    pub description: Option<String>,

    /// Resources by logical id, in the order they were added.
    pub resources: Vec<(String, AnyResource)>,
}

impl Template {
    /// Build every resource in `manifest` into a template.
    ///
    /// # Errors
    ///
    /// See [`Manifest::resources`].
    pub fn from_manifest(manifest: &Manifest) -> Result<Self, ManifestError> {
        Ok(Self {
            description: manifest.description.clone(),
            resources: manifest.resources()?,
        })
    }

    /// Render the template body as a JSON value.
    ///
    /// # Errors
    ///
    /// Serialization errors are returned, though none are expected in practice.
    pub fn body(&self) -> Result<Value, serde_json::Error> {
        let mut resources = Map::new();
        for (logical_id, resource) in &self.resources {
            let properties = resource.cloudformation_properties()?;
            resources.insert(
                logical_id.clone(),
                json!({
                    "Type": resource.cloudformation_type(),
                    "Properties": properties,
                }),
            );
        }

        let mut body = Map::new();
        body.insert(
            "AWSTemplateFormatVersion".to_string(),
            TEMPLATE_FORMAT_VERSION.into(),
        );
        if let Some(description) = &self.description {
            body.insert("Description".to_string(), description.as_str().into());
        }
        body.insert("Resources".to_string(), resources.into());
        tracing::debug!(resources = self.resources.len(), "rendered template");
        Ok(body.into())
    }

    /// Render the template body as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Serialization errors are returned, though none are expected in practice.
    pub fn body_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.body()?)
    }
}
