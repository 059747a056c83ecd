//! The output of a resource builder.

use serde_json::{Map, Value};

use crate::Tags;

/// The complete desired configuration of one resource.
///
/// Field names are those of the provider's resource schema (e.g. `scan_on_push`,
/// `load_balancer_type`). Nested blocks are nested maps. Conditional fields that don't apply are
/// absent, never `null`.
#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct ResourceDescription {
    /// The provider's name for the resource type, e.g. `aws_ecr_repository`.
    #[serde(rename = "type")]
    pub resource_type: String,

    /// The populated fields.
    pub fields: Map<String, Value>,
}

impl ResourceDescription {
    /// Look up a field by dotted path, e.g. `encryption_configuration.kms_key`.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&Value> {
        let mut segments = path.split('.');
        let mut value = self.fields.get(segments.next()?)?;
        for segment in segments {
            value = value.as_object()?.get(segment)?;
        }
        Some(value)
    }

    /// Look up a string field by dotted path.
    #[must_use]
    pub fn get_str(&self, path: &str) -> Option<&str> {
        self.get(path).and_then(Value::as_str)
    }

    /// Whether the field at `path` is populated.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.get(path).is_some()
    }

    /// The resource's final tag map.
    #[must_use]
    pub fn tags(&self) -> Tags {
        self.fields
            .get("tags")
            .and_then(Value::as_object)
            .map(|tags| {
                tags.iter()
                    .filter_map(|(key, value)| Some((key.clone(), value.as_str()?.to_string())))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Accumulates the fields of a description.
#[derive(Debug, Default)]
pub(crate) struct Fields(Map<String, Value>);

impl Fields {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn set(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.0.insert(name.to_string(), value.into());
        self
    }

    /// Set `name` only if `value` is `Some`; otherwise the field is left out entirely.
    pub(crate) fn set_opt(self, name: &str, value: Option<impl Into<Value>>) -> Self {
        match value {
            Some(value) => self.set(name, value),
            None => {
                tracing::debug!(field = name, "omitting conditional field");
                self
            }
        }
    }

    pub(crate) fn block(self, name: &str, block: Fields) -> Self {
        self.set(name, block.0)
    }

    pub(crate) fn tags(self, tags: &Tags) -> Self {
        let tags: Map<_, _> = tags
            .iter()
            .map(|(key, value)| (key.clone(), Value::from(value.as_str())))
            .collect();
        self.set("tags", tags)
    }

    pub(crate) fn describe(self, resource_type: &str) -> ResourceDescription {
        ResourceDescription {
            resource_type: resource_type.to_string(),
            fields: self.0,
        }
    }
}
