//! Named inputs supplied to a resource builder.

use std::collections::BTreeMap;

use crate::{discriminant::Discriminant, BuildError, InvalidInputError, MissingInputError, Tags};

/// A single input value.
///
/// Inputs deserialize untagged, so `true`, `80`, `"MUTABLE"`, `["subnet-a"]` and
/// `{"Owner": "team-a"}` are all valid input values in JSON or TOML.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(untagged)]
pub enum InputValue {
    Bool(bool),
    Integer(i64),
    String(String),
    List(Vec<String>),
    Map(BTreeMap<String, String>),
}

impl InputValue {
    fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "a boolean",
            Self::Integer(_) => "an integer",
            Self::String(_) => "a string",
            Self::List(_) => "a list of strings",
            Self::Map(_) => "a map of strings",
        }
    }
}

impl From<bool> for InputValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for InputValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<u16> for InputValue {
    fn from(value: u16) -> Self {
        Self::Integer(value.into())
    }
}

impl From<&str> for InputValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for InputValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<String>> for InputValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl From<Vec<&str>> for InputValue {
    fn from(value: Vec<&str>) -> Self {
        Self::List(value.into_iter().map(str::to_string).collect())
    }
}

impl From<BTreeMap<String, String>> for InputValue {
    fn from(value: BTreeMap<String, String>) -> Self {
        Self::Map(value)
    }
}

/// An immutable set of named inputs.
///
/// Builders only ever read from an input set. Inputs that a builder doesn't recognize are
/// ignored, so the same set can be shared between related resources.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct InputSet(BTreeMap<String, InputValue>);

impl InputSet {
    /// Construct an empty input set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set input `name` to `value`, returning the modified set.
    #[must_use]
    pub fn set(mut self, name: impl Into<String>, value: impl Into<InputValue>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    /// Get the raw value of input `name`, if it was supplied.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&InputValue> {
        self.0.get(name)
    }

    /// Iterate over the supplied inputs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &InputValue)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub(crate) fn required_str(&self, name: &str) -> Result<&str, BuildError> {
        self.optional_str(name)?
            .ok_or_else(|| MissingInputError::new(name).into())
    }

    pub(crate) fn optional_str(&self, name: &str) -> Result<Option<&str>, BuildError> {
        match self.get(name) {
            None => Ok(None),
            Some(InputValue::String(value)) => Ok(Some(value)),
            Some(other) => Err(mismatch(name, "a string", other)),
        }
    }

    pub(crate) fn bool_or(&self, name: &str, default: bool) -> Result<bool, BuildError> {
        match self.get(name) {
            None => Ok(default),
            Some(InputValue::Bool(value)) => Ok(*value),
            Some(other) => Err(mismatch(name, "a boolean", other)),
        }
    }

    /// Integers may also be given as strings of digits, as variables often are.
    pub(crate) fn optional_integer(&self, name: &str) -> Result<Option<i64>, BuildError> {
        match self.get(name) {
            None => Ok(None),
            Some(InputValue::Integer(value)) => Ok(Some(*value)),
            Some(InputValue::String(value)) => value.trim().parse().map(Some).map_err(|_| {
                InvalidInputError::new(name, format!("expected an integer, got {value:?}")).into()
            }),
            Some(other) => Err(mismatch(name, "an integer", other)),
        }
    }

    /// An integer input constrained to `min..=max`.
    pub(crate) fn bounded_integer(
        &self,
        name: &str,
        min: i64,
        max: i64,
    ) -> Result<Option<i64>, BuildError> {
        match self.optional_integer(name)? {
            Some(value) if !(min..=max).contains(&value) => Err(InvalidInputError::new(
                name,
                format!("{value} is out of range {min}..={max}"),
            )
            .into()),
            value => Ok(value),
        }
    }

    pub(crate) fn optional_port(&self, name: &str) -> Result<Option<u16>, BuildError> {
        Ok(self
            .bounded_integer(name, 1, u16::MAX.into())?
            .and_then(|port| u16::try_from(port).ok()))
    }

    pub(crate) fn list(&self, name: &str) -> Result<Vec<String>, BuildError> {
        match self.get(name) {
            None => Ok(Vec::new()),
            Some(InputValue::List(values)) => Ok(values.clone()),
            Some(other) => Err(mismatch(name, "a list of strings", other)),
        }
    }

    pub(crate) fn required_list(&self, name: &str) -> Result<Vec<String>, BuildError> {
        if self.get(name).is_none() {
            return Err(MissingInputError::new(name).into());
        }
        self.list(name)
    }

    pub(crate) fn tags(&self) -> Result<Tags, BuildError> {
        match self.get("tags") {
            None => Ok(Tags::new()),
            Some(InputValue::Map(tags)) => Ok(tags.clone()),
            Some(other) => Err(mismatch("tags", "a map of strings", other)),
        }
    }

    pub(crate) fn discriminant<D: Discriminant>(&self, name: &str) -> Result<Option<D>, BuildError> {
        self.optional_str(name)?
            .map(|value| D::parse(name, value))
            .transpose()
            .map_err(Into::into)
    }
}

impl<K: Into<String>, V: Into<InputValue>> FromIterator<(K, V)> for InputSet {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}

fn mismatch(name: &str, expected: &str, actual: &InputValue) -> BuildError {
    InvalidInputError::new(name, format!("expected {expected}, got {}", actual.kind())).into()
}
