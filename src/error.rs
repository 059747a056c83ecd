use std::fmt;

/// Errors emitted when building a resource description.
#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum BuildError {
    /// A required input was not supplied.
    #[error(transparent)]
    MissingInput(#[from] MissingInputError),

    /// A discriminator input held a value outside its recognized set.
    #[error(transparent)]
    InvalidEnum(#[from] InvalidEnumError),

    /// An input was supplied with the wrong type, or broke a naming or range rule.
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),
}

impl BuildError {
    /// The name of the input that caused the error.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::MissingInput(error) => &error.field,
            Self::InvalidEnum(error) => &error.field,
            Self::InvalidInput(error) => &error.field,
        }
    }
}

/// A required input was not supplied.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("missing required input `{field}`")]
pub struct MissingInputError {
    /// The name of the missing input.
    pub field: String,
}

impl MissingInputError {
    pub(crate) fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }
}

/// A discriminator input held a value outside its recognized set.
///
/// For example, an `encryption_type` of `"DES"` would be rejected, since only `"AES256"` and
/// `"KMS"` are recognized.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InvalidEnumError {
    /// The name of the offending input.
    pub field: String,

    /// The value that was supplied.
    pub value: String,

    /// The values that would have been accepted.
    pub expected: &'static [&'static str],
}

impl fmt::Display for InvalidEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid value {:?} for input `{}`; expected one of: {}",
            self.value,
            self.field,
            self.expected.join(", ")
        )
    }
}

impl std::error::Error for InvalidEnumError {}

/// An input was supplied with the wrong type, or broke a naming or range rule.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("invalid input `{field}`: {reason}")]
pub struct InvalidInputError {
    /// The name of the offending input.
    pub field: String,

    /// What was wrong with it.
    pub reason: String,
}

impl InvalidInputError {
    pub(crate) fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
