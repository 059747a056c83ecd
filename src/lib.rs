//! Typed builders for AWS resource descriptions.
//!
//! A builder takes an [`InputSet`] of named inputs and produces a [`ResourceDescription`]: the
//! fully-populated configuration of one resource, using the provider's field names. Builders
//! validate inputs up-front, populate conditional fields only when their discriminator calls for
//! them, and merge caller tags over a default `Name` tag.
//!
//! ```
//! use resource_descriptor::{build, EcrRepository, InputSet};
//!
//! let inputs = InputSet::new()
//!     .set("name", "repo1")
//!     .set("encryption_type", "KMS")
//!     .set("kms_key", "k1");
//! let description = build::<EcrRepository>(&inputs)?;
//! assert_eq!(description.get_str("encryption_configuration.kms_key"), Some("k1"));
//! assert_eq!(description.get_str("tags.Name"), Some("repo1"));
//! # Ok::<(), resource_descriptor::BuildError>(())
//! ```
#![warn(clippy::pedantic)]

mod description;
mod error;
mod input;
mod naming;
mod resource;
mod tag;

pub mod discriminant;
pub mod manifest;
pub mod template;

pub use description::ResourceDescription;
pub use discriminant::{
    Discriminant, EncryptionType, ImageTagMutability, LoadBalancerType, Protocol, TargetType,
};
pub use error::{BuildError, InvalidEnumError, InvalidInputError, MissingInputError};
pub use input::{InputSet, InputValue};
pub use manifest::{Manifest, ManifestEntry, ManifestError};
pub use resource::{
    build, AnyResource, EcrRepository, Encryption, HealthCheck, Listener, ListenerTls,
    LoadBalancer, Resource, ResourceKind, Target, TargetGroup, DEFAULT_SSL_POLICY,
};
pub use tag::{merge_tags, Tag, Tags, NAME_TAG};
pub use template::Template;
