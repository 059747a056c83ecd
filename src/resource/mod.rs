//! Builders for the supported resource types.
//!
//! Each resource type is a plain struct that is parsed and validated from an [`InputSet`] by
//! [`Resource::from_inputs`], and can then be described for the provisioning engine with
//! [`Resource::describe`] or rendered as CloudFormation properties. Conditional fields are held as
//! variants or `Option`s decided while parsing, so a resource that exists is always consistent.

mod ecr_repository;
mod listener;
mod load_balancer;
mod target_group;

pub use ecr_repository::{EcrRepository, Encryption};
pub use listener::{Listener, ListenerTls, DEFAULT_SSL_POLICY};
pub use load_balancer::LoadBalancer;
pub use target_group::{HealthCheck, Target, TargetGroup};

use serde_json::Value;
use serde_plain::{forward_display_to_serde, forward_from_str_to_serde};

use crate::{BuildError, InputSet, ResourceDescription};

/// Common operations for resource types.
pub trait Resource: Sized {
    /// The provider's name for the resource type, e.g. `aws_ecr_repository`.
    const RESOURCE_TYPE: &'static str;

    /// The CloudFormation resource type, e.g. `AWS::ECR::Repository`.
    const CLOUDFORMATION_TYPE: &'static str;

    /// Parse and validate the resource from `inputs`.
    ///
    /// # Errors
    ///
    /// - [`BuildError::MissingInput`] if a required input (always including `name`) is absent.
    /// - [`BuildError::InvalidEnum`] if a discriminator input has an unrecognized value.
    /// - [`BuildError::InvalidInput`] if an input has the wrong type or breaks a naming or range
    ///   rule.
    fn from_inputs(inputs: &InputSet) -> Result<Self, BuildError>;

    /// The resource's name, which is also its default `Name` tag.
    fn name(&self) -> &str;

    /// Describe the resource using the provider's field names.
    fn describe(&self) -> ResourceDescription;

    /// The resource's `Properties` in a CloudFormation template.
    ///
    /// # Errors
    ///
    /// Serialization errors are returned, though none are expected in practice.
    fn cloudformation_properties(&self) -> Result<Value, serde_json::Error>;
}

/// Build the description of resource type `R` from `inputs`.
///
/// This is a pure function of `inputs`: calling it twice with the same inputs gives equal
/// descriptions.
///
/// # Errors
///
/// See [`Resource::from_inputs`].
pub fn build<R: Resource>(inputs: &InputSet) -> Result<ResourceDescription, BuildError> {
    let resource = R::from_inputs(inputs)?;
    let description = resource.describe();
    tracing::debug!(
        resource_type = R::RESOURCE_TYPE,
        name = resource.name(),
        fields = description.fields.len(),
        "built resource description"
    );
    Ok(description)
}

/// The supported resource types, by provider name.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum ResourceKind {
    #[serde(rename = "aws_ecr_repository")]
    EcrRepository,

    #[serde(rename = "aws_lb")]
    LoadBalancer,

    #[serde(rename = "aws_lb_target_group")]
    TargetGroup,

    #[serde(rename = "aws_lb_listener")]
    Listener,
}

forward_display_to_serde!(ResourceKind);
forward_from_str_to_serde!(ResourceKind);

impl ResourceKind {
    /// Parse and validate a resource of this kind from `inputs`.
    ///
    /// # Errors
    ///
    /// See [`Resource::from_inputs`].
    pub fn instantiate(self, inputs: &InputSet) -> Result<AnyResource, BuildError> {
        Ok(match self {
            Self::EcrRepository => AnyResource::EcrRepository(EcrRepository::from_inputs(inputs)?),
            Self::LoadBalancer => AnyResource::LoadBalancer(LoadBalancer::from_inputs(inputs)?),
            Self::TargetGroup => AnyResource::TargetGroup(TargetGroup::from_inputs(inputs)?),
            Self::Listener => AnyResource::Listener(Listener::from_inputs(inputs)?),
        })
    }

    /// Build the description of a resource of this kind from `inputs`.
    ///
    /// # Errors
    ///
    /// See [`Resource::from_inputs`].
    pub fn build(self, inputs: &InputSet) -> Result<ResourceDescription, BuildError> {
        match self {
            Self::EcrRepository => build::<EcrRepository>(inputs),
            Self::LoadBalancer => build::<LoadBalancer>(inputs),
            Self::TargetGroup => build::<TargetGroup>(inputs),
            Self::Listener => build::<Listener>(inputs),
        }
    }
}

/// A resource of any supported type.
#[derive(Clone, Debug, PartialEq)]
pub enum AnyResource {
    EcrRepository(EcrRepository),
    LoadBalancer(LoadBalancer),
    TargetGroup(TargetGroup),
    Listener(Listener),
}

impl AnyResource {
    /// The kind of the inner resource.
    #[must_use]
    pub fn kind(&self) -> ResourceKind {
        match self {
            Self::EcrRepository(_) => ResourceKind::EcrRepository,
            Self::LoadBalancer(_) => ResourceKind::LoadBalancer,
            Self::TargetGroup(_) => ResourceKind::TargetGroup,
            Self::Listener(_) => ResourceKind::Listener,
        }
    }

    /// See [`Resource::name`].
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::EcrRepository(resource) => resource.name(),
            Self::LoadBalancer(resource) => resource.name(),
            Self::TargetGroup(resource) => resource.name(),
            Self::Listener(resource) => resource.name(),
        }
    }

    /// See [`Resource::describe`].
    #[must_use]
    pub fn describe(&self) -> ResourceDescription {
        match self {
            Self::EcrRepository(resource) => resource.describe(),
            Self::LoadBalancer(resource) => resource.describe(),
            Self::TargetGroup(resource) => resource.describe(),
            Self::Listener(resource) => resource.describe(),
        }
    }

    /// See [`Resource::CLOUDFORMATION_TYPE`].
    #[must_use]
    pub fn cloudformation_type(&self) -> &'static str {
        match self {
            Self::EcrRepository(_) => EcrRepository::CLOUDFORMATION_TYPE,
            Self::LoadBalancer(_) => LoadBalancer::CLOUDFORMATION_TYPE,
            Self::TargetGroup(_) => TargetGroup::CLOUDFORMATION_TYPE,
            Self::Listener(_) => Listener::CLOUDFORMATION_TYPE,
        }
    }

    /// See [`Resource::cloudformation_properties`].
    ///
    /// # Errors
    ///
    /// Serialization errors are returned, though none are expected in practice.
    pub fn cloudformation_properties(&self) -> Result<Value, serde_json::Error> {
        match self {
            Self::EcrRepository(resource) => resource.cloudformation_properties(),
            Self::LoadBalancer(resource) => resource.cloudformation_properties(),
            Self::TargetGroup(resource) => resource.cloudformation_properties(),
            Self::Listener(resource) => resource.cloudformation_properties(),
        }
    }
}
