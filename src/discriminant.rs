//! Enumerated inputs whose values decide how other fields are populated.
#![allow(clippy::module_name_repetitions)]

use serde::de::DeserializeOwned;
use serde_plain::forward_display_to_serde;

use crate::InvalidEnumError;

/// Common operations for enumerated inputs.
pub trait Discriminant:
    Copy + std::fmt::Debug + std::fmt::Display + DeserializeOwned + private::Sealed
{
    /// Every recognized value, as it appears in inputs and descriptions.
    const VALUES: &'static [&'static str];

    /// Parse the value of input `field`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidEnumError`] if `value` is not one of [`VALUES`](Self::VALUES). Matching is
    /// exact, so `"kms"` is not accepted in place of `"KMS"`.
    fn parse(field: &str, value: &str) -> Result<Self, InvalidEnumError> {
        serde_plain::from_str(value).map_err(|_| InvalidEnumError {
            field: field.to_string(),
            value: value.to_string(),
            expected: Self::VALUES,
        })
    }
}

/// Server-side encryption for an ECR repository.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub enum EncryptionType {
    /// Amazon S3-managed keys.
    #[default]
    #[serde(rename = "AES256")]
    Aes256,

    /// A KMS key, either AWS managed or the one named by `kms_key`.
    #[serde(rename = "KMS")]
    Kms,
}

impl Discriminant for EncryptionType {
    const VALUES: &'static [&'static str] = &["AES256", "KMS"];
}

forward_display_to_serde!(EncryptionType);

/// Whether image tags in an ECR repository can be overwritten.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImageTagMutability {
    #[default]
    Mutable,
    Immutable,
}

impl Discriminant for ImageTagMutability {
    const VALUES: &'static [&'static str] = &["MUTABLE", "IMMUTABLE"];
}

forward_display_to_serde!(ImageTagMutability);

/// The kind of Elastic Load Balancer.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadBalancerType {
    #[default]
    Application,
    Network,
    Gateway,
}

impl Discriminant for LoadBalancerType {
    const VALUES: &'static [&'static str] = &["application", "network", "gateway"];
}

forward_display_to_serde!(LoadBalancerType);

/// Protocols understood by target groups, health checks and listeners.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Protocol {
    #[default]
    Http,
    Https,
    Tcp,
    Tls,
    Udp,
    TcpUdp,
    Geneve,
}

impl Protocol {
    /// `HTTP` or `HTTPS`, i.e. protocols where paths and status codes mean something.
    #[must_use]
    pub fn is_http(self) -> bool {
        matches!(self, Self::Http | Self::Https)
    }

    /// `HTTPS` or `TLS`, i.e. protocols that terminate TLS and so need a certificate.
    #[must_use]
    pub fn is_secure(self) -> bool {
        matches!(self, Self::Https | Self::Tls)
    }
}

impl Discriminant for Protocol {
    const VALUES: &'static [&'static str] =
        &["HTTP", "HTTPS", "TCP", "TLS", "UDP", "TCP_UDP", "GENEVE"];
}

forward_display_to_serde!(Protocol);

/// The type of target registered with a target group.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetType {
    #[default]
    Instance,
    Ip,
    Lambda,
    Alb,
}

impl Discriminant for TargetType {
    const VALUES: &'static [&'static str] = &["instance", "ip", "lambda", "alb"];
}

forward_display_to_serde!(TargetType);

mod private {
    /// An unreachable trait used to prevent some traits from being implemented outside the crate.
    pub trait Sealed {}

    impl Sealed for super::EncryptionType {}
    impl Sealed for super::ImageTagMutability {}
    impl Sealed for super::LoadBalancerType {}
    impl Sealed for super::Protocol {}
    impl Sealed for super::TargetType {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_values<D: Discriminant + PartialEq>() {
        for value in D::VALUES {
            let parsed = D::parse("field", value).unwrap();
            assert_eq!(&parsed.to_string(), value);
        }
    }

    #[test]
    fn values_round_trip_through_display() {
        assert_values::<EncryptionType>();
        assert_values::<ImageTagMutability>();
        assert_values::<LoadBalancerType>();
        assert_values::<Protocol>();
        assert_values::<TargetType>();
    }

    #[test]
    fn unknown_value() {
        let error = EncryptionType::parse("encryption_type", "kms").unwrap_err();
        assert_eq!(error.field, "encryption_type");
        assert_eq!(error.value, "kms");
        assert_eq!(error.expected, &["AES256", "KMS"]);
    }

    #[test]
    fn protocol_classes() {
        assert!(Protocol::Https.is_http());
        assert!(Protocol::Https.is_secure());
        assert!(Protocol::Tls.is_secure());
        assert!(!Protocol::Tls.is_http());
        assert!(!Protocol::TcpUdp.is_secure());
        assert_eq!(Protocol::TcpUdp.to_string(), "TCP_UDP");
    }
}
