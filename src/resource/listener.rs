use serde_json::Value;

use crate::{
    description::Fields, discriminant::Protocol, merge_tags, BuildError, InputSet,
    InvalidInputError, MissingInputError, Resource, ResourceDescription, Tags,
};

/// The security policy used for TLS listeners when none is given.
pub const DEFAULT_SSL_POLICY: &str = "ELBSecurityPolicy-2016-08";

const DEFAULT_PORT: u16 = 80;

/// A load balancer listener forwarding to a single target group (`aws_lb_listener`).
#[derive(Clone, Debug, PartialEq)]
pub struct Listener {
    /// Used for the default `Name` tag; listeners have no name of their own.
    pub name: String,

    /// The load balancer the listener belongs to.
    pub load_balancer_arn: String,

    /// The port the listener accepts connections on.
    pub port: u16,

    /// The protocol clients connect with.
    pub protocol: Protocol,

    /// Certificate settings, present iff `protocol` is `HTTPS` or `TLS`.
    pub tls: Option<ListenerTls>,

    /// The target group that receives forwarded requests.
    pub target_group_arn: String,

    /// The final tag map, including the default `Name` tag.
    pub tags: Tags,
}

/// Certificate settings for a TLS-terminating listener.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ListenerTls {
    /// The ARN of the default server certificate.
    pub certificate_arn: String,

    /// The name of the security policy.
    pub ssl_policy: String,
}

impl Resource for Listener {
    const RESOURCE_TYPE: &'static str = "aws_lb_listener";
    const CLOUDFORMATION_TYPE: &'static str = "AWS::ElasticLoadBalancingV2::Listener";

    fn from_inputs(inputs: &InputSet) -> Result<Self, BuildError> {
        let name = inputs.required_str("name")?;
        if name.is_empty() {
            return Err(InvalidInputError::new("name", "must not be empty").into());
        }
        let protocol = inputs
            .discriminant::<Protocol>("protocol")?
            .unwrap_or_default();

        let certificate_arn = inputs.optional_str("certificate_arn")?;
        let ssl_policy = inputs.optional_str("ssl_policy")?;
        let tls = if protocol.is_secure() {
            Some(ListenerTls {
                certificate_arn: certificate_arn
                    .ok_or_else(|| MissingInputError::new("certificate_arn"))?
                    .to_string(),
                ssl_policy: ssl_policy.unwrap_or(DEFAULT_SSL_POLICY).to_string(),
            })
        } else {
            if certificate_arn.is_some() || ssl_policy.is_some() {
                tracing::debug!(name, %protocol, "ignoring TLS settings for plaintext listener");
            }
            None
        };

        Ok(Self {
            name: name.to_string(),
            load_balancer_arn: inputs.required_str("load_balancer_arn")?.to_string(),
            port: inputs.optional_port("port")?.unwrap_or(DEFAULT_PORT),
            protocol,
            tls,
            target_group_arn: inputs.required_str("target_group_arn")?.to_string(),
            tags: merge_tags(name, &inputs.tags()?),
        })
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn describe(&self) -> ResourceDescription {
        Fields::new()
            .set("load_balancer_arn", self.load_balancer_arn.as_str())
            .set("port", self.port)
            .set("protocol", self.protocol.to_string())
            .set_opt(
                "ssl_policy",
                self.tls.as_ref().map(|tls| tls.ssl_policy.as_str()),
            )
            .set_opt(
                "certificate_arn",
                self.tls.as_ref().map(|tls| tls.certificate_arn.as_str()),
            )
            .block(
                "default_action",
                Fields::new()
                    .set("type", "forward")
                    .set("target_group_arn", self.target_group_arn.as_str()),
            )
            .tags(&self.tags)
            .describe(Self::RESOURCE_TYPE)
    }

    /// CloudFormation listeners don't accept tags, so the tag map isn't rendered.
    fn cloudformation_properties(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(Properties {
            load_balancer_arn: &self.load_balancer_arn,
            port: self.port,
            protocol: self.protocol,
            ssl_policy: self.tls.as_ref().map(|tls| tls.ssl_policy.as_str()),
            certificates: self.tls.as_ref().map(|tls| {
                vec![Certificate {
                    certificate_arn: &tls.certificate_arn,
                }]
            }),
            default_actions: vec![Action {
                r#type: "forward",
                target_group_arn: &self.target_group_arn,
            }],
        })
    }
}

#[derive(serde::Serialize)]
#[serde(rename_all = "PascalCase")]
struct Properties<'a> {
    load_balancer_arn: &'a str,
    port: u16,
    protocol: Protocol,
    #[serde(skip_serializing_if = "Option::is_none")]
    ssl_policy: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    certificates: Option<Vec<Certificate<'a>>>,
    default_actions: Vec<Action<'a>>,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "PascalCase")]
struct Certificate<'a> {
    certificate_arn: &'a str,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "PascalCase")]
struct Action<'a> {
    r#type: &'static str,
    target_group_arn: &'a str,
}
