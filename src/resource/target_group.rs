use serde_json::Value;

use crate::{
    description::Fields,
    discriminant::{Protocol, TargetType},
    merge_tags, naming, BuildError, InputSet, InvalidInputError, MissingInputError, Resource,
    ResourceDescription, Tag, Tags,
};

/// A load balancer target group (`aws_lb_target_group`).
#[derive(Clone, Debug, PartialEq)]
pub struct TargetGroup {
    /// The target group name.
    pub name: String,

    /// What the group routes to.
    pub target: Target,

    /// How targets are health checked.
    pub health_check: HealthCheck,

    /// The final tag map, including the default `Name` tag.
    pub tags: Tags,
}

/// The targets of a target group.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Target {
    /// A single Lambda function, which has no port, protocol or VPC.
    Lambda,

    /// Instances, IP addresses or application load balancers reached over the network.
    Network {
        /// The kind of target; never [`TargetType::Lambda`].
        target_type: TargetType,

        /// The port targets receive traffic on.
        port: u16,

        /// The protocol used to route traffic to targets.
        protocol: Protocol,

        /// The VPC the targets live in.
        vpc_id: String,
    },
}

impl Target {
    /// The `target_type` discriminator for this target.
    #[must_use]
    pub fn target_type(&self) -> TargetType {
        match self {
            Self::Lambda => TargetType::Lambda,
            Self::Network { target_type, .. } => *target_type,
        }
    }

    fn port(&self) -> Option<u16> {
        match self {
            Self::Lambda => None,
            Self::Network { port, .. } => Some(*port),
        }
    }

    fn protocol(&self) -> Option<Protocol> {
        match self {
            Self::Lambda => None,
            Self::Network { protocol, .. } => Some(*protocol),
        }
    }

    fn vpc_id(&self) -> Option<&str> {
        match self {
            Self::Lambda => None,
            Self::Network { vpc_id, .. } => Some(vpc_id),
        }
    }
}

/// Health check settings for a target group.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HealthCheck {
    /// The protocol used for health checks.
    pub protocol: Protocol,

    /// The destination path; only set for HTTP and HTTPS health checks.
    pub path: Option<String>,

    /// Status codes that count as healthy; only set for HTTP and HTTPS health checks.
    pub matcher: Option<String>,

    /// Seconds between health checks.
    pub interval: i64,

    /// Consecutive successes before an unhealthy target is considered healthy.
    pub healthy_threshold: i64,

    /// Consecutive failures before a healthy target is considered unhealthy.
    pub unhealthy_threshold: i64,
}

impl HealthCheck {
    fn from_inputs(inputs: &InputSet) -> Result<Self, BuildError> {
        let protocol = inputs
            .discriminant::<Protocol>("health_check_protocol")?
            .unwrap_or_default();

        let path = inputs.optional_str("health_check_path")?;
        if let Some(path) = path.filter(|path| !path.starts_with('/')) {
            return Err(InvalidInputError::new(
                "health_check_path",
                format!("{path:?} must start with `/`"),
            )
            .into());
        }
        let matcher = inputs.optional_str("health_check_matcher")?;

        let (path, matcher) = if protocol.is_http() {
            (
                Some(path.unwrap_or("/").to_string()),
                Some(matcher.unwrap_or("200").to_string()),
            )
        } else {
            if path.is_some() || matcher.is_some() {
                tracing::debug!(%protocol, "ignoring health check path and matcher");
            }
            (None, None)
        };

        Ok(Self {
            protocol,
            path,
            matcher,
            interval: inputs
                .bounded_integer("health_check_interval", 5, 300)?
                .unwrap_or(30),
            healthy_threshold: inputs
                .bounded_integer("healthy_threshold", 2, 10)?
                .unwrap_or(3),
            unhealthy_threshold: inputs
                .bounded_integer("unhealthy_threshold", 2, 10)?
                .unwrap_or(3),
        })
    }
}

impl Resource for TargetGroup {
    const RESOURCE_TYPE: &'static str = "aws_lb_target_group";
    const CLOUDFORMATION_TYPE: &'static str = "AWS::ElasticLoadBalancingV2::TargetGroup";

    fn from_inputs(inputs: &InputSet) -> Result<Self, BuildError> {
        let name = inputs.required_str("name")?;
        naming::elb_name("name", name, false)?;

        let port = inputs.optional_port("port")?;
        let protocol = inputs.discriminant::<Protocol>("protocol")?;
        let vpc_id = inputs.optional_str("vpc_id")?;
        let target = match inputs
            .discriminant::<TargetType>("target_type")?
            .unwrap_or_default()
        {
            TargetType::Lambda => {
                if port.is_some() || protocol.is_some() || vpc_id.is_some() {
                    tracing::debug!(name, "ignoring port, protocol and vpc_id for lambda targets");
                }
                Target::Lambda
            }
            target_type => Target::Network {
                target_type,
                port: port.ok_or_else(|| MissingInputError::new("port"))?,
                protocol: protocol.unwrap_or_default(),
                vpc_id: vpc_id
                    .ok_or_else(|| MissingInputError::new("vpc_id"))?
                    .to_string(),
            },
        };

        Ok(Self {
            name: name.to_string(),
            target,
            health_check: HealthCheck::from_inputs(inputs)?,
            tags: merge_tags(name, &inputs.tags()?),
        })
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn describe(&self) -> ResourceDescription {
        let health_check = &self.health_check;
        Fields::new()
            .set("name", self.name.as_str())
            .set("target_type", self.target.target_type().to_string())
            .set_opt("port", self.target.port())
            .set_opt("protocol", self.target.protocol().map(|p| p.to_string()))
            .set_opt("vpc_id", self.target.vpc_id())
            .block(
                "health_check",
                Fields::new()
                    .set("enabled", true)
                    .set("protocol", health_check.protocol.to_string())
                    .set_opt("path", health_check.path.as_deref())
                    .set_opt("matcher", health_check.matcher.as_deref())
                    .set("interval", health_check.interval)
                    .set("healthy_threshold", health_check.healthy_threshold)
                    .set("unhealthy_threshold", health_check.unhealthy_threshold),
            )
            .tags(&self.tags)
            .describe(Self::RESOURCE_TYPE)
    }

    fn cloudformation_properties(&self) -> Result<Value, serde_json::Error> {
        let health_check = &self.health_check;
        serde_json::to_value(Properties {
            name: &self.name,
            target_type: self.target.target_type(),
            port: self.target.port(),
            protocol: self.target.protocol(),
            vpc_id: self.target.vpc_id(),
            health_check_enabled: true,
            health_check_protocol: health_check.protocol,
            health_check_path: health_check.path.as_deref(),
            matcher: health_check
                .matcher
                .as_deref()
                .map(|http_code| Matcher { http_code }),
            health_check_interval_seconds: health_check.interval,
            healthy_threshold_count: health_check.healthy_threshold,
            unhealthy_threshold_count: health_check.unhealthy_threshold,
            tags: Tag::list(&self.tags),
        })
    }
}

#[derive(serde::Serialize)]
#[serde(rename_all = "PascalCase")]
struct Properties<'a> {
    name: &'a str,
    target_type: TargetType,
    #[serde(skip_serializing_if = "Option::is_none")]
    port: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    protocol: Option<Protocol>,
    #[serde(skip_serializing_if = "Option::is_none")]
    vpc_id: Option<&'a str>,
    health_check_enabled: bool,
    health_check_protocol: Protocol,
    #[serde(skip_serializing_if = "Option::is_none")]
    health_check_path: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    matcher: Option<Matcher<'a>>,
    health_check_interval_seconds: i64,
    healthy_threshold_count: i64,
    unhealthy_threshold_count: i64,
    tags: Vec<Tag>,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "PascalCase")]
struct Matcher<'a> {
    http_code: &'a str,
}
