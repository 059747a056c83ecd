use serde_json::Value;

use crate::{
    description::Fields, discriminant::LoadBalancerType, merge_tags, naming, BuildError, InputSet,
    Resource, ResourceDescription, Tag, Tags,
};

const DEFAULT_IDLE_TIMEOUT: i64 = 60;

/// An Elastic Load Balancer (`aws_lb`).
#[derive(Clone, Debug, PartialEq)]
pub struct LoadBalancer {
    /// The load balancer name.
    pub name: String,

    /// Whether the load balancer is internal rather than internet-facing.
    pub internal: bool,

    /// The kind of load balancer.
    pub load_balancer_type: LoadBalancerType,

    /// Security groups to attach.
    ///
    /// Gateway load balancers don't support security groups, so this is `None` for them.
    pub security_groups: Option<Vec<String>>,

    /// Subnets to attach to.
    pub subnets: Vec<String>,

    /// Whether deletion is blocked by the API.
    pub enable_deletion_protection: bool,

    /// Connection idle timeout in seconds, only meaningful for application load balancers.
    pub idle_timeout: Option<i64>,

    /// The final tag map, including the default `Name` tag.
    pub tags: Tags,
}

impl Resource for LoadBalancer {
    const RESOURCE_TYPE: &'static str = "aws_lb";
    const CLOUDFORMATION_TYPE: &'static str = "AWS::ElasticLoadBalancingV2::LoadBalancer";

    fn from_inputs(inputs: &InputSet) -> Result<Self, BuildError> {
        let name = inputs.required_str("name")?;
        naming::elb_name("name", name, true)?;

        let load_balancer_type = inputs
            .discriminant::<LoadBalancerType>("load_balancer_type")?
            .unwrap_or_default();

        let security_groups = inputs.list("security_groups")?;
        let security_groups = if load_balancer_type == LoadBalancerType::Gateway {
            if !security_groups.is_empty() {
                tracing::debug!(name, "ignoring security_groups for gateway load balancer");
            }
            None
        } else {
            Some(security_groups)
        };

        let idle_timeout = inputs.bounded_integer("idle_timeout", 1, 4000)?;
        let idle_timeout = if load_balancer_type == LoadBalancerType::Application {
            Some(idle_timeout.unwrap_or(DEFAULT_IDLE_TIMEOUT))
        } else {
            None
        };

        Ok(Self {
            name: name.to_string(),
            internal: inputs.bool_or("internal", false)?,
            load_balancer_type,
            security_groups,
            subnets: inputs.required_list("subnets")?,
            enable_deletion_protection: inputs.bool_or("enable_deletion_protection", false)?,
            idle_timeout,
            tags: merge_tags(name, &inputs.tags()?),
        })
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn describe(&self) -> ResourceDescription {
        Fields::new()
            .set("name", self.name.as_str())
            .set("internal", self.internal)
            .set("load_balancer_type", self.load_balancer_type.to_string())
            .set_opt("security_groups", self.security_groups.clone())
            .set("subnets", self.subnets.clone())
            .set("enable_deletion_protection", self.enable_deletion_protection)
            .set_opt("idle_timeout", self.idle_timeout)
            .tags(&self.tags)
            .describe(Self::RESOURCE_TYPE)
    }

    fn cloudformation_properties(&self) -> Result<Value, serde_json::Error> {
        let mut attributes = vec![Attribute {
            key: "deletion_protection.enabled",
            value: self.enable_deletion_protection.to_string(),
        }];
        if let Some(idle_timeout) = self.idle_timeout {
            attributes.push(Attribute {
                key: "idle_timeout.timeout_seconds",
                value: idle_timeout.to_string(),
            });
        }

        serde_json::to_value(Properties {
            name: &self.name,
            scheme: if self.internal {
                "internal"
            } else {
                "internet-facing"
            },
            r#type: self.load_balancer_type,
            security_groups: self.security_groups.as_deref(),
            subnets: &self.subnets,
            load_balancer_attributes: attributes,
            tags: Tag::list(&self.tags),
        })
    }
}

#[derive(serde::Serialize)]
#[serde(rename_all = "PascalCase")]
struct Properties<'a> {
    name: &'a str,
    scheme: &'static str,
    r#type: LoadBalancerType,
    #[serde(skip_serializing_if = "Option::is_none")]
    security_groups: Option<&'a [String]>,
    subnets: &'a [String],
    load_balancer_attributes: Vec<Attribute>,
    tags: Vec<Tag>,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "PascalCase")]
struct Attribute {
    key: &'static str,
    value: String,
}
