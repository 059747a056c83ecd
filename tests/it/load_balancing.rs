use assert_matches::assert_matches;

use resource_descriptor::{
    build, BuildError, InputSet, Listener, LoadBalancer, ResourceKind, TargetGroup,
};

use crate::common::tags;

#[test]
fn load_balancer_type_verbatim() {
    let inputs = InputSet::new()
        .set("name", "app-nlb")
        .set("load_balancer_type", "network")
        .set("internal", true)
        .set("subnets", vec!["subnet-a"]);

    let description = build::<LoadBalancer>(&inputs).unwrap();
    assert_eq!(description.resource_type, "aws_lb");
    assert_eq!(description.get_str("load_balancer_type"), Some("network"));
    assert_eq!(description.get("internal").unwrap(), true);
    assert_eq!(description.tags(), tags(&[("Name", "app-nlb")]));
}

#[test]
fn load_balancer_rejects_internal_prefix() {
    let inputs = InputSet::new()
        .set("name", "internal-alb")
        .set("subnets", vec!["subnet-a"]);
    assert_matches!(
        build::<LoadBalancer>(&inputs),
        Err(BuildError::InvalidInput(invalid)) if invalid.field == "name"
    );
}

#[test]
fn lambda_target_group() {
    let inputs = InputSet::new()
        .set("name", "fn-tg")
        .set("target_type", "lambda")
        .set("port", 80_u16)
        .set("vpc_id", "vpc-1");

    let description = build::<TargetGroup>(&inputs).unwrap();
    assert!(!description.contains("port"));
    assert!(!description.contains("vpc_id"));
    assert_eq!(description.get_str("health_check.path"), Some("/"));
}

#[test]
fn target_group_port_as_string() {
    let inputs = InputSet::new()
        .set("name", "app-tg")
        .set("port", "8080")
        .set("vpc_id", "vpc-1");

    let description = build::<TargetGroup>(&inputs).unwrap();
    assert_eq!(description.get("port").unwrap(), 8080);
}

#[test]
fn https_listener() {
    let inputs = InputSet::new()
        .set("name", "app-https")
        .set("protocol", "HTTPS")
        .set("port", 443_u16)
        .set("load_balancer_arn", "arn:lb")
        .set("target_group_arn", "arn:tg")
        .set("certificate_arn", "arn:cert")
        .set("ssl_policy", "ELBSecurityPolicy-TLS13-1-2-2021-06");

    let description = build::<Listener>(&inputs).unwrap();
    assert_eq!(description.get_str("certificate_arn"), Some("arn:cert"));
    assert_eq!(
        description.get_str("ssl_policy"),
        Some("ELBSecurityPolicy-TLS13-1-2-2021-06")
    );
    assert_eq!(description.get_str("default_action.type"), Some("forward"));
    assert_eq!(
        description.get_str("default_action.target_group_arn"),
        Some("arn:tg")
    );
}

#[test]
fn listener_requires_target_group() {
    let inputs = InputSet::new()
        .set("name", "app-http")
        .set("load_balancer_arn", "arn:lb");
    assert_matches!(
        ResourceKind::Listener.build(&inputs),
        Err(BuildError::MissingInput(missing)) if missing.field == "target_group_arn"
    );
}

#[test]
fn unrecognized_protocol() {
    let inputs = InputSet::new()
        .set("name", "app-http")
        .set("protocol", "QUIC")
        .set("load_balancer_arn", "arn:lb")
        .set("target_group_arn", "arn:tg");
    assert_matches!(
        ResourceKind::Listener.build(&inputs),
        Err(BuildError::InvalidEnum(invalid)) if invalid.field == "protocol" && invalid.value == "QUIC"
    );
}
