use resource_descriptor::{Manifest, Template};

use crate::common::APP_MANIFEST;

#[test]
fn render_app_template() -> Result<(), Box<dyn std::error::Error>> {
    let manifest = Manifest::from_toml(APP_MANIFEST)?;
    let body = Template::from_manifest(&manifest)?.body()?;

    assert_eq!(body["AWSTemplateFormatVersion"], "2010-09-09");
    assert_eq!(
        body["Description"],
        "Application image registry and load balancer"
    );

    let resources = body["Resources"].as_object().unwrap();
    let types: Vec<_> = ["Repository", "Alb", "TargetGroup", "HttpListener"]
        .iter()
        .map(|id| resources[*id]["Type"].as_str().unwrap())
        .collect();
    assert_eq!(
        types,
        vec![
            "AWS::ECR::Repository",
            "AWS::ElasticLoadBalancingV2::LoadBalancer",
            "AWS::ElasticLoadBalancingV2::TargetGroup",
            "AWS::ElasticLoadBalancingV2::Listener",
        ]
    );

    let repository = &resources["Repository"]["Properties"];
    assert_eq!(repository["RepositoryName"], "app/api");
    assert_eq!(repository["EncryptionConfiguration"]["EncryptionType"], "KMS");
    assert_eq!(
        repository["Tags"],
        serde_json::json!([
            {"Key": "Name", "Value": "app/api"},
            {"Key": "Owner", "Value": "team-a"},
        ])
    );

    let target_group = &resources["TargetGroup"]["Properties"];
    assert_eq!(target_group["HealthCheckPath"], "/readiness");

    let listener = &resources["HttpListener"]["Properties"];
    assert!(listener.get("Certificates").is_none());
    assert!(listener.get("Tags").is_none());

    Ok(())
}

#[test]
fn pretty_body_is_json() -> Result<(), Box<dyn std::error::Error>> {
    let template = Template::from_manifest(&Manifest::from_toml(APP_MANIFEST)?)?;
    let parsed: serde_json::Value = serde_json::from_str(&template.body_pretty()?)?;
    assert_eq!(parsed, template.body()?);
    Ok(())
}

#[test]
fn aes256_repository_renders_without_kms_key() -> Result<(), Box<dyn std::error::Error>> {
    let manifest = Manifest::from_json(
        r#"{"resources": [{
            "logical_id": "Repository",
            "kind": "aws_ecr_repository",
            "inputs": {"name": "repo1", "encryption_type": "AES256", "kms_key": "k1"}
        }]}"#,
    )?;
    let body = Template::from_manifest(&manifest)?.body()?;

    let encryption = &body["Resources"]["Repository"]["Properties"]["EncryptionConfiguration"];
    assert_eq!(encryption, &serde_json::json!({"EncryptionType": "AES256"}));
    assert!(encryption.get("KmsKey").is_none());
    Ok(())
}
