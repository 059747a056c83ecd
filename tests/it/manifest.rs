use std::{fs, io::Write};

use assert_matches::assert_matches;

use resource_descriptor::{BuildError, Manifest, ManifestError, ResourceKind};

use crate::common::APP_MANIFEST;

#[test]
fn load_toml() -> Result<(), Box<dyn std::error::Error>> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    file.write_all(APP_MANIFEST.as_bytes())?;

    let manifest = Manifest::load(file.path())?;
    let kinds: Vec<_> = manifest.resources.iter().map(|entry| entry.kind).collect();
    assert_eq!(
        kinds,
        vec![
            ResourceKind::EcrRepository,
            ResourceKind::LoadBalancer,
            ResourceKind::TargetGroup,
            ResourceKind::Listener,
        ]
    );

    let descriptions = manifest.build()?;
    let logical_ids: Vec<_> = descriptions.iter().map(|(id, _)| id.as_str()).collect();
    assert_eq!(
        logical_ids,
        vec!["Repository", "Alb", "TargetGroup", "HttpListener"]
    );

    let (_, repository) = &descriptions[0];
    assert_eq!(
        repository.get("image_scanning_configuration.scan_on_push").unwrap(),
        true
    );
    assert_eq!(repository.get_str("tags.Owner"), Some("team-a"));

    Ok(())
}

#[test]
fn load_json() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("manifest.json");
    fs::write(
        &path,
        r#"{
            "resources": [
                {
                    "logical_id": "Repository",
                    "kind": "aws_ecr_repository",
                    "inputs": {"name": "repo1", "tags": {"Name": "override"}}
                }
            ]
        }"#,
    )?;

    let descriptions = Manifest::load(&path)?.build()?;
    assert_eq!(descriptions[0].1.get_str("tags.Name"), Some("override"));

    Ok(())
}

#[test]
fn load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert_matches!(
        Manifest::load(dir.path().join("absent.toml")),
        Err(ManifestError::Io { .. })
    );
}

#[test]
fn load_invalid_toml() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .unwrap();
    file.write_all(b"[[resources]\n").unwrap();
    assert_matches!(Manifest::load(file.path()), Err(ManifestError::Toml(_)));
}

#[test]
fn first_failing_resource_is_reported() {
    let manifest = Manifest::from_toml(
        r#"
        [[resources]]
        logical_id = "Repository"
        kind = "aws_ecr_repository"
        inputs = { name = "repo1" }

        [[resources]]
        logical_id = "Alb"
        kind = "aws_lb"
        inputs = { name = "app-alb", load_balancer_type = "classic", subnets = ["subnet-a"] }
        "#,
    )
    .unwrap();

    assert_matches!(
        manifest.build(),
        Err(ManifestError::Build { logical_id, source: BuildError::InvalidEnum(_) }) if logical_id == "Alb"
    );
}
