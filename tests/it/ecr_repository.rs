use assert_matches::assert_matches;

use resource_descriptor::{build, BuildError, EcrRepository, InputSet};

use crate::common::{repository_inputs, tags};

#[test]
fn build_is_idempotent() {
    let inputs = repository_inputs()
        .set("encryption_type", "KMS")
        .set("kms_key", "k1")
        .set("tags", tags(&[("Owner", "team-a")]));

    let first = build::<EcrRepository>(&inputs).unwrap();
    let second = build::<EcrRepository>(&inputs).unwrap();
    assert_eq!(first, second);
}

#[test]
fn kms_key_populated_for_kms() {
    let inputs = repository_inputs()
        .set("encryption_type", "KMS")
        .set("kms_key", "k1");

    let description = build::<EcrRepository>(&inputs).unwrap();
    assert_eq!(
        description.get_str("encryption_configuration.encryption_type"),
        Some("KMS")
    );
    assert_eq!(
        description.get_str("encryption_configuration.kms_key"),
        Some("k1")
    );
}

#[test]
fn kms_key_absent_for_aes256() {
    let inputs = repository_inputs()
        .set("encryption_type", "AES256")
        .set("kms_key", "k1");

    let description = build::<EcrRepository>(&inputs).unwrap();
    let encryption = description.fields["encryption_configuration"]
        .as_object()
        .unwrap();
    assert_eq!(encryption["encryption_type"], "AES256");
    assert!(!encryption.contains_key("kms_key"));
}

#[test]
fn caller_tags_overlay_default_name() {
    let description =
        build::<EcrRepository>(&repository_inputs().set("tags", tags(&[("Owner", "team-a")])))
            .unwrap();
    assert_eq!(
        description.tags(),
        tags(&[("Name", "repo1"), ("Owner", "team-a")])
    );

    let description =
        build::<EcrRepository>(&repository_inputs().set("tags", tags(&[("Name", "override")])))
            .unwrap();
    assert_eq!(description.tags(), tags(&[("Name", "override")]));
}

#[test]
fn missing_name() {
    let error = build::<EcrRepository>(&InputSet::new().set("scan_on_push", true)).unwrap_err();
    assert_matches!(&error, BuildError::MissingInput(missing) if missing.field == "name");
    assert_eq!(error.field(), "name");
}

#[test]
fn unrecognized_encryption_type() {
    let error =
        build::<EcrRepository>(&repository_inputs().set("encryption_type", "DSSE")).unwrap_err();
    let invalid = assert_matches!(error, BuildError::InvalidEnum(invalid) => invalid);
    assert_eq!(invalid.field, "encryption_type");
    assert_eq!(invalid.value, "DSSE");
    assert_eq!(invalid.expected, &["AES256", "KMS"]);
}

#[test]
fn scan_on_push_must_be_boolean() {
    assert_matches!(
        build::<EcrRepository>(&repository_inputs().set("scan_on_push", "yes")),
        Err(BuildError::InvalidInput(invalid)) if invalid.field == "scan_on_push"
    );
}
