//! Naming rules enforced by AWS for the resources we describe.

use lazy_static::lazy_static;
use regex::Regex;

use crate::{BuildError, InvalidInputError};

const ECR_NAME_LENGTH: std::ops::RangeInclusive<usize> = 2..=256;

/// Check an ECR repository name, which may be namespaced with `/`.
pub(crate) fn ecr_repository_name(field: &str, name: &str) -> Result<(), BuildError> {
    lazy_static! {
        static ref ECR_REPOSITORY_NAME: Regex = Regex::new(
            r"^(?:[a-z0-9]+(?:[._-][a-z0-9]+)*/)*[a-z0-9]+(?:[._-][a-z0-9]+)*$"
        )
        .unwrap();
    }

    if !ECR_NAME_LENGTH.contains(&name.len()) {
        return Err(invalid(
            field,
            format!(
                "repository name must be {} to {} characters",
                ECR_NAME_LENGTH.start(),
                ECR_NAME_LENGTH.end()
            ),
        ));
    }
    if !ECR_REPOSITORY_NAME.is_match(name) {
        return Err(invalid(
            field,
            format!("{name:?} is not a valid repository name; use lowercase letters, digits and `._-/` separators"),
        ));
    }
    Ok(())
}

/// Check a load balancer or target group name.
///
/// Names are at most 32 alphanumeric characters or hyphens and can't start or end with a hyphen.
/// Load balancer names additionally can't start with `internal-`, since AWS uses that prefix for
/// the DNS names of internal load balancers.
pub(crate) fn elb_name(field: &str, name: &str, load_balancer: bool) -> Result<(), BuildError> {
    lazy_static! {
        static ref ELB_NAME: Regex =
            Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9-]{0,30}[A-Za-z0-9])?$").unwrap();
    }

    if !ELB_NAME.is_match(name) {
        return Err(invalid(
            field,
            format!("{name:?} must be 1 to 32 alphanumeric characters or hyphens, and can't start or end with a hyphen"),
        ));
    }
    if load_balancer && name.starts_with("internal-") {
        return Err(invalid(
            field,
            "load balancer names can't start with `internal-`",
        ));
    }
    Ok(())
}

/// Check a manifest logical id, which CloudFormation requires to be alphanumeric.
pub(crate) fn is_logical_id(id: &str) -> bool {
    lazy_static! {
        static ref LOGICAL_ID: Regex = Regex::new("^[A-Za-z0-9]{1,255}$").unwrap();
    }

    LOGICAL_ID.is_match(id)
}

fn invalid(field: &str, reason: impl Into<String>) -> BuildError {
    InvalidInputError::new(field, reason).into()
}
