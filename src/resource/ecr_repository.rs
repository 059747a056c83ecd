use serde_json::Value;

use crate::{
    description::Fields,
    discriminant::{EncryptionType, ImageTagMutability},
    merge_tags, naming, BuildError, InputSet, Resource, ResourceDescription, Tag, Tags,
};

/// A container image repository (`aws_ecr_repository`).
#[derive(Clone, Debug, PartialEq)]
pub struct EcrRepository {
    /// The repository name.
    pub name: String,

    /// Whether image tags can be overwritten.
    pub image_tag_mutability: ImageTagMutability,

    /// Whether images are scanned for vulnerabilities when pushed.
    pub scan_on_push: bool,

    /// How images are encrypted at rest.
    pub encryption: Encryption,

    /// Whether the repository is deleted even if it still contains images.
    pub force_delete: bool,

    /// The final tag map, including the default `Name` tag.
    pub tags: Tags,
}

/// Encryption at rest for an ECR repository.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub enum Encryption {
    /// Amazon S3-managed keys.
    #[default]
    Aes256,

    /// A KMS key.
    Kms {
        /// The ARN of the KMS key to use, or `None` for the AWS managed key.
        key: Option<String>,
    },
}

impl Encryption {
    /// The `encryption_type` discriminator for this variant.
    #[must_use]
    pub fn encryption_type(&self) -> EncryptionType {
        match self {
            Self::Aes256 => EncryptionType::Aes256,
            Self::Kms { .. } => EncryptionType::Kms,
        }
    }

    /// The KMS key, which is only ever present for [`Kms`](Self::Kms) encryption.
    #[must_use]
    pub fn kms_key(&self) -> Option<&str> {
        match self {
            Self::Aes256 => None,
            Self::Kms { key } => key.as_deref(),
        }
    }
}

impl Resource for EcrRepository {
    const RESOURCE_TYPE: &'static str = "aws_ecr_repository";
    const CLOUDFORMATION_TYPE: &'static str = "AWS::ECR::Repository";

    fn from_inputs(inputs: &InputSet) -> Result<Self, BuildError> {
        let name = inputs.required_str("name")?;
        naming::ecr_repository_name("name", name)?;

        let kms_key = inputs.optional_str("kms_key")?;
        let encryption = match inputs
            .discriminant::<EncryptionType>("encryption_type")?
            .unwrap_or_default()
        {
            EncryptionType::Aes256 => {
                if kms_key.is_some() {
                    tracing::debug!(name, "ignoring kms_key for AES256 encryption");
                }
                Encryption::Aes256
            }
            EncryptionType::Kms => Encryption::Kms {
                key: kms_key.map(str::to_string),
            },
        };

        Ok(Self {
            name: name.to_string(),
            image_tag_mutability: inputs
                .discriminant::<ImageTagMutability>("image_tag_mutability")?
                .unwrap_or_default(),
            scan_on_push: inputs.bool_or("scan_on_push", false)?,
            encryption,
            force_delete: inputs.bool_or("force_delete", false)?,
            tags: merge_tags(name, &inputs.tags()?),
        })
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn describe(&self) -> ResourceDescription {
        Fields::new()
            .set("name", self.name.as_str())
            .set("image_tag_mutability", self.image_tag_mutability.to_string())
            .set("force_delete", self.force_delete)
            .block(
                "image_scanning_configuration",
                Fields::new().set("scan_on_push", self.scan_on_push),
            )
            .block(
                "encryption_configuration",
                Fields::new()
                    .set(
                        "encryption_type",
                        self.encryption.encryption_type().to_string(),
                    )
                    .set_opt("kms_key", self.encryption.kms_key()),
            )
            .tags(&self.tags)
            .describe(Self::RESOURCE_TYPE)
    }

    fn cloudformation_properties(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(Properties {
            repository_name: &self.name,
            image_tag_mutability: self.image_tag_mutability,
            empty_on_delete: self.force_delete,
            image_scanning_configuration: ImageScanningConfiguration {
                scan_on_push: self.scan_on_push,
            },
            encryption_configuration: EncryptionConfiguration {
                encryption_type: self.encryption.encryption_type(),
                kms_key: self.encryption.kms_key(),
            },
            tags: Tag::list(&self.tags),
        })
    }
}

#[derive(serde::Serialize)]
#[serde(rename_all = "PascalCase")]
struct Properties<'a> {
    repository_name: &'a str,
    image_tag_mutability: ImageTagMutability,
    empty_on_delete: bool,
    image_scanning_configuration: ImageScanningConfiguration,
    encryption_configuration: EncryptionConfiguration<'a>,
    tags: Vec<Tag>,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "PascalCase")]
struct ImageScanningConfiguration {
    scan_on_push: bool,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "PascalCase")]
struct EncryptionConfiguration<'a> {
    encryption_type: EncryptionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    kms_key: Option<&'a str>,
}
