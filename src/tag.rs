use std::collections::BTreeMap;

/// A map of resource tags, ordered by key.
pub type Tags = BTreeMap<String, String>;

/// The key of the tag every resource receives by default.
pub const NAME_TAG: &str = "Name";

/// Overlay `tags` onto the default `{Name: name}` tag map.
///
/// Defaults are inserted first and caller tags second, so a caller-supplied `Name` wins.
#[must_use]
pub fn merge_tags(name: &str, tags: &Tags) -> Tags {
    let mut merged = Tags::new();
    merged.insert(NAME_TAG.to_string(), name.to_string());
    for (key, value) in tags {
        if let Some(previous) = merged.insert(key.clone(), value.clone()) {
            tracing::debug!(key = %key, %previous, %value, "caller tag overrides default");
        }
    }
    merged
}

/// A resource tag, in the list form CloudFormation expects.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    /// The tag key.
    pub key: String,

    /// The tag value.
    pub value: String,
}

impl Tag {
    pub(crate) fn list(tags: &Tags) -> Vec<Self> {
        tags.iter()
            .map(|(key, value)| Self {
                key: key.clone(),
                value: value.clone(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(entries: &[(&str, &str)]) -> Tags {
        entries
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn caller_tags_are_added() {
        assert_eq!(
            merge_tags("repo1", &tags(&[("Owner", "team-a")])),
            tags(&[("Name", "repo1"), ("Owner", "team-a")])
        );
    }

    #[test]
    fn caller_name_wins() {
        assert_eq!(
            merge_tags("repo1", &tags(&[("Name", "override")])),
            tags(&[("Name", "override")])
        );
    }

    #[test]
    fn list_form() {
        let list = Tag::list(&tags(&[("Name", "a"), ("Env", "b")]));
        assert_eq!(
            serde_json::to_value(list).unwrap(),
            serde_json::json!([
                {"Key": "Env", "Value": "b"},
                {"Key": "Name", "Value": "a"},
            ])
        );
    }
}
