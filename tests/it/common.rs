use resource_descriptor::{InputSet, Tags};

pub const APP_MANIFEST: &str = include_str!("../../demos/app.toml");

pub fn tags(entries: &[(&str, &str)]) -> Tags {
    entries
        .iter()
        .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
        .collect()
}

pub fn repository_inputs() -> InputSet {
    InputSet::new().set("name", "repo1")
}
