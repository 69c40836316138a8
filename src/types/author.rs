use serde::{Deserialize, Serialize};

use crate::types::plugin_toml::sections::project::Person;

/// A plugin author as written to the `Authors` array.
///
/// Configuration files use lowercase keys (`name`, `email`, `url`); the
/// manifest uses `Name`, `Email` and `Url`. Unset fields are left out.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct AuthorInfo {
    #[serde(rename = "Name", alias = "name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "Email", alias = "email", default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "Url", alias = "url", default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl AuthorInfo {
    pub fn new(name: Option<&str>, email: Option<&str>, url: Option<&str>) -> Self {
        AuthorInfo {
            name: name.map(str::to_owned),
            email: email.map(str::to_owned),
            url: url.map(str::to_owned),
        }
    }

    /// Author with only a name set
    pub fn named(name: &str) -> Self {
        Self::new(Some(name), None, None)
    }
}

impl From<&Person> for AuthorInfo {
    fn from(person: &Person) -> Self {
        AuthorInfo {
            name: person.name.clone(),
            email: person.email.clone(),
            url: person.url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_skips_unset_fields() {
        let author = AuthorInfo::new(Some("Jane"), None, Some("https://example.com/jane"));
        let json = serde_json::to_string(&author).unwrap();
        assert_eq!(json, r#"{"Name":"Jane","Url":"https://example.com/jane"}"#);
    }

    #[test]
    fn test_deserialize_accepts_both_key_styles() {
        let lower: AuthorInfo = toml::from_str("name = \"Jane\"\nemail = \"jane@example.com\"").unwrap();
        let pascal: AuthorInfo = serde_json::from_str(r#"{"Name":"Jane","Email":"jane@example.com"}"#).unwrap();
        assert_eq!(lower, pascal);
        assert_eq!(lower.url, None);
    }

    #[test]
    fn test_from_person() {
        let person = Person {
            name: Some("Joe".to_string()),
            email: None,
            url: Some("https://joe.dev".to_string()),
        };
        let author = AuthorInfo::from(&person);
        assert_eq!(author, AuthorInfo::new(Some("Joe"), None, Some("https://joe.dev")));
    }
}
