use serde::{Deserialize, Deserializer, Serialize};

/// Helper to deserialize a user id as either an integer or a numeric string
fn deserialize_user_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::{self, Visitor};
    use std::fmt;

    struct IdVisitor;

    impl<'de> Visitor<'de> for IdVisitor {
        type Value = i64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an integer or a numeric string")
        }

        fn visit_i64<E>(self, value: i64) -> Result<i64, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_u64<E>(self, value: u64) -> Result<i64, E>
        where
            E: de::Error,
        {
            i64::try_from(value).map_err(|_| E::custom(format!("user id {} out of range", value)))
        }

        fn visit_str<E>(self, value: &str) -> Result<i64, E>
        where
            E: de::Error,
        {
            value
                .parse()
                .map_err(|_| E::custom(format!("invalid user id '{}'", value)))
        }
    }

    deserializer.deserialize_any(IdVisitor)
}

/// A user record from the directory API.
///
/// Records are immutable once fetched; favorites persist them verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Unique identifier from the directory (the wire may send it as a
    /// number or a numeric string; it is always serialized as a number)
    #[serde(deserialize_with = "deserialize_user_id")]
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Avatar image URI
    pub avatar: String,
}

impl User {
    /// Display name, first and last name joined.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// One page of the users endpoint.
///
/// Only `data` is consumed; the pagination metadata is decoded because the
/// endpoint always sends it.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct UsersPage {
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub per_page: u32,
    #[serde(default)]
    pub total: u32,
    #[serde(default)]
    pub total_pages: u32,
    /// The user records on this page
    pub data: Vec<User>,
}

/// Display record handed to the presentation layer by the list view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UserRow<'a> {
    pub user: &'a User,
    pub is_favorite: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user_json(id_literal: &str) -> String {
        format!(
            r#"{{
                "id": {id_literal},
                "first_name": "Janet",
                "last_name": "Weaver",
                "email": "janet.weaver@reqres.in",
                "avatar": "https://reqres.in/img/faces/2-image.jpg"
            }}"#
        )
    }

    #[test]
    fn test_user_id_from_number() {
        let user: User = serde_json::from_str(&sample_user_json("2")).unwrap();
        assert_eq!(user.id, 2);
        assert_eq!(user.first_name, "Janet");
    }

    #[test]
    fn test_user_id_from_numeric_string() {
        let user: User = serde_json::from_str(&sample_user_json("\"2\"")).unwrap();
        assert_eq!(user.id, 2);
    }

    #[test]
    fn test_user_id_rejects_non_numeric_string() {
        let result: Result<User, _> = serde_json::from_str(&sample_user_json("\"abc\""));
        assert!(result.is_err());
    }

    #[test]
    fn test_user_missing_field_fails() {
        let result: Result<User, _> = serde_json::from_str(r#"{"id": 1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_user_serializes_id_as_number() {
        let user: User = serde_json::from_str(&sample_user_json("\"7\"")).unwrap();
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("\"id\":7"));
    }

    #[test]
    fn test_full_name() {
        let user: User = serde_json::from_str(&sample_user_json("2")).unwrap();
        assert_eq!(user.full_name(), "Janet Weaver");
    }

    #[test]
    fn test_users_page_decode() {
        let body = format!(
            r#"{{"page": 2, "per_page": 6, "total": 12, "total_pages": 2, "data": [{}]}}"#,
            sample_user_json("2")
        );
        let page: UsersPage = serde_json::from_str(&body).unwrap();
        assert_eq!(page.page, 2);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.data.len(), 1);
        assert_eq!(page.data[0].id, 2);
    }

    #[test]
    fn test_users_page_metadata_defaults() {
        let page: UsersPage = serde_json::from_str(r#"{"data": []}"#).unwrap();
        assert_eq!(page.page, 0);
        assert!(page.data.is_empty());
    }
}
