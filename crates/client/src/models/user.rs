//! User entity model and draft. Users are never created from the dashboard.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use harpal_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::lenient;

/// Account role. Roles the dashboard has no special handling for are kept
/// verbatim so an edit writes them back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UserRole {
    Admin,
    #[default]
    User,
    Other(String),
}

impl UserRole {
    pub fn as_str(&self) -> &str {
        match self {
            UserRole::Admin => "admin",
            UserRole::User => "user",
            UserRole::Other(role) => role,
        }
    }

    pub fn is_admin(&self) -> bool {
        *self == UserRole::Admin
    }
}

impl From<String> for UserRole {
    fn from(raw: String) -> Self {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case("admin") {
            UserRole::Admin
        } else if trimmed.eq_ignore_ascii_case("user") {
            UserRole::User
        } else {
            UserRole::Other(raw)
        }
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> Self {
        match role {
            UserRole::Other(role) => role,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for UserRole {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(UserRole::from(s.to_string()))
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user row from `/users`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(alias = "_id")]
    pub id: EntityId,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient::keyword")]
    pub role: Option<UserRole>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default, deserialize_with = "lenient::timestamp")]
    pub created_at: Option<Timestamp>,
}

impl User {
    /// "First Last", skipping whichever part is missing.
    pub fn full_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn is_active(&self) -> bool {
        self.is_active.unwrap_or(false)
    }
}

/// Field set for `PUT /users/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    pub first_name: String,
    pub last_name: String,
    #[validate(length(min = 1, code = "required"))]
    pub email: String,
    pub role: UserRole,
    pub phone_number: String,
    pub is_active: bool,
    pub company_name: String,
}

impl From<&User> for UserDraft {
    fn from(user: &User) -> Self {
        Self {
            first_name: user.first_name.clone().unwrap_or_default(),
            last_name: user.last_name.clone().unwrap_or_default(),
            email: user.email.clone().unwrap_or_default(),
            role: user.role.clone().unwrap_or_default(),
            phone_number: user.phone_number.clone().unwrap_or_default(),
            is_active: user.is_active(),
            company_name: user.company_name.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::envelope::Listing;

    #[test]
    fn full_name_skips_missing_parts() {
        let user: User =
            serde_json::from_value(serde_json::json!({"id": "u1", "firstName": "Jane"})).unwrap();
        assert_eq!(user.full_name(), "Jane");
        assert!(!user.is_active());
    }

    #[test]
    fn draft_hydrates_role_and_flags() {
        let user: User = serde_json::from_value(serde_json::json!({
            "id": "u2",
            "firstName": "John",
            "lastName": "Doe",
            "email": "john.doe@example.com",
            "role": "admin",
            "isActive": true
        }))
        .unwrap();
        let draft = UserDraft::from(&user);
        assert_eq!(draft.role, UserRole::Admin);
        assert!(draft.is_active);
        assert_eq!(draft.company_name, "");
    }

    #[test]
    fn unfamiliar_roles_survive_an_edit() {
        let listing: Listing<User> = serde_json::from_str(
            r#"[{"_id":"u1","role":"admin"},{"_id":"u2","role":"employer"},{"_id":"u3","role":7}]"#,
        )
        .unwrap();
        let users = listing.into_items();
        assert_eq!(users[0].role, Some(UserRole::Admin));
        assert_eq!(users[1].role, Some(UserRole::Other("employer".into())));
        assert_eq!(users[2].role, None);

        let value = serde_json::to_value(UserDraft::from(&users[1])).unwrap();
        assert_eq!(value["role"], "employer");
    }
}
