//! Member model and the wire shapes it is validated from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// A validated directory member.
///
/// Produced only by [`WireMember::validate`]; `id`, `name` and `email` are
/// guaranteed non-empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    /// Opaque reference to an avatar image, resolved against the asset base.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Member {
    /// Resolve the avatar reference against the configured asset base.
    pub fn avatar_url(&self, asset_base: &str) -> Option<String> {
        self.avatar_ref
            .as_deref()
            .map(|r| format!("{}/{}", asset_base.trim_end_matches('/'), r))
    }

    /// Join date formatted for display ("Jan 5, 2024"), if known.
    pub fn joined_display(&self) -> Option<String> {
        self.created_at
            .map(|ts| ts.format("%b %-d, %Y").to_string())
    }
}

/// A member record as the backend sends it: every field optional, underscore
/// id, legacy field names. Validated into [`Member`] before it may enter the
/// store.
#[derive(Debug, Clone, Deserialize)]
pub struct WireMember {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub profileimg: Option<String>,
    #[serde(default, rename = "createdAt")]
    pub created_at: Option<String>,
}

impl WireMember {
    /// Validate the raw record into a strict [`Member`].
    ///
    /// Missing or empty `_id`, `name` or `email` fails the record; a
    /// malformed `createdAt` is dropped instead, since it is display-only.
    pub fn validate(self) -> Result<Member, AppError> {
        let id = require(self.id, "_id")?;
        let name = require(self.name, "name")?;
        let email = require(self.email, "email")?;

        let created_at = self
            .created_at
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|ts| ts.with_timezone(&Utc));

        Ok(Member {
            id,
            name,
            email,
            about: self.about.filter(|s| !s.trim().is_empty()),
            linkedin_url: self.linkedin.filter(|s| !s.trim().is_empty()),
            github_url: self.github.filter(|s| !s.trim().is_empty()),
            avatar_ref: self.profileimg.filter(|s| !s.trim().is_empty()),
            created_at,
        })
    }
}

fn require(field: Option<String>, label: &str) -> Result<String, AppError> {
    field
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| AppError::Validation(format!("Member record missing {}", label)))
}

/// Listing endpoint envelope: `{ success, data, message? }`.
#[derive(Debug, Deserialize)]
pub struct ListResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Vec<WireMember>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Delete endpoint envelope: `{ success, message? }`.
#[derive(Debug, Deserialize)]
pub struct DeleteResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// Already-resolved identity handed in by the auth subsystem.
///
/// Used only to decide whether the delete affordance is shown; the server
/// remains the authority on whether a delete succeeds.
#[derive(Debug, Clone)]
pub struct CurrentUser {
    pub email: String,
}

impl CurrentUser {
    /// Ownership check: a member may delete their own profile.
    pub fn owns(&self, member: &Member) -> bool {
        self.email.eq_ignore_ascii_case(&member.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wire(id: &str, name: &str, email: &str) -> WireMember {
        WireMember {
            id: Some(id.to_string()),
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            about: None,
            linkedin: None,
            github: None,
            profileimg: None,
            created_at: None,
        }
    }

    #[test]
    fn test_validate_requires_identity_fields() {
        let mut record = wire("m1", "Ada", "ada@example.com");
        record.email = Some("   ".to_string());
        let err = record.validate().unwrap_err();
        assert_eq!(err, AppError::Validation("Member record missing email".to_string()));

        assert!(wire("m1", "Ada", "ada@example.com").validate().is_ok());
    }

    #[test]
    fn test_validate_drops_malformed_timestamp() {
        let mut record = wire("m1", "Ada", "ada@example.com");
        record.created_at = Some("yesterday".to_string());
        let member = record.validate().unwrap();
        assert!(member.created_at.is_none());

        let mut record = wire("m1", "Ada", "ada@example.com");
        record.created_at = Some("2024-01-05T12:30:00Z".to_string());
        let member = record.validate().unwrap();
        assert_eq!(member.joined_display().unwrap(), "Jan 5, 2024");
    }

    #[test]
    fn test_avatar_url_joins_asset_base() {
        let mut record = wire("m1", "Ada", "ada@example.com");
        record.profileimg = Some("uploads/ada.png".to_string());
        let member = record.validate().unwrap();

        assert_eq!(
            member.avatar_url("http://localhost:3000/"),
            Some("http://localhost:3000/uploads/ada.png".to_string())
        );
    }

    #[test]
    fn test_ownership_is_case_insensitive() {
        let member = wire("m1", "Ada", "Ada@Example.com").validate().unwrap();
        let user = CurrentUser {
            email: "ada@example.com".to_string(),
        };
        assert!(user.owns(&member));

        let other = CurrentUser {
            email: "grace@example.com".to_string(),
        };
        assert!(!other.owns(&member));
    }

    #[test]
    fn test_wire_deserialization_uses_backend_names() {
        let json = serde_json::json!({
            "_id": "m1",
            "name": "Ada",
            "email": "ada@example.com",
            "linkedin": "https://linkedin.com/in/ada",
            "profileimg": "uploads/ada.png"
        });
        let member: Member = serde_json::from_value::<WireMember>(json)
            .unwrap()
            .validate()
            .unwrap();
        assert_eq!(member.linkedin_url.as_deref(), Some("https://linkedin.com/in/ada"));
        assert_eq!(member.avatar_ref.as_deref(), Some("uploads/ada.png"));
    }
}
