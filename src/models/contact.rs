//! Contact model and client-supplied drafts.

use crate::domain::{EmailAddress, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Column list shared by every statement that reads or returns full contact
/// rows. Must stay in sync with the [`Contact`] fields.
pub const COLUMNS: &str =
    "id, user_id, name, phone, email, company, tags, notes, is_favorite, created_at";

/// Maximum length of a contact name.
pub const MAX_NAME_LEN: usize = 255;
/// Maximum length of a phone number.
pub const MAX_PHONE_LEN: usize = 50;
/// Maximum length of a company name.
pub const MAX_COMPANY_LEN: usize = 255;
/// Maximum length of the comma-delimited tags field.
pub const MAX_TAGS_LEN: usize = 500;

/// A contact row owned by a single user.
#[derive(Debug, Clone, Serialize, FromRow, PartialEq, Eq)]
pub struct Contact {
    /// Unique identifier for the contact
    pub id: i64,

    /// Owning user
    pub user_id: i64,

    /// Display name
    pub name: String,

    /// Phone number, stored as free text
    pub phone: String,

    /// Email address
    pub email: String,

    /// Company name, if any
    pub company: Option<String>,

    /// Comma-delimited tags, stored exactly as supplied
    pub tags: Option<String>,

    /// Free-form notes
    pub notes: Option<String>,

    /// Favorite flag
    pub is_favorite: bool,

    /// When the contact was created; never changed by updates
    pub created_at: DateTime<Utc>,
}

/// Client-supplied contact fields for create and update.
///
/// Required string fields default to empty so a missing key surfaces as a
/// validation message rather than a deserialization failure. Optional fields
/// that are absent or blank become NULL, and an absent `is_favorite` means
/// false, on both create and update.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct ContactDraft {
    /// Display name (required)
    #[serde(default)]
    pub name: String,

    /// Phone number (required)
    #[serde(default)]
    pub phone: String,

    /// Email address (required, validated)
    #[serde(default)]
    pub email: String,

    /// Company name
    pub company: Option<String>,

    /// Comma-delimited tags
    pub tags: Option<String>,

    /// Free-form notes
    pub notes: Option<String>,

    /// Favorite flag
    pub is_favorite: Option<bool>,
}

impl ContactDraft {
    /// Trim every string field and drop optional fields that end up blank.
    pub fn normalized(mut self) -> Self {
        self.name = self.name.trim().to_string();
        self.phone = self.phone.trim().to_string();
        self.email = self.email.trim().to_string();
        self.company = normalize_optional(self.company);
        self.tags = normalize_optional(self.tags);
        self.notes = normalize_optional(self.notes);
        self
    }

    /// Check field presence, lengths, and email format.
    ///
    /// Expects a draft that already went through [`ContactDraft::normalized`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::Required("Name"));
        }
        if self.name.chars().count() > MAX_NAME_LEN {
            return Err(ValidationError::TooLong {
                field: "Name",
                max: MAX_NAME_LEN,
            });
        }

        if self.phone.is_empty() {
            return Err(ValidationError::Required("Phone number"));
        }
        if self.phone.chars().count() > MAX_PHONE_LEN {
            return Err(ValidationError::TooLong {
                field: "Phone number",
                max: MAX_PHONE_LEN,
            });
        }

        EmailAddress::new(self.email.as_str())?;

        if let Some(company) = &self.company {
            if company.chars().count() > MAX_COMPANY_LEN {
                return Err(ValidationError::TooLong {
                    field: "Company name",
                    max: MAX_COMPANY_LEN,
                });
            }
        }

        if let Some(tags) = &self.tags {
            if tags.chars().count() > MAX_TAGS_LEN {
                return Err(ValidationError::TooLong {
                    field: "Tags",
                    max: MAX_TAGS_LEN,
                });
            }
        }

        Ok(())
    }

    /// Effective favorite flag: absent means false.
    pub fn favorite(&self) -> bool {
        self.is_favorite.unwrap_or(false)
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
