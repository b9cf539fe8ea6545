use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

fn validate_not_blank(name: &str) -> Result<(), validator::ValidationError> {
    if name.trim().is_empty() {
        return Err(validator::ValidationError::new("blank"));
    }
    Ok(())
}

/// Item entity - a row of the `items` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Item {
    /// Database-assigned identifier
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    /// Set once at creation
    pub created_at: DateTime<Utc>,
    /// Soft-delete flag; once true it never goes back
    pub deleted: bool,
}

/// DTO for creating a new item
///
/// A body without `name` deserializes to an empty name so it fails validation
/// (400) rather than JSON extraction.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateItem {
    #[serde(default)]
    #[validate(length(min = 1, max = 255), custom(function = "validate_not_blank"))]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl CreateItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Which rows a list or count query sees
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ItemFilter {
    /// Include soft-deleted rows alongside live ones
    pub include_deleted: bool,
    /// Only soft-deleted rows; takes precedence over `include_deleted`
    pub only_deleted: bool,
}

impl ItemFilter {
    /// Live items only
    pub fn active() -> Self {
        Self::default()
    }

    pub fn all() -> Self {
        Self {
            include_deleted: true,
            only_deleted: false,
        }
    }

    pub fn deleted() -> Self {
        Self {
            include_deleted: true,
            only_deleted: true,
        }
    }

    pub fn with_deleted(include_deleted: bool) -> Self {
        if include_deleted { Self::all() } else { Self::active() }
    }

    /// The `deleted` value rows must have, or `None` for any
    pub fn deleted_value(&self) -> Option<bool> {
        if self.only_deleted {
            Some(true)
        } else if self.include_deleted {
            None
        } else {
            Some(false)
        }
    }

    pub fn matches(&self, item: &Item) -> bool {
        self.deleted_value().is_none_or(|d| item.deleted == d)
    }
}

/// `?include_deleted=true|false` on list and count endpoints
#[derive(Debug, Clone, Copy, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct IncludeDeletedQuery {
    /// Also return soft-deleted items
    #[serde(default)]
    pub include_deleted: bool,
}
