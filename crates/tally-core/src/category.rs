//! The category record and its validated component types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::icon::IconKey;

/// Validation errors for category fields.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// The provided value was empty.
    #[error("{field} cannot be empty")]
    Empty { field: &'static str },

    /// The string was not a valid category id.
    #[error("invalid category id: {value}")]
    InvalidCategoryId { value: String },
}

/// A stable category identifier, assigned at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(Uuid);

impl CategoryId {
    /// Generates a fresh random id.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Returns the underlying uuid.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for CategoryId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|_| ValidationError::InvalidCategoryId {
                value: s.to_string(),
            })
    }
}

/// A validated, non-empty category name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CategoryName(String);

impl CategoryName {
    /// Creates a new name after validation.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.is_empty() {
            return Err(ValidationError::Empty {
                field: "category name",
            });
        }
        Ok(Self(name))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for CategoryName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CategoryName> for String {
    fn from(name: CategoryName) -> Self {
        name.0
    }
}

impl fmt::Display for CategoryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for CategoryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A trackable activity that accrues tracked time.
///
/// This is the wire shape for any code constructing or consuming categories;
/// the serialized field names are `uuid`, `name`, `icon`, `time`, `archived`,
/// `current` and `daily_target`. Durations are in seconds.
///
/// At most one category in a list should have `current = true`; the data
/// type does not enforce this, the application state layer does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Stable unique identifier, immutable after creation.
    pub uuid: CategoryId,

    /// User-facing label.
    pub name: CategoryName,

    /// Icon identity for rendering.
    pub icon: IconKey,

    /// Cumulative tracked seconds. Non-decreasing except for explicit resets.
    #[serde(rename = "time", default)]
    pub time_secs: i64,

    /// Soft-delete flag; archived categories keep their history.
    #[serde(default)]
    pub archived: bool,

    /// Whether this category is the one currently being tracked.
    #[serde(default)]
    pub current: bool,

    /// Advisory per-day goal in seconds. Zero means no goal.
    #[serde(rename = "daily_target", default)]
    pub daily_target_secs: i64,
}

impl Category {
    /// Creates a fresh category: new uuid, zero time, not archived,
    /// not current, no daily target.
    pub fn new(name: impl Into<String>, icon: IconKey) -> Result<Self, ValidationError> {
        Ok(Self {
            uuid: CategoryId::random(),
            name: CategoryName::new(name)?,
            icon,
            time_secs: 0,
            archived: false,
            current: false,
            daily_target_secs: 0,
        })
    }

    /// Accrues tracked seconds. Accrual only moves forward; use
    /// [`Self::reset_time`] for the one sanctioned decrease.
    pub fn record_time(&mut self, secs: u64) {
        let secs = i64::try_from(secs).unwrap_or(i64::MAX);
        self.time_secs = self.time_secs.saturating_add(secs);
    }

    /// Resets accrued time to zero.
    pub fn reset_time(&mut self) {
        self.time_secs = 0;
    }

    /// Whether accrued time has reached the daily target.
    ///
    /// Purely advisory; a zero target is never met.
    #[must_use]
    pub const fn met_daily_target(&self) -> bool {
        self.daily_target_secs > 0 && self.time_secs >= self.daily_target_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_category_defaults() {
        let category = Category::new("Work", IconKey::Briefcase).unwrap();
        assert_eq!(category.name.as_str(), "Work");
        assert_eq!(category.icon, IconKey::Briefcase);
        assert_eq!(category.time_secs, 0);
        assert!(!category.archived);
        assert!(!category.current);
        assert_eq!(category.daily_target_secs, 0);
    }

    #[test]
    fn name_rejects_empty() {
        assert!(CategoryName::new("").is_err());
        assert!(Category::new("", IconKey::Star).is_err());
        assert!(CategoryName::new("Reading").is_ok());
    }

    #[test]
    fn category_id_parse_roundtrip() {
        let id = CategoryId::random();
        let parsed: CategoryId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn category_id_rejects_garbage() {
        let result: Result<CategoryId, _> = "not-a-uuid".parse();
        assert_eq!(
            result.unwrap_err(),
            ValidationError::InvalidCategoryId {
                value: "not-a-uuid".to_string()
            }
        );
    }

    #[test]
    fn record_time_accrues() {
        let mut category = Category::new("Work", IconKey::Briefcase).unwrap();
        category.record_time(90);
        category.record_time(30);
        assert_eq!(category.time_secs, 120);
    }

    #[test]
    fn record_time_saturates() {
        let mut category = Category::new("Work", IconKey::Briefcase).unwrap();
        category.time_secs = i64::MAX - 1;
        category.record_time(u64::MAX);
        assert_eq!(category.time_secs, i64::MAX);
    }

    #[test]
    fn reset_time_is_the_only_decrease() {
        let mut category = Category::new("Work", IconKey::Briefcase).unwrap();
        category.record_time(42);
        category.reset_time();
        assert_eq!(category.time_secs, 0);
    }

    #[test]
    fn daily_target_is_advisory() {
        let mut category = Category::new("Work", IconKey::Briefcase).unwrap();
        assert!(!category.met_daily_target());

        category.daily_target_secs = 3600;
        category.record_time(3599);
        assert!(!category.met_daily_target());

        category.record_time(1);
        assert!(category.met_daily_target());
    }

    #[test]
    fn serde_roundtrip() {
        let mut category = Category::new("Work", IconKey::Briefcase).unwrap();
        category.record_time(120);
        category.current = true;

        let json = serde_json::to_string(&category).unwrap();
        let parsed: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, category);
    }

    #[test]
    fn serde_rejects_empty_name() {
        let json = r#"{
            "uuid": "a6edbffa-31b4-4e10-97ad-9257ce873ff4",
            "name": "",
            "icon": "star",
            "time": 0,
            "archived": false,
            "current": false,
            "daily_target": 0
        }"#;
        let result: Result<Category, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn serde_defaults_optional_fields() {
        let json = r#"{
            "uuid": "a6edbffa-31b4-4e10-97ad-9257ce873ff4",
            "name": "Reading",
            "icon": "book"
        }"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.time_secs, 0);
        assert!(!category.archived);
        assert!(!category.current);
        assert_eq!(category.daily_target_secs, 0);
    }

    #[test]
    fn wire_shape_snapshot() {
        let mut category = Category::new("Work", IconKey::Briefcase).unwrap();
        category.uuid = "00000000-0000-0000-0000-000000000001".parse().unwrap();
        category.current = true;
        category.daily_target_secs = 3600;

        let json = serde_json::to_string_pretty(&category).unwrap();
        insta::assert_snapshot!(json, @r#"
        {
          "uuid": "00000000-0000-0000-0000-000000000001",
          "name": "Work",
          "icon": "briefcase",
          "time": 0,
          "archived": false,
          "current": true,
          "daily_target": 3600
        }
        "#);
    }
}
