//! Category entity model and draft.

use harpal_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::lenient;

/// A category row from `/categories`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(alias = "_id")]
    pub id: EntityId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub icon_url: Option<String>,
    /// Server-derived; never sent back.
    #[serde(default, deserialize_with = "lenient::count")]
    pub job_count: Option<u64>,
    #[serde(default, deserialize_with = "lenient::timestamp")]
    pub created_at: Option<Timestamp>,
}

/// Field set for creating or renaming a category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDraft {
    #[validate(length(min = 1, code = "required"))]
    pub name: String,
    pub icon_url: String,
}

impl From<&Category> for CategoryDraft {
    fn from(category: &Category) -> Self {
        Self {
            name: category.name.clone().unwrap_or_default(),
            icon_url: category.icon_url.clone().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_count_is_read_but_not_part_of_the_draft() {
        let category: Category = serde_json::from_value(serde_json::json!({
            "id": 1,
            "name": "Technology",
            "iconUrl": "tech-icon.svg",
            "jobCount": 145
        }))
        .unwrap();
        assert_eq!(category.job_count, Some(145));

        let draft = serde_json::to_value(CategoryDraft::from(&category)).unwrap();
        assert_eq!(
            draft,
            serde_json::json!({"name": "Technology", "iconUrl": "tech-icon.svg"})
        );
    }
}
