//! Site-wide metadata singleton (`/website-settings`).

use harpal_core::validation::validate_optional_url;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// The singleton record is both what is fetched and what is sent back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct WebsiteSettings {
    pub site_title: String,
    pub site_description: String,
    pub site_keywords: String,
    pub og_title: String,
    pub og_description: String,
    #[validate(custom(function = "validate_optional_url"))]
    pub og_image_url: String,
}
