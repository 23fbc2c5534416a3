//! Per-page SEO entries (`/page-seo/{pageName}`).

use std::fmt;
use std::str::FromStr;

use harpal_core::validation::{validate_json_text, validate_optional_url};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// The fixed set of public pages that carry their own SEO entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageName {
    #[default]
    Home,
    Jobs,
    Categories,
    Contact,
    About,
}

impl PageName {
    pub const ALL: [PageName; 5] = [
        PageName::Home,
        PageName::Jobs,
        PageName::Categories,
        PageName::Contact,
        PageName::About,
    ];

    /// Path segment used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            PageName::Home => "home",
            PageName::Jobs => "jobs",
            PageName::Categories => "categories",
            PageName::Contact => "contact",
            PageName::About => "about",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PageName::Home => "Home Page",
            PageName::Jobs => "Jobs Page",
            PageName::Categories => "Categories Page",
            PageName::Contact => "Contact Page",
            PageName::About => "About Page",
        }
    }
}

impl fmt::Display for PageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PageName::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown page '{s}'"))
    }
}

/// SEO fields of one page. Fetched and sent back whole.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct PageSeo {
    pub title: String,
    pub description: String,
    pub keywords: String,
    pub og_title: String,
    pub og_description: String,
    #[validate(custom(function = "validate_optional_url"))]
    pub og_image_url: String,
    #[validate(custom(function = "validate_optional_url"))]
    pub canonical_url: String,
    /// JSON-LD structured data, kept as the operator typed it.
    #[validate(custom(function = "validate_json_text"))]
    pub schema: String,
}
