//! Wire records exchanged with the backend.
//!
//! Entities are what the backend returns; drafts are the field sets the
//! dashboard sends on create/update. Every field the backend may omit is an
//! `Option`, so a sparse record still decodes.

pub mod auth;
pub mod category;
pub mod envelope;
pub mod job;
pub mod page_seo;
pub mod user;
pub mod website_settings;

mod lenient;
