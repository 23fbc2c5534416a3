//! Per-resource facades over [`ApiClient`](crate::gateway::ApiClient).
//!
//! Each facade binds one backend path template and otherwise passes the
//! gateway's result or failure through unchanged. Write operations discard
//! the response body; the dashboard re-fetches after every write.

pub mod auth;
pub mod categories;
pub mod jobs;
pub mod page_seo;
pub mod users;
pub mod website_settings;

pub use auth::AuthApi;
pub use categories::CategoriesApi;
pub use jobs::JobsApi;
pub use page_seo::PageSeoApi;
pub use users::UsersApi;
pub use website_settings::WebsiteSettingsApi;

use crate::gateway::ApiClient;

/// All resource facades sharing one gateway.
#[derive(Debug, Clone)]
pub struct Resources {
    pub jobs: JobsApi,
    pub users: UsersApi,
    pub categories: CategoriesApi,
    pub website_settings: WebsiteSettingsApi,
    pub page_seo: PageSeoApi,
    pub auth: AuthApi,
}

impl Resources {
    pub fn new(client: &ApiClient) -> Self {
        Self {
            jobs: JobsApi::new(client.clone()),
            users: UsersApi::new(client.clone()),
            categories: CategoriesApi::new(client.clone()),
            website_settings: WebsiteSettingsApi::new(client.clone()),
            page_seo: PageSeoApi::new(client.clone()),
            auth: AuthApi::new(client.clone()),
        }
    }
}
