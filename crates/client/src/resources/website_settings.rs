//! `/website-settings` singleton.

use serde::de::IgnoredAny;

use crate::gateway::{ApiClient, ApiResult};
use crate::models::envelope::Payload;
use crate::models::website_settings::WebsiteSettings;

pub const WEBSITE_SETTINGS_PATH: &str = "/website-settings";

#[derive(Debug, Clone)]
pub struct WebsiteSettingsApi {
    client: ApiClient,
}

impl WebsiteSettingsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// GET /website-settings. `None` when the backend has nothing stored yet.
    pub async fn get(&self) -> ApiResult<Option<WebsiteSettings>> {
        let payload: Option<Payload<WebsiteSettings>> =
            self.client.get(WEBSITE_SETTINGS_PATH).await?;
        Ok(payload.map(Payload::into_inner))
    }

    /// PUT /website-settings
    pub async fn update(&self, settings: &WebsiteSettings) -> ApiResult<()> {
        let _: IgnoredAny = self.client.put(WEBSITE_SETTINGS_PATH, settings).await?;
        Ok(())
    }
}
