//! `/page-seo/{pageName}` entries.

use serde::de::IgnoredAny;

use crate::gateway::{ApiClient, ApiResult};
use crate::models::envelope::Payload;
use crate::models::page_seo::{PageName, PageSeo};

pub const PAGE_SEO_PATH: &str = "/page-seo";

#[derive(Debug, Clone)]
pub struct PageSeoApi {
    client: ApiClient,
}

impl PageSeoApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// GET /page-seo/{page}. `None` when the body is `null`.
    pub async fn get(&self, page: PageName) -> ApiResult<Option<PageSeo>> {
        let payload: Option<Payload<PageSeo>> =
            self.client.get(&format!("{PAGE_SEO_PATH}/{page}")).await?;
        Ok(payload.map(Payload::into_inner))
    }

    /// PUT /page-seo/{page}
    pub async fn update(&self, page: PageName, seo: &PageSeo) -> ApiResult<()> {
        let _: IgnoredAny = self
            .client
            .put(&format!("{PAGE_SEO_PATH}/{page}"), seo)
            .await?;
        Ok(())
    }
}
