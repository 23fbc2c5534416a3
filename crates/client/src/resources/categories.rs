//! `/categories` resource.

use harpal_core::types::EntityId;
use serde::de::IgnoredAny;

use crate::gateway::{ApiClient, ApiResult};
use crate::models::category::{Category, CategoryDraft};
use crate::models::envelope::{Listing, Payload};

pub const CATEGORIES_PATH: &str = "/categories";

#[derive(Debug, Clone)]
pub struct CategoriesApi {
    client: ApiClient,
}

impl CategoriesApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// GET /categories
    pub async fn get_all(&self) -> ApiResult<Listing<Category>> {
        self.client.get(CATEGORIES_PATH).await
    }

    /// GET /categories/{id}
    pub async fn get_by_id(&self, id: &EntityId) -> ApiResult<Category> {
        let payload: Payload<Category> =
            self.client.get(&format!("{CATEGORIES_PATH}/{id}")).await?;
        Ok(payload.into_inner())
    }

    /// POST /categories
    pub async fn create(&self, draft: &CategoryDraft) -> ApiResult<()> {
        let _: IgnoredAny = self.client.post(CATEGORIES_PATH, draft).await?;
        Ok(())
    }

    /// PUT /categories/{id}
    pub async fn update(&self, id: &EntityId, draft: &CategoryDraft) -> ApiResult<()> {
        let _: IgnoredAny = self
            .client
            .put(&format!("{CATEGORIES_PATH}/{id}"), draft)
            .await?;
        Ok(())
    }

    /// DELETE /categories/{id}
    pub async fn delete(&self, id: &EntityId) -> ApiResult<()> {
        let _: IgnoredAny = self
            .client
            .delete(&format!("{CATEGORIES_PATH}/{id}"))
            .await?;
        Ok(())
    }
}
