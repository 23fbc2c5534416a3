//! `/users` resource. The backend exposes no create route here.

use harpal_core::types::EntityId;
use serde::de::IgnoredAny;

use crate::gateway::{ApiClient, ApiResult};
use crate::models::envelope::{Listing, Payload};
use crate::models::user::{User, UserDraft};

pub const USERS_PATH: &str = "/users";

#[derive(Debug, Clone)]
pub struct UsersApi {
    client: ApiClient,
}

impl UsersApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// GET /users
    pub async fn get_all(&self) -> ApiResult<Listing<User>> {
        self.client.get(USERS_PATH).await
    }

    /// GET /users/{id}
    pub async fn get_by_id(&self, id: &EntityId) -> ApiResult<User> {
        let payload: Payload<User> = self.client.get(&format!("{USERS_PATH}/{id}")).await?;
        Ok(payload.into_inner())
    }

    /// PUT /users/{id}
    pub async fn update(&self, id: &EntityId, draft: &UserDraft) -> ApiResult<()> {
        let _: IgnoredAny = self.client.put(&format!("{USERS_PATH}/{id}"), draft).await?;
        Ok(())
    }

    /// DELETE /users/{id}
    pub async fn delete(&self, id: &EntityId) -> ApiResult<()> {
        let _: IgnoredAny = self.client.delete(&format!("{USERS_PATH}/{id}")).await?;
        Ok(())
    }
}
