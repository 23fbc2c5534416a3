//! `/jobs` resource.

use harpal_core::types::EntityId;
use serde::de::IgnoredAny;
use serde::Deserialize;

use crate::gateway::{ApiClient, ApiResult};
use crate::models::envelope::{Listing, Payload};
use crate::models::job::{JobDraft, JobPosting};

pub const JOBS_PATH: &str = "/jobs";

#[derive(Debug, Clone)]
pub struct JobsApi {
    client: ApiClient,
}

/// `/jobs/count` answers with either `{ "count": n }` or a bare number.
#[derive(Deserialize)]
#[serde(untagged)]
enum CountBody {
    Bare(u64),
    Object { count: u64 },
}

impl JobsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// GET /jobs
    pub async fn get_all(&self) -> ApiResult<Listing<JobPosting>> {
        self.client.get(JOBS_PATH).await
    }

    /// GET /jobs/{id}
    pub async fn get_by_id(&self, id: &EntityId) -> ApiResult<JobPosting> {
        let payload: Payload<JobPosting> = self.client.get(&format!("{JOBS_PATH}/{id}")).await?;
        Ok(payload.into_inner())
    }

    /// POST /jobs
    pub async fn create(&self, draft: &JobDraft) -> ApiResult<()> {
        let _: IgnoredAny = self.client.post(JOBS_PATH, draft).await?;
        Ok(())
    }

    /// PUT /jobs/{id}
    pub async fn update(&self, id: &EntityId, draft: &JobDraft) -> ApiResult<()> {
        let _: IgnoredAny = self.client.put(&format!("{JOBS_PATH}/{id}"), draft).await?;
        Ok(())
    }

    /// DELETE /jobs/{id}
    pub async fn delete(&self, id: &EntityId) -> ApiResult<()> {
        let _: IgnoredAny = self.client.delete(&format!("{JOBS_PATH}/{id}")).await?;
        Ok(())
    }

    /// GET /jobs/featured
    pub async fn featured(&self) -> ApiResult<Listing<JobPosting>> {
        self.client.get(&format!("{JOBS_PATH}/featured")).await
    }

    /// GET /jobs/category/{category_id}
    pub async fn by_category(&self, category_id: &EntityId) -> ApiResult<Listing<JobPosting>> {
        self.client
            .get(&format!("{JOBS_PATH}/category/{category_id}"))
            .await
    }

    /// GET /jobs/count
    pub async fn count(&self) -> ApiResult<u64> {
        let payload: Payload<CountBody> = self.client.get(&format!("{JOBS_PATH}/count")).await?;
        Ok(match payload.into_inner() {
            CountBody::Bare(n) | CountBody::Object { count: n } => n,
        })
    }

    /// GET /jobs/today
    pub async fn today(&self) -> ApiResult<Listing<JobPosting>> {
        self.client.get(&format!("{JOBS_PATH}/today")).await
    }
}
