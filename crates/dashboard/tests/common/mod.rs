//! Shared fixtures for dashboard integration tests.
//!
//! [`FakeCollection`] is an in-memory stand-in for a collection resource
//! that counts every call and can be switched into failure modes.
//! [`FakeSingleton`] does the same for a keyed settings record.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use harpal_client::models::category::Category;
use harpal_client::models::envelope::Listing;
use harpal_client::models::job::JobPosting;
use harpal_client::models::user::User;
use harpal_client::models::website_settings::WebsiteSettings;
use harpal_client::{ApiError, ApiResult};
use harpal_core::types::EntityId;
use harpal_dashboard::notify::NotificationLog;
use harpal_dashboard::resource::{
    CollectionResource, FormDraft, ListEntity, SaveTarget, SingletonResource,
};

// ---------------------------------------------------------------------------
// Fake resource
// ---------------------------------------------------------------------------

struct FakeState<E, D> {
    items: Vec<E>,
    enveloped: bool,
    fail_reads: bool,
    fail_writes: bool,
    get_all_calls: usize,
    deleted: Vec<EntityId>,
    created: Vec<D>,
    updated: Vec<(EntityId, D)>,
}

pub struct FakeCollection<E, D> {
    state: Mutex<FakeState<E, D>>,
}

impl<E: ListEntity, D: FormDraft> FakeCollection<E, D> {
    pub fn new(items: Vec<E>) -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(FakeState {
                items,
                enveloped: false,
                fail_reads: false,
                fail_writes: false,
                get_all_calls: 0,
                deleted: Vec::new(),
                created: Vec::new(),
                updated: Vec::new(),
            }),
        })
    }

    /// Answer `get_all` with `{ "data": [...] }` instead of a bare array.
    pub fn set_enveloped(&self, enveloped: bool) {
        self.state.lock().unwrap().enveloped = enveloped;
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.state.lock().unwrap().fail_reads = fail;
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.state.lock().unwrap().fail_writes = fail;
    }

    pub fn get_all_calls(&self) -> usize {
        self.state.lock().unwrap().get_all_calls
    }

    pub fn deleted(&self) -> Vec<EntityId> {
        self.state.lock().unwrap().deleted.clone()
    }

    pub fn created(&self) -> Vec<D> {
        self.state.lock().unwrap().created.clone()
    }

    pub fn updated(&self) -> Vec<(EntityId, D)> {
        self.state.lock().unwrap().updated.clone()
    }

    pub fn write_calls(&self) -> usize {
        let state = self.state.lock().unwrap();
        state.deleted.len() + state.created.len() + state.updated.len()
    }
}

#[async_trait]
impl<E: ListEntity, D: FormDraft> CollectionResource for FakeCollection<E, D> {
    type Entity = E;

    async fn get_all(&self) -> ApiResult<Listing<E>> {
        let mut state = self.state.lock().unwrap();
        state.get_all_calls += 1;
        if state.fail_reads {
            return Err(ApiError::Http { status: 500 });
        }
        let items = state.items.clone();
        Ok(if state.enveloped {
            Listing::Enveloped { data: items }
        } else {
            Listing::Bare(items)
        })
    }

    async fn delete(&self, id: &EntityId) -> ApiResult<()> {
        let mut state = self.state.lock().unwrap();
        if state.fail_writes {
            return Err(ApiError::Http { status: 500 });
        }
        state.items.retain(|item| item.id() != id);
        state.deleted.push(id.clone());
        Ok(())
    }
}

#[async_trait]
impl<E: ListEntity, D: FormDraft> SaveTarget for FakeCollection<E, D> {
    type Draft = D;
    type Key = EntityId;
    const LABEL: &'static str = E::LABEL;

    async fn create(&self, draft: &D) -> ApiResult<()> {
        let mut state = self.state.lock().unwrap();
        if state.fail_writes {
            return Err(ApiError::Http { status: 500 });
        }
        state.created.push(draft.clone());
        Ok(())
    }

    async fn update(&self, key: &EntityId, draft: &D) -> ApiResult<()> {
        let mut state = self.state.lock().unwrap();
        if state.fail_writes {
            return Err(ApiError::Http { status: 422 });
        }
        state.updated.push((key.clone(), draft.clone()));
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Fake singleton
// ---------------------------------------------------------------------------

/// What the next `load` answers with.
#[derive(Debug, Clone)]
pub enum Stored {
    Record(WebsiteSettings),
    Null,
    Status(u16),
}

struct SingletonState {
    answer: Stored,
    loads: usize,
    created: Vec<WebsiteSettings>,
    updated: Vec<WebsiteSettings>,
}

pub struct FakeSingleton {
    state: Mutex<SingletonState>,
}

impl FakeSingleton {
    pub fn new(answer: Stored) -> Arc<Self> {
        Arc::new(Self {
            state: Mutex::new(SingletonState {
                answer,
                loads: 0,
                created: Vec::new(),
                updated: Vec::new(),
            }),
        })
    }

    pub fn answer_with(&self, answer: Stored) {
        self.state.lock().unwrap().answer = answer;
    }

    pub fn loads(&self) -> usize {
        self.state.lock().unwrap().loads
    }

    pub fn created(&self) -> Vec<WebsiteSettings> {
        self.state.lock().unwrap().created.clone()
    }

    pub fn updated(&self) -> Vec<WebsiteSettings> {
        self.state.lock().unwrap().updated.clone()
    }
}

#[async_trait]
impl SaveTarget for FakeSingleton {
    type Draft = WebsiteSettings;
    type Key = ();
    const LABEL: &'static str = "Website settings";
    const CAN_CREATE: bool = false;

    async fn create(&self, draft: &WebsiteSettings) -> ApiResult<()> {
        self.state.lock().unwrap().created.push(draft.clone());
        Ok(())
    }

    async fn update(&self, _key: &(), draft: &WebsiteSettings) -> ApiResult<()> {
        self.state.lock().unwrap().updated.push(draft.clone());
        Ok(())
    }
}

#[async_trait]
impl SingletonResource for FakeSingleton {
    async fn load(&self, _key: &()) -> ApiResult<Option<WebsiteSettings>> {
        let mut state = self.state.lock().unwrap();
        state.loads += 1;
        match &state.answer {
            Stored::Record(settings) => Ok(Some(settings.clone())),
            Stored::Null => Ok(None),
            Stored::Status(status) => Err(ApiError::Http { status: *status }),
        }
    }
}

pub fn settings(site_title: &str) -> WebsiteSettings {
    WebsiteSettings {
        site_title: site_title.to_string(),
        site_description: "Find your next job".to_string(),
        ..WebsiteSettings::default()
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

pub fn category(id: u32, name: &str, job_count: u64) -> Category {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "name": name,
        "jobCount": job_count,
    }))
    .unwrap()
}

pub fn job(id: u32, title: &str, company: &str) -> JobPosting {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "title": title,
        "company": company,
        "location": "Remote",
        "description": "Build things",
    }))
    .unwrap()
}

pub fn user(id: u32, first: &str, last: &str, email: &str) -> User {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "firstName": first,
        "lastName": last,
        "email": email,
        "isActive": true,
    }))
    .unwrap()
}

pub fn log() -> (NotificationLog, Arc<NotificationLog>) {
    let log = NotificationLog::new();
    let shared = Arc::new(log.clone());
    (log, shared)
}
