//! Seams between the generic controllers and the resource clients.
//!
//! [`CollectionResource`] is what a list needs (fetch everything, delete one),
//! [`SaveTarget`] is what a form needs (create or update a draft), and
//! [`SingletonResource`] adds the keyed load used by the settings screens.
//! The client facades implement them here; tests substitute in-memory fakes.

use std::fmt;

use async_trait::async_trait;
use harpal_client::models::category::{Category, CategoryDraft};
use harpal_client::models::envelope::Listing;
use harpal_client::models::job::{JobDraft, JobPosting};
use harpal_client::models::page_seo::{PageName, PageSeo};
use harpal_client::models::user::{User, UserDraft};
use harpal_client::models::website_settings::WebsiteSettings;
use harpal_client::resources::{CategoriesApi, JobsApi, PageSeoApi, UsersApi, WebsiteSettingsApi};
use harpal_client::{ApiError, ApiResult};
use harpal_core::types::EntityId;
use serde::de::DeserializeOwned;
use serde::Serialize;
use validator::Validate;

// ---------------------------------------------------------------------------
// Entities and drafts
// ---------------------------------------------------------------------------

/// A record shown in a list screen.
pub trait ListEntity: Clone + Send + Sync + 'static {
    /// Singular display name, e.g. `"Job"`.
    const LABEL: &'static str;
    /// Plural lowercase name used in messages, e.g. `"jobs"`.
    const PLURAL: &'static str;

    fn id(&self) -> &EntityId;

    /// Text fields the free-text search looks at.
    fn search_fields(&self) -> Vec<&str>;
}

/// A typed field set edited by a form.
///
/// Serialized field names (camelCase) double as the form's field names.
pub trait FormDraft:
    Validate + Serialize + DeserializeOwned + Clone + Default + Send + Sync + 'static
{
}

impl<T> FormDraft for T where
    T: Validate + Serialize + DeserializeOwned + Clone + Default + Send + Sync + 'static
{
}

// ---------------------------------------------------------------------------
// Resource seams
// ---------------------------------------------------------------------------

#[async_trait]
pub trait CollectionResource: Send + Sync + 'static {
    type Entity: ListEntity;

    async fn get_all(&self) -> ApiResult<Listing<Self::Entity>>;

    async fn delete(&self, id: &EntityId) -> ApiResult<()>;
}

#[async_trait]
pub trait SaveTarget: Send + Sync + 'static {
    type Draft: FormDraft;
    type Key: Clone + fmt::Debug + Send + Sync + 'static;

    /// Display name used in success/failure messages.
    const LABEL: &'static str;

    /// Whether the backend offers a create route for this resource.
    const CAN_CREATE: bool = true;

    async fn create(&self, draft: &Self::Draft) -> ApiResult<()>;

    async fn update(&self, key: &Self::Key, draft: &Self::Draft) -> ApiResult<()>;
}

/// A save target whose record is fetched by key rather than listed.
#[async_trait]
pub trait SingletonResource: SaveTarget {
    /// `Ok(None)` when nothing is stored for `key` yet.
    async fn load(&self, key: &Self::Key) -> ApiResult<Option<Self::Draft>>;
}

// ---------------------------------------------------------------------------
// Jobs
// ---------------------------------------------------------------------------

impl ListEntity for JobPosting {
    const LABEL: &'static str = "Job";
    const PLURAL: &'static str = "jobs";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        [self.title.as_deref(), self.company_name()]
            .into_iter()
            .flatten()
            .collect()
    }
}

#[async_trait]
impl CollectionResource for JobsApi {
    type Entity = JobPosting;

    async fn get_all(&self) -> ApiResult<Listing<JobPosting>> {
        JobsApi::get_all(self).await
    }

    async fn delete(&self, id: &EntityId) -> ApiResult<()> {
        JobsApi::delete(self, id).await
    }
}

#[async_trait]
impl SaveTarget for JobsApi {
    type Draft = JobDraft;
    type Key = EntityId;
    const LABEL: &'static str = "Job";

    async fn create(&self, draft: &JobDraft) -> ApiResult<()> {
        JobsApi::create(self, draft).await
    }

    async fn update(&self, key: &EntityId, draft: &JobDraft) -> ApiResult<()> {
        JobsApi::update(self, key, draft).await
    }
}

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

impl ListEntity for Category {
    const LABEL: &'static str = "Category";
    const PLURAL: &'static str = "categories";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        self.name.as_deref().into_iter().collect()
    }
}

#[async_trait]
impl CollectionResource for CategoriesApi {
    type Entity = Category;

    async fn get_all(&self) -> ApiResult<Listing<Category>> {
        CategoriesApi::get_all(self).await
    }

    async fn delete(&self, id: &EntityId) -> ApiResult<()> {
        CategoriesApi::delete(self, id).await
    }
}

#[async_trait]
impl SaveTarget for CategoriesApi {
    type Draft = CategoryDraft;
    type Key = EntityId;
    const LABEL: &'static str = "Category";

    async fn create(&self, draft: &CategoryDraft) -> ApiResult<()> {
        CategoriesApi::create(self, draft).await
    }

    async fn update(&self, key: &EntityId, draft: &CategoryDraft) -> ApiResult<()> {
        CategoriesApi::update(self, key, draft).await
    }
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

impl ListEntity for User {
    const LABEL: &'static str = "User";
    const PLURAL: &'static str = "users";

    fn id(&self) -> &EntityId {
        &self.id
    }

    fn search_fields(&self) -> Vec<&str> {
        [
            self.first_name.as_deref(),
            self.last_name.as_deref(),
            self.email.as_deref(),
            self.company_name.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

#[async_trait]
impl CollectionResource for UsersApi {
    type Entity = User;

    async fn get_all(&self) -> ApiResult<Listing<User>> {
        UsersApi::get_all(self).await
    }

    async fn delete(&self, id: &EntityId) -> ApiResult<()> {
        UsersApi::delete(self, id).await
    }
}

#[async_trait]
impl SaveTarget for UsersApi {
    type Draft = UserDraft;
    type Key = EntityId;
    const LABEL: &'static str = "User";
    const CAN_CREATE: bool = false;

    async fn create(&self, _draft: &UserDraft) -> ApiResult<()> {
        Err(ApiError::Unsupported {
            resource: "users",
            operation: "create",
        })
    }

    async fn update(&self, key: &EntityId, draft: &UserDraft) -> ApiResult<()> {
        UsersApi::update(self, key, draft).await
    }
}

// ---------------------------------------------------------------------------
// Singletons
// ---------------------------------------------------------------------------

#[async_trait]
impl SaveTarget for WebsiteSettingsApi {
    type Draft = WebsiteSettings;
    type Key = ();
    const LABEL: &'static str = "Website settings";
    const CAN_CREATE: bool = false;

    async fn create(&self, _draft: &WebsiteSettings) -> ApiResult<()> {
        Err(ApiError::Unsupported {
            resource: "website-settings",
            operation: "create",
        })
    }

    async fn update(&self, _key: &(), draft: &WebsiteSettings) -> ApiResult<()> {
        WebsiteSettingsApi::update(self, draft).await
    }
}

#[async_trait]
impl SingletonResource for WebsiteSettingsApi {
    async fn load(&self, _key: &()) -> ApiResult<Option<WebsiteSettings>> {
        self.get().await
    }
}

#[async_trait]
impl SaveTarget for PageSeoApi {
    type Draft = PageSeo;
    type Key = PageName;
    const LABEL: &'static str = "SEO settings";
    const CAN_CREATE: bool = false;

    async fn create(&self, _draft: &PageSeo) -> ApiResult<()> {
        Err(ApiError::Unsupported {
            resource: "page-seo",
            operation: "create",
        })
    }

    async fn update(&self, key: &PageName, draft: &PageSeo) -> ApiResult<()> {
        PageSeoApi::update(self, *key, draft).await
    }
}

#[async_trait]
impl SingletonResource for PageSeoApi {
    async fn load(&self, key: &PageName) -> ApiResult<Option<PageSeo>> {
        self.get(*key).await
    }
}
