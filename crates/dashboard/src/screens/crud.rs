//! List-plus-form screens for the collection resources.

use std::sync::Arc;

use harpal_client::models::category::Category;
use harpal_client::models::user::User;
use harpal_client::resources::{CategoriesApi, JobsApi, UsersApi};
use harpal_core::types::EntityId;

use crate::error::{DashboardError, DashboardResult};
use crate::form::FormController;
use crate::list::{Confirmation, ListController, RefreshOutcome, StalePolicy};
use crate::notify::Notifier;
use crate::resource::{CollectionResource, ListEntity, SaveTarget};
use crate::screens::overview::{CategorySummary, UserSummary};

pub type JobsScreen = CrudScreen<JobsApi>;
pub type UsersScreen = CrudScreen<UsersApi>;
pub type CategoriesScreen = CrudScreen<CategoriesApi>;

type DraftOf<R> = <R as SaveTarget>::Draft;

/// A list controller and, while one is open, the form editing one of its
/// entries.
///
/// A successful save closes the form and refreshes the list exactly once.
pub struct CrudScreen<R>
where
    R: CollectionResource + SaveTarget<Key = EntityId>,
{
    resource: Arc<R>,
    notifier: Arc<dyn Notifier>,
    list: ListController<R>,
    form: Option<FormController<DraftOf<R>, EntityId>>,
}

impl<R> CrudScreen<R>
where
    R: CollectionResource + SaveTarget<Key = EntityId>,
    for<'a> DraftOf<R>: From<&'a R::Entity>,
{
    pub fn new(resource: Arc<R>, notifier: Arc<dyn Notifier>, policy: StalePolicy) -> Self {
        let list = ListController::new(Arc::clone(&resource), Arc::clone(&notifier)).with_policy(policy);
        Self {
            resource,
            notifier,
            list,
            form: None,
        }
    }

    /// Initial load when the screen becomes active.
    pub async fn mount(&mut self) -> DashboardResult<RefreshOutcome> {
        tracing::debug!(entity = <R::Entity as ListEntity>::PLURAL, "Mounting screen");
        self.list.refresh().await
    }

    pub async fn refresh(&mut self) -> DashboardResult<RefreshOutcome> {
        self.list.refresh().await
    }

    pub fn list(&self) -> &ListController<R> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ListController<R> {
        &mut self.list
    }

    pub fn form(&self) -> Option<&FormController<DraftOf<R>, EntityId>> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut FormController<DraftOf<R>, EntityId>> {
        self.form.as_mut()
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.list.set_search_query(query);
    }

    /// Open a blank form. Refused for resources the backend cannot create.
    pub fn begin_create(&mut self) -> DashboardResult<()> {
        if !R::CAN_CREATE {
            return Err(DashboardError::Unavailable(format!(
                "New {} cannot be added from the dashboard",
                <R::Entity as ListEntity>::PLURAL
            )));
        }
        self.list.begin_create();
        self.form = Some(FormController::create(Arc::clone(&self.notifier)));
        Ok(())
    }

    /// Open a form hydrated from the loaded entry `id`.
    pub fn begin_edit(&mut self, id: &EntityId) -> DashboardResult<()> {
        let entity = self
            .list
            .find(id)
            .cloned()
            .ok_or_else(|| DashboardError::NotLoaded {
                entity: <R::Entity as ListEntity>::LABEL,
                id: id.clone(),
            })?;
        let draft: DraftOf<R> = From::from(&entity);
        self.list.begin_edit(entity);
        self.form = Some(FormController::edit(
            id.clone(),
            draft,
            Arc::clone(&self.notifier),
        ));
        Ok(())
    }

    pub fn set_field(&mut self, name: &str, raw: &str) -> DashboardResult<()> {
        let form = self.form.as_mut().ok_or(DashboardError::NoForm)?;
        form.set_field(name, raw)?;
        Ok(())
    }

    /// Submit the open form; on success close it and refresh the list.
    pub async fn submit(&mut self) -> DashboardResult<()> {
        let form = self.form.as_mut().ok_or(DashboardError::NoForm)?;
        form.submit(&*self.resource).await?;

        self.form = None;
        self.list.close_form();
        // Already reported by the list controller.
        let _ = self.list.refresh().await;
        Ok(())
    }

    pub fn cancel(&mut self) {
        if let Some(form) = self.form.take() {
            form.cancel();
        }
        self.list.close_form();
    }

    pub async fn remove(&mut self, id: &EntityId, confirmation: Confirmation) -> DashboardResult<()> {
        self.list.remove(id, confirmation).await
    }
}

impl<R> CrudScreen<R>
where
    R: CollectionResource<Entity = User> + SaveTarget<Key = EntityId>,
{
    /// Totals over every loaded user, ignoring the search query.
    pub fn user_summary(&self) -> UserSummary {
        UserSummary::of(self.list.items())
    }
}

impl<R> CrudScreen<R>
where
    R: CollectionResource<Entity = Category> + SaveTarget<Key = EntityId>,
{
    /// Totals over every loaded category, ignoring the search query.
    pub fn category_summary(&self) -> CategorySummary {
        CategorySummary::of(self.list.items())
    }
}
