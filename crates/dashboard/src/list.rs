//! Generic list controller: fetch, hold, filter and remove entities.
//!
//! The displayed set is always the result of the last applied successful
//! refresh. A failed refresh leaves it untouched.
//!
//! Refreshes are split into [`ListController::begin_refresh`] and
//! [`ListController::apply_refresh`] so that overlapping requests can be
//! ordered by generation. Under [`StalePolicy::LastWriteWins`] every
//! completion is applied in arrival order; under
//! [`StalePolicy::DiscardStale`] a completion older than the newest issued
//! ticket is dropped.

use std::sync::Arc;

use harpal_client::models::envelope::Listing;
use harpal_client::ApiResult;
use harpal_core::search::SearchQuery;
use harpal_core::types::EntityId;

use crate::error::{DashboardError, DashboardResult};
use crate::notify::{Notification, Notifier};
use crate::resource::{CollectionResource, ListEntity};

/// What to do with a refresh that completes after a newer one was issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StalePolicy {
    /// Apply every completion; a slow stale answer may overwrite fresher data.
    #[default]
    LastWriteWins,
    /// Drop completions whose ticket is older than the newest issued one.
    DiscardStale,
}

/// The operator's answer to "are you sure?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

/// Handle for one in-flight refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a refresh ticket must be passed to apply_refresh"]
pub struct RefreshTicket {
    generation: u64,
}

impl RefreshTicket {
    pub fn generation(self) -> u64 {
        self.generation
    }
}

/// How [`ListController::apply_refresh`] handled a completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Items were replaced with this many entries.
    Applied(usize),
    /// A newer refresh had been issued; the result was dropped.
    Discarded,
}

pub struct ListController<R: CollectionResource> {
    resource: Arc<R>,
    notifier: Arc<dyn Notifier>,
    policy: StalePolicy,
    items: Vec<R::Entity>,
    is_loading: bool,
    search: SearchQuery,
    selected: Option<R::Entity>,
    is_form_open: bool,
    issued: u64,
}

impl<R: CollectionResource> ListController<R> {
    const LABEL: &'static str = <R::Entity as ListEntity>::LABEL;
    const PLURAL: &'static str = <R::Entity as ListEntity>::PLURAL;

    pub fn new(resource: Arc<R>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            resource,
            notifier,
            policy: StalePolicy::default(),
            items: Vec::new(),
            is_loading: false,
            search: SearchQuery::default(),
            selected: None,
            is_form_open: false,
            issued: 0,
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: StalePolicy) -> Self {
        self.policy = policy;
        self
    }

    // ---- state ----

    pub fn items(&self) -> &[R::Entity] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn search_query(&self) -> &str {
        self.search.as_str()
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search = SearchQuery::new(query);
    }

    pub fn selected_item(&self) -> Option<&R::Entity> {
        self.selected.as_ref()
    }

    pub fn is_form_open(&self) -> bool {
        self.is_form_open
    }

    pub fn policy(&self) -> StalePolicy {
        self.policy
    }

    pub fn find(&self, id: &EntityId) -> Option<&R::Entity> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// The items matching the current search query, in their original order.
    ///
    /// The view is lazy and can be cloned to iterate again.
    pub fn filtered_items(&self) -> impl Iterator<Item = &R::Entity> + Clone + '_ {
        let search = &self.search;
        self.items
            .iter()
            .filter(move |item| search.matches(item.search_fields()))
    }

    // ---- refresh ----

    /// Mark the list as loading and issue a ticket for the next completion.
    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.issued += 1;
        self.is_loading = true;
        RefreshTicket {
            generation: self.issued,
        }
    }

    /// Fold a completed fetch into the list.
    ///
    /// On failure the items are kept, the error is logged and reported, and
    /// returned.
    pub fn apply_refresh(
        &mut self,
        ticket: RefreshTicket,
        result: ApiResult<Listing<R::Entity>>,
    ) -> DashboardResult<RefreshOutcome> {
        let is_newest = ticket.generation == self.issued;
        if is_newest || self.policy == StalePolicy::LastWriteWins {
            self.is_loading = false;
        }

        if !is_newest && self.policy == StalePolicy::DiscardStale {
            tracing::debug!(
                entity = Self::PLURAL,
                generation = ticket.generation,
                newest = self.issued,
                "Discarding stale refresh"
            );
            return Ok(RefreshOutcome::Discarded);
        }

        match result {
            Ok(listing) => {
                self.items = listing.into_items();
                tracing::debug!(
                    entity = Self::PLURAL,
                    count = self.items.len(),
                    generation = ticket.generation,
                    "List refreshed"
                );
                Ok(RefreshOutcome::Applied(self.items.len()))
            }
            Err(e) => {
                tracing::error!(entity = Self::PLURAL, error = %e, "Failed to fetch list");
                self.notifier
                    .notify(Notification::error(format!("Failed to fetch {}", Self::PLURAL)));
                Err(e.into())
            }
        }
    }

    /// Fetch the whole collection and replace the items with it.
    pub async fn refresh(&mut self) -> DashboardResult<RefreshOutcome> {
        let ticket = self.begin_refresh();
        let result = self.resource.get_all().await;
        self.apply_refresh(ticket, result)
    }

    // ---- form handoff ----

    pub fn begin_create(&mut self) {
        self.selected = None;
        self.is_form_open = true;
    }

    pub fn begin_edit(&mut self, entity: R::Entity) {
        self.selected = Some(entity);
        self.is_form_open = true;
    }

    pub fn close_form(&mut self) {
        self.selected = None;
        self.is_form_open = false;
    }

    // ---- remove ----

    /// Delete `id` on the backend, then refresh.
    ///
    /// Nothing is sent unless `confirmation` is [`Confirmation::Confirmed`].
    /// If the delete succeeds but the follow-up refresh fails, the stale list
    /// stays visible and the refresh failure is reported on its own; the
    /// delete itself still counts as done.
    pub async fn remove(&mut self, id: &EntityId, confirmation: Confirmation) -> DashboardResult<()> {
        if confirmation != Confirmation::Confirmed {
            tracing::debug!(entity = Self::PLURAL, %id, "Deletion declined");
            return Err(DashboardError::NotConfirmed(id.clone()));
        }

        if let Err(e) = self.resource.delete(id).await {
            tracing::error!(entity = Self::PLURAL, %id, error = %e, "Failed to delete");
            self.notifier.notify(Notification::error(format!(
                "Failed to delete {}",
                Self::LABEL.to_lowercase()
            )));
            return Err(e.into());
        }

        tracing::info!(entity = Self::PLURAL, %id, "Deleted");
        self.notifier.notify(Notification::success(format!(
            "{} deleted successfully",
            Self::LABEL
        )));

        // Already reported by `refresh`.
        let _ = self.refresh().await;
        Ok(())
    }
}
