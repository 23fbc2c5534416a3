//! Update-in-place settings screens (website settings, per-page SEO).

use std::sync::Arc;

use harpal_client::resources::{PageSeoApi, WebsiteSettingsApi};

use crate::error::{DashboardError, DashboardResult};
use crate::form::FormController;
use crate::notify::{Notification, Notifier};
use crate::resource::SingletonResource;

pub type WebsiteSettingsScreen = SingletonScreen<WebsiteSettingsApi>;
pub type PageSeoScreen = SingletonScreen<PageSeoApi>;

/// A single always-open form bound to one key of a singleton resource.
///
/// When the backend holds no record yet (404 or `null`) the form shows the
/// draft's empty defaults and the first save creates the record. Saving is
/// refused until a load has succeeded for the current key, so a failed read
/// never turns into blank fields written over the stored record.
pub struct SingletonScreen<T: SingletonResource> {
    resource: Arc<T>,
    notifier: Arc<dyn Notifier>,
    key: T::Key,
    form: FormController<T::Draft, T::Key>,
    is_loading: bool,
    loaded: bool,
}

impl<T: SingletonResource> SingletonScreen<T> {
    pub fn new(resource: Arc<T>, key: T::Key, notifier: Arc<dyn Notifier>) -> Self {
        let form = FormController::edit(key.clone(), T::Draft::default(), Arc::clone(&notifier));
        Self {
            resource,
            notifier,
            key,
            form,
            is_loading: false,
            loaded: false,
        }
    }

    pub fn key(&self) -> &T::Key {
        &self.key
    }

    pub fn form(&self) -> &FormController<T::Draft, T::Key> {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormController<T::Draft, T::Key> {
        &mut self.form
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Whether the form holds the stored record (or defaults for a missing
    /// one) for the current key.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Fetch the record for the current key into the form.
    ///
    /// On failure the form keeps whatever it showed before.
    pub async fn load(&mut self) -> DashboardResult<()> {
        self.is_loading = true;
        let key = self.key.clone();
        let result = self.resource.load(&key).await;
        self.is_loading = false;

        match result {
            Ok(Some(draft)) => {
                tracing::debug!(resource = T::LABEL, ?key, "Loaded");
                self.form.replace_fields(draft);
                self.loaded = true;
                Ok(())
            }
            Ok(None) => {
                tracing::debug!(resource = T::LABEL, ?key, "No record stored, using defaults");
                self.form.replace_fields(T::Draft::default());
                self.loaded = true;
                Ok(())
            }
            Err(e) if e.is_not_found() => {
                tracing::debug!(resource = T::LABEL, ?key, "Record not found, using defaults");
                self.form.replace_fields(T::Draft::default());
                self.loaded = true;
                Ok(())
            }
            Err(e) => {
                tracing::error!(resource = T::LABEL, ?key, error = %e, "Failed to fetch");
                self.notifier.notify(Notification::error(format!(
                    "Failed to fetch {}",
                    T::LABEL.to_lowercase()
                )));
                Err(e.into())
            }
        }
    }

    /// Switch to `key`, discarding unsaved edits, and load it.
    pub async fn select(&mut self, key: T::Key) -> DashboardResult<()> {
        self.form = FormController::edit(key.clone(), T::Draft::default(), Arc::clone(&self.notifier));
        self.key = key;
        self.loaded = false;
        self.load().await
    }

    pub fn set_field(&mut self, name: &str, raw: &str) -> DashboardResult<()> {
        self.form.set_field(name, raw)?;
        Ok(())
    }

    pub async fn submit(&mut self) -> DashboardResult<()> {
        if !self.loaded {
            tracing::warn!(resource = T::LABEL, key = ?self.key, "Save refused before a successful load");
            return Err(DashboardError::Unavailable(format!(
                "{} not loaded; refresh before saving",
                T::LABEL
            )));
        }
        self.form.submit(&*self.resource).await
    }
}
