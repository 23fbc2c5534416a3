//! Generic create/edit form over a typed draft.
//!
//! Fields are held as the draft struct itself. For text-driven front ends
//! every field is also addressable by its serialized (camelCase) name through
//! [`FormController::field`] and [`FormController::set_field`].

use std::sync::Arc;

use harpal_core::error::ValidationError;
use harpal_core::validation;
use serde_json::Value;

use crate::error::{DashboardError, DashboardResult};
use crate::notify::{Notification, Notifier};
use crate::resource::{FormDraft, SaveTarget};

/// Whether submitting creates a new record or updates the one under `K`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode<K> {
    Create,
    Update(K),
}

impl<K> FormMode<K> {
    pub fn is_create(&self) -> bool {
        matches!(self, FormMode::Create)
    }

    pub fn key(&self) -> Option<&K> {
        match self {
            FormMode::Create => None,
            FormMode::Update(key) => Some(key),
        }
    }
}

pub struct FormController<D, K> {
    fields: D,
    mode: FormMode<K>,
    is_submitting: bool,
    notifier: Arc<dyn Notifier>,
}

impl<D: FormDraft, K: Clone + std::fmt::Debug> FormController<D, K> {
    /// A blank form with the draft's defaults.
    pub fn create(notifier: Arc<dyn Notifier>) -> Self {
        Self {
            fields: D::default(),
            mode: FormMode::Create,
            is_submitting: false,
            notifier,
        }
    }

    /// A form hydrated from an existing record stored under `key`.
    pub fn edit(key: K, fields: D, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            fields,
            mode: FormMode::Update(key),
            is_submitting: false,
            notifier,
        }
    }

    pub fn fields(&self) -> &D {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut D {
        &mut self.fields
    }

    pub fn replace_fields(&mut self, fields: D) {
        self.fields = fields;
    }

    pub fn mode(&self) -> &FormMode<K> {
        &self.mode
    }

    pub fn is_submitting(&self) -> bool {
        self.is_submitting
    }

    // ---- field access by name ----

    /// Serialized field names, sorted.
    pub fn field_names(&self) -> Vec<String> {
        match serde_json::to_value(&self.fields) {
            Ok(Value::Object(map)) => map.keys().cloned().collect(),
            _ => Vec::new(),
        }
    }

    /// Current value of `name` rendered as text, or `None` for an unknown
    /// field.
    pub fn field(&self, name: &str) -> Option<String> {
        let value = serde_json::to_value(&self.fields).ok()?;
        value.get(name).map(display_value)
    }

    /// Set `name` from operator text.
    ///
    /// Text fields take `raw` verbatim. Boolean fields accept
    /// `true/false/yes/no/on/off/1/0`. Enum fields must name a known variant.
    /// On error the fields are left unchanged.
    pub fn set_field(&mut self, name: &str, raw: &str) -> Result<(), ValidationError> {
        let Ok(Value::Object(mut map)) = serde_json::to_value(&self.fields) else {
            return Err(ValidationError::UnknownField(name.to_string()));
        };
        let current = map
            .get(name)
            .ok_or_else(|| ValidationError::UnknownField(name.to_string()))?;

        let next = coerce(current, raw).map_err(|reason| ValidationError::InvalidField {
            field: name.to_string(),
            reason,
        })?;
        map.insert(name.to_string(), next);

        self.fields =
            serde_json::from_value(Value::Object(map)).map_err(|e| ValidationError::InvalidField {
                field: name.to_string(),
                reason: e.to_string(),
            })?;
        Ok(())
    }

    // ---- lifecycle ----

    /// Validate locally, then create or update through `target`.
    ///
    /// A validation failure is reported and returned without any request.
    /// On a backend failure the form keeps its values so the operator can
    /// retry.
    pub async fn submit<T>(&mut self, target: &T) -> DashboardResult<()>
    where
        T: SaveTarget<Draft = D, Key = K>,
    {
        if let Err(e) = validation::check(&self.fields) {
            tracing::debug!(resource = T::LABEL, error = %e, "Form rejected locally");
            self.notifier.notify(Notification::error(e.to_string()));
            return Err(e.into());
        }

        self.is_submitting = true;
        let result = match &self.mode {
            FormMode::Create => target.create(&self.fields).await,
            FormMode::Update(key) => target.update(key, &self.fields).await,
        };
        self.is_submitting = false;

        let verb = if self.mode.is_create() { "created" } else { "updated" };
        match result {
            Ok(()) => {
                tracing::info!(resource = T::LABEL, mode = ?self.mode, "Saved");
                self.notifier
                    .notify(Notification::success(format!("{} {verb} successfully", T::LABEL)));
                Ok(())
            }
            Err(e) => {
                tracing::error!(resource = T::LABEL, mode = ?self.mode, error = %e, "Failed to save");
                self.notifier.notify(Notification::error(format!(
                    "Failed to save {}",
                    T::LABEL.to_lowercase()
                )));
                Err(DashboardError::Api(e))
            }
        }
    }

    /// Discard the form without persisting anything.
    pub fn cancel(self) {
        tracing::debug!(mode = ?self.mode, "Form cancelled");
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn coerce(current: &Value, raw: &str) -> Result<Value, String> {
    match current {
        Value::Bool(_) => parse_bool(raw)
            .map(Value::Bool)
            .ok_or_else(|| format!("expected yes or no, got '{raw}'")),
        Value::Number(_) => raw
            .trim()
            .parse::<serde_json::Number>()
            .map(Value::Number)
            .map_err(|_| format!("expected a number, got '{raw}'")),
        _ => Ok(Value::String(raw.to_string())),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" | "on" | "1" => Some(true),
        "false" | "no" | "n" | "off" | "0" => Some(false),
        _ => None,
    }
}
