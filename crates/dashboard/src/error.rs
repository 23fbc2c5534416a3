use harpal_client::ApiError;
use harpal_core::error::ValidationError;
use harpal_core::types::EntityId;

/// Everything a dashboard operation can fail with.
///
/// By the time a caller sees one of these it has already been logged and
/// reported to the operator; callers only need it to decide what to show
/// next.
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    /// Rejected locally; nothing was sent.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The backend call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A destructive action was attempted without the operator's consent.
    #[error("Deletion of {0} was not confirmed")]
    NotConfirmed(EntityId),

    /// The id is not part of the currently loaded list.
    #[error("No {entity} with id {id} is loaded")]
    NotLoaded { entity: &'static str, id: EntityId },

    /// The operation needs an open form.
    #[error("No form is open")]
    NoForm,

    /// The screen does not offer this action.
    #[error("{0}")]
    Unavailable(String),
}

/// Convenience type alias for dashboard operations.
pub type DashboardResult<T> = Result<T, DashboardError>;
