/// Local failure raised before any request leaves the dashboard.
///
/// These are never sent to the backend; the form that produced them stays
/// open with its values intact.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please fill in all required fields: {}", fields.join(", "))]
    RequiredFields { fields: Vec<String> },

    #[error("Invalid value for {field}: {reason}")]
    InvalidField { field: String, reason: String },

    #[error("Unknown field: {0}")]
    UnknownField(String),
}

impl ValidationError {
    /// Names of the offending fields, for highlighting in a front end.
    pub fn fields(&self) -> Vec<&str> {
        match self {
            ValidationError::RequiredFields { fields } => {
                fields.iter().map(String::as_str).collect()
            }
            ValidationError::InvalidField { field, .. } => vec![field.as_str()],
            ValidationError::UnknownField(field) => vec![field.as_str()],
        }
    }
}
