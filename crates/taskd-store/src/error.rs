/// Errors surfaced by store operations. Both variants are expected,
/// recoverable conditions; callers map them to responses at the boundary.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("{0}")]
    Validation(String),

    #[error("task {0} not found")]
    NotFound(crate::task::TaskId),
}

impl StoreError {
    /// Short classification string for error envelopes and logging.
    pub fn error_kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "validation_error",
            Self::NotFound(_) => "not_found",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_kind_strings() {
        assert_eq!(
            StoreError::Validation("title must be non-empty".into()).error_kind(),
            "validation_error"
        );
        assert_eq!(StoreError::NotFound(7).error_kind(), "not_found");
    }

    #[test]
    fn not_found_message_names_the_id() {
        assert_eq!(StoreError::NotFound(42).to_string(), "task 42 not found");
    }
}
