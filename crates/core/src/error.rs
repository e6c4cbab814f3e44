use crate::store::StoreError;
use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for CoreError {
    fn from(err: StoreError) -> Self {
        CoreError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreOp;

    #[test]
    fn store_errors_become_internal() {
        let err: CoreError = StoreError::Rejected(StoreOp::CreatePlot).into();
        match err {
            CoreError::Internal(msg) => assert!(msg.contains("create_plot")),
            other => panic!("expected Internal, got {other:?}"),
        }
    }

    #[test]
    fn not_found_display_names_entity() {
        let err = CoreError::NotFound {
            entity: "Project",
            id: 7,
        };
        assert_eq!(err.to_string(), "Entity not found: Project with id 7");
    }
}
