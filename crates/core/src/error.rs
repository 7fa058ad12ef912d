use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Invalid {entity} identifier: '{value}'")]
    InvalidIdentifier { entity: &'static str, value: String },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),
}

impl From<validator::ValidationErrors> for CoreError {
    fn from(errors: validator::ValidationErrors) -> Self {
        CoreError::Validation(errors.to_string())
    }
}

#[cfg(test)]
mod tests {
    use validator::Validate;

    use super::*;

    #[derive(Validate)]
    struct Named {
        #[validate(length(min = 1))]
        name: String,
    }

    #[test]
    fn validation_errors_name_the_field() {
        let err: CoreError = Named {
            name: String::new(),
        }
        .validate()
        .unwrap_err()
        .into();

        match err {
            CoreError::Validation(msg) => assert!(msg.contains("name"), "got: {msg}"),
            other => panic!("expected Validation, got {other:?}"),
        }
    }

    #[test]
    fn invalid_identifier_message_includes_value() {
        let err = CoreError::InvalidIdentifier {
            entity: "Project",
            value: "nope".into(),
        };
        assert_eq!(err.to_string(), "Invalid Project identifier: 'nope'");
    }
}
