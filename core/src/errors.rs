use thiserror::Error;

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Event must be a JSON object, got {found}")]
    EventNotObject { found: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HandlerError>;

impl HandlerError {
    /// Short label of the JSON type that was received instead of an object.
    pub(crate) fn event_not_object(value: &serde_json::Value) -> Self {
        let found = match value {
            serde_json::Value::Null => "null",
            serde_json::Value::Bool(_) => "a boolean",
            serde_json::Value::Number(_) => "a number",
            serde_json::Value::String(_) => "a string",
            serde_json::Value::Array(_) => "an array",
            serde_json::Value::Object(_) => "an object",
        };
        HandlerError::EventNotObject {
            found: found.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_not_object_message() {
        let err = HandlerError::event_not_object(&json!([1, 2]));
        assert_eq!(err.to_string(), "Event must be a JSON object, got an array");
    }

    #[test]
    fn test_serialization_error_converts() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: HandlerError = source.into();
        assert!(matches!(err, HandlerError::Serialization(_)));
        assert!(err.to_string().starts_with("Serialization error: "));
    }
}
