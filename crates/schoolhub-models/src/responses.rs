use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Generic success message response.
///
/// Returned by every delete endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "School deleted successfully")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Body of every error response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Access denied")]
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_response_serialize() {
        let body = serde_json::to_value(MessageResponse::new("Adm deleted successfully")).unwrap();
        assert_eq!(body, serde_json::json!({ "message": "Adm deleted successfully" }));
    }
}
