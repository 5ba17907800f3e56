use async_trait::async_trait;

use crate::foundation::error::StudioResult;

/// One text-generation call.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    /// When set, the service is asked for JSON matching this schema.
    pub response_schema: Option<serde_json::Value>,
}

impl GenerateRequest {
    pub fn text(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            response_schema: None,
        }
    }

    pub fn json(
        model: impl Into<String>,
        prompt: impl Into<String>,
        schema: serde_json::Value,
    ) -> Self {
        Self {
            model: model.into(),
            prompt: prompt.into(),
            response_schema: Some(schema),
        }
    }
}

/// Remote generative model.
///
/// Implementations return the concatenated text of the first candidate, which may be empty.
#[async_trait]
pub trait GenerativeClient: Send + Sync {
    async fn generate(&self, request: GenerateRequest) -> StudioResult<String>;
}
