//! Port for the external generative-text collaborator

use serde::{Deserialize, Serialize};

/// A prompt plus bounded generation options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
    pub system_prompt: Option<String>,
    pub model: Option<String>,
    pub temperature: f32,
    pub max_output_tokens: Option<u32>,
}

impl GenerateRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            system_prompt: None,
            model: None,
            temperature: 0.7,
            max_output_tokens: None,
        }
    }

    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(system_prompt.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_output_tokens: Option<u32>) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }
}

/// Raw text back from the collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub content: String,
    pub model: String,
}

/// Interface the pipeline requires from a generative-text service
///
/// The only network seam in the core. Timeouts, quota rejections, and
/// transport faults all surface as `Self::Error`; callers treat every error
/// identically and fall back to deterministic defaults.
#[async_trait::async_trait]
pub trait CollaboratorPort: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn generate(&self, request: GenerateRequest) -> Result<GenerateResponse, Self::Error>;
}
