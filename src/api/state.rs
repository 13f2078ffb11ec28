// src/api/state.rs
use crate::config::AppConfig;
use crate::errors::Result;
use crate::generator::TestCaseGenerator;
use crate::providers::{openai::OpenAIProvider, ChatProvider};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub generator: Arc<TestCaseGenerator>,
}

impl AppState {
    /// Builds the OpenAI client once for the lifetime of the server.
    pub fn new(config: AppConfig) -> Result<Self> {
        let provider = OpenAIProvider::from_config(config.openai.clone())?;
        Ok(Self::with_provider(config, Arc::new(provider)))
    }

    pub fn with_provider(config: AppConfig, provider: Arc<dyn ChatProvider>) -> Self {
        let generator = TestCaseGenerator::from_config(provider, &config);
        Self {
            config: Arc::new(config),
            generator: Arc::new(generator),
        }
    }
}
