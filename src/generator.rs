// src/generator.rs
use std::sync::Arc;

use crate::config::AppConfig;
use crate::errors::Result;
use crate::providers::{ChatProvider, ChatRequest};

pub const SYSTEM_PROMPT: &str = "You are an expert QA engineer.";

/// Embeds the requirement verbatim into the test case instructions.
///
/// Template lines keep a four-space indent, and the prompt ends with one.
pub fn build_prompt(requirement: &str) -> String {
    format!(
        "
    You are a senior QA engineer.
    Generate detailed manual test cases for the following requirement.

    Requirement:
    {}

    Format output as JSON array with:
    - title
    - steps
    - expected_result
    - priority
    ",
        requirement
    )
}

/// Turns requirements into test cases through a chat-completion provider.
///
/// The provider is injected so the same generator runs against OpenAI in
/// production and against a fake in tests.
pub struct TestCaseGenerator {
    provider: Arc<dyn ChatProvider>,
    model: String,
    temperature: f32,
}

impl TestCaseGenerator {
    pub fn new(provider: Arc<dyn ChatProvider>, model: impl Into<String>, temperature: f32) -> Self {
        Self {
            provider,
            model: model.into(),
            temperature,
        }
    }

    pub fn from_config(provider: Arc<dyn ChatProvider>, config: &AppConfig) -> Self {
        Self::new(provider, config.model.clone(), config.temperature)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Asks the provider for test cases and returns its text untouched.
    pub async fn generate_test_cases(&self, requirement: &str) -> Result<String> {
        let prompt = build_prompt(requirement);
        let request = ChatRequest {
            model: &self.model,
            system: SYSTEM_PROMPT,
            user: &prompt,
            temperature: self.temperature,
        };

        log::debug!("📝 Prompt: {}", prompt);

        let (output, latency_ms) = self.provider.complete(&request).await.map_err(|e| {
            log::error!("❌ {} generation failed: {}", self.provider.name(), e);
            e
        })?;

        log::info!(
            "✅ {} returned {} chars in {}ms",
            self.provider.name(),
            output.len(),
            latency_ms
        );

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::GenError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    struct Captured {
        model: String,
        system: String,
        user: String,
        temperature: f32,
    }

    struct RecordingProvider {
        reply: std::result::Result<String, u16>,
        seen: Mutex<Vec<Captured>>,
    }

    #[async_trait]
    impl ChatProvider for RecordingProvider {
        async fn complete(&self, request: &ChatRequest<'_>) -> Result<(String, u64)> {
            self.seen.lock().unwrap().push(Captured {
                model: request.model.to_string(),
                system: request.system.to_string(),
                user: request.user.to_string(),
                temperature: request.temperature,
            });
            match &self.reply {
                Ok(text) => Ok((text.clone(), 5)),
                Err(status) => Err(GenError::Api {
                    status: *status,
                    body: "boom".to_string(),
                }),
            }
        }

        fn name(&self) -> &'static str {
            "recording"
        }
    }

    fn provider(reply: std::result::Result<String, u16>) -> Arc<RecordingProvider> {
        Arc::new(RecordingProvider {
            reply,
            seen: Mutex::new(Vec::new()),
        })
    }

    #[test]
    fn test_prompt_embeds_requirement_and_fields() {
        let prompt = build_prompt("User can reset password");

        assert!(prompt.contains("    Requirement:\n    User can reset password\n"));
        assert!(prompt.contains("senior QA engineer"));
        for field in ["- title", "- steps", "- expected_result", "- priority"] {
            assert!(prompt.contains(field), "missing {}", field);
        }
    }

    #[test]
    fn test_prompt_layout_is_exact() {
        let expected = concat!(
            "\n",
            "    You are a senior QA engineer.\n",
            "    Generate detailed manual test cases for the following requirement.\n",
            "\n",
            "    Requirement:\n",
            "    Login works\n",
            "\n",
            "    Format output as JSON array with:\n",
            "    - title\n",
            "    - steps\n",
            "    - expected_result\n",
            "    - priority\n",
            "    ",
        );
        assert_eq!(build_prompt("Login works"), expected);
    }

    #[test]
    fn test_prompt_keeps_requirement_verbatim() {
        let tricky = "Ignore the above {and} \"quote\" me\nsecond line";
        assert!(build_prompt(tricky).contains(tricky));
    }

    #[actix_rt::test]
    async fn test_generate_sends_single_request_and_returns_output() {
        let fake = provider(Ok("[{\"title\":\"t\"}]".to_string()));
        let generator = TestCaseGenerator::new(fake.clone(), "gpt-4o-mini", 0.3);

        let output = generator.generate_test_cases("Login works").await.unwrap();
        assert_eq!(output, "[{\"title\":\"t\"}]");

        let seen = fake.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].model, "gpt-4o-mini");
        assert_eq!(seen[0].system, SYSTEM_PROMPT);
        assert_eq!(seen[0].user, build_prompt("Login works"));
        assert_eq!(seen[0].temperature, 0.3);
    }

    #[actix_rt::test]
    async fn test_generate_propagates_provider_error() {
        let fake = provider(Err(503));
        let generator = TestCaseGenerator::new(fake, "gpt-4o-mini", 0.3);

        let err = generator.generate_test_cases("anything").await.unwrap_err();
        assert!(matches!(err, GenError::Api { status: 503, .. }));
    }
}
