// src/models.rs
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::{GenError, Result};
use std::sync::OnceLock;

#[derive(Deserialize, Debug, Clone)]
pub struct RequirementRequest {
    pub requirement: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TestCasesResponse {
    /// Model output exactly as the provider returned it.
    pub test_cases: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parsed_test_cases: Option<Vec<TestCase>>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ErrorResponse {
    pub error: String,
    pub kind: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TestCase {
    pub title: String,
    pub steps: Steps,
    pub expected_result: String,
    pub priority: String,
}

/// Models return steps either as a list or as one numbered block of text.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Steps {
    List(Vec<String>),
    Text(String),
}

fn fence() -> &'static Regex {
    static FENCE: OnceLock<Regex> = OnceLock::new();
    FENCE.get_or_init(|| Regex::new(r"(?s)^\s*```[A-Za-z]*\s*\n(.*?)\n?\s*```\s*$").unwrap())
}

/// Parses generated text as a list of test cases.
///
/// A surrounding Markdown code fence is tolerated since chat models add one
/// even when asked for bare JSON.
pub fn parse_test_cases(raw: &str) -> Result<Vec<TestCase>> {
    let body = fence()
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map_or(raw, |m| m.as_str());

    serde_json::from_str(body.trim()).map_err(|e| GenError::InvalidOutput(e.to_string()))
}
