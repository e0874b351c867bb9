//! Shared test helpers for reflexion tests.

use reflexion_core::error::ProviderError;
use reflexion_core::message::Message;
use reflexion_core::provider::{Provider, ProviderRequest, ProviderResponse, Usage};
use std::sync::Mutex;

use super::critic::{CritiqueGenerator, CritiqueRequest};

/// A mock provider that returns a sequence of scripted responses.
///
/// Each call to `complete` returns the next response in the queue and
/// records the request. Panics if more calls are made than responses provided.
pub struct SequentialMockProvider {
    responses: Mutex<Vec<ProviderResponse>>,
    requests: Mutex<Vec<ProviderRequest>>,
}

impl SequentialMockProvider {
    pub fn new(responses: Vec<ProviderResponse>) -> Self {
        Self {
            responses: Mutex::new(responses),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Create a provider that answers with each text in turn.
    pub fn texts(texts: &[&str]) -> Self {
        Self::new(texts.iter().map(|t| make_text_response(t)).collect())
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<ProviderRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Provider for SequentialMockProvider {
    fn name(&self) -> &str {
        "sequential_mock"
    }

    async fn complete(&self, request: ProviderRequest) -> Result<ProviderResponse, ProviderError> {
        let mut requests = self.requests.lock().unwrap();
        let responses = self.responses.lock().unwrap();

        if requests.len() >= responses.len() {
            panic!(
                "SequentialMockProvider: no more responses (call #{}, have {})",
                requests.len(),
                responses.len()
            );
        }

        let response = responses[requests.len()].clone();
        requests.push(request);
        Ok(response)
    }
}

/// A provider whose every call fails with the same error.
pub struct FailingProvider {
    error: ProviderError,
}

impl FailingProvider {
    pub fn new(error: ProviderError) -> Self {
        Self { error }
    }
}

#[async_trait::async_trait]
impl Provider for FailingProvider {
    fn name(&self) -> &str {
        "failing_mock"
    }

    async fn complete(&self, _request: ProviderRequest) -> Result<ProviderResponse, ProviderError> {
        Err(self.error.clone())
    }
}

/// Create a simple text response.
pub fn make_text_response(text: &str) -> ProviderResponse {
    ProviderResponse {
        message: Message::assistant(text),
        usage: Some(Usage {
            prompt_tokens: 10,
            completion_tokens: 5,
            total_tokens: 15,
        }),
        model: "mock-model".into(),
        metadata: serde_json::Map::new(),
    }
}

/// A critique generator that replays scripted results without a provider.
///
/// Records how many prior reflections each call saw.
pub struct ScriptedCritic {
    results: Mutex<Vec<Result<String, ProviderError>>>,
    seen_window_sizes: Mutex<Vec<usize>>,
}

impl ScriptedCritic {
    pub fn new(results: Vec<Result<String, ProviderError>>) -> Self {
        Self {
            results: Mutex::new(results),
            seen_window_sizes: Mutex::new(Vec::new()),
        }
    }

    pub fn critiques(critiques: &[&str]) -> Self {
        Self::new(critiques.iter().map(|c| Ok(c.to_string())).collect())
    }

    pub fn calls(&self) -> usize {
        self.seen_window_sizes.lock().unwrap().len()
    }

    pub fn seen_window_sizes(&self) -> Vec<usize> {
        self.seen_window_sizes.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl CritiqueGenerator for ScriptedCritic {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn generate(&self, request: &CritiqueRequest<'_>) -> Result<String, ProviderError> {
        let mut seen = self.seen_window_sizes.lock().unwrap();
        let results = self.results.lock().unwrap();
        let index = seen.len();
        if index >= results.len() {
            panic!("ScriptedCritic: no more critiques (call #{index})");
        }
        seen.push(request.reflections.len());
        results[index].clone()
    }
}
