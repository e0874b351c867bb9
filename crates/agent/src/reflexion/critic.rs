//! Critique generation — the injected capability a reflector delegates to.
//!
//! A [`CritiqueGenerator`] turns one failed trial into one critique. The
//! built-in generators ([`CotCritic`], [`ReactCritic`]) share everything but
//! the prompt, which is supplied by a [`PromptStyle`].

use std::sync::Arc;

use async_trait::async_trait;
use reflexion_core::error::ProviderError;
use reflexion_core::message::Message;
use reflexion_core::provider::{Provider, ProviderRequest};
use tracing::debug;

use super::prompts::{cot_reflection_prompt, react_reflection_prompt};

/// Everything a generator may look at when writing a critique.
#[derive(Debug, Clone, Copy)]
pub struct CritiqueRequest<'a> {
    /// Critiques already in the window, oldest first.
    pub reflections: &'a [String],
    /// Few-shot exemplar text, opaque to the reflector.
    pub examples: &'a str,
    /// The task prompt.
    pub question: &'a str,
    /// Trace of the failed attempt.
    pub scratchpad: &'a str,
    /// Supplementary context, if any.
    pub context: Option<&'a str>,
}

/// Produces a new critique of a failed trial.
#[async_trait]
pub trait CritiqueGenerator: Send + Sync {
    /// A short name for logs (e.g., "cot", "react").
    fn name(&self) -> &str;

    /// Generate one critique. Errors propagate to the reflector's caller
    /// unchanged.
    async fn generate(&self, request: &CritiqueRequest<'_>) -> Result<String, ProviderError>;
}

/// Builds the reflection prompt for one trace style.
pub trait PromptStyle: Send + Sync {
    /// Short style name used in logs.
    const NAME: &'static str;

    fn build_prompt(&self, request: &CritiqueRequest<'_>) -> String;
}

/// Chain-of-thought traces. Includes the context when one is given.
#[derive(Debug, Clone, Copy, Default)]
pub struct CotPrompt;

impl PromptStyle for CotPrompt {
    const NAME: &'static str = "cot";

    fn build_prompt(&self, request: &CritiqueRequest<'_>) -> String {
        cot_reflection_prompt(
            request.examples,
            request.question,
            request.scratchpad,
            request.context,
        )
    }
}

/// Interleaved Thought/Action/Observation traces. Context is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReactPrompt;

impl PromptStyle for ReactPrompt {
    const NAME: &'static str = "react";

    fn build_prompt(&self, request: &CritiqueRequest<'_>) -> String {
        react_reflection_prompt(request.examples, request.question, request.scratchpad)
    }
}

/// A critique generator backed by an LLM [`Provider`].
pub struct LlmCritic<S> {
    provider: Arc<dyn Provider>,
    model: String,
    temperature: f32,
    max_tokens: Option<u32>,
    style: S,
}

/// Critic for chain-of-thought trials.
pub type CotCritic = LlmCritic<CotPrompt>;

/// Critic for ReAct trials.
pub type ReactCritic = LlmCritic<ReactPrompt>;

impl<S: PromptStyle + Default> LlmCritic<S> {
    /// Create a critic with temperature 0.0 and no token cap.
    pub fn new(provider: Arc<dyn Provider>, model: impl Into<String>) -> Self {
        Self::with_style(provider, model, S::default())
    }
}

impl<S: PromptStyle> LlmCritic<S> {
    pub fn with_style(provider: Arc<dyn Provider>, model: impl Into<String>, style: S) -> Self {
        Self {
            provider,
            model: model.into(),
            temperature: 0.0,
            max_tokens: None,
            style,
        }
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Cap the critique length.
    pub fn with_max_tokens(mut self, max: u32) -> Self {
        self.max_tokens = Some(max);
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl<S: PromptStyle> CritiqueGenerator for LlmCritic<S> {
    fn name(&self) -> &str {
        S::NAME
    }

    async fn generate(&self, request: &CritiqueRequest<'_>) -> Result<String, ProviderError> {
        let prompt = self.style.build_prompt(request);

        let response = self
            .provider
            .complete(ProviderRequest {
                model: self.model.clone(),
                messages: vec![Message::user(prompt)],
                temperature: self.temperature,
                max_tokens: self.max_tokens,
                stop: vec![],
            })
            .await?;

        let critique = normalize_critique(&response.message.content);
        if critique.is_empty() {
            return Err(ProviderError::InvalidResponse(format!(
                "{} returned an empty critique",
                self.provider.name()
            )));
        }

        debug!(
            style = S::NAME,
            model = %response.model,
            chars = critique.len(),
            "Critique generated"
        );
        Ok(critique)
    }
}

/// Collapse a model reply onto a single line.
///
/// Lines are trimmed, blank lines dropped, and the rest joined by a space.
pub fn normalize_critique(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
