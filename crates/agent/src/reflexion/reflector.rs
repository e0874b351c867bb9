//! The reflector — a bounded critique window plus its rendered form.
//!
//! # Lifecycle
//!
//! A reflector is created once per episode and starts empty. Each failed
//! attempt goes through [`Reflector::reflect`]:
//!
//! 1. The strategy literal is parsed; unknown literals fail before anything else.
//! 2. Critique-generating strategies ask the [`CritiqueGenerator`] for one
//!    new critique and append it to a copy of the window.
//! 3. The copy is cut down to the last `max_reflections` entries.
//! 4. The rendered string is rebuilt from scratch for the strategy.
//! 5. Window and rendered string are committed together.
//!
//! Any failure returns before step 5, so the stored state never changes on
//! error. [`Reflector::clear`] empties both.

use reflexion_config::ReflectionConfig;
use reflexion_core::error::ReflectError;
use reflexion_core::ReflectionStrategy;
use serde::Serialize;
use tracing::debug;

use super::critic::{CotCritic, CritiqueGenerator, CritiqueRequest, ReactCritic};
use super::window::ReflectionWindow;
use crate::render::{render, truncate_scratchpad};

/// Default window capacity.
pub const DEFAULT_MAX_REFLECTIONS: usize = 3;

/// Stateful reflection memory for one episode.
pub struct Reflector<G> {
    generator: G,
    window: ReflectionWindow,
    rendered: String,
    max_reflections: usize,
    scratchpad_token_limit: Option<usize>,
}

/// Reflector for chain-of-thought agents.
pub type CotReflector = Reflector<CotCritic>;

/// Reflector for ReAct agents.
pub type ReactReflector = Reflector<ReactCritic>;

/// The state after a successful `reflect` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReflectResult {
    /// Strategy that produced this state.
    pub strategy: ReflectionStrategy,
    /// The window, oldest first.
    pub reflections: Vec<String>,
    /// Text to inject into the next attempt's prompt.
    pub rendered: String,
}

impl<G: CritiqueGenerator> Reflector<G> {
    /// Create an empty reflector with the default window capacity.
    pub fn new(generator: G) -> Self {
        Self {
            generator,
            window: ReflectionWindow::new(),
            rendered: String::new(),
            max_reflections: DEFAULT_MAX_REFLECTIONS,
            scratchpad_token_limit: None,
        }
    }

    /// Create an empty reflector configured from a `[reflection]` section.
    pub fn from_config(generator: G, config: &ReflectionConfig) -> Self {
        let reflector = Self::new(generator).with_max_reflections(config.max_reflections);
        match config.scratchpad_token_limit {
            Some(limit) => reflector.with_scratchpad_token_limit(limit),
            None => reflector,
        }
    }

    /// Set the window capacity. Existing entries beyond it are evicted
    /// oldest-first.
    pub fn with_max_reflections(mut self, max: usize) -> Self {
        self.max_reflections = max;
        self.window.keep_last(max);
        self
    }

    /// Shrink the previous-trial block to about `limit` tokens.
    pub fn with_scratchpad_token_limit(mut self, limit: usize) -> Self {
        self.scratchpad_token_limit = Some(limit);
        self
    }

    /// Seed the window with critiques from an earlier run, oldest first.
    ///
    /// The rendered string stays empty until the next `reflect`.
    pub fn with_reflections(mut self, reflections: impl Into<ReflectionWindow>) -> Self {
        self.window = reflections.into();
        self.window.keep_last(self.max_reflections);
        self
    }

    /// Parse `strategy` and reflect on a failed attempt.
    ///
    /// `context` is only read by generators that use it (the CoT critic).
    pub async fn reflect(
        &mut self,
        strategy: &str,
        examples: &str,
        question: &str,
        scratchpad: &str,
        context: Option<&str>,
    ) -> Result<ReflectResult, ReflectError> {
        let strategy: ReflectionStrategy = strategy.parse()?;
        self.reflect_with(strategy, examples, question, scratchpad, context)
            .await
    }

    /// Reflect on a failed attempt with an already-parsed strategy.
    pub async fn reflect_with(
        &mut self,
        strategy: ReflectionStrategy,
        examples: &str,
        question: &str,
        scratchpad: &str,
        context: Option<&str>,
    ) -> Result<ReflectResult, ReflectError> {
        let mut window = self.window.clone();

        // A zero-capacity window would discard the critique immediately.
        if strategy.generates_critique() && self.max_reflections > 0 {
            let critique = self
                .generator
                .generate(&CritiqueRequest {
                    reflections: self.window.as_slice(),
                    examples,
                    question,
                    scratchpad,
                    context,
                })
                .await?;
            window.push(critique);
        }

        window.keep_last(self.max_reflections);

        let scratchpad = match self.scratchpad_token_limit {
            Some(limit) if strategy.includes_last_attempt() => {
                truncate_scratchpad(scratchpad, limit)
            }
            _ => scratchpad.to_string(),
        };
        let rendered = render(strategy, window.as_slice(), question, &scratchpad);

        self.window = window;
        self.rendered = rendered;

        debug!(
            generator = self.generator.name(),
            strategy = %strategy,
            window = self.window.len(),
            max = self.max_reflections,
            "Reflection state updated"
        );

        Ok(ReflectResult {
            strategy,
            reflections: self.window.as_slice().to_vec(),
            rendered: self.rendered.clone(),
        })
    }

    /// Reset the window and rendered string to empty.
    pub fn clear(&mut self) {
        self.window.clear();
        self.rendered.clear();
    }
}

impl<G> Reflector<G> {
    /// Current critiques, oldest first.
    pub fn reflections(&self) -> &[String] {
        self.window.as_slice()
    }

    pub fn window(&self) -> &ReflectionWindow {
        &self.window
    }

    /// The text produced by the last `reflect` call (empty after `clear`).
    pub fn rendered(&self) -> &str {
        &self.rendered
    }

    pub fn max_reflections(&self) -> usize {
        self.max_reflections
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Copy of the window for persistence.
    pub fn snapshot(&self) -> ReflectionWindow {
        self.window.clone()
    }
}
