//! Reflexion — self-critique memory for retrying agents.
//!
//! After a failed attempt the agent asks a language model why it failed;
//! the critiques accumulate in a bounded window that is rendered into the
//! next attempt's prompt.
//!
//! - [`reflector`]: the stateful window + rendered string
//! - [`critic`]: critique generators (CoT and ReAct flavors)
//! - [`prompts`]: reflection prompt templates and exemplars
//! - [`window`]: the bounded, serializable critique list

pub mod critic;
pub mod prompts;
pub mod reflector;
pub mod window;

pub use critic::{
    CotCritic, CotPrompt, CritiqueGenerator, CritiqueRequest, LlmCritic, PromptStyle,
    ReactCritic, ReactPrompt,
};
pub use reflector::{CotReflector, DEFAULT_MAX_REFLECTIONS, ReactReflector, ReflectResult, Reflector};
pub use window::ReflectionWindow;

#[cfg(test)]
pub(crate) mod test_helpers;
