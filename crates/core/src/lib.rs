//! # Reflexion Core
//!
//! Domain types, traits, and error definitions for the Reflexion
//! self-reflection memory. This crate has **no framework dependencies**; it
//! defines the model that the provider and agent crates implement against.
//!
//! ## Layout
//!
//! - [`message`]: the chat messages sent to a language model
//! - [`provider`]: the `Provider` trait over LLM backends
//! - [`strategy`]: the closed set of reflection strategies
//! - [`error`]: bounded-context error enums

pub mod error;
pub mod message;
pub mod provider;
pub mod strategy;

// Re-export key types at crate root for ergonomics
pub use error::{ProviderError, ReflectError};
pub use message::{Message, Role};
pub use provider::{Provider, ProviderRequest, ProviderResponse, Usage};
pub use strategy::ReflectionStrategy;
