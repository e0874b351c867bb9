//! Reflection memory for Reflexion agents.
//!
//! A failed attempt goes in; an updated critique window and the text to
//! inject into the next attempt come out:
//!
//! 1. **Parse** the strategy literal (`last_attempt`, `reflexion`,
//!    `last_attempt_and_reflexion`)
//! 2. **Critique** the failed trial through a [`CritiqueGenerator`]
//!    (skipped for `last_attempt`)
//! 3. **Bound** the window to the most recent `max_reflections` critiques
//! 4. **Render** the last trial and/or the window for the next prompt

pub mod reflexion;
pub mod render;

pub use reflexion::{
    CotCritic, CotReflector, CritiqueGenerator, CritiqueRequest, LlmCritic, ReactCritic,
    ReactReflector, ReflectResult, ReflectionWindow, Reflector,
};
pub use render::{format_last_attempt, format_reflections, truncate_scratchpad};
pub use reflexion_core::{ReflectError, ReflectionStrategy};
