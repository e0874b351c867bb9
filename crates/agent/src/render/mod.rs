//! Rendering — turns a reflection window or a failed trial into prompt text.
//!
//! Two textual forms exist: the *last trial* block (the raw question and
//! scratchpad of the previous attempt) and the *reflections* block (the
//! critique window as a bulleted list under a header). Every function here
//! is pure; the reflector recomputes its rendered string from scratch on
//! every call.

pub mod format;
pub mod token;

pub use format::{
    format_last_attempt, format_reflections, render, truncate_scratchpad, LAST_TRIAL_HEADER,
    REFLECTION_AFTER_LAST_TRIAL_HEADER, REFLECTION_HEADER,
};
pub use token::estimate_tokens;
