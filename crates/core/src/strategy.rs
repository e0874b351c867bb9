//! Reflection strategies.
//!
//! Callers name a strategy with one of three exact, case-sensitive literals.
//! The literal is parsed into [`ReflectionStrategy`] once, at the boundary;
//! anything else is rejected with [`ReflectError::UnsupportedStrategy`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ReflectError;

/// What a reflector feeds into the next attempt's prompt.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReflectionStrategy {
    /// The raw previous trial only. No critique is generated.
    LastAttempt,
    /// The accumulated window of model-written critiques.
    #[default]
    Reflexion,
    /// The raw previous trial followed by the critique window.
    LastAttemptAndReflexion,
}

impl ReflectionStrategy {
    /// All strategies, in declaration order.
    pub const ALL: [ReflectionStrategy; 3] = [
        ReflectionStrategy::LastAttempt,
        ReflectionStrategy::Reflexion,
        ReflectionStrategy::LastAttemptAndReflexion,
    ];

    /// The literal callers use to select this strategy.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReflectionStrategy::LastAttempt => "last_attempt",
            ReflectionStrategy::Reflexion => "reflexion",
            ReflectionStrategy::LastAttemptAndReflexion => "last_attempt_and_reflexion",
        }
    }

    /// Whether this strategy asks the language model for a new critique.
    pub fn generates_critique(&self) -> bool {
        !matches!(self, ReflectionStrategy::LastAttempt)
    }

    /// Whether the rendered output includes the raw previous trial.
    pub fn includes_last_attempt(&self) -> bool {
        !matches!(self, ReflectionStrategy::Reflexion)
    }
}

impl fmt::Display for ReflectionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReflectionStrategy {
    type Err = ReflectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == s)
            .ok_or_else(|| ReflectError::UnsupportedStrategy(s.to_string()))
    }
}
