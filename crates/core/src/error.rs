//! Error types for the Reflexion domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Each bounded context has its own error enum.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("API request failed: {message} (status: {status_code})")]
    ApiError {
        status_code: u16,
        message: String,
    },

    #[error("Rate limited by provider, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Network error: {0}")]
    Network(String),
}

/// Failures surfaced by a reflector's `reflect` call.
///
/// Neither variant leaves partial state behind: the reflection window and
/// its rendered string keep their pre-call values.
#[derive(Debug, Clone, Error)]
pub enum ReflectError {
    #[error("Unsupported reflection strategy: {0:?}")]
    UnsupportedStrategy(String),

    #[error("Reflection generation failed: {0}")]
    Generation(#[from] ProviderError),
}
