//! `reflexion reflect` — Critique one failed attempt.
//!
//! Loads the stored window (if any), runs a single reflection with the
//! configured provider, prints the rendered text for the next attempt and
//! saves the updated window back.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use reflexion_agent::reflexion::prompts::{COT_REFLECT_EXAMPLES, REACT_REFLECT_EXAMPLES};
use reflexion_agent::{
    CotCritic, CritiqueGenerator, ReactCritic, ReflectError, ReflectResult, ReflectionWindow,
    Reflector,
};
use reflexion_config::{AppConfig, ConfigError, ReflectionConfig};

use super::window;

/// Trace style of the failed attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TraceVariant {
    /// Chain-of-thought: reasoning followed by a final answer
    Cot,
    /// ReAct: interleaved Thought / Action / Observation steps
    React,
}

impl TraceVariant {
    fn default_examples(self) -> &'static str {
        match self {
            TraceVariant::Cot => COT_REFLECT_EXAMPLES,
            TraceVariant::React => REACT_REFLECT_EXAMPLES,
        }
    }
}

pub struct ReflectArgs {
    pub variant: TraceVariant,
    pub strategy: Option<String>,
    pub question: String,
    pub scratchpad_file: PathBuf,
    pub examples_file: Option<PathBuf>,
    pub context_file: Option<PathBuf>,
    pub window_file: Option<PathBuf>,
    pub model: Option<String>,
    pub max_reflections: Option<usize>,
}

/// The failed attempt, as read from disk.
struct Attempt {
    strategy: String,
    examples: String,
    question: String,
    scratchpad: String,
    context: Option<String>,
}

pub async fn run(args: ReflectArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    let attempt = Attempt {
        strategy: args
            .strategy
            .clone()
            .unwrap_or_else(|| config.reflection.default_strategy.to_string()),
        examples: match &args.examples_file {
            Some(path) => read_file(path)?,
            None => args.variant.default_examples().to_string(),
        },
        question: args.question.clone(),
        scratchpad: read_file(&args.scratchpad_file)?,
        context: args.context_file.as_deref().map(read_file).transpose()?,
    };

    let reflection_config = effective_reflection_config(&config, args.max_reflections)
        .map_err(|e| format!("Invalid --max-reflections: {e}"))?;
    let seed = match &args.window_file {
        Some(path) => window::load(path)?,
        None => ReflectionWindow::new(),
    };

    let router = reflexion_providers::router::build_from_config(&config);
    let (provider, model) = router
        .resolve(args.model.as_deref())
        .ok_or("No default provider configured")?;
    if !config.has_api_key() {
        tracing::warn!(provider = provider.name(), "No API key configured");
    }

    tracing::info!(
        variant = ?args.variant,
        strategy = %attempt.strategy,
        model = %model,
        prior = seed.len(),
        "Reflecting on failed attempt"
    );

    let result = match args.variant {
        TraceVariant::Cot => {
            let critic = CotCritic::new(provider, &model)
                .with_temperature(config.default_temperature)
                .with_max_tokens(config.default_max_tokens);
            reflect_once(
                Reflector::from_config(critic, &reflection_config).with_reflections(seed),
                &attempt,
            )
            .await?
        }
        TraceVariant::React => {
            let critic = ReactCritic::new(provider, &model)
                .with_temperature(config.default_temperature)
                .with_max_tokens(config.default_max_tokens);
            reflect_once(
                Reflector::from_config(critic, &reflection_config).with_reflections(seed),
                &attempt,
            )
            .await?
        }
    };

    if let Some(path) = &args.window_file {
        window::save(path, &ReflectionWindow::from(result.reflections.clone()))?;
    }

    println!("{}", result.rendered);
    Ok(())
}

async fn reflect_once<G: CritiqueGenerator>(
    mut reflector: Reflector<G>,
    attempt: &Attempt,
) -> Result<ReflectResult, ReflectError> {
    reflector
        .reflect(
            &attempt.strategy,
            &attempt.examples,
            &attempt.question,
            &attempt.scratchpad,
            attempt.context.as_deref(),
        )
        .await
}

/// The `[reflection]` section with command-line overrides applied.
///
/// Overrides go through the same validation as the config file, so a
/// zero-sized window can never truncate a stored window to nothing.
fn effective_reflection_config(
    config: &AppConfig,
    max_reflections: Option<usize>,
) -> Result<ReflectionConfig, ConfigError> {
    let mut effective = config.clone();
    if let Some(max) = max_reflections {
        effective.reflection.max_reflections = max;
    }
    effective.validate()?;
    Ok(effective.reflection)
}

fn read_file(path: &Path) -> Result<String, Box<dyn std::error::Error>> {
    std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()).into())
}
