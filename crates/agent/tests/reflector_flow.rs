//! End-to-end tests for the reflection pipeline.
//!
//! These tests drive `CotReflector` and `ReactReflector` through a scripted
//! provider, covering prompt assembly, critique normalization, window
//! eviction and rendering across several retry cycles.

use std::sync::{Arc, Mutex};

use reflexion_agent::render::{LAST_TRIAL_HEADER, REFLECTION_AFTER_LAST_TRIAL_HEADER, REFLECTION_HEADER};
use reflexion_agent::{
    CotCritic, CotReflector, ReactCritic, ReactReflector, ReflectError, ReflectionWindow,
    format_last_attempt,
};
use reflexion_core::error::ProviderError;
use reflexion_core::message::Message;
use reflexion_core::provider::{Provider, ProviderRequest, ProviderResponse, Usage};

// ── Mock Provider ────────────────────────────────────────────────────────

/// A mock provider that returns scripted critiques in sequence.
struct ScriptedProvider {
    replies: Vec<Result<String, ProviderError>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedProvider {
    fn new(replies: Vec<Result<String, ProviderError>>) -> Self {
        Self {
            replies,
            prompts: Mutex::new(Vec::new()),
        }
    }

    fn texts(replies: &[&str]) -> Self {
        Self::new(replies.iter().map(|r| Ok(r.to_string())).collect())
    }

    fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Provider for ScriptedProvider {
    fn name(&self) -> &str {
        "e2e_mock"
    }

    async fn complete(&self, request: ProviderRequest) -> Result<ProviderResponse, ProviderError> {
        let mut prompts = self.prompts.lock().unwrap();
        let index = prompts.len();
        let reply = self
            .replies
            .get(index)
            .unwrap_or_else(|| panic!("ScriptedProvider exhausted: call #{index}"))
            .clone()?;
        prompts.push(request.messages[0].content.clone());

        Ok(ProviderResponse {
            message: Message::assistant(reply),
            usage: Some(Usage {
                prompt_tokens: 10,
                completion_tokens: 5,
                total_tokens: 15,
            }),
            model: request.model,
            metadata: serde_json::Map::new(),
        })
    }
}

fn cot_reflector(provider: &Arc<ScriptedProvider>, max: usize) -> CotReflector {
    CotReflector::new(CotCritic::new(provider.clone(), "mock-model")).with_max_reflections(max)
}

fn react_reflector(provider: &Arc<ScriptedProvider>, max: usize) -> ReactReflector {
    ReactReflector::new(ReactCritic::new(provider.clone(), "mock-model")).with_max_reflections(max)
}

// ── Scenarios ────────────────────────────────────────────────────────────

#[tokio::test]
async fn three_critiques_with_window_of_two() {
    let provider = Arc::new(ScriptedProvider::texts(&["A", "B", "C"]));
    let mut reflector = react_reflector(&provider, 2);

    let mut result = None;
    for _ in 0..3 {
        result = Some(
            reflector
                .reflect("reflexion", "EX", "Q", "Thought 1: guess\nAction 1: Finish[x]", None)
                .await
                .unwrap(),
        );
    }

    let result = result.unwrap();
    assert_eq!(result.reflections, vec!["B".to_string(), "C".to_string()]);
    assert_eq!(
        result.rendered,
        format!("{REFLECTION_HEADER}Reflections:\n- B\n- C")
    );
    assert_eq!(provider.prompts().len(), 3);
}

#[tokio::test]
async fn last_attempt_renders_question_and_scratchpad() {
    let provider = Arc::new(ScriptedProvider::texts(&[]));
    let mut reflector = cot_reflector(&provider, 3);

    let result = reflector
        .reflect("last_attempt", "EX", "Q", "S", None)
        .await
        .unwrap();

    assert!(result.reflections.is_empty());
    assert!(result.rendered.starts_with(LAST_TRIAL_HEADER));
    assert!(result.rendered.contains("Q"));
    assert!(result.rendered.contains("S"));
    assert_eq!(result.rendered, format_last_attempt("Q", "S"));
    assert!(provider.prompts().is_empty());
}

#[tokio::test]
async fn cot_context_reaches_the_prompt() {
    let provider = Arc::new(ScriptedProvider::texts(&[
        "I ignored the context.\nNext time I will quote it.",
    ]));
    let mut reflector = cot_reflector(&provider, 3);

    let result = reflector
        .reflect(
            "last_attempt_and_reflexion",
            "EX",
            "Where is the head office?",
            "Thought: Mumbai.\nAction: Finish[Mumbai]",
            Some("The head office is in Delhi."),
        )
        .await
        .unwrap();

    let prompts = provider.prompts();
    assert!(prompts[0].contains("Relevant Context: The head office is in Delhi."));
    assert_eq!(
        result.reflections,
        vec!["I ignored the context. Next time I will quote it.".to_string()]
    );
    assert!(result.rendered.contains("(END PREVIOUS TRIAL)\n\n"));
    assert!(result.rendered.contains(REFLECTION_AFTER_LAST_TRIAL_HEADER));
    assert!(result.rendered.ends_with("- I ignored the context. Next time I will quote it."));
}

#[tokio::test]
async fn react_prompt_omits_context() {
    let provider = Arc::new(ScriptedProvider::texts(&["Search every candidate."]));
    let mut reflector = react_reflector(&provider, 3);

    reflector
        .reflect("reflexion", "EX", "Q", "S", Some("should not appear"))
        .await
        .unwrap();

    assert!(!provider.prompts()[0].contains("should not appear"));
}

#[tokio::test]
async fn provider_failure_surfaces_as_generation_error() {
    let provider = Arc::new(ScriptedProvider::new(vec![
        Ok("A".into()),
        Err(ProviderError::AuthenticationFailed("bad key".into())),
    ]));
    let mut reflector = cot_reflector(&provider, 3);

    let ok = reflector.reflect("reflexion", "EX", "Q", "S", None).await.unwrap();
    let err = reflector
        .reflect("reflexion", "EX", "Q", "S", None)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        ReflectError::Generation(ProviderError::AuthenticationFailed(_))
    ));
    assert_eq!(reflector.reflections(), ok.reflections.as_slice());
    assert_eq!(reflector.rendered(), ok.rendered);
}

#[tokio::test]
async fn unknown_strategy_never_calls_the_model() {
    let provider = Arc::new(ScriptedProvider::texts(&[]));
    let mut reflector = cot_reflector(&provider, 3);

    let err = reflector
        .reflect("Reflexion", "EX", "Q", "S", None)
        .await
        .unwrap_err();

    assert!(matches!(err, ReflectError::UnsupportedStrategy(_)));
    assert!(provider.prompts().is_empty());
    assert_eq!(reflector.rendered(), "");
}

#[tokio::test]
async fn window_survives_a_json_round_trip_between_runs() {
    let provider = Arc::new(ScriptedProvider::texts(&["A", "B"]));

    let mut first_run = react_reflector(&provider, 3);
    first_run.reflect("reflexion", "EX", "Q", "S", None).await.unwrap();
    let saved = serde_json::to_string(&first_run.snapshot()).unwrap();

    let restored: ReflectionWindow = serde_json::from_str(&saved).unwrap();
    let mut second_run = react_reflector(&provider, 3).with_reflections(restored);
    let result = second_run.reflect("reflexion", "EX", "Q", "S", None).await.unwrap();

    assert_eq!(result.reflections, vec!["A".to_string(), "B".to_string()]);
}
