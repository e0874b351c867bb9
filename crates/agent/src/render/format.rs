//! Last-trial and reflection-list formatting.

use reflexion_core::ReflectionStrategy;

use super::token::{estimate_lines_tokens, estimate_tokens};

/// Header placed above the raw previous trial.
pub const LAST_TRIAL_HEADER: &str = "You have attempted to answer the following question before and failed. Below is the last trial you attempted to answer the question.\n";

/// Header placed above the critique window when it stands alone.
pub const REFLECTION_HEADER: &str = "You have attempted to answer the following question before and failed. The following reflection(s) give a plan to avoid failing to answer the question in the same way you did previously. Use them to improve your strategy of correctly answering the given question.\n";

/// Header placed above the critique window when it follows a last-trial block.
pub const REFLECTION_AFTER_LAST_TRIAL_HEADER: &str = "The following reflection(s) give a plan to avoid failing to answer the question in the same way you did previously. Use them to improve your strategy of correctly answering the given question.\n";

/// Replacement text for an observation dropped by [`truncate_scratchpad`].
const TRUNCATED_OBSERVATION: &str = "[truncated observation]";

/// Render the previous trial: [`LAST_TRIAL_HEADER`], the question, the
/// scratchpad verbatim, and an end marker.
pub fn format_last_attempt(question: &str, scratchpad: &str) -> String {
    format!("{LAST_TRIAL_HEADER}Question: {question}\n{scratchpad}\n(END PREVIOUS TRIAL)\n")
}

/// Render the critique window as a bulleted list under `header`.
///
/// Returns an empty string for an empty window. Each entry is trimmed.
pub fn format_reflections(reflections: &[String], header: &str) -> String {
    if reflections.is_empty() {
        return String::new();
    }

    let items: Vec<&str> = reflections.iter().map(|r| r.trim()).collect();
    format!("{header}Reflections:\n- {}", items.join("\n- "))
}

/// Render the text injected into the next attempt for `strategy`.
///
/// For [`ReflectionStrategy::LastAttemptAndReflexion`] the reflection block
/// keeps its header even when the window is empty.
pub fn render(
    strategy: ReflectionStrategy,
    reflections: &[String],
    question: &str,
    scratchpad: &str,
) -> String {
    match strategy {
        ReflectionStrategy::LastAttempt => format_last_attempt(question, scratchpad),
        ReflectionStrategy::Reflexion => format_reflections(reflections, REFLECTION_HEADER),
        ReflectionStrategy::LastAttemptAndReflexion => {
            let mut rendered = format_last_attempt(question, scratchpad);
            rendered.push('\n');
            if reflections.is_empty() {
                rendered.push_str(REFLECTION_AFTER_LAST_TRIAL_HEADER);
            } else {
                rendered.push_str(&format_reflections(
                    reflections,
                    REFLECTION_AFTER_LAST_TRIAL_HEADER,
                ));
            }
            rendered
        }
    }
}

/// Shrink a scratchpad to roughly `max_tokens` by blanking out its longest
/// `Observation` lines, longest first.
///
/// A blanked line keeps its label (`Observation 2: [truncated observation]`).
/// Thoughts and actions are never touched, so the result can still exceed
/// the budget once every observation is gone.
pub fn truncate_scratchpad(scratchpad: &str, max_tokens: usize) -> String {
    if estimate_tokens(scratchpad) <= max_tokens {
        return scratchpad.to_string();
    }

    let mut lines: Vec<String> = scratchpad.split('\n').map(str::to_string).collect();

    let mut observations: Vec<(usize, usize)> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.starts_with("Observation"))
        .map(|(i, line)| (i, estimate_tokens(line)))
        .collect();
    observations.sort_by_key(|&(_, tokens)| tokens);

    while estimate_lines_tokens(&lines) > max_tokens {
        let Some((index, _)) = observations.pop() else {
            break;
        };
        let label = lines[index].split(':').next().unwrap_or("Observation").to_string();
        lines[index] = format!("{label}: {TRUNCATED_OBSERVATION}");
    }

    lines.join("\n")
}
