//! Token estimation utilities.
//!
//! Uses a character-based heuristic: ~4 characters per token.
//! This approximation is accurate within ~10% for BPE tokenizers
//! (GPT-3.5, GPT-4, Claude) on English text.

/// Estimate the token count for a string.
///
/// Heuristic: 1 token ≈ 4 characters. Rounds up.
pub fn estimate_tokens(text: &str) -> usize {
    if text.is_empty() {
        return 0;
    }
    text.len().div_ceil(4)
}

/// Estimate tokens for a sequence of lines joined with `\n`.
pub fn estimate_lines_tokens<S: AsRef<str>>(lines: &[S]) -> usize {
    let chars: usize = lines.iter().map(|l| l.as_ref().len()).sum();
    let separators = lines.len().saturating_sub(1);
    let total = chars + separators;
    if total == 0 {
        return 0;
    }
    total.div_ceil(4)
}
