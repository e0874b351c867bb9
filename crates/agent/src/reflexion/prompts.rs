//! Reflection prompt templates.
//!
//! Each template asks the model to diagnose why a previous trial failed and
//! to propose a short, high-level plan that avoids the same failure.

const COT_INSTRUCTION_WITH_CONTEXT: &str = "You are an advanced reasoning agent that can improve based on self reflection. You will be given a previous reasoning trial in which you were given access to relevant context and a question to answer. You were unsuccessful in answering the question either because you guessed the wrong answer with Finish[<answer>] or there is a phrasing discrepancy with your provided answer and the answer key. In a few sentences, diagnose a possible reason for failure or phrasing discrepancy and devise a new, concise, high level plan that aims to mitigate the same failure. Use complete sentences.";

const COT_INSTRUCTION: &str = "You are an advanced reasoning agent that can improve based on self reflection. You will be given a previous reasoning trial in which you were given a question to answer. You were unsuccessful in answering the question either because you guessed the wrong answer with Finish[<answer>] or there is a phrasing discrepancy with your provided answer and the answer key. In a few sentences, diagnose a possible reason for failure or phrasing discrepancy and devise a new, concise, high level plan that aims to mitigate the same failure. Use complete sentences.";

const REACT_INSTRUCTION: &str = "You are an advanced reasoning agent that can improve based on self reflection. You will be given a previous reasoning trial in which you were given access to a tool environment and a question to answer. You were unsuccessful in answering the question either because you guessed the wrong answer with Finish[<answer>], or you used up your set number of reasoning steps. In a few sentences, diagnose a possible reason for failure and devise a new, concise, high level plan that aims to mitigate the same failure. Use complete sentences.";

/// Few-shot reflection exemplar for chain-of-thought trials.
pub const COT_REFLECT_EXAMPLES: &str = "Relevant Context: The Oberoi family is an Indian family that is famous for its involvement in hotels, namely through The Oberoi Group. The Oberoi Group is a hotel company with its head office in Delhi.
Question: The Oberoi family is part of a hotel company that has a head office in what city?
Thought: The Oberoi family is part of the hotel company called The Oberoi Group. The Oberoi Group has its head office in Mumbai.
Action: Finish[Mumbai]

Reflection: My reasoning failed because I ignored the context, which states that The Oberoi Group has its head office in Delhi. Next time I will read the relevant context carefully and base the answer only on the facts it states before calling Finish.";

/// Few-shot reflection exemplar for interleaved reason/act trials.
pub const REACT_REFLECT_EXAMPLES: &str = "Question: The Rome Protocols were signed by three Prime Ministers, one of whom was assassinated as part of what?
Thought 1: I need to search Rome Protocols, find the three Prime Ministers, then find what they were assassinated as part of.
Action 1: Search[Rome Protocols]
Observation 1: The Rome Protocols were a series of three international agreements concluded in Rome on 17 March 1934 between the governments of Austria, Hungary and Italy. They were signed by Italian Prime Minister Benito Mussolini, Austrian Chancellor Engelbert Dollfuss and Hungarian Prime Minister Gyula Gombos.
Thought 2: The three Prime Ministers were Benito Mussolini, Engelbert Dollfuss, and Gyula Gombos. I need to search Benito Mussolini and find what he was assassinated as part of.
Action 2: Search[Benito Mussolini]
Observation 2: Benito Amilcare Andrea Mussolini was an Italian politician and journalist who founded and led the National Fascist Party.
Thought 3: Benito Mussolini was assassinated as part of the collapse of the Axis powers during World War II.
Action 3: Finish[World War II]

Reflection: I searched one of the Prime Ministers and guessed an answer instead of checking which one was actually assassinated. Next time I will search each of the three Prime Ministers, confirm which one was assassinated, and only then look up the event it was part of.";

/// Build the chain-of-thought reflection prompt.
///
/// The "Relevant Context" line appears only when `context` is given.
pub fn cot_reflection_prompt(
    examples: &str,
    question: &str,
    scratchpad: &str,
    context: Option<&str>,
) -> String {
    match context {
        Some(context) => format!(
            "{COT_INSTRUCTION_WITH_CONTEXT}\nHere are some examples:\n{examples}\n(END OF EXAMPLES)\n\nPrevious trial:\nRelevant Context: {context}\nQuestion: {question}\n{}\n\nReflection:",
            trial_body(scratchpad)
        ),
        None => format!(
            "{COT_INSTRUCTION}\nHere are some examples:\n{examples}\n(END OF EXAMPLES)\n\nPrevious trial:\nQuestion: {question}\n{}\n\nReflection:",
            trial_body(scratchpad)
        ),
    }
}

/// Build the ReAct reflection prompt.
pub fn react_reflection_prompt(examples: &str, question: &str, scratchpad: &str) -> String {
    format!(
        "{REACT_INSTRUCTION}\nHere are some examples:\n{examples}\n(END OF EXAMPLES)\n\nPrevious trial:\nQuestion: {question}\n{}\n\nReflection:",
        trial_body(scratchpad)
    )
}

fn trial_body(scratchpad: &str) -> &str {
    scratchpad.trim_matches('\n')
}
