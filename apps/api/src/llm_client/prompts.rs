// Shared prompt fragments.
// Each service that needs LLM calls defines its own prompts.rs alongside it.
// This file contains cross-cutting prompt fragments.

/// Sentence the model must use when the documents do not contain the answer.
pub const NOT_FOUND_ANSWER: &str = "I could not find an answer in the provided documents.";

/// Instruction that confines answers to the supplied documents.
pub const GROUNDING_INSTRUCTION: &str = "\
    Answer questions based ONLY on the context provided below. \
    Do not make up information.";
