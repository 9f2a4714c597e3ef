use crate::llm_client::prompts::{GROUNDING_INSTRUCTION, NOT_FOUND_ANSWER};

pub const CHAT_SYSTEM: &str = "You are an expert AI recruiting assistant.";

pub fn build_chat_prompt(question: &str, context: &str) -> String {
    format!(
        "{GROUNDING_INSTRUCTION} If the answer is not in the context, say '{NOT_FOUND_ANSWER}'\n\n\
         **CONTEXT:**\n{context}\n\n\
         **QUESTION:**\n{question}\n\n\
         **ANSWER:**\n"
    )
}
