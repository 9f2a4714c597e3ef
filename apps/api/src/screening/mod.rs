// Screening core: skill matching, profile extraction, ranking and lexical scoring.
// Everything here is synchronous and pure; failures are handled by the adapters
// that feed it (documents, nlp, llm_client).

pub mod handlers;
pub mod lexical;
pub mod profile;
pub mod ranking;
pub mod skills;
