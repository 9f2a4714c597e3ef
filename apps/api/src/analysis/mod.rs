// Analysis sessions: run the screening pipeline over uploaded documents and keep
// the latest result (and its chat context) in memory.

pub mod handlers;
pub mod pipeline;
pub mod session;
