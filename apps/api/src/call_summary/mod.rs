// Call Summary Service: transcript + call metadata → summary paragraph + action items.

pub mod handlers;
pub mod models;
pub mod parser;
pub mod prompts;
