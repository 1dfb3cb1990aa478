// Sales Insight Service: batches of opportunities or cases → one insight record each.
// Completions are requested sequentially; see handlers for batch failure semantics.

pub mod handlers;
pub mod models;
pub mod parser;
pub mod prompts;
pub mod timestamp;
