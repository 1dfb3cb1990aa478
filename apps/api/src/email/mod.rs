// Email Composer Service: sender/recipient profile + template type → subject + body.

pub mod handlers;
pub mod models;
pub mod parser;
pub mod prompts;
