// Resume storage plus LLM-assisted entry rewriting.

pub mod handlers;
pub mod prompts;
pub mod service;
