// Industry market insights: one shared row per industry, generated on demand.
// All LLM calls go through llm_client — no direct Gemini calls here.

pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod service;
