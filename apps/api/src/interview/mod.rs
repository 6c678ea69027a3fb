// Mock-interview quiz generation, grading, and assessment history.

pub mod handlers;
pub mod prompts;
pub mod service;
