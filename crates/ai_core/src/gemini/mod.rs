//! Gemini generative model

mod client;
mod summarizer;

pub use client::{API_KEY_VAR, GeminiClient};
pub use summarizer::{GeminiSummarizationEngine, build_prompt};
