//! Google Translate integration
//!
//! Client for the public Google Translate web endpoint. The source language
//! is always auto-detected; callers pass only the target language.

pub mod client;
mod models;

pub use client::{GoogleTranslateClient, TranslateConfig, TranslateError, TranslationClient};
pub use models::Translation;
