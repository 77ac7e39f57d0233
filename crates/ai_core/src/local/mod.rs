//! Local pretrained summarization model

mod client;

pub use client::LocalSummarizationEngine;
