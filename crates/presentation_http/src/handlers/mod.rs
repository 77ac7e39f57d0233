//! HTTP request handlers

pub mod audio;
pub mod catalog;
pub mod health;
pub mod summarize;
