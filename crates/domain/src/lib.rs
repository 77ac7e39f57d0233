//! Domain layer for Doc2Podcast
//!
//! Contains the vocabulary of the document-to-podcast pipeline: document
//! formats, summary modes and strategies, voices, stage timings and the
//! audio artifacts handed back to callers. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod text;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
