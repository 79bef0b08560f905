//! poster-bedrock
//!
//! Content generation: free-text notes in, a partial poster document out.
//! The [`generator::ContentGenerator`] trait is the seam; Bedrock's
//! Converse API is the production implementation.

pub mod bedrock;
pub mod error;
pub mod generator;
pub mod parse;
pub mod prompt;
