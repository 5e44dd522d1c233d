//! # thematic-gemini
//!
//! A minimal Rust client for the Gemini `generateContent` REST API:
//! API-key auth, schema-constrained JSON output, and inline image
//! extraction. Exactly the surface Thematic's generation engine needs,
//! nothing more.

pub mod client;
pub mod error;
pub mod generation;
pub mod model;

pub use client::{API_KEY_VAR, Gemini, GeminiBuilder};
pub use error::Error;
pub use generation::{
    Blob, Candidate, Content, GenerateContentRequest, GenerationConfig, GenerationResponse,
    ImageConfig, Part, Role,
};
pub use model::Model;
