//! Generation orchestration for Thematic.
//!
//! Turns a [`Directives`] set into a generated theme plus optional
//! hero/logo imagery: prompt and schema construction, the credit gate,
//! backend error mapping, and the concurrent asset pair.

pub mod directives;
pub mod generator;
pub mod prompt;

pub use directives::Directives;
pub use generator::ThemeGenerator;
pub use prompt::{PromptSpec, hero_image_prompt, logo_prompt, theme_prompt, theme_schema};
