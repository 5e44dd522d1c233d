//! Core domain model for Thematic.
//!
//! Holds the generated-theme data model, the user-facing error taxonomy,
//! the client-side credit meter with its storage port, and the session
//! state machine. Everything here is backend-agnostic; the Gemini wire
//! layer lives in `thematic-gemini` and orchestration in
//! `thematic-engine`.

pub mod credits;
pub mod error;
pub mod state;
pub mod theme;

pub use credits::{CREDIT_LIMIT, CreditMeter, CreditStore, FileCreditStore, InMemoryCreditStore};
pub use error::ThemeError;
pub use state::{GeneratedThemeState, RequestToken, ThemeSession};
pub use theme::{
    ColorPalette, DEFAULT_FONT, ImageAsset, ImagePrompts, PageKey, PageSet, Typography, WebPage,
    WebSection, WebsiteTheme,
};
