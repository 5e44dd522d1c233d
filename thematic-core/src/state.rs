//! Session state for one generation surface.
//!
//! The session runs a small state machine:
//! `idle → loading → theme-only → theme+assets | error`. A new request
//! unconditionally returns to `loading` and supersedes anything in
//! flight; superseded completions are dropped by token mismatch rather
//! than racing the newer request (last-request-wins, not
//! last-response-wins).

use crate::error::ThemeError;
use crate::theme::{ImageAsset, WebsiteTheme};

/// Observable state of the current (or last) generation.
#[derive(Debug, Clone, Default)]
pub struct GeneratedThemeState {
    pub theme: Option<WebsiteTheme>,
    pub hero_image: Option<ImageAsset>,
    pub logo: Option<ImageAsset>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Identifies one dispatched generation request. Completions carrying a
/// token older than the latest [`ThemeSession::begin`] are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// State machine driving one generation at a time.
#[derive(Debug, Default)]
pub struct ThemeSession {
    state: GeneratedThemeState,
    seq: u64,
}

impl ThemeSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &GeneratedThemeState {
        &self.state
    }

    /// Start a new generation: clears prior data, images, and error,
    /// raises the loading flag, and supersedes any in-flight request.
    pub fn begin(&mut self) -> RequestToken {
        self.seq += 1;
        self.state = GeneratedThemeState { loading: true, ..Default::default() };
        RequestToken(self.seq)
    }

    fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.seq
    }

    /// Apply the structural-generation outcome.
    ///
    /// On success the theme becomes visible but `loading` stays up until
    /// the asset pair settles. On failure the session moves to the error
    /// state with no partial theme. Returns whether the update was
    /// applied (stale tokens are dropped).
    pub fn complete_theme(
        &mut self,
        token: RequestToken,
        result: Result<WebsiteTheme, ThemeError>,
    ) -> bool {
        if !self.is_current(token) {
            return false;
        }
        match result {
            Ok(theme) => {
                self.state.theme = Some(theme);
                self.state.error = None;
            }
            Err(e) => {
                self.state = GeneratedThemeState {
                    error: Some(e.to_string()),
                    ..Default::default()
                };
            }
        }
        true
    }

    /// Record both asset outcomes and clear the loading flag.
    ///
    /// Either asset may be absent; a missing image never invalidates the
    /// theme. Returns whether the update was applied.
    pub fn complete_assets(
        &mut self,
        token: RequestToken,
        hero_image: Option<ImageAsset>,
        logo: Option<ImageAsset>,
    ) -> bool {
        if !self.is_current(token) {
            return false;
        }
        self.state.hero_image = hero_image;
        self.state.logo = logo;
        self.state.loading = false;
        true
    }
}
