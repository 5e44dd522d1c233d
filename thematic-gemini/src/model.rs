use std::fmt::{self, Formatter};

use serde::{Deserialize, Serialize};

/// Gemini model identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Model(String);

impl Default for Model {
    fn default() -> Self {
        Self::GEMINI_3_PRO_PREVIEW.into()
    }
}

impl Model {
    /// Structured theme generation.
    pub const GEMINI_3_PRO_PREVIEW: &'static str = "models/gemini-3-pro-preview";
    /// Image synthesis.
    pub const GEMINI_2_5_FLASH_IMAGE: &'static str = "models/gemini-2.5-flash-image";

    pub fn new(model: impl Into<String>) -> Self {
        Self(model.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Identifier without the `models/` resource prefix, as embedded in
    /// REST paths.
    pub fn id(&self) -> &str {
        self.0.strip_prefix("models/").unwrap_or(&self.0)
    }
}

impl From<String> for Model {
    fn from(model: String) -> Self {
        Self(model)
    }
}

impl From<&str> for Model {
    fn from(model: &str) -> Self {
        Self(model.to_string())
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_strips_resource_prefix() {
        assert_eq!(Model::new("models/gemini-3-pro-preview").id(), "gemini-3-pro-preview");
        assert_eq!(Model::new("gemini-2.5-flash-image").id(), "gemini-2.5-flash-image");
    }

    #[test]
    fn default_is_the_theme_model() {
        assert_eq!(Model::default().as_str(), Model::GEMINI_3_PRO_PREVIEW);
    }
}
