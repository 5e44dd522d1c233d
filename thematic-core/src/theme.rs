use serde::{Deserialize, Serialize};

/// Font family used when a typography slot comes back empty.
pub const DEFAULT_FONT: &str = "sans-serif";

/// Six-slot color palette of a generated theme.
///
/// Every slot is required; values are CSS hex colors (`#rgb` or
/// `#rrggbb`, case-insensitive). Shape is enforced by serde, syntax by
/// [`WebsiteTheme::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorPalette {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
    pub card: String,
}

impl ColorPalette {
    /// Named slots in display order.
    pub fn slots(&self) -> [(&'static str, &str); 6] {
        [
            ("primary", &self.primary),
            ("secondary", &self.secondary),
            ("accent", &self.accent),
            ("background", &self.background),
            ("text", &self.text),
            ("card", &self.card),
        ]
    }
}

/// Heading and body font family names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Typography {
    pub heading_font: String,
    pub body_font: String,
}

impl Typography {
    /// Heading family, falling back to [`DEFAULT_FONT`] when empty.
    pub fn heading_or_default(&self) -> &str {
        non_empty_or(&self.heading_font, DEFAULT_FONT)
    }

    /// Body family, falling back to [`DEFAULT_FONT`] when empty.
    pub fn body_or_default(&self) -> &str {
        non_empty_or(&self.body_font, DEFAULT_FONT)
    }
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() { fallback } else { value }
}

/// One content card on a page. Order within the page is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebSection {
    pub heading: String,
    pub content: String,
    /// Short icon token (emoji or glyph); consumers substitute a default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

/// Copy for a single page of the themed site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebPage {
    pub title: String,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub sections: Vec<WebSection>,
}

/// The four named pages every theme carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKey {
    Home,
    About,
    Services,
    Contact,
}

impl PageKey {
    /// All pages in display order.
    pub const ALL: [PageKey; 4] = [PageKey::Home, PageKey::About, PageKey::Services, PageKey::Contact];

    pub fn as_str(&self) -> &'static str {
        match self {
            PageKey::Home => "home",
            PageKey::About => "about",
            PageKey::Services => "services",
            PageKey::Contact => "contact",
        }
    }
}

/// Fixed mapping of the four required pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSet {
    pub home: WebPage,
    pub about: WebPage,
    pub services: WebPage,
    pub contact: WebPage,
}

impl PageSet {
    pub fn get(&self, key: PageKey) -> &WebPage {
        match key {
            PageKey::Home => &self.home,
            PageKey::About => &self.about,
            PageKey::Services => &self.services,
            PageKey::Contact => &self.contact,
        }
    }

    /// Pages with their keys, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (PageKey, &WebPage)> {
        PageKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }
}

/// Prompt seeds for image synthesis, produced alongside the theme copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagePrompts {
    pub hero: String,
    pub feature: String,
}

/// A generated website theme.
///
/// Created atomically by one successful generation call and immutable
/// afterwards. Synthesized imagery attaches to the session state, never
/// to the theme itself, so a theme stays valid when image synthesis
/// fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteTheme {
    pub business_name: String,
    pub industry: String,
    pub aesthetic: String,
    pub colors: ColorPalette,
    pub typography: Typography,
    pub pages: PageSet,
    pub image_prompts: ImagePrompts,
}

impl WebsiteTheme {
    /// Post-deserialization structural check.
    ///
    /// Serde already rejects a payload with missing required fields; this
    /// additionally rejects palette values that are not hex colors, which
    /// would otherwise surface as a broken export.
    pub fn validate(&self) -> Result<(), String> {
        for (slot, value) in self.colors.slots() {
            if !is_hex_color(value) {
                return Err(format!("colors.{slot} is not a hex color: {value:?}"));
            }
        }
        Ok(())
    }
}

/// `#rgb` or `#rrggbb`, case-insensitive.
fn is_hex_color(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 6) && digits.chars().all(|c| c.is_ascii_hexdigit())
}

/// A synthesized image: MIME type plus base64 payload, as returned by
/// the generation backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAsset {
    pub mime_type: String,
    /// Base64-encoded image bytes.
    pub data: String,
}

impl ImageAsset {
    pub fn new(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self { mime_type: mime_type.into(), data: data.into() }
    }

    /// `data:<mime>;base64,<payload>` form, embeddable in markup.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.data)
    }

    /// Raw image bytes for file export.
    pub fn decode(&self) -> Result<Vec<u8>, base64::DecodeError> {
        use base64::{Engine as _, engine::general_purpose::STANDARD};
        STANDARD.decode(self.data.as_bytes())
    }

    /// File extension matching the MIME type, `bin` when unrecognized.
    pub fn file_extension(&self) -> &'static str {
        match self.mime_type.as_str() {
            "image/png" => "png",
            "image/jpeg" => "jpg",
            "image/webp" => "webp",
            _ => "bin",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(title: &str) -> WebPage {
        WebPage {
            title: title.to_string(),
            hero_title: format!("{title} hero"),
            hero_subtitle: format!("{title} subtitle"),
            sections: vec![WebSection {
                heading: "First".to_string(),
                content: "Copy".to_string(),
                icon: Some("🚀".to_string()),
            }],
        }
    }

    fn theme() -> WebsiteTheme {
        WebsiteTheme {
            business_name: "Acme".to_string(),
            industry: "Fintech".to_string(),
            aesthetic: "Minimalist".to_string(),
            colors: ColorPalette {
                primary: "#112233".to_string(),
                secondary: "#445566".to_string(),
                accent: "#778899".to_string(),
                background: "#fff".to_string(),
                text: "#000".to_string(),
                card: "#eeeeee".to_string(),
            },
            typography: Typography {
                heading_font: "Playfair Display".to_string(),
                body_font: "Inter".to_string(),
            },
            pages: PageSet {
                home: page("Home"),
                about: page("About"),
                services: page("Services"),
                contact: page("Contact"),
            },
            image_prompts: ImagePrompts {
                hero: "A calm skyline".to_string(),
                feature: "Abstract shapes".to_string(),
            },
        }
    }

    #[test]
    fn serde_round_trip() {
        let theme = theme();
        let json = serde_json::to_string(&theme).unwrap();
        let back: WebsiteTheme = serde_json::from_str(&json).unwrap();
        assert_eq!(theme, back);
    }

    #[test]
    fn wire_names_are_camel_case() {
        let json = serde_json::to_string(&theme()).unwrap();
        assert!(json.contains("\"businessName\""));
        assert!(json.contains("\"headingFont\""));
        assert!(json.contains("\"heroTitle\""));
        assert!(json.contains("\"imagePrompts\""));
    }

    #[test]
    fn missing_contact_page_fails_deserialization() {
        let mut value = serde_json::to_value(theme()).unwrap();
        value["pages"].as_object_mut().unwrap().remove("contact");
        assert!(serde_json::from_value::<WebsiteTheme>(value).is_err());
    }

    #[test]
    fn missing_icon_is_tolerated() {
        let mut value = serde_json::to_value(theme()).unwrap();
        value["pages"]["home"]["sections"][0]
            .as_object_mut()
            .unwrap()
            .remove("icon");
        let back: WebsiteTheme = serde_json::from_value(value).unwrap();
        assert_eq!(back.pages.home.sections[0].icon, None);
    }

    #[test]
    fn validate_accepts_short_and_long_hex() {
        assert!(theme().validate().is_ok());
    }

    #[test]
    fn validate_rejects_non_hex_palette() {
        let mut theme = theme();
        theme.colors.accent = "rebeccapurple".to_string();
        let err = theme.validate().unwrap_err();
        assert!(err.contains("colors.accent"));
    }

    #[test]
    fn typography_falls_back_when_empty() {
        let mut theme = theme();
        theme.typography.body_font = "  ".to_string();
        assert_eq!(theme.typography.body_or_default(), DEFAULT_FONT);
        assert_eq!(theme.typography.heading_or_default(), "Playfair Display");
    }

    #[test]
    fn page_iteration_order_is_fixed() {
        let theme = theme();
        let keys: Vec<&str> = theme.pages.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["home", "about", "services", "contact"]);
    }

    #[test]
    fn image_asset_data_url_and_decode() {
        let asset = ImageAsset::new("image/png", "iVBORw0KGgo=");
        assert!(asset.to_data_url().starts_with("data:image/png;base64,iVBOR"));
        assert_eq!(asset.file_extension(), "png");
        assert!(!asset.decode().unwrap().is_empty());
    }
}
