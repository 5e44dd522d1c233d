use thematic_core::WebsiteTheme;

/// Pretty-printed JSON form of a theme.
///
/// No content transformation: parsing the output yields a structure
/// deep-equal to the input.
pub fn to_json_pretty(theme: &WebsiteTheme) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(theme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use thematic_core::{
        ColorPalette, ImagePrompts, PageSet, Typography, WebPage, WebSection, WebsiteTheme,
    };

    fn page(sections: Vec<WebSection>) -> WebPage {
        WebPage {
            title: "Home".to_string(),
            hero_title: "Welcome".to_string(),
            hero_subtitle: "Hello".to_string(),
            sections,
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
                background: "#ffffff".to_string(),
                text: "#0a0a0a".to_string(),
                card: "#f4f4f4".to_string(),
            },
            typography: Typography {
                heading_font: "Playfair Display".to_string(),
                body_font: "Inter".to_string(),
            },
            pages: PageSet {
                home: page(vec![WebSection {
                    heading: "First".to_string(),
                    content: "Copy".to_string(),
                    icon: None,
                }]),
                about: page(vec![]),
                services: page(vec![]),
                contact: page(vec![]),
            },
            image_prompts: ImagePrompts {
                hero: "skyline".to_string(),
                feature: "shapes".to_string(),
            },
        }
    }

    #[test]
    fn export_round_trips_exactly() {
        let theme = theme();
        let exported = to_json_pretty(&theme).unwrap();
        let parsed: WebsiteTheme = serde_json::from_str(&exported).unwrap();
        assert_eq!(parsed, theme);
    }

    #[test]
    fn empty_section_lists_round_trip() {
        let mut theme = theme();
        theme.pages.home.sections.clear();
        let exported = to_json_pretty(&theme).unwrap();
        let parsed: WebsiteTheme = serde_json::from_str(&exported).unwrap();
        assert_eq!(parsed, theme);
        assert!(parsed.pages.home.sections.is_empty());
    }

    #[test]
    fn export_is_pretty_printed_with_wire_names() {
        let exported = to_json_pretty(&theme()).unwrap();
        assert!(exported.contains("\n  \"businessName\": \"Acme\""));
        assert!(exported.contains("\"primary\": \"#112233\""));
    }
}
