//! Export transforms for generated themes.
//!
//! Both exporters are pure functions of the theme: the JSON form
//! round-trips exactly, the HTML form is a total template substitution
//! that tolerates any text content.

pub mod html;
pub mod json;

pub use html::to_html;
pub use json::to_json_pretty;

use thematic_core::WebsiteTheme;

/// Lowercased business name with whitespace runs collapsed to hyphens.
pub fn slug(name: &str) -> String {
    name.to_lowercase().split_whitespace().collect::<Vec<_>>().join("-")
}

/// `thematic-<slug>.json`
pub fn json_filename(theme: &WebsiteTheme) -> String {
    format!("thematic-{}.json", slug(&theme.business_name))
}

/// `<slug>-website.html`
pub fn html_filename(theme: &WebsiteTheme) -> String {
    format!("{}-website.html", slug(&theme.business_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_lowercases_and_hyphenates() {
        assert_eq!(slug("Lumina Capital"), "lumina-capital");
        assert_eq!(slug("  Acme   Corp  "), "acme-corp");
        assert_eq!(slug("Mono"), "mono");
        assert_eq!(slug(""), "");
    }
}
