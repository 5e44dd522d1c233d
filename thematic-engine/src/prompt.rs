//! Prompt and schema construction.
//!
//! Pure string/value assembly; nothing here can fail. The schema
//! descriptor mirrors the structural required-field set of
//! [`thematic_core::WebsiteTheme`] exactly, so a response accepted by
//! the backend deserializes without surprises.

use serde_json::{Value, json};

use crate::directives::Directives;
use thematic_core::WebsiteTheme;

/// A natural-language instruction plus the structural schema the
/// response must satisfy.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptSpec {
    pub prompt: String,
    pub schema: Value,
}

/// Build the theme-generation prompt for a directive set.
pub fn theme_prompt(directives: &Directives) -> PromptSpec {
    let mut prompt = format!(
        "Generate a comprehensive website theme for a company named \"{}\" in the \"{}\" industry.\n\n\
         VISUAL STYLE OVERRIDE: the entire theme MUST be based on the aesthetic: \"{}\".",
        directives.business_name, directives.industry, directives.aesthetic,
    );

    if !directives.sub_style.is_empty() {
        prompt.push_str(&format!(
            "\nSPECIFIC CHARACTER/SERIES REFERENCE: integrate the visual language of \"{}\" into the design. \
             Use the color palettes, iconic motifs, and overall vibe associated with it; \
             if it is an anime or cartoon, carry its art style into fonts and icons.",
            directives.sub_style,
        ));
    }

    prompt.push_str(
        "\n\n- If the aesthetic is \"Cartoon\" or \"Playful\", use vivid, high-contrast colors and whimsical icons.\n\
         - If the aesthetic is \"Minimalist\", use high whitespace and subtle tones.\n\
         - The copy and section headings must reflect the chosen vibe.",
    );

    if !directives.palette_preference.is_empty() {
        prompt.push_str(&format!(
            "\n\nPalette reference: ground the six color slots in \"{}\" while keeping text readable against the background.",
            directives.palette_preference,
        ));
    }

    if let Some(reference) = directives.reference_url.as_deref().filter(|u| !u.is_empty()) {
        prompt.push_str(&format!(
            "\n\nReference website analysis: the user has provided \"{reference}\" as a reference.\n\
             1. Replicate the information architecture and page types found on this site.\n\
             2. Translate its professional content into the tone of the requested aesthetic; adapt the content, do not copy the visuals.\n\
             3. Reimagine the core functional pages through this lens.",
        ));
    }

    prompt.push_str(
        "\n\nFinal requirements:\n\
         - Colors: provide valid CSS hex codes. Ensure the palette is cohesive.\n\
         - Icons: use single emojis or very short glyphs for the icon field.\n\
         - Respond ONLY in the requested JSON structure.",
    );

    PromptSpec { prompt, schema: theme_schema() }
}

/// Structural schema for a generated theme, in the backend's
/// OpenAPI-subset vocabulary.
pub fn theme_schema() -> Value {
    let page = page_schema();
    json!({
        "type": "OBJECT",
        "properties": {
            "businessName": {"type": "STRING"},
            "industry": {"type": "STRING"},
            "aesthetic": {"type": "STRING"},
            "colors": {
                "type": "OBJECT",
                "properties": {
                    "primary": {"type": "STRING"},
                    "secondary": {"type": "STRING"},
                    "accent": {"type": "STRING"},
                    "background": {"type": "STRING"},
                    "text": {"type": "STRING"},
                    "card": {"type": "STRING"},
                },
                "required": ["primary", "secondary", "accent", "background", "text", "card"],
            },
            "typography": {
                "type": "OBJECT",
                "properties": {
                    "headingFont": {"type": "STRING"},
                    "bodyFont": {"type": "STRING"},
                },
                "required": ["headingFont", "bodyFont"],
            },
            "pages": {
                "type": "OBJECT",
                "properties": {
                    "home": page.clone(),
                    "about": page.clone(),
                    "services": page.clone(),
                    "contact": page,
                },
                "required": ["home", "about", "services", "contact"],
            },
            "imagePrompts": {
                "type": "OBJECT",
                "properties": {
                    "hero": {"type": "STRING"},
                    "feature": {"type": "STRING"},
                },
                "required": ["hero", "feature"],
            },
        },
        "required": ["businessName", "industry", "aesthetic", "colors", "typography", "pages", "imagePrompts"],
    })
}

fn page_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": {"type": "STRING"},
            "heroTitle": {"type": "STRING"},
            "heroSubtitle": {"type": "STRING"},
            "sections": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "heading": {"type": "STRING"},
                        "content": {"type": "STRING"},
                        "icon": {"type": "STRING"},
                    },
                    "required": ["heading", "content"],
                },
            },
        },
        "required": ["title", "heroTitle", "heroSubtitle", "sections"],
    })
}

/// Image-synthesis instruction for the hero background (16:9).
pub fn hero_image_prompt(theme: &WebsiteTheme) -> String {
    format!(
        "High-end web design hero asset.\n\
         Core style: {}.\n\
         Content: {}.\n\
         Technical: 4k, cinematic lighting, ultra-sharp detail, professional composition.\n\
         If the style is cartoon-like, render it as a high-quality modern colorful illustration consistent with that style.",
        theme.aesthetic, theme.image_prompts.hero,
    )
}

/// Image-synthesis instruction for the logo mark (1:1).
pub fn logo_prompt(business_name: &str, industry: &str, aesthetic: &str) -> String {
    format!(
        "Minimal logo mark for \"{business_name}\", a {industry} company.\n\
         Style: {aesthetic}. Abstract geometric mark, flat vector look, centered, \
         isolated on a plain background. No text, no watermark.",
    )
}
