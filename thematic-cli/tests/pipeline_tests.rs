//! Full-pipeline contract: directives in, exported artifacts out,
//! against a mocked backend.

use serde_json::json;
use thematic_core::{CREDIT_LIMIT, CreditMeter, InMemoryCreditStore, ThemeSession};
use thematic_engine::{Directives, ThemeGenerator};
use thematic_gemini::Gemini;
use url::Url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn page(title: &str) -> serde_json::Value {
    json!({
        "title": title,
        "heroTitle": format!("{title} hero"),
        "heroSubtitle": format!("{title} subtitle"),
        "sections": []
    })
}

#[tokio::test]
async fn acme_directives_produce_matching_json_and_html_exports() {
    let payload = json!({
        "businessName": "Acme",
        "industry": "Fintech",
        "aesthetic": "Minimalist",
        "colors": {
            "primary": "#112233",
            "secondary": "#445566",
            "accent": "#778899",
            "background": "#ffffff",
            "text": "#0a0a0a",
            "card": "#f4f4f4"
        },
        "typography": {"headingFont": "Playfair Display", "bodyFont": "Inter"},
        "pages": {
            "home": page("Home"),
            "about": page("About"),
            "services": page("Services"),
            "contact": page("Contact")
        },
        "imagePrompts": {"hero": "calm skyline", "feature": "abstract shapes"}
    });

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-3-pro-preview:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{
                "content": {"parts": [{"text": payload.to_string()}], "role": "model"}
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let base = Url::parse(&format!("{}/v1beta/", server.uri())).unwrap();
    let client = Gemini::builder("test-key").with_base_url(base).build().unwrap();
    let generator = ThemeGenerator::new(client, CreditMeter::new(InMemoryCreditStore::new()));

    let directives = Directives::new("Acme", "Fintech", "Minimalist");
    let mut session = ThemeSession::new();
    generator.generate_into(&mut session, &directives, false).await;

    let state = session.state();
    assert!(state.error.is_none(), "unexpected error: {:?}", state.error);
    let theme = state.theme.as_ref().expect("theme present");

    let json_export = thematic_export::to_json_pretty(theme).unwrap();
    assert!(json_export.contains("\"primary\": \"#112233\""));
    assert_eq!(thematic_export::json_filename(theme), "thematic-acme.json");

    let html_export = thematic_export::to_html(theme);
    assert!(html_export.contains("--primary: #112233;"));
    assert_eq!(thematic_export::html_filename(theme), "acme-website.html");

    assert_eq!(generator.credits().remaining(), CREDIT_LIMIT - 1);
}
