use serde::{Deserialize, Serialize};
use url::Url;
use url::form_urlencoded;

/// User-supplied generation inputs.
///
/// Business name, industry, and aesthetic are the mandatory framing;
/// the rest refine it. Empty strings mean "not provided".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Directives {
    pub business_name: String,
    pub industry: String,
    pub aesthetic: String,
    /// Creative motif to fold into the design ("SpongeBob", "shonen
    /// anime", ...).
    #[serde(default)]
    pub sub_style: String,
    /// Palette direction ("earth tones", "neon on black", ...).
    #[serde(default)]
    pub palette_preference: String,
    /// Existing site whose content should be adapted, not copied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference_url: Option<String>,
}

impl Directives {
    pub fn new(
        business_name: impl Into<String>,
        industry: impl Into<String>,
        aesthetic: impl Into<String>,
    ) -> Self {
        Self {
            business_name: business_name.into(),
            industry: industry.into(),
            aesthetic: aesthetic.into(),
            ..Default::default()
        }
    }

    /// Share-link query string.
    ///
    /// Encodes the directive set only; a recipient re-derives the theme,
    /// the generated artifact itself is never transmitted. Optional
    /// fields are omitted when empty.
    pub fn to_share_query(&self) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        query
            .append_pair("name", &self.business_name)
            .append_pair("ind", &self.industry)
            .append_pair("aes", &self.aesthetic);
        if !self.sub_style.is_empty() {
            query.append_pair("style", &self.sub_style);
        }
        if let Some(reference) = self.reference_url.as_deref().filter(|u| !u.is_empty()) {
            query.append_pair("url", reference);
        }
        query.finish()
    }

    /// Full share link against the given base URL.
    pub fn share_link(&self, base: &str) -> String {
        format!("{}?{}", base.trim_end_matches(['?', '/']), self.to_share_query())
    }

    /// Decode a share query. Returns `None` unless all three mandatory
    /// parameters are present and non-empty.
    pub fn from_share_query(query: &str) -> Option<Self> {
        let mut directives = Directives::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "name" => directives.business_name = value.into_owned(),
                "ind" => directives.industry = value.into_owned(),
                "aes" => directives.aesthetic = value.into_owned(),
                "style" => directives.sub_style = value.into_owned(),
                "url" if !value.is_empty() => directives.reference_url = Some(value.into_owned()),
                _ => {}
            }
        }
        let mandatory =
            [&directives.business_name, &directives.industry, &directives.aesthetic];
        if mandatory.iter().any(|field| field.is_empty()) {
            return None;
        }
        Some(directives)
    }

    /// Decode a full share link.
    pub fn from_share_link(link: &str) -> Option<Self> {
        let url = Url::parse(link).ok()?;
        Self::from_share_query(url.query()?)
    }
}
