use std::sync::LazyLock;

use reqwest::{
    ClientBuilder, Response,
    header::{HeaderMap, HeaderName, HeaderValue},
};
use snafu::ResultExt;
use tracing::instrument;
use url::Url;

use crate::error::{
    BadResponseSnafu, BuildHttpClientSnafu, ConstructUrlSnafu, DecodeResponseSnafu, Error,
    InvalidApiKeySnafu, PerformRequestSnafu,
};
use crate::generation::{GenerateContentRequest, GenerationResponse};
use crate::model::Model;

static DEFAULT_BASE_URL: LazyLock<Url> = LazyLock::new(|| {
    Url::parse("https://generativelanguage.googleapis.com/v1beta/")
        .expect("unreachable error: failed to parse default base URL")
});

/// Environment variable the API key is read from.
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

/// A builder for the [`Gemini`] client.
pub struct GeminiBuilder {
    api_key: Option<String>,
    model: Model,
    base_url: Url,
    client_builder: ClientBuilder,
}

impl GeminiBuilder {
    /// Creates a new builder with the given API key.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            api_key: Some(key.into()),
            model: Model::default(),
            base_url: DEFAULT_BASE_URL.clone(),
            client_builder: ClientBuilder::default(),
        }
    }

    /// Creates a builder keyed from [`API_KEY_VAR`]. Fails with
    /// [`Error::MissingApiKey`] when the variable is absent or empty.
    pub fn from_env() -> Result<Self, Error> {
        match std::env::var(API_KEY_VAR) {
            Ok(key) if !key.trim().is_empty() => Ok(Self::new(key)),
            _ => Err(Error::MissingApiKey),
        }
    }

    /// Sets the model for the client.
    pub fn with_model(mut self, model: impl Into<Model>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets a custom base URL for the API.
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// Sets a custom `reqwest::ClientBuilder` (timeouts, proxies, ...).
    pub fn with_http_client(mut self, client_builder: ClientBuilder) -> Self {
        self.client_builder = client_builder;
        self
    }

    pub fn build(self) -> Result<Gemini, Error> {
        let key = self.api_key.ok_or(Error::MissingApiKey)?;

        let headers = HeaderMap::from_iter([(
            HeaderName::from_static("x-goog-api-key"),
            HeaderValue::from_str(&key).context(InvalidApiKeySnafu)?,
        )]);
        let http_client = self
            .client_builder
            .default_headers(headers)
            .build()
            .context(BuildHttpClientSnafu)?;

        Ok(Gemini { http_client, base_url: self.base_url, model: self.model })
    }
}

/// Client for the Gemini `generateContent` API.
///
/// Cheap to clone; the underlying HTTP client is shared.
#[derive(Debug, Clone)]
pub struct Gemini {
    http_client: reqwest::Client,
    base_url: Url,
    model: Model,
}

impl Gemini {
    /// Start building a client with the given API key.
    pub fn builder(key: impl Into<String>) -> GeminiBuilder {
        GeminiBuilder::new(key)
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Same client, different model. Shares the HTTP connection pool.
    pub fn with_model(&self, model: impl Into<Model>) -> Gemini {
        Gemini { model: model.into(), ..self.clone() }
    }

    fn build_url(&self, endpoint: &str) -> Result<Url, Error> {
        let suffix = format!("models/{}:{}", self.model.id(), endpoint);
        self.base_url.join(&suffix).context(ConstructUrlSnafu { suffix })
    }

    /// Generate content (unary).
    #[instrument(skip_all, fields(model = %self.model), err)]
    pub async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerationResponse, Error> {
        let url = self.build_url("generateContent")?;
        let response = self
            .http_client
            .post(url.clone())
            .json(request)
            .send()
            .await
            .context(PerformRequestSnafu { url })?;
        let response = check_response(response).await?;
        response.json().await.context(DecodeResponseSnafu)
    }
}

async fn check_response(response: Response) -> Result<Response, Error> {
    let status = response.status();
    if !status.is_success() {
        let description = response.text().await.ok();
        BadResponseSnafu { code: status.as_u16(), description }.fail()
    } else {
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_requires_a_key() {
        let result = GeminiBuilder {
            api_key: None,
            model: Model::default(),
            base_url: DEFAULT_BASE_URL.clone(),
            client_builder: ClientBuilder::default(),
        }
        .build();
        assert!(matches!(result, Err(Error::MissingApiKey)));
    }

    #[test]
    fn with_model_keeps_base_url() {
        let client = Gemini::builder("k")
            .with_base_url(Url::parse("http://localhost:1234/v1beta/").unwrap())
            .build()
            .unwrap();
        let image = client.with_model(Model::GEMINI_2_5_FLASH_IMAGE);
        assert_eq!(image.model().id(), "gemini-2.5-flash-image");
        assert_eq!(image.base_url.as_str(), "http://localhost:1234/v1beta/");
    }

    #[test]
    fn url_embeds_the_bare_model_id() {
        let client = Gemini::builder("k").build().unwrap();
        let url = client.build_url("generateContent").unwrap();
        assert_eq!(
            url.as_str(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-pro-preview:generateContent"
        );
    }
}
