use snafu::Snafu;
use url::Url;

/// Transport-level errors for the Gemini REST client.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    /// No API key was supplied to the builder.
    #[snafu(display("no API key configured"))]
    MissingApiKey,

    #[snafu(display("API key is not a valid header value"))]
    InvalidApiKey { source: reqwest::header::InvalidHeaderValue },

    #[snafu(display("failed to build HTTP client"))]
    BuildHttpClient { source: reqwest::Error },

    #[snafu(display("failed to construct request URL from segment {suffix:?}"))]
    ConstructUrl {
        suffix: String,
        source: url::ParseError,
    },

    #[snafu(display("request to {url} failed"))]
    PerformRequest { url: Url, source: reqwest::Error },

    #[snafu(display("server returned {code}: {}", description.as_deref().unwrap_or("<no body>")))]
    BadResponse {
        code: u16,
        description: Option<String>,
    },

    #[snafu(display("failed to decode response body"))]
    DecodeResponse { source: reqwest::Error },
}
