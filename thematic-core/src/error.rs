use thiserror::Error;

/// Failure taxonomy surfaced to users.
///
/// Display strings are the user-facing messages; raw backend error text
/// never appears here. Callers log diagnostic detail through `tracing`
/// at the point where a backend failure is mapped into this enum.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// The local generation limit is spent. No request was made.
    #[error("generation limit reached, no credits remaining")]
    QuotaExhausted,

    /// No API key is configured, so a backend client cannot be built.
    #[error("no Gemini API key configured")]
    CredentialMissing,

    /// The backend signaled throttling or overload.
    #[error("the generation service is overloaded, try again shortly")]
    RateLimited,

    /// The theme payload did not parse or validate into the expected
    /// structure.
    #[error("the generated theme did not match the expected structure")]
    MalformedResponse,

    /// An image response carried no usable inline payload.
    #[error("image synthesis returned no usable picture")]
    AssetSynthesisFailed,

    /// Credit persistence failed.
    #[error("credit storage unavailable: {0}")]
    Storage(String),

    /// Anything else, with a deliberately generic message.
    #[error("theme generation failed")]
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_strings_are_short_and_generic() {
        assert_eq!(ThemeError::QuotaExhausted.to_string(), "generation limit reached, no credits remaining");
        assert_eq!(ThemeError::Unknown.to_string(), "theme generation failed");
        // The unknown variant must not carry backend text.
        assert!(!ThemeError::Unknown.to_string().contains("http"));
    }
}
