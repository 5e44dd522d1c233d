use tracing::{info, instrument, warn};

use thematic_core::{
    CreditMeter, ImageAsset, RequestToken, ThemeError, ThemeSession, WebsiteTheme,
};
use thematic_gemini::{
    Content, Gemini, GeminiBuilder, GenerateContentRequest, GenerationConfig, ImageConfig, Model,
};

use crate::directives::Directives;
use crate::prompt::{hero_image_prompt, logo_prompt, theme_prompt};

/// Orchestrates theme and asset generation against the Gemini backend.
///
/// Structural generation is gated by the credit meter and consumes
/// exactly one credit per confirmed success. Image synthesis is never
/// gated and never consumes credits.
pub struct ThemeGenerator {
    text: Gemini,
    image: Gemini,
    meter: CreditMeter,
}

impl ThemeGenerator {
    /// Wrap a configured client. The client's key/base URL are shared;
    /// models are pinned per concern.
    pub fn new(client: Gemini, meter: CreditMeter) -> Self {
        Self {
            text: client.with_model(Model::GEMINI_3_PRO_PREVIEW),
            image: client.with_model(Model::GEMINI_2_5_FLASH_IMAGE),
            meter,
        }
    }

    /// Build from `GEMINI_API_KEY`. Fails with
    /// [`ThemeError::CredentialMissing`] when no key is configured.
    pub fn from_env(meter: CreditMeter) -> Result<Self, ThemeError> {
        let client = GeminiBuilder::from_env()
            .and_then(GeminiBuilder::build)
            .map_err(|_| ThemeError::CredentialMissing)?;
        Ok(Self::new(client, meter))
    }

    pub fn credits(&self) -> &CreditMeter {
        &self.meter
    }

    /// Generate the structural theme for a directive set.
    ///
    /// Checks quota before dispatch: exhausted quota fails without a
    /// network call and without consuming anything. A credit is consumed
    /// only after the response parsed and validated; no automatic retry.
    #[instrument(skip_all, fields(business = %directives.business_name), err)]
    pub async fn generate_theme(
        &self,
        directives: &Directives,
    ) -> Result<WebsiteTheme, ThemeError> {
        if !self.meter.has_credits() {
            return Err(ThemeError::QuotaExhausted);
        }

        let spec = theme_prompt(directives);
        let request = GenerateContentRequest {
            contents: vec![Content::text(spec.prompt)],
            generation_config: Some(GenerationConfig {
                response_mime_type: Some("application/json".to_string()),
                response_schema: Some(spec.schema),
                image_config: None,
            }),
        };

        let response =
            self.text.generate_content(&request).await.map_err(map_backend_error)?;
        let body = response.text().ok_or_else(|| {
            warn!("theme response carried no text part");
            ThemeError::MalformedResponse
        })?;
        let theme: WebsiteTheme = serde_json::from_str(body).map_err(|e| {
            warn!(error = %e, "theme payload failed to parse");
            ThemeError::MalformedResponse
        })?;
        theme.validate().map_err(|reason| {
            warn!(%reason, "theme payload failed validation");
            ThemeError::MalformedResponse
        })?;

        // Confirmed success; anything above returned without consuming.
        if let Err(e) = self.meter.consume() {
            warn!(error = %e, "credit consumption failed, keeping the generated theme");
        }
        info!(remaining = self.meter.remaining(), "theme generated");
        Ok(theme)
    }

    /// Synthesize the 16:9 hero background for a generated theme.
    pub async fn generate_hero_image(
        &self,
        theme: &WebsiteTheme,
    ) -> Result<ImageAsset, ThemeError> {
        self.synthesize_image(hero_image_prompt(theme), "16:9").await
    }

    /// Synthesize the 1:1 logo mark.
    pub async fn generate_logo(
        &self,
        business_name: &str,
        industry: &str,
        aesthetic: &str,
    ) -> Result<ImageAsset, ThemeError> {
        self.synthesize_image(logo_prompt(business_name, industry, aesthetic), "1:1").await
    }

    #[instrument(skip_all, fields(aspect_ratio = %aspect_ratio), err)]
    async fn synthesize_image(
        &self,
        prompt: String,
        aspect_ratio: &str,
    ) -> Result<ImageAsset, ThemeError> {
        let request = GenerateContentRequest {
            contents: vec![Content::text(prompt)],
            generation_config: Some(GenerationConfig {
                image_config: Some(ImageConfig { aspect_ratio: aspect_ratio.to_string() }),
                ..Default::default()
            }),
        };
        let response =
            self.image.generate_content(&request).await.map_err(map_backend_error)?;
        let blob = response.inline_data().ok_or(ThemeError::AssetSynthesisFailed)?;
        Ok(ImageAsset::new(blob.mime_type.clone(), blob.data.clone()))
    }

    /// Synthesize hero and logo as a concurrent pair.
    ///
    /// Either side may fail without affecting the other or the already
    /// obtained theme; failures are logged and returned as `None`.
    pub async fn generate_assets(
        &self,
        theme: &WebsiteTheme,
    ) -> (Option<ImageAsset>, Option<ImageAsset>) {
        let (hero, logo) = tokio::join!(
            self.generate_hero_image(theme),
            self.generate_logo(&theme.business_name, &theme.industry, &theme.aesthetic),
        );
        let hero = hero.inspect_err(|e| warn!(error = %e, "hero image synthesis failed")).ok();
        let logo = logo.inspect_err(|e| warn!(error = %e, "logo synthesis failed")).ok();
        (hero, logo)
    }

    /// Drive one full generation through a session: structural theme
    /// first, then (optionally) the concurrent asset pair. The session's
    /// loading flag clears only once both asset requests settled.
    pub async fn generate_into(
        &self,
        session: &mut ThemeSession,
        directives: &Directives,
        synthesize_assets: bool,
    ) -> RequestToken {
        let token = session.begin();
        match self.generate_theme(directives).await {
            Ok(theme) => {
                // Theme becomes visible immediately; loading stays up
                // until the asset pair settles.
                session.complete_theme(token, Ok(theme.clone()));
                let (hero, logo) = if synthesize_assets {
                    self.generate_assets(&theme).await
                } else {
                    (None, None)
                };
                session.complete_assets(token, hero, logo);
            }
            Err(e) => {
                session.complete_theme(token, Err(e));
            }
        }
        token
    }
}

/// Map transport failures into the user-facing taxonomy.
///
/// Raw backend text goes to the log, never into the returned error.
fn map_backend_error(err: thematic_gemini::Error) -> ThemeError {
    use thematic_gemini::Error;
    warn!(error = %err, "generation backend call failed");
    match err {
        Error::MissingApiKey | Error::InvalidApiKey { .. } => ThemeError::CredentialMissing,
        Error::BadResponse { code: 429 | 503, .. } => ThemeError::RateLimited,
        Error::DecodeResponse { .. } => ThemeError::MalformedResponse,
        _ => ThemeError::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_statuses_map_to_the_taxonomy() {
        let rate = map_backend_error(thematic_gemini::Error::BadResponse {
            code: 429,
            description: Some("slow down".to_string()),
        });
        assert!(matches!(rate, ThemeError::RateLimited));

        let overloaded = map_backend_error(thematic_gemini::Error::BadResponse {
            code: 503,
            description: None,
        });
        assert!(matches!(overloaded, ThemeError::RateLimited));

        let server_error = map_backend_error(thematic_gemini::Error::BadResponse {
            code: 500,
            description: Some("internal".to_string()),
        });
        assert!(matches!(server_error, ThemeError::Unknown));

        let no_key = map_backend_error(thematic_gemini::Error::MissingApiKey);
        assert!(matches!(no_key, ThemeError::CredentialMissing));
    }

    #[test]
    fn mapped_errors_never_leak_backend_text() {
        let err = map_backend_error(thematic_gemini::Error::BadResponse {
            code: 500,
            description: Some("secret internal trace".to_string()),
        });
        assert!(!err.to_string().contains("secret internal trace"));
    }
}
