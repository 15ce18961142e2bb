//! OAuth login: redirect construction and code exchange.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use thiserror::Error;
use tracing::{error, info};
use url::Url;
use uuid::Uuid;

use accredit_gateway::{ApiRequest, ApiResponse, GatewayError, endpoints};

use crate::claims::Claims;
use crate::session::{Session, TokenStore};

/// Supported identity providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    Google,
    Microsoft,
}

impl Provider {
    /// The slug used in callback routes and endpoint paths.
    pub fn slug(&self) -> &'static str {
        match self {
            Provider::Google => "google",
            Provider::Microsoft => "microsoft",
        }
    }

    fn authorize_endpoint(&self) -> &'static str {
        match self {
            Provider::Google => "https://accounts.google.com/o/oauth2/v2/auth",
            Provider::Microsoft => {
                "https://login.microsoftonline.com/common/oauth2/v2.0/authorize"
            }
        }
    }
}

/// Client-side OAuth configuration supplied by the embedder.
#[derive(Debug, Clone)]
pub struct OauthConfig {
    pub google_client_id: String,
    pub microsoft_client_id: String,
    /// Portal origin; callback URIs are derived as
    /// `{portal_base}/auth/{provider}-callback`.
    pub portal_base: String,
    pub scopes: Vec<String>,
}

impl OauthConfig {
    pub fn new(
        google_client_id: impl Into<String>,
        microsoft_client_id: impl Into<String>,
        portal_base: impl Into<String>,
    ) -> Self {
        Self {
            google_client_id: google_client_id.into(),
            microsoft_client_id: microsoft_client_id.into(),
            portal_base: portal_base.into(),
            scopes: vec![
                "openid".to_string(),
                "email".to_string(),
                "profile".to_string(),
            ],
        }
    }

    fn client_id(&self, provider: Provider) -> &str {
        match provider {
            Provider::Google => &self.google_client_id,
            Provider::Microsoft => &self.microsoft_client_id,
        }
    }

    pub fn redirect_uri(&self, provider: Provider) -> String {
        format!(
            "{}/auth/{}-callback",
            self.portal_base.trim_end_matches('/'),
            provider.slug()
        )
    }
}

/// A prepared authorization redirect. The caller performs the actual
/// navigation; `state` is kept for replay verification on return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRedirect {
    pub url: String,
    pub state: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The provider redirected back without an authorization code.
    #[error("no authorization code received")]
    MissingCode,

    /// The exchange call failed at or beyond the gateway.
    #[error(transparent)]
    Gateway(#[from] GatewayError),

    /// The exchanged token did not decode to usable, unexpired claims.
    #[error("token decode failed")]
    InvalidToken,

    /// The provider's authorize endpoint URL could not be built.
    #[error("invalid oauth configuration: {0}")]
    BadConfig(String),
}

/// Build the authorization-request URL for a provider.
///
/// Pure computation: embeds client id, derived redirect URI, scopes, and a
/// fresh anti-replay state nonce. No network call happens here.
pub fn begin_login(provider: Provider, config: &OauthConfig) -> Result<LoginRedirect, AuthError> {
    let state = Uuid::now_v7().to_string();
    let mut url = Url::parse(provider.authorize_endpoint())
        .map_err(|e| AuthError::BadConfig(e.to_string()))?;
    url.query_pairs_mut()
        .append_pair("client_id", config.client_id(provider))
        .append_pair("redirect_uri", &config.redirect_uri(provider))
        .append_pair("response_type", "code")
        .append_pair("scope", &config.scopes.join(" "))
        .append_pair("state", &state);
    Ok(LoginRedirect { url: url.into(), state })
}

/// Token payload returned by the backend's callback exchange.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Exchange an authorization code for a token and transition the session.
///
/// `exchange` is the embedder's one-shot transport call for the prepared
/// request. On any failure the session is left untouched (anonymous stays
/// anonymous) and the error is surfaced for display; nothing retries.
pub fn complete_login<S, F>(
    session: &mut Session<S>,
    provider: Provider,
    code: &str,
    config: &OauthConfig,
    now: DateTime<Utc>,
    exchange: F,
) -> Result<Claims, AuthError>
where
    S: TokenStore,
    F: FnOnce(&ApiRequest) -> Result<ApiResponse<TokenResponse>, GatewayError>,
{
    if code.trim().is_empty() {
        return Err(AuthError::MissingCode);
    }

    let request =
        endpoints::oauth_callback(provider.slug(), code, &config.redirect_uri(provider));
    let response = exchange(&request).map_err(|e| {
        error!(provider = provider.slug(), error = %e, "code exchange failed");
        AuthError::Gateway(e)
    })?;
    let payload = response.into_result()?;

    let claims = crate::claims::decode_token(&payload.token)
        .filter(|claims| claims.is_valid(now))
        .ok_or(AuthError::InvalidToken)?;

    session.accept_token(payload.token);
    info!(provider = provider.slug(), email = %claims.email, "signed in");
    Ok(claims)
}
