//! Slack OAuth client.

use log::*;
use serde::Serialize;

use super::config::{non_empty, OAuthConfig};
use super::endpoints::{Endpoints, DEFAULT_BASE_URL};
use super::response::{AccessGrant, AuthorizationResponse};
use super::state::generate_state_token;
use crate::error::Error;
use crate::http::{HttpClientBuilder, HttpClientConfig};

/// Authorization request with URL and the state to persist.
#[derive(Debug, Clone)]
pub struct AuthorizationRequest {
    /// Authorization URL to redirect the user to.
    pub url: String,
    /// CSRF state placed in the URL. The caller stores it and compares it with
    /// the `state` Slack sends back to the redirect URI.
    pub state: String,
}

/// Form body for `oauth.access`.
#[derive(Debug, Serialize)]
struct TokenExchangeRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    code: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    redirect_uri: Option<&'a str>,
}

/// OAuth 2.0 authorization-code client for a Slack application.
pub struct Client {
    config: OAuthConfig,
    endpoints: Endpoints,
    http_client: reqwest::Client,
}

impl Client {
    /// Create a client against slack.com with the default HTTP settings.
    pub fn new(config: OAuthConfig) -> Result<Self, Error> {
        Self::with_options(config, DEFAULT_BASE_URL, HttpClientConfig::default())
    }

    /// Create a client against `base_url` with custom HTTP settings.
    pub fn with_options(
        config: OAuthConfig,
        base_url: &str,
        http_config: HttpClientConfig,
    ) -> Result<Self, Error> {
        let endpoints = Endpoints::from_base(base_url)?;
        let http_client = HttpClientBuilder::from_config(http_config).build()?;

        Ok(Self {
            config,
            endpoints,
            http_client,
        })
    }

    pub fn config(&self) -> &OAuthConfig {
        &self.config
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Build the URL that sends the user to Slack's consent screen.
    ///
    /// Generates a state token if none is set and keeps it on the client, so
    /// later calls reuse it. A non-empty `redirect_override` replaces the
    /// configured redirect URI and also stays on the client; the code exchange
    /// sends that same value.
    pub fn authorization_url(&mut self, redirect_override: Option<&str>) -> AuthorizationRequest {
        let state = match non_empty(&self.config.state) {
            Some(state) => state.to_string(),
            None => {
                let state = generate_state_token();
                self.config.state = Some(state.clone());
                state
            }
        };

        if let Some(redirect) = redirect_override.filter(|r| !r.is_empty()) {
            self.config.redirect_uri = Some(redirect.to_string());
        }

        let scope = self.config.scope_param();
        // Slack names the parameter `redirect_uri`, not `redirect`.
        let params = [
            ("client_id", Some(self.config.client_id.as_str())),
            ("state", Some(state.as_str())),
            ("scope", Some(scope.as_str())),
            ("team", non_empty(&self.config.team)),
            ("redirect_uri", non_empty(&self.config.redirect_uri)),
        ];

        let mut url = self.endpoints.authorize_url.clone();
        url.query_pairs_mut().extend_pairs(
            params
                .iter()
                .filter_map(|(key, value)| value.filter(|v| !v.is_empty()).map(|v| (*key, v))),
        );

        debug!("Built Slack authorization URL for client {}", self.config.client_id);

        AuthorizationRequest {
            url: url.to_string(),
            state,
        }
    }

    /// Exchange an authorization code for an access token.
    pub async fn exchange_code(&self, code: &str) -> Result<AccessGrant, Error> {
        let request = TokenExchangeRequest {
            client_id: &self.config.client_id,
            client_secret: self.config.client_secret(),
            code,
            redirect_uri: non_empty(&self.config.redirect_uri),
        };

        debug!("Exchanging Slack OAuth code for an access token");

        let response = self
            .http_client
            .post(self.endpoints.access_url.clone())
            .form(&request)
            .send()
            .await
            .map_err(|e| {
                warn!("Failed to reach Slack oauth.access: {:?}", e);
                Error::from(e)
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            warn!("Failed to read Slack oauth.access response: {:?}", e);
            Error::from(e)
        })?;

        let parsed = AuthorizationResponse::from_json(&body).map_err(|e| {
            warn!("Invalid Slack oauth.access response (HTTP {}): {}", status, e);
            e
        })?;

        match parsed.into_result() {
            Ok(grant) => {
                info!(
                    "Slack OAuth code exchanged for team {}",
                    grant.team_id.as_deref().unwrap_or("<unknown>")
                );
                Ok(grant)
            }
            Err(e) => {
                warn!("Slack rejected OAuth code exchange: {}", e);
                Err(e)
            }
        }
    }
}
