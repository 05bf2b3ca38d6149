//! Decoding of the `oauth.access` reply.

use secrecy::SecretString;
use serde::Deserialize;

use crate::error::{oauth_error, Error, ErrorKind, OAuthErrorKind};

/// Error string used when Slack answers `ok: false` without saying why.
const UNKNOWN_ERROR: &str = "unknown_error";

/// Token and metadata granted by a successful exchange.
#[derive(Debug, Clone)]
pub struct AccessGrant {
    /// Access token for Slack API requests.
    pub access_token: SecretString,
    /// Granted scopes, comma separated as Slack reports them.
    pub scope: Option<String>,
    pub user_id: Option<String>,
    pub team_id: Option<String>,
    pub team_name: Option<String>,
}

/// Slack's reply to `oauth.access`.
#[derive(Debug, Clone)]
pub enum AuthorizationResponse {
    Granted(AccessGrant),
    Denied { error: String },
}

/// Wire shape of the reply. Every field is optional so that a missing `ok`
/// flag can be reported as an invalid response rather than a serde error.
#[derive(Debug, Deserialize)]
struct AccessResponseBody {
    ok: Option<bool>,
    error: Option<String>,
    access_token: Option<String>,
    scope: Option<String>,
    user_id: Option<String>,
    team_id: Option<String>,
    team_name: Option<String>,
}

impl AuthorizationResponse {
    /// Decode a response body.
    pub fn from_json(body: &str) -> Result<Self, Error> {
        let parsed: AccessResponseBody = serde_json::from_str(body).map_err(|e| Error {
            source: Some(Box::new(e)),
            error_kind: ErrorKind::OAuth(OAuthErrorKind::InvalidResponse),
        })?;

        match parsed.ok {
            Some(true) => {
                let access_token = parsed.access_token.filter(|t| !t.is_empty()).ok_or_else(
                    || {
                        oauth_error(
                            OAuthErrorKind::InvalidResponse,
                            "ok response without access_token",
                        )
                    },
                )?;
                Ok(AuthorizationResponse::Granted(AccessGrant {
                    access_token: SecretString::new(access_token),
                    scope: parsed.scope,
                    user_id: parsed.user_id,
                    team_id: parsed.team_id,
                    team_name: parsed.team_name,
                }))
            }
            Some(false) => Ok(AuthorizationResponse::Denied {
                error: parsed.error.unwrap_or_else(|| UNKNOWN_ERROR.to_string()),
            }),
            None => Err(oauth_error(
                OAuthErrorKind::InvalidResponse,
                "response has no ok flag",
            )),
        }
    }

    /// Turn a denial into an `AuthExchange` error.
    pub fn into_result(self) -> Result<AccessGrant, Error> {
        match self {
            AuthorizationResponse::Granted(grant) => Ok(grant),
            AuthorizationResponse::Denied { error } => Err(oauth_error(
                OAuthErrorKind::AuthExchange(error.clone()),
                &format!("OAuth.Access: {}", error),
            )),
        }
    }
}
