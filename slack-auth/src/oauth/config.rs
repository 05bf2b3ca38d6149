//! Client registration and authorization request settings.

use secrecy::{ExposeSecret, SecretString};

/// OAuth settings for one Slack application.
///
/// Empty strings are treated the same as unset values: they are left out of
/// the authorization URL.
#[derive(Debug, Clone)]
pub struct OAuthConfig {
    /// Client ID as given by registration of the Slack application.
    pub client_id: String,
    /// Client secret. Only ever sent in the token exchange body.
    pub client_secret: SecretString,
    /// Requested scopes, in request order.
    pub scopes: Vec<String>,
    /// CSRF state token. Generated on first use if unset.
    pub state: Option<String>,
    /// Team ID to request authorization for.
    pub team: Option<String>,
    /// Where Slack redirects after the user authorizes.
    pub redirect_uri: Option<String>,
}

impl OAuthConfig {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: SecretString::new(client_secret.into()),
            scopes: Vec::new(),
            state: None,
            team: None,
            redirect_uri: None,
        }
    }

    pub fn with_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.scopes = scopes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn with_team(mut self, team: impl Into<String>) -> Self {
        self.team = Some(team.into());
        self
    }

    pub fn with_redirect_uri(mut self, redirect_uri: impl Into<String>) -> Self {
        self.redirect_uri = Some(redirect_uri.into());
        self
    }

    /// Scopes joined with commas. Blank and repeated scopes are dropped,
    /// keeping the first occurrence.
    pub fn scope_param(&self) -> String {
        let mut seen: Vec<&str> = Vec::with_capacity(self.scopes.len());
        for scope in &self.scopes {
            let scope = scope.as_str();
            if !scope.is_empty() && !seen.contains(&scope) {
                seen.push(scope);
            }
        }
        seen.join(",")
    }

    pub(crate) fn client_secret(&self) -> &str {
        self.client_secret.expose_secret()
    }
}

/// Returns the value only when it is set and non-empty.
pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_param_joins_with_commas() {
        let config = OAuthConfig::new("CID", "SEC").with_scopes(["identify", "read", "post"]);
        assert_eq!(config.scope_param(), "identify,read,post");
    }

    #[test]
    fn test_scope_param_empty() {
        let config = OAuthConfig::new("CID", "SEC");
        assert_eq!(config.scope_param(), "");
    }

    #[test]
    fn test_scope_param_drops_duplicates_and_blanks() {
        let config = OAuthConfig::new("CID", "SEC").with_scopes(["read", "", "identify", "read"]);
        assert_eq!(config.scope_param(), "read,identify");
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = OAuthConfig::new("CID", "super-secret-value");
        let debug = format!("{:?}", config);
        assert!(debug.contains("CID"));
        assert!(!debug.contains("super-secret-value"));
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(&None), None);
        assert_eq!(non_empty(&Some(String::new())), None);
        assert_eq!(non_empty(&Some("T1".to_string())), Some("T1"));
    }
}
