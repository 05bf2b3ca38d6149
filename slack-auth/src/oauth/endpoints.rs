//! Provider endpoint URLs.

use url::Url;

use crate::error::Error;

/// Slack's public base URL.
pub const DEFAULT_BASE_URL: &str = "https://slack.com/";

const AUTHORIZE_PATH: &str = "oauth/authorize";
const ACCESS_PATH: &str = "api/oauth.access";

/// Authorization and token endpoints resolved against a base URL.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub authorize_url: Url,
    pub access_url: Url,
}

impl Endpoints {
    /// Resolve both endpoints under `base_url`.
    ///
    /// A missing trailing slash is added so a base with a path prefix keeps it.
    pub fn from_base(base_url: &str) -> Result<Self, Error> {
        let base = if base_url.ends_with('/') {
            Url::parse(base_url)?
        } else {
            Url::parse(&format!("{}/", base_url))?
        };

        Ok(Self {
            authorize_url: base.join(AUTHORIZE_PATH)?,
            access_url: base.join(ACCESS_PATH)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigErrorKind, ErrorKind};

    #[test]
    fn test_default_endpoints() {
        let endpoints = Endpoints::from_base(DEFAULT_BASE_URL).unwrap();
        assert_eq!(
            endpoints.authorize_url.as_str(),
            "https://slack.com/oauth/authorize"
        );
        assert_eq!(
            endpoints.access_url.as_str(),
            "https://slack.com/api/oauth.access"
        );
    }

    #[test]
    fn test_from_base_without_trailing_slash_keeps_prefix() {
        let endpoints = Endpoints::from_base("http://127.0.0.1:1234/mock").unwrap();
        assert_eq!(
            endpoints.authorize_url.as_str(),
            "http://127.0.0.1:1234/mock/oauth/authorize"
        );
        assert_eq!(
            endpoints.access_url.as_str(),
            "http://127.0.0.1:1234/mock/api/oauth.access"
        );
    }

    #[test]
    fn test_from_base_rejects_garbage() {
        let err = Endpoints::from_base("::not a url::").unwrap_err();
        assert_eq!(
            err.error_kind,
            ErrorKind::Config(ConfigErrorKind::InvalidEndpoint)
        );
    }
}
