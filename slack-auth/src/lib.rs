//! # slack-auth
//!
//! OAuth 2.0 authorization-code flow for Slack:
//! - Authorization URL generation with CSRF state tokens
//! - Authorization code exchange against `oauth.access`
//! - HTTP client building with bounded timeouts
//!
//! ## Usage
//!
//! ```rust,ignore
//! use slack_auth::oauth::{Client, OAuthConfig};
//!
//! let config = OAuthConfig::new("CID", "SEC").with_scopes(["identify", "read"]);
//! let mut client = Client::new(config)?;
//! let request = client.authorization_url(None);
//! // persist request.state, redirect the user to request.url ...
//! let grant = client.exchange_code(&code).await?;
//! ```

pub mod error;
pub mod http;
pub mod oauth;

// Re-export commonly used types
pub use error::{Error, ErrorKind};
