//! OAuth 2.0 authorization-code flow against Slack.

mod client;
mod config;
mod endpoints;
mod response;
mod state;

pub use client::{AuthorizationRequest, Client};
pub use config::OAuthConfig;
pub use endpoints::{Endpoints, DEFAULT_BASE_URL};
pub use response::{AccessGrant, AuthorizationResponse};
pub use state::generate_state_token;
