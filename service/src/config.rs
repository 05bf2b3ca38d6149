use clap::builder::TypedValueParser as _;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use log::LevelFilter;
use std::time::Duration;

/// Default Slack base URL used when `SLACK_BASE_URL` is not set.
pub const DEFAULT_SLACK_BASE_URL: &str = "https://slack.com/";

#[derive(Clone, Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Client ID as given by registration of the Slack application.
    #[arg(long, env)]
    pub slack_client_id: String,

    /// Client secret as given by registration of the Slack application.
    #[arg(long, env, hide_env_values = true)]
    slack_client_secret: String,

    /// A comma separated list of scopes to request (e.g. identify,read,post).
    #[arg(long, env, value_delimiter = ',', use_value_delimiter = true)]
    pub slack_scopes: Vec<String>,

    /// Team ID to request authorization for.
    #[arg(long, env)]
    pub slack_team: Option<String>,

    /// URL for Slack to redirect to after authorization.
    #[arg(long, env)]
    pub slack_redirect_uri: Option<String>,

    /// The base URL of Slack's web endpoints.
    /// Override in tests to point at a mock server.
    #[arg(long, env, default_value = DEFAULT_SLACK_BASE_URL)]
    slack_base_url: String,

    /// Timeout in seconds for the token exchange request
    #[arg(long, env, default_value_t = 30, value_parser = clap::value_parser!(u64).range(1..))]
    pub request_timeout_secs: u64,

    /// Set the log level verbosity threshold (level) to control what gets displayed on console output
    #[arg(
        short,
        long,
        env,
        default_value_t = LevelFilter::Info,
        value_parser = clap::builder::PossibleValuesParser::new(["OFF", "ERROR", "WARN", "INFO", "DEBUG", "TRACE"])
            .map(|s| s.parse::<LevelFilter>().unwrap()),
        )]
    pub log_level_filter: LevelFilter,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Clone, Debug, PartialEq, Subcommand)]
pub enum Command {
    /// Print the Slack authorization URL and the state token to persist
    AuthorizeUrl {
        /// Redirect URI to use instead of the configured one
        #[arg(long)]
        redirect: Option<String>,
    },
    /// Exchange an authorization code for an access token
    Exchange {
        /// The code Slack passed to the redirect URI
        #[arg(long)]
        code: String,

        /// Print the access token itself
        #[arg(long, default_value_t = false)]
        show_token: bool,
    },
}

impl Config {
    pub fn new() -> Self {
        // Load .env file first
        dotenv().ok();
        // Then parse the command line parameters and flags
        Config::parse()
    }

    pub fn slack_client_secret(&self) -> &str {
        &self.slack_client_secret
    }

    pub fn slack_base_url(&self) -> &str {
        &self.slack_base_url
    }

    pub fn set_slack_base_url(mut self, slack_base_url: String) -> Self {
        self.slack_base_url = slack_base_url;
        self
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Config, clap::Error> {
        let mut full = vec![
            "slack_oauth_rs",
            "--slack-client-id",
            "CID",
            "--slack-client-secret",
            "SEC",
        ];
        full.extend_from_slice(args);
        Config::try_parse_from(full)
    }

    #[test]
    fn test_defaults() {
        let config = parse(&["authorize-url"]).unwrap();
        assert_eq!(config.slack_client_id, "CID");
        assert_eq!(config.slack_client_secret(), "SEC");
        assert_eq!(config.slack_base_url(), DEFAULT_SLACK_BASE_URL);
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.log_level_filter, LevelFilter::Info);
        assert!(config.slack_scopes.is_empty());
        assert_eq!(config.slack_team, None);
        assert_eq!(config.command, Command::AuthorizeUrl { redirect: None });
    }

    #[test]
    fn test_scopes_are_comma_delimited() {
        let config = parse(&["--slack-scopes", "identify,read", "authorize-url"]).unwrap();
        assert_eq!(config.slack_scopes, vec!["identify", "read"]);
    }

    #[test]
    fn test_exchange_subcommand() {
        let config = parse(&["--log-level-filter", "DEBUG", "exchange", "--code", "abc"]).unwrap();
        assert_eq!(config.log_level_filter, LevelFilter::Debug);
        assert_eq!(
            config.command,
            Command::Exchange {
                code: "abc".to_string(),
                show_token: false
            }
        );
    }

    #[test]
    fn test_exchange_requires_code() {
        assert!(parse(&["exchange"]).is_err());
    }

    #[test]
    fn test_rejects_unknown_log_level() {
        assert!(parse(&["--log-level-filter", "LOUD", "authorize-url"]).is_err());
    }

    #[test]
    fn test_rejects_zero_request_timeout() {
        assert!(parse(&["--request-timeout-secs", "0", "authorize-url"]).is_err());
        let config = parse(&["--request-timeout-secs", "5", "authorize-url"]).unwrap();
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_set_slack_base_url() {
        let config = parse(&["authorize-url"])
            .unwrap()
            .set_slack_base_url("http://127.0.0.1:1234".to_string());
        assert_eq!(config.slack_base_url(), "http://127.0.0.1:1234");
    }
}
