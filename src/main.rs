use anyhow::Result;
use log::*;
use secrecy::ExposeSecret;
use service::config::{Command, Config};
use service::logging::Logger;
use slack_auth::http::HttpClientConfig;
use slack_auth::oauth::{Client, OAuthConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::new();

    Logger::init_logger(&config)?;

    info!("Starting slack_oauth_rs");

    let mut client = Client::with_options(
        oauth_config(&config),
        config.slack_base_url(),
        HttpClientConfig {
            timeout: config.request_timeout(),
            ..HttpClientConfig::default()
        },
    )?;

    match &config.command {
        Command::AuthorizeUrl { redirect } => {
            let request = client.authorization_url(redirect.as_deref());
            println!("url:   {}", request.url);
            println!("state: {}", request.state);
        }
        Command::Exchange { code, show_token } => {
            let grant = client.exchange_code(code).await?;
            println!("scope:     {}", grant.scope.as_deref().unwrap_or("-"));
            println!("user_id:   {}", grant.user_id.as_deref().unwrap_or("-"));
            println!("team_id:   {}", grant.team_id.as_deref().unwrap_or("-"));
            println!("team_name: {}", grant.team_name.as_deref().unwrap_or("-"));
            if *show_token {
                println!("token:     {}", grant.access_token.expose_secret());
            }
        }
    }

    Ok(())
}

fn oauth_config(config: &Config) -> OAuthConfig {
    let mut oauth = OAuthConfig::new(
        config.slack_client_id.clone(),
        config.slack_client_secret(),
    )
    .with_scopes(config.slack_scopes.iter().cloned());
    oauth.team = config.slack_team.clone();
    oauth.redirect_uri = config.slack_redirect_uri.clone();
    oauth
}
