use clap::{Args, Parser, Subcommand};

use crate::title_policy::WipToggle;

#[derive(Parser)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    /// Log HTTP traffic and debug events
    #[arg(short, long, global = true)]
    pub(crate) verbose: bool,
    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Start web hook server
    Serve(ServeArgs),
    /// Check a PR title without talking to GitHub
    Classify(ClassifyArgs),
}

#[derive(Args)]
pub(crate) struct ServeArgs {
    /// IP and port to listen on
    #[arg(default_value = "0.0.0.0:3000")]
    pub(crate) addr: String,
    /// Webhook secret as configured on GitHub (default: systemd credential `webhook_secret`)
    #[arg(long, env)]
    pub(crate) secret_token: Option<String>,
    #[command(flatten)]
    pub(crate) auth: AuthArgs,
}

#[derive(Args, Default)]
pub(crate) struct AuthArgs {
    /// GitHub App ID
    #[arg(long, env = "GITHUB_APP_ID", conflicts_with = "github_token")]
    pub(crate) app_id: Option<u64>,
    /// GitHub App private key in PEM format (default: systemd credential `app_key`)
    #[arg(long, env = "GITHUB_APP_KEY", requires = "app_id")]
    pub(crate) app_key: Option<String>,
    /// Personal access token, used instead of GitHub App authentication
    #[arg(long, env = "GITHUB_TOKEN")]
    pub(crate) github_token: Option<String>,
    /// Base URL of the GitHub API (e.g. for GitHub Enterprise)
    #[arg(long, env = "GITHUB_API_URL")]
    pub(crate) github_api_url: Option<String>,
}

#[derive(Args)]
pub(crate) struct ClassifyArgs {
    /// Pull request title
    pub(crate) title: String,
    /// Also print the title after toggling the WIP marker
    #[arg(long, value_enum)]
    pub(crate) toggle: Option<WipToggle>,
}
