use anyhow::{bail, Result};
use octocrab::{
    models::{AppId, InstallationId},
    Octocrab,
};
use secrecy::{ExposeSecret, SecretString};

use crate::constants::API_PREVIEWS;

/// How the bot talks to GitHub.
#[derive(Debug, Clone)]
pub(crate) enum GitHubApp {
    /// Authenticated as the App (JWT). Each delivery gets an installation client.
    App(Octocrab),
    /// A single token used for every delivery.
    Token(Octocrab),
}

impl GitHubApp {
    /// API client to react to a delivery sent for `installation`.
    pub(crate) fn client_for(&self, installation: Option<InstallationId>) -> Result<Octocrab> {
        match (self, installation) {
            (GitHubApp::App(app), Some(id)) => Ok(app.installation(id)),
            (GitHubApp::App(_), None) => {
                bail!("delivery has no installation to authenticate as")
            }
            (GitHubApp::Token(client), _) => Ok(client.clone()),
        }
    }
}

/// Credentials a client is built with.
pub(crate) enum ClientAuth {
    App(AppId, jsonwebtoken::EncodingKey),
    PersonalToken(SecretString),
}

/// Build a client against `base_uri` (default: api.github.com) with the previews the bot needs.
pub(crate) fn build_client(base_uri: Option<&str>, auth: Option<ClientAuth>) -> Result<Octocrab> {
    let mut builder = API_PREVIEWS
        .into_iter()
        .fold(Octocrab::builder(), |builder, preview| builder.add_preview(preview));
    if let Some(base_uri) = base_uri {
        builder = builder.base_uri(base_uri)?;
    }
    builder = match auth {
        Some(ClientAuth::App(app_id, key)) => builder.app(app_id, key),
        // https://github.com/XAMPPRocky/octocrab/issues/594
        Some(ClientAuth::PersonalToken(token)) => {
            builder.personal_token(token.expose_secret().to_owned())
        }
        None => builder,
    };
    Ok(builder.build()?)
}
