use anyhow::{bail, Context, Result};
use futures::TryStreamExt;
use octocrab::models::AppId;
use secrecy::{ExposeSecret, SecretString};

use crate::octocrab_utils::{build_client, ClientAuth, GitHubApp};
use crate::utils::get_credential;

use super::AuthArgs;

/// Resolved credentials, secrets wrapped as soon as they leave the CLI parser.
pub(crate) enum Auth {
    AppKey { app_id: AppId, key: SecretString },
    GitHubToken(SecretString),
}

impl TryFrom<AuthArgs> for Auth {
    type Error = anyhow::Error;

    fn try_from(args: AuthArgs) -> Result<Self> {
        match (args.app_id, args.github_token) {
            (Some(app_id), _) => {
                let key = args
                    .app_key
                    .map(SecretString::new)
                    .ok_or(())
                    .or_else(|()| get_credential("app_key"))
                    .context("GitHub App key neither passed nor available as credential")?;
                Ok(Auth::AppKey {
                    app_id: AppId(app_id),
                    key,
                })
            }
            (None, Some(token)) => Ok(Auth::GitHubToken(SecretString::new(token))),
            (None, None) => bail!("pass either --app-id or --github-token"),
        }
    }
}

impl AuthArgs {
    pub(crate) async fn try_into_github(self) -> Result<GitHubApp> {
        let base_uri = self.github_api_url.clone();
        auth_to_github(self.try_into()?, base_uri.as_deref()).await
    }
}

async fn auth_to_github(auth: Auth, base_uri: Option<&str>) -> Result<GitHubApp> {
    match auth {
        Auth::AppKey { app_id, key } => {
            let key = jsonwebtoken::EncodingKey::from_rsa_pem(key.expose_secret().as_bytes())
                .context("GitHub App key is not a valid RSA PEM")?;
            let app = build_client(base_uri, Some(ClientAuth::App(app_id, key)))?;
            let insts = app
                .apps()
                .installations()
                .send()
                .await?
                .into_stream(&app)
                .try_collect::<Vec<_>>()
                .await?;
            tracing::info!(
                "App {} installed {} times: {:?}",
                app_id.0,
                insts.len(),
                insts.iter().map(|i| i.id.0).collect::<Vec<_>>()
            );
            Ok(GitHubApp::App(app))
        }
        Auth::GitHubToken(token) => Ok(GitHubApp::Token(build_client(
            base_uri,
            Some(ClientAuth::PersonalToken(token)),
        )?)),
    }
}
