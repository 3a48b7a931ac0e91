use anyhow::Result;
use futures::FutureExt;
use futures::{channel::mpsc::channel, TryFutureExt};
use secrecy::SecretString;
use std::future::IntoFuture;
use tokio::net::TcpListener;
use tokio::task::JoinSet;

use crate::cli::ServeArgs;
use crate::event::Delivery;
use crate::utils::get_credential;

mod listener;
#[cfg(test)]
pub(crate) mod mock_github;
mod runner;

pub(crate) async fn serve(args: ServeArgs) -> Result<()> {
    let (sender, receiver) = channel::<Delivery>(32);
    // If secret has not been passed via CLI or env, get it as a credential.
    let secret_token = args
        .secret_token
        .map(SecretString::new)
        .ok_or(())
        .or_else(|()| get_credential("webhook_secret"))?;
    let github = args.auth.try_into_github().await?;

    let service = listener::listen(sender, secret_token);
    let tcp_listener = TcpListener::bind(&args.addr).await?;
    tracing::info!("Listening on {}", args.addr);

    let mut set: JoinSet<Result<()>> = JoinSet::new();
    set.spawn(axum::serve(tcp_listener, service).into_future().err_into());
    set.spawn(runner::runner(receiver, github).map(Result::Ok));
    join_all(set).await
}

/// Wait for every task, returning the first error (or panic) from any of them.
async fn join_all(mut set: JoinSet<Result<()>>) -> Result<()> {
    while let Some(res) = set.join_next().await {
        res??;
    }
    Ok(())
}
