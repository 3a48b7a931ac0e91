use futures::{channel::mpsc::Sender, SinkExt};
use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;

use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Router,
};
use axum_github_webhook_extract::{GithubEvent, GithubToken as GitHubSecret};
use http::HeaderMap;
use tower_http::trace::TraceLayer;

use crate::event::Delivery;

const EVENT_HEADER: &str = "X-GitHub-Event";

#[derive(Debug, Clone)]
struct AppState {
    sender: Sender<Delivery>,
    secret: GitHubSecret,
}

impl FromRef<AppState> for GitHubSecret {
    fn from_ref(state: &AppState) -> GitHubSecret {
        state.secret.clone()
    }
}

async fn handle(
    State(state): State<AppState>,
    headers: HeaderMap,
    GithubEvent(payload): GithubEvent<serde_json::Value>,
) -> impl IntoResponse {
    let Some(kind) = headers.get(EVENT_HEADER).and_then(|v| v.to_str().ok()) else {
        return Err((
            StatusCode::BAD_REQUEST,
            format!("missing {EVENT_HEADER} header"),
        ));
    };
    match Delivery::decode(kind, payload) {
        Ok(Some(delivery)) => handle_enqueue(delivery, state).await,
        Ok(None) => {
            tracing::debug!("Skipping {kind} event");
            Ok("skipped".to_owned())
        }
        Err(e) => {
            tracing::warn!("Invalid {kind} payload: {e}");
            Err((StatusCode::BAD_REQUEST, e.to_string()))
        }
    }
}

async fn handle_enqueue(
    delivery: Delivery,
    mut state: AppState,
) -> Result<String, (StatusCode, String)> {
    tracing::info!("Enqueueing {delivery}");
    state
        .sender
        .send(delivery)
        .await
        .map(|()| "enqueued".to_owned())
        .map_err(|_| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error: Failed to send event".to_owned(),
            )
        })
}

pub(crate) fn listen(sender: Sender<Delivery>, secret: SecretString) -> axum::Router {
    let state = AppState {
        sender,
        secret: GitHubSecret(Arc::new(secret.expose_secret().to_owned())),
    };
    std::mem::drop(secret);

    Router::new()
        .route("/", post(handle))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
