use super::assets::{STATIC_ASSETS, StaticAssets, handle_asset};
use super::handlers::{handle_respond, handle_survey, handle_view};
use super::protocol::{ENDPOINT_RESPOND, ENDPOINT_SURVEY, ENDPOINT_VIEW};
use crate::survey::store::SurveyStore;

use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post};
use axum::{Extension, Router};
use std::sync::Arc;
use tokio::sync::watch;
use tracing::Instrument;

/// Fired when the service can no longer guarantee durability.
///
/// The server's graceful-shutdown future waits on it; `main` then exits with
/// an error.
#[derive(Clone)]
pub struct ShutdownSignal {
    tx: Arc<watch::Sender<bool>>,
}

impl ShutdownSignal {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    pub fn trigger(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_triggered(&self) -> bool {
        *self.tx.borrow()
    }

    /// Resolves once `trigger` has been called (immediately if it already was).
    pub async fn wait(&self) {
        let mut rx = self.tx.subscribe();
        // The sender lives in `self`, so the channel cannot close while we wait.
        let _ = rx.wait_for(|triggered| *triggered).await;
    }
}

impl Default for ShutdownSignal {
    fn default() -> Self {
        Self::new()
    }
}

/// Assembles every route of the service.
pub fn build_router(
    store: Arc<SurveyStore>,
    assets: Arc<StaticAssets>,
    shutdown: ShutdownSignal,
) -> Router {
    let mut app = Router::new()
        .route(ENDPOINT_RESPOND, post(handle_respond))
        .route(ENDPOINT_VIEW, get(handle_view))
        .route(ENDPOINT_SURVEY, get(handle_survey));

    for (path, _) in STATIC_ASSETS {
        app = app.route(path, get(handle_asset));
    }

    app.layer(Extension(store))
        .layer(Extension(assets))
        .layer(Extension(shutdown))
        .layer(middleware::from_fn(trace_request))
}

async fn trace_request(req: Request, next: Next) -> Response {
    let span = tracing::info_span!(
        "request",
        method = %req.method(),
        path = %req.uri().path(),
        id = %uuid::Uuid::new_v4(),
    );

    async move {
        let response = next.run(req).await;
        tracing::debug!("Responded {}", response.status());
        response
    }
    .instrument(span)
    .await
}
