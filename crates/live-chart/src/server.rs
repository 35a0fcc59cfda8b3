// File: crates/live-chart/src/server.rs
// Summary: HTTP surface of the dashboard: page, current figure (JSON/PNG) and an SSE update stream.

use std::convert::Infallible;
use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use futures::Stream;
use tokio::net::TcpListener;
use tokio_stream::wrappers::WatchStream;
use tokio_stream::StreamExt;
use tracing::{info, warn};

use crate::config::LiveChartConfig;
use crate::page::render_page;
use crate::state::ChartState;

#[derive(Clone)]
struct AppState {
    chart: ChartState,
    page: Arc<str>,
}

/// All routes, backed by `state`. Read-only: nothing here mutates the chart.
pub fn router(state: ChartState, cfg: &LiveChartConfig) -> Router {
    let app = AppState { chart: state, page: Arc::from(render_page(cfg)) };
    Router::new()
        .route("/", get(index))
        .route("/figure.json", get(figure_json))
        .route("/figure.png", get(figure_png))
        .route("/events", get(events))
        .route("/healthz", get(|| async { "ok" }))
        .with_state(app)
}

/// Serve until the listener fails. The caller decides when to stop.
pub async fn serve(listener: TcpListener, app: Router) -> anyhow::Result<()> {
    info!(addr = %listener.local_addr()?, "dashboard listening");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn index(State(app): State<AppState>) -> Html<String> {
    Html(app.page.to_string())
}

async fn figure_json(State(app): State<AppState>) -> Response {
    let snap = app.chart.snapshot();
    ([(header::CACHE_CONTROL, "no-store")], Json(snap.view())).into_response()
}

async fn figure_png(State(app): State<AppState>) -> Response {
    let snap = app.chart.snapshot();
    match snap.frame {
        Some(frame) => (
            [(header::CONTENT_TYPE, "image/png"), (header::CACHE_CONTROL, "no-store")],
            frame.png.clone(),
        )
            .into_response(),
        None => {
            let msg = snap
                .error
                .map(|e| e.message)
                .unwrap_or_else(|| "no chart rendered yet".to_string());
            (StatusCode::SERVICE_UNAVAILABLE, msg).into_response()
        }
    }
}

/// One `update` event per published snapshot, starting with the current one.
async fn events(State(app): State<AppState>) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let stream = WatchStream::new(app.chart.subscribe()).map(|snap| {
        let event = Event::default()
            .event("update")
            .json_data(snap.event())
            .unwrap_or_else(|e| {
                warn!(error = %e, "failed to encode update event");
                Event::default().event("update")
            });
        Ok::<_, Infallible>(event)
    });
    Sse::new(stream).keep_alive(KeepAlive::default())
}
