use crate::prelude::{eprintln, *};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::any,
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::feed::fetch_feed_page;
use tvfeed_core::page::render_document;
use tvfeed_core::query::page_or_default;

#[derive(Debug, clap::Parser)]
#[command(name = "serve")]
#[command(about = "Serve the rendered feed over HTTP")]
pub struct App {
    /// Port to listen on
    #[arg(short, long, default_value = "8787")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,
}

struct ServerState {
    client: reqwest::Client,
    verbose: bool,
}

pub async fn run(app: App, global: crate::Global) -> Result<()> {
    if global.verbose {
        eprintln!("Starting feed server on {}:{}...", app.host, app.port);
    }

    let addr = format!("{}:{}", app.host, app.port);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let state = Arc::new(ServerState {
        // No request timeout: a hung upstream call runs until the runtime
        // gives up on it.
        client: reqwest::Client::new(),
        verbose: global.verbose,
    });

    // The worker this replaces answered every request the same way, so the
    // root route and the fallback share one handler and no method filter.
    let app_router = Router::new()
        .route("/", any(feed_page_handler))
        .fallback(feed_page_handler)
        .layer(cors)
        .with_state(state);

    if global.verbose {
        eprintln!("Feed server listening on http://{}", addr);
    }

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| eyre!("Failed to bind to {}: {}", addr, e))?;

    axum::serve(listener, app_router)
        .await
        .map_err(|e| eyre!("Server error: {e}"))?;

    Ok(())
}

#[derive(Debug, serde::Deserialize)]
struct PageQuery {
    page: Option<String>,
}

/// One inbound request, one upstream fetch, one rendered document.
async fn feed_page_handler(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<PageQuery>,
) -> Result<Html<String>, UpstreamFault> {
    let page = page_or_default(query.page.as_deref());

    if state.verbose {
        eprintln!("Fetching upstream page {page}");
    }

    let payload = fetch_feed_page(&state.client, page).await?;

    Ok(Html(render_document(&payload.data)))
}

/// Upstream or decode faults surface as a bare 502: no retry, no fallback
/// content, no diagnostics beyond the stderr line.
struct UpstreamFault(FeedError);

impl From<FeedError> for UpstreamFault {
    fn from(err: FeedError) -> Self {
        Self(err)
    }
}

impl IntoResponse for UpstreamFault {
    fn into_response(self) -> Response {
        eprintln!("upstream fault: {}", self.0);
        (StatusCode::BAD_GATEWAY, "upstream feed unavailable\n").into_response()
    }
}
