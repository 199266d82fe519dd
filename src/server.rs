use std::{net::SocketAddr, str::FromStr};

use axum::{
    Router,
    http::{HeaderName, HeaderValue, Method, StatusCode, header},
    response::IntoResponse,
    routing::{any, get},
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    set_header::SetResponseHeaderLayer,
};

use crate::{Res, api, context::AppContext, info};

const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
const ALLOW_HEADERS: &str = "Content-Type, Authorization";

/// Builds the relay's router around the given context.
///
/// Dispatch is by path only: every method reaches the path's handler, except
/// that `POST /setup` starts an authorization attempt. Unknown paths get 404.
pub fn router(ctx: AppContext) -> Router {
    Router::new()
        .route("/", any(api::root))
        .route(
            "/setup",
            get(api::setup_page)
                .post(api::begin_authorization)
                .fallback(api::setup_page),
        )
        .route("/callback", any(api::callback))
        .route("/now-playing", any(api::now_playing))
        .route("/recent", any(api::recent))
        .route("/health", any(api::health))
        .fallback(not_found)
        .layer(cors())
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(ALLOW_METHODS),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static(ALLOW_HEADERS),
        ))
        .with_state(ctx)
}

pub async fn start_api_server(ctx: AppContext) -> Res<()> {
    let addr = SocketAddr::from_str(&ctx.config.server_addr)
        .map_err(|e| format!("Failed to parse server address: {}", e))?;

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(ctx)).await?;
    Ok(())
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not Found")
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("authorization"),
        ])
}
