use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};
use chrono::{SecondsFormat, Utc};

use crate::{
    context::AppContext,
    types::{Endpoints, HealthReport},
    warning,
};

/// Liveness check that also reports whether a usable credential is stored.
///
/// Always answers 200; a store failure is reported as `oauth_configured: false`.
pub async fn health(State(ctx): State<AppContext>) -> Response {
    let oauth_configured = match ctx.vault.fetch().await {
        Ok(record) => record.is_some(),
        Err(e) => {
            warning!("Health check could not read the token vault: {}", e);
            false
        }
    };

    let report = HealthReport {
        status: "healthy".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        environment: ctx.config.environment.clone(),
        oauth_configured,
        endpoints: Endpoints::default(),
    };

    let body = serde_json::to_string_pretty(&report).unwrap_or_else(|_| "{}".to_string());
    ([(header::CONTENT_TYPE, "application/json")], body).into_response()
}
