use axum::{
    extract::{Query, State},
    http::HeaderMap,
    response::Html,
};

use crate::{
    api::templates,
    context::AppContext,
    error::RelayError,
    management::CallbackCoordinator,
    success,
    types::CallbackParams,
    utils, warning,
};

pub async fn callback(
    State(ctx): State<AppContext>,
    headers: HeaderMap,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Html<&'static str>, RelayError> {
    let params = CallbackParams::from_pairs(pairs);
    let redirect_uri = utils::redirect_uri(&ctx.config, &headers);
    let mut coordinator = CallbackCoordinator::new(&ctx);

    match coordinator.complete(params, &redirect_uri).await {
        Ok(_) => {
            success!("Spotify account connected");
            Ok(Html(templates::SUCCESS_HTML))
        }
        Err(e) => {
            warning!("OAuth callback failed: {}", e);
            Err(e)
        }
    }
}
