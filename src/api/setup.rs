use axum::{
    extract::State,
    http::{HeaderMap, StatusCode, header},
    response::{Html, IntoResponse, Response},
};

use crate::{api::templates, context::AppContext, error::RelayError, info, spotify, utils};

pub async fn root() -> Html<&'static str> {
    Html(templates::ROOT_HTML)
}

pub async fn setup_page(
    State(ctx): State<AppContext>,
    headers: HeaderMap,
) -> Result<Html<String>, RelayError> {
    ctx.config.credentials()?;
    let redirect_uri = utils::redirect_uri(&ctx.config, &headers);
    Ok(Html(templates::setup_html(&redirect_uri)))
}

/// Opens a new authorization attempt and sends the browser to Spotify.
pub async fn begin_authorization(
    State(ctx): State<AppContext>,
    headers: HeaderMap,
) -> Result<Response, RelayError> {
    let credentials = ctx.config.credentials()?;
    let redirect_uri = utils::redirect_uri(&ctx.config, &headers);

    let nonce = ctx.ledger.begin().await?;
    let auth_url = spotify::auth::authorize_url(&ctx.config, &credentials, &redirect_uri, &nonce)?;

    info!("Authorization started, redirecting to Spotify");
    Ok((StatusCode::FOUND, [(header::LOCATION, auth_url)]).into_response())
}
