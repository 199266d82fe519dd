use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use serde_json::Value;

use crate::{
    context::AppContext,
    error::RelayError,
    spotify,
    types::{CredentialRecord, NothingPlaying},
};

async fn credential(ctx: &AppContext) -> Result<CredentialRecord, RelayError> {
    ctx.vault.fetch().await?.ok_or(RelayError::NoCredential)
}

pub async fn now_playing(State(ctx): State<AppContext>) -> Result<Response, RelayError> {
    let record = credential(&ctx).await?;

    let playing =
        spotify::player::currently_playing(&ctx.client, &ctx.config.api_url, &record.access_token)
            .await?;
    Ok(match playing {
        Some(track) => Json(track).into_response(),
        None => Json(NothingPlaying::default()).into_response(),
    })
}

pub async fn recent(State(ctx): State<AppContext>) -> Result<Json<Value>, RelayError> {
    let record = credential(&ctx).await?;
    let items =
        spotify::player::recently_played(&ctx.client, &ctx.config.api_url, &record.access_token)
            .await?;
    Ok(Json(items))
}
