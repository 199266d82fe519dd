use reqwest::{Client, Url, header};

use crate::{
    config::{ClientCredentials, Config},
    error::{ExchangeError, RelayError},
    types::CredentialRecord,
    utils,
};

/// Builds the Spotify authorization URL the browser is redirected to.
///
/// The `redirect_uri` must be the exact value later passed to
/// [`exchange_code`].
pub fn authorize_url(
    config: &Config,
    credentials: &ClientCredentials,
    redirect_uri: &str,
    state: &str,
) -> Result<String, RelayError> {
    let url = Url::parse_with_params(
        &config.auth_url,
        &[
            ("response_type", "code"),
            ("client_id", credentials.client_id.as_str()),
            ("scope", config.scope.as_str()),
            ("redirect_uri", redirect_uri),
            ("state", state),
        ],
    )
    .map_err(|e| RelayError::Configuration(format!("Invalid SPOTIFY_API_AUTH_URL: {}", e)))?;

    Ok(url.to_string())
}

/// Exchanges an authorization code for a credential.
///
/// Sends a single form-encoded `authorization_code` grant to the token
/// endpoint, authenticated with HTTP Basic built from the client id and
/// secret. The code is single-use, so a failure here is final for the
/// current attempt; the caller must not retry.
///
/// # Errors
///
/// - [`ExchangeError::Rejected`] when Spotify answers with a non-success status
/// - [`ExchangeError::Transport`] when the request cannot be sent
/// - [`ExchangeError::Malformed`] when the success body is not a token response
pub async fn exchange_code(
    client: &Client,
    token_url: &str,
    code: &str,
    redirect_uri: &str,
    client_id: &str,
    client_secret: &str,
) -> Result<CredentialRecord, ExchangeError> {
    let res = client
        .post(token_url)
        .header(
            header::AUTHORIZATION,
            utils::basic_auth_header(client_id, client_secret),
        )
        .form(&[
            ("grant_type", "authorization_code"),
            ("code", code),
            ("redirect_uri", redirect_uri),
        ])
        .send()
        .await
        .map_err(ExchangeError::Transport)?;

    if !res.status().is_success() {
        return Err(ExchangeError::Rejected(res.status()));
    }

    res.json::<CredentialRecord>()
        .await
        .map_err(ExchangeError::Malformed)
}
