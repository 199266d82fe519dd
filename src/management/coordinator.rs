use crate::{
    context::AppContext,
    error::RelayError,
    info, spotify,
    types::{CallbackParams, CredentialRecord},
};

/// Progress of one OAuth callback through the handshake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandshakeState {
    AwaitingCode,
    ValidatingState,
    Exchanging,
    Complete,
    Failed,
}

/// Drives a single `/callback` request from the raw query to a stored
/// credential.
///
/// ```text
/// AwaitingCode -> ValidatingState -> Exchanging -> Complete
///       \               \                \
///        +---------------+----------------+--> Failed
/// ```
///
/// A Spotify-reported `error` short-circuits before the ledger is touched.
/// The nonce is burned during validation, so a failed exchange cannot be
/// replayed with the same `state`; the user has to start over from `/setup`.
pub struct CallbackCoordinator<'a> {
    ctx: &'a AppContext,
    state: HandshakeState,
}

impl<'a> CallbackCoordinator<'a> {
    pub fn new(ctx: &'a AppContext) -> Self {
        Self {
            ctx,
            state: HandshakeState::AwaitingCode,
        }
    }

    pub fn state(&self) -> HandshakeState {
        self.state
    }

    /// Runs the handshake to completion.
    ///
    /// `redirect_uri` must equal the one used when the attempt was started.
    pub async fn complete(
        &mut self,
        params: CallbackParams,
        redirect_uri: &str,
    ) -> Result<CredentialRecord, RelayError> {
        match self.drive(params, redirect_uri).await {
            Ok(record) => {
                self.state = HandshakeState::Complete;
                Ok(record)
            }
            Err(e) => {
                self.state = HandshakeState::Failed;
                Err(e)
            }
        }
    }

    async fn drive(
        &mut self,
        params: CallbackParams,
        redirect_uri: &str,
    ) -> Result<CredentialRecord, RelayError> {
        if let Some(error) = params.error.filter(|e| !e.is_empty()) {
            return Err(RelayError::Validation(format!("OAuth Error: {}", error)));
        }

        let (Some(code), Some(nonce)) = (
            params.code.filter(|c| !c.is_empty()),
            params.state.filter(|s| !s.is_empty()),
        ) else {
            return Err(RelayError::Validation(
                "Missing authorization code or state".to_string(),
            ));
        };

        self.state = HandshakeState::ValidatingState;
        if !self.ctx.ledger.consume(&nonce).await? {
            return Err(RelayError::Validation(
                "Invalid or expired state parameter".to_string(),
            ));
        }

        self.state = HandshakeState::Exchanging;
        let credentials = self.ctx.config.credentials()?;
        let record = spotify::auth::exchange_code(
            &self.ctx.client,
            &self.ctx.config.token_url,
            &code,
            redirect_uri,
            &credentials.client_id,
            &credentials.client_secret,
        )
        .await?;

        self.ctx.vault.store(&record).await?;
        info!("Stored new credential (scope: {})", record.scope);
        Ok(record)
    }
}
