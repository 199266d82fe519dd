use serde_json::json;
use spotrelay::{
    config::Config,
    context::AppContext,
    error::RelayError,
    management::{CallbackCoordinator, HandshakeState, Store},
    types::CallbackParams,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

const REDIRECT_URI: &str = "http://relay.test/callback";

fn create_test_context(token_url: String) -> AppContext {
    let config = Config {
        client_id: Some("client".to_string()),
        client_secret: Some("secret".to_string()),
        token_url,
        ..Config::default()
    };
    AppContext::new(config, Store::memory())
}

fn params(code: Option<&str>, state: Option<&str>, error: Option<&str>) -> CallbackParams {
    CallbackParams {
        code: code.map(str::to_string),
        state: state.map(str::to_string),
        error: error.map(str::to_string),
    }
}

#[tokio::test]
async fn test_coordinator_starts_awaiting_code() {
    let ctx = create_test_context("http://127.0.0.1:9/api/token".to_string());
    let coordinator = CallbackCoordinator::new(&ctx);
    assert_eq!(coordinator.state(), HandshakeState::AwaitingCode);
}

#[tokio::test]
async fn test_coordinator_completes_and_stores_credential() {
    let spotify = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "A",
            "token_type": "Bearer",
            "expires_in": 3600,
            "refresh_token": "R",
            "scope": "user-read-currently-playing"
        })))
        .expect(1)
        .mount(&spotify)
        .await;
    let ctx = create_test_context(format!("{}/api/token", spotify.uri()));
    let nonce = ctx.ledger.begin().await.unwrap();

    let mut coordinator = CallbackCoordinator::new(&ctx);
    let record = coordinator
        .complete(params(Some("code"), Some(&nonce), None), REDIRECT_URI)
        .await
        .unwrap();

    assert_eq!(coordinator.state(), HandshakeState::Complete);
    assert_eq!(record.access_token, "A");
    assert_eq!(record.refresh_token.as_deref(), Some("R"));
    assert_eq!(ctx.vault.fetch().await.unwrap().unwrap(), record);
    assert!(!ctx.ledger.consume(&nonce).await.unwrap());
}

#[tokio::test]
async fn test_coordinator_fails_on_reported_error() {
    let ctx = create_test_context("http://127.0.0.1:9/api/token".to_string());
    let nonce = ctx.ledger.begin().await.unwrap();

    let mut coordinator = CallbackCoordinator::new(&ctx);
    let err = coordinator
        .complete(
            params(Some("code"), Some(&nonce), Some("access_denied")),
            REDIRECT_URI,
        )
        .await
        .unwrap_err();

    assert_eq!(coordinator.state(), HandshakeState::Failed);
    assert!(matches!(err, RelayError::Validation(ref msg) if msg == "OAuth Error: access_denied"));
    assert!(ctx.ledger.consume(&nonce).await.unwrap());
}

#[tokio::test]
async fn test_coordinator_fails_on_forged_state() {
    let ctx = create_test_context("http://127.0.0.1:9/api/token".to_string());

    let mut coordinator = CallbackCoordinator::new(&ctx);
    let err = coordinator
        .complete(params(Some("code"), Some("forged"), None), REDIRECT_URI)
        .await
        .unwrap_err();

    assert_eq!(coordinator.state(), HandshakeState::Failed);
    assert!(matches!(err, RelayError::Validation(_)));
}

#[tokio::test]
async fn test_coordinator_requires_client_credentials() {
    let ctx = AppContext::new(Config::default(), Store::memory());
    let nonce = ctx.ledger.begin().await.unwrap();

    let mut coordinator = CallbackCoordinator::new(&ctx);
    let err = coordinator
        .complete(params(Some("code"), Some(&nonce), None), REDIRECT_URI)
        .await
        .unwrap_err();

    assert_eq!(coordinator.state(), HandshakeState::Failed);
    assert!(matches!(err, RelayError::Configuration(_)));
}

#[tokio::test]
async fn test_coordinator_does_not_retry_rejected_exchange() {
    let spotify = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/token"))
        .respond_with(ResponseTemplate::new(401))
        .expect(1)
        .mount(&spotify)
        .await;
    let ctx = create_test_context(format!("{}/api/token", spotify.uri()));
    let nonce = ctx.ledger.begin().await.unwrap();

    let mut coordinator = CallbackCoordinator::new(&ctx);
    let err = coordinator
        .complete(params(Some("code"), Some(&nonce), None), REDIRECT_URI)
        .await
        .unwrap_err();

    assert_eq!(coordinator.state(), HandshakeState::Failed);
    assert_eq!(err.to_string(), "Token exchange failed: Unauthorized");
    assert!(ctx.vault.fetch().await.unwrap().is_none());
}
