use crate::{
    config::Config,
    context::AppContext,
    error, info,
    management::Store,
    server::start_api_server,
    warning,
};

/// Runs the relay until the process is stopped.
///
/// With `memory` the ledger and vault live only in this process, so a restart
/// requires a fresh authorization. With `open` the setup page is launched in
/// the default browser once the listener is about to start.
pub async fn serve(mut config: Config, addr: Option<String>, memory: bool, open: bool) {
    if let Some(addr) = addr {
        config.server_addr = addr;
    }

    if !config.is_configured() {
        warning!(
            "SPOTIFY_API_AUTH_CLIENT_ID or SPOTIFY_API_AUTH_CLIENT_SECRET is not set; /setup will answer 500."
        );
    }

    let store = if memory {
        Store::memory()
    } else {
        Store::file(config.store_path.clone())
    };
    info!("Using store: {}", store.describe());

    if open {
        let setup_url = match &config.public_url {
            Some(url) => format!("{}/setup", url.trim_end_matches('/')),
            None => format!("http://{}/setup", config.server_addr),
        };
        if webbrowser::open(&setup_url).is_err() {
            warning!(
                "Failed to open browser. Please navigate to the following URL manually:\n{}",
                setup_url
            );
        }
    }

    if let Err(e) = start_api_server(AppContext::new(config, store)).await {
        error!("Server stopped: {}", e);
    }
}
