use chrono::{Local, Utc};
use tabled::Table;

use crate::{
    config::Config,
    error,
    management::{Store, TokenVault},
    success,
    types::StatusTableRow,
    warning,
};

/// Prints what the relay would currently serve from the persisted store.
pub async fn status(config: Config) {
    let store = Store::file(config.store_path.clone());
    let vault = TokenVault::new(store.clone());

    let record = match vault.fetch().await {
        Ok(record) => record,
        Err(e) => error!("Failed to read store {}: {}", store.describe(), e),
    };
    let expires_at = vault.expires_at().await.ok().flatten();

    let mut rows = vec![
        StatusTableRow {
            item: "Client credentials".to_string(),
            value: if config.is_configured() {
                "configured".to_string()
            } else {
                "missing".to_string()
            },
        },
        StatusTableRow {
            item: "Store".to_string(),
            value: store.describe(),
        },
    ];

    match (&record, expires_at) {
        (Some(record), Some(expires_at)) => {
            let remaining = expires_at - Utc::now();
            rows.push(StatusTableRow {
                item: "Credential".to_string(),
                value: format!("{} token", record.token_type),
            });
            rows.push(StatusTableRow {
                item: "Scope".to_string(),
                value: record.scope.clone(),
            });
            rows.push(StatusTableRow {
                item: "Expires".to_string(),
                value: format!(
                    "{} (in {} min)",
                    expires_at.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S"),
                    remaining.num_minutes().max(0)
                ),
            });
        }
        _ => rows.push(StatusTableRow {
            item: "Credential".to_string(),
            value: "none".to_string(),
        }),
    }

    println!("{}", Table::new(rows));

    if record.is_some() {
        success!("Relay is authorized.");
    } else {
        warning!("No valid credential stored. Open /setup on the running relay to authorize.");
    }
}

/// Removes the stored credential; the relay answers 401 until re-authorized.
pub async fn logout(config: Config) {
    let vault = TokenVault::new(Store::file(config.store_path.clone()));
    match vault.clear().await {
        Ok(()) => success!("Stored credential removed."),
        Err(e) => error!("Failed to remove stored credential: {}", e),
    }
}
