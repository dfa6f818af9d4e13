use merlin_api::dto::WalletStatusResponse;
use merlin_api::views;
use merlin_api::AppState;

async fn wallet_status(state: &AppState) -> WalletStatusResponse {
    views::wallet_status(&*state.wallet().await)
}

/// Get wallet connection status
pub async fn get_wallet_status(state: &AppState) -> Result<WalletStatusResponse, String> {
    Ok(wallet_status(state).await)
}

/// Simulated connect; resolves once the fabricated address is assigned
pub async fn connect_wallet(state: &AppState) -> Result<WalletStatusResponse, String> {
    state.connect_wallet().await.map_err(|e| e.to_string())?;
    Ok(wallet_status(state).await)
}

/// Disconnect wallet
pub async fn disconnect_wallet(state: &AppState) -> Result<WalletStatusResponse, String> {
    state.disconnect_wallet().await.map_err(|e| e.to_string())?;
    Ok(wallet_status(state).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_state;
    use merlin_core::AppConfig;

    fn file_config(path: &std::path::Path) -> AppConfig {
        let mut config = AppConfig::default();
        config.storage.path = Some(path.to_path_buf());
        config
    }

    #[tokio::test(start_paused = true)]
    async fn test_connect_and_disconnect() {
        let state = build_state(AppConfig::default());
        let before = get_wallet_status(&state).await.unwrap();
        assert!(!before.is_connected);
        assert_eq!(before.status, "disconnected");

        let after = connect_wallet(&state).await.unwrap();
        assert!(after.is_connected);
        assert_eq!(after.status, "connected");
        assert_eq!(after.chain_id, Some(56));
        let address = after.address.unwrap();
        assert!(address.starts_with("0x") && address.len() == 42);
        assert_eq!(after.short_address.unwrap().len(), 13);

        let err = connect_wallet(&state).await.unwrap_err();
        assert_eq!(err, "Cannot connect while connected");

        let cleared = disconnect_wallet(&state).await.unwrap();
        assert!(!cleared.is_connected);
        assert_eq!(cleared.address, None);
        assert_eq!(cleared.chain_id, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_session_restored_from_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("merlin.json");

        let first = build_state(file_config(&path));
        let connected = connect_wallet(&first).await.unwrap();
        drop(first);

        let second = build_state(file_config(&path));
        let restored = get_wallet_status(&second).await.unwrap();
        assert_eq!(restored, connected);

        disconnect_wallet(&second).await.unwrap();
        let third = build_state(file_config(&path));
        assert!(!get_wallet_status(&third).await.unwrap().is_connected);
    }
}
