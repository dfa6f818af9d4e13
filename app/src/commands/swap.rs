use merlin_api::dto::{SubmitOutcome, SwapReceipt, SwapSubmitResponse, SwapViewResponse};
use merlin_api::views::{self, ENTER_AMOUNT_LABEL};
use merlin_api::AppState;

/// Acknowledgment shown for the mock swap
pub const SWAP_EXECUTED_MESSAGE: &str = "Swap executed! (Mock implementation)";

/// Acknowledgment shown when the button connected the wallet instead
pub const WALLET_CONNECTED_MESSAGE: &str = "Wallet connected";

pub(crate) async fn swap_view(state: &AppState) -> SwapViewResponse {
    let wallet = state.wallet_state().await;
    let swap = state.swap().await;
    views::swap_view(&swap, &wallet)
}

/// Current swap card
pub async fn get_swap_view(state: &AppState) -> Result<SwapViewResponse, String> {
    Ok(swap_view(state).await)
}

/// Source amount typed by the user
pub async fn set_source_amount(
    state: &AppState,
    amount: String,
) -> Result<SwapViewResponse, String> {
    state
        .swap_mut()
        .await
        .set_source_amount(&amount)
        .map_err(|e| e.to_string())?;
    Ok(swap_view(state).await)
}

/// Flip source and destination
pub async fn reverse_tokens(state: &AppState) -> Result<SwapViewResponse, String> {
    state.swap_mut().await.reverse();
    Ok(swap_view(state).await)
}

/// Main button: connects a disconnected wallet, otherwise acknowledges the
/// mock swap
pub async fn submit_swap(state: &AppState) -> Result<SwapSubmitResponse, String> {
    if !state.wallet_state().await.is_connected {
        state.connect_wallet().await.map_err(|e| e.to_string())?;
        return Ok(SwapSubmitResponse {
            outcome: SubmitOutcome::WalletConnected,
            message: WALLET_CONNECTED_MESSAGE.to_string(),
            receipt: None,
            wallet: views::wallet_status(&*state.wallet().await),
        });
    }

    let receipt = {
        let swap = state.swap().await;
        if !swap.is_ready() {
            return Err(ENTER_AMOUNT_LABEL.to_string());
        }

        SwapReceipt {
            from_token: swap.source().map(|t| t.symbol.clone()).unwrap_or_default(),
            to_token: swap.destination().map(|t| t.symbol.clone()).unwrap_or_default(),
            from_amount: swap.source_amount().to_string(),
            to_amount: swap.destination_amount().to_string(),
            slippage: swap.slippage(),
        }
    };

    tracing::info!(
        from_token = %receipt.from_token,
        to_token = %receipt.to_token,
        from_amount = %receipt.from_amount,
        to_amount = %receipt.to_amount,
        slippage = receipt.slippage,
        "Executing swap"
    );

    Ok(SwapSubmitResponse {
        outcome: SubmitOutcome::Executed,
        message: SWAP_EXECUTED_MESSAGE.to_string(),
        receipt: Some(receipt),
        wallet: views::wallet_status(&*state.wallet().await),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build_state;
    use crate::commands::select_token;
    use merlin_core::AppConfig;

    #[tokio::test]
    async fn test_amount_requires_source_token() {
        let state = build_state(AppConfig::default());
        let err = set_source_amount(&state, "1".into()).await.unwrap_err();
        assert!(err.contains("select a source token"), "{err}");
    }

    #[tokio::test]
    async fn test_amount_flow() {
        let state = build_state(AppConfig::default());
        select_token(&state, "from".into(), "bnb".into()).await.unwrap();
        select_token(&state, "to".into(), "cake".into()).await.unwrap();

        let view = set_source_amount(&state, "1.5x".into()).await.unwrap();
        assert_eq!(view.source.amount, "1.5");
        assert_eq!(view.destination.amount, "180.000000");
        assert_eq!(view.source.usd_value, "$450.00");

        let view = reverse_tokens(&state).await.unwrap();
        assert_eq!(view.source.token.unwrap().symbol, "CAKE");
        assert_eq!(view.source.amount, "180.000000");
        assert_eq!(view.destination.amount, "1.5");
    }

    #[tokio::test(start_paused = true)]
    async fn test_submit_connects_then_swaps() {
        let state = build_state(AppConfig::default());

        let first = submit_swap(&state).await.unwrap();
        assert_eq!(first.outcome, SubmitOutcome::WalletConnected);
        assert!(first.wallet.is_connected);
        assert_eq!(first.wallet.chain_id, Some(56));

        assert_eq!(submit_swap(&state).await.unwrap_err(), "Enter an amount");

        select_token(&state, "from".into(), "eth".into()).await.unwrap();
        select_token(&state, "to".into(), "usdt".into()).await.unwrap();
        set_source_amount(&state, "0.5".into()).await.unwrap();

        let done = submit_swap(&state).await.unwrap();
        assert_eq!(done.outcome, SubmitOutcome::Executed);
        assert_eq!(done.message, "Swap executed! (Mock implementation)");
        let receipt = done.receipt.unwrap();
        assert_eq!(receipt.from_token, "ETH");
        assert_eq!(receipt.to_amount, "1000.000000");
        assert_eq!(receipt.slippage, 0.5);
    }
}
