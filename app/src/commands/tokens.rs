use merlin_api::dto::{SwapViewResponse, TokenDto, TokenSelectorResponse};
use merlin_api::views;
use merlin_api::AppState;
use swap::SwapSide;

use super::swap::swap_view;

fn parse_side(side: &str) -> Result<SwapSide, String> {
    side.parse().map_err(|e: merlin_core::SwapError| e.to_string())
}

/// Case-insensitive token search over symbol and name
pub async fn search_tokens(state: &AppState, query: String) -> Result<Vec<TokenDto>, String> {
    let swap = state.swap().await;
    Ok(swap
        .catalog()
        .search(&query)
        .into_iter()
        .map(TokenDto::from)
        .collect())
}

/// Selector rows for `side` ("from" or "to")
pub async fn open_token_selector(
    state: &AppState,
    side: String,
    query: String,
) -> Result<TokenSelectorResponse, String> {
    let side = parse_side(&side)?;
    let swap = state.swap().await;
    Ok(views::token_selector(&swap, side, &query))
}

/// Put a catalog token on `side`, swapping sides if it is already on the other
pub async fn select_token(
    state: &AppState,
    side: String,
    token_id: String,
) -> Result<SwapViewResponse, String> {
    let side = parse_side(&side)?;
    state
        .swap_mut()
        .await
        .select_token_by_id(side, &token_id)
        .map_err(|e| e.to_string())?;
    Ok(swap_view(state).await)
}
