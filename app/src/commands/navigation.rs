use merlin_api::dto::TabsResponse;
use merlin_api::views;
use merlin_api::{AppState, Tab};

pub async fn get_tabs(state: &AppState) -> Result<TabsResponse, String> {
    Ok(views::tabs(state.ui().await.active_tab))
}

/// Switch tab by label ("Swap", "TWAP", "Limit", "Chart")
pub async fn select_tab(state: &AppState, tab: String) -> Result<TabsResponse, String> {
    let tab: Tab = tab.parse().map_err(|e: merlin_core::SwapError| e.to_string())?;
    state.ui_mut().await.active_tab = tab;
    tracing::debug!(tab = %tab, "tab selected");
    Ok(views::tabs(tab))
}
