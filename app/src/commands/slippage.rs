use merlin_api::dto::SlippagePanelResponse;
use merlin_api::views;
use merlin_api::AppState;
use swap::sanitize_numeric_input;

async fn slippage_panel(state: &AppState) -> SlippagePanelResponse {
    let swap = state.swap().await;
    let ui = state.ui().await;
    views::slippage_panel(&swap, &ui)
}

pub async fn get_slippage_panel(state: &AppState) -> Result<SlippagePanelResponse, String> {
    Ok(slippage_panel(state).await)
}

/// Edit of the custom field. The field keeps only numeric characters; a
/// rejected value is reported as the panel warning and the last committed
/// value stays in place.
pub async fn set_custom_slippage(
    state: &AppState,
    text: String,
) -> Result<SlippagePanelResponse, String> {
    let text = sanitize_numeric_input(&text);
    {
        let mut swap = state.swap_mut().await;
        let mut ui = state.ui_mut().await;
        ui.slippage_warning = swap.set_custom_slippage(&text).err().map(|e| e.to_string());
        ui.slippage_draft = text;
    }
    Ok(slippage_panel(state).await)
}

/// One of the preset buttons
pub async fn set_preset_slippage(
    state: &AppState,
    value: f64,
) -> Result<SlippagePanelResponse, String> {
    {
        let mut swap = state.swap_mut().await;
        swap.set_preset_slippage(value).map_err(|e| e.to_string())?;

        let mut ui = state.ui_mut().await;
        ui.slippage_draft = value.to_string();
        ui.slippage_warning = None;
    }
    Ok(slippage_panel(state).await)
}

/// The Auto button
pub async fn set_auto_slippage(state: &AppState) -> Result<SlippagePanelResponse, String> {
    {
        let mut swap = state.swap_mut().await;
        swap.set_auto_slippage();

        let mut ui = state.ui_mut().await;
        ui.slippage_draft = swap.slippage().to_string();
        ui.slippage_warning = None;
    }
    Ok(slippage_panel(state).await)
}
