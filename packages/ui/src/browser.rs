//! Thin wrappers over browser dialogs.
//!
//! Outside the browser `confirm` always agrees and `print_page` only logs.

/// Ask the user to confirm `message`. A dialog that cannot be shown counts
/// as a refusal.
pub fn confirm(message: &str) -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!("confirm({message}) auto-accepted");
        true
    }
}

/// Open the browser print dialog.
pub fn print_page() {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.print() {
                tracing::warn!("Print failed: {:?}", e);
            }
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tracing::debug!("print requested outside the browser");
    }
}
