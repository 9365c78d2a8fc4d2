//! Confirmation prompt with non-interactive fallback

use super::context::UiContext;
use crate::error::{GomarketError, GomarketResult};

/// Ask a yes/no question
///
/// Returns `true` under auto-yes and `default` when there is no terminal to ask.
pub async fn confirm(ctx: &UiContext, message: &str, default: bool) -> GomarketResult<bool> {
    if ctx.auto_yes() {
        return Ok(true);
    }

    if !ctx.is_interactive() {
        return Ok(default);
    }

    // cliclack blocks on stdin
    let message = message.to_string();
    let answer = tokio::task::spawn_blocking(move || {
        cliclack::confirm(&message).initial_value(default).interact()
    })
    .await
    .map_err(|e| GomarketError::Internal(format!("prompt task failed: {e}")))?;

    answer.map_err(|e| GomarketError::io("reading confirmation", e))
}
