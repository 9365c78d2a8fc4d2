//! Clear command - empty the cart

use crate::audit::AuditLog;
use crate::cart::CartProvider;
use crate::cli::args::ClearArgs;
use crate::error::GomarketResult;
use crate::ui::{self, UiContext};
use serde_json::json;
use tracing::info;

/// Execute the clear command
pub async fn execute(
    args: ClearArgs,
    provider: &CartProvider,
    audit: &AuditLog,
) -> GomarketResult<()> {
    let cart = provider.use_cart()?;
    let ctx = UiContext::detect().with_auto_yes(args.yes);

    let count = cart.products().await.len();
    if count == 0 {
        ui::step_info(&ctx, "Cart is already empty");
        return Ok(());
    }

    let prompt = format!("Remove {} line(s) from the cart?", count);
    if !ui::confirm(&ctx, &prompt, false).await? {
        ui::step_warn(&ctx, "Cart left unchanged (pass --yes to skip the prompt)");
        return Ok(());
    }

    let removed = cart.clear().await;
    audit.log("cart.clear", &json!({ "removed": removed })).await;

    info!("Cleared {} cart lines", removed);
    ui::outro_success(&ctx, &format!("Removed {} line(s)", removed));
    Ok(())
}
