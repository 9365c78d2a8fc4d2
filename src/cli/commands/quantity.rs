//! Increment/decrement commands - adjust a product's quantity

use crate::audit::AuditLog;
use crate::cart::{CartChange, CartProvider};
use crate::cli::args::QuantityArgs;
use crate::error::GomarketResult;
use crate::ui::{self, UiContext};
use tracing::info;

/// Execute the increment command
pub async fn increment(
    args: QuantityArgs,
    provider: &CartProvider,
    audit: &AuditLog,
) -> GomarketResult<()> {
    let change = provider.use_cart()?.increment(&args.id).await;
    audit.record("cart.increment", &change).await;
    report(&args.id, &change);
    Ok(())
}

/// Execute the decrement command
pub async fn decrement(
    args: QuantityArgs,
    provider: &CartProvider,
    audit: &AuditLog,
) -> GomarketResult<()> {
    let change = provider.use_cart()?.decrement(&args.id).await;
    audit.record("cart.decrement", &change).await;
    report(&args.id, &change);
    Ok(())
}

fn report(id: &str, change: &CartChange) {
    let ctx = UiContext::detect();

    match change {
        CartChange::Updated(item) => {
            info!("Set {} quantity to {}", item.id, item.quantity);
            ui::step_ok_detail(
                &ctx,
                &item.title,
                &format!("quantity {}", item.quantity),
            );
        }
        CartChange::Removed(item) => {
            info!("Removed {} from cart", item.id);
            ui::step_ok(&ctx, &format!("Removed {} from cart", item.title));
        }
        CartChange::Unchanged => {
            ui::step_warn_hint(&ctx, &format!("Not in cart: {id}"), "Run: gomarket list");
        }
        CartChange::Added(_) => {}
    }
}
