//! Add command - put a product in the cart

use crate::audit::AuditLog;
use crate::cart::{CartChange, CartProvider, Product};
use crate::cli::args::AddArgs;
use crate::error::GomarketResult;
use crate::ui::{self, UiContext};
use tracing::info;

/// Execute the add command
pub async fn execute(
    args: AddArgs,
    provider: &CartProvider,
    audit: &AuditLog,
) -> GomarketResult<()> {
    let cart = provider.use_cart()?;
    let ctx = UiContext::detect();

    let change = cart
        .add_to_cart(Product {
            id: args.id,
            title: args.title,
            image_url: args.image_url,
            price: args.price,
        })
        .await;
    audit.record("cart.add", &change).await;

    match &change {
        CartChange::Added(item) => {
            info!("Added {} to cart", item.id);
            ui::step_ok_detail(&ctx, &format!("Added {}", item.title), &item.id);
        }
        CartChange::Updated(item) => {
            info!("Raised {} to {}", item.id, item.quantity);
            ui::step_ok_detail(
                &ctx,
                &format!("{} already in cart", item.title),
                &format!("quantity {}", item.quantity),
            );
        }
        CartChange::Removed(_) | CartChange::Unchanged => {}
    }

    Ok(())
}
