//! List command - show the cart

use crate::cart::{CartItem, CartProvider};
use crate::cli::args::{ListArgs, OutputFormat};
use crate::error::GomarketResult;
use crate::ui::{self, UiContext};
use console::style;

/// Execute the list command
pub async fn execute(args: ListArgs, provider: &CartProvider) -> GomarketResult<()> {
    let products = provider.use_cart()?.products().await;

    match args.format {
        OutputFormat::Json => print_json(&products)?,
        OutputFormat::Plain => print_plain(&products),
        OutputFormat::Table if products.is_empty() => {
            ui::step_info(&UiContext::detect(), "Cart is empty");
        }
        OutputFormat::Table => print_table(&products),
    }

    Ok(())
}

fn print_table(products: &[CartItem]) {
    let ctx = UiContext::detect();
    ui::intro(&ctx, "Cart");

    println!(
        "{:<16} {:<32} {:>10} {:>5}",
        style("ID").bold(),
        style("TITLE").bold(),
        style("PRICE").bold(),
        style("QTY").bold()
    );
    println!("{}", "-".repeat(66));

    for item in products {
        println!(
            "{:<16} {:<32} {:>10.2} {:>5}",
            item.id, item.title, item.price, item.quantity
        );
    }

    println!();
    println!("{} line(s)", products.len());
}

fn print_json(products: &[CartItem]) -> GomarketResult<()> {
    println!("{}", serde_json::to_string_pretty(products)?);
    Ok(())
}

fn print_plain(products: &[CartItem]) {
    for item in products {
        println!("{}\t{}", item.id, item.quantity);
    }
}
