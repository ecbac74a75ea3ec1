//! Price command.

use anyhow::{anyhow, Result};
use catalog_core::prelude::*;

use super::{resolve_now, PriceArgs};
use crate::context::Context;
use crate::output::status_badge;

/// Run the price command.
pub fn run(args: PriceArgs, ctx: &Context) -> Result<()> {
    let products = ctx.load_products(&args.products)?;
    let discounts: Vec<Discount> = match &args.discounts {
        Some(path) => ctx.read_json(path)?,
        None => Vec::new(),
    };

    let product = products
        .iter()
        .find(|p| p.id.as_str() == args.id)
        .ok_or_else(|| anyhow!("Product not found: {}", args.id))?;

    let now = resolve_now(args.at.as_deref())?;
    let breakdown = price_product(product, &discounts, &ctx.config.rates, now)?;

    if ctx.output.is_json() {
        ctx.output.json(&breakdown);
        return Ok(());
    }

    ctx.output.header(&format!("{} ({})", product.product_name, product.sku));
    ctx.output.kv("Brand", &product.brand);
    ctx.output.kv("Collection", &product.collection_name);
    ctx.output.kv("Status", &status_badge(product.status().label()));
    ctx.output.kv(
        "Stock",
        &format!("{} total, {} booked", product.total_qty, product.booked_qty),
    );
    ctx.output.kv("Base price", &format_idr(breakdown.base_idr));
    if breakdown.has_discount() {
        ctx.output.kv("Discounts", &breakdown.discount_display);
        ctx.output.kv("You save", &format_idr(breakdown.savings()));
    }
    ctx.output.kv("Final price", &breakdown.display_final());

    Ok(())
}
