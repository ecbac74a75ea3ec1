//! SKU command.

use anyhow::Result;
use catalog_core::prelude::generate_sku;

use super::SkuArgs;
use crate::context::Context;

/// Run the sku command.
pub fn run(args: SkuArgs, ctx: &Context) -> Result<()> {
    let sku = generate_sku(&args.brand, &args.collection, &args.category, &args.product_name);

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "sku": sku }));
    } else {
        ctx.output.success(&sku);
    }

    Ok(())
}
