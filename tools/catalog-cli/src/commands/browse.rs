//! Browse command.

use anyhow::{Context as _, Result};
use catalog_core::prelude::*;
use console::style;

use super::{listing_line, resolve_now, BrowseArgs};
use crate::context::Context;

/// Run the browse command.
pub fn run(args: BrowseArgs, ctx: &Context) -> Result<()> {
    let products = ctx.load_products(&args.products)?;
    let discounts: Vec<Discount> = match &args.discounts {
        Some(path) => ctx.read_json(path)?,
        None => Vec::new(),
    };

    let mut view = ctx.config.initial_view();
    if let Some(query) = args.query {
        view.query = query;
    }
    if let Some(sort) = &args.sort {
        view.sort = sort.parse::<SortOption>().context("Invalid --sort")?;
    }
    if let Some(id) = &args.view {
        view.view_mode = ViewMode::from_id(id);
    }

    let now = resolve_now(args.at.as_deref())?;
    ctx.output.debug(&format!(
        "Loaded {} products, {} discounts; pricing at {}",
        products.len(),
        discounts.len(),
        now
    ));

    let page = browse_priced(&products, &discounts, &ctx.config.rates, &view, now)?;

    if ctx.output.is_json() {
        ctx.output.json(&page);
        return Ok(());
    }

    ctx.output.header(&format!(
        "{} - {} of {} products",
        view.view_mode.display_name(),
        page.total_count,
        products.len()
    ));

    if page.total_count == 0 {
        ctx.output.info("No products match the query.");
        return Ok(());
    }

    for root in &page.roots {
        print_node(ctx, root);
    }

    Ok(())
}

fn print_node(ctx: &Context, node: &GroupNode<ListedProduct<'_>>) {
    ctx.output.line(
        node.level,
        &format!("{} ({})", style(&node.key).bold(), node.count),
    );

    match &node.content {
        GroupContent::Branch(children) => {
            for child in children {
                print_node(ctx, child);
            }
        }
        GroupContent::Leaf(items) => {
            for item in items {
                ctx.output.line(node.level + 1, &listing_line(item));
            }
        }
    }
}
