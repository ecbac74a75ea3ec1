//! Keywords command.

use anyhow::{anyhow, Result};
use catalog_core::prelude::generate_search_keywords;
use serde::Serialize;

use super::KeywordsArgs;
use crate::context::Context;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct KeywordReport<'a> {
    id: &'a str,
    sku: &'a str,
    search_keywords: Vec<String>,
}

/// Run the keywords command.
pub fn run(args: KeywordsArgs, ctx: &Context) -> Result<()> {
    let products = ctx.load_products(&args.products)?;

    let selected: Vec<_> = match &args.id {
        Some(id) => {
            let product = products
                .iter()
                .find(|p| p.id.as_str() == id.as_str())
                .ok_or_else(|| anyhow!("Product not found: {}", id))?;
            vec![product]
        }
        None => products.iter().collect(),
    };

    let reports: Vec<KeywordReport<'_>> = selected
        .into_iter()
        .map(|product| {
            let search_keywords = generate_search_keywords(product);
            if search_keywords != product.search_keywords {
                ctx.output
                    .warn(&format!("Stored keywords for {} are out of date", product.id));
            }
            KeywordReport {
                id: product.id.as_str(),
                sku: &product.sku,
                search_keywords,
            }
        })
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&reports);
        return Ok(());
    }

    ctx.output.header("Search keywords");
    for report in &reports {
        ctx.output.kv(report.id, &format!("{}  {}", report.sku, report.search_keywords.join(" ")));
    }

    Ok(())
}
