//! Saved views listing.

use anyhow::Result;
use catalog_core::prelude::ViewMode;
use serde::Serialize;

use crate::context::Context;

#[derive(Serialize)]
struct ViewInfo {
    id: &'static str,
    name: &'static str,
    default: bool,
}

/// Run the views command.
pub fn run(ctx: &Context) -> Result<()> {
    let default_mode = ctx.config.defaults.view_mode;
    let views: Vec<ViewInfo> = ViewMode::ALL
        .into_iter()
        .map(|mode| ViewInfo {
            id: mode.id(),
            name: mode.display_name(),
            default: mode == default_mode,
        })
        .collect();

    if ctx.output.is_json() {
        ctx.output.json(&views);
        return Ok(());
    }

    ctx.output.header("Saved views");
    for view in &views {
        let marker = if view.default { " (default)" } else { "" };
        ctx.output.kv(view.id, &format!("{}{}", view.name, marker));
    }

    Ok(())
}
