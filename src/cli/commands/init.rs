//! init command - initialize the store root.

use anyhow::Result;

use crate::cli::Context;
use crate::core::root::RootManager;
use crate::storage::LocalFs;

/// Initialize the store root; safe to re-run on a valid root.
pub fn init(ctx: &Context) -> Result<()> {
    let io = LocalFs::new();
    let paths = ctx.paths();
    RootManager::new(&io, &paths).initialize()?;
    ctx.progress(format!("initialized artifact store at {}", ctx.root.display()));
    Ok(())
}
