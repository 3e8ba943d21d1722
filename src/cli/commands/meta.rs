//! meta command - show or edit a revision's metadata.

use anyhow::Result;

use crate::cli::Context;
use crate::core::metadata::MetadataManager;
use crate::core::types::{ArtifactName, Namespace};
use crate::storage::LocalFs;

/// Print a revision's metadata, applying edits first when given.
pub fn meta(
    ctx: &Context,
    namespace: &str,
    artifact: &str,
    revision: u64,
    edits: &[String],
    include_reserved: bool,
) -> Result<()> {
    let namespace = Namespace::new(namespace)?;
    let artifact = ArtifactName::new(artifact)?;

    let io = LocalFs::new();
    let paths = ctx.paths();
    let manager = MetadataManager::new(&io, &paths);

    let doc = if edits.is_empty() {
        manager.read(&namespace, &artifact, revision)?
    } else {
        ctx.progress(format!("applying {} edit(s)", edits.len()));
        manager.update(&namespace, &artifact, revision, edits)?
    };

    println!("{}", doc.render(include_reserved));
    Ok(())
}
