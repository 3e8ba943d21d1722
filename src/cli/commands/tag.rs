//! tag command - point a tag at a revision.

use anyhow::Result;

use crate::cli::Context;
use crate::core::tags::TagManager;
use crate::core::types::{ArtifactName, Namespace, TagName};
use crate::storage::LocalFs;

/// Create or repoint a tag, targeting a revision directly (`-r`) or another
/// tag's current target (`-t`).
pub fn tag(
    ctx: &Context,
    namespace: &str,
    artifact: &str,
    tag: &str,
    by_revision: Option<u64>,
    by_tag: Option<&str>,
) -> Result<()> {
    let namespace = Namespace::new(namespace)?;
    let artifact = ArtifactName::new(artifact)?;
    let tag = TagName::new(tag)?;
    let by_tag = by_tag.map(TagName::new).transpose()?;

    let io = LocalFs::new();
    let paths = ctx.paths();
    let manager = TagManager::new(&io, &paths);
    manager.assign(&namespace, &artifact, &tag, by_revision, by_tag.as_ref())?;

    let resolved = manager.resolve(&namespace, &artifact, &tag)?;
    ctx.progress(format!(
        "{}-{} -> {}",
        artifact,
        tag,
        resolved.archive_path.display()
    ));
    Ok(())
}
