//! store command - create a new revision of an artifact.

use std::path::Path;

use anyhow::{Context as _, Result};

use crate::cli::Context;
use crate::core::revision::RevisionWriter;
use crate::core::types::{ArtifactName, Namespace, StorageMode, TagName};
use crate::storage::LocalFs;

/// Store a revision from `source_dir`, optionally tagging it.
#[allow(clippy::too_many_arguments)]
pub fn store(
    ctx: &Context,
    namespace: &str,
    artifact: &str,
    revision: u64,
    source_dir: &Path,
    tags: &[String],
    meta: &[String],
    exclude: &[String],
    copy: bool,
) -> Result<()> {
    let namespace = Namespace::new(namespace)?;
    let artifact = ArtifactName::new(artifact)?;
    let tags = tags
        .iter()
        .map(|tag| TagName::new(tag.as_str()))
        .collect::<Result<Vec<_>, _>>()
        .context("invalid tag name")?;
    let mode = if copy {
        StorageMode::Copy
    } else {
        StorageMode::Archive
    };

    let io = LocalFs::new();
    let paths = ctx.paths();
    let stored = RevisionWriter::new(&io, &paths).store(
        &namespace, &artifact, revision, source_dir, &tags, meta, exclude, mode,
    )?;

    ctx.progress(format!(
        "stored {} member(s) in {}",
        stored.members.len(),
        stored.archive_path.display()
    ));
    for tag in &tags {
        ctx.progress(format!("tagged {}-{} as {}", artifact, revision, tag));
    }
    Ok(())
}
