//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! Each handler validates its typed arguments, calls the core managers, and
//! formats output. Handlers never compute layout paths or touch the store
//! directly.

mod init;
mod list;
mod meta;
mod store;
mod tag;

pub use init::init;
pub use list::list;
pub use meta::meta;
pub use store::store;
pub use tag::tag;

use anyhow::Result;

use crate::cli::{Command, Context};

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Init => init::init(ctx),
        Command::Store {
            revision,
            tags,
            meta,
            exclude,
            copy,
            namespace,
            artifact,
            source_dir,
        } => store::store(
            ctx, &namespace, &artifact, revision, &source_dir, &tags, &meta, &exclude, copy,
        ),
        Command::Meta {
            hidden,
            revision,
            namespace,
            artifact,
            edits,
        } => meta::meta(ctx, &namespace, &artifact, revision, &edits, hidden),
        Command::Tag {
            revision,
            from_tag,
            namespace,
            artifact,
            tag,
        } => tag::tag(
            ctx,
            &namespace,
            &artifact,
            &tag,
            revision,
            from_tag.as_deref(),
        ),
        Command::List {
            namespaces,
            artifacts,
            revisions,
            tags,
            args,
        } => list::list(ctx, namespaces, artifacts, revisions, tags, &args),
    }
}
