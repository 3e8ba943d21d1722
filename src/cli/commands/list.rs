//! list command - enumerate namespaces, artifacts, revisions, or tags.

use anyhow::Result;

use crate::cli::Context;
use crate::core::errors::StoreError;
use crate::core::listing::ListingEngine;
use crate::core::types::{ArtifactName, Namespace};
use crate::storage::LocalFs;

/// Run one enumeration query; results print one per line, sorted.
///
/// Exactly one selector flag is set (clap enforces the group); the
/// positional arity each selector needs is checked here and reported as a
/// usage error.
pub fn list(
    ctx: &Context,
    namespaces: bool,
    artifacts: bool,
    revisions: bool,
    tags: bool,
    args: &[String],
) -> Result<()> {
    let io = LocalFs::new();
    let paths = ctx.paths();
    let engine = ListingEngine::new(&io, &paths);

    let lines: Vec<String> = if namespaces {
        expect_args(args, 0, "-n takes no further arguments")?;
        engine.namespaces()?
    } else if artifacts {
        expect_args(args, 1, "-a takes NAMESPACE")?;
        engine.artifacts(&Namespace::new(args[0].as_str())?)?
    } else if revisions {
        expect_args(args, 2, "-r takes NAMESPACE ARTIFACT")?;
        engine
            .revisions(
                &Namespace::new(args[0].as_str())?,
                &ArtifactName::new(args[1].as_str())?,
            )?
            .iter()
            .map(u64::to_string)
            .collect()
    } else {
        debug_assert!(tags);
        expect_args(args, 2, "-t takes NAMESPACE ARTIFACT")?;
        engine.tags(
            &Namespace::new(args[0].as_str())?,
            &ArtifactName::new(args[1].as_str())?,
        )?
    };

    ctx.progress(format!("{} result(s)", lines.len()));
    for line in lines {
        println!("{}", line);
    }
    Ok(())
}

fn expect_args(args: &[String], count: usize, message: &str) -> Result<(), StoreError> {
    if args.len() == count {
        Ok(())
    } else {
        Err(StoreError::Usage(message.to_string()))
    }
}
