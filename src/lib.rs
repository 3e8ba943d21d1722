//! Artifact Store - a local, filesystem-backed, revisioned artifact
//! repository.
//!
//! Namespaces contain named artifacts; each artifact holds immutable
//! numbered revisions (a compressed `.tar.xz` archive plus a JSON metadata
//! document); mutable named tags point at specific revisions.
//!
//! # Architecture
//!
//! The codebase follows a layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, resolves the store
//!   root once at the process boundary, delegates to core)
//! - [`core`] - Domain types, path routing, and the storage/versioning
//!   operations
//! - [`storage`] - Narrow store-side I/O capability with real and in-memory
//!   backends
//!
//! # Correctness Invariants
//!
//! 1. Revision numbers are unique per `(namespace, artifact)`; re-creating
//!    an existing revision fails before any write occurs
//! 2. Reserved metadata keys are written once at creation and never altered
//!    by user edits
//! 3. A tag, once created, always resolves to an existing revision; pointer
//!    replacement is an atomic swap
//! 4. Every operation validates the store root marker before touching the
//!    layout

pub mod cli;
pub mod core;
pub mod storage;
