//! core
//!
//! Core domain types and operations for the artifact store.
//!
//! # Modules
//!
//! - [`types`] - Strong types: Namespace, ArtifactName, TagName, StorageMode
//! - [`paths`] - Centralized path routing for the store layout
//! - [`errors`] - The StoreError taxonomy
//! - [`root`] - Store root marker initialization and validation
//! - [`revision`] - Revision creation orchestration
//! - [`metadata`] - Per-revision JSON metadata
//! - [`tags`] - Mutable pointers to revision archives
//! - [`archive`] - `.tar.xz` payload construction
//! - [`exclude`] - Pure exclude-pattern evaluation
//! - [`listing`] - Read-only layout enumeration
//!
//! # Design Principles
//!
//! - Strong typing prevents invalid names at construction time
//! - All store-side I/O flows through the [`crate::storage`] doorway
//! - Layout paths are computed in exactly one place

pub mod archive;
pub mod errors;
pub mod exclude;
pub mod listing;
pub mod metadata;
pub mod paths;
pub mod revision;
pub mod root;
pub mod tags;
pub mod types;
