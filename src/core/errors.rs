//! core::errors
//!
//! The error taxonomy for store operations.
//!
//! Every failure a core operation can report is a [`StoreError`] variant, so
//! the binary can map each kind to a distinct exit code. Usage-level errors
//! (contradictory option selections) are detected before any side effect;
//! all other kinds are terminal for the single operation that raised them.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from artifact store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Contradictory or missing selection among mutually exclusive options.
    #[error("usage error: {0}")]
    Usage(String),

    /// The store root does not exist or is missing its marker file.
    #[error("'{}' is not a valid artifact store root", root.display())]
    StoreRootInvalid { root: PathBuf },

    /// The revision is already present for this artifact.
    #[error("revision {revision} of '{artifact}' already exists in '{namespace}'")]
    ArtifactExists {
        namespace: String,
        artifact: String,
        revision: u64,
    },

    /// The archive source path is missing or unreadable.
    #[error("source directory '{}' does not exist or is not readable", path.display())]
    SourceInvalid { path: PathBuf },

    /// No artifacts exist under the given namespace.
    #[error("namespace '{0}' not found")]
    NamespaceNotFound(String),

    /// The artifact has no revisions under the given namespace.
    #[error("artifact '{artifact}' not found in '{namespace}'")]
    ArtifactNotFound {
        namespace: String,
        artifact: String,
    },

    /// No such revision of the artifact.
    #[error("revision {revision} of '{artifact}' not found in '{namespace}'")]
    RevisionNotFound {
        namespace: String,
        artifact: String,
        revision: u64,
    },

    /// No such tag on the artifact.
    #[error("tag '{tag}' of '{artifact}' not found in '{namespace}'")]
    TagNotFound {
        namespace: String,
        artifact: String,
        tag: String,
    },

    /// A metadata edit token is not of the form `key=value` or `key=`.
    #[error("invalid metadata token '{0}': expected 'key=value' or 'key='")]
    InvalidMetaToken(String),

    /// A requested storage mode is not implemented.
    #[error("{0}")]
    Unsupported(String),

    /// Metadata JSON could not be parsed or serialized.
    #[error("invalid metadata file '{}': {message}", path.display())]
    MetadataCorrupt { path: PathBuf, message: String },

    /// An underlying filesystem operation failed.
    #[error("i/o error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// Wrap an I/O error with the path that triggered it.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }

    /// The process exit code for this error kind.
    ///
    /// Usage errors exit 2 (matching clap's own parse failures); every
    /// runtime failure exits 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            StoreError::Usage(_) => 2,
            _ => 1,
        }
    }
}
