//! File-backed stores, one per record type.
//!
//! # Responsibility
//! - Persist each collection as a JSON array at a caller-supplied path.
//! - Expose create/display/modify/delete on top of full-file load and save.
//!
//! # Invariants
//! - Every operation re-reads the file; nothing is cached between calls.
//! - Mutations rewrite the whole collection, even when nothing matched.
//! - A missing file is an empty collection, not an error.
//! - No locking: concurrent writers to the same path race and the last
//!   full-file write wins.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod collection;
pub mod customer_store;
pub mod hotel_store;
pub mod reservation_store;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure while reading or writing a collection file.
#[derive(Debug)]
pub enum StoreError {
    /// The file exists but could not be read.
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The content is not valid JSON.
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// Valid JSON with the wrong shape, or a record with missing/unknown fields.
    Structural {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The records could not be encoded.
    Encode {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// The encoded collection could not be written.
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl StoreError {
    /// Stable code used in log lines.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Read { .. } => "collection_read_failed",
            Self::Malformed { .. } => "collection_malformed",
            Self::Structural { .. } => "collection_structural_mismatch",
            Self::Encode { .. } => "collection_encode_failed",
            Self::Write { .. } => "collection_write_failed",
        }
    }

}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "failed to read `{}`: {source}", path.display())
            }
            Self::Malformed { path, source } => {
                write!(f, "malformed JSON in `{}`: {source}", path.display())
            }
            Self::Structural { path, source } => {
                write!(f, "unexpected record shape in `{}`: {source}", path.display())
            }
            Self::Encode { path, source } => {
                write!(f, "failed to encode records for `{}`: {source}", path.display())
            }
            Self::Write { path, source } => {
                write!(f, "failed to write `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Read { source, .. } | Self::Write { source, .. } => Some(source),
            Self::Malformed { source, .. }
            | Self::Structural { source, .. }
            | Self::Encode { source, .. } => Some(source),
        }
    }
}
