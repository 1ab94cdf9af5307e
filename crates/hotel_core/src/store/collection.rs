//! JSON array collection file shared by all stores.
//!
//! # Responsibility
//! - Read a whole collection file into ordered records.
//! - Write a whole collection back with 4-space indentation.
//! - Provide the load → mutate → save helpers the stores are built from.
//!
//! # Invariants
//! - One bad record invalidates the whole load; records are never skipped
//!   individually.
//! - `load` never fails: read and decode errors are logged and yield an empty
//!   collection. `try_load` surfaces the same errors to the caller.

use super::{StoreError, StoreResult};
use crate::model::Record;
use log::{debug, error, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::error::Category;
use serde_json::ser::PrettyFormatter;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

const INDENT: &[u8] = b"    ";

/// Handle to one collection file: its path and a log tag, nothing cached.
#[derive(Debug, Clone)]
pub struct JsonCollection<T> {
    path: PathBuf,
    module: &'static str,
    _records: PhantomData<fn() -> T>,
}

impl<T> JsonCollection<T>
where
    T: Record + Serialize + DeserializeOwned,
{
    /// `module` tags the log lines emitted for this collection.
    pub fn new(path: impl Into<PathBuf>, module: &'static str) -> Self {
        Self {
            path: path.into(),
            module,
            _records: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the collection, returning read/decode failures to the caller.
    ///
    /// A missing file is an empty collection.
    pub fn try_load(&self) -> StoreResult<Vec<T>> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(
                    "event=collection_load module={} status=missing path={}",
                    self.module,
                    self.path.display()
                );
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let records: Vec<T> =
            serde_json::from_slice(&bytes).map_err(|source| decode_error(&self.path, source))?;
        debug!(
            "event=collection_load module={} status=ok records={}",
            self.module,
            records.len()
        );
        Ok(records)
    }

    /// Reads the collection, treating any failure as an empty collection.
    pub fn load(&self) -> Vec<T> {
        match self.try_load() {
            Ok(records) => records,
            Err(err) => {
                warn!(
                    "event=collection_load module={} status=recovered error_code={} error={}",
                    self.module,
                    err.code(),
                    err
                );
                Vec::new()
            }
        }
    }

    /// Overwrites the file with `records`.
    ///
    /// Failures are logged and returned; the previous file content is left in
    /// place when encoding fails.
    pub fn save(&self, records: &[T]) -> StoreResult<()> {
        let result = encode(records)
            .map_err(|source| StoreError::Encode {
                path: self.path.clone(),
                source,
            })
            .and_then(|bytes| {
                std::fs::write(&self.path, bytes).map_err(|source| StoreError::Write {
                    path: self.path.clone(),
                    source,
                })
            });

        match &result {
            Ok(()) => debug!(
                "event=collection_save module={} status=ok records={}",
                self.module,
                records.len()
            ),
            Err(err) => error!(
                "event=collection_save module={} status=error error_code={} error={}",
                self.module,
                err.code(),
                err
            ),
        }
        result
    }

    /// Returns the first record with `id`, if any.
    pub fn find(&self, id: T::Id) -> Option<T> {
        self.load().into_iter().find(|record| record.id() == id)
    }

    /// Appends `record` and rewrites the collection. Duplicate ids are kept.
    pub fn append(&self, record: T) -> StoreResult<T>
    where
        T: Clone,
    {
        let mut records = self.load();
        records.push(record.clone());
        self.save(&records)?;
        Ok(record)
    }

    /// Removes every record with `id` and rewrites the collection.
    ///
    /// Returns how many records were removed.
    pub fn remove_all(&self, id: T::Id) -> StoreResult<usize> {
        let mut records = self.load();
        let before = records.len();
        records.retain(|record| record.id() != id);
        self.save(&records)?;
        Ok(before - records.len())
    }

    /// Applies `update` to the first record with `id` and rewrites the
    /// collection, matched or not.
    ///
    /// Returns whether a record matched.
    pub fn update_first(&self, id: T::Id, update: impl FnOnce(&mut T)) -> StoreResult<bool> {
        let mut records = self.load();
        let matched = match records.iter_mut().find(|record| record.id() == id) {
            Some(record) => {
                update(record);
                true
            }
            None => false,
        };
        self.save(&records)?;
        Ok(matched)
    }
}

fn encode<T: Serialize>(records: &[T]) -> serde_json::Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(INDENT));
    records.serialize(&mut serializer)?;
    Ok(buffer)
}

fn decode_error(path: &Path, source: serde_json::Error) -> StoreError {
    let path = path.to_path_buf();
    match source.classify() {
        Category::Data => StoreError::Structural { path, source },
        Category::Syntax | Category::Eof | Category::Io => StoreError::Malformed { path, source },
    }
}
