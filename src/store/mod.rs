//! Persistence collaborator seam.
//!
//! The core owns no durable state; callers hand extracted records to an
//! implementation of [`VoterStore`]. The [`BulkImporter`] wraps a store
//! with chunking (the hosted document store caps the size of one write
//! operation) and caller-keyed deduplication, reporting what happened
//! instead of failing the whole batch.

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::model::VoterRecord;

/// Default number of records per write chunk, under the hosted store's
/// per-operation ceiling of 500.
pub const DEFAULT_CHUNK_SIZE: usize = 400;

/// Which record field identifies a duplicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DedupKey {
    /// Deduplicate by the national voter ID.
    #[default]
    VoterNumber,
    /// Deduplicate by the phone-like identifier member documents key on.
    Phone,
}

impl DedupKey {
    /// The key value of a record, empty when the field is unset.
    pub fn of<'a>(&self, record: &'a VoterRecord) -> &'a str {
        match self {
            DedupKey::VoterNumber => &record.voter_number,
            DedupKey::Phone => &record.phone,
        }
    }
}

/// External record storage.
///
/// Implementations are expected to make `insert_chunk` best-effort
/// all-or-nothing per chunk; transaction boundaries beyond that are the
/// store's business, not the core's.
pub trait VoterStore {
    /// Check whether a record with the given dedup key already exists.
    fn exists(&self, key: &str) -> Result<bool>;

    /// Insert a chunk of records, returning how many were written.
    fn insert_chunk(&mut self, records: &[VoterRecord]) -> Result<usize>;
}

/// Outcome of a bulk import.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkReport {
    /// Records written to the store.
    pub inserted: usize,
    /// Records skipped as duplicates (in the store or within the batch).
    pub skipped: usize,
    /// Records lost to failed chunks or failed dedup probes.
    pub failed: usize,
    /// Reason string from the first failure, if any.
    pub failure: Option<String>,
}

impl BulkReport {
    /// Whether every non-duplicate record made it in.
    pub fn is_complete(&self) -> bool {
        self.failed == 0
    }
}

/// Chunked, deduplicating bulk insertion over a [`VoterStore`].
///
/// # Example
///
/// ```
/// use lipi::store::{BulkImporter, DedupKey, MemoryStore};
/// use lipi::VoterRecord;
///
/// let mut store = MemoryStore::new();
/// let records = vec![VoterRecord { name: "রহিম".into(), voter_number: "123".into(), ..Default::default() }];
/// let report = BulkImporter::new().with_dedup_key(DedupKey::VoterNumber).run(&mut store, &records);
/// assert_eq!(report.inserted, 1);
/// ```
#[derive(Debug, Clone)]
pub struct BulkImporter {
    chunk_size: usize,
    dedup: DedupKey,
}

impl BulkImporter {
    /// Create an importer with the default chunk size.
    pub fn new() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            dedup: DedupKey::default(),
        }
    }

    /// Set the records-per-chunk ceiling (minimum 1).
    pub fn with_chunk_size(mut self, size: usize) -> Self {
        self.chunk_size = size.max(1);
        self
    }

    /// Set the deduplication key.
    pub fn with_dedup_key(mut self, key: DedupKey) -> Self {
        self.dedup = key;
        self
    }

    /// Import records into the store.
    ///
    /// Duplicates (against the store, or repeated within the batch) are
    /// skipped. A failed chunk records its reason and the import moves on
    /// to later chunks; one bad chunk never aborts the rest.
    pub fn run<S: VoterStore>(&self, store: &mut S, records: &[VoterRecord]) -> BulkReport {
        let mut report = BulkReport::default();
        let mut seen: HashSet<String> = HashSet::new();
        let mut pending: Vec<VoterRecord> = Vec::new();

        for record in records {
            let key = self.dedup.of(record);
            if !key.is_empty() {
                if !seen.insert(key.to_string()) {
                    report.skipped += 1;
                    continue;
                }
                match store.exists(key) {
                    Ok(true) => {
                        report.skipped += 1;
                        continue;
                    }
                    Ok(false) => {}
                    Err(err) => {
                        report.failed += 1;
                        report.failure.get_or_insert(err.to_string());
                        continue;
                    }
                }
            }
            pending.push(record.clone());
        }

        for chunk in pending.chunks(self.chunk_size) {
            match store.insert_chunk(chunk) {
                Ok(written) => report.inserted += written,
                Err(err) => {
                    log::warn!("chunk of {} records failed: {err}", chunk.len());
                    report.failed += chunk.len();
                    report.failure.get_or_insert(err.to_string());
                }
            }
        }

        log::debug!(
            "bulk import: {} inserted, {} skipped, {} failed",
            report.inserted,
            report.skipped,
            report.failed
        );
        report
    }
}

impl Default for BulkImporter {
    fn default() -> Self {
        Self::new()
    }
}

/// In-memory store, for tests and dry-run previews.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Vec<VoterRecord>,
    keys: HashSet<String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records inserted so far.
    pub fn records(&self) -> &[VoterRecord] {
        &self.records
    }

    /// Number of records held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl VoterStore for MemoryStore {
    fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.keys.contains(key))
    }

    fn insert_chunk(&mut self, records: &[VoterRecord]) -> Result<usize> {
        for record in records {
            for key in [&record.voter_number, &record.phone] {
                if !key.is_empty() {
                    self.keys.insert(key.clone());
                }
            }
            self.records.push(record.clone());
        }
        Ok(records.len())
    }
}

/// A store wrapper that fails every write, for exercising failure paths.
#[doc(hidden)]
pub struct FailingStore(pub String);

impl VoterStore for FailingStore {
    fn exists(&self, _key: &str) -> Result<bool> {
        Ok(false)
    }

    fn insert_chunk(&mut self, _records: &[VoterRecord]) -> Result<usize> {
        Err(Error::Store(self.0.clone()))
    }
}
