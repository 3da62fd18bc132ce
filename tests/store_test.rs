//! Integration tests for bulk import through the store seam.

use lipi::error::{Error, Result};
use lipi::{BulkImporter, DedupKey, Lipi, MemoryStore, VoterRecord, VoterStore};

/// Store that fails every n-th chunk, for failure-isolation tests.
struct FlakyStore {
    inner: MemoryStore,
    chunk_calls: usize,
    fail_on: usize,
}

impl FlakyStore {
    fn new(fail_on: usize) -> Self {
        Self {
            inner: MemoryStore::new(),
            chunk_calls: 0,
            fail_on,
        }
    }
}

impl VoterStore for FlakyStore {
    fn exists(&self, key: &str) -> Result<bool> {
        self.inner.exists(key)
    }

    fn insert_chunk(&mut self, records: &[VoterRecord]) -> Result<usize> {
        self.chunk_calls += 1;
        if self.chunk_calls == self.fail_on {
            return Err(Error::Store("transient write failure".to_string()));
        }
        self.inner.insert_chunk(records)
    }
}

fn record(name: &str, voter_number: &str) -> VoterRecord {
    VoterRecord {
        name: name.to_string(),
        voter_number: voter_number.to_string(),
        ..Default::default()
    }
}

#[test]
fn failed_chunk_does_not_abort_later_chunks() {
    let mut store = FlakyStore::new(2);
    let records: Vec<VoterRecord> =
        (0..9).map(|i| record(&format!("V{i}"), &i.to_string())).collect();

    let report = BulkImporter::new().with_chunk_size(3).run(&mut store, &records);

    assert_eq!(report.inserted, 6);
    assert_eq!(report.failed, 3);
    assert_eq!(report.failure.as_deref(), Some("store error: transient write failure"));
    assert!(!report.is_complete());
    assert_eq!(store.inner.len(), 6);
}

#[test]
fn retrying_after_failure_skips_what_already_landed() {
    let mut store = FlakyStore::new(1);
    let records = vec![record("A", "1"), record("B", "2")];

    let first = BulkImporter::new().run(&mut store, &records);
    assert_eq!(first.inserted, 0);

    // Same batch again; the store now accepts writes.
    let second = BulkImporter::new().run(&mut store, &records);
    assert_eq!(second.inserted, 2);

    let third = BulkImporter::new().run(&mut store, &records);
    assert_eq!(third.inserted, 0);
    assert_eq!(third.skipped, 2);
}

#[test]
fn end_to_end_paste_to_store() {
    let mut store = MemoryStore::new();
    let pasted = "\
১
নাম: Ïমাঃ রহিম
পিতা: করিম
ভোটার নং: ১১১

২
নাম: Ïমাছাঃ সালমা
মাতা: আমেনা
ভোটার নং: ২২২
";

    let report = Lipi::new()
        .with_dedup_key(DedupKey::VoterNumber)
        .import(pasted, &mut store);

    assert_eq!(report.inserted, 2);
    assert!(report.is_complete());

    let stored = store.records();
    assert_eq!(stored[0].name, "মোঃ রহিম");
    assert_eq!(stored[0].voter_number, "111");
    assert_eq!(stored[1].name, "মোছাঃ সালমা");

    // Pasting the same list twice is idempotent by voter number.
    let again = Lipi::new()
        .with_dedup_key(DedupKey::VoterNumber)
        .import(pasted, &mut store);
    assert_eq!(again.inserted, 0);
    assert_eq!(again.skipped, 2);
}
