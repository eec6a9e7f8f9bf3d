//! Hit sinks.
//!
//! Recording a hit never fails from the evaluator's point of view; a sink
//! that cannot persist a hit logs the problem itself.

use std::io::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use sift_core::Hit;
use tracing::warn;

pub trait HitSink: Send + Sync {
    fn record_hit(&self, hit: &Hit);
}

/// Collects hits in memory, in the order they were recorded.
#[derive(Debug, Default)]
pub struct MemorySink {
    hits: Mutex<Vec<Hit>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hits(&self) -> Vec<Hit> {
        self.hits.lock().expect("hit sink lock poisoned").clone()
    }

    pub fn len(&self) -> usize {
        self.hits.lock().expect("hit sink lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_hits(self) -> Vec<Hit> {
        self.hits.into_inner().expect("hit sink lock poisoned")
    }
}

impl HitSink for MemorySink {
    fn record_hit(&self, hit: &Hit) {
        self.hits
            .lock()
            .expect("hit sink lock poisoned")
            .push(hit.clone());
    }
}

/// Writes one JSON object per hit, newline-delimited.
pub struct JsonLinesSink<W: Write + Send> {
    writer: Mutex<W>,
    written: AtomicU64,
    failed: AtomicU64,
}

impl<W: Write + Send> JsonLinesSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            written: AtomicU64::new(0),
            failed: AtomicU64::new(0),
        }
    }

    /// Number of hits successfully written.
    pub fn written(&self) -> u64 {
        self.written.load(Ordering::Relaxed)
    }

    /// Number of hits that could not be written.
    pub fn failed(&self) -> u64 {
        self.failed.load(Ordering::Relaxed)
    }

    pub fn flush(&self) -> std::io::Result<()> {
        self.writer.lock().expect("hit sink lock poisoned").flush()
    }

    pub fn into_inner(self) -> W {
        self.writer.into_inner().expect("hit sink lock poisoned")
    }
}

impl<W: Write + Send> HitSink for JsonLinesSink<W> {
    fn record_hit(&self, hit: &Hit) {
        let mut writer = self.writer.lock().expect("hit sink lock poisoned");
        let result = serde_json::to_writer(&mut *writer, hit)
            .map_err(std::io::Error::from)
            .and_then(|_| writer.write_all(b"\n"));
        match result {
            Ok(()) => {
                self.written.fetch_add(1, Ordering::Relaxed);
            }
            Err(e) => {
                self.failed.fetch_add(1, Ordering::Relaxed);
                warn!(
                    entry_id = hit.entry_id,
                    set = %hit.set_name,
                    error = %e,
                    "failed to write hit"
                );
            }
        }
    }
}
