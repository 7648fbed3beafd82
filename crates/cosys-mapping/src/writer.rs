//! Write-through hook for persisting element transformations.
//!
//! The dataset does not know how transformations are stored on disk. A backed
//! dataset owns a [`TransformationWriter`] and hands it the full registry of an
//! element after every write-through mutation.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::element::ElementKind;
use crate::error::Result;
use crate::registry::TransformationMap;

/// Whether a dataset mutation is also pushed to the backing store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Mutate the in-memory registry only.
    #[default]
    InMemory,
    /// Mutate in memory, then hand the element's registry to the writer.
    WriteThrough,
}

/// One persisted registry snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct WriteRecord {
    pub kind: ElementKind,
    pub name: String,
    pub transformations: TransformationMap,
}

/// Persistence hook installed on a backed dataset.
pub trait TransformationWriter: Send + Sync {
    /// Persist the complete transformation map of one element.
    ///
    /// Failures should be reported as [`MappingError::Persistence`](crate::MappingError::Persistence).
    fn write(&self, record: &WriteRecord) -> Result<()>;
}

/// Writer that only logs what would be stored.
#[derive(Debug, Clone, Default)]
pub struct LoggingWriter;

impl TransformationWriter for LoggingWriter {
    fn write(&self, record: &WriteRecord) -> Result<()> {
        tracing::info!(
            "Persisting {} transformations for {}['{}']",
            record.transformations.len(),
            record.kind,
            record.name
        );
        for cs in record.transformations.keys() {
            tracing::debug!("  -> '{}'", cs);
        }
        Ok(())
    }
}

/// Writer that records every write; clones share the same history.
#[derive(Debug, Clone, Default)]
pub struct HistoryWriter {
    history: Arc<Mutex<Vec<WriteRecord>>>,
}

impl HistoryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All writes so far, oldest first.
    pub fn history(&self) -> Vec<WriteRecord> {
        self.lock().clone()
    }

    /// Most recent write, if any.
    pub fn last(&self) -> Option<WriteRecord> {
        self.lock().last().cloned()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> MutexGuard<'_, Vec<WriteRecord>> {
        // A poisoned lock still holds every record pushed before the panic.
        self.history.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl TransformationWriter for HistoryWriter {
    fn write(&self, record: &WriteRecord) -> Result<()> {
        self.lock().push(record.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosys_core::Transformation;

    fn record(name: &str) -> WriteRecord {
        let mut transformations = TransformationMap::new();
        transformations.insert("global".to_string(), Transformation::identity());
        WriteRecord {
            kind: ElementKind::Images,
            name: name.to_string(),
            transformations,
        }
    }

    #[test]
    fn test_history_writer_shares_history() {
        let writer = HistoryWriter::new();
        let handle = writer.clone();

        writer.write(&record("a")).unwrap();
        writer.write(&record("b")).unwrap();

        assert_eq!(handle.history().len(), 2);
        assert_eq!(handle.last().map(|r| r.name), Some("b".to_string()));

        handle.clear();
        assert!(writer.history().is_empty());
    }

    #[test]
    fn test_logging_writer_accepts_everything() {
        assert!(LoggingWriter.write(&record("a")).is_ok());
    }

    #[test]
    fn test_default_mode_is_in_memory() {
        assert_eq!(WriteMode::default(), WriteMode::InMemory);
    }
}
