//! Record sources: where the collection comes from.
//!
//! The engine never fetches. A [`RecordSource`] hands over the whole
//! collection (optionally capped) and the featured sample; paging always
//! happens client-side on what it returns.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::FetchError;
use crate::record::Record;
use crate::traits::Searchable;

/// Hints passed to [`RecordSource::fetch_records`]. No paging parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FetchOptions {
    /// Upstream ordering hint, e.g. `"featured"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    /// Cap on the number of records returned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

impl FetchOptions {
    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// A record list as served: `{ "records": [...] }` or a bare array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RecordPayload<T> {
    Envelope { records: Vec<T> },
    Bare(Vec<T>),
}

impl<T> RecordPayload<T> {
    pub fn into_records(self) -> Vec<T> {
        match self {
            RecordPayload::Envelope { records } | RecordPayload::Bare(records) => records,
        }
    }
}

/// Decodes a JSON record payload.
///
/// Only a payload that is not a record list is an error. Entries that do
/// not decode are logged and skipped.
pub fn decode_records<T: DeserializeOwned>(bytes: &[u8]) -> Result<Vec<T>, FetchError> {
    let payload: RecordPayload<serde_json::Value> = serde_json::from_slice(bytes)?;
    let entries = payload.into_records();
    let total = entries.len();

    let records: Vec<T> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(index, entry)| match serde_json::from_value(entry) {
            Ok(record) => Some(record),
            Err(err) => {
                tracing::warn!(index, error = %err, "skipping malformed record");
                None
            }
        })
        .collect();

    if records.len() < total {
        tracing::debug!(kept = records.len(), total, "decoded record payload");
    }
    Ok(records)
}

/// The two fetch collaborators a listing page depends on.
#[async_trait]
pub trait RecordSource: Send + Sync {
    type Record: Send + 'static;

    /// Fetches the full collection, or at most `options.limit` records.
    async fn fetch_records(&self, options: &FetchOptions)
        -> Result<Vec<Self::Record>, FetchError>;

    /// Fetches a bounded sample of featured candidates.
    async fn fetch_featured(&self, limit: usize) -> Result<Vec<Self::Record>, FetchError>;
}

/// Reads records from a JSON file on every fetch.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileSource { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Vec<Record>, FetchError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| FetchError::Io {
                path: self.path.clone(),
                source,
            })?;
        decode_records(&bytes)
    }
}

#[async_trait]
impl RecordSource for JsonFileSource {
    type Record = Record;

    async fn fetch_records(&self, options: &FetchOptions) -> Result<Vec<Record>, FetchError> {
        let mut records = self.load().await?;
        if let Some(sort) = &options.sort {
            // file order is the upstream order
            tracing::debug!(sort = %sort, "file source ignores upstream sort hint");
        }
        if let Some(limit) = options.limit {
            records.truncate(limit);
        }
        tracing::debug!(path = %self.path.display(), count = records.len(), "loaded records");
        Ok(records)
    }

    async fn fetch_featured(&self, limit: usize) -> Result<Vec<Record>, FetchError> {
        let records = self.load().await?;
        Ok(records
            .into_iter()
            .filter(|record| record.is_featured)
            .take(limit)
            .collect())
    }
}

/// Serves clones of an in-memory collection.
#[derive(Debug, Clone, Default)]
pub struct MemorySource<T> {
    records: Vec<T>,
}

impl<T> MemorySource<T> {
    pub fn new(records: Vec<T>) -> Self {
        MemorySource { records }
    }
}

#[async_trait]
impl<T> RecordSource for MemorySource<T>
where
    T: Searchable + Clone + Send + Sync + 'static,
{
    type Record = T;

    async fn fetch_records(&self, options: &FetchOptions) -> Result<Vec<T>, FetchError> {
        let limit = options.limit.unwrap_or(self.records.len());
        Ok(self.records.iter().take(limit).cloned().collect())
    }

    async fn fetch_featured(&self, limit: usize) -> Result<Vec<T>, FetchError> {
        Ok(self
            .records
            .iter()
            .filter(|item| item.is_featured())
            .take(limit)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_envelope_and_bare() {
        let envelope = br#"{"records": [{"id": 1}, {"id": "b"}]}"#;
        let bare = br#"[{"id": 1}]"#;

        let records: Vec<Record> = decode_records(envelope).unwrap();
        assert_eq!(records.len(), 2);
        let records: Vec<Record> = decode_records(bare).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn decode_skips_entries_that_are_not_records() {
        let bare = br#"[{"id": 1}, 5, "x", null, {"id": 2}]"#;
        let records: Vec<Record> = decode_records(bare).unwrap();
        let ids: Vec<String> = records.iter().map(|r| r.id.to_string()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn decode_garbage_is_an_error() {
        let result: Result<Vec<Record>, FetchError> = decode_records(b"<html>");
        assert!(matches!(result, Err(FetchError::Decode(_))));
    }

    #[test]
    fn fetch_options_builders() {
        let options = FetchOptions::default().with_sort("featured").with_limit(20);
        assert_eq!(options.sort.as_deref(), Some("featured"));
        assert_eq!(options.limit, Some(20));
    }

    #[tokio::test]
    async fn memory_source_limits() {
        let source = MemorySource::new(vec![
            Record::new(1).featured().with_name("A", "B"),
            Record::new(2),
            Record::new(3).featured(),
        ]);

        let all = source.fetch_records(&FetchOptions::default()).await.unwrap();
        assert_eq!(all.len(), 3);

        let capped = source
            .fetch_records(&FetchOptions::default().with_limit(2))
            .await
            .unwrap();
        assert_eq!(capped.len(), 2);

        let featured = source.fetch_featured(1).await.unwrap();
        assert_eq!(featured.len(), 1);
        assert_eq!(featured[0].id, crate::RecordId::Number(1));
    }

    #[tokio::test]
    async fn missing_file_is_an_io_error() {
        let source = JsonFileSource::new("/definitely/not/here.json");
        let result = source.fetch_records(&FetchOptions::default()).await;
        assert!(matches!(result, Err(FetchError::Io { .. })));
    }
}
