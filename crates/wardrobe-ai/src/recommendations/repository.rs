use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{CatalogItem, ItemId};
use super::weather::WeatherSnapshot;

/// Supplies the catalog snapshot a request is scored against.
pub trait CatalogProvider: Send + Sync {
    fn items(&self) -> Result<Vec<CatalogItem>, CatalogError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog source unreadable: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("catalog row {row} is malformed: {message}")]
    Malformed { row: usize, message: String },
    /// For providers backed by a remote store; the bundled snapshot never returns it.
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}

/// Audit sink for recommendations served to identified users.
pub trait RecommendationRecorder: Send + Sync {
    fn record(&self, record: RecommendationRecord) -> Result<(), RecorderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RecorderError {
    #[error("record already exists")]
    Conflict,
    #[error("recorder unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecommendationId(pub u64);

/// Identity and display name, enough to reconstruct what was suggested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutfitEntry {
    pub id: ItemId,
    pub name: String,
}

/// Persisted request context and chosen outfit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRecord {
    pub id: RecommendationId,
    pub user: String,
    pub occasion: String,
    pub weather: WeatherSnapshot,
    pub outfit: Vec<OutfitEntry>,
    pub recorded_at: DateTime<Utc>,
}
