use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::assembler::{OutfitAssembler, OutfitSlot};
use super::domain::{CatalogItem, Item, RecommendationContext};
use super::repository::{
    CatalogError, CatalogProvider, OutfitEntry, RecommendationId, RecommendationRecord,
    RecommendationRecorder, RecorderError,
};
use super::scoring::{warmth_band, ScoreComponent, ScoreLabel};
use super::weather::{WeatherError, WeatherProvider, WeatherSnapshot};

/// Temperature as sent by clients: a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TemperatureInput {
    Number(f64),
    Text(String),
}

impl From<f64> for TemperatureInput {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRequest {
    #[serde(default)]
    pub temp_f: Option<TemperatureInput>,
    #[serde(default)]
    pub occasion: Option<String>,
    #[serde(default)]
    pub condition: Option<String>,
    /// Consulted only when `temp_f` is absent.
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub limit: Option<usize>,
    /// Identified callers get their recommendation recorded.
    #[serde(default)]
    pub user: Option<String>,
}

/// Catalog attributes plus the slot and score that earned the item its place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutfitItemView {
    #[serde(flatten)]
    pub item: CatalogItem,
    pub slot: OutfitSlot,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationResponse {
    pub occasion: String,
    pub temp_f: f64,
    pub condition: Option<String>,
    pub items: Vec<OutfitItemView>,
    pub saved_recommendation_id: Option<RecommendationId>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedItemView {
    #[serde(flatten)]
    pub item: CatalogItem,
    pub score: Option<f64>,
    pub label: ScoreLabel,
    pub components: Vec<ScoreComponent>,
}

/// Whole-catalog scoring for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankingResponse {
    pub occasion: String,
    pub temp_f: f64,
    pub condition: Option<String>,
    pub target_warmth: i32,
    pub candidates: usize,
    pub items: Vec<RankedItemView>,
}

/// Service composing the catalog, recorder, weather lookup and outfit assembler.
pub struct RecommendationService<C, R, W> {
    catalog: Arc<C>,
    recorder: Arc<R>,
    weather: Arc<W>,
    assembler: Arc<OutfitAssembler>,
    sequence: AtomicU64,
}

impl<C, R, W> RecommendationService<C, R, W>
where
    C: CatalogProvider + 'static,
    R: RecommendationRecorder + 'static,
    W: WeatherProvider + 'static,
{
    pub fn new(catalog: Arc<C>, recorder: Arc<R>, weather: Arc<W>, assembler: OutfitAssembler) -> Self {
        Self {
            catalog,
            recorder,
            weather,
            assembler: Arc::new(assembler),
            sequence: AtomicU64::new(1),
        }
    }

    pub fn assembler(&self) -> &OutfitAssembler {
        &self.assembler
    }

    /// Assemble an outfit for the request and record it when the caller is identified.
    pub fn recommend(
        &self,
        request: RecommendationRequest,
    ) -> Result<RecommendationResponse, RecommendationServiceError> {
        let weather = self.resolve_weather(&request)?;
        let context = RecommendationContext::from_tags(
            weather.temp_f,
            request.occasion.as_deref(),
            weather.condition.as_deref(),
        );
        let limit = request
            .limit
            .unwrap_or(self.assembler.policy().limit);

        let items = self.load_items()?;
        let outfit = self.assembler.assemble_with_limit(&items, &context, limit);

        let occasion = context.occasion.label().to_string();
        let condition = context.condition.as_ref().map(|c| c.label().to_string());

        let saved_recommendation_id = match request
            .user
            .as_deref()
            .map(str::trim)
            .filter(|user| !user.is_empty())
        {
            Some(user) => {
                let id = RecommendationId(self.sequence.fetch_add(1, Ordering::Relaxed));
                self.recorder.record(RecommendationRecord {
                    id,
                    user: user.to_string(),
                    occasion: occasion.clone(),
                    weather: WeatherSnapshot {
                        temp_f: context.temp_f,
                        condition: condition.clone(),
                    },
                    outfit: outfit
                        .items()
                        .map(|item| OutfitEntry {
                            id: item.id,
                            name: item.name.clone(),
                        })
                        .collect(),
                    recorded_at: Utc::now(),
                })?;
                Some(id)
            }
            None => None,
        };

        info!(
            occasion = %occasion,
            temp_f = context.temp_f,
            condition = condition.as_deref().unwrap_or("none"),
            catalog = items.len(),
            outfit = outfit.len(),
            recorded = saved_recommendation_id.is_some(),
            "recommendation served"
        );

        let views = outfit
            .picks()
            .iter()
            .map(|pick| OutfitItemView {
                item: CatalogItem::from(pick.item),
                slot: pick.slot,
                score: pick.score,
            })
            .collect();

        Ok(RecommendationResponse {
            occasion,
            temp_f: context.temp_f,
            condition,
            items: views,
            saved_recommendation_id,
        })
    }

    /// Score every catalog item without assembling an outfit.
    pub fn rank(
        &self,
        request: RecommendationRequest,
    ) -> Result<RankingResponse, RecommendationServiceError> {
        let weather = self.resolve_weather(&request)?;
        let context = RecommendationContext::from_tags(
            weather.temp_f,
            request.occasion.as_deref(),
            weather.condition.as_deref(),
        );

        let items = self.load_items()?;
        let ranked = self.assembler.scorer().rank(&items, &context);
        let candidates = ranked
            .iter()
            .filter(|entry| entry.score().is_some_and(|score| score > 0.0))
            .count();

        let views: Vec<RankedItemView> = ranked
            .into_iter()
            .take(request.limit.unwrap_or(usize::MAX))
            .map(|entry| RankedItemView {
                item: CatalogItem::from(entry.item),
                score: entry.score(),
                label: entry.label,
                components: entry.card.map(|card| card.components).unwrap_or_default(),
            })
            .collect();

        Ok(RankingResponse {
            occasion: context.occasion.label().to_string(),
            temp_f: context.temp_f,
            condition: context.condition.as_ref().map(|c| c.label().to_string()),
            target_warmth: warmth_band(context.temp_f),
            candidates,
            items: views,
        })
    }

    /// First `limit` catalog rows, unscored.
    pub fn catalog(&self, limit: usize) -> Result<Vec<CatalogItem>, RecommendationServiceError> {
        let mut items = self.catalog.items()?;
        items.truncate(limit);
        Ok(items)
    }

    fn load_items(&self) -> Result<Vec<Item>, RecommendationServiceError> {
        let items: Vec<Item> = self.catalog.items()?.into_iter().map(Item::from).collect();
        if items.is_empty() {
            warn!("catalog is empty; every outfit will be empty");
        }
        Ok(items)
    }

    fn resolve_weather(
        &self,
        request: &RecommendationRequest,
    ) -> Result<WeatherSnapshot, RecommendationServiceError> {
        let snapshot = match (&request.temp_f, request.location.as_deref()) {
            (Some(temp), _) => WeatherSnapshot {
                temp_f: parse_temperature(temp)?,
                condition: request.condition.clone(),
            },
            (None, Some(location)) if !location.trim().is_empty() => {
                let mut snapshot = self.weather.current(location.trim())?;
                if request.condition.is_some() {
                    snapshot.condition = request.condition.clone();
                }
                snapshot
            }
            _ => return Err(RecommendationServiceError::MissingTemperature),
        };

        if !snapshot.temp_f.is_finite() {
            return Err(RecommendationServiceError::InvalidTemperature(
                snapshot.temp_f.to_string(),
            ));
        }

        Ok(snapshot)
    }
}

fn parse_temperature(input: &TemperatureInput) -> Result<f64, RecommendationServiceError> {
    match input {
        TemperatureInput::Number(value) => Ok(*value),
        TemperatureInput::Text(raw) => raw
            .trim()
            .parse::<f64>()
            .map_err(|_| RecommendationServiceError::InvalidTemperature(raw.clone())),
    }
}

/// Error raised by the recommendation service.
#[derive(Debug, thiserror::Error)]
pub enum RecommendationServiceError {
    #[error("temp_f is required when no location is given")]
    MissingTemperature,
    #[error("temp_f must be a finite number, got '{0}'")]
    InvalidTemperature(String),
    #[error(transparent)]
    Weather(#[from] WeatherError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Recorder(#[from] RecorderError),
}
