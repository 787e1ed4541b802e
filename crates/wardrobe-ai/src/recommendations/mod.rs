//! Outfit recommendation: item scoring, slot assembly, and the service and HTTP layers
//! that feed them a catalog snapshot and weather context.

pub mod assembler;
pub mod catalog;
pub mod domain;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;
pub mod weather;

#[cfg(test)]
mod tests;

pub use assembler::{
    AssemblyPolicy, Outfit, OutfitAssembler, OutfitPick, OutfitSlot, ScoredCandidate,
};
pub use catalog::CatalogSnapshot;
pub use domain::{
    ActivityComfort, CatalogItem, Category, Formality, Item, ItemId, Occasion,
    RecommendationContext, WeatherCondition,
};
pub use repository::{
    CatalogError, CatalogProvider, OutfitEntry, RecommendationId, RecommendationRecord,
    RecommendationRecorder, RecorderError,
};
pub use router::recommendation_router;
pub use scoring::{
    score_item, warmth_band, ItemScorer, RankedItem, ScoreCard, ScoreComponent, ScoreFactor,
    ScoreLabel, ScoringWeights, DISQUALIFIED_SCORE,
};
pub use service::{
    OutfitItemView, RankedItemView, RankingResponse, RecommendationRequest,
    RecommendationResponse, RecommendationService, RecommendationServiceError, TemperatureInput,
};
pub use weather::{NoWeather, WeatherError, WeatherProvider, WeatherSnapshot};
