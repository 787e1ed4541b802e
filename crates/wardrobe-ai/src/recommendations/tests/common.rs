use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::recommendations::domain::{
    ActivityComfort, CatalogItem, Category, Formality, Item, ItemId, Occasion,
    RecommendationContext, WeatherCondition,
};
use crate::recommendations::repository::{
    CatalogError, CatalogProvider, RecommendationRecord, RecommendationRecorder, RecorderError,
};
use crate::recommendations::weather::{WeatherError, WeatherProvider, WeatherSnapshot};
use crate::recommendations::{
    recommendation_router, CatalogSnapshot, OutfitAssembler, RecommendationService,
};

pub(super) fn item(
    id: u64,
    name: &str,
    category: Category,
    formality: Option<Formality>,
    warmth_score: Option<i32>,
    activity_comfort: Option<ActivityComfort>,
) -> Item {
    Item {
        id: ItemId(id),
        name: name.to_string(),
        category,
        formality,
        warmth_score,
        activity_comfort,
    }
}

pub(super) fn casual_outdoor(id: u64, name: &str, category: Category, warmth: i32) -> Item {
    item(
        id,
        name,
        category,
        Some(Formality::Casual),
        Some(warmth),
        Some(ActivityComfort::Outdoor),
    )
}

pub(super) fn context(
    temp_f: f64,
    occasion: Occasion,
    condition: Option<WeatherCondition>,
) -> RecommendationContext {
    RecommendationContext::new(temp_f, occasion, condition)
}

/// Top, bottom, shoes, and a heavy parka, all casual and outdoor.
pub(super) fn summer_catalog() -> Vec<Item> {
    vec![
        casual_outdoor(1, "T-Shirt", Category::Top, 2),
        casual_outdoor(2, "Shorts", Category::Bottom, 3),
        casual_outdoor(3, "Sneakers", Category::Shoes, 2),
        casual_outdoor(4, "Parka", Category::Outerwear, 9),
    ]
}

pub(super) fn standard_items() -> Vec<Item> {
    CatalogSnapshot::standard()
        .items()
        .expect("static catalog")
        .into_iter()
        .map(Item::from)
        .collect()
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[derive(Default)]
pub(super) struct MemoryRecorder {
    pub(super) records: Mutex<Vec<RecommendationRecord>>,
}

impl MemoryRecorder {
    pub(super) fn records(&self) -> Vec<RecommendationRecord> {
        self.records.lock().expect("recorder mutex poisoned").clone()
    }
}

impl RecommendationRecorder for MemoryRecorder {
    fn record(&self, record: RecommendationRecord) -> Result<(), RecorderError> {
        self.records
            .lock()
            .expect("recorder mutex poisoned")
            .push(record);
        Ok(())
    }
}

pub(super) struct UnavailableRecorder;

impl RecommendationRecorder for UnavailableRecorder {
    fn record(&self, _record: RecommendationRecord) -> Result<(), RecorderError> {
        Err(RecorderError::Unavailable("database offline".to_string()))
    }
}

pub(super) struct UnavailableCatalog;

impl CatalogProvider for UnavailableCatalog {
    fn items(&self) -> Result<Vec<CatalogItem>, CatalogError> {
        Err(CatalogError::Unavailable("database offline".to_string()))
    }
}

pub(super) struct FixedWeather(pub(super) WeatherSnapshot);

impl WeatherProvider for FixedWeather {
    fn current(&self, location: &str) -> Result<WeatherSnapshot, WeatherError> {
        if location.eq_ignore_ascii_case("atlantis") {
            return Err(WeatherError::LocationNotFound(location.to_string()));
        }
        Ok(self.0.clone())
    }
}

pub(super) fn snowy_weather() -> FixedWeather {
    FixedWeather(WeatherSnapshot {
        temp_f: 28.0,
        condition: Some("Snowy".to_string()),
    })
}

pub(super) type StandardService = RecommendationService<CatalogSnapshot, MemoryRecorder, FixedWeather>;

pub(super) fn build_service() -> (StandardService, Arc<MemoryRecorder>) {
    let recorder = Arc::new(MemoryRecorder::default());
    let service = RecommendationService::new(
        Arc::new(CatalogSnapshot::standard()),
        recorder.clone(),
        Arc::new(snowy_weather()),
        OutfitAssembler::default(),
    );
    (service, recorder)
}

pub(super) fn router_with_service(service: StandardService) -> axum::Router {
    recommendation_router(Arc::new(service))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
