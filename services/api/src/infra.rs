use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::info;
use wardrobe_ai::config::{AppConfig, CatalogConfig, ScoringConfig};
use wardrobe_ai::error::AppError;
use wardrobe_ai::recommendations::{
    CatalogSnapshot, ItemScorer, OutfitAssembler, RecommendationRecord, RecommendationRecorder,
    RecommendationService, RecorderError, WeatherError, WeatherProvider, WeatherSnapshot,
};

pub(crate) type AppRecommendationService =
    RecommendationService<CatalogSnapshot, InMemoryRecommendationRecorder, SampleWeather>;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryRecommendationRecorder {
    records: Arc<Mutex<Vec<RecommendationRecord>>>,
}

impl RecommendationRecorder for InMemoryRecommendationRecorder {
    fn record(&self, record: RecommendationRecord) -> Result<(), RecorderError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|_| RecorderError::Unavailable("recorder mutex poisoned".to_string()))?;
        if guard.iter().any(|existing| existing.id == record.id) {
            return Err(RecorderError::Conflict);
        }
        guard.push(record);
        Ok(())
    }
}

impl InMemoryRecommendationRecorder {
    pub(crate) fn records(&self) -> Vec<RecommendationRecord> {
        self.records
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }
}

/// Offline weather table for demos and local runs. Lookups ignore case.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct SampleWeather;

const SAMPLE_WEATHER: [(&str, f64, Option<&str>); 5] = [
    ("phoenix", 104.0, Some("sunny")),
    ("seattle", 52.0, Some("rainy")),
    ("minneapolis", 18.0, Some("snowy")),
    ("san francisco", 61.0, None),
    ("chicago", 38.0, Some("cloudy")),
];

impl WeatherProvider for SampleWeather {
    fn current(&self, location: &str) -> Result<WeatherSnapshot, WeatherError> {
        let wanted = location.trim().to_ascii_lowercase();
        SAMPLE_WEATHER
            .iter()
            .find(|(city, _, _)| *city == wanted)
            .map(|(_, temp_f, condition)| WeatherSnapshot {
                temp_f: *temp_f,
                condition: condition.map(str::to_string),
            })
            .ok_or_else(|| WeatherError::LocationNotFound(location.trim().to_string()))
    }
}

pub(crate) fn load_catalog(config: &CatalogConfig) -> Result<CatalogSnapshot, AppError> {
    let catalog = match &config.csv_path {
        Some(path) => {
            let snapshot = CatalogSnapshot::from_csv_path(path)?;
            info!(path = %path.display(), items = snapshot.len(), "catalog loaded from csv");
            snapshot
        }
        None => {
            let snapshot = CatalogSnapshot::standard();
            info!(items = snapshot.len(), "using built-in starter catalog");
            snapshot
        }
    };
    Ok(catalog)
}

pub(crate) fn build_assembler(scoring: &ScoringConfig) -> OutfitAssembler {
    OutfitAssembler::new(ItemScorer::new(scoring.weights.clone()), scoring.assembly)
}

/// Wires the recommendation service from configuration. The recorder handle is returned
/// alongside so callers can inspect what was saved.
pub(crate) fn build_service(
    config: &AppConfig,
) -> Result<(AppRecommendationService, InMemoryRecommendationRecorder), AppError> {
    let catalog = load_catalog(&config.catalog)?;
    let recorder = InMemoryRecommendationRecorder::default();
    let service = RecommendationService::new(
        Arc::new(catalog),
        Arc::new(recorder.clone()),
        Arc::new(SampleWeather),
        build_assembler(&config.scoring),
    );
    Ok((service, recorder))
}
