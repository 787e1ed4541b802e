use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::repository::{CatalogProvider, RecommendationRecorder};
use super::service::{RecommendationRequest, RecommendationService, RecommendationServiceError};
use super::weather::{WeatherError, WeatherProvider};

const DEFAULT_LISTING_LIMIT: usize = 10;

/// Router builder exposing recommendation, ranking and catalog endpoints.
pub fn recommendation_router<C, R, W>(service: Arc<RecommendationService<C, R, W>>) -> Router
where
    C: CatalogProvider + 'static,
    R: RecommendationRecorder + 'static,
    W: WeatherProvider + 'static,
{
    Router::new()
        .route("/api/recommendations", post(recommend_handler::<C, R, W>))
        .route("/api/recommendations/rank", post(rank_handler::<C, R, W>))
        .route("/api/items", get(items_handler::<C, R, W>))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct ItemsQuery {
    #[serde(default)]
    limit: Option<usize>,
}

pub(crate) async fn recommend_handler<C, R, W>(
    State(service): State<Arc<RecommendationService<C, R, W>>>,
    payload: Result<Json<RecommendationRequest>, JsonRejection>,
) -> Response
where
    C: CatalogProvider + 'static,
    R: RecommendationRecorder + 'static,
    W: WeatherProvider + 'static,
{
    let Json(request) = match payload {
        Ok(body) => body,
        Err(rejection) => return malformed_body(rejection),
    };

    match service.recommend(request) {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn rank_handler<C, R, W>(
    State(service): State<Arc<RecommendationService<C, R, W>>>,
    payload: Result<Json<RecommendationRequest>, JsonRejection>,
) -> Response
where
    C: CatalogProvider + 'static,
    R: RecommendationRecorder + 'static,
    W: WeatherProvider + 'static,
{
    let Json(request) = match payload {
        Ok(body) => body,
        Err(rejection) => return malformed_body(rejection),
    };

    match service.rank(request) {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn items_handler<C, R, W>(
    State(service): State<Arc<RecommendationService<C, R, W>>>,
    Query(query): Query<ItemsQuery>,
) -> Response
where
    C: CatalogProvider + 'static,
    R: RecommendationRecorder + 'static,
    W: WeatherProvider + 'static,
{
    match service.catalog(query.limit.unwrap_or(DEFAULT_LISTING_LIMIT)) {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(error) => error_response(error),
    }
}

fn malformed_body(rejection: JsonRejection) -> Response {
    tracing::debug!(error = %rejection, "rejected recommendation payload");
    let payload = json!({ "error": rejection.body_text() });
    (StatusCode::BAD_REQUEST, Json(payload)).into_response()
}

fn error_response(error: RecommendationServiceError) -> Response {
    let status = match &error {
        RecommendationServiceError::MissingTemperature
        | RecommendationServiceError::InvalidTemperature(_) => StatusCode::BAD_REQUEST,
        RecommendationServiceError::Weather(WeatherError::LocationNotFound(_)) => {
            StatusCode::NOT_FOUND
        }
        RecommendationServiceError::Weather(WeatherError::Upstream(_)) => StatusCode::BAD_GATEWAY,
        RecommendationServiceError::Catalog(_) | RecommendationServiceError::Recorder(_) => {
            tracing::error!(error = %error, "recommendation backend failure");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let payload = json!({ "error": error.to_string() });
    (status, Json(payload)).into_response()
}
