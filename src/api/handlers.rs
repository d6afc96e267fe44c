use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::api::AppState;
use crate::core::record::{LyricRecord, NewLyricRecord};
use crate::error::LyricsDbError;
use crate::services::repository::contains_folded;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub title: Option<String>,
    pub artist: Option<String>,
}

pub enum ApiError {
    Json(JsonRejection),
    Path(PathRejection),
    Domain(LyricsDbError),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Json(rejection)
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Path(rejection)
    }
}

impl From<LyricsDbError> for ApiError {
    fn from(err: LyricsDbError) -> Self {
        ApiError::Domain(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Json(rejection) => (rejection.status(), rejection.body_text()),
            ApiError::Path(rejection) => (rejection.status(), rejection.body_text()),
            ApiError::Domain(LyricsDbError::Validation(msg)) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::Domain(LyricsDbError::NotFound) => {
                (StatusCode::NOT_FOUND, LyricsDbError::NotFound.to_string())
            }
            ApiError::Domain(err) => {
                error!("Request failed: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

type ApiResult<T> = std::result::Result<T, ApiError>;

/// GET /
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /lyrics
pub async fn list_lyrics(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<Vec<LyricRecord>>> {
    let records: Vec<LyricRecord> = match (query.title.as_deref(), query.artist.as_deref()) {
        (Some(title), Some(artist)) => state
            .queries
            .search_by_title(title)
            .await?
            .into_iter()
            .filter(|r| r.artist.as_deref().is_some_and(|a| contains_folded(a, artist)))
            .collect(),
        (Some(title), None) => state.queries.search_by_title(title).await?,
        (None, Some(artist)) => state.queries.search_by_artist(artist).await?,
        (None, None) => state.queries.list_all().await?,
    };

    Ok(Json(records))
}

/// POST /lyrics
pub async fn create_lyrics(
    State(state): State<AppState>,
    payload: std::result::Result<Json<NewLyricRecord>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<LyricRecord>)> {
    let Json(record) = payload?;
    record.validate_submitted()?;

    let id = state.repository.insert(&record).await?;
    info!("Created lyrics #{} ({})", id, record.title);

    Ok((StatusCode::CREATED, Json(record.with_id(id))))
}

/// GET /lyrics/:id
pub async fn get_lyrics(
    State(state): State<AppState>,
    id: std::result::Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<LyricRecord>> {
    let Path(id) = id?;
    let record = state.queries.get(id).await?.ok_or(LyricsDbError::NotFound)?;
    Ok(Json(record))
}

/// PUT /lyrics/:id
pub async fn update_lyrics(
    State(state): State<AppState>,
    id: std::result::Result<Path<i64>, PathRejection>,
    payload: std::result::Result<Json<NewLyricRecord>, JsonRejection>,
) -> ApiResult<Json<LyricRecord>> {
    let Path(id) = id?;
    let Json(record) = payload?;
    record.validate_submitted()?;

    if !state.repository.update(id, &record).await? {
        return Err(LyricsDbError::NotFound.into());
    }

    Ok(Json(record.with_id(id)))
}

/// DELETE /lyrics/:id
pub async fn delete_lyrics(
    State(state): State<AppState>,
    id: std::result::Result<Path<i64>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = id?;
    if !state.repository.delete(id).await? {
        return Err(LyricsDbError::NotFound.into());
    }

    Ok(StatusCode::NO_CONTENT)
}
