use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use tracing::debug;

use crate::{
    dto::{CreatedRecordResponse, RecordQuery, RecordRequest, RecordResponse},
    errors::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/records", get(get_records).post(create_record))
        .route(
            "/records/{id}",
            get(get_record_by_id)
                .put(update_record)
                .delete(delete_record),
        )
}

async fn get_records(
    State(state): State<AppState>,
    Query(params): Query<RecordQuery>,
) -> Result<Json<Vec<RecordResponse>>, ApiError> {
    let records = state
        .get_records
        .find(params.name.as_deref(), params.kind.as_deref())
        .await?;

    debug!(count = records.len(), "Records retrieved successfully");

    Ok(Json(
        records.into_iter().map(RecordResponse::from_record).collect(),
    ))
}

async fn get_record_by_id(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<RecordResponse>, ApiError> {
    let record = state.get_records.get_by_id(id).await?;
    Ok(Json(RecordResponse::from_record(record)))
}

async fn create_record(
    State(state): State<AppState>,
    Json(req): Json<RecordRequest>,
) -> Result<(StatusCode, Json<CreatedRecordResponse>), ApiError> {
    let record = state
        .create_record
        .execute(req.name, req.kind, req.value)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedRecordResponse { id: record.id }),
    ))
}

async fn update_record(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<RecordRequest>,
) -> Result<Json<RecordResponse>, ApiError> {
    let record = state
        .update_record
        .execute(id, req.name, req.kind, req.value)
        .await?;

    Ok(Json(RecordResponse::from_record(record)))
}

async fn delete_record(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.delete_record.execute(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
