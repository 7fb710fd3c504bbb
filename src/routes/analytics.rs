use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};

use crate::{
    db::DbPool,
    dto::analytics::{
        RecordAnalyticsRequest, RecordListResponse, SummaryResponse, WasteListResponse,
    },
    error::AppResult,
    response::MessageBody,
    services::analytics_service::{self, RecordOutcome},
};

pub fn router() -> Router<DbPool> {
    Router::new()
        .route("/waste", get(list_waste))
        .route("/summary", get(get_summary))
        .route("/record", post(record_analytics))
        .route("/menu/{menu_item_id}", get(list_menu_item_analytics))
}

#[utoipa::path(
    get,
    path = "/api/analytics/waste",
    responses(
        (status = 200, description = "Per-day, per-item waste rows", body = WasteListResponse),
    ),
    tag = "Analytics"
)]
pub async fn list_waste(State(pool): State<DbPool>) -> AppResult<Json<WasteListResponse>> {
    let analytics = analytics_service::list_waste(&pool).await?;
    Ok(Json(WasteListResponse { analytics }))
}

#[utoipa::path(
    get,
    path = "/api/analytics/summary",
    responses(
        (status = 200, description = "Totals and average waste percentage", body = SummaryResponse),
    ),
    tag = "Analytics"
)]
pub async fn get_summary(State(pool): State<DbPool>) -> AppResult<Json<SummaryResponse>> {
    let summary = analytics_service::summary(&pool).await?;
    Ok(Json(SummaryResponse { summary }))
}

#[utoipa::path(
    post,
    path = "/api/analytics/record",
    request_body = RecordAnalyticsRequest,
    responses(
        (status = 200, description = "Recorded", body = MessageBody),
        (status = 400, description = "Missing required fields"),
    ),
    tag = "Analytics"
)]
pub async fn record_analytics(
    State(pool): State<DbPool>,
    Json(payload): Json<RecordAnalyticsRequest>,
) -> AppResult<Json<MessageBody>> {
    let record = payload.validate()?;
    let outcome = analytics_service::record(
        &pool,
        record.menu_item_id,
        record.date,
        record.ordered_quantity,
        record.prepared_quantity,
        record.wasted_quantity,
    )
    .await?;

    let message = match outcome {
        RecordOutcome::Created => "Analytics record created successfully",
        RecordOutcome::Updated => "Analytics record updated successfully",
    };
    Ok(Json(MessageBody::new(message)))
}

#[utoipa::path(
    get,
    path = "/api/analytics/menu/{menu_item_id}",
    params(("menu_item_id" = i64, Path, description = "Menu item ID")),
    responses(
        (status = 200, description = "Records for one menu item, newest first", body = RecordListResponse),
    ),
    tag = "Analytics"
)]
pub async fn list_menu_item_analytics(
    State(pool): State<DbPool>,
    Path(menu_item_id): Path<i64>,
) -> AppResult<Json<RecordListResponse>> {
    let analytics = analytics_service::list_by_menu_item(&pool, menu_item_id).await?;
    Ok(Json(RecordListResponse { analytics }))
}
