use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
};

use crate::{
    db::DbPool,
    dto::tokens::{
        CreateTokenRequest, OrderTokensResponse, TokenCreatedResponse, TokenDetailResponse,
        TokenListResponse,
    },
    dto::orders::UpdateStatusRequest,
    error::{AppError, AppResult},
    response::MessageBody,
    services::token_service,
};

pub fn router() -> Router<DbPool> {
    Router::new()
        .route("/", get(list_tokens))
        .route("/", post(create_token))
        .route("/number/{token_number}", get(get_token_by_number))
        .route("/order/{order_id}", get(list_order_tokens))
        .route("/use/{token_number}", put(use_token))
        .route("/{id}", get(get_token))
        .route("/{id}/status", put(update_token_status))
        .route("/{id}", delete(delete_token))
}

#[utoipa::path(
    get,
    path = "/api/tokens",
    responses(
        (status = 200, description = "All tokens, newest first", body = TokenListResponse),
    ),
    tag = "Tokens"
)]
pub async fn list_tokens(State(pool): State<DbPool>) -> AppResult<Json<TokenListResponse>> {
    let tokens = token_service::list_all(&pool).await?;
    Ok(Json(TokenListResponse { tokens }))
}

#[utoipa::path(
    get,
    path = "/api/tokens/{id}",
    params(("id" = i64, Path, description = "Token ID")),
    responses(
        (status = 200, description = "Token", body = TokenDetailResponse),
        (status = 404, description = "Token not found"),
    ),
    tag = "Tokens"
)]
pub async fn get_token(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
) -> AppResult<Json<TokenDetailResponse>> {
    let token = token_service::get_by_id(&pool, id)
        .await?
        .ok_or(AppError::NotFound("Token not found"))?;
    Ok(Json(TokenDetailResponse { token }))
}

#[utoipa::path(
    get,
    path = "/api/tokens/number/{token_number}",
    params(("token_number" = String, Path, description = "Human-presentable token number")),
    responses(
        (status = 200, description = "Token", body = TokenDetailResponse),
        (status = 404, description = "Token not found"),
    ),
    tag = "Tokens"
)]
pub async fn get_token_by_number(
    State(pool): State<DbPool>,
    Path(token_number): Path<String>,
) -> AppResult<Json<TokenDetailResponse>> {
    let token = token_service::get_by_token_number(&pool, &token_number)
        .await?
        .ok_or(AppError::NotFound("Token not found"))?;
    Ok(Json(TokenDetailResponse { token }))
}

#[utoipa::path(
    get,
    path = "/api/tokens/order/{order_id}",
    params(("order_id" = i64, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Tokens issued for the order", body = OrderTokensResponse),
    ),
    tag = "Tokens"
)]
pub async fn list_order_tokens(
    State(pool): State<DbPool>,
    Path(order_id): Path<i64>,
) -> AppResult<Json<OrderTokensResponse>> {
    let tokens = token_service::get_by_order_id(&pool, order_id).await?;
    Ok(Json(OrderTokensResponse { tokens }))
}

#[utoipa::path(
    post,
    path = "/api/tokens",
    request_body = CreateTokenRequest,
    responses(
        (status = 201, description = "Issued token", body = TokenCreatedResponse),
        (status = 400, description = "Order ID is required"),
    ),
    tag = "Tokens"
)]
pub async fn create_token(
    State(pool): State<DbPool>,
    Json(payload): Json<CreateTokenRequest>,
) -> AppResult<(StatusCode, Json<TokenCreatedResponse>)> {
    let order_id = payload.validate()?;
    let token = token_service::create(&pool, order_id).await?;
    Ok((StatusCode::CREATED, Json(TokenCreatedResponse { token })))
}

#[utoipa::path(
    put,
    path = "/api/tokens/{id}/status",
    params(("id" = i64, Path, description = "Token ID")),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = MessageBody),
        (status = 400, description = "Status is required"),
    ),
    tag = "Tokens"
)]
pub async fn update_token_status(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateStatusRequest>,
) -> AppResult<Json<MessageBody>> {
    let status = payload.validate()?;
    token_service::update_status(&pool, id, &status).await?;
    Ok(Json(MessageBody::new("Token status updated successfully")))
}

#[utoipa::path(
    put,
    path = "/api/tokens/use/{token_number}",
    params(("token_number" = String, Path, description = "Human-presentable token number")),
    responses(
        (status = 200, description = "Marked used", body = MessageBody),
    ),
    tag = "Tokens"
)]
pub async fn use_token(
    State(pool): State<DbPool>,
    Path(token_number): Path<String>,
) -> AppResult<Json<MessageBody>> {
    token_service::mark_used(&pool, &token_number).await?;
    Ok(Json(MessageBody::new("Token marked as used successfully")))
}

#[utoipa::path(
    delete,
    path = "/api/tokens/{id}",
    params(("id" = i64, Path, description = "Token ID")),
    responses(
        (status = 200, description = "Deleted", body = MessageBody),
    ),
    tag = "Tokens"
)]
pub async fn delete_token(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
) -> AppResult<Json<MessageBody>> {
    token_service::delete(&pool, id).await?;
    Ok(Json(MessageBody::new("Token deleted successfully")))
}
