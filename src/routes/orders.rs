use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
};

use crate::{
    db::DbPool,
    dto::orders::{
        CreateOrderRequest, OrderListResponse, OrderResponse, OrderWithTokenResponse,
        UpdateStatusRequest,
    },
    error::{AppError, AppResult},
    response::MessageBody,
    services::{order_service, token_service},
};

pub fn router() -> Router<DbPool> {
    Router::new()
        .route("/", get(list_orders))
        .route("/", post(create_order))
        .route("/student/{student_id}", get(list_student_orders))
        .route("/{id}", get(get_order))
        .route("/{id}/status", put(update_order_status))
        .route("/{id}", delete(delete_order))
}

#[utoipa::path(
    get,
    path = "/api/orders",
    responses(
        (status = 200, description = "All orders, newest first", body = OrderListResponse),
    ),
    tag = "Orders"
)]
pub async fn list_orders(State(pool): State<DbPool>) -> AppResult<Json<OrderListResponse>> {
    let orders = order_service::list_all(&pool).await?;
    Ok(Json(OrderListResponse { orders }))
}

#[utoipa::path(
    get,
    path = "/api/orders/student/{student_id}",
    params(("student_id" = String, Path, description = "Student ID")),
    responses(
        (status = 200, description = "Orders for one student", body = OrderListResponse),
    ),
    tag = "Orders"
)]
pub async fn list_student_orders(
    State(pool): State<DbPool>,
    Path(student_id): Path<String>,
) -> AppResult<Json<OrderListResponse>> {
    let orders = order_service::list_by_student(&pool, &student_id).await?;
    Ok(Json(OrderListResponse { orders }))
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    params(("id" = i64, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order", body = OrderResponse),
        (status = 404, description = "Order not found"),
    ),
    tag = "Orders"
)]
pub async fn get_order(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
) -> AppResult<Json<OrderResponse>> {
    let order = order_service::get_by_id(&pool, id)
        .await?
        .ok_or(AppError::NotFound("Order not found"))?;
    Ok(Json(OrderResponse { order }))
}

/// Place an order, then issue its pickup token. The two writes commit
/// independently: if token issuance fails the order stands and the response
/// still reports 201, with a null token for staff to reissue manually.
#[utoipa::path(
    post,
    path = "/api/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Created order with its pickup token", body = OrderWithTokenResponse),
        (status = 400, description = "Missing required fields or unknown menu item"),
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(pool): State<DbPool>,
    Json(payload): Json<CreateOrderRequest>,
) -> AppResult<(StatusCode, Json<OrderWithTokenResponse>)> {
    let req = payload.validate()?;
    let order = order_service::create(
        &pool,
        &req.student_id,
        &req.student_name,
        req.menu_item_id,
        req.quantity,
        req.pickup_time.as_deref(),
    )
    .await?;

    let token = match token_service::create(&pool, order.id).await {
        Ok(token) => Some(token),
        Err(err) => {
            tracing::error!(order_id = order.id, error = %err, "token issuance failed");
            None
        }
    };

    Ok((
        StatusCode::CREATED,
        Json(OrderWithTokenResponse { order, token }),
    ))
}

#[utoipa::path(
    put,
    path = "/api/orders/{id}/status",
    params(("id" = i64, Path, description = "Order ID")),
    request_body = UpdateStatusRequest,
    responses(
        (status = 200, description = "Status updated", body = MessageBody),
        (status = 400, description = "Status is required"),
    ),
    tag = "Orders"
)]
pub async fn update_order_status(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateStatusRequest>,
) -> AppResult<Json<MessageBody>> {
    let status = payload.validate()?;
    order_service::update_status(&pool, id, &status).await?;
    Ok(Json(MessageBody::new("Order status updated successfully")))
}

#[utoipa::path(
    delete,
    path = "/api/orders/{id}",
    params(("id" = i64, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Deleted", body = MessageBody),
    ),
    tag = "Orders"
)]
pub async fn delete_order(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
) -> AppResult<Json<MessageBody>> {
    order_service::delete(&pool, id).await?;
    Ok(Json(MessageBody::new("Order deleted successfully")))
}
