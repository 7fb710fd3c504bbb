use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
};

use crate::{
    db::DbPool,
    dto::menu::{MenuItemRequest, MenuListResponse, MenuResponse},
    error::{AppError, AppResult},
    response::MessageBody,
    services::menu_service,
};

pub fn router() -> Router<DbPool> {
    Router::new()
        .route("/", get(list_menu))
        .route("/", post(create_menu_item))
        .route("/category/{category}", get(list_by_category))
        .route("/{id}", get(get_menu_item))
        .route("/{id}", put(update_menu_item))
        .route("/{id}", delete(delete_menu_item))
}

#[utoipa::path(
    get,
    path = "/api/menu",
    responses(
        (status = 200, description = "Available menu items", body = MenuListResponse),
    ),
    tag = "Menu"
)]
pub async fn list_menu(State(pool): State<DbPool>) -> AppResult<Json<MenuListResponse>> {
    let menus = menu_service::list_available(&pool).await?;
    Ok(Json(MenuListResponse { menus }))
}

#[utoipa::path(
    get,
    path = "/api/menu/category/{category}",
    params(("category" = String, Path, description = "Exact category name")),
    responses(
        (status = 200, description = "Available items in category", body = MenuListResponse),
    ),
    tag = "Menu"
)]
pub async fn list_by_category(
    State(pool): State<DbPool>,
    Path(category): Path<String>,
) -> AppResult<Json<MenuListResponse>> {
    let menus = menu_service::list_by_category(&pool, &category).await?;
    Ok(Json(MenuListResponse { menus }))
}

#[utoipa::path(
    get,
    path = "/api/menu/{id}",
    params(("id" = i64, Path, description = "Menu item ID")),
    responses(
        (status = 200, description = "Menu item", body = MenuResponse),
        (status = 404, description = "Menu item not found"),
    ),
    tag = "Menu"
)]
pub async fn get_menu_item(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
) -> AppResult<Json<MenuResponse>> {
    let menu = menu_service::get_by_id(&pool, id)
        .await?
        .ok_or(AppError::NotFound("Menu item not found"))?;
    Ok(Json(MenuResponse { menu }))
}

#[utoipa::path(
    post,
    path = "/api/menu",
    request_body = MenuItemRequest,
    responses(
        (status = 201, description = "Created menu item", body = MenuResponse),
        (status = 400, description = "Missing required fields"),
    ),
    tag = "Menu"
)]
pub async fn create_menu_item(
    State(pool): State<DbPool>,
    Json(payload): Json<MenuItemRequest>,
) -> AppResult<(StatusCode, Json<MenuResponse>)> {
    let item = payload.validate()?;
    let menu = menu_service::create(
        &pool,
        &item.name,
        item.description.as_deref(),
        item.price,
        &item.category,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(MenuResponse { menu })))
}

#[utoipa::path(
    put,
    path = "/api/menu/{id}",
    params(("id" = i64, Path, description = "Menu item ID")),
    request_body = MenuItemRequest,
    responses(
        (status = 200, description = "Updated", body = MessageBody),
        (status = 400, description = "Missing required fields"),
    ),
    tag = "Menu"
)]
pub async fn update_menu_item(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
    Json(payload): Json<MenuItemRequest>,
) -> AppResult<Json<MessageBody>> {
    let item = payload.validate()?;
    menu_service::update(
        &pool,
        id,
        &item.name,
        item.description.as_deref(),
        item.price,
        &item.category,
        item.available,
    )
    .await?;
    Ok(Json(MessageBody::new("Menu item updated successfully")))
}

#[utoipa::path(
    delete,
    path = "/api/menu/{id}",
    params(("id" = i64, Path, description = "Menu item ID")),
    responses(
        (status = 200, description = "Deleted", body = MessageBody),
    ),
    tag = "Menu"
)]
pub async fn delete_menu_item(
    State(pool): State<DbPool>,
    Path(id): Path<i64>,
) -> AppResult<Json<MessageBody>> {
    menu_service::delete(&pool, id).await?;
    Ok(Json(MessageBody::new("Menu item deleted successfully")))
}
