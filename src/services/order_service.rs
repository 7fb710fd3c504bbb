use crate::{
    db::DbPool,
    error::{AppError, AppResult},
    models::Order,
};

const ORDER_WITH_MENU: &str = r#"
    SELECT o.*, m.name AS menu_item_name, m.price AS menu_item_price
    FROM orders o
    LEFT JOIN menus m ON o.menu_item_id = m.id
"#;

pub async fn list_all(pool: &DbPool) -> AppResult<Vec<Order>> {
    let sql = format!("{ORDER_WITH_MENU} ORDER BY o.created_at DESC");
    let orders = sqlx::query_as::<_, Order>(&sql).fetch_all(pool).await?;
    Ok(orders)
}

pub async fn get_by_id(pool: &DbPool, id: i64) -> AppResult<Option<Order>> {
    let sql = format!("{ORDER_WITH_MENU} WHERE o.id = $1");
    let order = sqlx::query_as::<_, Order>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(order)
}

pub async fn list_by_student(pool: &DbPool, student_id: &str) -> AppResult<Vec<Order>> {
    let sql = format!("{ORDER_WITH_MENU} WHERE o.student_id = $1 ORDER BY o.created_at DESC");
    let orders = sqlx::query_as::<_, Order>(&sql)
        .bind(student_id)
        .fetch_all(pool)
        .await?;
    Ok(orders)
}

/// Create an order, snapshotting the menu item's current price into
/// `total_price`. The price lookup must succeed before anything is written;
/// an unknown menu item is rejected without touching the orders table.
pub async fn create(
    pool: &DbPool,
    student_id: &str,
    student_name: &str,
    menu_item_id: i64,
    quantity: i32,
    pickup_time: Option<&str>,
) -> AppResult<Order> {
    let price: Option<(f64,)> = sqlx::query_as("SELECT price FROM menus WHERE id = $1")
        .bind(menu_item_id)
        .fetch_optional(pool)
        .await?;
    let (price,) = price.ok_or_else(|| AppError::BadRequest("Menu item not found".into()))?;

    let total_price = price * f64::from(quantity);

    let order = sqlx::query_as::<_, Order>(
        r#"
        INSERT INTO orders (student_id, student_name, menu_item_id, quantity, total_price, pickup_time)
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        "#,
    )
    .bind(student_id)
    .bind(student_name)
    .bind(menu_item_id)
    .bind(quantity)
    .bind(total_price)
    .bind(pickup_time)
    .fetch_one(pool)
    .await?;

    Ok(order)
}

/// Any status string is accepted; transitions are not validated here.
pub async fn update_status(pool: &DbPool, id: i64, status: &str) -> AppResult<()> {
    sqlx::query("UPDATE orders SET status = $2, updated_at = now() WHERE id = $1")
        .bind(id)
        .bind(status)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn delete(pool: &DbPool, id: i64) -> AppResult<()> {
    sqlx::query("DELETE FROM orders WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
