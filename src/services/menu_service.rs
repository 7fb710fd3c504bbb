use crate::{db::DbPool, error::AppResult, models::MenuItem};

pub async fn list_available(pool: &DbPool) -> AppResult<Vec<MenuItem>> {
    let items = sqlx::query_as::<_, MenuItem>(
        "SELECT * FROM menus WHERE available = TRUE ORDER BY category, name",
    )
    .fetch_all(pool)
    .await?;
    Ok(items)
}

pub async fn list_by_category(pool: &DbPool, category: &str) -> AppResult<Vec<MenuItem>> {
    let items = sqlx::query_as::<_, MenuItem>(
        "SELECT * FROM menus WHERE category = $1 AND available = TRUE ORDER BY name",
    )
    .bind(category)
    .fetch_all(pool)
    .await?;
    Ok(items)
}

pub async fn get_by_id(pool: &DbPool, id: i64) -> AppResult<Option<MenuItem>> {
    let item = sqlx::query_as::<_, MenuItem>("SELECT * FROM menus WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(item)
}

pub async fn create(
    pool: &DbPool,
    name: &str,
    description: Option<&str>,
    price: f64,
    category: &str,
) -> AppResult<MenuItem> {
    let item = sqlx::query_as::<_, MenuItem>(
        "INSERT INTO menus (name, description, price, category) VALUES ($1, $2, $3, $4) RETURNING *",
    )
    .bind(name)
    .bind(description)
    .bind(price)
    .bind(category)
    .fetch_one(pool)
    .await?;
    Ok(item)
}

/// Full-field overwrite; callers resend every field.
pub async fn update(
    pool: &DbPool,
    id: i64,
    name: &str,
    description: Option<&str>,
    price: f64,
    category: &str,
    available: bool,
) -> AppResult<()> {
    sqlx::query(
        r#"
        UPDATE menus
        SET name = $2, description = $3, price = $4, category = $5, available = $6,
            updated_at = now()
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(description)
    .bind(price)
    .bind(category)
    .bind(available)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn delete(pool: &DbPool, id: i64) -> AppResult<()> {
    sqlx::query("DELETE FROM menus WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
