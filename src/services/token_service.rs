use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::{
    db::DbPool,
    error::AppResult,
    models::{Token, TokenWithOrder},
};

/// Validity window for a freshly issued token.
const TOKEN_VALIDITY_HOURS: i64 = 2;

const TOKEN_WITH_ORDER: &str = r#"
    SELECT t.*, o.student_name, o.status AS order_status
    FROM tokens t
    LEFT JOIN orders o ON t.order_id = o.id
"#;

/// Produce a pickup code like `TK3F9A01BC`: the "TK" prefix plus the first
/// eight hex characters of a v4 UUID, uppercased. 32 bits of randomness;
/// uniqueness is not re-checked at insert time.
pub fn generate_token_number() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("TK{}", hex[..8].to_uppercase())
}

pub async fn create(pool: &DbPool, order_id: i64) -> AppResult<Token> {
    let token_number = generate_token_number();
    let expires_at = Utc::now() + Duration::hours(TOKEN_VALIDITY_HOURS);

    let token = sqlx::query_as::<_, Token>(
        r#"
        INSERT INTO tokens (order_id, token_number, expires_at)
        VALUES ($1, $2, $3)
        RETURNING *
        "#,
    )
    .bind(order_id)
    .bind(&token_number)
    .bind(expires_at)
    .fetch_one(pool)
    .await?;

    Ok(token)
}

pub async fn list_all(pool: &DbPool) -> AppResult<Vec<TokenWithOrder>> {
    let sql = format!("{TOKEN_WITH_ORDER} ORDER BY t.created_at DESC");
    let tokens = sqlx::query_as::<_, TokenWithOrder>(&sql)
        .fetch_all(pool)
        .await?;
    Ok(tokens)
}

pub async fn get_by_id(pool: &DbPool, id: i64) -> AppResult<Option<TokenWithOrder>> {
    let sql = format!("{TOKEN_WITH_ORDER} WHERE t.id = $1");
    let token = sqlx::query_as::<_, TokenWithOrder>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(token)
}

pub async fn get_by_token_number(
    pool: &DbPool,
    token_number: &str,
) -> AppResult<Option<TokenWithOrder>> {
    let sql = format!("{TOKEN_WITH_ORDER} WHERE t.token_number = $1");
    let token = sqlx::query_as::<_, TokenWithOrder>(&sql)
        .bind(token_number)
        .fetch_optional(pool)
        .await?;
    Ok(token)
}

pub async fn get_by_order_id(pool: &DbPool, order_id: i64) -> AppResult<Vec<Token>> {
    let tokens = sqlx::query_as::<_, Token>(
        "SELECT * FROM tokens WHERE order_id = $1 ORDER BY created_at DESC",
    )
    .bind(order_id)
    .fetch_all(pool)
    .await?;
    Ok(tokens)
}

pub async fn update_status(pool: &DbPool, id: i64, status: &str) -> AppResult<()> {
    sqlx::query("UPDATE tokens SET status = $2 WHERE id = $1")
        .bind(id)
        .bind(status)
        .execute(pool)
        .await?;
    Ok(())
}

/// Unconditional overwrite to "used". Expiry and prior status are not
/// checked; redeeming twice is left to counter staff to notice.
pub async fn mark_used(pool: &DbPool, token_number: &str) -> AppResult<()> {
    sqlx::query("UPDATE tokens SET status = 'used' WHERE token_number = $1")
        .bind(token_number)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn delete(pool: &DbPool, id: i64) -> AppResult<()> {
    sqlx::query("DELETE FROM tokens WHERE id = $1")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}
