use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    pub available: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An order joined against the menus table. The joined columns are nullable
/// because the referenced menu item may have been deleted since.
#[derive(Debug, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct Order {
    pub id: i64,
    pub student_id: String,
    pub student_name: String,
    pub menu_item_id: i64,
    pub quantity: i32,
    pub total_price: f64,
    pub pickup_time: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[sqlx(default)]
    pub menu_item_name: Option<String>,
    #[sqlx(default)]
    pub menu_item_price: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct Token {
    pub id: i64,
    pub order_id: i64,
    pub token_number: String,
    pub status: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// A token joined against its order for counter-side lookups.
#[derive(Debug, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct TokenWithOrder {
    pub id: i64,
    pub order_id: i64,
    pub token_number: String,
    pub status: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub student_name: Option<String>,
    pub order_status: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct AnalyticsRecord {
    pub id: i64,
    pub menu_item_id: i64,
    pub date: NaiveDate,
    pub ordered_quantity: i32,
    pub prepared_quantity: i32,
    pub wasted_quantity: i32,
    pub created_at: DateTime<Utc>,
}

/// One row of the waste report. `waste_percentage` is null when nothing was
/// prepared that day.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WasteRow {
    pub menu_item: Option<String>,
    pub date: NaiveDate,
    pub ordered_quantity: i32,
    pub prepared_quantity: i32,
    pub wasted_quantity: i32,
    pub waste_percentage: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct WasteSummary {
    pub total_ordered: i64,
    pub total_prepared: i64,
    pub total_wasted: i64,
    pub avg_waste_percentage: Option<f64>,
}
