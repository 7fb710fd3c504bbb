use chrono::NaiveDate;
use sqlx::FromRow;

use crate::{
    db::DbPool,
    error::AppResult,
    models::{AnalyticsRecord, WasteRow, WasteSummary},
};

/// Outcome of a record call, so the facade can phrase its acknowledgement.
#[derive(Debug, PartialEq, Eq)]
pub enum RecordOutcome {
    Created,
    Updated,
}

/// Upsert keyed on (menu_item_id, date): overwrite the three quantities when
/// a record exists, insert otherwise.
pub async fn record(
    pool: &DbPool,
    menu_item_id: i64,
    date: NaiveDate,
    ordered_quantity: i32,
    prepared_quantity: i32,
    wasted_quantity: i32,
) -> AppResult<RecordOutcome> {
    let existing: Option<(i64,)> =
        sqlx::query_as("SELECT id FROM analytics WHERE menu_item_id = $1 AND date = $2")
            .bind(menu_item_id)
            .bind(date)
            .fetch_optional(pool)
            .await?;

    match existing {
        Some((id,)) => {
            sqlx::query(
                r#"
                UPDATE analytics
                SET ordered_quantity = $2, prepared_quantity = $3, wasted_quantity = $4
                WHERE id = $1
                "#,
            )
            .bind(id)
            .bind(ordered_quantity)
            .bind(prepared_quantity)
            .bind(wasted_quantity)
            .execute(pool)
            .await?;
            Ok(RecordOutcome::Updated)
        }
        None => {
            sqlx::query(
                r#"
                INSERT INTO analytics (menu_item_id, date, ordered_quantity, prepared_quantity, wasted_quantity)
                VALUES ($1, $2, $3, $4, $5)
                "#,
            )
            .bind(menu_item_id)
            .bind(date)
            .bind(ordered_quantity)
            .bind(prepared_quantity)
            .bind(wasted_quantity)
            .execute(pool)
            .await?;
            Ok(RecordOutcome::Created)
        }
    }
}

pub async fn list_waste(pool: &DbPool) -> AppResult<Vec<WasteRow>> {
    #[derive(FromRow)]
    struct Row {
        menu_item: Option<String>,
        date: NaiveDate,
        ordered_quantity: i32,
        prepared_quantity: i32,
        wasted_quantity: i32,
    }

    let rows = sqlx::query_as::<_, Row>(
        r#"
        SELECT m.name AS menu_item, a.date,
               a.ordered_quantity, a.prepared_quantity, a.wasted_quantity
        FROM analytics a
        LEFT JOIN menus m ON a.menu_item_id = m.id
        ORDER BY a.date DESC, m.name
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|r| WasteRow {
            waste_percentage: waste_percentage(r.wasted_quantity, r.prepared_quantity),
            menu_item: r.menu_item,
            date: r.date,
            ordered_quantity: r.ordered_quantity,
            prepared_quantity: r.prepared_quantity,
            wasted_quantity: r.wasted_quantity,
        })
        .collect())
}

pub async fn summary(pool: &DbPool) -> AppResult<WasteSummary> {
    let row: (Option<i64>, Option<i64>, Option<i64>, Option<f64>) = sqlx::query_as(
        r#"
        SELECT SUM(ordered_quantity), SUM(prepared_quantity), SUM(wasted_quantity),
               AVG(wasted_quantity::float8 / prepared_quantity * 100)
        FROM analytics
        WHERE prepared_quantity > 0
        "#,
    )
    .fetch_one(pool)
    .await?;

    Ok(WasteSummary {
        total_ordered: row.0.unwrap_or(0),
        total_prepared: row.1.unwrap_or(0),
        total_wasted: row.2.unwrap_or(0),
        avg_waste_percentage: row.3.map(round2),
    })
}

pub async fn list_by_menu_item(pool: &DbPool, menu_item_id: i64) -> AppResult<Vec<AnalyticsRecord>> {
    let records = sqlx::query_as::<_, AnalyticsRecord>(
        "SELECT * FROM analytics WHERE menu_item_id = $1 ORDER BY date DESC",
    )
    .bind(menu_item_id)
    .fetch_all(pool)
    .await?;
    Ok(records)
}

/// wasted / prepared × 100 rounded to two decimals; undefined when nothing
/// was prepared.
fn waste_percentage(wasted: i32, prepared: i32) -> Option<f64> {
    if prepared <= 0 {
        return None;
    }
    Some(round2(f64::from(wasted) / f64::from(prepared) * 100.0))
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::waste_percentage;

    #[test]
    fn percentage_rounds_to_two_decimals() {
        assert_eq!(waste_percentage(1, 3), Some(33.33));
        assert_eq!(waste_percentage(2, 3), Some(66.67));
        assert_eq!(waste_percentage(5, 10), Some(50.0));
    }

    #[test]
    fn zero_prepared_yields_no_percentage() {
        assert_eq!(waste_percentage(4, 0), None);
        assert_eq!(waste_percentage(0, 0), None);
    }
}
