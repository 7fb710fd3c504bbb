use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::{AnalyticsRecord, WasteRow, WasteSummary},
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct RecordAnalyticsRequest {
    pub menu_item_id: Option<i64>,
    pub date: Option<NaiveDate>,
    pub ordered_quantity: Option<i32>,
    pub prepared_quantity: Option<i32>,
    pub wasted_quantity: Option<i32>,
}

pub struct ValidRecord {
    pub menu_item_id: i64,
    pub date: NaiveDate,
    pub ordered_quantity: i32,
    pub prepared_quantity: i32,
    pub wasted_quantity: i32,
}

impl RecordAnalyticsRequest {
    pub fn validate(self) -> AppResult<ValidRecord> {
        let (Some(menu_item_id), Some(date)) = (self.menu_item_id, self.date) else {
            return Err(AppError::BadRequest(
                "Menu item ID and date are required".into(),
            ));
        };
        Ok(ValidRecord {
            menu_item_id,
            date,
            ordered_quantity: self.ordered_quantity.unwrap_or(0),
            prepared_quantity: self.prepared_quantity.unwrap_or(0),
            wasted_quantity: self.wasted_quantity.unwrap_or(0),
        })
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WasteListResponse {
    pub analytics: Vec<WasteRow>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SummaryResponse {
    pub summary: WasteSummary,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RecordListResponse {
    pub analytics: Vec<AnalyticsRecord>,
}
