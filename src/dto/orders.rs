use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::{Order, Token},
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    pub student_id: Option<String>,
    pub student_name: Option<String>,
    pub menu_item_id: Option<i64>,
    pub quantity: Option<i32>,
    pub pickup_time: Option<String>,
}

pub struct ValidOrder {
    pub student_id: String,
    pub student_name: String,
    pub menu_item_id: i64,
    pub quantity: i32,
    pub pickup_time: Option<String>,
}

impl CreateOrderRequest {
    pub fn validate(self) -> AppResult<ValidOrder> {
        let (Some(student_id), Some(student_name), Some(menu_item_id), Some(quantity)) = (
            self.student_id.filter(|s| !s.is_empty()),
            self.student_name.filter(|s| !s.is_empty()),
            self.menu_item_id,
            self.quantity.filter(|q| *q > 0),
        ) else {
            return Err(AppError::BadRequest(
                "Student ID, name, menu item ID, and quantity are required".into(),
            ));
        };
        Ok(ValidOrder {
            student_id,
            student_name,
            menu_item_id,
            quantity,
            pickup_time: self.pickup_time,
        })
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateStatusRequest {
    pub status: Option<String>,
}

impl UpdateStatusRequest {
    pub fn validate(self) -> AppResult<String> {
        self.status
            .filter(|s| !s.is_empty())
            .ok_or_else(|| AppError::BadRequest("Status is required".into()))
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderListResponse {
    pub orders: Vec<Order>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderResponse {
    pub order: Order,
}

/// Response of order placement. `token` is null when issuance failed after
/// the order itself was committed.
#[derive(Debug, Serialize, ToSchema)]
pub struct OrderWithTokenResponse {
    pub order: Order,
    pub token: Option<Token>,
}

#[cfg(test)]
mod tests {
    use super::CreateOrderRequest;

    fn base() -> CreateOrderRequest {
        CreateOrderRequest {
            student_id: Some("S1".into()),
            student_name: Some("Ann".into()),
            menu_item_id: Some(1),
            quantity: Some(3),
            pickup_time: None,
        }
    }

    #[test]
    fn complete_request_passes() {
        assert!(base().validate().is_ok());
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let mut req = base();
        req.quantity = Some(0);
        assert!(req.validate().is_err());
    }

    #[test]
    fn missing_student_name_is_rejected() {
        let mut req = base();
        req.student_name = None;
        assert!(req.validate().is_err());
    }
}
