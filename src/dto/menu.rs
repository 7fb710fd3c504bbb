use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::MenuItem,
};

/// Create and update share a body shape; fields are optional so that a
/// missing one produces a 400 with a message instead of a rejected parse.
#[derive(Debug, Deserialize, ToSchema)]
pub struct MenuItemRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub available: Option<bool>,
}

pub struct ValidMenuItem {
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub category: String,
    pub available: bool,
}

impl MenuItemRequest {
    pub fn validate(self) -> AppResult<ValidMenuItem> {
        let (Some(name), Some(price), Some(category)) = (
            self.name.filter(|n| !n.is_empty()),
            self.price.filter(|p| *p > 0.0),
            self.category.filter(|c| !c.is_empty()),
        ) else {
            return Err(AppError::BadRequest(
                "Name, price, and category are required".into(),
            ));
        };
        Ok(ValidMenuItem {
            name,
            description: self.description,
            price,
            category,
            available: self.available.unwrap_or(true),
        })
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MenuListResponse {
    pub menus: Vec<MenuItem>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MenuResponse {
    pub menu: MenuItem,
}

#[cfg(test)]
mod tests {
    use super::MenuItemRequest;

    #[test]
    fn missing_price_is_rejected() {
        let req = MenuItemRequest {
            name: Some("Dal Rice".into()),
            description: None,
            price: None,
            category: Some("Lunch".into()),
            available: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn zero_or_negative_price_is_rejected() {
        for price in [0.0, -5.0] {
            let req = MenuItemRequest {
                name: Some("Dal Rice".into()),
                description: None,
                price: Some(price),
                category: Some("Lunch".into()),
                available: None,
            };
            assert!(req.validate().is_err(), "price {price} should be rejected");
        }
    }

    #[test]
    fn available_defaults_to_true() {
        let req = MenuItemRequest {
            name: Some("Dal Rice".into()),
            description: Some("with papad".into()),
            price: Some(45.0),
            category: Some("Lunch".into()),
            available: None,
        };
        let valid = req.validate().unwrap();
        assert!(valid.available);
    }
}
