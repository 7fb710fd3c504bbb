use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::{Token, TokenWithOrder},
};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTokenRequest {
    pub order_id: Option<i64>,
}

impl CreateTokenRequest {
    pub fn validate(self) -> AppResult<i64> {
        self.order_id
            .ok_or_else(|| AppError::BadRequest("Order ID is required".into()))
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TokenListResponse {
    pub tokens: Vec<TokenWithOrder>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TokenDetailResponse {
    pub token: TokenWithOrder,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TokenCreatedResponse {
    pub token: Token,
}

/// Plain token rows for the per-order lookup, which skips the order join.
#[derive(Debug, Serialize, ToSchema)]
pub struct OrderTokensResponse {
    pub tokens: Vec<Token>,
}
