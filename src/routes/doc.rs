use utoipa::OpenApi;
use utoipa::openapi::OpenApi as OpenApiSpec;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        analytics::{RecordAnalyticsRequest, RecordListResponse, SummaryResponse, WasteListResponse},
        menu::{MenuItemRequest, MenuListResponse, MenuResponse},
        orders::{
            CreateOrderRequest, OrderListResponse, OrderResponse, OrderWithTokenResponse,
            UpdateStatusRequest,
        },
        tokens::{
            CreateTokenRequest, OrderTokensResponse, TokenCreatedResponse, TokenDetailResponse,
            TokenListResponse,
        },
    },
    models::{AnalyticsRecord, MenuItem, Order, Token, TokenWithOrder, WasteRow, WasteSummary},
    response::{ErrorBody, MessageBody},
    routes::{analytics, health, menu, orders, tokens},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        menu::list_menu,
        menu::list_by_category,
        menu::get_menu_item,
        menu::create_menu_item,
        menu::update_menu_item,
        menu::delete_menu_item,
        orders::list_orders,
        orders::list_student_orders,
        orders::get_order,
        orders::create_order,
        orders::update_order_status,
        orders::delete_order,
        tokens::list_tokens,
        tokens::get_token,
        tokens::get_token_by_number,
        tokens::list_order_tokens,
        tokens::create_token,
        tokens::update_token_status,
        tokens::use_token,
        tokens::delete_token,
        analytics::list_waste,
        analytics::get_summary,
        analytics::record_analytics,
        analytics::list_menu_item_analytics
    ),
    components(
        schemas(
            MenuItem,
            Order,
            Token,
            TokenWithOrder,
            AnalyticsRecord,
            WasteRow,
            WasteSummary,
            MenuItemRequest,
            MenuListResponse,
            MenuResponse,
            CreateOrderRequest,
            UpdateStatusRequest,
            OrderListResponse,
            OrderResponse,
            OrderWithTokenResponse,
            CreateTokenRequest,
            TokenListResponse,
            TokenDetailResponse,
            TokenCreatedResponse,
            OrderTokensResponse,
            RecordAnalyticsRequest,
            WasteListResponse,
            SummaryResponse,
            RecordListResponse,
            ErrorBody,
            MessageBody
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Menu", description = "Menu catalog endpoints"),
        (name = "Orders", description = "Order ledger endpoints"),
        (name = "Tokens", description = "Pickup token endpoints"),
        (name = "Analytics", description = "Waste analytics endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
