//! Order routes: placement and history. Both require a bearer token.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use stride_core::validation::validate_order_data;
use stride_core::{NewOrderLine, ShippingDetails};
use stride_db::repository::order::{OrderItemRecord, OrderRecord};

use crate::auth::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/orders", post(create_order).get(list_orders))
}

// =============================================================================
// Wire Shapes
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub items: Vec<NewOrderLine>,
    pub shipping_address: String,
    pub shipping_city: String,
    pub shipping_postal_code: String,
}

/// `totalAmount` is integer cents, computed server-side.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderResponse {
    pub message: String,
    pub order_id: i64,
    pub total_amount: i64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemDto {
    pub id: i64,
    pub product_id: i64,
    pub name: String,
    pub image_url: Option<String>,
    pub size: String,
    pub quantity: i64,
    pub price: i64,
}

impl From<OrderItemRecord> for OrderItemDto {
    fn from(record: OrderItemRecord) -> Self {
        OrderItemDto {
            id: record.id,
            product_id: record.product_id,
            name: record.product_name,
            image_url: record.image_url,
            size: record.size,
            quantity: record.quantity,
            price: record.price_cents,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    pub id: i64,
    pub total_amount: i64,
    pub status: String,
    pub shipping_address: String,
    pub shipping_city: String,
    pub shipping_postal_code: String,
    pub created_at: DateTime<Utc>,
    pub items: Vec<OrderItemDto>,
}

impl OrderDto {
    fn from_parts(order: OrderRecord, items: Vec<OrderItemRecord>) -> Self {
        OrderDto {
            id: order.id,
            total_amount: order.total_cents,
            status: order.status,
            shipping_address: order.shipping_address,
            shipping_city: order.shipping_city,
            shipping_postal_code: order.shipping_postal_code,
            created_at: order.created_at,
            items: items.into_iter().map(OrderItemDto::from).collect(),
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/orders
async fn create_order(
    user: AuthUser,
    State(state): State<AppState>,
    Json(req): Json<CreateOrderRequest>,
) -> ApiResult<(StatusCode, Json<CreateOrderResponse>)> {
    let shipping = ShippingDetails {
        address: req.shipping_address,
        city: req.shipping_city,
        postal_code: req.shipping_postal_code,
    };

    let report = validate_order_data(&req.items, &shipping);
    if !report.is_valid() {
        return Err(ApiError::Validation(report.into_errors()));
    }

    let created = state
        .db
        .orders()
        .create(user.id, &req.items, &shipping)
        .await?;

    info!(
        user_id = user.id,
        order_id = created.order_id,
        total_cents = created.total_cents,
        "Order placed"
    );

    Ok((
        StatusCode::CREATED,
        Json(CreateOrderResponse {
            message: "Order created successfully".to_string(),
            order_id: created.order_id,
            total_amount: created.total_cents,
        }),
    ))
}

/// GET /api/orders
async fn list_orders(user: AuthUser, State(state): State<AppState>) -> ApiResult<Json<Vec<OrderDto>>> {
    let orders_repo = state.db.orders();
    let orders = orders_repo.list_for_user(user.id).await?;

    let mut out = Vec::with_capacity(orders.len());
    for order in orders {
        let items = orders_repo.items_for(order.id).await?;
        out.push(OrderDto::from_parts(order, items));
    }

    Ok(Json(out))
}

// =============================================================================
// Router Tests
// =============================================================================
