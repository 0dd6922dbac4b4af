//! # Order Repository
//!
//! Order placement and history.
//!
//! ## The Order Transaction
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  POST /api/orders → OrderRepository::create                             │
//! │                                                                         │
//! │  BEGIN                                                                  │
//! │   1. For each requested line:                                           │
//! │      └── look up the CURRENT catalog price                              │
//! │          ├── product gone? drop the line silently                       │
//! │          └── else accumulate price × quantity into the total            │
//! │   2. INSERT the order header (status 'pending'), take the new id        │
//! │   3. For each surviving line:                                           │
//! │      ├── INSERT order_items with the SNAPSHOT price                     │
//! │      └── UPDATE product_sizes SET stock = stock - qty                   │
//! │  COMMIT                                                                 │
//! │                                                                         │
//! │  Any failure rolls the whole transaction back: no header, no lines,     │
//! │  no stock movement.                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The total is always computed server-side from catalog prices; client-sent
//! prices never enter this module. The stock decrement is deliberately
//! unguarded: stock may go negative under concurrent orders, and fulfilment
//! reconciles oversold pairs out of band.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use stride_core::{NewOrderLine, OrderStatus, ShippingDetails};

// =============================================================================
// Records
// =============================================================================

/// A stored order header.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct OrderRecord {
    pub id: i64,
    pub user_id: i64,
    pub total_cents: i64,
    pub status: String,
    pub shipping_address: String,
    pub shipping_city: String,
    pub shipping_postal_code: String,
    pub created_at: DateTime<Utc>,
}

/// A stored order line, joined with product display fields.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct OrderItemRecord {
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub size: String,
    pub quantity: i64,
    pub price_cents: i64,
    pub product_name: String,
    pub image_url: Option<String>,
}

/// Outcome of a successful order transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CreatedOrder {
    pub order_id: i64,
    pub total_cents: i64,
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for order operations.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: SqlitePool,
}

impl OrderRepository {
    /// Creates a new OrderRepository.
    pub fn new(pool: SqlitePool) -> Self {
        OrderRepository { pool }
    }

    /// Places an order: one transaction covering price lookup, the header
    /// insert, every line insert and every stock decrement.
    ///
    /// Lines whose product no longer exists are dropped without error; an
    /// order whose lines ALL vanished still commits as an empty order with a
    /// zero total, matching the lenient checkout contract.
    pub async fn create(
        &self,
        user_id: i64,
        items: &[NewOrderLine],
        shipping: &ShippingDetails,
    ) -> DbResult<CreatedOrder> {
        debug!(user_id, line_count = items.len(), "Placing order");

        let mut tx = self.pool.begin().await?;

        // Price every line from the catalog; a missing product drops the line.
        let mut total_cents: i64 = 0;
        let mut priced: Vec<(i64, &NewOrderLine)> = Vec::with_capacity(items.len());
        for line in items {
            let price: Option<i64> =
                sqlx::query_scalar("SELECT price_cents FROM products WHERE id = ?1")
                    .bind(line.product_id)
                    .fetch_optional(&mut *tx)
                    .await?;

            if let Some(price_cents) = price {
                total_cents += price_cents * line.quantity;
                priced.push((price_cents, line));
            } else {
                debug!(product_id = line.product_id, "Dropping line for missing product");
            }
        }

        // Order header, status pending.
        let now = Utc::now();
        let order_id = sqlx::query(
            r#"
            INSERT INTO orders (user_id, total_cents, status,
                                shipping_address, shipping_city, shipping_postal_code,
                                created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
        )
        .bind(user_id)
        .bind(total_cents)
        .bind(OrderStatus::Pending.as_str())
        .bind(&shipping.address)
        .bind(&shipping.city)
        .bind(&shipping.postal_code)
        .bind(now)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        // Lines with snapshot prices, plus the stock decrement.
        for (price_cents, line) in priced {
            sqlx::query(
                r#"
                INSERT INTO order_items (order_id, product_id, size, quantity, price_cents)
                VALUES (?1, ?2, ?3, ?4, ?5)
                "#,
            )
            .bind(order_id)
            .bind(line.product_id)
            .bind(&line.size)
            .bind(line.quantity)
            .bind(price_cents)
            .execute(&mut *tx)
            .await?;

            sqlx::query(
                r#"
                UPDATE product_sizes SET stock = stock - ?1
                WHERE product_id = ?2 AND size = ?3
                "#,
            )
            .bind(line.quantity)
            .bind(line.product_id)
            .bind(&line.size)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        debug!(order_id, total_cents, "Order committed");

        Ok(CreatedOrder {
            order_id,
            total_cents,
        })
    }

    /// Lists a user's orders, newest first.
    pub async fn list_for_user(&self, user_id: i64) -> DbResult<Vec<OrderRecord>> {
        let orders = sqlx::query_as::<_, OrderRecord>(
            r#"
            SELECT id, user_id, total_cents, status,
                   shipping_address, shipping_city, shipping_postal_code,
                   created_at
            FROM orders
            WHERE user_id = ?1
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(orders)
    }

    /// Lines of one order, joined with the product name and image.
    pub async fn items_for(&self, order_id: i64) -> DbResult<Vec<OrderItemRecord>> {
        let items = sqlx::query_as::<_, OrderItemRecord>(
            r#"
            SELECT oi.id, oi.order_id, oi.product_id, oi.size, oi.quantity,
                   oi.price_cents, p.name AS product_name, p.image_url
            FROM order_items oi
            JOIN products p ON oi.product_id = p.id
            WHERE oi.order_id = ?1
            ORDER BY oi.id
            "#,
        )
        .bind(order_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
