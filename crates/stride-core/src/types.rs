//! # Domain Types
//!
//! Shared storefront types used across the storage layer and the API.
//!
//! These are deliberately thin: the storage layer owns its row records, and
//! the API owns its response DTOs. What lives here is the vocabulary both
//! sides agree on — the order lifecycle, the shape of a requested order line
//! and the shipping details attached to an order.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

// =============================================================================
// Order Status
// =============================================================================

/// Lifecycle state of a placed order.
///
/// Orders are created as [`OrderStatus::Pending`]; the remaining states are
/// driven by fulfilment, outside this codebase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// The canonical database/API representation.
    pub const fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "processing" => Ok(OrderStatus::Processing),
            "shipped" => Ok(OrderStatus::Shipped),
            "delivered" => Ok(OrderStatus::Delivered),
            "cancelled" => Ok(OrderStatus::Cancelled),
            _ => Err(ValidationError::InvalidFormat {
                field: "order status".to_string(),
            }),
        }
    }
}

// =============================================================================
// Order Request Shapes
// =============================================================================

/// One requested line of a new order: identities and a quantity, nothing else.
///
/// ## Contract
/// The caller never supplies a price. Unit prices are read from the catalog
/// inside the order transaction and snapshotted into the stored line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrderLine {
    /// Catalog product id.
    pub product_id: i64,

    /// Shoe size as a string ("42.5" stays "42.5", never 42.5f64).
    pub size: String,

    /// Requested quantity, must be positive.
    pub quantity: i64,
}

/// Shipping fields attached to an order header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingDetails {
    pub address: String,
    pub city: String,
    pub postal_code: String,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_roundtrip() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Processing,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Cancelled,
        ] {
            assert_eq!(status.as_str().parse::<OrderStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_order_status_rejects_unknown() {
        assert!("returned".parse::<OrderStatus>().is_err());
        assert!("Pending".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_new_order_line_json_shape() {
        let line: NewOrderLine =
            serde_json::from_str(r#"{"productId": 3, "size": "42.5", "quantity": 2}"#).unwrap();
        assert_eq!(line.product_id, 3);
        assert_eq!(line.size, "42.5");
        assert_eq!(line.quantity, 2);
    }
}
