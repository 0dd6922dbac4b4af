//! # Cart Module
//!
//! The shopping cart value object.
//!
//! ## Line Identity
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  A cart line is identified by (product_id, size), NOT product_id.       │
//! │                                                                         │
//! │  Air Jordan 1, size 42   ─┐                                             │
//! │  Air Jordan 1, size 43   ─┼─► three separate lines                      │
//! │  Stan Smith,   size 42   ─┘                                             │
//! │                                                                         │
//! │  Adding (Air Jordan 1, 42) again merges into the existing line by       │
//! │  summing quantities. It never creates a duplicate line.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cart is a plain value: no locking, no persistence, no I/O. Callers
//! serialize it with [`Cart::to_json`] and restore it with [`Cart::from_json`],
//! which silently drops malformed lines instead of failing the whole cart.

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::validation::is_valid_cart_item;

// =============================================================================
// Cart Item
// =============================================================================

/// One line in a cart: a product in a specific size, with a snapshot of the
/// display name, price and image taken at the moment it was added.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product_id: i64,
    pub name: String,
    pub price: Money,
    #[serde(default)]
    pub image: Option<String>,
    pub size: String,
    pub quantity: i64,
}

impl CartItem {
    /// Line subtotal: unit price times quantity.
    pub fn subtotal(&self) -> Money {
        self.price.multiply_quantity(self.quantity)
    }

    fn matches(&self, product_id: i64, size: &str) -> bool {
        self.product_id == product_id && self.size == size
    }
}

// =============================================================================
// Cart
// =============================================================================

/// An in-progress shopping cart.
///
/// ## Example
/// ```rust
/// use stride_core::{Cart, Money};
///
/// let mut cart = Cart::new();
/// cart.add_item(1, "Air Jordan 1", Money::from_cents(19_999), None, "42", 1);
/// cart.add_item(1, "Air Jordan 1", Money::from_cents(19_999), None, "42", 2);
///
/// assert_eq!(cart.items().len(), 1); // merged, not duplicated
/// assert_eq!(cart.item_count(), 3);
/// assert_eq!(cart.total(), Money::from_cents(59_997));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Cart { items: Vec::new() }
    }

    /// The cart lines, in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// True when the cart holds no lines.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds a product in a size, merging into an existing line when the same
    /// (product, size) pair is already in the cart.
    pub fn add_item(
        &mut self,
        product_id: i64,
        name: &str,
        price: Money,
        image: Option<&str>,
        size: &str,
        quantity: i64,
    ) {
        if let Some(existing) = self
            .items
            .iter_mut()
            .find(|item| item.matches(product_id, size))
        {
            existing.quantity += quantity;
            return;
        }

        self.items.push(CartItem {
            product_id,
            name: name.to_string(),
            price,
            image: image.map(str::to_string),
            size: size.to_string(),
            quantity,
        });
    }

    /// Removes the (product, size) line entirely. A miss is a no-op.
    pub fn remove_item(&mut self, product_id: i64, size: &str) {
        self.items.retain(|item| !item.matches(product_id, size));
    }

    /// Sets the quantity of a line; zero or negative removes the line.
    pub fn update_quantity(&mut self, product_id: i64, size: &str, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(product_id, size);
            return;
        }

        if let Some(item) = self
            .items
            .iter_mut()
            .find(|item| item.matches(product_id, size))
        {
            item.quantity = quantity;
        }
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Finds a line by (product, size).
    pub fn find(&self, product_id: i64, size: &str) -> Option<&CartItem> {
        self.items.iter().find(|item| item.matches(product_id, size))
    }

    /// Sum of all line subtotals.
    pub fn total(&self) -> Money {
        self.items
            .iter()
            .fold(Money::zero(), |sum, item| sum + item.subtotal())
    }

    /// Total unit count across all lines.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|item| item.quantity).sum()
    }

    /// Number of distinct products, ignoring sizes.
    pub fn unique_product_count(&self) -> usize {
        let mut ids: Vec<i64> = self.items.iter().map(|item| item.product_id).collect();
        ids.sort_unstable();
        ids.dedup();
        ids.len()
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Serializes the cart to its JSON persistence form (a bare line array).
    pub fn to_json(&self) -> String {
        // A Vec of plain structs cannot fail to serialize.
        serde_json::to_string(&self.items).unwrap_or_else(|_| "[]".to_string())
    }

    /// Restores a cart from its JSON persistence form.
    ///
    /// Unparseable input yields an empty cart; lines that parse but fail the
    /// shape check are dropped individually. Stored carts outlive code
    /// changes, so restoring is lenient by contract.
    pub fn from_json(json: &str) -> Self {
        let parsed: Vec<CartItem> = serde_json::from_str(json).unwrap_or_default();
        Cart {
            items: parsed.into_iter().filter(is_valid_cart_item).collect(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn jordan(cart: &mut Cart, size: &str, qty: i64) {
        cart.add_item(1, "Air Jordan 1", Money::from_cents(19_999), None, size, qty);
    }

    #[test]
    fn test_add_merges_same_product_and_size() {
        let mut cart = Cart::new();
        jordan(&mut cart, "42", 1);
        jordan(&mut cart, "42", 2);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.find(1, "42").unwrap().quantity, 3);
    }

    #[test]
    fn test_same_product_different_size_is_a_new_line() {
        let mut cart = Cart::new();
        jordan(&mut cart, "42", 1);
        jordan(&mut cart, "43", 1);

        assert_eq!(cart.items().len(), 2);
        assert_eq!(cart.unique_product_count(), 1);
    }

    #[test]
    fn test_totals() {
        let mut cart = Cart::new();
        jordan(&mut cart, "42", 2);
        cart.add_item(2, "Stan Smith", Money::from_cents(9_999), None, "41", 1);

        assert_eq!(cart.total(), Money::from_cents(49_997));
        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.unique_product_count(), 2);
    }

    #[test]
    fn test_empty_cart_totals() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::zero());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.unique_product_count(), 0);
    }

    #[test]
    fn test_remove_item() {
        let mut cart = Cart::new();
        jordan(&mut cart, "42", 1);
        jordan(&mut cart, "43", 1);

        cart.remove_item(1, "42");
        assert_eq!(cart.items().len(), 1);
        assert!(cart.find(1, "42").is_none());
        assert!(cart.find(1, "43").is_some());

        // Removing a missing line is a no-op
        cart.remove_item(99, "42");
        assert_eq!(cart.items().len(), 1);
    }

    #[test]
    fn test_update_quantity() {
        let mut cart = Cart::new();
        jordan(&mut cart, "42", 1);

        cart.update_quantity(1, "42", 5);
        assert_eq!(cart.find(1, "42").unwrap().quantity, 5);

        cart.update_quantity(1, "42", 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        jordan(&mut cart, "42", 2);
        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_json_round_trip() {
        let mut cart = Cart::new();
        cart.add_item(
            1,
            "Air Jordan 1",
            Money::from_cents(19_999),
            Some("/img/aj1.jpg"),
            "42.5",
            2,
        );

        let json = cart.to_json();
        assert!(json.contains("\"productId\":1"));
        assert!(json.contains("\"size\":\"42.5\""));

        let restored = Cart::from_json(&json);
        assert_eq!(restored, cart);
    }

    #[test]
    fn test_from_json_drops_malformed_lines() {
        // Second line has a non-positive quantity; it is dropped, not fatal.
        let json = r#"[
            {"productId": 1, "name": "Air Jordan 1", "price": 19999, "size": "42", "quantity": 1},
            {"productId": 2, "name": "Stan Smith", "price": 9999, "size": "41", "quantity": 0}
        ]"#;

        let cart = Cart::from_json(json);
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].product_id, 1);
    }

    #[test]
    fn test_from_json_garbage_is_empty_cart() {
        assert!(Cart::from_json("not json").is_empty());
        assert!(Cart::from_json("{}").is_empty());
    }
}
