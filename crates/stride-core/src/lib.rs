//! # stride-core: Pure Business Logic for the Stride Storefront
//!
//! This crate is the heart of the Stride sneaker shop. It contains all
//! business rules as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Stride Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     apps/api (axum)                             │   │
//! │  │    /auth/* ──► /products ──► /categories ──► /orders           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ stride-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   money   │  │   cart    │  │ validation│  │  paging   │  │   │
//! │  │   │  Money    │  │   Cart    │  │   rules   │  │ reference │  │   │
//! │  │   │ shipping  │  │ CartItem  │  │  reports  │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 stride-db (Storage Layer)                       │   │
//! │  │        SQLite queries, migrations, the order transaction        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (OrderStatus, NewOrderLine, ShippingDetails)
//! - [`money`] - Money type with integer cent arithmetic (no floating point
//!   in stored amounts), price formatting, discounts, shipping
//! - [`cart`] - The cart value object with (product, size) line identity
//! - [`validation`] - Input validation predicates and accumulating reports
//! - [`paging`] - Slice pagination with clamped page/limit
//! - [`reference`] - Human-facing order reference generation
//! - [`error`] - Validation error types
//!
//! ## Design Principles
//!
//! 1. **Pure functions**: same input, same output (the order reference is the
//!    one wall-clock exception, and it is display-only)
//! 2. **Integer money**: all monetary values are cents (i64)
//! 3. **Explicit errors**: typed errors or accumulated message reports,
//!    never panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod paging;
pub mod reference;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartItem};
pub use error::{ValidationError, ValidationReport};
pub use money::Money;
pub use types::{NewOrderLine, OrderStatus, ShippingDetails};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity of a single (product, size) line in a cart or order.
///
/// ## Business Reason
/// Prevents accidental over-ordering (e.g. typing 999 instead of 9) and
/// bounds a single order to something a shoe shop can actually fulfil.
pub const MAX_ITEM_QUANTITY: i64 = 99;

/// Smallest shoe size sold (EU sizing).
pub const MIN_SHOE_SIZE: f64 = 35.0;

/// Largest shoe size sold (EU sizing).
pub const MAX_SHOE_SIZE: f64 = 50.0;

/// Order totals at or above this amount ship for free (cents).
pub const FREE_SHIPPING_THRESHOLD: Money = Money::from_cents(10_000);

/// Flat shipping cost below the free threshold (cents).
pub const STANDARD_SHIPPING_COST: Money = Money::from_cents(500);

/// Default page size for paginated listings.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Hard ceiling on requested page sizes.
pub const MAX_PAGE_SIZE: usize = 100;
