//! # Repository Module
//!
//! Database repository implementations for the Stride storefront.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  HTTP handler                                                           │
//! │       │                                                                 │
//! │       │  db.orders().create(user_id, &items, &shipping)                 │
//! │       ▼                                                                 │
//! │  OrderRepository                                                        │
//! │  ├── create(&self, ...)        ← the order transaction                  │
//! │  ├── list_for_user(&self, ...)                                          │
//! │  └── items_for(&self, ...)                                              │
//! │       │                                                                 │
//! │       │  SQL                                                            │
//! │       ▼                                                                 │
//! │  SQLite database                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! SQL lives only in this module; handlers never see a query string.
//!
//! ## Available Repositories
//!
//! - [`user::UserRepository`] - Account creation and lookup
//! - [`catalog::CatalogRepository`] - Products, per-size stock, categories
//! - [`order::OrderRepository`] - Order placement and history

pub mod catalog;
pub mod order;
pub mod user;
