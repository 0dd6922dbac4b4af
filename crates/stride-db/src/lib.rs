//! # stride-db: Storage Layer for the Stride Storefront
//!
//! SQLite persistence for the sneaker shop, built on sqlx.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Stride Data Flow                                 │
//! │                                                                         │
//! │  HTTP handler (POST /api/orders)                                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    stride-db (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │  user.rs      │    │  (embedded)  │  │   │
//! │  │   │               │    │  catalog.rs   │    │              │  │   │
//! │  │   │ SqlitePool    │◄───│  order.rs     │    │ 001_init.sql │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite database (WAL mode, foreign keys ON)                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Repositories (user, catalog, order)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stride_db::{Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("./stride.db")).await?;
//! let products = db.catalog().list_products().await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

pub use repository::catalog::CatalogRepository;
pub use repository::order::OrderRepository;
pub use repository::user::UserRepository;
