//! # Catalog Repository
//!
//! Products, per-size stock and categories.
//!
//! ## Stock Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  products            product_sizes                                      │
//! │  ┌────────────┐      ┌──────────────────────────┐                       │
//! │  │ id: 1      │──────│ (1, "42")   stock: 5     │                       │
//! │  │ Air Jordan │      │ (1, "42.5") stock: 3     │                       │
//! │  │ 19999 cents│      │ (1, "43")   stock: 0     │                       │
//! │  └────────────┘      └──────────────────────────┘                       │
//! │                                                                         │
//! │  Stock lives per (product, size) pair. A product with no rows in        │
//! │  product_sizes simply has nothing on the shelf.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;

// =============================================================================
// Records
// =============================================================================

/// A catalog product, joined with its category name for listings.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProductRecord {
    pub id: i64,
    pub name: String,
    pub brand: Option<String>,
    pub description: Option<String>,
    pub price_cents: i64,
    pub image_url: Option<String>,
    pub category_id: Option<i64>,
    pub category_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Stock for one size of a product.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct SizeRecord {
    pub size: String,
    pub stock: i64,
}

/// A product category.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CategoryRecord {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

/// Fields for a new catalog product.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub brand: Option<String>,
    pub description: Option<String>,
    pub price_cents: i64,
    pub image_url: Option<String>,
    pub category_id: Option<i64>,
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for catalog operations.
#[derive(Debug, Clone)]
pub struct CatalogRepository {
    pool: SqlitePool,
}

impl CatalogRepository {
    /// Creates a new CatalogRepository.
    pub fn new(pool: SqlitePool) -> Self {
        CatalogRepository { pool }
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// Lists the whole catalog, newest first, with category names resolved.
    pub async fn list_products(&self) -> DbResult<Vec<ProductRecord>> {
        let products = sqlx::query_as::<_, ProductRecord>(
            r#"
            SELECT p.id, p.name, p.brand, p.description, p.price_cents,
                   p.image_url, p.category_id, c.name AS category_name,
                   p.created_at
            FROM products p
            LEFT JOIN categories c ON p.category_id = c.id
            ORDER BY p.created_at DESC, p.id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    /// Fetches one product by id.
    pub async fn get_product(&self, id: i64) -> DbResult<Option<ProductRecord>> {
        let product = sqlx::query_as::<_, ProductRecord>(
            r#"
            SELECT p.id, p.name, p.brand, p.description, p.price_cents,
                   p.image_url, p.category_id, c.name AS category_name,
                   p.created_at
            FROM products p
            LEFT JOIN categories c ON p.category_id = c.id
            WHERE p.id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    /// Inserts a product and returns its generated id.
    pub async fn create_product(&self, product: &NewProduct) -> DbResult<i64> {
        debug!(name = %product.name, "Creating product");

        let now = Utc::now();
        let result = sqlx::query(
            r#"
            INSERT INTO products (name, brand, description, price_cents,
                                  image_url, category_id, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
        )
        .bind(&product.name)
        .bind(&product.brand)
        .bind(&product.description)
        .bind(product.price_cents)
        .bind(&product.image_url)
        .bind(product.category_id)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    // =========================================================================
    // Sizes & Stock
    // =========================================================================

    /// Lists the size rows for a product in numeric size order
    /// ("9" before "10", which plain TEXT ordering gets wrong).
    pub async fn sizes_for(&self, product_id: i64) -> DbResult<Vec<SizeRecord>> {
        let sizes = sqlx::query_as::<_, SizeRecord>(
            r#"
            SELECT size, stock
            FROM product_sizes
            WHERE product_id = ?1
            ORDER BY CAST(size AS REAL)
            "#,
        )
        .bind(product_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(sizes)
    }

    /// Current stock for one (product, size) pair, `None` when the size is
    /// not carried at all.
    pub async fn stock_for(&self, product_id: i64, size: &str) -> DbResult<Option<i64>> {
        let stock = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT stock FROM product_sizes
            WHERE product_id = ?1 AND size = ?2
            "#,
        )
        .bind(product_id)
        .bind(size)
        .fetch_optional(&self.pool)
        .await?;

        Ok(stock)
    }

    /// Creates or replaces the stock level for a (product, size) pair.
    pub async fn set_stock(&self, product_id: i64, size: &str, stock: i64) -> DbResult<()> {
        sqlx::query(
            r#"
            INSERT INTO product_sizes (product_id, size, stock)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(product_id, size) DO UPDATE SET stock = excluded.stock
            "#,
        )
        .bind(product_id)
        .bind(size)
        .bind(stock)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    // =========================================================================
    // Categories
    // =========================================================================

    /// Lists all categories.
    pub async fn list_categories(&self) -> DbResult<Vec<CategoryRecord>> {
        let categories = sqlx::query_as::<_, CategoryRecord>(
            "SELECT id, name, description FROM categories ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(categories)
    }

    /// Inserts a category and returns its generated id.
    pub async fn create_category(&self, name: &str, description: Option<&str>) -> DbResult<i64> {
        let result = sqlx::query("INSERT INTO categories (name, description) VALUES (?1, ?2)")
            .bind(name)
            .bind(description)
            .execute(&self.pool)
            .await?;

        Ok(result.last_insert_rowid())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    fn sneaker(name: &str, price_cents: i64, category_id: Option<i64>) -> NewProduct {
        NewProduct {
            name: name.to_string(),
            brand: Some("Nike".to_string()),
            description: None,
            price_cents,
            image_url: Some(format!("/img/{}.jpg", name.to_lowercase().replace(' ', "-"))),
            category_id,
        }
    }

    #[tokio::test]
    async fn test_product_crud_with_category_name() {
        let db = test_db().await;
        let catalog = db.catalog();

        let cat = catalog.create_category("Running", Some("Road shoes")).await.unwrap();
        let id = catalog.create_product(&sneaker("Pegasus 41", 12_999, Some(cat))).await.unwrap();

        let product = catalog.get_product(id).await.unwrap().unwrap();
        assert_eq!(product.name, "Pegasus 41");
        assert_eq!(product.price_cents, 12_999);
        assert_eq!(product.category_name.as_deref(), Some("Running"));

        assert!(catalog.get_product(id + 100).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_uncategorized_product_lists_with_null_category() {
        let db = test_db().await;
        let catalog = db.catalog();

        catalog.create_product(&sneaker("Blazer Mid", 9_999, None)).await.unwrap();

        let listed = catalog.list_products().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert!(listed[0].category_name.is_none());
    }

    #[tokio::test]
    async fn test_sizes_sort_numerically() {
        let db = test_db().await;
        let catalog = db.catalog();

        let id = catalog.create_product(&sneaker("Air Jordan 1", 19_999, None)).await.unwrap();
        catalog.set_stock(id, "42.5", 3).await.unwrap();
        catalog.set_stock(id, "9", 1).await.unwrap();
        catalog.set_stock(id, "10", 2).await.unwrap();

        let sizes: Vec<String> = catalog
            .sizes_for(id)
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.size)
            .collect();

        // Numeric order, not lexicographic ("10" < "9" as text)
        assert_eq!(sizes, vec!["9", "10", "42.5"]);
    }

    #[tokio::test]
    async fn test_stock_for() {
        let db = test_db().await;
        let catalog = db.catalog();

        let id = catalog.create_product(&sneaker("Dunk Low", 11_999, None)).await.unwrap();
        catalog.set_stock(id, "42", 5).await.unwrap();

        assert_eq!(catalog.stock_for(id, "42").await.unwrap(), Some(5));
        assert_eq!(catalog.stock_for(id, "47").await.unwrap(), None);

        // set_stock replaces an existing level
        catalog.set_stock(id, "42", 2).await.unwrap();
        assert_eq!(catalog.stock_for(id, "42").await.unwrap(), Some(2));
    }
}
