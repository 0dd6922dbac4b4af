//! Catalog routes: products, per-size stock, categories.

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;

use stride_db::repository::catalog::{CategoryRecord, ProductRecord, SizeRecord};

use crate::error::{ApiError, ApiResult};
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/products", get(list_products))
        .route("/api/products/:id", get(get_product))
        .route("/api/categories", get(list_categories))
}

// =============================================================================
// Wire Shapes
// =============================================================================

/// A catalog product. `price` is integer cents.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: i64,
    pub name: String,
    pub brand: Option<String>,
    pub description: Option<String>,
    pub price: i64,
    pub image_url: Option<String>,
    pub category_id: Option<i64>,
    pub category_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<ProductRecord> for ProductDto {
    fn from(record: ProductRecord) -> Self {
        ProductDto {
            id: record.id,
            name: record.name,
            brand: record.brand,
            description: record.description,
            price: record.price_cents,
            image_url: record.image_url,
            category_id: record.category_id,
            category_name: record.category_name,
            created_at: record.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SizeDto {
    pub size: String,
    pub stock: i64,
}

/// Product detail: the product plus every size row.
#[derive(Debug, Serialize)]
pub struct ProductDetailDto {
    #[serde(flatten)]
    pub product: ProductDto,
    pub sizes: Vec<SizeDto>,
}

#[derive(Debug, Serialize)]
pub struct CategoryDto {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

// =============================================================================
// Handlers
// =============================================================================

/// GET /api/products
async fn list_products(State(state): State<AppState>) -> ApiResult<Json<Vec<ProductDto>>> {
    let products = state.db.catalog().list_products().await?;
    Ok(Json(products.into_iter().map(ProductDto::from).collect()))
}

/// GET /api/products/:id
async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<ProductDetailDto>> {
    let catalog = state.db.catalog();

    let product = catalog
        .get_product(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Product".to_string()))?;

    let sizes = catalog
        .sizes_for(id)
        .await?
        .into_iter()
        .map(|SizeRecord { size, stock }| SizeDto { size, stock })
        .collect();

    Ok(Json(ProductDetailDto {
        product: product.into(),
        sizes,
    }))
}

/// GET /api/categories
async fn list_categories(State(state): State<AppState>) -> ApiResult<Json<Vec<CategoryDto>>> {
    let categories = state.db.catalog().list_categories().await?;

    Ok(Json(
        categories
            .into_iter()
            .map(|CategoryRecord { id, name, description }| CategoryDto {
                id,
                name,
                description,
            })
            .collect(),
    ))
}

// =============================================================================
// Router Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::JwtManager;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use stride_db::repository::catalog::NewProduct;
    use stride_db::{Database, DbConfig};
    use tower::ServiceExt;

    async fn test_app() -> (Router, Database) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let state = AppState::new(db.clone(), JwtManager::new("test-secret".to_string(), 3600));
        (crate::build_router(state), db)
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_product_listing_shape() {
        let (app, db) = test_app().await;
        let catalog = db.catalog();

        let cat = catalog.create_category("Running", None).await.unwrap();
        catalog
            .create_product(&NewProduct {
                name: "Pegasus 41".to_string(),
                brand: Some("Nike".to_string()),
                description: None,
                price_cents: 12_999,
                image_url: Some("/images/pegasus-41.jpg".to_string()),
                category_id: Some(cat),
            })
            .await
            .unwrap();

        let (status, body) = get_json(app, "/api/products").await;
        assert_eq!(status, StatusCode::OK);

        let listed = body.as_array().unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0]["name"], "Pegasus 41");
        assert_eq!(listed[0]["price"], 12_999);
        assert_eq!(listed[0]["categoryName"], "Running");
        assert_eq!(listed[0]["imageUrl"], "/images/pegasus-41.jpg");
    }

    #[tokio::test]
    async fn test_product_detail_includes_sizes() {
        let (app, db) = test_app().await;
        let catalog = db.catalog();

        let id = catalog
            .create_product(&NewProduct {
                name: "Air Jordan 1".to_string(),
                brand: Some("Nike".to_string()),
                description: None,
                price_cents: 19_999,
                image_url: None,
                category_id: None,
            })
            .await
            .unwrap();
        catalog.set_stock(id, "42", 5).await.unwrap();
        catalog.set_stock(id, "42.5", 0).await.unwrap();

        let (status, body) = get_json(app, &format!("/api/products/{id}")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Air Jordan 1");

        let sizes = body["sizes"].as_array().unwrap();
        assert_eq!(sizes.len(), 2);
        assert_eq!(sizes[0], serde_json::json!({"size": "42", "stock": 5}));
        // Sold-out sizes still appear; the client decides how to render them
        assert_eq!(sizes[1]["stock"], 0);
    }

    #[tokio::test]
    async fn test_missing_product_is_404() {
        let (app, _db) = test_app().await;
        let (status, body) = get_json(app, "/api/products/999").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Product not found");
    }

    #[tokio::test]
    async fn test_categories() {
        let (app, db) = test_app().await;
        db.catalog().create_category("Running", Some("Road shoes")).await.unwrap();
        db.catalog().create_category("Lifestyle", None).await.unwrap();

        let (status, body) = get_json(app, "/api/categories").await;
        assert_eq!(status, StatusCode::OK);
        let cats = body.as_array().unwrap();
        assert_eq!(cats.len(), 2);
        assert_eq!(cats[0]["name"], "Running");
        assert_eq!(cats[0]["description"], "Road shoes");
    }

    #[tokio::test]
    async fn test_health() {
        let (app, _db) = test_app().await;
        let (status, body) = get_json(app, "/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert!(body["timestamp"].is_string());
    }
}
