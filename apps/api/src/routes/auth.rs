//! Account routes: register, login, profile.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::info;

use stride_core::validation::{validate_user_registration, RegistrationDetails};
use stride_db::repository::user::{NewUser, UserRecord};
use stride_db::DbError;

use crate::auth::{hash_password, verify_password, AuthUser};
use crate::error::{ApiError, ApiResult};
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/auth/me", get(me))
}

// =============================================================================
// Wire Shapes
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Public account fields returned alongside a token.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub token: String,
    pub user: UserDto,
}

/// Full profile, including the optional address block.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDto {
    pub id: i64,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
}

impl From<UserRecord> for ProfileDto {
    fn from(user: UserRecord) -> Self {
        ProfileDto {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            address: user.address,
            city: user.city,
            postal_code: user.postal_code,
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/auth/register
async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    let report = validate_user_registration(&RegistrationDetails {
        email: req.email.clone(),
        password: req.password.clone(),
        first_name: req.first_name.clone(),
        last_name: req.last_name.clone(),
    });
    if !report.is_valid() {
        return Err(ApiError::Validation(report.into_errors()));
    }

    let password_hash = hash_password(&req.password)?;

    let user_id = state
        .db
        .users()
        .create(&NewUser {
            email: req.email.clone(),
            password_hash,
            first_name: req.first_name.clone(),
            last_name: req.last_name.clone(),
        })
        .await
        .map_err(|err| match err {
            DbError::UniqueViolation { .. } => ApiError::EmailTaken,
            other => other.into(),
        })?;

    info!(user_id, "Account registered");

    let token = state.jwt.generate_token(user_id, &req.email)?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: Some("User registered successfully".to_string()),
            token,
            user: UserDto {
                id: user_id,
                email: req.email,
                first_name: req.first_name,
                last_name: req.last_name,
            },
        }),
    ))
}

/// POST /api/auth/login
///
/// Unknown email and wrong password return the identical response; the
/// client learns only that the pair did not match.
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let user = state
        .db
        .users()
        .find_by_email(&req.email)
        .await?
        .ok_or(ApiError::InvalidCredentials)?;

    if !verify_password(&req.password, &user.password_hash) {
        return Err(ApiError::InvalidCredentials);
    }

    let token = state.jwt.generate_token(user.id, &user.email)?;

    Ok(Json(AuthResponse {
        message: None,
        token,
        user: UserDto {
            id: user.id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
        },
    }))
}

/// GET /api/auth/me
async fn me(user: AuthUser, State(state): State<AppState>) -> ApiResult<Json<ProfileDto>> {
    let record = state
        .db
        .users()
        .find_by_id(user.id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User".to_string()))?;

    Ok(Json(record.into()))
}

// =============================================================================
// Router Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::JwtManager;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request};
    use serde_json::{json, Value};
    use stride_db::{Database, DbConfig};
    use tower::ServiceExt;

    async fn test_app() -> Router {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let state = AppState::new(db, JwtManager::new("test-secret".to_string(), 3600));
        crate::build_router(state)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn register_body() -> Value {
        json!({
            "email": "ana@example.com",
            "password": "secret1",
            "firstName": "Ana",
            "lastName": "Novak"
        })
    }

    #[tokio::test]
    async fn test_register_issues_token() {
        let app = test_app().await;

        let response = app
            .oneshot(post_json("/api/auth/register", register_body()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["message"], "User registered successfully");
        assert!(body["token"].as_str().unwrap().contains('.'));
        assert_eq!(body["user"]["firstName"], "Ana");
        assert!(body["user"]["id"].as_i64().unwrap() > 0);
    }

    #[tokio::test]
    async fn test_register_validation_collects_messages() {
        let app = test_app().await;

        let response = app
            .oneshot(post_json(
                "/api/auth/register",
                json!({"email": "bad", "password": "ab", "firstName": "A", "lastName": ""}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["errors"].as_array().unwrap().len(), 4);
        assert_eq!(body["errors"][0], "Invalid email format");
    }

    #[tokio::test]
    async fn test_duplicate_email_is_400() {
        let app = test_app().await;

        let first = app
            .clone()
            .oneshot(post_json("/api/auth/register", register_body()))
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::CREATED);

        let second = app
            .oneshot(post_json("/api/auth/register", register_body()))
            .await
            .unwrap();
        assert_eq!(second.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(second).await["error"], "Email already registered");
    }

    #[tokio::test]
    async fn test_login_and_me() {
        let app = test_app().await;

        app.clone()
            .oneshot(post_json("/api/auth/register", register_body()))
            .await
            .unwrap();

        let login = app
            .clone()
            .oneshot(post_json(
                "/api/auth/login",
                json!({"email": "ana@example.com", "password": "secret1"}),
            ))
            .await
            .unwrap();
        assert_eq!(login.status(), StatusCode::OK);
        let token = body_json(login).await["token"].as_str().unwrap().to_string();

        let me = app
            .oneshot(
                Request::builder()
                    .uri("/api/auth/me")
                    .header(header::AUTHORIZATION, format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(me.status(), StatusCode::OK);
        let profile = body_json(me).await;
        assert_eq!(profile["email"], "ana@example.com");
        assert_eq!(profile["lastName"], "Novak");
        assert!(profile["address"].is_null());
    }

    #[tokio::test]
    async fn test_login_rejects_bad_password() {
        let app = test_app().await;

        app.clone()
            .oneshot(post_json("/api/auth/register", register_body()))
            .await
            .unwrap();

        let login = app
            .oneshot(post_json(
                "/api/auth/login",
                json!({"email": "ana@example.com", "password": "wrong-password"}),
            ))
            .await
            .unwrap();

        assert_eq!(login.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(login).await["error"], "Invalid credentials");
    }

    #[tokio::test]
    async fn test_me_requires_valid_token() {
        let app = test_app().await;

        // No header at all → 401
        let missing = app
            .clone()
            .oneshot(Request::builder().uri("/api/auth/me").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(missing.status(), StatusCode::UNAUTHORIZED);

        // Garbage token → 403
        let invalid = app
            .oneshot(
                Request::builder()
                    .uri("/api/auth/me")
                    .header(header::AUTHORIZATION, "Bearer not-a-real-token")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(invalid.status(), StatusCode::FORBIDDEN);
    }
}
