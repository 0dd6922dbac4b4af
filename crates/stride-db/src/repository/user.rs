//! # User Repository
//!
//! Account storage: creation and lookup by email or id.
//!
//! Passwords arrive here already hashed; this crate never sees a plaintext
//! password and never verifies one.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;

// =============================================================================
// Records
// =============================================================================

/// A stored account row.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct UserRecord {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Fields for a new account. The hash is produced by the API layer.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for account operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    /// Creates a new UserRepository.
    pub fn new(pool: SqlitePool) -> Self {
        UserRepository { pool }
    }

    /// Inserts a new account and returns its generated id.
    ///
    /// A duplicate email surfaces as [`crate::DbError::UniqueViolation`] via
    /// the `users.email` unique index; callers decide the user-facing
    /// wording.
    pub async fn create(&self, user: &NewUser) -> DbResult<i64> {
        debug!(email = %user.email, "Creating user");

        let now = Utc::now();
        let result = sqlx::query(
            r#"
            INSERT INTO users (email, password_hash, first_name, last_name, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Looks up an account by email (login path).
    pub async fn find_by_email(&self, email: &str) -> DbResult<Option<UserRecord>> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, email, password_hash, first_name, last_name,
                   address, city, postal_code, created_at
            FROM users
            WHERE email = ?1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Looks up an account by id (token subject path).
    pub async fn find_by_id(&self, id: i64) -> DbResult<Option<UserRecord>> {
        let user = sqlx::query_as::<_, UserRecord>(
            r#"
            SELECT id, email, password_hash, first_name, last_name,
                   address, city, postal_code, created_at
            FROM users
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use crate::DbError;

    fn demo_user() -> NewUser {
        NewUser {
            email: "ana@example.com".to_string(),
            password_hash: "$argon2id$fake-hash-for-tests".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Novak".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_find() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let users = db.users();

        let id = users.create(&demo_user()).await.unwrap();
        assert!(id > 0);

        let by_email = users.find_by_email("ana@example.com").await.unwrap().unwrap();
        assert_eq!(by_email.id, id);
        assert_eq!(by_email.first_name, "Ana");
        assert!(by_email.address.is_none());

        let by_id = users.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(by_id.email, "ana@example.com");
    }

    #[tokio::test]
    async fn test_duplicate_email_is_a_unique_violation() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let users = db.users();

        users.create(&demo_user()).await.unwrap();
        let err = users.create(&demo_user()).await.unwrap_err();

        assert!(matches!(err, DbError::UniqueViolation { .. }));
    }

    #[tokio::test]
    async fn test_find_missing_is_none() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        assert!(db.users().find_by_email("nobody@example.com").await.unwrap().is_none());
        assert!(db.users().find_by_id(999).await.unwrap().is_none());
    }
}
