use petadopt_core::{
    models::{NewUserRequest, UserRecord},
    AppError,
};
use sqlx::{PgPool, Postgres};

/// Credentials store. Passwords are matched exactly as stored.
#[async_trait::async_trait]
pub trait UserRepositoryTrait: Send + Sync {
    async fn create_user(&self, req: NewUserRequest) -> Result<UserRecord, AppError>;

    async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<UserRecord>, AppError>;
}

/// Repository for the `users` table
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl UserRepositoryTrait for UserRepository {
    #[tracing::instrument(skip(self, req), fields(db.table = "users", db.operation = "insert"))]
    async fn create_user(&self, req: NewUserRequest) -> Result<UserRecord, AppError> {
        let id = sqlx::query_scalar::<Postgres, i64>(
            r#"
            INSERT INTO users (name, email, password)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&req.name)
        .bind(&req.email)
        .bind(&req.password)
        .fetch_one(&self.pool)
        .await?;

        Ok(UserRecord::from_new(id, req))
    }

    #[tracing::instrument(skip(self, password), fields(db.table = "users", db.operation = "select"))]
    async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<UserRecord>, AppError> {
        let user = sqlx::query_as::<Postgres, UserRecord>(
            r#"
            SELECT id, name, email, password
            FROM users
            WHERE email = $1 AND password = $2
            LIMIT 1
            "#,
        )
        .bind(email)
        .bind(password)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}
