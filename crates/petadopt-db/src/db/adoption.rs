use petadopt_core::{
    models::{AdoptionRequest, NewAdoptionRequest},
    AppError,
};
use sqlx::{PgPool, Postgres};

#[async_trait::async_trait]
pub trait AdoptionRepositoryTrait: Send + Sync {
    async fn create_request(&self, req: NewAdoptionRequest) -> Result<AdoptionRequest, AppError>;
}

/// Repository for the `adoption_requests` table
#[derive(Clone)]
pub struct AdoptionRepository {
    pool: PgPool,
}

impl AdoptionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl AdoptionRepositoryTrait for AdoptionRepository {
    #[tracing::instrument(skip(self, req), fields(db.table = "adoption_requests", db.operation = "insert"))]
    async fn create_request(&self, req: NewAdoptionRequest) -> Result<AdoptionRequest, AppError> {
        let id = sqlx::query_scalar::<Postgres, i64>(
            r#"
            INSERT INTO adoption_requests
                (pet_name, user_name, email, phone, address, reason, experience, home)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id
            "#,
        )
        .bind(&req.pet_name)
        .bind(&req.name)
        .bind(&req.email)
        .bind(&req.phone)
        .bind(&req.address)
        .bind(&req.reason)
        .bind(&req.experience)
        .bind(&req.home)
        .fetch_one(&self.pool)
        .await?;

        Ok(AdoptionRequest::from_new(id, req))
    }
}
