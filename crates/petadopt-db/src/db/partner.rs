use petadopt_core::{
    models::{NewPartnerRequest, PartnerRequest},
    AppError,
};
use sqlx::{PgPool, Postgres};

#[async_trait::async_trait]
pub trait PartnerRepositoryTrait: Send + Sync {
    async fn create_partner(&self, req: NewPartnerRequest) -> Result<PartnerRequest, AppError>;
}

/// Repository for the `partners` table
#[derive(Clone)]
pub struct PartnerRepository {
    pool: PgPool,
}

impl PartnerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl PartnerRepositoryTrait for PartnerRepository {
    #[tracing::instrument(skip(self, req), fields(db.table = "partners", db.operation = "insert"))]
    async fn create_partner(&self, req: NewPartnerRequest) -> Result<PartnerRequest, AppError> {
        let id = sqlx::query_scalar::<Postgres, i64>(
            r#"
            INSERT INTO partners
                (name, type, contact, email, phone, address, city, state, description)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id
            "#,
        )
        .bind(&req.partner_name)
        .bind(&req.partner_type)
        .bind(&req.partner_contact)
        .bind(&req.partner_email)
        .bind(&req.partner_phone)
        .bind(&req.partner_address)
        .bind(&req.partner_city)
        .bind(&req.partner_state)
        .bind(&req.partner_description)
        .fetch_one(&self.pool)
        .await?;

        Ok(PartnerRequest::from_new(id, req))
    }
}
