use petadopt_core::{models::NewPet, models::PetRecord, AppError, CompiledFilter};
use sqlx::{PgPool, Postgres};

const PET_COLUMNS: &str =
    "id, type, name, breed, age, size, gender, description, location, image_url";

/// Pet catalog persistence
#[async_trait::async_trait]
pub trait PetRepositoryTrait: Send + Sync {
    /// Persist a new pet, returning it with its assigned id.
    async fn insert_pet(
        &self,
        pet: NewPet,
        photo_reference: Option<String>,
    ) -> Result<PetRecord, AppError>;

    /// All pets matching the compiled filter, in id order.
    async fn find_pets(&self, filter: &CompiledFilter) -> Result<Vec<PetRecord>, AppError>;
}

/// Full `SELECT` statement for a compiled filter.
pub fn select_pets_sql(filter: &CompiledFilter) -> String {
    if filter.is_unconstrained() {
        format!("SELECT {} FROM pets ORDER BY id", PET_COLUMNS)
    } else {
        format!(
            "SELECT {} FROM pets WHERE {} ORDER BY id",
            PET_COLUMNS,
            filter.predicate()
        )
    }
}

/// Repository for the `pets` table
#[derive(Clone)]
pub struct PetRepository {
    pool: PgPool,
}

impl PetRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl PetRepositoryTrait for PetRepository {
    #[tracing::instrument(skip(self, pet), fields(db.table = "pets", db.operation = "insert"))]
    async fn insert_pet(
        &self,
        pet: NewPet,
        photo_reference: Option<String>,
    ) -> Result<PetRecord, AppError> {
        let record = sqlx::query_as::<Postgres, PetRecord>(&format!(
            r#"
            INSERT INTO pets (type, name, breed, age, size, gender, description, location, image_url)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING {}
            "#,
            PET_COLUMNS
        ))
        .bind(&pet.pet_type)
        .bind(&pet.name)
        .bind(&pet.breed)
        .bind(&pet.age)
        .bind(&pet.size)
        .bind(&pet.gender)
        .bind(&pet.description)
        .bind(&pet.location)
        .bind(photo_reference)
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }

    #[tracing::instrument(
        skip(self, filter),
        fields(db.table = "pets", db.operation = "select", filter.params = filter.params().len())
    )]
    async fn find_pets(&self, filter: &CompiledFilter) -> Result<Vec<PetRecord>, AppError> {
        let sql = select_pets_sql(filter);

        let mut query = sqlx::query_as::<Postgres, PetRecord>(&sql);
        for param in filter.params() {
            query = query.bind(param);
        }

        let pets = query.fetch_all(&self.pool).await?;
        Ok(pets)
    }
}
