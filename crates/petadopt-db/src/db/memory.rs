//! In-memory repositories for tests.
//!
//! `find_pets` evaluates the compiled `col = $n AND ...` predicate against the
//! stored records, so filter behavior matches the SQL repository.

use std::sync::Arc;

use petadopt_core::{
    models::{
        AdoptionRequest, NewAdoptionRequest, NewPartnerRequest, NewPet, NewUserRequest,
        PartnerRequest, PetRecord, UserRecord,
    },
    AppError, CompiledFilter,
};
use tokio::sync::Mutex;

use crate::{
    AdoptionRepositoryTrait, PartnerRepositoryTrait, PetRepositoryTrait, UserRepositoryTrait,
};

fn unavailable() -> AppError {
    AppError::from(sqlx::Error::PoolTimedOut)
}

#[derive(Clone, Default)]
pub struct InMemoryPetRepository {
    pets: Arc<Mutex<Vec<PetRecord>>>,
    failing: bool,
}

impl InMemoryPetRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository whose every call fails as if the database were down.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub async fn with_pets(pets: impl IntoIterator<Item = (NewPet, Option<String>)>) -> Self {
        let repo = Self::new();
        for (pet, photo) in pets {
            repo.insert_pet(pet, photo)
                .await
                .expect("in-memory insert");
        }
        repo
    }

    pub async fn len(&self) -> usize {
        self.pets.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.pets.lock().await.is_empty()
    }

    pub async fn all(&self) -> Vec<PetRecord> {
        self.pets.lock().await.clone()
    }
}

fn column_value<'a>(pet: &'a PetRecord, column: &str) -> Option<&'a str> {
    match column {
        "type" => Some(&pet.pet_type),
        "breed" => Some(&pet.breed),
        "size" => Some(&pet.size),
        "age" => Some(&pet.age),
        "location" => Some(&pet.location),
        _ => None,
    }
}

fn matches(pet: &PetRecord, filter: &CompiledFilter) -> Result<bool, AppError> {
    if filter.is_unconstrained() {
        return Ok(true);
    }
    for clause in filter.predicate().split(" AND ") {
        let (column, placeholder) = clause
            .split_once(" = $")
            .ok_or_else(|| AppError::Internal(format!("unsupported clause: {}", clause)))?;
        let index: usize = placeholder
            .parse()
            .map_err(|_| AppError::Internal(format!("bad placeholder: {}", clause)))?;
        let expected = filter
            .params()
            .get(index.wrapping_sub(1))
            .ok_or_else(|| AppError::Internal(format!("unbound placeholder: {}", clause)))?;
        let actual = column_value(pet, column)
            .ok_or_else(|| AppError::Internal(format!("unknown column: {}", column)))?;
        if actual != expected {
            return Ok(false);
        }
    }
    Ok(true)
}

#[async_trait::async_trait]
impl PetRepositoryTrait for InMemoryPetRepository {
    async fn insert_pet(
        &self,
        pet: NewPet,
        photo_reference: Option<String>,
    ) -> Result<PetRecord, AppError> {
        if self.failing {
            return Err(unavailable());
        }
        let mut pets = self.pets.lock().await;
        let record = pet.into_record(pets.len() as i64 + 1, photo_reference);
        pets.push(record.clone());
        Ok(record)
    }

    async fn find_pets(&self, filter: &CompiledFilter) -> Result<Vec<PetRecord>, AppError> {
        if self.failing {
            return Err(unavailable());
        }
        let pets = self.pets.lock().await;
        let mut found = Vec::new();
        for pet in pets.iter() {
            if matches(pet, filter)? {
                found.push(pet.clone());
            }
        }
        Ok(found)
    }
}

#[derive(Clone, Default)]
pub struct InMemoryAdoptionRepository {
    requests: Arc<Mutex<Vec<AdoptionRequest>>>,
    failing: bool,
}

impl InMemoryAdoptionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub async fn all(&self) -> Vec<AdoptionRequest> {
        self.requests.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl AdoptionRepositoryTrait for InMemoryAdoptionRepository {
    async fn create_request(&self, req: NewAdoptionRequest) -> Result<AdoptionRequest, AppError> {
        if self.failing {
            return Err(unavailable());
        }
        let mut requests = self.requests.lock().await;
        let request = AdoptionRequest::from_new(requests.len() as i64 + 1, req);
        requests.push(request.clone());
        Ok(request)
    }
}

#[derive(Clone, Default)]
pub struct InMemoryPartnerRepository {
    partners: Arc<Mutex<Vec<PartnerRequest>>>,
    failing: bool,
}

impl InMemoryPartnerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub async fn all(&self) -> Vec<PartnerRequest> {
        self.partners.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl PartnerRepositoryTrait for InMemoryPartnerRepository {
    async fn create_partner(&self, req: NewPartnerRequest) -> Result<PartnerRequest, AppError> {
        if self.failing {
            return Err(unavailable());
        }
        let mut partners = self.partners.lock().await;
        let partner = PartnerRequest::from_new(partners.len() as i64 + 1, req);
        partners.push(partner.clone());
        Ok(partner)
    }
}

#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<Mutex<Vec<UserRecord>>>,
    failing: bool,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    pub async fn all(&self) -> Vec<UserRecord> {
        self.users.lock().await.clone()
    }
}

#[async_trait::async_trait]
impl UserRepositoryTrait for InMemoryUserRepository {
    async fn create_user(&self, req: NewUserRequest) -> Result<UserRecord, AppError> {
        if self.failing {
            return Err(unavailable());
        }
        let mut users = self.users.lock().await;
        // Mirrors the UNIQUE constraint on users.email.
        if users.iter().any(|u| u.email == req.email) {
            return Err(AppError::from(sqlx::Error::Protocol(format!(
                "duplicate key value violates unique constraint on users.email: {}",
                req.email
            ))));
        }
        let user = UserRecord::from_new(users.len() as i64 + 1, req);
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<UserRecord>, AppError> {
        if self.failing {
            return Err(unavailable());
        }
        let users = self.users.lock().await;
        Ok(users
            .iter()
            .find(|u| u.email == email && u.password == password)
            .cloned())
    }
}
