use serde::{Deserialize, Serialize};

#[cfg(feature = "sqlx")]
use sqlx::FromRow;

/// A persisted adoptable pet.
///
/// `photo_reference` is either `None` or the public path of an asset that was
/// stored before the row was written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(FromRow))]
#[serde(rename_all = "camelCase")]
pub struct PetRecord {
    pub id: i64,
    #[serde(rename = "type")]
    #[cfg_attr(feature = "sqlx", sqlx(rename = "type"))]
    pub pet_type: String,
    pub name: String,
    pub breed: String,
    pub age: String,
    pub size: String,
    pub gender: String,
    pub description: String,
    pub location: String,
    #[cfg_attr(feature = "sqlx", sqlx(rename = "image_url"))]
    pub photo_reference: Option<String>,
}

/// Validated, trimmed pet attributes ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPet {
    pub pet_type: String,
    pub name: String,
    pub breed: String,
    pub age: String,
    pub size: String,
    pub gender: String,
    pub description: String,
    pub location: String,
}

impl NewPet {
    /// Attach the identity and photo assigned at persistence time.
    pub fn into_record(self, id: i64, photo_reference: Option<String>) -> PetRecord {
        PetRecord {
            id,
            pet_type: self.pet_type,
            name: self.name,
            breed: self.breed,
            age: self.age,
            size: self.size,
            gender: self.gender,
            description: self.description,
            location: self.location,
            photo_reference,
        }
    }
}
