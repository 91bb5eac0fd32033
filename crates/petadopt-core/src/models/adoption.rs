use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /api/adopt`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewAdoptionRequest {
    #[validate(length(min = 1, message = "petName is required"))]
    pub pet_name: String,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub home: Option<String>,
}

impl NewAdoptionRequest {
    /// Trim every field; blank optional fields become `None`.
    pub fn normalized(self) -> Self {
        Self {
            pet_name: self.pet_name.trim().to_string(),
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: trim_optional(self.phone),
            address: trim_optional(self.address),
            reason: trim_optional(self.reason),
            experience: trim_optional(self.experience),
            home: trim_optional(self.home),
        }
    }
}

pub(crate) fn trim_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// A persisted adoption request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdoptionRequest {
    pub id: i64,
    pub pet_name: String,
    pub user_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub reason: Option<String>,
    pub experience: Option<String>,
    pub home: Option<String>,
}

impl AdoptionRequest {
    pub fn from_new(id: i64, req: NewAdoptionRequest) -> Self {
        Self {
            id,
            pet_name: req.pet_name,
            user_name: req.name,
            email: req.email,
            phone: req.phone,
            address: req.address,
            reason: req.reason,
            experience: req.experience,
            home: req.home,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(email: &str) -> NewAdoptionRequest {
        NewAdoptionRequest {
            pet_name: " Rex ".to_string(),
            name: "Ana".to_string(),
            email: email.to_string(),
            phone: Some("  ".to_string()),
            address: None,
            reason: Some("company".to_string()),
            experience: None,
            home: None,
        }
    }

    #[test]
    fn normalized_trims_and_drops_blank_optionals() {
        let req = request("ana@example.com").normalized();
        assert_eq!(req.pet_name, "Rex");
        assert_eq!(req.phone, None);
        assert_eq!(req.reason.as_deref(), Some("company"));
        assert!(req.validate().is_ok());
    }

    #[test]
    fn rejects_malformed_email_and_blank_name() {
        assert!(request("not-an-email").normalized().validate().is_err());

        let mut req = request("ana@example.com");
        req.name = "   ".to_string();
        assert!(req.normalized().validate().is_err());
    }
}
