use serde::{Deserialize, Serialize};
use validator::Validate;

use super::adoption::trim_optional;

/// Body of `POST /api/partner`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewPartnerRequest {
    #[validate(length(min = 1, message = "partnerName is required"))]
    pub partner_name: String,
    #[serde(default)]
    pub partner_type: Option<String>,
    #[serde(default)]
    pub partner_contact: Option<String>,
    #[validate(email(message = "partnerEmail must be a valid address"))]
    pub partner_email: String,
    #[serde(default)]
    pub partner_phone: Option<String>,
    #[serde(default)]
    pub partner_address: Option<String>,
    #[serde(default)]
    pub partner_city: Option<String>,
    #[serde(default)]
    pub partner_state: Option<String>,
    #[serde(default)]
    pub partner_description: Option<String>,
}

impl NewPartnerRequest {
    pub fn normalized(self) -> Self {
        Self {
            partner_name: self.partner_name.trim().to_string(),
            partner_type: trim_optional(self.partner_type),
            partner_contact: trim_optional(self.partner_contact),
            partner_email: self.partner_email.trim().to_string(),
            partner_phone: trim_optional(self.partner_phone),
            partner_address: trim_optional(self.partner_address),
            partner_city: trim_optional(self.partner_city),
            partner_state: trim_optional(self.partner_state),
            partner_description: trim_optional(self.partner_description),
        }
    }
}

/// A persisted partnership request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartnerRequest {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub partner_type: Option<String>,
    pub contact: Option<String>,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub description: Option<String>,
}

impl PartnerRequest {
    pub fn from_new(id: i64, req: NewPartnerRequest) -> Self {
        Self {
            id,
            name: req.partner_name,
            partner_type: req.partner_type,
            contact: req.partner_contact,
            email: req.partner_email,
            phone: req.partner_phone,
            address: req.partner_address,
            city: req.partner_city,
            state: req.partner_state,
            description: req.partner_description,
        }
    }
}
