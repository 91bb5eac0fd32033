//! New-pet submission validation
//!
//! Checks run in a fixed order and stop at the first violation:
//! 1. every required field is non-empty after trimming,
//! 2. a photo is attached,
//! 3. the photo's filename carries an accepted extension (case-insensitive).
//!
//! The extension check is advisory: file content is never inspected.

use std::path::Path;

use crate::config::default_photo_extensions;
use crate::models::NewPet;

/// Form field names of the structured attributes, in validation order.
pub const REQUIRED_FIELDS: [&str; 8] = [
    "type",
    "name",
    "breed",
    "age",
    "size",
    "gender",
    "description",
    "location",
];

/// Validation errors for a new-pet submission
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("A photo of the pet is required")]
    MissingAttachment,

    #[error("Unsupported photo '{filename}': only {} images are accepted", .allowed.join(", "))]
    UnsupportedExtension {
        filename: String,
        allowed: Vec<String>,
    },
}

/// An uploaded binary attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub filename: String,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

impl Attachment {
    /// Lowercased extension of the original filename, without the dot.
    pub fn extension(&self) -> Option<String> {
        Path::new(&self.filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
    }
}

/// Untrusted input to the ingestion pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionPayload {
    pub pet_type: Option<String>,
    pub name: Option<String>,
    pub breed: Option<String>,
    pub age: Option<String>,
    pub size: Option<String>,
    pub gender: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,
    pub photo: Option<Attachment>,
}

impl SubmissionPayload {
    /// Store a text field by its form name. Returns false for unrecognized names.
    pub fn set_field(&mut self, name: &str, value: String) -> bool {
        let slot = match name {
            "type" => &mut self.pet_type,
            "name" => &mut self.name,
            "breed" => &mut self.breed,
            "age" => &mut self.age,
            "size" => &mut self.size,
            "gender" => &mut self.gender,
            "description" => &mut self.description,
            "location" => &mut self.location,
            _ => return false,
        };
        *slot = Some(value);
        true
    }

    fn field(&self, name: &str) -> Option<&String> {
        match name {
            "type" => self.pet_type.as_ref(),
            "name" => self.name.as_ref(),
            "breed" => self.breed.as_ref(),
            "age" => self.age.as_ref(),
            "size" => self.size.as_ref(),
            "gender" => self.gender.as_ref(),
            "description" => self.description.as_ref(),
            "location" => self.location.as_ref(),
            _ => None,
        }
    }
}

/// A submission that passed every check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSubmission {
    pub pet: NewPet,
    pub photo: Attachment,
    /// Accepted, lowercased photo extension.
    pub extension: String,
}

/// Validates [`SubmissionPayload`]s against an extension allowlist.
#[derive(Debug, Clone)]
pub struct SubmissionValidator {
    allowed_extensions: Vec<String>,
}

impl Default for SubmissionValidator {
    fn default() -> Self {
        Self::new(default_photo_extensions())
    }
}

impl SubmissionValidator {
    pub fn new(allowed_extensions: Vec<String>) -> Self {
        Self {
            allowed_extensions: allowed_extensions
                .into_iter()
                .map(|e| e.trim_start_matches('.').to_lowercase())
                .collect(),
        }
    }

    pub fn allowed_extensions(&self) -> &[String] {
        &self.allowed_extensions
    }

    pub fn validate(
        &self,
        payload: SubmissionPayload,
    ) -> Result<ValidatedSubmission, ValidationError> {
        let required = |name: &'static str| {
            payload
                .field(name)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .ok_or(ValidationError::MissingField(name))
        };

        // Field initializers run top to bottom, matching REQUIRED_FIELDS.
        let pet = NewPet {
            pet_type: required("type")?,
            name: required("name")?,
            breed: required("breed")?,
            age: required("age")?,
            size: required("size")?,
            gender: required("gender")?,
            description: required("description")?,
            location: required("location")?,
        };

        let photo = payload.photo.ok_or(ValidationError::MissingAttachment)?;

        let extension = photo
            .extension()
            .filter(|ext| self.allowed_extensions.contains(ext))
            .ok_or_else(|| ValidationError::UnsupportedExtension {
                filename: photo.filename.clone(),
                allowed: self.allowed_extensions.clone(),
            })?;

        Ok(ValidatedSubmission {
            pet,
            photo,
            extension,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(filename: &str) -> Attachment {
        Attachment {
            filename: filename.to_string(),
            content_type: Some("image/jpeg".to_string()),
            data: vec![0xFF, 0xD8, 0xFF],
        }
    }

    fn complete_payload() -> SubmissionPayload {
        let mut payload = SubmissionPayload::default();
        for (name, value) in [
            ("type", "dog"),
            ("name", "Rex"),
            ("breed", "mixed"),
            ("age", "adult"),
            ("size", "large"),
            ("gender", "male"),
            ("description", "Loves long walks"),
            ("location", "Recife"),
        ] {
            assert!(payload.set_field(name, value.to_string()));
        }
        payload.photo = Some(photo("photo.jpg"));
        payload
    }

    #[test]
    fn complete_submission_passes() {
        let validated = SubmissionValidator::default()
            .validate(complete_payload())
            .unwrap();
        assert_eq!(validated.pet.pet_type, "dog");
        assert_eq!(validated.pet.location, "Recife");
        assert_eq!(validated.extension, "jpg");
    }

    #[test]
    fn each_missing_field_fails() {
        let validator = SubmissionValidator::default();
        for name in REQUIRED_FIELDS {
            let mut payload = complete_payload();
            match name {
                "type" => payload.pet_type = None,
                "name" => payload.name = None,
                "breed" => payload.breed = None,
                "age" => payload.age = None,
                "size" => payload.size = None,
                "gender" => payload.gender = None,
                "description" => payload.description = None,
                _ => payload.location = None,
            }
            assert!(validator.validate(payload).is_err(), "{name} should be required");
        }
    }

    #[test]
    fn whitespace_only_field_counts_as_missing() {
        let mut payload = complete_payload();
        payload.set_field("gender", "   \t".to_string());
        assert!(matches!(
            SubmissionValidator::default().validate(payload),
            Err(ValidationError::MissingField(_))
        ));
    }

    #[test]
    fn fields_are_trimmed() {
        let mut payload = complete_payload();
        payload.set_field("name", "  Rex  ".to_string());
        let validated = SubmissionValidator::default().validate(payload).unwrap();
        assert_eq!(validated.pet.name, "Rex");
    }

    #[test]
    fn missing_attachment_fails() {
        let mut payload = complete_payload();
        payload.photo = None;
        assert_eq!(
            SubmissionValidator::default().validate(payload),
            Err(ValidationError::MissingAttachment)
        );
    }

    #[test]
    fn gif_is_rejected() {
        let mut payload = complete_payload();
        payload.photo = Some(photo("photo.gif"));
        assert!(matches!(
            SubmissionValidator::default().validate(payload),
            Err(ValidationError::UnsupportedExtension { .. })
        ));
    }

    #[test]
    fn extension_check_is_case_insensitive() {
        for name in ["photo.JPG", "photo.Jpeg", "photo.PNG"] {
            let mut payload = complete_payload();
            payload.photo = Some(photo(name));
            assert!(SubmissionValidator::default().validate(payload).is_ok(), "{name}");
        }
    }

    #[test]
    fn filename_without_extension_is_rejected() {
        let mut payload = complete_payload();
        payload.photo = Some(photo("jpg"));
        assert!(SubmissionValidator::default().validate(payload).is_err());
    }

    #[test]
    fn content_is_not_inspected() {
        let mut payload = complete_payload();
        payload.photo = Some(Attachment {
            filename: "notes.png".to_string(),
            content_type: Some("text/plain".to_string()),
            data: b"plain text".to_vec(),
        });
        assert!(SubmissionValidator::default().validate(payload).is_ok());
    }

    #[test]
    fn unknown_form_fields_are_not_stored() {
        let mut payload = SubmissionPayload::default();
        assert!(!payload.set_field("owner", "x".to_string()));
        assert_eq!(payload, SubmissionPayload::default());
    }

    #[test]
    fn custom_allowlist_is_normalized() {
        let validator = SubmissionValidator::new(vec![".WEBP".to_string()]);
        let mut payload = complete_payload();
        payload.photo = Some(photo("pet.webp"));
        assert!(validator.validate(payload).is_ok());
        assert_eq!(validator.allowed_extensions(), ["webp"]);
    }
}
