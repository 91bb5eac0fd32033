//! Multipart extraction for pet submissions

use axum::{extract::multipart::MultipartError, extract::Multipart, http::StatusCode};
use petadopt_core::{AppError, Attachment, SubmissionPayload};

/// Form field carrying the pet photo.
pub const PHOTO_FIELD: &str = "photo";

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge("Upload exceeds the maximum allowed size".to_string())
    } else {
        AppError::InvalidInput(format!("Failed to read multipart: {}", err.body_text()))
    }
}

/// Collect the structured fields and the photo from a multipart body.
///
/// Unrecognized text fields are ignored. Only one `photo` field is accepted;
/// a photo part with neither filename nor content counts as no photo.
pub async fn extract_submission(mut multipart: Multipart) -> Result<SubmissionPayload, AppError> {
    let mut payload = SubmissionPayload::default();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let field_name = field.name().map(|s| s.to_string()).unwrap_or_default();

        if field_name == PHOTO_FIELD {
            if payload.photo.is_some() {
                return Err(AppError::InvalidInput(
                    "Multiple photo fields are not allowed; send exactly one field named 'photo'"
                        .to_string(),
                ));
            }
            let filename = field.file_name().map(|s| s.to_string()).unwrap_or_default();
            let content_type = field.content_type().map(|s| s.to_string());
            let data = field.bytes().await.map_err(multipart_error)?;

            if filename.is_empty() && data.is_empty() {
                continue;
            }
            payload.photo = Some(Attachment {
                filename,
                content_type,
                data: data.to_vec(),
            });
        } else {
            let value = field.text().await.map_err(multipart_error)?;
            if !payload.set_field(&field_name, value) {
                tracing::debug!(field = %field_name, "Ignoring unrecognized form field");
            }
        }
    }

    Ok(payload)
}
