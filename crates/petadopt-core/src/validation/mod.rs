//! Input validation
//!
//! Pure checks over untrusted submissions; nothing here touches storage.

pub mod submission;

pub use submission::{
    Attachment, SubmissionPayload, SubmissionValidator, ValidatedSubmission, ValidationError,
    REQUIRED_FIELDS,
};
