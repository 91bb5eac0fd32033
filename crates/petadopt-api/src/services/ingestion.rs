//! Pet ingestion pipeline
//!
//! `Received -> Validated -> AssetStored -> RecordPersisted`, strictly in that
//! order and without retries. A failure after the photo is written leaves the
//! asset in place; the error carries its key so the orphan can be traced.

use std::fmt;
use std::sync::Arc;

use petadopt_core::{
    constants::PET_ASSET_PREFIX, models::PetRecord, AppError, SubmissionPayload,
    SubmissionValidator, ValidationError,
};
use petadopt_db::PetRepositoryTrait;
use petadopt_storage::{generate_asset_name, generate_storage_key, Storage, StorageError};

/// Pipeline progress for one submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestionStage {
    Received,
    Validated,
    AssetStored,
    RecordPersisted,
}

impl fmt::Display for IngestionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IngestionStage::Received => "received",
            IngestionStage::Validated => "validated",
            IngestionStage::AssetStored => "asset_stored",
            IngestionStage::RecordPersisted => "record_persisted",
        };
        f.write_str(name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum IngestionError {
    /// Validation failed; nothing was written.
    #[error("Submission rejected: {0}")]
    Rejected(#[from] ValidationError),

    /// The photo could not be written; no record was created.
    #[error("Failed to store photo: {0}")]
    AssetFailed(#[source] StorageError),

    /// The photo was written but the pet record was not.
    #[error("Failed to persist pet record (orphaned asset {storage_key}): {source}")]
    RecordFailed {
        storage_key: String,
        #[source]
        source: AppError,
    },
}

impl IngestionError {
    /// Last stage the submission reached before failing.
    pub fn stage(&self) -> IngestionStage {
        match self {
            IngestionError::Rejected(_) => IngestionStage::Received,
            IngestionError::AssetFailed(_) => IngestionStage::Validated,
            IngestionError::RecordFailed { .. } => IngestionStage::AssetStored,
        }
    }
}

/// Content type recorded for a stored photo when the client did not send one.
fn content_type_for(extension: &str) -> &'static str {
    match extension {
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        _ => "application/octet-stream",
    }
}

#[derive(Clone)]
pub struct PetIngestionService {
    validator: SubmissionValidator,
    storage: Arc<dyn Storage>,
    pets: Arc<dyn PetRepositoryTrait>,
}

impl PetIngestionService {
    pub fn new(
        validator: SubmissionValidator,
        storage: Arc<dyn Storage>,
        pets: Arc<dyn PetRepositoryTrait>,
    ) -> Self {
        Self {
            validator,
            storage,
            pets,
        }
    }

    /// Validate, store the photo, then persist the record referencing it.
    #[tracing::instrument(skip(self, payload), fields(operation = "ingest_pet"))]
    pub async fn ingest(&self, payload: SubmissionPayload) -> Result<PetRecord, IngestionError> {
        let stage = IngestionStage::Received;

        let validated = self.validator.validate(payload).inspect_err(|e| {
            tracing::debug!(stage = %stage, reason = %e, "Pet submission rejected");
        })?;
        let stage = IngestionStage::Validated;

        let storage_key = generate_storage_key(
            PET_ASSET_PREFIX,
            &generate_asset_name(&validated.extension),
        );
        let content_type = validated
            .photo
            .content_type
            .clone()
            .filter(|ct| !ct.is_empty())
            .unwrap_or_else(|| content_type_for(&validated.extension).to_string());
        let size_bytes = validated.photo.data.len();

        let photo_reference = self
            .storage
            .upload(&storage_key, &content_type, validated.photo.data)
            .await
            .map_err(|e| {
                tracing::error!(stage = %stage, key = %storage_key, error = %e, "Pet photo upload failed");
                IngestionError::AssetFailed(e)
            })?;
        let stage = IngestionStage::AssetStored;
        tracing::debug!(stage = %stage, key = %storage_key, size_bytes, "Pet photo stored");

        let record = self
            .pets
            .insert_pet(validated.pet, Some(photo_reference))
            .await
            .map_err(|e| {
                tracing::error!(
                    stage = %stage,
                    key = %storage_key,
                    error = %e.detailed_message(),
                    "Pet record insert failed; stored photo is orphaned"
                );
                IngestionError::RecordFailed {
                    storage_key: storage_key.clone(),
                    source: e,
                }
            })?;

        tracing::info!(
            stage = %IngestionStage::RecordPersisted,
            pet_id = record.id,
            key = %storage_key,
            "Pet registered"
        );

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use petadopt_core::{Attachment, StorageBackend};
    use petadopt_db::InMemoryPetRepository;
    use petadopt_storage::{LocalStorage, StorageResult};

    fn payload(filename: &str) -> SubmissionPayload {
        let mut payload = SubmissionPayload::default();
        for (field, value) in [
            ("type", "dog"),
            ("name", " Bolt "),
            ("breed", "beagle"),
            ("age", "puppy"),
            ("size", "small"),
            ("gender", "male"),
            ("description", "loves walks"),
            ("location", "Recife"),
        ] {
            payload.set_field(field, value.to_string());
        }
        payload.photo = Some(Attachment {
            filename: filename.to_string(),
            content_type: Some("image/jpeg".to_string()),
            data: b"fake-jpeg".to_vec(),
        });
        payload
    }

    /// Asset store that refuses every write.
    struct BrokenStorage;

    #[async_trait]
    impl Storage for BrokenStorage {
        async fn upload(&self, _key: &str, _ct: &str, _data: Vec<u8>) -> StorageResult<String> {
            Err(StorageError::UploadFailed("disk unavailable".to_string()))
        }

        fn public_url(&self, key: &str) -> String {
            format!("/uploads/{}", key)
        }

        fn backend_type(&self) -> StorageBackend {
            StorageBackend::Local
        }
    }

    async fn local_storage(dir: &tempfile::TempDir) -> Arc<LocalStorage> {
        Arc::new(
            LocalStorage::new(dir.path(), "/uploads".to_string())
                .await
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn stores_photo_then_record() {
        let dir = tempfile::tempdir().unwrap();
        let storage = local_storage(&dir).await;
        let pets = InMemoryPetRepository::new();
        let service =
            PetIngestionService::new(SubmissionValidator::default(), storage.clone(), Arc::new(pets.clone()));

        let record = service.ingest(payload("photo.JPG")).await.unwrap();

        assert_eq!(record.id, 1);
        assert_eq!(record.name, "Bolt");
        let reference = record.photo_reference.clone().unwrap();
        assert!(reference.starts_with("/uploads/pets/"));
        assert!(reference.ends_with(".jpg"));

        let key = reference.trim_start_matches("/uploads/");
        assert_eq!(std::fs::read(dir.path().join(key)).unwrap(), b"fake-jpeg");
        assert_eq!(pets.all().await, vec![record]);
    }

    #[tokio::test]
    async fn rejected_submission_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let storage = local_storage(&dir).await;
        let pets = InMemoryPetRepository::new();
        let service =
            PetIngestionService::new(SubmissionValidator::default(), storage, Arc::new(pets.clone()));

        let err = service.ingest(payload("photo.gif")).await.unwrap_err();

        assert!(matches!(err, IngestionError::Rejected(ValidationError::UnsupportedExtension { .. })));
        assert_eq!(err.stage(), IngestionStage::Received);
        assert!(pets.is_empty().await);
        assert!(!dir.path().join("pets").exists());
    }

    #[tokio::test]
    async fn asset_failure_skips_record() {
        let pets = InMemoryPetRepository::new();
        let service = PetIngestionService::new(
            SubmissionValidator::default(),
            Arc::new(BrokenStorage),
            Arc::new(pets.clone()),
        );

        let err = service.ingest(payload("photo.png")).await.unwrap_err();

        assert!(matches!(err, IngestionError::AssetFailed(_)));
        assert_eq!(err.stage(), IngestionStage::Validated);
        assert!(pets.is_empty().await);
    }

    #[tokio::test]
    async fn record_failure_leaves_orphaned_asset() {
        let dir = tempfile::tempdir().unwrap();
        let storage = local_storage(&dir).await;
        let service = PetIngestionService::new(
            SubmissionValidator::default(),
            storage.clone(),
            Arc::new(InMemoryPetRepository::failing()),
        );

        let err = service.ingest(payload("photo.jpeg")).await.unwrap_err();

        assert_eq!(err.stage(), IngestionStage::AssetStored);
        match err {
            IngestionError::RecordFailed { storage_key, .. } => {
                assert!(storage_key.starts_with("pets/"));
                assert!(dir.path().join(&storage_key).exists());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn concurrent_ingestions_with_same_filename_do_not_collide() {
        let dir = tempfile::tempdir().unwrap();
        let storage = local_storage(&dir).await;
        let pets = InMemoryPetRepository::new();
        let service = Arc::new(PetIngestionService::new(
            SubmissionValidator::default(),
            storage,
            Arc::new(pets.clone()),
        ));

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let service = service.clone();
                tokio::spawn(async move { service.ingest(payload("photo.jpg")).await })
            })
            .collect();

        let mut ids = std::collections::HashSet::new();
        let mut references = std::collections::HashSet::new();
        for handle in handles {
            let record = handle.await.unwrap().unwrap();
            assert!(ids.insert(record.id));
            assert!(references.insert(record.photo_reference.unwrap()));
        }
        assert_eq!(pets.len().await, 16);
    }

    #[test]
    fn fallback_content_types() {
        assert_eq!(content_type_for("jpg"), "image/jpeg");
        assert_eq!(content_type_for("png"), "image/png");
        assert_eq!(content_type_for("bin"), "application/octet-stream");
    }
}
