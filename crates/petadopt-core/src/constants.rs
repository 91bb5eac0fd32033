//! Well-known paths shared by the catalog and the HTTP surface.

/// Image reference returned for pets that have no stored photo.
pub const PLACEHOLDER_IMAGE_URL: &str = "/api/placeholder/400/300";

/// Key prefix under which pet photos are stored.
pub const PET_ASSET_PREFIX: &str = "pets";

/// Photo extensions accepted when no override is configured.
pub const DEFAULT_PHOTO_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];
