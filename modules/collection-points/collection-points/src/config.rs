use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration for the collection-points module
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CollectionPointsConfig {
    /// Address clients reach the server on; prefixed to every `image_url`.
    #[serde(default = "default_public_base_url")]
    pub public_base_url: String,
    /// Directory uploaded point images are written to and served from.
    #[serde(default = "default_uploads_dir")]
    pub uploads_dir: PathBuf,
    #[serde(default = "default_max_image_size_mb")]
    pub max_image_size_mb: u64,
}

impl Default for CollectionPointsConfig {
    fn default() -> Self {
        Self {
            public_base_url: default_public_base_url(),
            uploads_dir: default_uploads_dir(),
            max_image_size_mb: default_max_image_size_mb(),
        }
    }
}

fn default_public_base_url() -> String {
    "http://localhost:3333".to_owned()
}

fn default_uploads_dir() -> PathBuf {
    PathBuf::from("uploads")
}

fn default_max_image_size_mb() -> u64 {
    5
}

/// Allowance for the text fields sent next to the image.
const FORM_FIELDS_ALLOWANCE: u64 = 64 * 1024;

impl CollectionPointsConfig {
    /// Request body limit for the registration endpoint.
    #[must_use]
    pub fn max_body_bytes(&self) -> usize {
        let bytes = self
            .max_image_size_mb
            .saturating_mul(1024 * 1024)
            .saturating_add(FORM_FIELDS_ALLOWANCE);
        usize::try_from(bytes).unwrap_or(usize::MAX)
    }
}
