//! Product image upload configuration.

use serde::{Deserialize, Serialize};

/// Settings for product image uploads and thumbnail generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadsConfig {
    /// Directory where uploaded product images are stored.
    #[serde(default = "default_directory")]
    pub directory: String,
    /// Maximum accepted upload size in megabytes.
    #[serde(default = "default_max_size")]
    pub max_size_mb: u64,
    /// Maximum thumbnail edge length in pixels.
    #[serde(default = "default_thumbnail_size")]
    pub thumbnail_size: u32,
    /// Accepted image file extensions.
    #[serde(default = "default_allowed_extensions")]
    pub allowed_extensions: Vec<String>,
}

impl UploadsConfig {
    /// Maximum accepted upload size in bytes.
    pub fn max_size_bytes(&self) -> usize {
        (self.max_size_mb as usize) * 1024 * 1024
    }
}

fn default_directory() -> String {
    "data/uploads/products".to_string()
}

fn default_max_size() -> u64 {
    8
}

fn default_thumbnail_size() -> u32 {
    400
}

fn default_allowed_extensions() -> Vec<String> {
    vec![
        "jpg".to_string(),
        "jpeg".to_string(),
        "png".to_string(),
        "webp".to_string(),
    ]
}
