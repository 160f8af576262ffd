//! Product image uploads, thumbnails, and gallery management.

use std::sync::Arc;

use bytes::Bytes;
use tokio::fs;
use tracing::{debug, warn};
use uuid::Uuid;

use aynbeauty_core::config::UploadsConfig;
use aynbeauty_core::error::{AppError, ErrorKind};
use aynbeauty_database::repositories::product::ProductRepository;
use aynbeauty_entity::product::ProductImage;

/// Public URL prefix under which uploaded images are served.
const URL_PREFIX: &str = "/uploads/products";

/// Manages product gallery images for the admin back office.
#[derive(Debug, Clone)]
pub struct ProductImageService {
    /// Product repository.
    product_repo: Arc<ProductRepository>,
    /// Upload settings.
    uploads: UploadsConfig,
}

impl ProductImageService {
    /// Creates a new image service.
    pub fn new(product_repo: Arc<ProductRepository>, uploads: UploadsConfig) -> Self {
        Self {
            product_repo,
            uploads,
        }
    }

    /// Stores an uploaded image for a product.
    ///
    /// The payload must decode as an image; a JPEG thumbnail is re-encoded
    /// alongside the original. The first image of a product becomes its
    /// primary automatically.
    pub async fn upload(
        &self,
        product_id: i64,
        filename: &str,
        data: Bytes,
    ) -> Result<ProductImage, AppError> {
        self.product_repo
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| AppError::not_found("Product not found"))?;

        let extension = file_extension(filename)
            .filter(|ext| self.uploads.allowed_extensions.contains(ext))
            .ok_or_else(|| {
                AppError::validation(format!(
                    "Unsupported image type; allowed: {}",
                    self.uploads.allowed_extensions.join(", ")
                ))
            })?;

        if data.is_empty() {
            return Err(AppError::validation("Uploaded file is empty"));
        }
        if data.len() > self.uploads.max_size_bytes() {
            return Err(AppError::validation(format!(
                "Image exceeds the {} MB limit",
                self.uploads.max_size_mb
            )));
        }

        let thumb_size = self.uploads.thumbnail_size;
        let original = data.clone();
        let thumbnail =
            tokio::task::spawn_blocking(move || make_thumbnail(&original, thumb_size))
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Internal, "Thumbnail task panicked", e)
                })??;

        let stem = Uuid::new_v4();
        let image_name = format!("{stem}.{extension}");
        let thumb_name = format!("{stem}_thumb.jpg");

        self.write_file(&image_name, &data).await?;
        self.write_file(&thumb_name, &thumbnail).await?;

        let image_url = format!("{URL_PREFIX}/{image_name}");
        let thumbnail_url = format!("{URL_PREFIX}/{thumb_name}");

        let image = match self
            .product_repo
            .create_image(product_id, &image_url, Some(&thumbnail_url))
            .await
        {
            Ok(image) => image,
            Err(e) => {
                self.remove_file(&image_name).await;
                self.remove_file(&thumb_name).await;
                return Err(e);
            }
        };

        debug!(
            product_id,
            image_id = image.id,
            bytes = data.len(),
            "Stored product image"
        );
        Ok(image)
    }

    /// Lists a product's images, primary first.
    pub async fn list(&self, product_id: i64) -> Result<Vec<ProductImage>, AppError> {
        self.product_repo
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| AppError::not_found("Product not found"))?;

        self.product_repo.list_images(product_id).await
    }

    /// Makes one image the product's primary.
    pub async fn set_primary(
        &self,
        product_id: i64,
        image_id: i64,
    ) -> Result<ProductImage, AppError> {
        self.product_repo.set_primary_image(product_id, image_id).await
    }

    /// Deletes an image record and its files on disk.
    pub async fn delete(&self, product_id: i64, image_id: i64) -> Result<(), AppError> {
        let image = self
            .product_repo
            .delete_image(product_id, image_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!(
                    "Image {image_id} not found for product {product_id}"
                ))
            })?;

        if let Some(name) = url_filename(&image.image_url) {
            self.remove_file(name).await;
        }
        if let Some(name) = image.thumbnail_url.as_deref().and_then(url_filename) {
            self.remove_file(name).await;
        }

        Ok(())
    }

    /// Writes one file into the uploads directory, creating it if needed.
    async fn write_file(&self, name: &str, data: &[u8]) -> Result<(), AppError> {
        fs::create_dir_all(&self.uploads.directory).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create uploads directory: {}", self.uploads.directory),
                e,
            )
        })?;

        let path = format!("{}/{}", self.uploads.directory, name);
        fs::write(&path, data).await.map_err(|e| {
            AppError::with_source(ErrorKind::Storage, format!("Failed to write file: {path}"), e)
        })
    }

    /// Best-effort file removal; a missing file is not an error.
    async fn remove_file(&self, name: &str) {
        let path = format!("{}/{}", self.uploads.directory, name);
        if let Err(e) = fs::remove_file(&path).await {
            if e.kind() != std::io::ErrorKind::NotFound {
                warn!(path, error = %e, "Failed to remove image file");
            }
        }
    }
}

/// Lowercased extension of an uploaded filename.
fn file_extension(filename: &str) -> Option<String> {
    std::path::Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
}

/// Filename component of a stored image URL.
fn url_filename(url: &str) -> Option<&str> {
    url.rsplit('/').next().filter(|name| !name.is_empty())
}

/// Decode-validates the upload and renders a JPEG thumbnail.
///
/// Alpha channels are flattened to RGB because JPEG cannot carry them.
fn make_thumbnail(data: &[u8], max_size: u32) -> Result<Vec<u8>, AppError> {
    let img = image::load_from_memory(data)
        .map_err(|e| AppError::validation(format!("File is not a valid image: {e}")))?;

    let thumb = image::DynamicImage::ImageRgb8(img.thumbnail(max_size, max_size).to_rgb8());

    let mut buf = Vec::new();
    let mut cursor = std::io::Cursor::new(&mut buf);
    thumb
        .write_to(&mut cursor, image::ImageFormat::Jpeg)
        .map_err(|e| AppError::internal(format!("Failed to encode thumbnail: {e}")))?;

    Ok(buf)
}
