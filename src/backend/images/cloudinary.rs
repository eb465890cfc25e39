/**
 * Cloudinary Upload Client
 *
 * Sends images to `{upload_url}/{cloud_name}/image/upload` as a signed
 * multipart request. The signature is the hex digest of the signed
 * parameters followed by the API secret, using the account's configured
 * algorithm (SHA-1 unless `CLOUDINARY_SIGNATURE_ALGORITHM` says otherwise).
 */
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use sha1::Sha1;
use sha2::{Digest, Sha256};

use super::{HostedImage, ImageHost, ImageHostError, ImageUpload};
use crate::shared::config::{ImageHostConfig, SignatureAlgorithm};

/// Bound on a single upload round-trip
const UPLOAD_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct UploadResponse {
    secure_url: String,
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// Cloudinary-backed image host
pub struct CloudinaryHost {
    config: ImageHostConfig,
    client: Client,
}

impl CloudinaryHost {
    pub fn new(config: ImageHostConfig) -> Result<Self, ImageHostError> {
        let client = Client::builder().timeout(UPLOAD_TIMEOUT).build()?;
        Ok(Self { config, client })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/{}/image/upload",
            self.config.upload_url.trim_end_matches('/'),
            self.config.cloud_name
        )
    }
}

/// Signature over the signed upload parameters
pub(crate) fn sign(timestamp: i64, api_secret: &str, algorithm: SignatureAlgorithm) -> String {
    let payload = format!("timestamp={}{}", timestamp, api_secret);
    match algorithm {
        SignatureAlgorithm::Sha1 => hex::encode(Sha1::digest(payload.as_bytes())),
        SignatureAlgorithm::Sha256 => hex::encode(Sha256::digest(payload.as_bytes())),
    }
}

/// File part of the upload form
///
/// A content type that does not parse is dropped rather than failing the
/// upload; the host sniffs the format from the bytes.
fn file_part(image: &ImageUpload) -> Part {
    let part = || Part::bytes(image.bytes.to_vec()).file_name(image.file_name.clone());
    let Some(content_type) = image.content_type.as_deref() else {
        return part();
    };
    match part().mime_str(content_type) {
        Ok(typed) => typed,
        Err(e) => {
            tracing::debug!("Ignoring content type {:?} of '{}': {}", content_type, image.file_name, e);
            part()
        }
    }
}

#[async_trait]
impl ImageHost for CloudinaryHost {
    async fn upload(&self, image: ImageUpload) -> Result<HostedImage, ImageHostError> {
        let timestamp = Utc::now().timestamp();

        let signature = sign(timestamp, &self.config.api_secret, self.config.signature_algorithm);

        let form = Form::new()
            .part("file", file_part(&image))
            .text("api_key", self.config.api_key.clone())
            .text("timestamp", timestamp.to_string())
            .text("signature", signature);

        tracing::debug!("Uploading '{}' ({} bytes) to Cloudinary", image.file_name, image.bytes.len());

        let response = self.client.post(self.endpoint()).multipart(form).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|e| e.error.message)
                .unwrap_or_else(|_| if body.is_empty() { status.to_string() } else { body });
            return Err(ImageHostError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let uploaded = response.json::<UploadResponse>().await?;
        Ok(HostedImage {
            secure_url: uploaded.secure_url,
        })
    }
}
