//! HTTP media storage adapter.
//!
//! Pushes uploads to the configured storage service as multipart POSTs and
//! maps the response to a `MediaAsset`. The service's contract:
//!
//! - `POST {base_url}/upload` with parts `file` and `folder` returns
//!   `{"public_id": "...", "secure_url": "..."}`
//! - `DELETE {base_url}/assets/{public_id}` removes an asset

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::config::MediaConfig;
use crate::domain::course::MediaAsset;
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::{MediaStorage, MediaUpload};

/// Media storage client.
pub struct HttpMediaStorage {
    base_url: String,
    api_key: SecretString,
    http_client: reqwest::Client,
}

impl HttpMediaStorage {
    pub fn new(config: &MediaConfig) -> Self {
        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: SecretString::new(config.api_key.clone()),
            http_client: reqwest::Client::new(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    public_id: String,
    secure_url: String,
}

fn storage_error(message: impl Into<String>) -> DomainError {
    DomainError::new(ErrorCode::MediaStorageError, message)
}

#[async_trait]
impl MediaStorage for HttpMediaStorage {
    async fn upload(&self, upload: MediaUpload) -> Result<MediaAsset, DomainError> {
        let url = format!("{}/upload", self.base_url);

        let part = reqwest::multipart::Part::bytes(upload.bytes)
            .file_name(upload.file_name)
            .mime_str(&upload.content_type)
            .map_err(|e| storage_error(format!("Invalid content type: {}", e)))?;

        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("folder", upload.folder);

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .multipart(form)
            .send()
            .await
            .map_err(|e| storage_error(e.to_string()))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!(error = %error_text, "media upload failed");
            return Err(storage_error(format!("Storage API error: {}", error_text)));
        }

        let uploaded: UploadResponse = response
            .json()
            .await
            .map_err(|e| storage_error(format!("Failed to parse storage response: {}", e)))?;

        Ok(MediaAsset {
            public_id: uploaded.public_id,
            secure_url: uploaded.secure_url,
        })
    }

    async fn delete(&self, public_id: &str) -> Result<(), DomainError> {
        let url = format!("{}/assets/{}", self.base_url, public_id);

        let response = self
            .http_client
            .delete(&url)
            .bearer_auth(self.api_key.expose_secret())
            .send()
            .await
            .map_err(|e| storage_error(e.to_string()))?;

        if !response.status().is_success() && response.status() != reqwest::StatusCode::NOT_FOUND {
            let error_text = response.text().await.unwrap_or_default();
            return Err(storage_error(format!("Storage API error: {}", error_text)));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped_from_base_url() {
        let storage = HttpMediaStorage::new(&MediaConfig {
            base_url: "https://media.example.com/v1/".to_string(),
            api_key: "key".to_string(),
        });
        assert_eq!(storage.base_url, "https://media.example.com/v1");
    }

    #[test]
    fn upload_response_deserializes() {
        let response: UploadResponse = serde_json::from_str(
            r#"{"public_id":"lms/abc","secure_url":"https://cdn.example.com/lms/abc.png"}"#,
        )
        .unwrap();
        assert_eq!(response.public_id, "lms/abc");
    }
}
