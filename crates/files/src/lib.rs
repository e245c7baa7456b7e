//! `botdesk-files` — file storage contract surface.
//!
//! DTOs and the service interface only; storage mechanics are the hosting
//! deployment's concern.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use botdesk_core::{DomainResult, FileId, UserId};

/// Metadata for a stored file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredFile {
    pub id: FileId,
    pub owner: UserId,
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: u64,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileUploadRequest {
    pub file_name: String,
    pub content_type: String,
    /// Raw file bytes, base64-encoded on the wire.
    #[serde(with = "base64_bytes")]
    pub content: Vec<u8>,
}

/// File upload/retrieval, scoped to the owning user.
#[async_trait]
pub trait FileService: Send + Sync {
    async fn upload(&self, owner: UserId, request: FileUploadRequest) -> DomainResult<StoredFile>;

    async fn get(&self, owner: UserId, file_id: FileId) -> DomainResult<StoredFile>;

    async fn delete(&self, owner: UserId, file_id: FileId) -> DomainResult<()>;
}

mod base64_bytes {
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let text = String::deserialize(deserializer)?;
        STANDARD.decode(text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn upload_request_bytes_travel_as_base64() {
        let request = FileUploadRequest {
            file_name: "faq.pdf".to_string(),
            content_type: "application/pdf".to_string(),
            content: b"hello world".to_vec(),
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["content"], json!("aGVsbG8gd29ybGQ="));

        let back: FileUploadRequest = serde_json::from_value(value).unwrap();
        assert_eq!(back, request);
    }

    #[test]
    fn invalid_base64_is_a_deserialization_error() {
        let result = serde_json::from_value::<FileUploadRequest>(json!({
            "file_name": "faq.pdf",
            "content_type": "application/pdf",
            "content": "not base64 ***",
        }));
        assert!(result.is_err());
    }
}
