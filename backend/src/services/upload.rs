//! Upload storage
//!
//! Files are written under the configured uploads directory with a
//! generated name, `{unix_millis}-{random8}.{ext}`. The client's file name is
//! never used on disk.

use crate::error::ApiError;
use anyhow::Context;
use chrono::Utc;
use portfolio_shared::types::UploadResponse;
use std::path::{Path, PathBuf};
use tracing::info;
use uuid::Uuid;

/// Allowed MIME types and the extension stored for each.
///
/// SVG is excluded: uploads are served from the API origin and an SVG can
/// carry script.
const ALLOWED_TYPES: &[(&str, &str)] = &[
    ("image/jpeg", "jpg"),
    ("image/png", "png"),
    ("image/gif", "gif"),
    ("image/webp", "webp"),
    ("application/pdf", "pdf"),
];

/// Public URL prefix the uploads directory is served under
pub const UPLOADS_URL_PREFIX: &str = "/uploads";

/// Writes uploaded files to disk
#[derive(Debug, Clone)]
pub struct UploadService {
    dir: PathBuf,
    max_bytes: usize,
}

impl UploadService {
    pub fn new(dir: impl Into<PathBuf>, max_bytes: usize) -> Self {
        Self {
            dir: dir.into(),
            max_bytes,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    /// Create the uploads directory if needed
    pub async fn ensure_dir(&self) -> anyhow::Result<()> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .with_context(|| format!("Failed to create uploads directory {}", self.dir.display()))
    }

    /// Extension for an allowed content type
    pub fn extension_for(content_type: &str) -> Option<&'static str> {
        ALLOWED_TYPES
            .iter()
            .find(|(mime, _)| *mime == content_type)
            .map(|(_, ext)| *ext)
    }

    /// Validate and persist one file
    pub async fn store(&self, content_type: &str, data: &[u8]) -> Result<UploadResponse, ApiError> {
        let ext = Self::extension_for(content_type).ok_or_else(|| {
            ApiError::BadRequest(format!("File type '{}' not allowed", content_type))
        })?;

        if data.is_empty() {
            return Err(ApiError::BadRequest("No file provided".to_string()));
        }

        if data.len() > self.max_bytes {
            return Err(self.too_large());
        }

        let file_name = generate_file_name(ext);
        let path = self.dir.join(&file_name);

        tokio::fs::write(&path, data)
            .await
            .with_context(|| format!("Failed to write upload {}", path.display()))?;

        info!(file = %file_name, bytes = data.len(), "Stored upload");

        Ok(UploadResponse {
            url: format!("{}/{}", UPLOADS_URL_PREFIX, file_name),
            file_name,
        })
    }

    /// Error returned when a file exceeds the configured maximum
    pub fn too_large(&self) -> ApiError {
        ApiError::BadRequest(format!("File too large. Max size: {}", format_size(self.max_bytes)))
    }
}

/// Whole MB when the limit is a multiple of 1 MiB, otherwise KB rounded up
fn format_size(bytes: usize) -> String {
    const KIB: usize = 1024;
    const MIB: usize = 1024 * 1024;

    if bytes >= MIB && bytes % MIB == 0 {
        format!("{}MB", bytes / MIB)
    } else {
        format!("{}KB", bytes.div_ceil(KIB))
    }
}

/// `{unix_millis}-{random8}.{ext}`
fn generate_file_name(ext: &str) -> String {
    let random = Uuid::new_v4().simple().to_string();
    format!("{}-{}.{}", Utc::now().timestamp_millis(), &random[..8], ext)
}
