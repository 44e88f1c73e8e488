//! Media file library read client.
//!
//! Photos, videos, and audio shared with the site live in one drive
//! folder. The site lists files newest-first and links them through the
//! public view/download/thumbnail URL shapes.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::auth::{GoogleAuth, GoogleError, ServiceAccountKey, SCOPE_DRIVE_READONLY};

/// Base URL of the drive API.
const API_URL: &str = "https://www.googleapis.com/drive/v3";

/// File fields requested from the listing endpoint.
const FILE_FIELDS: &str =
    "files(id, name, mimeType, thumbnailLink, webContentLink, webViewLink, size, createdTime, modifiedTime)";

/// Page size for folder listings.
const LIST_PAGE_SIZE: i64 = 100;

/// Default thumbnail width in pixels.
pub const DEFAULT_THUMBNAIL_SIZE: u32 = 400;

/// A file in the shared media folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveFile {
    pub id: String,
    pub name: String,
    pub mime_type: String,
    #[serde(default)]
    pub thumbnail_link: Option<String>,
    #[serde(default)]
    pub web_content_link: Option<String>,
    #[serde(default)]
    pub web_view_link: Option<String>,
    /// Byte size as reported by the API (a decimal string).
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub created_time: Option<String>,
    #[serde(default)]
    pub modified_time: Option<String>,
}

impl DriveFile {
    /// Whether the file is an image.
    pub fn is_image(&self) -> bool {
        self.mime_type.starts_with("image/")
    }

    /// Whether the file is a video.
    pub fn is_video(&self) -> bool {
        self.mime_type.starts_with("video/")
    }

    /// Whether the file is audio.
    pub fn is_audio(&self) -> bool {
        self.mime_type.starts_with("audio/")
    }
}

/// Media kinds the gallery can filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    Audio,
}

impl MediaKind {
    /// The drive query clause matching this kind.
    fn mime_clause(self) -> &'static str {
        match self {
            MediaKind::Image => "mimeType contains 'image/'",
            MediaKind::Video => "mimeType contains 'video/'",
            MediaKind::Audio => "mimeType contains 'audio/'",
        }
    }
}

// -- public URL shapes -------------------------------------------------------

/// Direct view URL for a file.
pub fn view_url(file_id: &str) -> String {
    format!("https://drive.google.com/uc?export=view&id={file_id}")
}

/// Direct download URL for a file.
pub fn download_url(file_id: &str) -> String {
    format!("https://drive.google.com/uc?export=download&id={file_id}")
}

/// Embeddable preview URL for a file.
pub fn embed_url(file_id: &str) -> String {
    format!("https://drive.google.com/file/d/{file_id}/preview")
}

/// Thumbnail URL at the given width.
pub fn thumbnail_url(file_id: &str, width: u32) -> String {
    format!("https://drive.google.com/thumbnail?id={file_id}&sz=w{width}")
}

/// Render a byte count as a human-readable size.
pub fn format_file_size(bytes: u64) -> String {
    const KIB: u64 = 1024;
    const MIB: u64 = 1024 * KIB;
    const GIB: u64 = 1024 * MIB;
    if bytes < KIB {
        format!("{bytes} B")
    } else if bytes < MIB {
        format!("{:.1} KB", bytes as f64 / KIB as f64)
    } else if bytes < GIB {
        format!("{:.1} MB", bytes as f64 / MIB as f64)
    } else {
        format!("{:.1} GB", bytes as f64 / GIB as f64)
    }
}

// -- wire types --------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct FileList {
    #[serde(default)]
    files: Vec<DriveFile>,
}

// -- service -----------------------------------------------------------------

/// Media library service, tolerant of the folder being unconfigured.
pub struct MediaLibrary {
    inner: Option<DriveClient>,
}

struct DriveClient {
    auth: Arc<GoogleAuth>,
    client: reqwest::Client,
    folder_id: String,
}

impl MediaLibrary {
    /// Build from the environment (`GOOGLE_SERVICE_ACCOUNT_KEY` and
    /// `GOOGLE_DRIVE_FOLDER_ID`). Logs a warning and disables lookups when
    /// either is missing or the key is malformed.
    pub fn from_env() -> Self {
        let key = match ServiceAccountKey::from_env() {
            Ok(Some(key)) => key,
            Ok(None) => {
                tracing::warn!("Google service account key not set, media library disabled");
                return Self { inner: None };
            }
            Err(error) => {
                tracing::error!(%error, "Invalid Google service account key, media library disabled");
                return Self { inner: None };
            }
        };
        let Some(folder_id) = std::env::var("GOOGLE_DRIVE_FOLDER_ID").ok().filter(|v| !v.is_empty())
        else {
            tracing::warn!("GOOGLE_DRIVE_FOLDER_ID not set, media library disabled");
            return Self { inner: None };
        };
        Self::new(Arc::new(GoogleAuth::new(key, SCOPE_DRIVE_READONLY)), folder_id)
    }

    /// Build around an existing authenticator.
    pub fn new(auth: Arc<GoogleAuth>, folder_id: String) -> Self {
        Self {
            inner: Some(DriveClient {
                auth,
                client: reqwest::Client::new(),
                folder_id,
            }),
        }
    }

    /// A service with no folder behind it; every listing is empty.
    pub fn disabled() -> Self {
        Self { inner: None }
    }

    /// Whether a media folder is configured.
    pub fn is_configured(&self) -> bool {
        self.inner.is_some()
    }

    /// All files in the media folder, newest first.
    pub async fn media_files(&self) -> Vec<DriveFile> {
        let Some(inner) = &self.inner else {
            return Vec::new();
        };
        let query = format!("'{}' in parents and trashed = false", inner.folder_id);
        match inner.list(&query).await {
            Ok(files) => files,
            Err(error) => {
                tracing::error!(%error, "Drive listing failed");
                Vec::new()
            }
        }
    }

    /// Files of one media kind, newest first.
    pub async fn media_by_kind(&self, kind: MediaKind) -> Vec<DriveFile> {
        let Some(inner) = &self.inner else {
            return Vec::new();
        };
        let query = format!(
            "'{}' in parents and {} and trashed = false",
            inner.folder_id,
            kind.mime_clause()
        );
        match inner.list(&query).await {
            Ok(files) => files,
            Err(error) => {
                tracing::error!(%error, ?kind, "Drive listing failed");
                Vec::new()
            }
        }
    }
}

impl DriveClient {
    async fn list(&self, query: &str) -> Result<Vec<DriveFile>, GoogleError> {
        let token = self.auth.token().await?;
        let page_size = LIST_PAGE_SIZE.to_string();
        let response = self
            .client
            .get(format!("{API_URL}/files"))
            .query(&[
                ("q", query),
                ("fields", FILE_FIELDS),
                ("orderBy", "createdTime desc"),
                ("pageSize", page_size.as_str()),
            ])
            .bearer_auth(token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GoogleError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let list: FileList = response.json().await?;
        Ok(list.files)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn file(mime_type: &str) -> DriveFile {
        DriveFile {
            id: "f1".to_string(),
            name: "file".to_string(),
            mime_type: mime_type.to_string(),
            thumbnail_link: None,
            web_content_link: None,
            web_view_link: None,
            size: None,
            created_time: None,
            modified_time: None,
        }
    }

    #[test]
    fn mime_predicates() {
        assert!(file("image/jpeg").is_image());
        assert!(file("video/mp4").is_video());
        assert!(file("audio/mpeg").is_audio());
        assert!(!file("application/pdf").is_image());
    }

    #[test]
    fn url_shapes() {
        assert_eq!(view_url("f1"), "https://drive.google.com/uc?export=view&id=f1");
        assert_eq!(
            download_url("f1"),
            "https://drive.google.com/uc?export=download&id=f1"
        );
        assert_eq!(embed_url("f1"), "https://drive.google.com/file/d/f1/preview");
        assert_eq!(
            thumbnail_url("f1", DEFAULT_THUMBNAIL_SIZE),
            "https://drive.google.com/thumbnail?id=f1&sz=w400"
        );
    }

    #[test]
    fn file_sizes_format_per_magnitude() {
        assert_eq!(format_file_size(512), "512 B");
        assert_eq!(format_file_size(2_048), "2.0 KB");
        assert_eq!(format_file_size(5 * 1024 * 1024), "5.0 MB");
        assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3.0 GB");
    }

    #[test]
    fn file_list_decodes_with_camel_case_fields() {
        let json = r#"{"files": [{
            "id": "f1",
            "name": "stage.jpg",
            "mimeType": "image/jpeg",
            "thumbnailLink": "https://thumb",
            "webViewLink": "https://view",
            "size": "204800",
            "createdTime": "2025-06-01T12:00:00Z"
        }]}"#;
        let list: FileList = serde_json::from_str(json).unwrap();
        assert_eq!(list.files.len(), 1);
        assert_eq!(list.files[0].mime_type, "image/jpeg");
        assert_eq!(list.files[0].size.as_deref(), Some("204800"));
    }

    #[tokio::test]
    async fn disabled_library_returns_empty() {
        let library = MediaLibrary::disabled();
        assert!(library.media_files().await.is_empty());
        assert!(library.media_by_kind(MediaKind::Image).await.is_empty());
    }
}
