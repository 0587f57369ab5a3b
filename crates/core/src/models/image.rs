//! Local image preview for the composer
//!
//! Images are read into memory so the form can show them. Nothing here is
//! uploaded or written to the draft store.

use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::error::{Error, Result};

/// An image picked from disk, held only for preview
#[derive(Clone, PartialEq, Eq)]
pub struct ImagePreview {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ImagePreview {
    pub fn from_bytes(file_name: impl Into<String>, bytes: Vec<u8>) -> Result<Self> {
        let file_name = file_name.into();
        let mime_type = mime_for(&file_name).ok_or_else(|| {
            Error::Validation(format!("{} is not a supported image", file_name))
        })?;
        Ok(Self {
            file_name,
            mime_type,
            bytes,
        })
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("image")
            .to_string();
        // Check the extension before reading a potentially large file
        if mime_for(&file_name).is_none() {
            return Err(Error::Validation(format!(
                "{} is not a supported image",
                file_name
            )));
        }
        let bytes = std::fs::read(path)?;
        Self::from_bytes(file_name, bytes)
    }

    /// Inline `data:` URL suitable for an <img> preview
    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, STANDARD.encode(&self.bytes))
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

impl std::fmt::Debug for ImagePreview {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImagePreview")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("size", &self.bytes.len())
            .finish()
    }
}

fn mime_for(file_name: &str) -> Option<&'static str> {
    let ext = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())?
        .to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "svg" => Some("image/svg+xml"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_url() {
        let preview = ImagePreview::from_bytes("flyer.PNG", b"abc".to_vec()).unwrap();
        assert_eq!(preview.mime_type, "image/png");
        assert_eq!(preview.data_url(), "data:image/png;base64,YWJj");
    }

    #[test]
    fn test_rejects_non_images() {
        assert!(ImagePreview::from_bytes("notes.txt", Vec::new()).is_err());
        assert!(ImagePreview::from_bytes("noext", Vec::new()).is_err());
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("poster.jpg");
        std::fs::write(&path, [0xff, 0xd8, 0xff]).unwrap();

        let preview = ImagePreview::from_path(&path).unwrap();
        assert_eq!(preview.file_name, "poster.jpg");
        assert_eq!(preview.mime_type, "image/jpeg");
        assert_eq!(preview.size(), 3);
    }
}
