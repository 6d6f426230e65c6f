use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

/// File extensions accepted by the uploader, lower-case and without the dot.
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["jpeg", "jpg", "png", "webp"];

/// An image held in memory, ready to be uploaded or previewed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageFile {
    /// File name sent in the multipart `filename` parameter.
    pub file_name: String,
    /// MIME type derived from the file extension.
    pub content_type: &'static str,
    /// Raw file contents.
    pub bytes: Arc<[u8]>,
}

/// Errors raised while turning a user-selected file into an [`ImageFile`].
#[derive(Debug, Error)]
pub enum ImageFileError {
    /// The extension is not one of [`SUPPORTED_EXTENSIONS`].
    #[error("Unsupported image type: {0}")]
    Unsupported(String),
    /// The file could not be read.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ImageFile {
    /// Read an image from disk.
    pub fn from_path(path: &Path) -> Result<Self, ImageFileError> {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| path.to_string_lossy().to_string());
        let content_type = content_type_for(&file_name)
            .ok_or_else(|| ImageFileError::Unsupported(file_name.clone()))?;
        let bytes = std::fs::read(path).map_err(|source| ImageFileError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            file_name,
            content_type,
            bytes: bytes.into(),
        })
    }

    /// Wrap bytes that are already in memory, such as a dropped file.
    pub fn from_bytes(
        file_name: impl Into<String>,
        bytes: impl Into<Arc<[u8]>>,
    ) -> Result<Self, ImageFileError> {
        let file_name = file_name.into();
        let content_type = content_type_for(&file_name)
            .ok_or_else(|| ImageFileError::Unsupported(file_name.clone()))?;
        Ok(Self {
            file_name,
            content_type,
            bytes: bytes.into(),
        })
    }

    /// Number of bytes in the payload.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// True when the payload is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Whether a file name carries one of the supported image extensions.
pub fn is_supported_image_name(name: &str) -> bool {
    content_type_for(name).is_some()
}

fn content_type_for(name: &str) -> Option<&'static str> {
    let extension = Path::new(name)
        .extension()?
        .to_str()?
        .to_ascii_lowercase();
    match extension.as_str() {
        "jpeg" | "jpg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "webp" => Some("image/webp"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn supported_names_are_case_insensitive() {
        assert!(is_supported_image_name("bottle.JPG"));
        assert!(is_supported_image_name("can.webp"));
        assert!(!is_supported_image_name("notes.txt"));
        assert!(!is_supported_image_name("png"));
    }

    #[test]
    fn from_bytes_derives_content_type() {
        let image = ImageFile::from_bytes("box.png", vec![1u8, 2, 3]).unwrap();
        assert_eq!(image.content_type, "image/png");
        assert_eq!(image.len(), 3);
    }

    #[test]
    fn from_bytes_rejects_unsupported_names() {
        let err = ImageFile::from_bytes("clip.gif", vec![0u8]).unwrap_err();
        assert!(matches!(err, ImageFileError::Unsupported(name) if name == "clip.gif"));
    }

    #[test]
    fn from_path_reads_file_contents() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("jar.jpeg");
        std::fs::write(&path, b"fake jpeg").unwrap();
        let image = ImageFile::from_path(&path).unwrap();
        assert_eq!(image.file_name, "jar.jpeg");
        assert_eq!(image.content_type, "image/jpeg");
        assert_eq!(&*image.bytes, b"fake jpeg");
    }

    #[test]
    fn from_path_reports_missing_files() {
        let dir = tempdir().unwrap();
        let err = ImageFile::from_path(&dir.path().join("missing.png")).unwrap_err();
        assert!(matches!(err, ImageFileError::Read { .. }));
    }
}
