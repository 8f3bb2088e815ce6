//! Local files as attachments.

use std::path::{Path, PathBuf};

use crate::attachment::{PreviewAllocator, StagedFile};
use crate::error::PreviewError;

/// Media type for extensions we do not recognise.
pub const UNKNOWN_MEDIA_TYPE: &str = "application/octet-stream";

/// Infer a media type from the file extension.
pub fn media_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        "tif" | "tiff" => "image/tiff",
        "heic" => "image/heic",
        "avif" => "image/avif",
        "pdf" => "application/pdf",
        _ => UNKNOWN_MEDIA_TYPE,
    }
}

/// A file on disk, read when the request is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalFile {
    path: PathBuf,
    name: String,
    media_type: String,
}

impl LocalFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let media_type = media_type_for(&path).to_string();
        Self { path, name, media_type }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StagedFile for LocalFile {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn media_type(&self) -> String {
        self.media_type.clone()
    }
}

/// Preview references for the command line: the image's own path.
///
/// An image that cannot be stat'ed gets no preview and is refused.
#[derive(Debug, Default)]
pub struct PathPreviews {
    outstanding: usize,
}

impl PathPreviews {
    /// Previews handed out and not yet released.
    pub fn outstanding(&self) -> usize {
        self.outstanding
    }
}

impl PreviewAllocator<LocalFile> for PathPreviews {
    type Handle = PathBuf;

    fn allocate(&mut self, file: &LocalFile) -> Result<PathBuf, PreviewError> {
        let meta = std::fs::metadata(&file.path)
            .map_err(|e| PreviewError(format!("{}: {}", file.path.display(), e)))?;
        if !meta.is_file() {
            return Err(PreviewError(format!("{} is not a file", file.path.display())));
        }
        self.outstanding += 1;
        Ok(file.path.clone())
    }

    fn release(&mut self, handle: PathBuf) {
        debug_assert!(self.outstanding > 0, "preview {} released twice", handle.display());
        self.outstanding = self.outstanding.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attachment::{AttachmentStore, MediaKind};

    #[test]
    fn test_media_type_for() {
        assert_eq!(media_type_for(Path::new("menu.PNG")), "image/png");
        assert_eq!(media_type_for(Path::new("a/b/cardapio.jpeg")), "image/jpeg");
        assert_eq!(media_type_for(Path::new("menu.pdf")), "application/pdf");
        assert_eq!(media_type_for(Path::new("menu.docx")), UNKNOWN_MEDIA_TYPE);
        assert_eq!(media_type_for(Path::new("Makefile")), UNKNOWN_MEDIA_TYPE);
    }

    #[test]
    fn test_local_file_name() {
        let file = LocalFile::new("/tmp/uploads/bebidas.webp");
        assert_eq!(file.name(), "bebidas.webp");
        assert_eq!(file.media_type(), "image/webp");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "released twice")]
    fn test_double_release_is_caught() {
        let dir = tempfile::tempdir().unwrap();
        let image = dir.path().join("menu.png");
        std::fs::write(&image, b"\x89PNG").unwrap();

        let mut previews = PathPreviews::default();
        let handle = previews.allocate(&LocalFile::new(&image)).unwrap();
        previews.release(handle.clone());
        previews.release(handle);
    }

    #[test]
    fn test_store_with_path_previews() {
        let dir = tempfile::tempdir().unwrap();
        let image = dir.path().join("menu.png");
        std::fs::write(&image, b"\x89PNG").unwrap();

        let mut store = AttachmentStore::new(PathPreviews::default());
        let refused = store.admit(vec![
            LocalFile::new(&image),
            LocalFile::new(dir.path().join("missing.jpg")),
            LocalFile::new(dir.path().join("notes.txt")),
        ]);

        assert_eq!(store.len(), 1);
        assert_eq!(refused.len(), 2);
        assert!(refused[0].message.contains("missing.jpg"));
        assert!(refused[1].message.contains("notes.txt"));

        let staged = store.get(0).unwrap();
        assert_eq!(staged.kind(), MediaKind::Image);
        assert_eq!(staged.preview(), Some(&image));
        assert_eq!(store.previews().outstanding(), 1);

        store.clear();
        assert_eq!(store.previews().outstanding(), 0);
    }
}
