//! Browser-side types.
//!
//! # Categories
//!
//! - **Files** - `web_sys::File` as a stageable attachment
//! - **Rendering** - Plain snapshots of staged attachments for the grid

use cardapio::{Attachment, AttachmentId, AttachmentStore, MediaKind, StagedFile};

use crate::services::ObjectUrlPreviews;

// =============================================================================
// Files
// =============================================================================

/// A file picked or dropped by the user.
#[derive(Clone, Debug)]
pub struct BrowserFile(pub web_sys::File);

impl StagedFile for BrowserFile {
    fn name(&self) -> String {
        self.0.name()
    }

    fn media_type(&self) -> String {
        self.0.type_()
    }
}

/// Attachment store backed by object URLs.
pub type UploadStore = AttachmentStore<BrowserFile, ObjectUrlPreviews>;

// =============================================================================
// Rendering
// =============================================================================

/// One cell of the attachment grid.
#[derive(Clone, Debug, PartialEq)]
pub struct AttachmentCard {
    /// Render key; survives removals of other cells
    pub id: AttachmentId,
    /// File name
    pub name: String,
    /// Image or PDF
    pub kind: MediaKind,
    /// Object URL, images only
    pub preview_url: Option<String>,
}

impl AttachmentCard {
    pub fn from_attachment(attachment: &Attachment<BrowserFile, String>) -> Self {
        Self {
            id: attachment.id(),
            name: attachment.file().name(),
            kind: attachment.kind(),
            preview_url: attachment.preview().cloned(),
        }
    }
}
