//! Attachment staging.
//!
//! The [`AttachmentStore`] owns every staged file together with its preview
//! handle. Preview handles come from a platform [`PreviewAllocator`] (object
//! URLs in the browser, file paths on the command line) and are handed back
//! to it exactly once: on [`remove`](AttachmentStore::remove), on
//! [`clear`](AttachmentStore::clear), or when the store is dropped.

use serde::Serialize;

use crate::error::PreviewError;
use crate::notification::Notification;

/// Media type accepted as a document.
pub const PDF_MEDIA_TYPE: &str = "application/pdf";

/// Media type prefix accepted as an image.
pub const IMAGE_MEDIA_PREFIX: &str = "image/";

/// Kind of a staged attachment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Pdf,
}

impl MediaKind {
    /// Classify a media type, or `None` if it is not accepted.
    pub fn classify(media_type: &str) -> Option<Self> {
        if media_type == PDF_MEDIA_TYPE {
            Some(MediaKind::Pdf)
        } else if media_type.starts_with(IMAGE_MEDIA_PREFIX) {
            Some(MediaKind::Image)
        } else {
            None
        }
    }
}

/// A file handle that can be staged.
pub trait StagedFile {
    /// Display name, used in notifications and as the multipart file name.
    fn name(&self) -> String;

    /// MIME type as reported by the platform.
    fn media_type(&self) -> String;
}

/// Source of revocable preview references.
pub trait PreviewAllocator<F> {
    type Handle;

    /// Create a preview for an image file.
    fn allocate(&mut self, file: &F) -> Result<Self::Handle, PreviewError>;

    /// Give a preview back. Called once per successful `allocate`.
    fn release(&mut self, handle: Self::Handle);
}

/// Stable identity of a staged attachment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AttachmentId(u64);

/// One staged file.
#[derive(Debug)]
pub struct Attachment<F, H> {
    id: AttachmentId,
    file: F,
    kind: MediaKind,
    preview: Option<H>,
}

impl<F, H> Attachment<F, H> {
    pub fn id(&self) -> AttachmentId {
        self.id
    }

    pub fn file(&self) -> &F {
        &self.file
    }

    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    /// Preview handle; present exactly when `kind` is [`MediaKind::Image`].
    pub fn preview(&self) -> Option<&H> {
        self.preview.as_ref()
    }
}

/// Ordered collection of staged files.
pub struct AttachmentStore<F, A: PreviewAllocator<F>> {
    items: Vec<Attachment<F, A::Handle>>,
    previews: A,
    next_id: u64,
}

impl<F: StagedFile, A: PreviewAllocator<F>> AttachmentStore<F, A> {
    pub fn new(previews: A) -> Self {
        Self {
            items: Vec::new(),
            previews,
            next_id: 0,
        }
    }

    /// Stage every acceptable candidate, in arrival order.
    ///
    /// Returns one info notification per refused candidate. A refusal does
    /// not affect the other candidates.
    pub fn admit<I>(&mut self, candidates: I) -> Vec<Notification>
    where
        I: IntoIterator<Item = F>,
    {
        let mut refused = Vec::new();

        for file in candidates {
            let name = file.name();
            let Some(kind) = MediaKind::classify(&file.media_type()) else {
                log::info!("Refused {} ({})", name, file.media_type());
                refused.push(Notification::info(format!(
                    "Arquivo {} ignorado. Apenas imagens e PDFs.",
                    name
                )));
                continue;
            };

            let preview = match kind {
                MediaKind::Image => match self.previews.allocate(&file) {
                    Ok(handle) => Some(handle),
                    Err(e) => {
                        log::warn!("No preview for {}: {}", name, e);
                        refused.push(Notification::info(format!(
                            "Arquivo {} ignorado. Não foi possível gerar a pré-visualização.",
                            name
                        )));
                        continue;
                    }
                },
                MediaKind::Pdf => None,
            };

            let id = AttachmentId(self.next_id);
            self.next_id += 1;
            self.items.push(Attachment { id, file, kind, preview });
        }

        refused
    }
}

impl<F, A: PreviewAllocator<F>> AttachmentStore<F, A> {
    /// Remove the attachment at `index`, releasing its preview.
    ///
    /// Returns `false` and changes nothing when `index` is out of range.
    pub fn remove(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            log::warn!("Ignoring removal of attachment {} of {}", index, self.items.len());
            return false;
        }
        let attachment = self.items.remove(index);
        if let Some(handle) = attachment.preview {
            self.previews.release(handle);
        }
        true
    }

    /// Release every preview and empty the store.
    pub fn clear(&mut self) {
        for attachment in self.items.drain(..) {
            if let Some(handle) = attachment.preview {
                self.previews.release(handle);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Attachment<F, A::Handle>> {
        self.items.get(index)
    }

    /// Current index of the attachment with `id`.
    pub fn position(&self, id: AttachmentId) -> Option<usize> {
        self.items.iter().position(|a| a.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Attachment<F, A::Handle>> {
        self.items.iter()
    }

    /// Staged file handles in submission order.
    pub fn files(&self) -> impl Iterator<Item = &F> {
        self.items.iter().map(|a| &a.file)
    }

    pub fn previews(&self) -> &A {
        &self.previews
    }
}

/// Summary of one staged attachment, for reports.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StagedEntry {
    pub name: String,
    pub kind: MediaKind,
}

/// What an admission pass staged and what it refused.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AdmissionReport {
    pub staged: Vec<StagedEntry>,
    pub refused: Vec<Notification>,
}

impl AdmissionReport {
    /// Snapshot `store` together with the notifications `admit` returned.
    pub fn new<F, A>(store: &AttachmentStore<F, A>, refused: Vec<Notification>) -> Self
    where
        F: StagedFile,
        A: PreviewAllocator<F>,
    {
        let staged = store
            .iter()
            .map(|a| StagedEntry {
                name: a.file().name(),
                kind: a.kind(),
            })
            .collect();
        Self { staged, refused }
    }
}

impl<F, A: PreviewAllocator<F>> Drop for AttachmentStore<F, A> {
    fn drop(&mut self) {
        self.clear();
    }
}
