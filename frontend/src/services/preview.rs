//! Image thumbnails as object URLs.

use cardapio::{PreviewAllocator, PreviewError};

use crate::types::BrowserFile;

/// Hands out `blob:` URLs and revokes them on release.
#[derive(Debug, Default)]
pub struct ObjectUrlPreviews;

impl PreviewAllocator<BrowserFile> for ObjectUrlPreviews {
    type Handle = String;

    fn allocate(&mut self, file: &BrowserFile) -> Result<String, PreviewError> {
        web_sys::Url::create_object_url_with_blob(&file.0)
            .map_err(|e| PreviewError(format!("{:?}", e)))
    }

    fn release(&mut self, url: String) {
        if let Err(e) = web_sys::Url::revoke_object_url(&url) {
            log::warn!("Failed to revoke {}: {:?}", url, e);
        }
    }
}
