//! Webhook wire contract.
//!
//! Platform clients (reqwest on native targets, gloo-net in the browser)
//! share the multipart layout and the response normalization defined here.
//!
//! ```text
//! apiKey | merchantId | description | file_0 | file_1 | ...
//! ```

mod outcome;

pub use outcome::*;

use crate::config::{FIELD_API_KEY, FIELD_DESCRIPTION, FIELD_FILE_PREFIX, FIELD_MERCHANT_ID};

/// Snapshot of the form fields taken when a submission starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WebhookRequest {
    pub api_key: String,
    pub merchant_id: String,
    pub description: String,
}

impl WebhookRequest {
    /// Text parts of the multipart body, in wire order.
    ///
    /// The API key travels as a plain form field, not as a header.
    pub fn text_fields(&self) -> [(&'static str, &str); 3] {
        [
            (FIELD_API_KEY, self.api_key.as_str()),
            (FIELD_MERCHANT_ID, self.merchant_id.as_str()),
            (FIELD_DESCRIPTION, self.description.as_str()),
        ]
    }
}

/// Multipart field name of the file at `index`.
pub fn file_field(index: usize) -> String {
    format!("{}{}", FIELD_FILE_PREFIX, index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_layout() {
        let request = WebhookRequest {
            api_key: "k".into(),
            merchant_id: "m".into(),
            description: "Entradas, Bebidas".into(),
        };
        let names: Vec<_> = request.text_fields().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["apiKey", "merchantId", "description"]);
        assert_eq!(file_field(0), "file_0");
        assert_eq!(file_field(12), "file_12");
    }
}
