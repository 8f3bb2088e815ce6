//! Submission to the menu webhook over `fetch`.

use cardapio::webhook::file_field;
use cardapio::{Outcome, StagedFile, WebhookRequest};
use gloo_net::http::Request;
use web_sys::FormData;

use crate::types::BrowserFile;

/// Post one submission. Never fails: every error becomes a failure [`Outcome`].
pub async fn send_to_webhook(url: &str, request: &WebhookRequest, files: &[BrowserFile]) -> Outcome {
    let form_data = match build_form_data(request, files) {
        Ok(form_data) => form_data,
        Err(e) => {
            log::error!("Failed to build form data: {}", e);
            return Outcome::Failure { message: e };
        }
    };

    let http_request = match Request::post(url).body(form_data) {
        Ok(http_request) => http_request,
        Err(e) => return Outcome::Failure { message: format!("Failed to build request: {}", e) },
    };

    let response = match http_request.send().await {
        Ok(response) => response,
        Err(e) => return transport_failure(e),
    };

    let status = response.status();
    match response.text().await {
        Ok(body) => Outcome::from_response(status, &body),
        Err(e) => Outcome::unreachable(Some(e.to_string().as_str())),
    }
}

/// Outcome for a `fetch` that produced no response.
///
/// A rejected `fetch` is a network failure and gets the generic connectivity
/// message; any other error keeps its own text.
fn transport_failure(error: gloo_net::Error) -> Outcome {
    match error {
        gloo_net::Error::JsError(e) => {
            log::error!("Webhook request failed: {}", e);
            Outcome::unreachable(None)
        }
        other => Outcome::unreachable(Some(other.to_string().as_str())),
    }
}

/// `apiKey`, `merchantId`, `description`, then `file_<n>` in staging order.
fn build_form_data(request: &WebhookRequest, files: &[BrowserFile]) -> Result<FormData, String> {
    let form_data = FormData::new().map_err(|e| format!("Failed to create FormData: {:?}", e))?;

    for (name, value) in request.text_fields() {
        form_data
            .append_with_str(name, value)
            .map_err(|e| format!("Failed to append {}: {:?}", name, e))?;
    }

    for (index, file) in files.iter().enumerate() {
        form_data
            .append_with_blob_and_filename(&file_field(index), &file.0, &file.name())
            .map_err(|e| format!("Failed to append file {}: {:?}", file.name(), e))?;
    }

    Ok(form_data)
}
