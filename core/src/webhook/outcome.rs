//! Normalized result of one submission attempt.

use serde_json::{json, Value};

/// Message carried by every successful outcome.
pub const SUCCESS_MESSAGE: &str = "Cardápio cadastrado com sucesso!";

/// Message used when the endpoint cannot be reached.
pub const CONNECTIVITY_MESSAGE: &str =
    "Não foi possível conectar ao servidor. Verifique sua conexão.";

/// Uniform result of a webhook call.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// The webhook accepted the submission. `payload` is passed through untouched.
    Success { message: String, payload: Value },
    /// The webhook refused the submission or could not be reached.
    Failure { message: String },
}

impl Outcome {
    /// Normalize an HTTP response.
    ///
    /// The body is parsed as JSON; anything else is wrapped as
    /// `{"message": <raw text>}`. A non-2xx status yields a failure whose
    /// message is the body's `message`, else its `error`, else a generic
    /// server error naming the status.
    pub fn from_response(status: u16, body: &str) -> Self {
        let data: Value =
            serde_json::from_str(body).unwrap_or_else(|_| json!({ "message": body }));

        if !(200..300).contains(&status) {
            let message = text_field(&data, "message")
                .or_else(|| text_field(&data, "error"))
                .unwrap_or_else(|| format!("Erro do servidor ({})", status));
            return Outcome::Failure { message };
        }

        Outcome::Success {
            message: SUCCESS_MESSAGE.to_string(),
            payload: data,
        }
    }

    /// Outcome for a request that got no response at all.
    ///
    /// `description` is the transport's own error text, if it has a usable one.
    pub fn unreachable(description: Option<&str>) -> Self {
        let message = description
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| CONNECTIVITY_MESSAGE.to_string());
        log::error!("Webhook unreachable: {}", message);
        Outcome::Failure { message }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            Outcome::Success { message, .. } | Outcome::Failure { message } => message,
        }
    }

    pub fn payload(&self) -> Option<&Value> {
        match self {
            Outcome::Success { payload, .. } => Some(payload),
            Outcome::Failure { .. } => None,
        }
    }
}

fn text_field(data: &Value, key: &str) -> Option<String> {
    data.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_passes_payload_through() {
        let outcome = Outcome::from_response(200, r#"{"id": 42}"#);
        assert!(outcome.is_success());
        assert_eq!(outcome.message(), SUCCESS_MESSAGE);
        assert_eq!(outcome.payload(), Some(&json!({"id": 42})));
    }

    #[test]
    fn test_success_with_plain_text_body() {
        let outcome = Outcome::from_response(201, "Workflow was started");
        assert_eq!(outcome.payload(), Some(&json!({"message": "Workflow was started"})));
    }

    #[test]
    fn test_failure_prefers_message() {
        let outcome = Outcome::from_response(
            500,
            r#"{"message": "limite excedido", "error": "quota"}"#,
        );
        assert_eq!(outcome, Outcome::Failure { message: "limite excedido".into() });
    }

    #[test]
    fn test_failure_falls_back_to_error_field() {
        let outcome = Outcome::from_response(422, r#"{"error": "merchant desconhecido"}"#);
        assert_eq!(outcome.message(), "merchant desconhecido");

        let outcome = Outcome::from_response(422, r#"{"message": "", "error": "vazio"}"#);
        assert_eq!(outcome.message(), "vazio");
    }

    #[test]
    fn test_failure_generic_message() {
        let outcome = Outcome::from_response(502, r#"{"code": 7}"#);
        assert_eq!(outcome.message(), "Erro do servidor (502)");

        let outcome = Outcome::from_response(404, "");
        assert_eq!(outcome.message(), "Erro do servidor (404)");
    }

    #[test]
    fn test_failure_with_plain_text_body() {
        let outcome = Outcome::from_response(500, "Bad Gateway");
        assert!(!outcome.is_success());
        assert_eq!(outcome.message(), "Bad Gateway");
        assert!(outcome.payload().is_none());
    }

    #[test]
    fn test_unreachable() {
        assert_eq!(Outcome::unreachable(None).message(), CONNECTIVITY_MESSAGE);
        assert_eq!(Outcome::unreachable(Some("  ")).message(), CONNECTIVITY_MESSAGE);
        assert_eq!(Outcome::unreachable(Some("dns failure")).message(), "dns failure");
    }
}
