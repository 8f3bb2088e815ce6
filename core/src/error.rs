//! Error types for the menu uploader.
//!
//! - [`ValidationError`] - Missing form input, detected before any network call
//! - [`SubmissionError`] - Refused submission attempts
//! - [`PreviewError`] - Platform could not produce a preview handle
//! - [`ClientError`] - Native webhook client failures (feature `native`)
//! - [`CliError`] - Top-level errors of the `cardapio` binary (feature `cli`)
//!
//! The `Display` text of [`ValidationError`] is the message shown to the user.

use thiserror::Error;

use crate::submission::Phase;

// =============================================================================
// Validation Errors
// =============================================================================

/// Required input missing at submit time.
///
/// Checked in declaration order; the first failure wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Empty API key.
    #[error("Por favor, insira sua Chave API.")]
    MissingApiKey,

    /// Empty merchant identifier.
    #[error("Por favor, insira o Merchant ID.")]
    MissingMerchantId,

    /// Nothing staged.
    #[error("Por favor, anexe o cardápio.")]
    NoAttachments,
}

// =============================================================================
// Submission Errors
// =============================================================================

/// Reasons a submit trigger did not start a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmissionError {
    /// Form input is incomplete.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// A submission is already running or its result is on screen.
    #[error("Submission not accepted while {0:?}")]
    Busy(Phase),
}

// =============================================================================
// Preview Errors
// =============================================================================

/// Failure to allocate a local preview reference for an image.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Preview unavailable: {0}")]
pub struct PreviewError(pub String);

// =============================================================================
// Native Client Errors
// =============================================================================

/// Errors from the reqwest webhook client.
#[cfg(feature = "native")]
#[derive(Debug, Error)]
pub enum ClientError {
    /// Request could not be built, sent, or its body read.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A staged file could not be read from disk.
    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// =============================================================================
// CLI Errors
// =============================================================================

/// Errors surfaced by the `cardapio` binary.
#[cfg(feature = "cli")]
#[derive(Debug, Error)]
pub enum CliError {
    /// Submission was refused before reaching the network.
    #[error(transparent)]
    Submission(#[from] SubmissionError),

    /// The webhook reported failure or could not be reached.
    ///
    /// The reason was already shown as a notification.
    #[error("Submission failed")]
    Rejected,

    /// None of the given files can be staged.
    #[error("No acceptable attachments among {0} file(s)")]
    NothingStaged(usize),

    /// Report could not be encoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for submission control.
pub type SubmissionResult<T> = Result<T, SubmissionError>;

/// Result type for native client operations.
#[cfg(feature = "native")]
pub type ClientResult<T> = Result<T, ClientError>;
