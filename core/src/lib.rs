//! # Cardápio - Pigz IA menu uploader
//!
//! Stages menu artwork (images and PDFs), validates the partner credentials
//! and posts everything to the Pigz IA menu automation webhook.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐     ┌─────────────┐
//! │   Intake    │────▶│  Attachment  │────▶│  Submission  │────▶│   Webhook   │
//! │ (drop/pick) │     │    Store     │     │  Controller  │     │   Client    │
//! └─────────────┘     └──────────────┘     └──────┬───────┘     └──────┬──────┘
//!                                                 │◀───── Outcome ─────┘
//!                                                 ▼
//!                                          Notifications
//! ```
//!
//! Everything in this crate except [`native`] is platform-neutral and is
//! shared with the WebAssembly frontend.
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`config`] - Endpoint, timing and field-name constants
//! - [`attachment`] - Attachment Store and preview lifecycle
//! - [`notification`] - Single-slot notifications
//! - [`submission`] - Submission Controller state machine
//! - [`webhook`] - Multipart layout and response normalization
//! - [`native`] - reqwest client and tokio runner (feature `native`)

// Core modules
pub mod config;
pub mod error;

// Staging and submission
pub mod attachment;
pub mod notification;
pub mod submission;

// Wire contract
pub mod webhook;

// Native client
#[cfg(feature = "native")]
pub mod native;

// =============================================================================
// Re-exports
// =============================================================================

pub use attachment::{
    AdmissionReport, Attachment, AttachmentId, AttachmentStore, MediaKind, PreviewAllocator,
    StagedEntry, StagedFile,
};
pub use config::Timing;
pub use error::{PreviewError, SubmissionError, SubmissionResult, ValidationError};
pub use notification::{Notification, NotificationCenter, Severity, Ticket};
pub use submission::{Phase, Resolution, SubmissionController, SubmissionFields};
pub use webhook::{Outcome, WebhookRequest};

#[cfg(feature = "native")]
pub use config::Settings;
#[cfg(feature = "native")]
pub use error::{ClientError, ClientResult};
#[cfg(feature = "native")]
pub use native::{run_submission, LocalFile, PathPreviews, SubmissionEvent, WebhookClient};

#[cfg(feature = "cli")]
pub use error::CliError;
