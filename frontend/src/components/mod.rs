//! UI Components for the Pigz IA menu uploader.
//!
//! # Layout Components
//! - [`Hero`] - Title and tagline
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`SubmissionForm`] - Credentials, attachments, description, submit
//! - [`Dropzone`] - Drag & drop intake and attachment grid
//! - [`ProgressBar`] - Simulated upload progress
//! - [`SuccessPanel`] - Confirmation with the products link
//! - [`Toast`] - Transient notifications

mod hero;
mod form;
mod dropzone;
mod progress;
mod success;
mod notification;
mod footer;

pub use hero::*;
pub use form::*;
pub use dropzone::*;
pub use progress::*;
pub use success::*;
pub use notification::*;
pub use footer::*;
