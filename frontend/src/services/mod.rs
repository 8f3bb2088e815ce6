//! Browser services.
//!
//! # Services
//!
//! - [`webhook`] - Multipart submission to the menu webhook (gloo-net)
//! - [`preview`] - Object URLs for image thumbnails

pub mod preview;
pub mod webhook;

pub use preview::*;
pub use webhook::*;
