//! Application configuration.
//!
//! Endpoint and timing values come from the shared `cardapio` crate so the
//! browser and the command line behave the same way.

pub use cardapio::config::{PROGRESS_TICK, SETTLE_DELAY, WEBHOOK_URL};

/// Application name, shown in the page title and hero.
pub const APP_NAME: &str = "Pigz IA";

/// `accept` filter for the file chooser.
///
/// Only a hint for the picker; admission is decided by the attachment store.
pub const ACCEPTED_FILES: &str = "image/*,application/pdf";
