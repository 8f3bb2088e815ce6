//! Native (non-wasm) submission support.
//!
//! - [`files`] - Local files as attachments, path-based previews
//! - [`client`] - reqwest multipart webhook client
//! - [`runner`] - tokio driver for one submission

pub mod client;
pub mod files;
pub mod runner;

pub use client::*;
pub use files::*;
pub use runner::*;
