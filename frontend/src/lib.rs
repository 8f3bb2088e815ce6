//! Pigz IA - Menu uploader frontend (Rust/Leptos)
//!
//! A WebAssembly frontend for staging menu artwork and PDFs and sending
//! them to the Pigz IA menu automation webhook.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, tagline)                                   │
//! │  ├── SubmissionForm or SuccessPanel                          │
//! │  │   ├── Dropzone + attachment grid                          │
//! │  │   └── ProgressBar (while submitting)                      │
//! │  └── Toast (notifications)                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! State machines live in the `cardapio` crate; this crate only wires them
//! to signals, timers and browser APIs.
//!
//! # Modules
//!
//! - [`types`] - Browser file wrapper and render snapshots
//! - [`components`] - UI components (Hero, SubmissionForm, Dropzone, etc.)
//! - [`services`] - Webhook submission and object URL previews

use cardapio::NotificationCenter;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{AttachmentCard, BrowserFile, UploadStore};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install the panic hook and console logger, then mount [`App`].
pub fn start() {
    console_error_panic_hook::set_once();
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 {} - Starting Leptos App", APP_NAME);

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // Single notification slot shared by the whole page
    let notifications = create_rw_signal(NotificationCenter::new());

    view! {
        <div class="container">
            <Hero/>
            <SubmissionForm notifications=notifications/>
        </div>

        <Footer/>
        <Toast notifications=notifications/>
    }
}
