//! FormFill Pro - Frontend Rust/Leptos Application
//!
//! A WebAssembly demonstration interface for a document-to-form automation
//! product. Documents are organized by year from the native file picker and
//! a pre-seeded form can be reviewed and edited; extraction and download
//! are presentational only. All state lives in component memory and is
//! discarded on reload. Nothing is sent over the network or persisted.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  IndexPage (active tab + toast queue)                        │
//! │  ├── Navigation (hidden on the landing page)                │
//! │  ├── HeroSection or DocumentUpload or FormEditor            │
//! │  └── Toaster                                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Compile-time constants
//! - [`types`] - Common types (Document, FormField, ActiveTab, etc.)
//! - [`state`] - In-memory state operations (pure, host-testable)
//! - [`components`] - UI components (Navigation, Upload, FormEditor, etc.)

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod state;
pub mod components;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Documents
    Document, YearData,
    // Form
    FieldKind, FormField,
    // Navigation
    ActiveTab,
    // Toasts
    Toast,
    // Errors
    AppError, AppResult,
};

// Components
pub use components::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 FormFill Pro - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=config::APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=IndexPage/>
                </Routes>
            </main>
        </Router>
    }
}

/// Page controller: owns the active tab and mounts exactly one screen.
///
/// Transitions: Hero -> Upload via "Get Started"; Upload <-> Edit via the
/// navigation bar. There is no history and no URL sync; a reload starts
/// back at the hero screen.
#[component]
fn IndexPage() -> impl IntoView {
    let (active_tab, set_active_tab) = create_signal(ActiveTab::default());
    let (toasts, set_toasts) = create_signal(Vec::<Toast>::new());

    view! {
        <Show
            when=move || active_tab.get().shows_navigation()
            fallback=|| view! {}
        >
            <Navigation active_tab=active_tab set_active_tab=set_active_tab/>
        </Show>

        <div class="container">
            <Show
                when=move || active_tab.get() == ActiveTab::Hero
                fallback=|| view! {}
            >
                <HeroSection set_active_tab=set_active_tab/>
            </Show>

            <Show
                when=move || active_tab.get() == ActiveTab::Upload
                fallback=|| view! {}
            >
                <DocumentUpload set_toasts=set_toasts/>
            </Show>

            <Show
                when=move || active_tab.get() == ActiveTab::Edit
                fallback=|| view! {}
            >
                <FormEditor set_toasts=set_toasts/>
            </Show>
        </div>

        <Toaster toasts=toasts set_toasts=set_toasts/>
    }
}
