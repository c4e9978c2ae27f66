//! UI Components for the FormFill Pro application.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Navigation`] - Tab bar with mobile menu toggle
//! - [`HeroSection`] - Landing page content
//!
//! # Feature Components
//! - [`DocumentUpload`] - Year buckets fed by the native file picker
//! - [`FormEditor`] - Pre-seeded form fields with an edit/view toggle
//! - [`Toaster`] - Transient notification display

mod form_editor;
mod hero;
mod navigation;
mod toast;
mod upload;

pub use form_editor::*;
pub use hero::*;
pub use navigation::*;
pub use toast::*;
pub use upload::*;
