//! Application configuration.
//!
//! Centralized configuration for the FormFill Pro frontend.
//! Everything here is compile-time: the app has no environment
//! variables, config files or network endpoints.

/// Application name, shown in the navigation logo block.
pub const APP_NAME: &str = "FormFill Pro";

/// Tagline under the application name.
pub const APP_TAGLINE: &str = "Document Processing & Form Automation";

/// Advisory filter for the file picker.
///
/// Browsers treat `accept` as a hint only; drag-and-drop or programmatic
/// selection can still hand over other file types, and nothing here
/// validates them.
pub const ACCEPTED_FILE_TYPES: &str = ".pdf,.doc,.docx,.jpg,.jpeg,.png";

/// How long a toast stays on screen before auto-dismissing (ms).
pub const TOAST_DURATION_MS: u32 = 4000;

/// Maximum toasts kept on screen at once.
pub const MAX_TOASTS: usize = 5;

/// Bytes per megabyte, for display-size formatting.
pub const BYTES_PER_MEGABYTE: f64 = 1024.0 * 1024.0;
