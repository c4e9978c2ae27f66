//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Document Types** - Uploaded file metadata grouped by year
//! - **Form Types** - Editable form fields with mocked extraction sources
//! - **Navigation Types** - Top-level screen selection
//! - **Toast Types** - Transient notifications
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Document Types
// =============================================================================

/// Metadata for a single uploaded file.
///
/// Built from the browser's `File` handle at selection time. The file
/// contents are never read; only name, size and MIME type are kept.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Client-generated UUID v4
    pub id: String,
    /// File name as reported by the picker
    pub name: String,
    /// Pre-formatted size string ("X.XX MB")
    pub size: String,
    /// MIME type as reported by the browser (may be empty)
    #[serde(rename = "type")]
    pub mime_type: String,
}

/// A year bucket: a label plus the documents uploaded under it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct YearData {
    /// Year label ("2024")
    pub year: String,
    /// Documents in upload order
    pub documents: Vec<Document>,
}

// =============================================================================
// Form Types
// =============================================================================

/// Which input widget a form field renders as.
///
/// The kind only selects the widget; no kind-specific validation is
/// performed on the value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Single-line text input
    Text,
    /// Multi-line text area
    Textarea,
    /// Numeric input
    Number,
    /// Email input
    Email,
}

impl FieldKind {
    /// HTML `type` attribute for the rendered input.
    pub fn input_type(&self) -> &'static str {
        match self {
            FieldKind::Text => "text",
            FieldKind::Number => "number",
            FieldKind::Email => "email",
            // Textarea renders as its own element; the attribute is unused
            // but kept total so callers never need a special case.
            FieldKind::Textarea => "text",
        }
    }
}

/// A labeled, editable form field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormField {
    /// Stable field identifier
    pub id: String,
    /// Display label
    pub label: String,
    /// Current value (mutated in place while editing)
    pub value: String,
    /// Input widget selector
    #[serde(rename = "type")]
    pub kind: FieldKind,
    /// Source file the value was (mock-)extracted from, display only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extracted_from: Option<String>,
}

// =============================================================================
// Navigation Types
// =============================================================================

/// Which top-level screen the page controller renders.
///
/// There is no history stack and no URL sync; a reload always lands
/// back on [`ActiveTab::Hero`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ActiveTab {
    /// Landing page
    #[default]
    Hero,
    /// Document upload screen
    Upload,
    /// Form editor screen
    Edit,
}

impl ActiveTab {
    /// The navigation bar is hidden on the landing page.
    pub fn shows_navigation(&self) -> bool {
        !matches!(self, ActiveTab::Hero)
    }
}

// =============================================================================
// Toast Types
// =============================================================================

/// A transient notification shown by the [`crate::components::Toaster`].
///
/// Fire-and-forget: pushed by handlers, auto-dismissed after a timeout.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Toast {
    /// Client-generated UUID v4, used as the list key and for dismissal
    pub id: String,
    /// Short headline ("Documents uploaded")
    pub title: String,
    /// One-line detail text
    pub description: String,
    /// Timestamp string (HH:MM:SS)
    pub timestamp: String,
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// The UI is nearly total over its inputs; the only fallible operation is
/// deriving the next year label from the first bucket.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// "Add year" was invoked with no year buckets to derive from.
    EmptyYears,
    /// The first year label is not an integer.
    BadYearLabel(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::EmptyYears => write!(f, "No year available to derive the next year from"),
            AppError::BadYearLabel(label) => write!(f, "Year label is not a number: {}", label),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_tab_defaults_to_hero() {
        assert_eq!(ActiveTab::default(), ActiveTab::Hero);
        assert!(!ActiveTab::default().shows_navigation());
    }

    #[test]
    fn test_navigation_visible_outside_hero() {
        assert!(ActiveTab::Upload.shows_navigation());
        assert!(ActiveTab::Edit.shows_navigation());
    }

    #[test]
    fn test_field_kind_input_type() {
        assert_eq!(FieldKind::Text.input_type(), "text");
        assert_eq!(FieldKind::Number.input_type(), "number");
        assert_eq!(FieldKind::Email.input_type(), "email");
    }

    #[test]
    fn test_form_field_deserialization() {
        let json = r#"{
            "id": "3",
            "label": "Business Address",
            "value": "123 Business Ave, Suite 100, New York, NY 10001",
            "type": "textarea",
            "extractedFrom": "2024-registration.pdf"
        }"#;

        let field: FormField = serde_json::from_str(json).expect("valid form field JSON");
        assert_eq!(field.kind, FieldKind::Textarea);
        assert_eq!(field.extracted_from.as_deref(), Some("2024-registration.pdf"));
    }

    #[test]
    fn test_document_serialization_shape() {
        let doc = Document {
            id: "abc".to_string(),
            name: "invoice.pdf".to_string(),
            size: "1.00 MB".to_string(),
            mime_type: "application/pdf".to_string(),
        };

        let json = serde_json::to_value(&doc).expect("document serializes");
        assert_eq!(json["type"], "application/pdf");
        assert_eq!(json["size"], "1.00 MB");
    }

    #[test]
    fn test_error_display() {
        let err = AppError::BadYearLabel("next".into());
        assert!(err.to_string().contains("next"));
    }
}
