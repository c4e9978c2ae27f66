//! In-memory application state and the operations over it.
//!
//! Components own their state as Leptos signals; every mutation they make
//! goes through one of the plain functions in this module via
//! `signal.update(|data| ...)`. Keeping the operations free of any DOM or
//! signal machinery makes the whole data layer testable on the host.
//!
//! Nothing in here persists anywhere: state lives in component memory and
//! is discarded on reload.

use uuid::Uuid;

use crate::config::BYTES_PER_MEGABYTE;
use crate::types::{AppError, AppResult, Document, FieldKind, FormField, YearData};

// =============================================================================
// Seeds
// =============================================================================

/// Initial year buckets, newest first, all empty.
pub fn seed_years() -> Vec<YearData> {
    ["2024", "2023", "2022"]
        .into_iter()
        .map(|year| YearData {
            year: year.to_string(),
            documents: Vec::new(),
        })
        .collect()
}

/// The six pre-seeded form fields with their mocked extraction sources.
///
/// Fields are never created or destroyed at runtime; only their values
/// change.
pub fn seed_fields() -> Vec<FormField> {
    fn field(id: &str, label: &str, value: &str, kind: FieldKind, source: &str) -> FormField {
        FormField {
            id: id.to_string(),
            label: label.to_string(),
            value: value.to_string(),
            kind,
            extracted_from: Some(source.to_string()),
        }
    }

    vec![
        field(
            "1",
            "Company Name",
            "Acme Corporation",
            FieldKind::Text,
            "2024-invoice-001.pdf",
        ),
        field(
            "2",
            "Total Revenue",
            "1,250,000",
            FieldKind::Number,
            "2024-financial-report.pdf",
        ),
        field(
            "3",
            "Business Address",
            "123 Business Ave, Suite 100, New York, NY 10001",
            FieldKind::Textarea,
            "2024-registration.pdf",
        ),
        field(
            "4",
            "Contact Email",
            "contact@acme.com",
            FieldKind::Email,
            "2024-contact-info.pdf",
        ),
        field(
            "5",
            "Number of Employees",
            "50",
            FieldKind::Number,
            "2024-hr-report.pdf",
        ),
        field(
            "6",
            "Business Description",
            "Leading provider of innovative technology solutions for small and medium businesses.",
            FieldKind::Textarea,
            "2024-profile.pdf",
        ),
    ]
}

// =============================================================================
// Identifiers & formatting
// =============================================================================

/// Fresh client-side identifier for documents and toasts.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Format a byte count as a two-decimal megabyte string.
///
/// `1_048_576.0` bytes formats as `"1.00 MB"`; anything under ~5 KB
/// rounds down to `"0.00 MB"`.
pub fn format_size(bytes: f64) -> String {
    format!("{:.2} MB", bytes / BYTES_PER_MEGABYTE)
}

// =============================================================================
// Year bucket operations
// =============================================================================

/// Append documents to the named year bucket, preserving prior order.
///
/// Unknown year labels are a no-op; the UI only offers labels that exist.
pub fn append_documents(years: &mut [YearData], year: &str, new_documents: Vec<Document>) {
    if let Some(bucket) = years.iter_mut().find(|y| y.year == year) {
        bucket.documents.extend(new_documents);
    }
}

/// Remove a document by id from the named year bucket.
///
/// A no-op when either the year or the id is unknown, so repeated removal
/// is idempotent.
pub fn remove_document(years: &mut [YearData], year: &str, document_id: &str) {
    if let Some(bucket) = years.iter_mut().find(|y| y.year == year) {
        bucket.documents.retain(|doc| doc.id != document_id);
    }
}

/// Prepend a new empty bucket labeled one year after the current first.
///
/// Returns the new label. Errors instead of indexing into an empty list;
/// no exposed operation ever empties the list, so through the UI this is
/// always `Ok`.
pub fn add_year(years: &mut Vec<YearData>) -> AppResult<String> {
    let first = years.first().ok_or(AppError::EmptyYears)?;
    let current: i32 = first
        .year
        .parse()
        .map_err(|_| AppError::BadYearLabel(first.year.clone()))?;

    let next = (current + 1).to_string();
    years.insert(
        0,
        YearData {
            year: next.clone(),
            documents: Vec::new(),
        },
    );
    Ok(next)
}

// =============================================================================
// Form field operations
// =============================================================================

/// Replace a field's value in place.
///
/// Unknown ids are a no-op. Deliberately unguarded by edit mode: read-only
/// rendering is enforced by disabling the inputs, not here.
pub fn update_field(fields: &mut [FormField], id: &str, value: &str) {
    if let Some(field) = fields.iter_mut().find(|f| f.id == id) {
        field.value = value.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(id: &str, name: &str) -> Document {
        Document {
            id: id.to_string(),
            name: name.to_string(),
            size: "0.10 MB".to_string(),
            mime_type: "application/pdf".to_string(),
        }
    }

    #[test]
    fn test_seed_years_newest_first_and_empty() {
        let years = seed_years();
        let labels: Vec<&str> = years.iter().map(|y| y.year.as_str()).collect();
        assert_eq!(labels, vec!["2024", "2023", "2022"]);
        assert!(years.iter().all(|y| y.documents.is_empty()));
    }

    #[test]
    fn test_seed_fields_are_the_six_known_records() {
        let fields = seed_fields();
        assert_eq!(fields.len(), 6);
        let ids: Vec<&str> = fields.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6"]);
        assert!(fields.iter().all(|f| f.extracted_from.is_some()));
    }

    #[test]
    fn test_append_preserves_call_order() {
        let mut years = seed_years();
        append_documents(&mut years, "2024", vec![doc("a", "one.pdf"), doc("b", "two.pdf")]);
        append_documents(&mut years, "2024", vec![doc("c", "three.pdf")]);

        let names: Vec<&str> = years[0].documents.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["one.pdf", "two.pdf", "three.pdf"]);
    }

    #[test]
    fn test_append_only_touches_named_year() {
        let mut years = seed_years();
        append_documents(&mut years, "2023", vec![doc("a", "one.pdf")]);

        assert!(years[0].documents.is_empty());
        assert_eq!(years[1].documents.len(), 1);
        assert!(years[2].documents.is_empty());
    }

    #[test]
    fn test_append_to_unknown_year_is_noop() {
        let mut years = seed_years();
        append_documents(&mut years, "1999", vec![doc("a", "one.pdf")]);
        assert!(years.iter().all(|y| y.documents.is_empty()));
    }

    #[test]
    fn test_remove_unknown_id_leaves_list_unchanged() {
        let mut years = seed_years();
        append_documents(&mut years, "2024", vec![doc("a", "one.pdf")]);

        let before = years.clone();
        remove_document(&mut years, "2024", "missing");
        assert_eq!(years, before);
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut years = seed_years();
        append_documents(&mut years, "2024", vec![doc("a", "one.pdf"), doc("b", "two.pdf")]);

        remove_document(&mut years, "2024", "a");
        assert_eq!(years[0].documents.len(), 1);

        // Second removal of the same id changes nothing.
        let before = years.clone();
        remove_document(&mut years, "2024", "a");
        assert_eq!(years, before);
    }

    #[test]
    fn test_add_year_prepends_increment_of_first() {
        let mut years = seed_years();
        append_documents(&mut years, "2024", vec![doc("a", "one.pdf")]);

        let added = add_year(&mut years).expect("non-empty year list");
        assert_eq!(added, "2025");
        assert_eq!(years[0].year, "2025");
        assert!(years[0].documents.is_empty());

        // The previously-first bucket shifts down intact.
        assert_eq!(years[1].year, "2024");
        assert_eq!(years[1].documents.len(), 1);
        assert_eq!(years.len(), 4);
    }

    #[test]
    fn test_add_year_on_empty_list_errors() {
        let mut years = Vec::new();
        assert_eq!(add_year(&mut years), Err(AppError::EmptyYears));
        assert!(years.is_empty());
    }

    #[test]
    fn test_add_year_on_non_numeric_label_errors() {
        let mut years = vec![YearData {
            year: "draft".to_string(),
            documents: Vec::new(),
        }];
        assert_eq!(
            add_year(&mut years),
            Err(AppError::BadYearLabel("draft".to_string()))
        );
        assert_eq!(years.len(), 1);
    }

    #[test]
    fn test_update_field_replaces_value_in_place() {
        let mut fields = seed_fields();
        update_field(&mut fields, "1", "Updated Corporation");
        assert_eq!(fields[0].value, "Updated Corporation");

        // Everything else untouched.
        assert_eq!(fields[1].value, "1,250,000");
    }

    #[test]
    fn test_update_field_unknown_id_is_noop() {
        let mut fields = seed_fields();
        let before = fields.clone();
        update_field(&mut fields, "99", "ignored");
        assert_eq!(fields, before);
    }

    #[test]
    fn test_update_field_has_no_edit_mode_guard() {
        // The editor disables its inputs outside edit mode, but the data
        // layer performs the mutation unconditionally when called directly.
        let mut fields = seed_fields();
        update_field(&mut fields, "4", "someone@else.com");
        assert_eq!(fields[3].value, "someone@else.com");
    }

    #[test]
    fn test_values_survive_leaving_edit_mode() {
        // Save only flips the editor's flag; it never rewrites field values.
        let mut fields = seed_fields();
        update_field(&mut fields, "2", "2,000,000");
        update_field(&mut fields, "5", "75");

        assert_eq!(fields[1].value, "2,000,000");
        assert_eq!(fields[4].value, "75");
        // Untouched fields keep their seeds.
        assert_eq!(fields[0].value, "Acme Corporation");
    }

    #[test]
    fn test_format_size_exact_megabyte() {
        assert_eq!(format_size(1_048_576.0), "1.00 MB");
    }

    #[test]
    fn test_format_size_small_file_rounds_to_zero() {
        assert_eq!(format_size(500.0), "0.00 MB");
    }

    #[test]
    fn test_new_ids_are_unique() {
        assert_ne!(new_id(), new_id());
    }
}
