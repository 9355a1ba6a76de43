//! Utility modules.

/// Course display-name parsing (`"CODE - Title"`).
pub mod course_label;

/// Local file name helpers for downloaded documents.
pub mod file_name;
