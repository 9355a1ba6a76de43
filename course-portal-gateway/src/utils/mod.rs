//! Utility modules.

/// Serde helper accepting identifiers sent either as JSON strings or numbers.
pub mod flexible_id;

/// Log sanitization utilities to prevent sensitive data exposure.
pub mod log_sanitizer;
