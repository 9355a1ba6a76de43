//! Notification output abstraction

use crate::types::{Notice, TicketId};

/// Where notifications are shown.
///
/// A later `publish` with the same `TicketId` replaces the earlier notice in place.
///
/// Implementations:
/// - TUI: `NotificationCenter` (toast list at the bottom)
pub trait NotificationSink: Send + Sync {
    /// Publish or update a notice.
    fn publish(&self, notice: Notice);

    /// Remove a notice whose result no longer matters (e.g. a stale fetch).
    fn dismiss(&self, id: TicketId);
}
