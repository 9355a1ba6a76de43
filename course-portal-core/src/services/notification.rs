//! One-shot progress notifications
//!
//! A [`NotificationTicket`] is created in the in-progress state and settled
//! exactly once: the settling methods consume it, and dropping an unsettled
//! ticket settles it as failed so no spinner is left behind.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::traits::NotificationSink;
use crate::types::{Notice, NoticeLevel, TicketId};

static NEXT_TICKET_ID: AtomicU64 = AtomicU64::new(1);

/// Message used when a ticket is dropped without being settled.
pub const INTERRUPTED_MESSAGE: &str = "Operation interrupted";

pub struct NotificationTicket {
    id: TicketId,
    sink: Arc<dyn NotificationSink>,
    settled: bool,
}

impl NotificationTicket {
    /// Publish an in-progress notification.
    pub fn open(sink: Arc<dyn NotificationSink>, message: impl Into<String>) -> Self {
        let id = TicketId(NEXT_TICKET_ID.fetch_add(1, Ordering::Relaxed));
        sink.publish(Notice {
            id,
            level: NoticeLevel::InProgress,
            message: message.into(),
        });
        Self {
            id,
            sink,
            settled: false,
        }
    }

    pub fn id(&self) -> TicketId {
        self.id
    }

    pub fn succeed(mut self, message: impl Into<String>) {
        self.settled = true;
        self.publish(NoticeLevel::Success, message.into());
    }

    pub fn fail(mut self, message: impl Into<String>) {
        self.settled = true;
        self.publish(NoticeLevel::Error, message.into());
    }

    /// Remove the notification without a result.
    pub fn dismiss(mut self) {
        self.settled = true;
        self.sink.dismiss(self.id);
    }

    fn publish(&self, level: NoticeLevel, message: String) {
        self.sink.publish(Notice {
            id: self.id,
            level,
            message,
        });
    }
}

impl Drop for NotificationTicket {
    fn drop(&mut self) {
        if !self.settled {
            log::warn!("Notification {:?} dropped before completion", self.id);
            self.publish(NoticeLevel::Error, INTERRUPTED_MESSAGE.to_string());
        }
    }
}

impl std::fmt::Debug for NotificationTicket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationTicket")
            .field("id", &self.id)
            .field("settled", &self.settled)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::RecordingNotificationSink;

    #[test]
    fn success_updates_in_place() {
        let sink = Arc::new(RecordingNotificationSink::new());
        let ticket = NotificationTicket::open(sink.clone(), "Preparing Slides download...");
        let id = ticket.id();
        ticket.succeed("Download started!");

        let notices = sink.notices();
        assert_eq!(notices.len(), 2);
        assert!(notices.iter().all(|n| n.id == id));
        assert_eq!(notices[0].level, NoticeLevel::InProgress);
        assert_eq!(notices[1].level, NoticeLevel::Success);
        assert_eq!(sink.settled_count(id), 1);
    }

    #[test]
    fn failure_is_published_once() {
        let sink = Arc::new(RecordingNotificationSink::new());
        let ticket = NotificationTicket::open(sink.clone(), "Downloading Intro...");
        let id = ticket.id();
        ticket.fail("Download failed");

        assert_eq!(sink.settled_count(id), 1);
        assert_eq!(sink.last(id).map(|n| n.level), Some(NoticeLevel::Error));
    }

    #[test]
    fn dropped_ticket_settles_as_error() {
        let sink = Arc::new(RecordingNotificationSink::new());
        let id = {
            let ticket = NotificationTicket::open(sink.clone(), "Loading units...");
            ticket.id()
        };
        let last = sink.last(id);
        assert_eq!(last.as_ref().map(|n| n.level), Some(NoticeLevel::Error));
        assert_eq!(last.map(|n| n.message).as_deref(), Some(INTERRUPTED_MESSAGE));
    }

    #[test]
    fn dismiss_removes_without_result() {
        let sink = Arc::new(RecordingNotificationSink::new());
        let ticket = NotificationTicket::open(sink.clone(), "Loading units...");
        let id = ticket.id();
        ticket.dismiss();
        assert!(sink.was_dismissed(id));
        assert_eq!(sink.settled_count(id), 0);
    }

    #[test]
    fn ids_are_unique() {
        let sink = Arc::new(RecordingNotificationSink::new());
        let a = NotificationTicket::open(sink.clone(), "a");
        let b = NotificationTicket::open(sink.clone(), "b");
        assert_ne!(a.id(), b.id());
        a.dismiss();
        b.dismiss();
    }
}
