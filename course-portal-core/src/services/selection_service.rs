//! Gateway side of the selection cascade

use std::sync::Arc;

use course_portal_gateway::{ContentGateway, GatewayError};

use crate::engine::{FetchTicket, Resolution, SelectionMachine};
use crate::services::NotificationTicket;
use crate::types::{ClassSession, Course, FetchLevel, Unit};

/// Raw result of one list fetch.
#[derive(Debug, Clone)]
pub enum FetchResult {
    Courses(Result<Vec<Course>, GatewayError>),
    Units(Result<Vec<Unit>, GatewayError>),
    Classes(Result<Vec<ClassSession>, GatewayError>),
}

/// A finished fetch, ready to be applied to the machine that issued the ticket.
#[derive(Debug, Clone)]
pub struct FetchCompletion {
    pub ticket: FetchTicket,
    pub result: FetchResult,
}

impl FetchCompletion {
    /// Apply to `machine`. A result whose shape does not match the ticket's level is stale.
    pub fn apply(self, machine: &mut SelectionMachine) -> Resolution {
        match (self.ticket.level(), self.result) {
            (FetchLevel::Courses, FetchResult::Courses(r)) => machine.apply_courses(&self.ticket, r),
            (FetchLevel::Units, FetchResult::Units(r)) => machine.apply_units(&self.ticket, r),
            (FetchLevel::Classes, FetchResult::Classes(r)) => {
                machine.apply_classes(&self.ticket, r)
            }
            _ => Resolution::Stale,
        }
    }
}

/// Runs the gateway requests of the selection cascade.
pub struct SelectionService {
    gateway: Arc<dyn ContentGateway>,
}

impl SelectionService {
    #[must_use]
    pub fn new(gateway: Arc<dyn ContentGateway>) -> Self {
        Self { gateway }
    }

    /// Run the gateway call a ticket stands for.
    pub async fn fetch(&self, ticket: FetchTicket) -> FetchCompletion {
        log::debug!(
            "Fetching {:?} (generation {}, key {:?})",
            ticket.level(),
            ticket.generation(),
            ticket.key()
        );
        let result = match ticket.level() {
            FetchLevel::Courses => FetchResult::Courses(self.gateway.list_courses().await),
            FetchLevel::Units => FetchResult::Units(self.gateway.list_units(ticket.key()).await),
            FetchLevel::Classes => {
                FetchResult::Classes(self.gateway.list_classes(ticket.key()).await)
            }
        };
        FetchCompletion { ticket, result }
    }

    /// Settle the notification of a fetch according to how it resolved.
    ///
    /// Successful and superseded fetches leave nothing behind; failures leave
    /// exactly one error message.
    pub fn settle(level: FetchLevel, resolution: &Resolution, notice: NotificationTicket) {
        match resolution {
            Resolution::Updated => notice.dismiss(),
            Resolution::Stale => {
                log::debug!("Discarded stale {level:?} response");
                notice.dismiss();
            }
            Resolution::Failed(err) => {
                if err.is_expected() {
                    log::warn!("Failed to load {level:?}: {err}");
                } else {
                    log::error!("Failed to load {level:?}: {err}");
                }
                notice.fail(level.failure_message(err));
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::engine::SelectionPhase;
    use crate::test_utils::{course, network_error, MockGateway, RecordingNotificationSink};
    use crate::types::NoticeLevel;

    #[tokio::test]
    async fn courses_load_through_gateway() {
        let gateway = Arc::new(MockGateway::new());
        gateway
            .set_courses(Ok(vec![course("1", "Maths"), course("2", "Physics")]))
            .await;
        let service = SelectionService::new(gateway);
        let mut machine = SelectionMachine::new();

        let completion = service.fetch(machine.begin_load_courses()).await;
        assert_eq!(completion.apply(&mut machine), Resolution::Updated);
        assert_eq!(machine.courses().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn out_of_order_units_keep_latest_selection() {
        let gateway = Arc::new(MockGateway::new());
        gateway
            .set_units("slow", Ok(vec![crate::types::Unit::new("s1", "Slow unit")]))
            .await;
        gateway
            .set_units("fast", Ok(vec![crate::types::Unit::new("f1", "Fast unit")]))
            .await;
        gateway.set_delay("slow", Duration::from_millis(300)).await;
        let service = Arc::new(SelectionService::new(gateway));
        let mut machine = SelectionMachine::new();

        let slow_ticket = machine.select_course(course("slow", "Slow course"));
        let slow = tokio::spawn({
            let service = service.clone();
            async move { service.fetch(slow_ticket).await }
        });
        let fast_ticket = machine.select_course(course("fast", "Fast course"));
        let fast = tokio::spawn({
            let service = service.clone();
            async move { service.fetch(fast_ticket).await }
        });

        let (Ok(fast), Ok(slow)) = (fast.await, slow.await) else {
            panic!("fetch task panicked");
        };
        assert_eq!(fast.apply(&mut machine), Resolution::Updated);
        assert_eq!(slow.apply(&mut machine), Resolution::Stale);

        assert_eq!(machine.selected_course().map(|c| c.id.as_str()), Some("fast"));
        assert_eq!(machine.units().len(), 1);
        assert_eq!(machine.units()[0].unit_id, "f1");
    }

    #[tokio::test]
    async fn failed_units_fetch_surfaces_one_error() {
        let gateway = Arc::new(MockGateway::new());
        gateway.set_units("c1", Err(network_error())).await;
        let service = SelectionService::new(gateway);
        let sink = Arc::new(RecordingNotificationSink::new());
        let mut machine = SelectionMachine::new();

        let ticket = machine.select_course(course("c1", "Maths"));
        let notice = NotificationTicket::open(sink.clone(), FetchLevel::Units.loading_message());
        let id = notice.id();
        let resolution = service.fetch(ticket).await.apply(&mut machine);
        SelectionService::settle(FetchLevel::Units, &resolution, notice);

        assert_eq!(machine.phase(), SelectionPhase::UnitsReady);
        assert!(machine.units().is_empty());
        assert_eq!(sink.settled_count(id), 1);
        let last = sink.last(id);
        assert_eq!(last.as_ref().map(|n| n.level), Some(NoticeLevel::Error));
        assert_eq!(
            last.map(|n| n.message).as_deref(),
            Some("Failed to load units")
        );
    }

    #[tokio::test]
    async fn unauthorized_classes_fetch_asks_for_relogin() {
        let gateway = Arc::new(MockGateway::new());
        gateway
            .set_units("c1", Ok(vec![crate::types::Unit::new("u1", "Unit 1")]))
            .await;
        gateway
            .set_classes(
                "u1",
                Err(GatewayError::Unauthorized {
                    raw_message: Some("Unauthorized".to_string()),
                }),
            )
            .await;
        let service = SelectionService::new(gateway);
        let sink = Arc::new(RecordingNotificationSink::new());
        let mut machine = SelectionMachine::new();

        let ticket = machine.select_course(course("c1", "Maths"));
        let _ = service.fetch(ticket).await.apply(&mut machine);
        let unit = machine.units()[0].clone();
        let Some(ticket) = machine.select_unit(unit) else {
            panic!("unit selection rejected");
        };

        let notice = NotificationTicket::open(sink.clone(), FetchLevel::Classes.loading_message());
        let id = notice.id();
        let resolution = service.fetch(ticket).await.apply(&mut machine);
        SelectionService::settle(FetchLevel::Classes, &resolution, notice);

        assert_eq!(
            sink.last(id).map(|n| n.message).as_deref(),
            Some("Failed to load classes. Please try logging in again.")
        );
        assert!(!machine.is_loading_classes());
    }

    #[tokio::test]
    async fn stale_fetch_notification_is_dismissed() {
        let gateway = Arc::new(MockGateway::new());
        let service = SelectionService::new(gateway);
        let sink = Arc::new(RecordingNotificationSink::new());
        let mut machine = SelectionMachine::new();

        let old = machine.select_course(course("1", "A"));
        let notice = NotificationTicket::open(sink.clone(), FetchLevel::Units.loading_message());
        let id = notice.id();
        let _ = machine.select_course(course("2", "B"));

        let resolution = service.fetch(old).await.apply(&mut machine);
        assert_eq!(resolution, Resolution::Stale);
        SelectionService::settle(FetchLevel::Units, &resolution, notice);
        assert!(sink.was_dismissed(id));
        assert_eq!(sink.settled_count(id), 0);
    }
}
