//! The host platform's calendar-entity contract and the adapter behind it.
//!
//! [`CalendarEntity`] is the shape the host expects of every calendar:
//! presentation metadata plus the two query operations. [`HouseholdCalendar`]
//! implements it for one upstream category by reading the coordinator's
//! cached list and mapping each item to an event.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use chrono_tz::Tz;

use housekeep_core::{NormalizedEvent, TimeWindow};

use crate::coordinator::DataCoordinator;
use crate::descriptor::CalendarDescriptor;
use crate::error::CalendarResult;
use crate::map::{MapContext, map_item};

/// A boxed future for async trait methods.
///
/// Keeps the trait object-safe so the host can hold a heterogeneous
/// entity list behind `Arc<dyn CalendarEntity>`.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// What the host platform expects of a calendar entity.
pub trait CalendarEntity: Send + Sync {
    /// The category key, unique among this integration's entities.
    fn key(&self) -> &'static str;

    /// Display name shown by the host.
    fn name(&self) -> &str;

    /// Host-platform icon identifier.
    fn icon(&self) -> &'static str;

    /// Whether the host enables the entity without user action.
    fn enabled_by_default(&self) -> bool;

    /// The next upcoming event, if the entity surfaces one.
    fn current_event(&self) -> Option<NormalizedEvent>;

    /// All events the entity reports for the requested window.
    ///
    /// May suspend, but performs no I/O of its own; the coordinator has
    /// already cached the data on its polling cycle.
    fn events_in_range(
        &self,
        window: TimeWindow,
    ) -> BoxFuture<'_, CalendarResult<Vec<NormalizedEvent>>>;
}

/// Calendar entity for one household category.
///
/// Constructed once per discovered category at setup and alive for the
/// host session. Holds no state of its own beyond the shared coordinator
/// handle and the zone attached to upstream due times.
pub struct HouseholdCalendar {
    coordinator: Arc<DataCoordinator>,
    descriptor: &'static CalendarDescriptor,
    zone: Tz,
}

impl HouseholdCalendar {
    /// Creates the entity for `descriptor`'s category.
    pub fn new(
        coordinator: Arc<DataCoordinator>,
        descriptor: &'static CalendarDescriptor,
        zone: Tz,
    ) -> Self {
        Self {
            coordinator,
            descriptor,
            zone,
        }
    }
}

impl CalendarEntity for HouseholdCalendar {
    fn key(&self) -> &'static str {
        self.descriptor.key
    }

    fn name(&self) -> &str {
        self.descriptor.name
    }

    fn icon(&self) -> &'static str {
        self.descriptor.icon
    }

    fn enabled_by_default(&self) -> bool {
        self.descriptor.enabled_by_default
    }

    /// Always `None`: the "next upcoming event" surface is switched off.
    ///
    /// The cached upstream lists are not sorted by due time, so promoting
    /// the head of the list produced a misleading entity state. The stub
    /// stays until the feature is reinstated deliberately, with sorting.
    fn current_event(&self) -> Option<NormalizedEvent> {
        None
    }

    /// Maps the coordinator's current list for this category.
    ///
    /// The requested window is accepted for contract compatibility and
    /// not applied; the host trims events for presentation. A category
    /// absent from the cache yields an empty list. An unsupported record
    /// kind fails the whole query.
    fn events_in_range(
        &self,
        _window: TimeWindow,
    ) -> BoxFuture<'_, CalendarResult<Vec<NormalizedEvent>>> {
        Box::pin(async move {
            let ctx = MapContext::now_in(self.zone);
            let data = self.coordinator.data().await;
            let Some(items) = data.category(self.descriptor.key) else {
                return Ok(Vec::new());
            };
            items
                .iter()
                .map(|item| map_item(item, self.descriptor.key, &ctx))
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::descriptor::{CALENDARS, CATEGORY_CHORES, CATEGORY_TASKS};
    use crate::error::CalendarError;
    use crate::item::{HouseholdItem, Task, UnknownItem};
    use chrono::{NaiveDate, TimeZone, Utc};
    use chrono_tz::Europe::Berlin;
    use std::collections::HashSet;

    fn chores_descriptor() -> &'static CalendarDescriptor {
        CALENDARS
            .iter()
            .find(|d| d.key == CATEGORY_CHORES)
            .unwrap()
    }

    fn task(id: i64, due: (i32, u32, u32)) -> HouseholdItem {
        HouseholdItem::Task(Task {
            id,
            name: format!("task-{id}"),
            description: None,
            due_date: NaiveDate::from_ymd_opt(due.0, due.1, due.2),
        })
    }

    fn tasks_entity(coordinator: &Arc<DataCoordinator>) -> HouseholdCalendar {
        let descriptor = CALENDARS.iter().find(|d| d.key == CATEGORY_TASKS).unwrap();
        HouseholdCalendar::new(Arc::clone(coordinator), descriptor, Berlin)
    }

    fn any_window() -> TimeWindow {
        TimeWindow::new(
            Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2026, 3, 31, 0, 0, 0).unwrap(),
        )
    }

    #[test]
    fn metadata_comes_from_the_descriptor() {
        let coordinator = Arc::new(DataCoordinator::new(HashSet::new()));
        let entity = HouseholdCalendar::new(Arc::clone(&coordinator), chores_descriptor(), Berlin);

        assert_eq!(entity.key(), CATEGORY_CHORES);
        assert_eq!(entity.name(), "Household chores");
        assert_eq!(entity.icon(), "mdi:broom");
        assert!(!entity.enabled_by_default());
    }

    #[tokio::test]
    async fn maps_cached_items_in_order() {
        let coordinator = Arc::new(DataCoordinator::new(HashSet::new()));
        coordinator
            .set_category(
                CATEGORY_TASKS,
                vec![task(3, (2026, 3, 9)), task(1, (2026, 3, 6))],
            )
            .await;

        let entity = tasks_entity(&coordinator);
        let events = entity.events_in_range(any_window()).await.unwrap();

        // Cached order is preserved, no sorting.
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].uid, "3");
        assert_eq!(events[1].uid, "1");
    }

    #[tokio::test]
    async fn absent_category_yields_empty_list() {
        let coordinator = Arc::new(DataCoordinator::new(HashSet::new()));
        let entity = tasks_entity(&coordinator);

        let events = entity.events_in_range(any_window()).await.unwrap();
        assert!(events.is_empty());
    }

    #[tokio::test]
    async fn empty_category_yields_empty_list() {
        let coordinator = Arc::new(DataCoordinator::new(HashSet::new()));
        coordinator.set_category(CATEGORY_TASKS, Vec::new()).await;

        let entity = tasks_entity(&coordinator);
        let events = entity.events_in_range(any_window()).await.unwrap();
        assert!(events.is_empty());
    }

    #[tokio::test]
    async fn window_is_not_applied() {
        let coordinator = Arc::new(DataCoordinator::new(HashSet::new()));
        coordinator
            .set_category(CATEGORY_TASKS, vec![task(1, (2026, 3, 6))])
            .await;

        let entity = tasks_entity(&coordinator);
        // A window years away from the task's due date.
        let window = TimeWindow::new(
            Utc.with_ymd_and_hms(1999, 1, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(1999, 1, 2, 0, 0, 0).unwrap(),
        );

        let events = entity.events_in_range(window).await.unwrap();
        assert_eq!(events.len(), 1);
    }

    #[tokio::test]
    async fn unsupported_item_fails_the_whole_query() {
        let coordinator = Arc::new(DataCoordinator::new(HashSet::new()));
        coordinator
            .set_category(
                CATEGORY_TASKS,
                vec![
                    task(1, (2026, 3, 6)),
                    HouseholdItem::Unknown(UnknownItem {
                        kind: "stock_entry".into(),
                    }),
                ],
            )
            .await;

        let entity = tasks_entity(&coordinator);
        let err = entity.events_in_range(any_window()).await.unwrap_err();

        assert_eq!(
            err,
            CalendarError::UnsupportedItem {
                category: CATEGORY_TASKS.into(),
                kind: "stock_entry".into(),
            }
        );
    }

    #[tokio::test]
    async fn current_event_is_disabled() {
        let coordinator = Arc::new(DataCoordinator::new(HashSet::new()));
        coordinator
            .set_category(CATEGORY_TASKS, vec![task(1, (2026, 3, 6))])
            .await;

        let entity = tasks_entity(&coordinator);
        assert!(entity.current_event().is_none());
    }
}
