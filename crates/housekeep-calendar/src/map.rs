//! Cached item to calendar event mapping.
//!
//! None of the upstream record kinds carries a start time, only a due or
//! target point. [`map_item`] synthesizes the missing bound so every event
//! has a non-zero window at the right spot on the grid:
//!
//! - chores and batteries end at their due instant and start an hour
//!   earlier; with no due instant they end "now"
//! - meal-plan entries, products, and tasks occupy one whole day, the
//!   planned/best-before/due day, or today when the record has none

use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;

use housekeep_core::{EventTime, NormalizedEvent};

use crate::error::{CalendarError, CalendarResult};
use crate::item::HouseholdItem;

/// Ambient inputs for one mapping pass.
///
/// `now` is taken once per query so every item in a batch sees the same
/// instant, and tests can pin it.
#[derive(Debug, Clone, Copy)]
pub struct MapContext {
    /// The zone attached to zone-naive upstream due times.
    pub zone: Tz,
    /// The query's reference instant.
    pub now: DateTime<Utc>,
}

impl MapContext {
    /// Creates a context with an explicit reference instant.
    pub fn new(zone: Tz, now: DateTime<Utc>) -> Self {
        Self { zone, now }
    }

    /// Creates a context anchored at the wall clock.
    pub fn now_in(zone: Tz) -> Self {
        Self::new(zone, Utc::now())
    }

    /// Today's date as seen in the configured zone.
    pub fn today(&self) -> NaiveDate {
        self.now.with_timezone(&self.zone).date_naive()
    }
}

/// Derives the calendar event for one cached item.
///
/// `category` is the key of the calendar being queried; it only feeds
/// diagnostics, dispatch goes by the item's own variant.
///
/// # Errors
///
/// Returns [`CalendarError::UnsupportedItem`] for record kinds with no
/// event shape.
pub fn map_item(
    item: &HouseholdItem,
    category: &str,
    ctx: &MapContext,
) -> CalendarResult<NormalizedEvent> {
    match item {
        HouseholdItem::Chore(chore) => {
            let end = chore
                .next_estimated_execution_time
                .map(|t| attach_zone(t, ctx.zone))
                .unwrap_or(ctx.now);
            let mut event = NormalizedEvent::new(
                chore.id.to_string(),
                &chore.name,
                EventTime::from_utc(end - Duration::hours(1)),
                EventTime::from_utc(end),
            );
            if let Some(ref description) = chore.description {
                event = event.with_description(description);
            }
            Ok(event)
        }
        HouseholdItem::Battery(battery) => {
            let end = battery
                .next_estimated_charge_time
                .map(|t| attach_zone(t, ctx.zone))
                .unwrap_or(ctx.now);
            let mut event = NormalizedEvent::new(
                battery.id.to_string(),
                &battery.name,
                EventTime::from_utc(end - Duration::hours(1)),
                EventTime::from_utc(end),
            );
            if let Some(ref description) = battery.description {
                event = event.with_description(description);
            }
            Ok(event)
        }
        HouseholdItem::MealPlan(plan) => {
            let start = plan.day.unwrap_or_else(|| ctx.today());
            let mut event = NormalizedEvent::new(
                plan.id.to_string(),
                &plan.recipe.name,
                EventTime::from_date(start),
                EventTime::from_date(next_day(start)),
            );
            if let Some(ref description) = plan.recipe.description {
                event = event.with_description(description);
            }
            Ok(event)
        }
        HouseholdItem::Product(product) => {
            let start = product.best_before_date.unwrap_or_else(|| ctx.today());
            // product.note stays out of the event
            Ok(NormalizedEvent::new(
                product.id.to_string(),
                &product.name,
                EventTime::from_date(start),
                EventTime::from_date(next_day(start)),
            ))
        }
        HouseholdItem::Task(task) => {
            let start = task.due_date.unwrap_or_else(|| ctx.today());
            let mut event = NormalizedEvent::new(
                task.id.to_string(),
                &task.name,
                EventTime::from_date(start),
                EventTime::from_date(next_day(start)),
            );
            if let Some(ref description) = task.description {
                event = event.with_description(description);
            }
            Ok(event)
        }
        HouseholdItem::Unknown(unknown) => Err(CalendarError::UnsupportedItem {
            category: category.to_string(),
            kind: unknown.kind.clone(),
        }),
    }
}

/// Reads a zone-naive upstream instant in the configured zone.
fn attach_zone(naive: NaiveDateTime, zone: Tz) -> DateTime<Utc> {
    match zone.from_local_datetime(&naive) {
        LocalResult::Single(dt) => dt.with_timezone(&Utc),
        LocalResult::Ambiguous(earliest, _) => earliest.with_timezone(&Utc),
        // A due instant inside a DST gap has no reading in the zone.
        LocalResult::None => naive.and_utc(),
    }
}

fn next_day(date: NaiveDate) -> NaiveDate {
    date.succ_opt().expect("valid successor date")
}
