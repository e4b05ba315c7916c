//! Calendar entities for the household manager integration.
//!
//! Bridges the household manager's coordinator cache into the host
//! platform's calendar surface:
//!
//! - [`HouseholdItem`] - the closed union of upstream record kinds
//! - [`map_item`] - derives one [`NormalizedEvent`] per cached item
//! - [`CALENDARS`] - static descriptors for the five categories
//! - [`HouseholdCalendar`] - the entity the host queries
//! - [`setup_platform`] - builds entities for the available categories
//!
//! # Architecture
//!
//! ```text
//! host platform ──query──▶ HouseholdCalendar
//!                               │
//!                               ▼
//!                    DataCoordinator snapshot        (refreshed externally)
//!                               │ items for this category
//!                               ▼
//!                           map_item()
//!                               │
//!                               ▼
//!                      Vec<NormalizedEvent> ──▶ back to the host
//! ```
//!
//! The coordinator's polling cycle, entity registration plumbing, and
//! event rendering all belong to the host; this crate holds the mapping
//! rules and the read-only query path.

pub mod coordinator;
pub mod descriptor;
pub mod entity;
pub mod error;
pub mod item;
pub mod map;
pub mod setup;

pub use coordinator::{CoordinatorData, DataCoordinator};
pub use descriptor::{
    CALENDARS, CATEGORY_BATTERIES, CATEGORY_CHORES, CATEGORY_EXPIRING_PRODUCTS, CATEGORY_MEAL_PLAN,
    CATEGORY_TASKS, CalendarDescriptor,
};
pub use entity::{BoxFuture, CalendarEntity, HouseholdCalendar};
pub use error::{CalendarError, CalendarResult};
pub use item::{Battery, Chore, HouseholdItem, MealPlanEntry, Product, Recipe, Task, UnknownItem};
pub use map::{MapContext, map_item};
pub use setup::setup_platform;

// Re-export the event types entities hand back to the host.
pub use housekeep_core::{EventTime, NormalizedEvent, TimeWindow};
