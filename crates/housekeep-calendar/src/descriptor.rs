//! Static configuration for the five calendar categories.
//!
//! One [`CalendarDescriptor`] per upstream category, created once at load
//! and never mutated. Setup walks [`CALENDARS`] and instantiates an entity
//! only for categories whose `exists_fn` accepts the coordinator's current
//! capability set.

use std::collections::HashSet;

/// Category key for tracked batteries.
pub const CATEGORY_BATTERIES: &str = "batteries";
/// Category key for chores.
pub const CATEGORY_CHORES: &str = "chores";
/// Category key for products nearing their best-before date.
pub const CATEGORY_EXPIRING_PRODUCTS: &str = "expiring_products";
/// Category key for the meal plan.
pub const CATEGORY_MEAL_PLAN: &str = "meal_plan";
/// Category key for tasks.
pub const CATEGORY_TASKS: &str = "tasks";

/// Immutable presentation and availability data for one calendar category.
#[derive(Debug, Clone)]
pub struct CalendarDescriptor {
    /// The category key, also the entity's unique id suffix.
    pub key: &'static str,
    /// Display name shown by the host platform.
    pub name: &'static str,
    /// Host-platform icon identifier.
    pub icon: &'static str,
    /// Whether the host enables the entity without user action.
    pub enabled_by_default: bool,
    /// Tests whether the upstream source currently exposes this category.
    pub exists_fn: fn(&HashSet<String>) -> bool,
}

impl CalendarDescriptor {
    /// Evaluates the availability predicate against the upstream set.
    pub fn exists(&self, available: &HashSet<String>) -> bool {
        (self.exists_fn)(available)
    }
}

/// The fixed descriptor set, one entry per supported category.
///
/// Calendars stay disabled by default in the host's entity registry; the
/// user opts in per category.
pub static CALENDARS: [CalendarDescriptor; 5] = [
    CalendarDescriptor {
        key: CATEGORY_BATTERIES,
        name: "Household batteries",
        icon: "mdi:battery",
        enabled_by_default: false,
        exists_fn: |available| available.contains(CATEGORY_BATTERIES),
    },
    CalendarDescriptor {
        key: CATEGORY_CHORES,
        name: "Household chores",
        icon: "mdi:broom",
        enabled_by_default: false,
        exists_fn: |available| available.contains(CATEGORY_CHORES),
    },
    CalendarDescriptor {
        key: CATEGORY_EXPIRING_PRODUCTS,
        name: "Household expiring products",
        icon: "mdi:clock-fast",
        enabled_by_default: false,
        exists_fn: |available| available.contains(CATEGORY_EXPIRING_PRODUCTS),
    },
    CalendarDescriptor {
        key: CATEGORY_MEAL_PLAN,
        name: "Household meal plan",
        icon: "mdi:silverware-variant",
        enabled_by_default: false,
        exists_fn: |available| available.contains(CATEGORY_MEAL_PLAN),
    },
    CalendarDescriptor {
        key: CATEGORY_TASKS,
        name: "Household tasks",
        icon: "mdi:checkbox-marked-circle-outline",
        enabled_by_default: false,
        exists_fn: |available| available.contains(CATEGORY_TASKS),
    },
];
