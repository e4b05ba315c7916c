//! Upstream record types cached by the coordinator.
//!
//! The household manager's HTTP API reports five record kinds this module
//! puts on a calendar: chores, batteries, meal-plan entries, products with
//! a best-before date, and tasks. [`HouseholdItem`] is the closed union
//! the coordinator caches them under; [`UnknownItem`] preserves record
//! kinds the upstream can report that no calendar mapping exists for.
//!
//! All records are snapshots of upstream state. Nothing in this crate
//! writes them back.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A recurring household chore.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chore {
    /// Upstream record id.
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    /// Zone-naive due instant computed by the upstream scheduler.
    pub next_estimated_execution_time: Option<NaiveDateTime>,
}

/// A tracked battery with a charge schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Battery {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    /// Zone-naive next charge instant computed by the upstream scheduler.
    pub next_estimated_charge_time: Option<NaiveDateTime>,
}

/// The recipe attached to a meal-plan entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,
    pub description: Option<String>,
}

/// One day's entry in the meal plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealPlanEntry {
    pub id: i64,
    /// The planned day. Entries saved without a day exist upstream.
    pub day: Option<NaiveDate>,
    pub recipe: Recipe,
}

/// A stocked product nearing its best-before date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub best_before_date: Option<NaiveDate>,
    /// Stock-keeping remark. Not calendar copy; the mapper ignores it.
    pub note: Option<String>,
}

/// A one-off task with an optional due date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
}

/// An upstream record kind with no calendar mapping.
///
/// The upstream service grows new entity kinds (shopping-list rows, stock
/// journal entries, ...) faster than this integration does; a cache
/// snapshot can therefore carry kinds this module was not written for.
/// The kind name is kept so a failed mapping can say what it hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnknownItem {
    /// The upstream kind name as reported by the API.
    pub kind: String,
}

/// A coordinator-cached record of any kind the upstream reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseholdItem {
    Chore(Chore),
    Battery(Battery),
    MealPlan(MealPlanEntry),
    Product(Product),
    Task(Task),
    Unknown(UnknownItem),
}

impl HouseholdItem {
    /// The runtime kind name, as used in diagnostics.
    pub fn kind(&self) -> &str {
        match self {
            Self::Chore(_) => "chore",
            Self::Battery(_) => "battery",
            Self::MealPlan(_) => "meal_plan",
            Self::Product(_) => "product",
            Self::Task(_) => "task",
            Self::Unknown(item) => &item.kind,
        }
    }
}
