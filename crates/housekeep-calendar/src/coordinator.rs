//! Boundary to the external polling coordinator.
//!
//! The coordinator refreshes upstream data on its own cycle and exposes
//! the latest snapshot as a keyed lookup. This crate only reads the
//! snapshot; the refresh loop that fills it lives with the host
//! integration. Queries running while a refresh lands simply see the
//! previous snapshot.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock, RwLockReadGuard};
use tracing::debug;

use crate::entity::CalendarEntity;
use crate::item::HouseholdItem;

/// One refresh cycle's worth of upstream data, keyed by category.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CoordinatorData {
    items: HashMap<String, Vec<HouseholdItem>>,
}

impl CoordinatorData {
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the item list for one category.
    pub fn insert(&mut self, key: impl Into<String>, items: Vec<HouseholdItem>) {
        self.items.insert(key.into(), items);
    }

    /// The cached list for a category, `None` when the category has not
    /// been refreshed into this snapshot.
    pub fn category(&self, key: &str) -> Option<&[HouseholdItem]> {
        self.items.get(key).map(Vec::as_slice)
    }

    /// Number of categories present in the snapshot.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the snapshot holds no categories at all.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Handle to the externally-refreshed data cache.
///
/// Holds the upstream capability set (fixed at construction), the latest
/// data snapshot, and the registry of calendar entities built on top of
/// it. The registry is append-only; the coordinator uses it to push
/// refresh-driven updates to the host.
pub struct DataCoordinator {
    available: HashSet<String>,
    data: RwLock<CoordinatorData>,
    entities: Mutex<Vec<Arc<dyn CalendarEntity>>>,
}

impl DataCoordinator {
    /// Creates a coordinator reporting the given upstream categories.
    pub fn new(available: HashSet<String>) -> Self {
        Self {
            available,
            data: RwLock::new(CoordinatorData::new()),
            entities: Mutex::new(Vec::new()),
        }
    }

    /// The set of category keys the upstream source exposes.
    pub fn available_entities(&self) -> &HashSet<String> {
        &self.available
    }

    /// Read access to the current snapshot.
    pub async fn data(&self) -> RwLockReadGuard<'_, CoordinatorData> {
        self.data.read().await
    }

    /// Swaps in a full snapshot from a refresh cycle.
    pub async fn replace_data(&self, data: CoordinatorData) {
        debug!(categories = data.len(), "replacing coordinator snapshot");
        *self.data.write().await = data;
    }

    /// Updates a single category in place.
    pub async fn set_category(&self, key: impl Into<String>, items: Vec<HouseholdItem>) {
        let key = key.into();
        debug!(key = %key, count = items.len(), "updating coordinator category");
        self.data.write().await.insert(key, items);
    }

    /// Appends a constructed entity to the registry.
    pub async fn register_entity(&self, entity: Arc<dyn CalendarEntity>) {
        self.entities.lock().await.push(entity);
    }

    /// The registered entities, in registration order.
    pub async fn entities(&self) -> Vec<Arc<dyn CalendarEntity>> {
        self.entities.lock().await.clone()
    }
}
