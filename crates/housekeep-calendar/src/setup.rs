//! Platform setup: discover categories and hand entities to the host.

use std::sync::Arc;

use chrono_tz::Tz;
use tracing::debug;

use crate::coordinator::DataCoordinator;
use crate::descriptor::CALENDARS;
use crate::entity::{CalendarEntity, HouseholdCalendar};

/// Builds one calendar entity per upstream-available category.
///
/// Walks the fixed descriptor set, skips categories the coordinator does
/// not report, registers each constructed entity with the coordinator for
/// refresh-driven updates, and hands the batch to the host's add-entities
/// callback. `zone` is attached to zone-naive upstream due times.
pub async fn setup_platform<F>(coordinator: &Arc<DataCoordinator>, zone: Tz, add_entities: F)
where
    F: FnOnce(Vec<Arc<dyn CalendarEntity>>),
{
    let mut entities: Vec<Arc<dyn CalendarEntity>> = Vec::new();
    for descriptor in &CALENDARS {
        if descriptor.exists(coordinator.available_entities()) {
            let entity: Arc<dyn CalendarEntity> = Arc::new(HouseholdCalendar::new(
                Arc::clone(coordinator),
                descriptor,
                zone,
            ));
            coordinator.register_entity(Arc::clone(&entity)).await;
            entities.push(entity);
        } else {
            debug!(key = descriptor.key, "calendar category not available upstream");
        }
    }
    add_entities(entities);
}
