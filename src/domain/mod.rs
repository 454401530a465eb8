//! Domain Layer
//!
//! Contains all domain entities and the pure progress/reconciliation
//! logic. This layer has NO I/O dependencies (serde and chrono only).

mod checklist;
mod entity;
mod progress;
mod reconcile;
mod site;
mod timeline;

pub use checklist::ChecklistItem;
pub use entity::{upsert_by_id, Entity, StoreError, StoreResult};
pub use progress::{calculate_progress, Progress};
pub use reconcile::reconcile_checklist;
pub use site::Site;
pub use timeline::{Role, TaskStatus, TimelineItem, TimelinePatch};
