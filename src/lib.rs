//! Site Installation Tracking Core
//!
//! Layered architecture:
//! - domain: Entities, progress rollups, checklist reconciliation
//! - seed: Static default sites (canonical timeline and checklist)
//! - gateway: Remote API seam and reqwest implementation
//! - persistence: Durable JSON snapshot of the sites slice
//! - store: The authoritative site collection (load/merge/mutate)
//! - export: Spreadsheet row preparation
//! - auth: Static credential allow-list

pub mod auth;
pub mod domain;
pub mod export;
pub mod gateway;
pub mod persistence;
pub mod seed;
pub mod store;

pub use domain::{
    calculate_progress, ChecklistItem, Progress, Role, Site, StoreError, StoreResult, TaskStatus,
    TimelineItem, TimelinePatch,
};
pub use gateway::{GatewayConfig, HttpGateway, RemoteGateway};
pub use persistence::{JsonFileStore, MemorySnapshotStore, SnapshotStore, StoredData};
pub use store::{LoadSource, SiteLoad, SiteStore, SitesLoad};
