//! Outbound Sync Queue
//!
//! One-way queue of pending remote patches. Local state is authoritative;
//! the server is a best-effort mirror, so a failed send never rolls back
//! anything. A failed patch stays queued with an attempt count and is
//! retried on the next flush; patches exceeding the attempt cap are
//! dropped with a warning.

use std::collections::VecDeque;

use crate::domain::TimelinePatch;
use crate::gateway::RemoteGateway;

const MAX_ATTEMPTS: u32 = 3;

/// What kind of item a pending patch targets
#[derive(Debug, Clone)]
pub enum PatchKind {
    Timeline { item_id: u32, patch: TimelinePatch },
    Checklist { item_id: u32, checked: bool },
}

#[derive(Debug, Clone)]
pub struct PendingPatch {
    pub site_id: String,
    pub kind: PatchKind,
    pub attempts: u32,
}

/// FIFO queue of outbound patches with bounded retries
#[derive(Default)]
pub struct SyncQueue {
    pending: VecDeque<PendingPatch>,
}

impl SyncQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, site_id: &str, kind: PatchKind) {
        self.pending.push_back(PendingPatch {
            site_id: site_id.to_string(),
            kind,
            attempts: 0,
        });
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Attempt to send pending patches in order. Stops at the first
    /// failure (the failed patch stays at the head for the next flush)
    /// and returns the number sent.
    pub async fn flush(&mut self, gateway: &dyn RemoteGateway) -> usize {
        let mut sent = 0;
        while let Some(mut entry) = self.pending.pop_front() {
            let result = match &entry.kind {
                PatchKind::Timeline { item_id, patch } => {
                    gateway
                        .patch_timeline_item(&entry.site_id, *item_id, patch)
                        .await
                }
                PatchKind::Checklist { item_id, checked } => {
                    gateway
                        .patch_checklist_item(&entry.site_id, *item_id, *checked)
                        .await
                }
            };

            match result {
                Ok(()) => sent += 1,
                Err(e) => {
                    entry.attempts += 1;
                    if entry.attempts >= MAX_ATTEMPTS {
                        log::warn!(
                            "Dropping patch for site {} after {} failed attempts: {}",
                            entry.site_id,
                            entry.attempts,
                            e
                        );
                    } else {
                        log::error!("Failed to sync item update to server: {}", e);
                        self.pending.push_front(entry);
                    }
                    break;
                }
            }
        }
        sent
    }
}
