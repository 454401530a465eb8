//! Site Entity
//!
//! One tracked installation project: an ordered timeline of installable
//! tasks plus a fixed verification checklist.

use serde::{Deserialize, Serialize};

use super::checklist::ChecklistItem;
use super::entity::Entity;
use super::timeline::TimelineItem;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    /// Unique, stable identifier (e.g. "anyang-bakdal")
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub timeline: Vec<TimelineItem>,
    #[serde(default)]
    pub checklist: Vec<ChecklistItem>,
}

impl Entity for Site {
    type Id = String;

    fn id(&self) -> Self::Id {
        self.id.clone()
    }
}
