//! Checklist Item Entity
//!
//! One fixed verification question with a boolean checked state. The
//! canonical set is seed-defined (ids 1..=N, fixed texts).

use serde::{Deserialize, Serialize};

use super::entity::Entity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: u32,
    pub text: String,
    pub checked: bool,
}

impl Entity for ChecklistItem {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}
