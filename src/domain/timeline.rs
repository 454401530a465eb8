//! Timeline Item Entity
//!
//! One unit of installation work with a lifecycle status, a responsible
//! team, and an optional planned date range. Items group by `section`
//! (major phase) and optionally `subsection` (sub-phase); grouping order
//! follows first occurrence in the timeline list.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::entity::Entity;

/// Lifecycle status of a timeline item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Pending,
    Working,
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Working => "working",
            TaskStatus::Completed => "completed",
        }
    }

    /// Next status in the pending -> working -> completed cycle
    pub fn next(&self) -> Self {
        match self {
            TaskStatus::Pending => TaskStatus::Working,
            TaskStatus::Working => TaskStatus::Completed,
            TaskStatus::Completed => TaskStatus::Pending,
        }
    }
}

/// Which team is responsible for a timeline item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Rnd,
    Field,
    #[default]
    Both,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Rnd => "rnd",
            Role::Field => "field",
            Role::Both => "both",
        }
    }

    /// Normalize a raw role token. Trims and lowercases; anything that is
    /// not one of the three known tokens falls back to `Both`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "rnd" => Role::Rnd,
            "field" => Role::Field,
            "both" => Role::Both,
            other => {
                log::warn!("Invalid role value: {:?}, defaulting to 'both'", other);
                Role::Both
            }
        }
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Legacy data carries all kinds of role values; anything that is
        // not a known token decodes as Both instead of failing the site.
        let raw = serde_json::Value::deserialize(deserializer)?;
        Ok(match raw {
            serde_json::Value::String(s) => Role::parse(&s),
            serde_json::Value::Null => Role::Both,
            other => {
                log::warn!("Invalid role value: {}, defaulting to 'both'", other);
                Role::Both
            }
        })
    }
}

/// A timeline item (one installable task)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineItem {
    /// Unique identifier within a site's timeline
    pub id: u32,
    /// Display code, e.g. "1-01"
    pub step: String,
    /// Task description
    pub task: String,
    /// Major phase
    pub section: String,
    /// Sub-phase (None for flat sections)
    #[serde(default)]
    pub subsection: Option<String>,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub completion_date: Option<NaiveDate>,
    /// Set iff status == Completed
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    /// Set iff status == Completed
    #[serde(default)]
    pub completed_by: Option<String>,
}

impl Entity for TimelineItem {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Partial update for a timeline item.
///
/// `None` leaves a field untouched; the date fields use `Option<Option<_>>`
/// so a patch can also clear them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelinePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<Option<NaiveDate>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_date: Option<Option<NaiveDate>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_by: Option<String>,
}

impl TimelinePatch {
    /// Patch that only moves the lifecycle status
    pub fn status(status: TaskStatus) -> Self {
        TimelinePatch {
            status: Some(status),
            ..Default::default()
        }
    }

    /// Patch that moves the status and records who completed the task
    pub fn status_by(status: TaskStatus, operator: &str) -> Self {
        TimelinePatch {
            status: Some(status),
            completed_by: Some(operator.to_string()),
            ..Default::default()
        }
    }
}

impl TimelineItem {
    /// Apply a partial update, enforcing the completion invariant:
    /// `completed_at`/`completed_by` are set on the transition into
    /// Completed and cleared on the transition out.
    pub fn apply(&self, patch: &TimelinePatch, now: DateTime<Utc>) -> TimelineItem {
        let mut updated = self.clone();

        if let Some(role) = patch.role {
            updated.role = role;
        }
        if let Some(start_date) = patch.start_date {
            updated.start_date = start_date;
        }
        if let Some(completion_date) = patch.completion_date {
            updated.completion_date = completion_date;
        }
        if let Some(status) = patch.status {
            updated.status = status;
            if status == TaskStatus::Completed {
                if self.status != TaskStatus::Completed {
                    updated.completed_at = Some(now);
                    updated.completed_by = patch.completed_by.clone();
                }
            } else {
                updated.completed_at = None;
                updated.completed_by = None;
            }
        }

        updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(status: TaskStatus) -> TimelineItem {
        TimelineItem {
            id: 1,
            step: "1-01".to_string(),
            task: "Kick-Off".to_string(),
            section: "구축 및 설치".to_string(),
            subsection: Some("사전 준비".to_string()),
            status,
            role: Role::Both,
            start_date: None,
            completion_date: None,
            completed_at: None,
            completed_by: None,
        }
    }

    #[test]
    fn status_cycles() {
        assert_eq!(TaskStatus::Pending.next(), TaskStatus::Working);
        assert_eq!(TaskStatus::Working.next(), TaskStatus::Completed);
        assert_eq!(TaskStatus::Completed.next(), TaskStatus::Pending);
    }

    #[test]
    fn completing_sets_completed_at_and_by() {
        let now = Utc::now();
        let patch = TimelinePatch::status_by(TaskStatus::Completed, "kim");
        let updated = item(TaskStatus::Working).apply(&patch, now);

        assert_eq!(updated.status, TaskStatus::Completed);
        assert_eq!(updated.completed_at, Some(now));
        assert_eq!(updated.completed_by.as_deref(), Some("kim"));
    }

    #[test]
    fn leaving_completed_clears_completion_fields() {
        let now = Utc::now();
        let mut completed = item(TaskStatus::Completed);
        completed.completed_at = Some(now);
        completed.completed_by = Some("kim".to_string());

        let updated = completed.apply(&TimelinePatch::status(TaskStatus::Pending), now);
        assert_eq!(updated.status, TaskStatus::Pending);
        assert!(updated.completed_at.is_none());
        assert!(updated.completed_by.is_none());
    }

    #[test]
    fn recompleting_keeps_original_timestamp() {
        let first = Utc::now();
        let mut completed = item(TaskStatus::Completed);
        completed.completed_at = Some(first);

        let later = first + chrono::Duration::hours(1);
        let updated = completed.apply(&TimelinePatch::status(TaskStatus::Completed), later);
        assert_eq!(updated.completed_at, Some(first));
    }

    #[test]
    fn role_tolerates_garbage_and_absence() {
        assert_eq!(Role::parse(" Field "), Role::Field);
        assert_eq!(Role::parse("RND"), Role::Rnd);
        assert_eq!(Role::parse("manager"), Role::Both);

        let json = r#"{"id":1,"step":"1-01","task":"t","section":"s","role":"  BOTH "}"#;
        let item: TimelineItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.role, Role::Both);

        let json = r#"{"id":1,"step":"1-01","task":"t","section":"s","role":7}"#;
        let item: TimelineItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.role, Role::Both);

        let json = r#"{"id":1,"step":"1-01","task":"t","section":"s"}"#;
        let item: TimelineItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.role, Role::Both);
        assert_eq!(item.status, TaskStatus::Pending);
    }

    #[test]
    fn wire_format_is_camel_case() {
        let mut it = item(TaskStatus::Completed);
        it.start_date = NaiveDate::from_ymd_opt(2024, 12, 19);
        let value = serde_json::to_value(&it).unwrap();
        assert_eq!(value["startDate"], "2024-12-19");
        assert_eq!(value["status"], "completed");
        assert!(value.get("start_date").is_none());
    }
}
