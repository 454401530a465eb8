//! Progress Calculator
//!
//! Pure rollup of a site's completion state. Timeline counts only
//! `completed` items toward the percentage (`working` is reported for
//! display but does not contribute). The overall figure weights the
//! timeline at 70% and the checklist at 30%, computed from the unrounded
//! component values and rounded once.

use serde::{Deserialize, Serialize};

use super::site::Site;
use super::timeline::TaskStatus;

/// Derived completion figures for a site. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Progress {
    /// Timeline completion percent, 0..=100
    pub timeline: u8,
    /// Checklist completion percent, 0..=100
    pub checklist: u8,
    /// Weighted overall percent, 0..=100
    pub overall: u8,
    /// Completed timeline item count
    pub completed: usize,
    /// In-progress timeline item count
    pub working: usize,
    /// Total timeline item count
    pub total: usize,
}

/// Weight of the timeline component in the overall rollup
const TIMELINE_WEIGHT: f64 = 0.7;
/// Weight of the checklist component in the overall rollup
const CHECKLIST_WEIGHT: f64 = 0.3;

fn percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

/// Compute the progress rollup for a site.
///
/// Empty timeline or checklist yields 0 for that component, never NaN.
pub fn calculate_progress(site: &Site) -> Progress {
    let total = site.timeline.len();
    let completed = site
        .timeline
        .iter()
        .filter(|item| item.status == TaskStatus::Completed)
        .count();
    let working = site
        .timeline
        .iter()
        .filter(|item| item.status == TaskStatus::Working)
        .count();
    let timeline_progress = percent(completed, total);

    let checklist_total = site.checklist.len();
    let checklist_completed = site.checklist.iter().filter(|item| item.checked).count();
    let checklist_progress = percent(checklist_completed, checklist_total);

    // Overall is rounded from the raw components, not the rounded ones,
    // so the two roundings cannot compound.
    let overall_progress =
        timeline_progress * TIMELINE_WEIGHT + checklist_progress * CHECKLIST_WEIGHT;

    Progress {
        timeline: timeline_progress.round() as u8,
        checklist: checklist_progress.round() as u8,
        overall: overall_progress.round() as u8,
        completed,
        working,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::checklist::ChecklistItem;
    use crate::domain::timeline::{Role, TimelineItem};

    fn site(statuses: &[TaskStatus], checks: &[bool]) -> Site {
        Site {
            id: "test-site".to_string(),
            name: "Test Site".to_string(),
            timeline: statuses
                .iter()
                .enumerate()
                .map(|(i, status)| TimelineItem {
                    id: i as u32 + 1,
                    step: format!("1-{:02}", i + 1),
                    task: format!("task {}", i + 1),
                    section: "구축 및 설치".to_string(),
                    subsection: None,
                    status: *status,
                    role: Role::Both,
                    start_date: None,
                    completion_date: None,
                    completed_at: None,
                    completed_by: None,
                })
                .collect(),
            checklist: checks
                .iter()
                .enumerate()
                .map(|(i, checked)| ChecklistItem {
                    id: i as u32 + 1,
                    text: format!("check {}", i + 1),
                    checked: *checked,
                })
                .collect(),
        }
    }

    #[test]
    fn empty_site_yields_zero_not_nan() {
        let progress = calculate_progress(&site(&[], &[]));
        assert_eq!(progress, Progress::default());
    }

    #[test]
    fn documented_scenario_20_timeline_19_checklist() {
        // 20 timeline items, 5 completed; 19 checklist items, 10 checked
        let mut statuses = vec![TaskStatus::Pending; 20];
        for status in statuses.iter_mut().take(5) {
            *status = TaskStatus::Completed;
        }
        let mut checks = vec![false; 19];
        for checked in checks.iter_mut().take(10) {
            *checked = true;
        }

        let progress = calculate_progress(&site(&statuses, &checks));
        assert_eq!(progress.timeline, 25);
        assert_eq!(progress.checklist, 53); // round(52.63)
        assert_eq!(progress.overall, 33); // round(0.7*25 + 0.3*52.6316)
        assert_eq!(progress.completed, 5);
        assert_eq!(progress.total, 20);
    }

    #[test]
    fn overall_rounds_raw_components_not_rounded_ones() {
        // timeline 1/8 = 12.5% (rounds to 13), checklist 7/8 = 87.5%
        // (rounds to 88). Raw overall: 0.7*12.5 + 0.3*87.5 = 35.0 -> 35.
        // Rounding components first would give 0.7*13 + 0.3*88 = 35.5 -> 36.
        let mut statuses = vec![TaskStatus::Pending; 8];
        statuses[0] = TaskStatus::Completed;
        let mut checks = vec![true; 8];
        checks[0] = false;

        let progress = calculate_progress(&site(&statuses, &checks));
        assert_eq!(progress.timeline, 13);
        assert_eq!(progress.checklist, 88);
        assert_eq!(progress.overall, 35);
    }

    #[test]
    fn working_items_do_not_count_toward_percent() {
        let statuses = [
            TaskStatus::Completed,
            TaskStatus::Working,
            TaskStatus::Working,
            TaskStatus::Pending,
        ];
        let progress = calculate_progress(&site(&statuses, &[true, false]));
        assert_eq!(progress.timeline, 25);
        assert_eq!(progress.working, 2);
        assert_eq!(progress.completed, 1);
        assert_eq!(progress.total, 4);
    }

    #[test]
    fn percentages_stay_in_range_on_full_completion() {
        let progress = calculate_progress(&site(&[TaskStatus::Completed; 3], &[true; 4]));
        assert_eq!(progress.timeline, 100);
        assert_eq!(progress.checklist, 100);
        assert_eq!(progress.overall, 100);
    }
}
