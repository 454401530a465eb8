//! Spreadsheet Row Preparation
//!
//! Builds the row data the Excel exporter consumes: timeline rows grouped
//! by section/subsection with the group label shown only on the first row
//! of its group, dates in MM.DD form, and a checklist completion summary
//! line. Writing the actual workbook binary happens outside this crate.

use chrono::{Datelike, NaiveDate};

use crate::domain::{calculate_progress, Site};

/// One exported timeline row. `section`/`subsection` are empty except on
/// the first row of their group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineRow {
    pub section: String,
    pub subsection: String,
    pub task: String,
    pub start_date: String,
    pub completion_date: String,
}

fn format_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => format!("{:02}.{:02}", d.month(), d.day()),
        None => String::new(),
    }
}

/// Build export rows grouped by first-occurrence section, then
/// first-occurrence subsection within the section.
pub fn timeline_rows(site: &Site) -> Vec<TimelineRow> {
    let mut rows = Vec::with_capacity(site.timeline.len());

    let mut sections: Vec<&str> = Vec::new();
    for item in &site.timeline {
        if !sections.contains(&item.section.as_str()) {
            sections.push(&item.section);
        }
    }

    for section in sections {
        let section_items: Vec<_> = site
            .timeline
            .iter()
            .filter(|item| item.section == section)
            .collect();

        let mut subsections: Vec<&str> = Vec::new();
        for item in &section_items {
            let sub = item.subsection.as_deref().unwrap_or("");
            if !subsections.contains(&sub) {
                subsections.push(sub);
            }
        }

        let mut first_in_section = true;
        for subsection in subsections {
            let mut first_in_subsection = true;
            for item in section_items
                .iter()
                .filter(|item| item.subsection.as_deref().unwrap_or("") == subsection)
            {
                rows.push(TimelineRow {
                    section: if first_in_section {
                        section.to_string()
                    } else {
                        String::new()
                    },
                    subsection: if first_in_subsection {
                        subsection.to_string()
                    } else {
                        String::new()
                    },
                    task: item.task.clone(),
                    start_date: format_date(item.start_date),
                    completion_date: format_date(item.completion_date),
                });
                first_in_section = false;
                first_in_subsection = false;
            }
        }
    }

    rows
}

/// Completion summary line for the checklist sheet
pub fn checklist_summary(site: &Site) -> String {
    let checked = site.checklist.iter().filter(|item| item.checked).count();
    let progress = calculate_progress(site);
    format!(
        "완료 {} / {} ({}%)",
        checked,
        site.checklist.len(),
        progress.checklist
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;
    use crate::domain::Site;

    fn seed_site() -> Site {
        Site {
            id: "anyang-bakdal".to_string(),
            name: "안양 박달 사업소".to_string(),
            timeline: seed::initial_timeline(),
            checklist: seed::initial_checklist(),
        }
    }

    #[test]
    fn one_row_per_timeline_item_in_group_order() {
        let site = seed_site();
        let rows = timeline_rows(&site);
        assert_eq!(rows.len(), site.timeline.len());
        assert_eq!(rows[0].section, "구축 및 설치");
        assert_eq!(rows[0].subsection, "사전 준비");
        assert_eq!(rows[0].task, "Kick-Off");
    }

    #[test]
    fn group_labels_appear_once_per_group() {
        let rows = timeline_rows(&seed_site());

        let section_labels: Vec<&str> = rows
            .iter()
            .filter(|r| !r.section.is_empty())
            .map(|r| r.section.as_str())
            .collect();
        assert_eq!(
            section_labels,
            ["구축 및 설치", "대시보드 필드 테스트", "준공 및 문서"]
        );

        // Second row of the first subsection carries neither label.
        assert_eq!(rows[1].section, "");
        assert_eq!(rows[1].subsection, "");
    }

    #[test]
    fn dates_format_as_month_dot_day() {
        let rows = timeline_rows(&seed_site());
        let apk_row = rows.iter().find(|r| r.task == "스마트 워치 APP 설치").unwrap();
        assert_eq!(apk_row.start_date, "12.16");
        assert_eq!(apk_row.completion_date, "12.19");

        let kickoff = rows.iter().find(|r| r.task == "Kick-Off").unwrap();
        assert_eq!(kickoff.start_date, "");
    }

    #[test]
    fn checklist_summary_counts_checked_items() {
        let summary = checklist_summary(&seed_site());
        assert_eq!(summary, "완료 17 / 19 (89%)");
    }
}
