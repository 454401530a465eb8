//! Seed Dataset
//!
//! Static definition of the default sites: the canonical 67-item
//! installation timeline and the canonical 19-item verification
//! checklist. Pure data; the store and the reconciler treat this as the
//! authoritative shape.

use chrono::{NaiveDate, TimeZone, Utc};

use crate::domain::{ChecklistItem, Role, Site, TaskStatus, TimelineItem};

const SECTION_BUILD: &str = "구축 및 설치";
const SECTION_FIELD_TEST: &str = "대시보드 필드 테스트";
const SECTION_HANDOVER: &str = "준공 및 문서";

const SUB_PREP: &str = "사전 준비";
const SUB_INFRA: &str = "인프라 구축";
const SUB_GAS_METER: &str = "가스검침기 설치";
const SUB_SERVER_INSTALL: &str = "운영서버 설치";
const SUB_SERVER_CONFIG: &str = "운영서버 설정";
const SUB_SERVER_DATA: &str = "운영서버 데이터 등록";
const SUB_ONSITE: &str = "현장 설치";

/// Section 1 tasks: (subsection, task, role)
const BUILD_TASKS: &[(&str, &str, Role)] = &[
    (SUB_PREP, "Kick-Off", Role::Both),
    (SUB_PREP, "현장 답사시 비콘 갯수 픽스", Role::Field),
    (SUB_PREP, "비콘 번호 체계표 생성 및 비콘 개발사에 전달", Role::Field),
    (SUB_PREP, "계약 FIX 되면 운영 서버 개발사에 개발 요청", Role::Rnd),
    (SUB_PREP, "제품 발주", Role::Field),
    (SUB_INFRA, "IP 할당 및 구축", Role::Field),
    (SUB_INFRA, "포트포워딩", Role::Field),
    (SUB_INFRA, "중계기 설치 실사 동행 및 송수신 통신 테스트", Role::Field),
    (SUB_INFRA, "중계기 세팅", Role::Field),
    (SUB_INFRA, "중계기 음영지역 테스트", Role::Field),
    (SUB_INFRA, "중계기 방폭존 잔여 설치 공사", Role::Field),
    (SUB_INFRA, "VPN 세팅", Role::Field),
    (SUB_INFRA, "Lora 네트워크 서버 현장 서버실 설치", Role::Field),
    (SUB_INFRA, "통신 품질테스트", Role::Field),
    (SUB_INFRA, "중계기 품질 측정", Role::Field),
    (
        SUB_GAS_METER,
        "PPM 고정가스 검침기 설치용 AP 셋팅을 위한 전송 서버 주소 및 고유 아이디 생성 및 배포",
        Role::Field,
    ),
    (SUB_GAS_METER, "PPM 고정가스 검침기 설치", Role::Field),
    (SUB_SERVER_INSTALL, "알리고 API 신규 사업소 IP 등록", Role::Rnd),
    (SUB_SERVER_INSTALL, "운영서버 준비 완료 확인", Role::Rnd),
    (SUB_SERVER_INSTALL, "운영서버 현장 서버실 설치", Role::Field),
    (SUB_SERVER_INSTALL, "운영서버 URL 확인", Role::Field),
    (SUB_SERVER_CONFIG, "운영서버 권한 설정", Role::Field),
    (SUB_SERVER_CONFIG, "운영서버 사용자 설정", Role::Field),
    (SUB_SERVER_CONFIG, "운영서버 데이터 정책 관리 설정", Role::Field),
    (SUB_SERVER_CONFIG, "지자체 로고 파일 준비", Role::Rnd),
    (SUB_SERVER_CONFIG, "트래커 EUI LIST 확인", Role::Field),
    (SUB_SERVER_CONFIG, "운영서버 운영사 관리 설정", Role::Field),
    (SUB_SERVER_CONFIG, "운영서버 센서 공급사 설정", Role::Field),
    (SUB_SERVER_CONFIG, "운영서버 센서 마스터 관리 설정", Role::Field),
    (SUB_SERVER_CONFIG, "운영서버 현장-센서 권한 관리 설정", Role::Field),
    (SUB_SERVER_DATA, "현장 관리 - 도면 세팅", Role::Rnd),
    (SUB_SERVER_DATA, "현장 관리 - 현장 등록", Role::Field),
    (SUB_SERVER_DATA, "비콘 관리 - 비콘 등록", Role::Field),
    (SUB_SERVER_DATA, "트래커 관리 - 트래커 등록", Role::Field),
    (SUB_SERVER_DATA, "이동형중계기 관리 - 이동형중계기 등록", Role::Field),
    (SUB_SERVER_DATA, "센서 관리 - 워치 등록", Role::Field),
    (SUB_SERVER_DATA, "센서 관리 - 이동가스검침기 등록", Role::Field),
    (SUB_SERVER_DATA, "알림 관리 - 알림 등록", Role::Field),
    (SUB_SERVER_DATA, "작업자 관리 - 작업자 등록", Role::Field),
    (SUB_SERVER_DATA, "작업자 관리 - 트래커/센서 교부", Role::Field),
    (SUB_SERVER_DATA, "위험성 평가 관리 - 위험성 평가 등록", Role::Field),
    (SUB_SERVER_DATA, "작업 관리 - 작업 등록", Role::Field),
    (SUB_SERVER_DATA, "증빙자료 관리 - 증빙자료 13항 카테고리 등록", Role::Rnd),
    (SUB_ONSITE, "비콘 설치", Role::Field),
    (SUB_ONSITE, "지오 펜스 & 셀 플래닝", Role::Field),
    (SUB_ONSITE, "트래커 스마트 워치 MAC 매핑", Role::Field),
    (SUB_ONSITE, "스마트 워치 APP 설치", Role::Field),
];

/// Section 2 tasks (flat, all both-team)
const FIELD_TEST_TASKS: &[&str] = &[
    "사업소 명 확인",
    "날짜 확인",
    "날씨 데이터 확인",
    "작업자 데이터 확인",
    "작업 목록 데이터 확인",
    "고정형 비콘 데이터 확인",
    "트래커 데이터 확인",
    "워치 데이터 확인",
    "이동형 가스검침기 데이터 확인",
    "이동형 중계기 데이터 확인",
    "고정가스 검침기 데이터 확인",
    "배터리 및 상태 이상 IoT 센서 현황 데이터 확인",
    "위급 상황 현황 데이터 확인",
];

/// Section 3 tasks: (task, role)
const HANDOVER_TASKS: &[(&str, Role)] = &[
    ("현장 VOC 점검 리스트 확인", Role::Both),
    ("메뉴얼 문서 작업", Role::Field),
    ("준공 문서 제출", Role::Field),
    ("H/W, S/W 제품 사용 교육", Role::Field),
    ("사업소에 제품 배포 및 수량 확인", Role::Field),
    ("준공 검수", Role::Field),
    ("준공 완료", Role::Both),
];

/// Canonical checklist: (text, default checked state)
const CHECKLIST: &[(&str, bool)] = &[
    (
        "위급상황(심박위험, 유해가스위험, SOS신호), 위험작업(위험 작업), 현재 작업자 현황(잔류 작업자 수, 전체 입실자 수, 전체 퇴실자 수)",
        true,
    ),
    ("작업자가 트래커를 착용해서 위치비콘이 설치된 곳에 위치하면 대시보드에 착용자의 위치가 출력되는가", true),
    ("작업자의 이름, 위치, 심박수, 가스정보(이동형 가스검지기) 등 데이터가 대시보드에 출력되는가", true),
    ("작업자목록에서 작업자의 행을 클릭하였을 때 작업자의 동선이력이 대시보드에 출력되는가", true),
    ("배터리 및 상태 이상 IoT 센서 현황으로 장비명(IoT 센서로 명칭 그룹화), 위치, 배터리가 대시보드에 출력되는가", false),
    ("위급상황 현황으로 작업자, 위치, 위급상황, 발생시간이 대시보드에 출력되는가", true),
    ("작업목록에서 작업명, 위험도, 위치, 작업자 수, 작업예정일시 및 시작일시, 작업종료일시 작업상태가 대시보드에 출력되는가", false),
    ("고정형비콘목록에서 비콘 이름, Major Minor, 위치, 배터리가 대시보드에 출력되는가", true),
    ("트래커목록에서 트래커 이름, 작업자명, 배터리, 사용여부, SOS-ON, 발생시간이 대시보드에 출력되는가", true),
    ("워치목록에서 워치 이름, 작업자명, 심박수, 배터리, 사용여부, 발생시간이 대시보드에 출력되는가", true),
    (
        "이동형 가스검지기 목록에서 가스센서 이름, 작업자명, 5종가스데이터(CO, CO2, H2S, O2, LEL), 배터리, 사용여부, 발생시간이 대시보드에 출력되는가",
        true,
    ),
    ("위치이력, 워치 및 가스센서 이력, 알림이력이 조회 및 백업 데이터로 엑셀파일 생성이 가능한가", true),
    ("위험 알림 발생 시(심박수, 유해가스 허용범위를 넘어설 경우,SOS 신호 등), 어느화면에서든 위험 알림 팝업이 출력되는가", true),
    ("위험 알림 발생 시 안전관리자의 스마트폰에 SOS 팝업 정보 문자 메세지가 자동 & 수동으로 전달되는가", true),
    ("운영서버에서 개인별로 매핑된 갤럭시 워치의 심박수를 최소,최대로 조절이 가능한가", true),
    ("입/퇴사자 발생시 작업자 계정 생성/삭제와 트래커, 갤럭시 워치, 휴대용 가스검지기가 매핑되는가", true),
    ("해당 위치에 설치된 고정형 가스검침기의 가스데이터(2종, O2와 H2S)가 대시보드에 출력되는가", true),
    ("고정형 가스 검지기에서 허용범위를 넘어설 경우 대시보드에 빨간색으로 위험신호로 표시가 되는가", true),
    ("고정형 가스 검지기에서 허용범위를 넘어설 경우 알림을 표시하고 관리자에게 문자로 전송되는가", true),
];

fn item(
    id: u32,
    step: String,
    task: &str,
    section: &str,
    subsection: Option<&str>,
    role: Role,
) -> TimelineItem {
    TimelineItem {
        id,
        step,
        task: task.to_string(),
        section: section.to_string(),
        subsection: subsection.map(str::to_string),
        status: TaskStatus::Pending,
        role,
        start_date: None,
        completion_date: None,
        completed_at: None,
        completed_by: None,
    }
}

/// The canonical timeline, all items pending.
pub fn initial_timeline() -> Vec<TimelineItem> {
    let mut items = Vec::with_capacity(BUILD_TASKS.len() + FIELD_TEST_TASKS.len() + HANDOVER_TASKS.len());

    for (i, &(subsection, task, role)) in BUILD_TASKS.iter().enumerate() {
        let id = i as u32 + 1;
        items.push(item(id, format!("1-{:02}", i + 1), task, SECTION_BUILD, Some(subsection), role));
    }
    let offset = items.len() as u32;
    for (i, &task) in FIELD_TEST_TASKS.iter().enumerate() {
        let id = offset + i as u32 + 1;
        items.push(item(id, format!("2-{:02}", i + 1), task, SECTION_FIELD_TEST, None, Role::Both));
    }
    let offset = items.len() as u32;
    for (i, &(task, role)) in HANDOVER_TASKS.iter().enumerate() {
        let id = offset + i as u32 + 1;
        items.push(item(id, format!("3-{:02}", i + 1), task, SECTION_HANDOVER, None, role));
    }

    // Planned date ranges carried on the original dataset
    set_dates(&mut items, 6, (2024, 12, 19), (2024, 12, 19));
    set_dates(&mut items, 7, (2024, 12, 19), (2024, 12, 19));
    set_dates(&mut items, 47, (2024, 12, 16), (2024, 12, 19));

    items
}

fn set_dates(items: &mut [TimelineItem], id: u32, start: (i32, u32, u32), end: (i32, u32, u32)) {
    if let Some(target) = items.iter_mut().find(|i| i.id == id) {
        target.start_date = NaiveDate::from_ymd_opt(start.0, start.1, start.2);
        target.completion_date = NaiveDate::from_ymd_opt(end.0, end.1, end.2);
    }
}

/// The canonical checklist with its seed default checked states.
pub fn initial_checklist() -> Vec<ChecklistItem> {
    CHECKLIST
        .iter()
        .enumerate()
        .map(|(i, &(text, checked))| ChecklistItem {
            id: i as u32 + 1,
            text: text.to_string(),
            checked,
        })
        .collect()
}

/// Canonical checklist item count
pub fn checklist_len() -> usize {
    CHECKLIST.len()
}

/// Fully completed variant of the canonical timeline (demo site)
fn completed_timeline() -> Vec<TimelineItem> {
    let completed_at = Utc.with_ymd_and_hms(2025, 12, 15, 10, 0, 0).single();
    initial_timeline()
        .into_iter()
        .map(|mut item| {
            item.status = TaskStatus::Completed;
            item.completed_at = completed_at;
            item
        })
        .collect()
}

/// Fully checked variant of the canonical checklist (demo site)
fn completed_checklist() -> Vec<ChecklistItem> {
    initial_checklist()
        .into_iter()
        .map(|mut item| {
            item.checked = true;
            item
        })
        .collect()
}

/// The default sites. Always merged back in whenever a load or rehydrate
/// leaves one of their ids missing.
pub fn initial_sites() -> Vec<Site> {
    vec![
        Site {
            id: "anyang-bakdal".to_string(),
            name: "안양 박달 사업소".to_string(),
            timeline: initial_timeline(),
            checklist: initial_checklist(),
        },
        Site {
            id: "icheon-public-sewer".to_string(),
            name: "이천 공공 하수도 사업소".to_string(),
            timeline: completed_timeline(),
            checklist: completed_checklist(),
        },
        Site {
            id: "gunpo-sewer".to_string(),
            name: "군포 하수도 사업소".to_string(),
            timeline: initial_timeline(),
            checklist: initial_checklist(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::calculate_progress;

    #[test]
    fn timeline_has_67_items_with_contiguous_ids() {
        let timeline = initial_timeline();
        assert_eq!(timeline.len(), 67);
        for (i, item) in timeline.iter().enumerate() {
            assert_eq!(item.id, i as u32 + 1);
        }
        assert_eq!(timeline[0].step, "1-01");
        assert_eq!(timeline[47].step, "2-01");
        assert_eq!(timeline[60].step, "3-01");
        assert_eq!(timeline[66].step, "3-07");
    }

    #[test]
    fn checklist_has_19_items_with_seed_defaults() {
        let checklist = initial_checklist();
        assert_eq!(checklist.len(), 19);
        assert_eq!(checklist_len(), 19);
        // Items 5 and 7 start unchecked in the seed, everything else checked
        for item in &checklist {
            assert_eq!(item.checked, item.id != 5 && item.id != 7);
        }
    }

    #[test]
    fn dated_items_carry_their_ranges() {
        let timeline = initial_timeline();
        let apk = timeline.iter().find(|i| i.id == 47).unwrap();
        assert_eq!(apk.start_date, NaiveDate::from_ymd_opt(2024, 12, 16));
        assert_eq!(apk.completion_date, NaiveDate::from_ymd_opt(2024, 12, 19));
    }

    #[test]
    fn demo_site_is_fully_complete() {
        let sites = initial_sites();
        assert_eq!(sites.len(), 3);
        let done = sites.iter().find(|s| s.id == "icheon-public-sewer").unwrap();
        let progress = calculate_progress(done);
        assert_eq!(progress.overall, 100);
        assert!(done.timeline.iter().all(|i| i.completed_at.is_some()));
    }
}
