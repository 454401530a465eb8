//! Access Gate
//!
//! Static credential allow-list. Successful authentication yields the
//! operator whose nickname is recorded on completed timeline items.
//! Nothing beyond the allow-list check lives here.

/// (email, password, nickname)
const ALLOWED_USERS: &[(&str, &str, &str)] = &[
    ("admin@site-timeline.kr", "password123", "관리자"),
    ("rnd@site-timeline.kr", "password123", "연구소"),
    ("field@site-timeline.kr", "password123", "현장팀"),
];

/// An authenticated operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operator {
    pub email: String,
    pub nickname: String,
}

/// Check credentials against the allow-list
pub fn authenticate(email: &str, password: &str) -> Option<Operator> {
    let email = email.trim();
    ALLOWED_USERS
        .iter()
        .find(|(allowed_email, allowed_password, _)| {
            email.eq_ignore_ascii_case(allowed_email) && password == *allowed_password
        })
        .map(|(allowed_email, _, nickname)| Operator {
            email: allowed_email.to_string(),
            nickname: nickname.to_string(),
        })
}
