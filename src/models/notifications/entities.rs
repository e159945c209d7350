use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 通知模板
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/notification.ts")]
pub enum NotificationKind {
    CertificateIssued,
    CertificateApproved,
    AssignmentGraded,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::CertificateIssued => "certificate_issued",
            NotificationKind::CertificateApproved => "certificate_approved",
            NotificationKind::AssignmentGraded => "assignment_graded",
        }
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for NotificationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "certificate_issued" => Ok(NotificationKind::CertificateIssued),
            "certificate_approved" => Ok(NotificationKind::CertificateApproved),
            "assignment_graded" => Ok(NotificationKind::AssignmentGraded),
            _ => Err(format!("Invalid notification kind: {s}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/notification.ts")]
pub struct Notification {
    pub id: i64,
    pub user_id: i64,
    pub kind: NotificationKind,
    pub title: String,
    pub content: Option<String>,
    pub is_read: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
