use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 证书：签发时刻的 CGPA 快照
///
/// 审批后除 `approved` 外不再变化，`approved` 只能由 false 变为 true。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/certificate.ts")]
pub struct Certificate {
    pub id: i64,
    pub student_id: i64,
    pub student_code: String,
    pub first_name: String,
    pub last_name: String,
    pub program: String,
    pub batch_title: String,
    pub cgpa: f64,
    pub certificate_date: chrono::NaiveDate,
    pub issued_by: String,
    pub approved: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// 审批结果：本次完成审批，或此前已审批
#[derive(Debug, Clone)]
pub enum ApprovalOutcome {
    Approved(Certificate),
    AlreadyApproved(Certificate),
}

impl ApprovalOutcome {
    pub fn into_certificate(self) -> Certificate {
        match self {
            ApprovalOutcome::Approved(c) | ApprovalOutcome::AlreadyApproved(c) => c,
        }
    }
}

/// 待写入的证书快照
#[derive(Debug, Clone)]
pub struct NewCertificate {
    pub student_id: i64,
    pub student_code: String,
    pub first_name: String,
    pub last_name: String,
    pub program: String,
    pub batch_title: String,
    pub cgpa: f64,
    pub certificate_date: chrono::NaiveDate,
    pub issued_by: String,
}
