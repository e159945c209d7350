use serde::Serialize;
use ts_rs::TS;

use super::entities::Certificate;
use crate::models::common::PaginationInfo;

/// CGPA 计算结果
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/certificate.ts")]
pub struct CgpaResponse {
    pub student_id: i64,
    pub total_mcqs: i64,
    pub correct_mcqs: i64,
    pub total_assignment_marks: f64,
    pub obtained_assignment_marks: f64,
    pub mcq_percentage: f64,
    pub assignment_percentage: f64,
    pub mcq_grade_point: f64,
    pub assignment_grade_point: f64,
    pub total_credits: i64,
    pub cgpa: f64,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/certificate.ts")]
pub struct CertificateListResponse {
    pub items: Vec<Certificate>,
    pub pagination: PaginationInfo,
}
