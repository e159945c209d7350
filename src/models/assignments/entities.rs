use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 作业提交，(student, material, course, batch) 唯一
///
/// 重新提交只替换文件，不影响已有分数。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentSubmission {
    pub id: i64,
    pub student_id: i64,
    pub material_id: i64,
    pub course_id: i64,
    pub batch_id: i64,
    pub file_path: String,
    pub marks: Option<f64>,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
