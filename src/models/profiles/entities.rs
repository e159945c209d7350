use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 学生档案，关联一个用户并归属于唯一的批次
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/profile.ts")]
pub struct Student {
    pub id: i64,
    pub user_id: i64,
    pub batch_id: i64,
    /// 学号
    pub student_code: String,
    pub first_name: String,
    pub last_name: String,
    pub program: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/profile.ts")]
pub struct Professor {
    pub id: i64,
    pub user_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub designation: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
