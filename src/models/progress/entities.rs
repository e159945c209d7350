use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 视频观看进度，(user_id, material_id) 唯一
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/progress.ts")]
pub struct VideoProgress {
    pub id: i64,
    pub user_id: i64,
    pub material_id: i64,
    pub progress: i32,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
