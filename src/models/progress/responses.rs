use serde::Serialize;
use ts_rs::TS;

use crate::models::catalog::entities::Material;

/// 带锁定状态的资料
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/progress.ts")]
pub struct MaterialWithLockState {
    #[serde(flatten)]
    #[ts(flatten)]
    pub material: Material,
    pub progress: i32,
    pub locked: bool,
}

/// 学习完成度汇总
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/progress.ts")]
pub struct CompletionResponse {
    /// 已记录进度之和
    pub progress: i64,
    /// 全部资料看完时的进度之和（资料数 × 100）
    pub expected_progress: i64,
    /// 完成百分比，保留两位小数
    pub video_completed: f64,
}
