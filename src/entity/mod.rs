//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体进行 CRUD 操作，然后转换为 models 中的业务实体。
//! 时间统一存储为 Unix 时间戳（秒）。

pub mod prelude;

pub mod assignment_submissions;
pub mod batch_courses;
pub mod batches;
pub mod certificates;
pub mod courses;
pub mod materials;
pub mod mcqs;
pub mod notifications;
pub mod professors;
pub mod student_answers;
pub mod students;
pub mod users;
pub mod video_progress;

use chrono::{DateTime, Utc};

/// 时间戳转换为 UTC 时间
pub(crate) fn ts_to_datetime(ts: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()
}
