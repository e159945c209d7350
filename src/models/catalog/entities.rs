use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 课程状态
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/catalog.ts")]
pub enum CourseStatus {
    Draft,
    Published,
}

impl std::fmt::Display for CourseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CourseStatus::Draft => write!(f, "draft"),
            CourseStatus::Published => write!(f, "published"),
        }
    }
}

impl std::str::FromStr for CourseStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(CourseStatus::Draft),
            "published" => Ok(CourseStatus::Published),
            _ => Err(format!("Invalid course status: {s}")),
        }
    }
}

/// 批次（同一届学生）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/catalog.ts")]
pub struct Batch {
    pub id: i64,
    pub title: String,
    pub subtitle: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/catalog.ts")]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub credit: i32,
    pub status: CourseStatus,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// 批次-课程-教师 关联，每个 (batch, course) 只对应一位教师
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/catalog.ts")]
pub struct BatchCourse {
    pub id: i64,
    pub batch_id: i64,
    pub course_id: i64,
    pub professor_id: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// 课程资料
///
/// 同一课程内按 id 升序构成学习顺序。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/catalog.ts")]
pub struct Material {
    pub id: i64,
    pub batch_id: i64,
    pub course_id: i64,
    pub professor_id: Option<i64>,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub video_path: Option<String>,
    pub assignment_path: Option<String>,
    /// 作业满分，未设置表示该资料没有作业
    pub marks: Option<f64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
