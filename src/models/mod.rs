pub mod assignments;
pub mod auth;
pub mod catalog;
pub mod certificates;
pub mod common;
pub mod marks;
pub mod mcqs;
pub mod notifications;
pub mod profiles;
pub mod progress;
pub mod users;

pub use common::{ApiResponse, ErrorCode, PaginatedResponse, PaginationInfo, PaginationQuery};

/// 程序启动时间
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
