use std::sync::Arc;

use crate::errors::{LmsError, Result};
use crate::middlewares::guard::{require_admin, require_student};
use crate::models::progress::responses::CompletionResponse;
use crate::models::users::entities::User;
use crate::storage::Storage;
use crate::utils::score::percentage;

/// 由进度之和与资料数计算完成度
pub fn completion_of(progress: i64, material_count: u64) -> CompletionResponse {
    let expected_progress = material_count as i64 * 100;
    CompletionResponse {
        progress,
        expected_progress,
        video_completed: percentage(progress as f64, expected_progress as f64),
    }
}

/// 用户在全部资料上的观看完成度
pub async fn completion_for_user(
    storage: &Arc<dyn Storage>,
    user_id: i64,
) -> Result<CompletionResponse> {
    let material_count = storage.count_materials().await?;
    let progress = storage.sum_video_progress(user_id).await?;
    Ok(completion_of(progress, material_count))
}

pub async fn own_completion(
    storage: &Arc<dyn Storage>,
    caller: Option<&User>,
) -> Result<CompletionResponse> {
    let student = require_student(storage, caller).await?;
    completion_for_user(storage, student.user_id).await
}

pub async fn student_completion(
    storage: &Arc<dyn Storage>,
    caller: Option<&User>,
    student_id: i64,
) -> Result<CompletionResponse> {
    require_admin(caller)?;

    let student = storage
        .get_student_by_id(student_id)
        .await?
        .ok_or_else(|| LmsError::not_found("Student not found."))?;

    completion_for_user(storage, student.user_id).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_materials_is_zero() {
        let c = completion_of(0, 0);
        assert_eq!(c.expected_progress, 0);
        assert_eq!(c.video_completed, 0.0);
    }

    #[test]
    fn test_completion_percentage() {
        let c = completion_of(140, 3);
        assert_eq!(c.expected_progress, 300);
        assert_eq!(c.video_completed, 46.67);
    }
}
