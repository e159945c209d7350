use std::sync::Arc;

use crate::errors::{LmsError, Result};
use crate::middlewares::guard::require_authenticated;
use crate::models::mcqs::responses::McqListResponse;
use crate::models::users::entities::User;
use crate::services::catalog::lookup::find_material_in_course;
use crate::storage::Storage;

/// 列出资料下的选择题，学生看不到正确答案
pub async fn list_mcqs(
    storage: &Arc<dyn Storage>,
    caller: Option<&User>,
    course_id: i64,
    material_id: i64,
) -> Result<McqListResponse> {
    let user = require_authenticated(caller)?;
    find_material_in_course(storage, course_id, material_id).await?;

    let mcqs = storage.list_mcqs_by_material(course_id, material_id).await?;
    if mcqs.is_empty() {
        return Err(LmsError::not_found("No MCQs found for this material"));
    }

    if user.is_student() {
        Ok(McqListResponse::Questions(
            mcqs.into_iter().map(|m| m.into_question()).collect(),
        ))
    } else {
        Ok(McqListResponse::Full(mcqs))
    }
}
