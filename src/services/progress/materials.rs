use std::sync::Arc;

use super::lock_state::annotate;
use crate::errors::{LmsError, Result};
use crate::middlewares::guard::require_student;
use crate::models::progress::responses::MaterialWithLockState;
use crate::models::users::entities::User;
use crate::storage::Storage;

/// 列出课程资料并标注锁定状态
pub async fn list_materials_with_lock_state(
    storage: &Arc<dyn Storage>,
    caller: Option<&User>,
    course_id: i64,
) -> Result<Vec<MaterialWithLockState>> {
    let student = require_student(storage, caller).await?;

    if storage.get_course_by_id(course_id).await?.is_none() {
        return Err(LmsError::not_found("Course not found."));
    }

    let materials = storage.list_materials_by_course(course_id).await?;
    let ids: Vec<i64> = materials.iter().map(|m| m.id).collect();
    let progress = storage.get_progress_map(student.user_id, &ids).await?;

    Ok(annotate(materials, &progress))
}

/// 单个资料的锁定状态，按它在课程序列中的位置推导
pub async fn get_material_with_lock_state(
    storage: &Arc<dyn Storage>,
    caller: Option<&User>,
    course_id: i64,
    material_id: i64,
) -> Result<MaterialWithLockState> {
    list_materials_with_lock_state(storage, caller, course_id)
        .await?
        .into_iter()
        .find(|m| m.material.id == material_id)
        .ok_or_else(|| LmsError::not_found("Video not found."))
}
