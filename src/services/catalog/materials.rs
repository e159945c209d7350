use std::sync::Arc;

use tracing::info;

use super::batches::find_batch;
use super::lookup::find_course;
use crate::errors::{LmsError, Result};
use crate::middlewares::guard::{require_admin, require_professor_profile, require_staff};
use crate::models::catalog::{entities::Material, requests::CreateMaterialRequest};
use crate::models::users::entities::User;
use crate::storage::Storage;

/// 创建资料，课程必须已经分配给该批次
///
/// 教师只能为自己负责的课程创建资料，管理员创建的资料不记录作者。
pub async fn create_material(
    storage: &Arc<dyn Storage>,
    caller: Option<&User>,
    req: CreateMaterialRequest,
) -> Result<Material> {
    let user = require_staff(caller)?;
    req.validate()?;

    find_batch(storage, req.batch_id).await?;
    find_course(storage, req.course_id).await?;
    if !storage.is_course_in_batch(req.batch_id, req.course_id).await? {
        return Err(LmsError::validation(
            "The course is not assigned to this batch.",
        ));
    }

    let professor_id = if user.is_professor() {
        let professor = require_professor_profile(storage, caller).await?;
        if !storage
            .is_professor_assigned(professor.id, req.course_id)
            .await?
        {
            return Err(LmsError::authorization(
                "Course not found or not assigned to this professor",
            ));
        }
        Some(professor.id)
    } else {
        None
    };

    let material = storage.create_material(professor_id, req).await?;
    info!(
        "Material {} created in course {} by user {}",
        material.id, material.course_id, user.id
    );
    Ok(material)
}

pub async fn list_materials(
    storage: &Arc<dyn Storage>,
    caller: Option<&User>,
    course_id: i64,
) -> Result<Vec<Material>> {
    require_staff(caller)?;
    find_course(storage, course_id).await?;
    storage.list_materials_by_course(course_id).await
}

pub async fn delete_material(
    storage: &Arc<dyn Storage>,
    caller: Option<&User>,
    material_id: i64,
) -> Result<()> {
    require_admin(caller)?;
    if !storage.delete_material(material_id).await? {
        return Err(LmsError::not_found("Material not found"));
    }
    Ok(())
}
