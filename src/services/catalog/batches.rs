use std::sync::Arc;

use tracing::info;

use super::lookup::find_course;
use crate::errors::{LmsError, Result};
use crate::middlewares::guard::require_admin;
use crate::models::catalog::{
    entities::{Batch, BatchCourse, Course},
    requests::{AssignBatchCourseRequest, CreateBatchRequest},
};
use crate::models::users::entities::User;
use crate::storage::Storage;

pub async fn find_batch(storage: &Arc<dyn Storage>, batch_id: i64) -> Result<Batch> {
    storage
        .get_batch_by_id(batch_id)
        .await?
        .ok_or_else(|| LmsError::not_found("Batch not found"))
}

pub async fn create_batch(
    storage: &Arc<dyn Storage>,
    caller: Option<&User>,
    req: CreateBatchRequest,
) -> Result<Batch> {
    require_admin(caller)?;
    req.validate()?;
    storage.create_batch(req).await
}

pub async fn list_batches(storage: &Arc<dyn Storage>, caller: Option<&User>) -> Result<Vec<Batch>> {
    require_admin(caller)?;
    storage.list_batches().await
}

/// 为批次分配课程与负责教师，重复分配时更换教师
pub async fn assign_course(
    storage: &Arc<dyn Storage>,
    caller: Option<&User>,
    batch_id: i64,
    req: AssignBatchCourseRequest,
) -> Result<BatchCourse> {
    require_admin(caller)?;
    find_batch(storage, batch_id).await?;
    find_course(storage, req.course_id).await?;
    if storage.get_professor_by_id(req.professor_id).await?.is_none() {
        return Err(LmsError::not_found("Professor not found"));
    }

    let link = storage.assign_batch_course(batch_id, req).await?;
    info!(
        "Course {} assigned to batch {} with professor {}",
        link.course_id, link.batch_id, link.professor_id
    );
    Ok(link)
}

pub async fn list_batch_courses(
    storage: &Arc<dyn Storage>,
    caller: Option<&User>,
    batch_id: i64,
) -> Result<Vec<Course>> {
    require_admin(caller)?;
    find_batch(storage, batch_id).await?;
    storage.list_courses_of_batch(batch_id).await
}
