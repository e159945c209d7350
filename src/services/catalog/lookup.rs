use std::sync::Arc;

use crate::errors::{LmsError, Result};
use crate::models::catalog::entities::{Course, Material};
use crate::storage::Storage;

pub async fn find_course(storage: &Arc<dyn Storage>, course_id: i64) -> Result<Course> {
    storage
        .get_course_by_id(course_id)
        .await?
        .ok_or_else(|| LmsError::not_found("Course not found."))
}

/// 课程存在且资料属于该课程
pub async fn find_material_in_course(
    storage: &Arc<dyn Storage>,
    course_id: i64,
    material_id: i64,
) -> Result<(Course, Material)> {
    let course = find_course(storage, course_id).await?;

    match storage.get_material_by_id(material_id).await? {
        Some(material) if material.course_id == course_id => Ok((course, material)),
        _ => Err(LmsError::not_found("Material not found for this course")),
    }
}
