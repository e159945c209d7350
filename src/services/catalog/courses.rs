use std::sync::Arc;

use crate::errors::Result;
use crate::middlewares::guard::require_admin;
use crate::models::catalog::{entities::Course, requests::CreateCourseRequest};
use crate::models::users::entities::User;
use crate::storage::Storage;

pub async fn create_course(
    storage: &Arc<dyn Storage>,
    caller: Option<&User>,
    req: CreateCourseRequest,
) -> Result<Course> {
    require_admin(caller)?;
    req.validate()?;
    storage.create_course(req).await
}

pub async fn list_courses(storage: &Arc<dyn Storage>, caller: Option<&User>) -> Result<Vec<Course>> {
    require_admin(caller)?;
    storage.list_courses().await
}
