use std::sync::Arc;

use crate::errors::{LmsError, Result};
use crate::middlewares::guard::require_professor;
use crate::models::assignments::entities::AssignmentSubmission;
use crate::models::users::entities::User;
use crate::storage::Storage;

pub async fn list_submissions(
    storage: &Arc<dyn Storage>,
    caller: Option<&User>,
    course_id: i64,
    material_id: i64,
) -> Result<Vec<AssignmentSubmission>> {
    require_professor(caller)?;

    if storage.get_material_by_id(material_id).await?.is_none() {
        return Err(LmsError::not_found("Material not found"));
    }

    let submissions = storage
        .list_assignment_submissions(course_id, material_id)
        .await?;
    if submissions.is_empty() {
        return Err(LmsError::not_found("No assignments found"));
    }
    Ok(submissions)
}
