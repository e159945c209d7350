use std::sync::Arc;

use tracing::info;

use crate::errors::{LmsError, Result};
use crate::middlewares::guard::require_staff;
use crate::models::mcqs::{
    entities::Mcq,
    requests::{CreateMcqsRequest, McqInput},
};
use crate::models::users::entities::User;
use crate::services::catalog::lookup::find_material_in_course;
use crate::storage::Storage;

pub async fn create_mcqs(
    storage: &Arc<dyn Storage>,
    caller: Option<&User>,
    course_id: i64,
    material_id: i64,
    req: CreateMcqsRequest,
) -> Result<Vec<Mcq>> {
    let user = require_staff(caller)?;
    req.validate()?;
    find_material_in_course(storage, course_id, material_id).await?;

    let created = storage.create_mcqs(course_id, material_id, req.mcqs).await?;
    info!(
        "User {} created {} MCQs for material {}",
        user.id,
        created.len(),
        material_id
    );
    Ok(created)
}

pub async fn update_mcq(
    storage: &Arc<dyn Storage>,
    caller: Option<&User>,
    mcq_id: i64,
    req: McqInput,
) -> Result<Mcq> {
    require_staff(caller)?;
    req.validate()?;

    storage
        .update_mcq(mcq_id, req)
        .await?
        .ok_or_else(|| LmsError::not_found("MCQ not found"))
}

pub async fn delete_mcq(
    storage: &Arc<dyn Storage>,
    caller: Option<&User>,
    mcq_id: i64,
) -> Result<()> {
    require_staff(caller)?;

    if !storage.delete_mcq(mcq_id).await? {
        return Err(LmsError::not_found("MCQ not found"));
    }
    Ok(())
}
