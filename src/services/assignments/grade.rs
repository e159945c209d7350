use std::sync::Arc;

use tracing::{info, warn};

use crate::errors::{LmsError, Result};
use crate::middlewares::guard::require_professor_profile;
use crate::models::assignments::{
    entities::AssignmentSubmission, requests::GradeAssignmentRequest,
};
use crate::models::users::entities::User;
use crate::services::catalog::lookup::find_course;
use crate::services::notifications::{dispatch::assignment_graded, notify};
use crate::storage::Storage;

#[derive(Debug, Clone, Copy)]
pub struct GradeTarget {
    pub course_id: i64,
    pub material_id: i64,
    pub student_id: i64,
}

/// 评分：只有负责该课程的教师可以给提交打分
pub async fn grade_assignment(
    storage: &Arc<dyn Storage>,
    caller: Option<&User>,
    target: GradeTarget,
    req: GradeAssignmentRequest,
) -> Result<AssignmentSubmission> {
    req.validate()?;
    let professor = require_professor_profile(storage, caller).await?;
    find_course(storage, target.course_id).await?;

    if !storage
        .is_professor_assigned(professor.id, target.course_id)
        .await?
    {
        return Err(LmsError::authorization(
            "Forbidden. You are not assigned to this course.",
        ));
    }

    let submission = storage
        .get_assignment_submission(target.student_id, target.course_id, target.material_id)
        .await?
        .ok_or_else(|| LmsError::not_found("Assignment not found."))?;

    let graded = storage
        .grade_assignment_submission(submission.id, req.marks)
        .await?
        .ok_or_else(|| LmsError::not_found("Assignment not found."))?;

    info!(
        "Professor {} graded submission {} with {} marks",
        professor.id, graded.id, req.marks
    );

    match storage.get_student_by_id(graded.student_id).await {
        Ok(Some(student)) => notify(storage.clone(), assignment_graded(student.user_id, &graded)),
        Ok(None) => warn!("Graded submission {} has no student profile", graded.id),
        Err(e) => warn!("Skipping grade notification for submission {}: {}", graded.id, e),
    }

    Ok(graded)
}
