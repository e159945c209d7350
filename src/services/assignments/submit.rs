use std::sync::Arc;

use tracing::info;

use super::upload::discard_upload;

use crate::errors::{LmsError, Result};
use crate::middlewares::guard::require_student;
use crate::models::assignments::{entities::AssignmentSubmission, requests::NewSubmission};
use crate::models::catalog::entities::Material;
use crate::models::profiles::entities::Student;
use crate::models::users::entities::User;
use crate::storage::Storage;

/// 提交前的检查：学生档案、资料归属、选课与批次
pub async fn authorize_submission(
    storage: &Arc<dyn Storage>,
    caller: Option<&User>,
    course_id: i64,
    material_id: i64,
) -> Result<(Student, Material)> {
    let student = require_student(storage, caller).await?;

    let material = match storage.get_material_by_id(material_id).await? {
        Some(material) if material.course_id == course_id => material,
        _ => return Err(LmsError::not_found("Material not found")),
    };

    if !storage.is_course_in_batch(student.batch_id, course_id).await? {
        return Err(LmsError::authorization("You are not enrolled in this course"));
    }
    if material.batch_id != student.batch_id {
        return Err(LmsError::authorization(
            "Material does not belong to your batch",
        ));
    }

    Ok((student, material))
}

/// 写入或覆盖提交记录，课程与批次取自资料
///
/// 写库失败时删除已保存的文件。
pub async fn record_submission(
    storage: &Arc<dyn Storage>,
    student: &Student,
    material: &Material,
    file_path: String,
) -> Result<AssignmentSubmission> {
    let submission = NewSubmission {
        student_id: student.id,
        material_id: material.id,
        course_id: material.course_id,
        batch_id: material.batch_id,
        file_path: file_path.clone(),
    };

    match storage.upsert_assignment_submission(submission).await {
        Ok(saved) => {
            info!(
                "Student {} submitted assignment for material {} at {}",
                student.id, material.id, saved.file_path
            );
            Ok(saved)
        }
        Err(e) => {
            discard_upload(&file_path).await;
            Err(e)
        }
    }
}
