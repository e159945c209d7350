//! 作业提交存储操作

use super::SeaOrmStorage;
use crate::entity::assignment_submissions::{ActiveModel, Column, Entity as AssignmentSubmissions};
use crate::errors::{LmsError, Result};
use crate::models::assignments::{entities::AssignmentSubmission, requests::NewSubmission};
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 写入作业提交
    ///
    /// 同一 (student, material, course, batch) 重复提交只替换文件路径，分数不变。
    pub async fn upsert_assignment_submission_impl(
        &self,
        submission: NewSubmission,
    ) -> Result<AssignmentSubmission> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            student_id: Set(submission.student_id),
            material_id: Set(submission.material_id),
            course_id: Set(submission.course_id),
            batch_id: Set(submission.batch_id),
            file_path: Set(submission.file_path),
            marks: Set(None),
            submitted_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        AssignmentSubmissions::insert(model)
            .on_conflict(
                OnConflict::columns([
                    Column::StudentId,
                    Column::MaterialId,
                    Column::CourseId,
                    Column::BatchId,
                ])
                .update_columns([Column::FilePath, Column::SubmittedAt, Column::UpdatedAt])
                .to_owned(),
            )
            .exec(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("保存作业提交失败: {e}")))?;

        let result = AssignmentSubmissions::find()
            .filter(Column::StudentId.eq(submission.student_id))
            .filter(Column::MaterialId.eq(submission.material_id))
            .filter(Column::CourseId.eq(submission.course_id))
            .filter(Column::BatchId.eq(submission.batch_id))
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询作业提交失败: {e}")))?
            .ok_or_else(|| LmsError::unexpected("作业提交写入后未找到"))?;

        Ok(result.into_submission())
    }

    pub async fn get_assignment_submission_impl(
        &self,
        student_id: i64,
        course_id: i64,
        material_id: i64,
    ) -> Result<Option<AssignmentSubmission>> {
        let result = AssignmentSubmissions::find()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::CourseId.eq(course_id))
            .filter(Column::MaterialId.eq(material_id))
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询作业提交失败: {e}")))?;

        Ok(result.map(|m| m.into_submission()))
    }

    pub async fn list_assignment_submissions_impl(
        &self,
        course_id: i64,
        material_id: i64,
    ) -> Result<Vec<AssignmentSubmission>> {
        let submissions = AssignmentSubmissions::find()
            .filter(Column::CourseId.eq(course_id))
            .filter(Column::MaterialId.eq(material_id))
            .order_by_desc(Column::SubmittedAt)
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询作业提交列表失败: {e}")))?;

        Ok(submissions.into_iter().map(|m| m.into_submission()).collect())
    }

    /// 写入分数
    pub async fn grade_assignment_submission_impl(
        &self,
        submission_id: i64,
        marks: f64,
    ) -> Result<Option<AssignmentSubmission>> {
        let Some(existing) = AssignmentSubmissions::find_by_id(submission_id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询作业提交失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();
        model.marks = Set(Some(marks));
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let updated = model
            .update(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("评分失败: {e}")))?;

        Ok(Some(updated.into_submission()))
    }
}
