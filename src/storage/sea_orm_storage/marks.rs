//! 成绩统计查询
//!
//! 求和在取回列值后完成，避免不同数据库对 SUM 返回类型的差异。

use super::SeaOrmStorage;
use crate::entity::assignment_submissions::{
    Column as SubmissionColumn, Entity as AssignmentSubmissions,
};
use crate::entity::materials::{Column as MaterialColumn, Entity as Materials};
use crate::entity::mcqs::{Column as McqColumn, Entity as Mcqs};
use crate::entity::student_answers::{Column as AnswerColumn, Entity as StudentAnswers};
use crate::errors::{LmsError, Result};
use crate::models::marks::entities::{MarksScope, MarksTotals};
use sea_orm::{ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect};

fn mcq_condition(scope: MarksScope) -> Condition {
    match scope {
        MarksScope::Material {
            course_id,
            material_id,
        } => Condition::all()
            .add(McqColumn::CourseId.eq(course_id))
            .add(McqColumn::MaterialId.eq(material_id)),
        MarksScope::Course { course_id } => Condition::all().add(McqColumn::CourseId.eq(course_id)),
        MarksScope::Overall => Condition::all(),
    }
}

fn material_condition(scope: MarksScope) -> Condition {
    match scope {
        MarksScope::Material {
            course_id,
            material_id,
        } => Condition::all()
            .add(MaterialColumn::Id.eq(material_id))
            .add(MaterialColumn::CourseId.eq(course_id)),
        MarksScope::Course { course_id } => {
            Condition::all().add(MaterialColumn::CourseId.eq(course_id))
        }
        MarksScope::Overall => Condition::all(),
    }
}

fn submission_condition(scope: MarksScope) -> Condition {
    match scope {
        MarksScope::Material {
            course_id,
            material_id,
        } => Condition::all()
            .add(SubmissionColumn::CourseId.eq(course_id))
            .add(SubmissionColumn::MaterialId.eq(material_id)),
        MarksScope::Course { course_id } => {
            Condition::all().add(SubmissionColumn::CourseId.eq(course_id))
        }
        MarksScope::Overall => Condition::all(),
    }
}

impl SeaOrmStorage {
    /// 统计某学生在给定范围内的选择题与作业原始数据
    pub async fn collect_marks_totals_impl(
        &self,
        student_id: i64,
        scope: MarksScope,
    ) -> Result<MarksTotals> {
        let total_mcqs = Mcqs::find()
            .filter(mcq_condition(scope))
            .count(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("统计选择题数量失败: {e}")))?;

        let correct_mcqs = StudentAnswers::find()
            .inner_join(Mcqs)
            .filter(AnswerColumn::StudentId.eq(student_id))
            .filter(AnswerColumn::IsCorrect.eq(true))
            .filter(mcq_condition(scope))
            .count(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("统计正确作答失败: {e}")))?;

        let expected: Vec<Option<f64>> = Materials::find()
            .select_only()
            .column(MaterialColumn::Marks)
            .filter(material_condition(scope))
            .filter(MaterialColumn::Marks.is_not_null())
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("统计资料总分失败: {e}")))?;

        let obtained: Vec<Option<f64>> = AssignmentSubmissions::find()
            .select_only()
            .column(SubmissionColumn::Marks)
            .filter(SubmissionColumn::StudentId.eq(student_id))
            .filter(submission_condition(scope))
            .filter(SubmissionColumn::Marks.is_not_null())
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("统计作业得分失败: {e}")))?;

        Ok(MarksTotals {
            total_mcqs: total_mcqs as i64,
            correct_mcqs: correct_mcqs as i64,
            expected_marks: expected.into_iter().flatten().sum(),
            graded_submissions: obtained.len() as i64,
            obtained_marks: obtained.into_iter().flatten().sum(),
        })
    }
}
