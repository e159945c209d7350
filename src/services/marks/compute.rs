//! 成绩汇总
//!
//! 三个范围共用同一套计算：选择题按正确题数 / 题目总数，
//! 作业按已评分得分 / 资料满分之和，百分比统一保留两位小数。

use std::sync::Arc;

use crate::errors::{LmsError, Result};
use crate::middlewares::guard::{require_admin, require_student};
use crate::models::marks::{
    entities::{MarksScope, MarksTotals},
    responses::{
        AssignmentAverage, CourseMarksResponse, MaterialMarksResponse, OverallMarksResponse,
        ScoreBreakdown,
    },
};
use crate::models::profiles::entities::Student;
use crate::models::users::entities::User;
use crate::services::catalog::lookup::{find_course, find_material_in_course};
use crate::storage::Storage;

/// 查询对象：调用者本人，或由管理员指定的学生
#[derive(Debug, Clone, Copy)]
pub enum StudentRef {
    Own,
    ById(i64),
}

pub async fn resolve_student(
    storage: &Arc<dyn Storage>,
    caller: Option<&User>,
    who: StudentRef,
) -> Result<Student> {
    match who {
        StudentRef::Own => require_student(storage, caller).await,
        StudentRef::ById(student_id) => {
            require_admin(caller)?;
            find_student(storage, student_id).await
        }
    }
}

pub async fn find_student(storage: &Arc<dyn Storage>, student_id: i64) -> Result<Student> {
    storage
        .get_student_by_id(student_id)
        .await?
        .ok_or_else(|| LmsError::not_found("Student not found."))
}

pub fn mcq_breakdown(totals: &MarksTotals) -> ScoreBreakdown {
    ScoreBreakdown::new(totals.correct_mcqs as f64, totals.total_mcqs as f64)
}

pub fn assignment_breakdown(totals: &MarksTotals) -> ScoreBreakdown {
    ScoreBreakdown::new(totals.obtained_marks, totals.expected_marks)
}

pub fn assignment_average(totals: &MarksTotals) -> AssignmentAverage {
    AssignmentAverage::new(totals.obtained_marks, totals.graded_submissions)
}

async fn require_enrolled(storage: &Arc<dyn Storage>, student: &Student, course_id: i64) -> Result<()> {
    if !storage.is_course_in_batch(student.batch_id, course_id).await? {
        return Err(LmsError::authorization(
            "Student is not enrolled in this course.",
        ));
    }
    Ok(())
}

/// 学生所在批次至少有一门课程
pub async fn require_any_enrollment(storage: &Arc<dyn Storage>, student: &Student) -> Result<()> {
    if storage.list_courses_of_batch(student.batch_id).await?.is_empty() {
        return Err(LmsError::authorization(
            "Student is not enrolled in any course.",
        ));
    }
    Ok(())
}

pub async fn material_marks(
    storage: &Arc<dyn Storage>,
    student: &Student,
    course_id: i64,
    material_id: i64,
) -> Result<MaterialMarksResponse> {
    find_course(storage, course_id).await?;
    require_enrolled(storage, student, course_id).await?;
    find_material_in_course(storage, course_id, material_id).await?;

    let totals = storage
        .collect_marks_totals(
            student.id,
            MarksScope::Material {
                course_id,
                material_id,
            },
        )
        .await?;

    Ok(MaterialMarksResponse {
        student_id: student.id,
        course_id,
        material_id,
        mcq: mcq_breakdown(&totals),
        assignment: assignment_breakdown(&totals),
    })
}

pub async fn course_marks(
    storage: &Arc<dyn Storage>,
    student: &Student,
    course_id: i64,
) -> Result<CourseMarksResponse> {
    find_course(storage, course_id).await?;
    require_enrolled(storage, student, course_id).await?;

    let totals = storage
        .collect_marks_totals(student.id, MarksScope::Course { course_id })
        .await?;

    Ok(CourseMarksResponse {
        student_id: student.id,
        course_id,
        mcq: mcq_breakdown(&totals),
        assignment: assignment_breakdown(&totals),
        assignment_average: assignment_average(&totals),
    })
}

/// 全系统范围的汇总，分母为全部选择题与全部资料满分
pub async fn overall_marks(
    storage: &Arc<dyn Storage>,
    student: &Student,
) -> Result<OverallMarksResponse> {
    require_any_enrollment(storage, student).await?;

    let totals = storage
        .collect_marks_totals(student.id, MarksScope::Overall)
        .await?;

    Ok(OverallMarksResponse {
        student_id: student.id,
        mcq: mcq_breakdown(&totals),
        assignment: assignment_breakdown(&totals),
        assignment_average: assignment_average(&totals),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_totals_are_zero() {
        let totals = MarksTotals::default();
        assert_eq!(mcq_breakdown(&totals).percentage, 0.0);
        assert_eq!(assignment_breakdown(&totals).percentage, 0.0);
        assert_eq!(assignment_average(&totals).average_marks, 0.0);
    }

    #[test]
    fn test_breakdowns() {
        let totals = MarksTotals {
            total_mcqs: 8,
            correct_mcqs: 6,
            expected_marks: 150.0,
            obtained_marks: 120.0,
            graded_submissions: 2,
        };
        assert_eq!(mcq_breakdown(&totals).percentage, 75.0);
        assert_eq!(assignment_breakdown(&totals).percentage, 80.0);
        assert_eq!(assignment_average(&totals).average_marks, 60.0);
    }
}
