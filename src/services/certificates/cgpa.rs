use std::sync::Arc;

use super::grade_point::percentage_to_grade_point;
use crate::errors::Result;
use crate::models::certificates::responses::CgpaResponse;
use crate::models::marks::entities::{MarksScope, MarksTotals};
use crate::models::profiles::entities::Student;
use crate::services::marks::compute::{
    assignment_breakdown, mcq_breakdown, require_any_enrollment,
};
use crate::storage::Storage;
use crate::utils::score::{raw_percentage, round2};

/// 两项绩点的平均值，保留两位小数
pub fn cgpa_from_percentages(mcq_percentage: f64, assignment_percentage: f64) -> f64 {
    round2(
        (percentage_to_grade_point(mcq_percentage)
            + percentage_to_grade_point(assignment_percentage))
            / 2.0,
    )
}

/// 绩点按未取整的百分比换算，取整后的值只用于展示
pub fn cgpa_from_totals(student_id: i64, totals: &MarksTotals, total_credits: i64) -> CgpaResponse {
    let mcq = mcq_breakdown(totals);
    let assignment = assignment_breakdown(totals);
    let mcq_raw = raw_percentage(totals.correct_mcqs as f64, totals.total_mcqs as f64);
    let assignment_raw = raw_percentage(totals.obtained_marks, totals.expected_marks);

    CgpaResponse {
        student_id,
        total_mcqs: totals.total_mcqs,
        correct_mcqs: totals.correct_mcqs,
        total_assignment_marks: totals.expected_marks,
        obtained_assignment_marks: totals.obtained_marks,
        mcq_percentage: mcq.percentage,
        assignment_percentage: assignment.percentage,
        mcq_grade_point: percentage_to_grade_point(mcq_raw),
        assignment_grade_point: percentage_to_grade_point(assignment_raw),
        total_credits,
        cgpa: cgpa_from_percentages(mcq_raw, assignment_raw),
    }
}

/// 基于全局成绩汇总计算 CGPA
pub async fn compute_cgpa(storage: &Arc<dyn Storage>, student: &Student) -> Result<CgpaResponse> {
    require_any_enrollment(storage, student).await?;

    let courses = storage.list_courses_of_batch(student.batch_id).await?;
    let total_credits = courses.iter().map(|c| c.credit as i64).sum();

    let totals = storage
        .collect_marks_totals(student.id, MarksScope::Overall)
        .await?;

    Ok(cgpa_from_totals(student.id, &totals, total_credits))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mixed_grade_points() {
        assert_eq!(cgpa_from_percentages(82.0, 91.0), 3.35);
    }

    #[test]
    fn test_failing_both() {
        assert_eq!(cgpa_from_percentages(10.0, 59.99), 0.0);
    }

    #[test]
    fn test_from_totals() {
        let totals = MarksTotals {
            total_mcqs: 50,
            correct_mcqs: 41,
            expected_marks: 200.0,
            obtained_marks: 182.0,
            graded_submissions: 2,
        };
        let cgpa = cgpa_from_totals(7, &totals, 12);
        assert_eq!(cgpa.mcq_percentage, 82.0);
        assert_eq!(cgpa.assignment_percentage, 91.0);
        assert_eq!(cgpa.mcq_grade_point, 3.0);
        assert_eq!(cgpa.assignment_grade_point, 3.7);
        assert_eq!(cgpa.cgpa, 3.35);
        assert_eq!(cgpa.total_credits, 12);
    }

    #[test]
    fn test_band_edge_uses_unrounded_ratio() {
        let totals = MarksTotals {
            total_mcqs: 40_000,
            correct_mcqs: 23_999,
            expected_marks: 100.0,
            obtained_marks: 69.996,
            graded_submissions: 1,
        };
        let cgpa = cgpa_from_totals(3, &totals, 6);
        assert_eq!(cgpa.mcq_percentage, 60.0);
        assert_eq!(cgpa.mcq_grade_point, 0.0);
        assert_eq!(cgpa.assignment_percentage, 70.0);
        assert_eq!(cgpa.assignment_grade_point, 2.0);
        assert_eq!(cgpa.cgpa, 1.0);
    }

    #[test]
    fn test_nothing_to_score() {
        let cgpa = cgpa_from_totals(1, &MarksTotals::default(), 0);
        assert_eq!(cgpa.mcq_percentage, 0.0);
        assert_eq!(cgpa.cgpa, 0.0);
    }
}
