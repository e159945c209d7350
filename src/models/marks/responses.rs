use serde::Serialize;
use ts_rs::TS;

use crate::utils::score::{percentage, round2};

/// 得分 / 应得分 / 百分比
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/marks.ts")]
pub struct ScoreBreakdown {
    pub obtained: f64,
    pub expected: f64,
    pub percentage: f64,
}

impl ScoreBreakdown {
    pub fn new(obtained: f64, expected: f64) -> Self {
        Self {
            obtained,
            expected,
            percentage: percentage(obtained, expected),
        }
    }
}

/// 已评分作业的平均分
#[derive(Debug, Clone, Copy, PartialEq, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/marks.ts")]
pub struct AssignmentAverage {
    pub graded_submissions: i64,
    pub average_marks: f64,
}

impl AssignmentAverage {
    pub fn new(total_marks: f64, graded_submissions: i64) -> Self {
        let average_marks = if graded_submissions == 0 {
            0.0
        } else {
            round2(total_marks / graded_submissions as f64)
        };
        Self {
            graded_submissions,
            average_marks,
        }
    }
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/marks.ts")]
pub struct MaterialMarksResponse {
    pub student_id: i64,
    pub course_id: i64,
    pub material_id: i64,
    pub mcq: ScoreBreakdown,
    pub assignment: ScoreBreakdown,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/marks.ts")]
pub struct CourseMarksResponse {
    pub student_id: i64,
    pub course_id: i64,
    pub mcq: ScoreBreakdown,
    pub assignment: ScoreBreakdown,
    pub assignment_average: AssignmentAverage,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/marks.ts")]
pub struct OverallMarksResponse {
    pub student_id: i64,
    pub mcq: ScoreBreakdown,
    pub assignment: ScoreBreakdown,
    pub assignment_average: AssignmentAverage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakdown_zero_expected() {
        let b = ScoreBreakdown::new(0.0, 0.0);
        assert_eq!(b.percentage, 0.0);
        assert!(!b.percentage.is_nan());
    }

    #[test]
    fn test_average_guard() {
        assert_eq!(AssignmentAverage::new(0.0, 0).average_marks, 0.0);
        assert_eq!(AssignmentAverage::new(170.0, 3).average_marks, 56.67);
    }
}
