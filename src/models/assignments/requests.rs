use serde::Deserialize;
use ts_rs::TS;

use crate::errors::{LmsError, Result};

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct GradeAssignmentRequest {
    pub marks: f64,
}

/// 写入提交记录所需的字段，课程与批次取自资料本身
#[derive(Debug, Clone)]
pub struct NewSubmission {
    pub student_id: i64,
    pub material_id: i64,
    pub course_id: i64,
    pub batch_id: i64,
    pub file_path: String,
}

impl GradeAssignmentRequest {
    pub fn validate(&self) -> Result<()> {
        if !self.marks.is_finite() || !(0.0..=100.0).contains(&self.marks) {
            return Err(LmsError::validation(
                "The marks field must be between 0 and 100.",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marks_range() {
        assert!(GradeAssignmentRequest { marks: 0.0 }.validate().is_ok());
        assert!(GradeAssignmentRequest { marks: 100.0 }.validate().is_ok());
        assert!(GradeAssignmentRequest { marks: 72.5 }.validate().is_ok());
        assert!(GradeAssignmentRequest { marks: -0.5 }.validate().is_err());
        assert!(GradeAssignmentRequest { marks: 100.01 }.validate().is_err());
        assert!(GradeAssignmentRequest { marks: f64::NAN }.validate().is_err());
    }
}
