use serde::Deserialize;
use ts_rs::TS;

use super::entities::CourseStatus;
use crate::errors::{LmsError, Result};

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/catalog.ts")]
pub struct CreateBatchRequest {
    pub title: String,
    pub subtitle: Option<String>,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/catalog.ts")]
pub struct CreateCourseRequest {
    pub name: String,
    pub description: Option<String>,
    pub credit: i32,
    #[serde(default = "default_course_status")]
    pub status: CourseStatus,
}

fn default_course_status() -> CourseStatus {
    CourseStatus::Draft
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/catalog.ts")]
pub struct AssignBatchCourseRequest {
    pub course_id: i64,
    pub professor_id: i64,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/catalog.ts")]
pub struct CreateMaterialRequest {
    pub batch_id: i64,
    pub course_id: i64,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub video_path: Option<String>,
    pub assignment_path: Option<String>,
    pub marks: Option<f64>,
}

impl CreateBatchRequest {
    pub fn validate(&self) -> Result<()> {
        validate_title("Batch title", &self.title)
    }
}

impl CreateCourseRequest {
    pub fn validate(&self) -> Result<()> {
        validate_title("Course name", &self.name)?;
        if self.credit < 0 {
            return Err(LmsError::validation("Course credit must not be negative"));
        }
        Ok(())
    }
}

impl CreateMaterialRequest {
    pub fn validate(&self) -> Result<()> {
        validate_title("Material title", &self.title)?;
        if let Some(marks) = self.marks
            && !(marks.is_finite() && marks > 0.0)
        {
            return Err(LmsError::validation(
                "Material marks must be a positive number",
            ));
        }
        Ok(())
    }
}

fn validate_title(field: &str, value: &str) -> Result<()> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(LmsError::validation(format!("{field} is required")));
    }
    if trimmed.chars().count() > 255 {
        return Err(LmsError::validation(format!(
            "{field} must not exceed 255 characters"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_requires_name_and_non_negative_credit() {
        let mut req = CreateCourseRequest {
            name: "  ".into(),
            description: None,
            credit: 3,
            status: CourseStatus::Published,
        };
        assert!(req.validate().is_err());

        req.name = "Data Structures".into();
        assert!(req.validate().is_ok());

        req.credit = -1;
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_material_marks_must_be_positive() {
        let mut req = CreateMaterialRequest {
            batch_id: 1,
            course_id: 1,
            title: "Week 1".into(),
            subtitle: None,
            description: None,
            video_path: None,
            assignment_path: None,
            marks: Some(0.0),
        };
        assert!(req.validate().is_err());

        req.marks = Some(20.0);
        assert!(req.validate().is_ok());

        req.marks = None;
        assert!(req.validate().is_ok());
    }
}
