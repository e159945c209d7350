use serde::Deserialize;
use ts_rs::TS;

use crate::errors::{LmsError, Result};
use crate::utils::validate::{validate_email, validate_password_simple, validate_username};

/// 账号部分，学生和教师共用
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/profile.ts")]
pub struct AccountFields {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/profile.ts")]
pub struct CreateStudentRequest {
    #[serde(flatten)]
    #[ts(flatten)]
    pub account: AccountFields,
    pub batch_id: i64,
    pub student_code: String,
    pub first_name: String,
    pub last_name: String,
    pub program: String,
}

#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/profile.ts")]
pub struct CreateProfessorRequest {
    #[serde(flatten)]
    #[ts(flatten)]
    pub account: AccountFields,
    pub first_name: String,
    pub last_name: String,
    pub designation: Option<String>,
}

impl AccountFields {
    pub fn validate(&self) -> Result<()> {
        validate_username(&self.username).map_err(LmsError::validation)?;
        validate_email(&self.email).map_err(LmsError::validation)?;
        validate_password_simple(&self.password).map_err(LmsError::validation)?;
        Ok(())
    }
}

impl CreateStudentRequest {
    pub fn validate(&self) -> Result<()> {
        self.account.validate()?;
        for (field, value) in [
            ("student_code", &self.student_code),
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("program", &self.program),
        ] {
            if value.trim().is_empty() {
                return Err(LmsError::validation(format!("{field} is required")));
            }
        }
        Ok(())
    }
}

impl CreateProfessorRequest {
    pub fn validate(&self) -> Result<()> {
        self.account.validate()?;
        if self.first_name.trim().is_empty() || self.last_name.trim().is_empty() {
            return Err(LmsError::validation("Professor name is required"));
        }
        Ok(())
    }
}
