use serde::Serialize;
use ts_rs::TS;

use super::entities::{Professor, Student};
use crate::models::users::entities::User;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/profile.ts")]
pub struct StudentAccountResponse {
    pub user: User,
    pub student: Student,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/profile.ts")]
pub struct ProfessorAccountResponse {
    pub user: User,
    pub professor: Professor,
}
