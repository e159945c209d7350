pub mod grade;
pub mod list;
pub mod submit;
pub mod upload;

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::{respond, storage_from_request};
use crate::config::AppConfig;
use crate::errors::Result;
use crate::middlewares::RequireJWT;
use crate::models::assignments::{
    entities::AssignmentSubmission, requests::GradeAssignmentRequest,
};
use crate::storage::Storage;

pub struct AssignmentService {
    storage: Option<Arc<dyn Storage>>,
}

/// 提交作业所在的路径参数
#[derive(Debug, Clone, Copy)]
pub struct SubmissionTarget {
    pub course_id: i64,
    pub material_id: i64,
}

impl AssignmentService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Result<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => storage_from_request(request),
        }
    }

    /// 上传作业，先校验身份与选课，再落盘
    pub async fn submit_assignment(
        &self,
        request: &HttpRequest,
        target: SubmissionTarget,
        payload: Multipart,
    ) -> ActixResult<HttpResponse> {
        let caller = RequireJWT::extract_user_claims(request);
        let result: Result<AssignmentSubmission> = async {
            let storage = self.get_storage(request)?;
            let (student, material) = submit::authorize_submission(
                &storage,
                caller.as_ref(),
                target.course_id,
                target.material_id,
            )
            .await?;

            let file_path = upload::save_assignment_file(payload, &AppConfig::get().upload).await?;
            submit::record_submission(&storage, &student, &material, file_path).await
        }
        .await;

        respond(result, "Assignment submitted successfully")
    }

    pub async fn list_submissions(
        &self,
        request: &HttpRequest,
        course_id: i64,
        material_id: i64,
    ) -> ActixResult<HttpResponse> {
        let caller = RequireJWT::extract_user_claims(request);
        let result = match self.get_storage(request) {
            Ok(storage) => {
                list::list_submissions(&storage, caller.as_ref(), course_id, material_id).await
            }
            Err(e) => Err(e),
        };
        respond(result, "Assignments fetched successfully")
    }

    pub async fn grade_submission(
        &self,
        request: &HttpRequest,
        target: grade::GradeTarget,
        req: GradeAssignmentRequest,
    ) -> ActixResult<HttpResponse> {
        let caller = RequireJWT::extract_user_claims(request);
        let result = match self.get_storage(request) {
            Ok(storage) => grade::grade_assignment(&storage, caller.as_ref(), target, req).await,
            Err(e) => Err(e),
        };
        respond(result, "Marks assigned successfully")
    }
}

#[cfg(test)]
mod tests;
