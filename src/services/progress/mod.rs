pub mod completion;
pub mod lock_state;
pub mod materials;
pub mod record;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::{respond, storage_from_request};
use crate::errors::Result;
use crate::middlewares::RequireJWT;
use crate::models::progress::requests::RecordProgressRequest;
use crate::storage::Storage;

pub struct ProgressService {
    storage: Option<Arc<dyn Storage>>,
}

impl ProgressService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Result<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => storage_from_request(request),
        }
    }

    /// 记录视频进度
    pub async fn record_progress(
        &self,
        request: &HttpRequest,
        req: RecordProgressRequest,
    ) -> ActixResult<HttpResponse> {
        let caller = RequireJWT::extract_user_claims(request);
        let result = match self.get_storage(request) {
            Ok(storage) => record::record_progress(&storage, caller.as_ref(), req).await,
            Err(e) => Err(e),
        };
        respond(result, "Progress updated successfully.")
    }

    /// 课程资料及其锁定状态
    pub async fn list_course_materials(
        &self,
        request: &HttpRequest,
        course_id: i64,
    ) -> ActixResult<HttpResponse> {
        let caller = RequireJWT::extract_user_claims(request);
        let result = match self.get_storage(request) {
            Ok(storage) => {
                materials::list_materials_with_lock_state(&storage, caller.as_ref(), course_id)
                    .await
            }
            Err(e) => Err(e),
        };
        respond(result, "Videos retrieved successfully.")
    }

    /// 单个资料及其锁定状态
    pub async fn get_course_material(
        &self,
        request: &HttpRequest,
        course_id: i64,
        material_id: i64,
    ) -> ActixResult<HttpResponse> {
        let caller = RequireJWT::extract_user_claims(request);
        let result = match self.get_storage(request) {
            Ok(storage) => {
                materials::get_material_with_lock_state(
                    &storage,
                    caller.as_ref(),
                    course_id,
                    material_id,
                )
                .await
            }
            Err(e) => Err(e),
        };
        respond(result, "Video retrieved successfully.")
    }

    /// 当前学生的完成度
    pub async fn own_completion(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        let caller = RequireJWT::extract_user_claims(request);
        let result = match self.get_storage(request) {
            Ok(storage) => completion::own_completion(&storage, caller.as_ref()).await,
            Err(e) => Err(e),
        };
        respond(result, "Video progress retrieved successfully.")
    }

    /// 指定学生的完成度（管理员）
    pub async fn student_completion(
        &self,
        request: &HttpRequest,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        let caller = RequireJWT::extract_user_claims(request);
        let result = match self.get_storage(request) {
            Ok(storage) => {
                completion::student_completion(&storage, caller.as_ref(), student_id).await
            }
            Err(e) => Err(e),
        };
        respond(result, "Video progress retrieved successfully.")
    }
}

#[cfg(test)]
mod tests;
