pub mod list;
pub mod manage;
pub mod submit;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::{respond, respond_empty, storage_from_request};
use crate::errors::Result;
use crate::middlewares::RequireJWT;
use crate::models::mcqs::requests::{CreateMcqsRequest, McqInput, SubmitAnswersRequest};
use crate::storage::Storage;

pub struct McqService {
    storage: Option<Arc<dyn Storage>>,
}

impl McqService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Result<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => storage_from_request(request),
        }
    }

    pub async fn list_mcqs(
        &self,
        request: &HttpRequest,
        course_id: i64,
        material_id: i64,
    ) -> ActixResult<HttpResponse> {
        let caller = RequireJWT::extract_user_claims(request);
        let result = match self.get_storage(request) {
            Ok(storage) => list::list_mcqs(&storage, caller.as_ref(), course_id, material_id).await,
            Err(e) => Err(e),
        };
        respond(result, "MCQs retrieved successfully")
    }

    pub async fn create_mcqs(
        &self,
        request: &HttpRequest,
        course_id: i64,
        material_id: i64,
        req: CreateMcqsRequest,
    ) -> ActixResult<HttpResponse> {
        let caller = RequireJWT::extract_user_claims(request);
        let result = match self.get_storage(request) {
            Ok(storage) => {
                manage::create_mcqs(&storage, caller.as_ref(), course_id, material_id, req).await
            }
            Err(e) => Err(e),
        };
        respond(result, "MCQs created successfully")
    }

    pub async fn update_mcq(
        &self,
        request: &HttpRequest,
        mcq_id: i64,
        req: McqInput,
    ) -> ActixResult<HttpResponse> {
        let caller = RequireJWT::extract_user_claims(request);
        let result = match self.get_storage(request) {
            Ok(storage) => manage::update_mcq(&storage, caller.as_ref(), mcq_id, req).await,
            Err(e) => Err(e),
        };
        respond(result, "MCQ updated successfully")
    }

    pub async fn delete_mcq(&self, request: &HttpRequest, mcq_id: i64) -> ActixResult<HttpResponse> {
        let caller = RequireJWT::extract_user_claims(request);
        let result = match self.get_storage(request) {
            Ok(storage) => manage::delete_mcq(&storage, caller.as_ref(), mcq_id).await,
            Err(e) => Err(e),
        };
        respond_empty(result, "MCQ deleted successfully")
    }

    pub async fn submit_answers(
        &self,
        request: &HttpRequest,
        course_id: i64,
        material_id: i64,
        req: SubmitAnswersRequest,
    ) -> ActixResult<HttpResponse> {
        let caller = RequireJWT::extract_user_claims(request);
        let result = match self.get_storage(request) {
            Ok(storage) => {
                submit::submit_answers(&storage, caller.as_ref(), course_id, material_id, req)
                    .await
            }
            Err(e) => Err(e),
        };
        respond(result, "MCQ answers submitted successfully")
    }
}

#[cfg(test)]
mod tests;
