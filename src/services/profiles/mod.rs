pub mod create;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::{respond, storage_from_request};
use crate::errors::Result;
use crate::middlewares::RequireJWT;
use crate::models::profiles::requests::{CreateProfessorRequest, CreateStudentRequest};
use crate::storage::Storage;

pub struct ProfileService {
    storage: Option<Arc<dyn Storage>>,
}

impl ProfileService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Result<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => storage_from_request(request),
        }
    }

    pub async fn create_student(
        &self,
        request: &HttpRequest,
        req: CreateStudentRequest,
    ) -> ActixResult<HttpResponse> {
        let caller = RequireJWT::extract_user_claims(request);
        let result = match self.get_storage(request) {
            Ok(storage) => create::create_student(&storage, caller.as_ref(), req).await,
            Err(e) => Err(e),
        };
        respond(result, "Student created successfully")
    }

    pub async fn create_professor(
        &self,
        request: &HttpRequest,
        req: CreateProfessorRequest,
    ) -> ActixResult<HttpResponse> {
        let caller = RequireJWT::extract_user_claims(request);
        let result = match self.get_storage(request) {
            Ok(storage) => create::create_professor(&storage, caller.as_ref(), req).await,
            Err(e) => Err(e),
        };
        respond(result, "Professor created successfully")
    }
}
