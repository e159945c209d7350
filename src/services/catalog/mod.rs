pub mod batches;
pub mod courses;
pub mod lookup;
pub mod materials;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::{respond, respond_empty, storage_from_request};
use crate::errors::Result;
use crate::middlewares::RequireJWT;
use crate::models::catalog::requests::{
    AssignBatchCourseRequest, CreateBatchRequest, CreateCourseRequest, CreateMaterialRequest,
};
use crate::storage::Storage;

pub struct CatalogService {
    storage: Option<Arc<dyn Storage>>,
}

impl CatalogService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Result<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => storage_from_request(request),
        }
    }

    pub async fn create_batch(
        &self,
        request: &HttpRequest,
        req: CreateBatchRequest,
    ) -> ActixResult<HttpResponse> {
        let caller = RequireJWT::extract_user_claims(request);
        let result = match self.get_storage(request) {
            Ok(storage) => batches::create_batch(&storage, caller.as_ref(), req).await,
            Err(e) => Err(e),
        };
        respond(result, "Batch created successfully")
    }

    pub async fn list_batches(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        let caller = RequireJWT::extract_user_claims(request);
        let result = match self.get_storage(request) {
            Ok(storage) => batches::list_batches(&storage, caller.as_ref()).await,
            Err(e) => Err(e),
        };
        respond(result, "Batches retrieved successfully")
    }

    pub async fn assign_course(
        &self,
        request: &HttpRequest,
        batch_id: i64,
        req: AssignBatchCourseRequest,
    ) -> ActixResult<HttpResponse> {
        let caller = RequireJWT::extract_user_claims(request);
        let result = match self.get_storage(request) {
            Ok(storage) => batches::assign_course(&storage, caller.as_ref(), batch_id, req).await,
            Err(e) => Err(e),
        };
        respond(result, "Course assigned to batch successfully")
    }

    pub async fn list_batch_courses(
        &self,
        request: &HttpRequest,
        batch_id: i64,
    ) -> ActixResult<HttpResponse> {
        let caller = RequireJWT::extract_user_claims(request);
        let result = match self.get_storage(request) {
            Ok(storage) => batches::list_batch_courses(&storage, caller.as_ref(), batch_id).await,
            Err(e) => Err(e),
        };
        respond(result, "Batch courses retrieved successfully")
    }

    pub async fn create_course(
        &self,
        request: &HttpRequest,
        req: CreateCourseRequest,
    ) -> ActixResult<HttpResponse> {
        let caller = RequireJWT::extract_user_claims(request);
        let result = match self.get_storage(request) {
            Ok(storage) => courses::create_course(&storage, caller.as_ref(), req).await,
            Err(e) => Err(e),
        };
        respond(result, "Course created successfully")
    }

    pub async fn list_courses(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        let caller = RequireJWT::extract_user_claims(request);
        let result = match self.get_storage(request) {
            Ok(storage) => courses::list_courses(&storage, caller.as_ref()).await,
            Err(e) => Err(e),
        };
        respond(result, "Courses retrieved successfully")
    }

    pub async fn create_material(
        &self,
        request: &HttpRequest,
        req: CreateMaterialRequest,
    ) -> ActixResult<HttpResponse> {
        let caller = RequireJWT::extract_user_claims(request);
        let result = match self.get_storage(request) {
            Ok(storage) => materials::create_material(&storage, caller.as_ref(), req).await,
            Err(e) => Err(e),
        };
        respond(result, "Material created successfully")
    }

    pub async fn list_materials(
        &self,
        request: &HttpRequest,
        course_id: i64,
    ) -> ActixResult<HttpResponse> {
        let caller = RequireJWT::extract_user_claims(request);
        let result = match self.get_storage(request) {
            Ok(storage) => materials::list_materials(&storage, caller.as_ref(), course_id).await,
            Err(e) => Err(e),
        };
        respond(result, "Materials retrieved successfully")
    }

    pub async fn delete_material(
        &self,
        request: &HttpRequest,
        material_id: i64,
    ) -> ActixResult<HttpResponse> {
        let caller = RequireJWT::extract_user_claims(request);
        let result = match self.get_storage(request) {
            Ok(storage) => materials::delete_material(&storage, caller.as_ref(), material_id).await,
            Err(e) => Err(e),
        };
        respond_empty(result, "Material deleted successfully")
    }
}
