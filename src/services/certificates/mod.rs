pub mod cgpa;
pub mod grade_point;
pub mod lifecycle;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::{respond, respond_empty, storage_from_request};
use crate::errors::Result;
use crate::middlewares::RequireJWT;
use crate::models::PaginationQuery;
use crate::models::certificates::requests::CreateCertificateRequest;
use crate::storage::Storage;

pub struct CertificateService {
    storage: Option<Arc<dyn Storage>>,
}

impl CertificateService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Result<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => storage_from_request(request),
        }
    }

    pub async fn calculate_cgpa(
        &self,
        request: &HttpRequest,
        student_id: i64,
    ) -> ActixResult<HttpResponse> {
        let caller = RequireJWT::extract_user_claims(request);
        let result = match self.get_storage(request) {
            Ok(storage) => lifecycle::calculate_cgpa(&storage, caller.as_ref(), student_id).await,
            Err(e) => Err(e),
        };
        respond(result, "CGPA calculated successfully.")
    }

    pub async fn issue_certificate(
        &self,
        request: &HttpRequest,
        student_id: i64,
        req: CreateCertificateRequest,
    ) -> ActixResult<HttpResponse> {
        let caller = RequireJWT::extract_user_claims(request);
        let result = match self.get_storage(request) {
            Ok(storage) => {
                lifecycle::issue_certificate(&storage, caller.as_ref(), student_id, req).await
            }
            Err(e) => Err(e),
        };
        respond(result, "Certificate created successfully.")
    }

    pub async fn approve_certificate(
        &self,
        request: &HttpRequest,
        certificate_id: i64,
    ) -> ActixResult<HttpResponse> {
        let caller = RequireJWT::extract_user_claims(request);
        let result = match self.get_storage(request) {
            Ok(storage) => {
                lifecycle::approve_certificate(&storage, caller.as_ref(), certificate_id).await
            }
            Err(e) => Err(e),
        };
        respond(result, "Certificate approved successfully.")
    }

    pub async fn list_certificates(
        &self,
        request: &HttpRequest,
        query: PaginationQuery,
    ) -> ActixResult<HttpResponse> {
        let caller = RequireJWT::extract_user_claims(request);
        let result = match self.get_storage(request) {
            Ok(storage) => lifecycle::list_certificates(&storage, caller.as_ref(), query).await,
            Err(e) => Err(e),
        };
        respond(result, "Certificates retrieved successfully")
    }

    pub async fn delete_certificate(
        &self,
        request: &HttpRequest,
        certificate_id: i64,
    ) -> ActixResult<HttpResponse> {
        let caller = RequireJWT::extract_user_claims(request);
        let result = match self.get_storage(request) {
            Ok(storage) => {
                lifecycle::delete_certificate(&storage, caller.as_ref(), certificate_id).await
            }
            Err(e) => Err(e),
        };
        respond_empty(result, "Certificate deleted successfully")
    }

    pub async fn certificate_for_student(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        let caller = RequireJWT::extract_user_claims(request);
        let result = match self.get_storage(request) {
            Ok(storage) => lifecycle::certificate_for_student(&storage, caller.as_ref()).await,
            Err(e) => Err(e),
        };
        respond(result, "Certificate retrieved successfully")
    }
}

#[cfg(test)]
mod tests;
