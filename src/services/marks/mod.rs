pub mod compute;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::{respond, storage_from_request};
use crate::errors::Result;
use crate::middlewares::RequireJWT;
use crate::storage::Storage;
use compute::StudentRef;

pub struct MarksService {
    storage: Option<Arc<dyn Storage>>,
}

impl MarksService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Result<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => storage_from_request(request),
        }
    }

    pub async fn material_marks(
        &self,
        request: &HttpRequest,
        who: StudentRef,
        course_id: i64,
        material_id: i64,
    ) -> ActixResult<HttpResponse> {
        let caller = RequireJWT::extract_user_claims(request);
        let result = async {
            let storage = self.get_storage(request)?;
            let student = compute::resolve_student(&storage, caller.as_ref(), who).await?;
            compute::material_marks(&storage, &student, course_id, material_id).await
        }
        .await;
        respond(result, "Material marks calculated successfully.")
    }

    pub async fn course_marks(
        &self,
        request: &HttpRequest,
        who: StudentRef,
        course_id: i64,
    ) -> ActixResult<HttpResponse> {
        let caller = RequireJWT::extract_user_claims(request);
        let result = async {
            let storage = self.get_storage(request)?;
            let student = compute::resolve_student(&storage, caller.as_ref(), who).await?;
            compute::course_marks(&storage, &student, course_id).await
        }
        .await;
        respond(result, "Course marks calculated successfully.")
    }

    pub async fn overall_marks(
        &self,
        request: &HttpRequest,
        who: StudentRef,
    ) -> ActixResult<HttpResponse> {
        let caller = RequireJWT::extract_user_claims(request);
        let result = async {
            let storage = self.get_storage(request)?;
            let student = compute::resolve_student(&storage, caller.as_ref(), who).await?;
            compute::overall_marks(&storage, &student).await
        }
        .await;
        respond(result, "Overall marks calculated successfully.")
    }
}

#[cfg(test)]
mod tests;
