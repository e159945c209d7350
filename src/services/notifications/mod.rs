pub mod dispatch;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::{respond, storage_from_request};
use crate::errors::Result;
use crate::middlewares::RequireJWT;
use crate::models::PaginationQuery;
use crate::storage::Storage;

pub use dispatch::notify;

pub struct NotificationService {
    storage: Option<Arc<dyn Storage>>,
}

impl NotificationService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Result<Arc<dyn Storage>> {
        match &self.storage {
            Some(storage) => Ok(storage.clone()),
            None => storage_from_request(request),
        }
    }

    pub async fn list_notifications(
        &self,
        request: &HttpRequest,
        query: PaginationQuery,
    ) -> ActixResult<HttpResponse> {
        let caller = RequireJWT::extract_user_claims(request);
        let result = match self.get_storage(request) {
            Ok(storage) => list::list_own_notifications(&storage, caller.as_ref(), query).await,
            Err(e) => Err(e),
        };
        respond(result, "Notifications retrieved successfully")
    }

    pub async fn unread_count(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        let caller = RequireJWT::extract_user_claims(request);
        let result = match self.get_storage(request) {
            Ok(storage) => list::own_unread_count(&storage, caller.as_ref()).await,
            Err(e) => Err(e),
        };
        respond(result, "Unread count retrieved successfully")
    }
}
