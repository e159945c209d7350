pub mod assignments;
pub mod auth;
pub mod catalog;
pub mod certificates;
pub mod marks;
pub mod mcqs;
pub mod notifications;
pub mod profiles;
pub mod progress;

pub use assignments::AssignmentService;
pub use auth::AuthService;
pub use catalog::CatalogService;
pub use certificates::CertificateService;
pub use marks::MarksService;
pub use mcqs::McqService;
pub use notifications::NotificationService;
pub use profiles::ProfileService;
pub use progress::ProgressService;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use serde::Serialize;
use std::sync::Arc;
use ts_rs::TS;

use crate::errors::{LmsError, Result};
use crate::models::ApiResponse;
use crate::storage::Storage;

/// 从 app data 取出存储
pub(crate) fn storage_from_request(request: &HttpRequest) -> Result<Arc<dyn Storage>> {
    request
        .app_data::<web::Data<Arc<dyn Storage>>>()
        .map(|data| data.get_ref().clone())
        .ok_or_else(|| LmsError::unexpected("Storage not found in app data"))
}

/// 业务结果转为统一响应
pub(crate) fn respond<T: Serialize + TS>(
    result: Result<T>,
    message: &str,
) -> ActixResult<HttpResponse> {
    match result {
        Ok(data) => Ok(HttpResponse::Ok().json(ApiResponse::success(data, message))),
        Err(e) => Ok(e.into_response()),
    }
}

/// 无数据的成功响应
pub(crate) fn respond_empty(result: Result<()>, message: &str) -> ActixResult<HttpResponse> {
    match result {
        Ok(()) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty(message))),
        Err(e) => Ok(e.into_response()),
    }
}
