use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::RequireRole;
use crate::models::PaginationQuery;
use crate::models::certificates::requests::CreateCertificateRequest;
use crate::models::users::entities::UserRole;
use crate::services::CertificateService;

// 懒加载的全局 CertificateService 实例
static CERTIFICATE_SERVICE: Lazy<CertificateService> = Lazy::new(CertificateService::new_lazy);

pub async fn calculate_cgpa(req: HttpRequest, path: web::Path<i64>) -> ActixResult<HttpResponse> {
    CERTIFICATE_SERVICE
        .calculate_cgpa(&req, path.into_inner())
        .await
}

pub async fn create_certificate(
    req: HttpRequest,
    path: web::Path<i64>,
    body: web::Json<CreateCertificateRequest>,
) -> ActixResult<HttpResponse> {
    CERTIFICATE_SERVICE
        .issue_certificate(&req, path.into_inner(), body.into_inner())
        .await
}

pub async fn approve_certificate(
    req: HttpRequest,
    path: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    CERTIFICATE_SERVICE
        .approve_certificate(&req, path.into_inner())
        .await
}

pub async fn list_certificates(
    req: HttpRequest,
    query: web::Query<PaginationQuery>,
) -> ActixResult<HttpResponse> {
    CERTIFICATE_SERVICE
        .list_certificates(&req, query.into_inner())
        .await
}

pub async fn delete_certificate(
    req: HttpRequest,
    path: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    CERTIFICATE_SERVICE
        .delete_certificate(&req, path.into_inner())
        .await
}

pub async fn certificate_for_student(req: HttpRequest) -> ActixResult<HttpResponse> {
    CERTIFICATE_SERVICE.certificate_for_student(&req).await
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/calculate-cgpa/student/{id}")
            .wrap(RequireRole::new(&UserRole::Admin))
            .route(web::get().to(calculate_cgpa)),
    )
    .service(
        web::resource("/create-certificate/{id}")
            .wrap(RequireRole::new(&UserRole::Admin))
            .route(web::post().to(create_certificate)),
    )
    .service(
        web::resource("/approve-certificate/{id}")
            .wrap(RequireRole::new(&UserRole::Admin))
            .route(web::post().to(approve_certificate)),
    )
    .service(
        web::resource("/get-certificate")
            .wrap(RequireRole::new(&UserRole::Admin))
            .route(web::get().to(list_certificates)),
    )
    .service(
        web::resource("/certificates/{id}")
            .wrap(RequireRole::new(&UserRole::Admin))
            .route(web::delete().to(delete_certificate)),
    )
    .service(
        web::resource("/get-certificate-for-student")
            .wrap(RequireRole::new(&UserRole::Student))
            .route(web::get().to(certificate_for_student)),
    );
}
