use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::RequireRole;
use crate::models::users::entities::UserRole;
use crate::services::MarksService;
use crate::services::marks::compute::StudentRef;

// 懒加载的全局 MarksService 实例
static MARKS_SERVICE: Lazy<MarksService> = Lazy::new(MarksService::new_lazy);

pub async fn own_material_marks(
    req: HttpRequest,
    path: web::Path<(i64, i64)>,
) -> ActixResult<HttpResponse> {
    let (course_id, material_id) = path.into_inner();
    MARKS_SERVICE
        .material_marks(&req, StudentRef::Own, course_id, material_id)
        .await
}

pub async fn own_course_marks(req: HttpRequest, path: web::Path<i64>) -> ActixResult<HttpResponse> {
    MARKS_SERVICE
        .course_marks(&req, StudentRef::Own, path.into_inner())
        .await
}

pub async fn own_overall_marks(req: HttpRequest) -> ActixResult<HttpResponse> {
    MARKS_SERVICE.overall_marks(&req, StudentRef::Own).await
}

pub async fn student_material_marks(
    req: HttpRequest,
    path: web::Path<(i64, i64, i64)>,
) -> ActixResult<HttpResponse> {
    let (student_id, course_id, material_id) = path.into_inner();
    MARKS_SERVICE
        .material_marks(&req, StudentRef::ById(student_id), course_id, material_id)
        .await
}

pub async fn student_course_marks(
    req: HttpRequest,
    path: web::Path<(i64, i64)>,
) -> ActixResult<HttpResponse> {
    let (student_id, course_id) = path.into_inner();
    MARKS_SERVICE
        .course_marks(&req, StudentRef::ById(student_id), course_id)
        .await
}

pub async fn student_overall_marks(
    req: HttpRequest,
    path: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    MARKS_SERVICE
        .overall_marks(&req, StudentRef::ById(path.into_inner()))
        .await
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/mcqs/course/{course_id}/materials/{material_id}/marks")
            .wrap(RequireRole::new(&UserRole::Student))
            .route(web::get().to(own_material_marks)),
    )
    .service(
        web::resource("/student/course/{course_id}/marks")
            .wrap(RequireRole::new(&UserRole::Student))
            .route(web::get().to(own_course_marks)),
    )
    .service(
        web::resource("/student/overall-marks")
            .wrap(RequireRole::new(&UserRole::Student))
            .route(web::get().to(own_overall_marks)),
    )
    .service(
        web::resource("/student/{id}/course/{course_id}/materials/{material_id}/marks")
            .wrap(RequireRole::new(&UserRole::Admin))
            .route(web::get().to(student_material_marks)),
    )
    .service(
        web::resource("/student/{id}/course/{course_id}/marks")
            .wrap(RequireRole::new(&UserRole::Admin))
            .route(web::get().to(student_course_marks)),
    )
    .service(
        web::resource("/student/{id}/marks")
            .wrap(RequireRole::new(&UserRole::Admin))
            .route(web::get().to(student_overall_marks)),
    );
}
