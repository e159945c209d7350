use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::RequireRole;
use crate::models::progress::requests::RecordProgressRequest;
use crate::models::users::entities::UserRole;
use crate::services::ProgressService;

// 懒加载的全局 ProgressService 实例
static PROGRESS_SERVICE: Lazy<ProgressService> = Lazy::new(ProgressService::new_lazy);

pub async fn record_progress(
    req: HttpRequest,
    body: web::Json<RecordProgressRequest>,
) -> ActixResult<HttpResponse> {
    PROGRESS_SERVICE.record_progress(&req, body.into_inner()).await
}

pub async fn own_completion(req: HttpRequest) -> ActixResult<HttpResponse> {
    PROGRESS_SERVICE.own_completion(&req).await
}

pub async fn student_completion(
    req: HttpRequest,
    path: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    PROGRESS_SERVICE
        .student_completion(&req, path.into_inner())
        .await
}

pub async fn list_course_videos(
    req: HttpRequest,
    path: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    PROGRESS_SERVICE
        .list_course_materials(&req, path.into_inner())
        .await
}

pub async fn get_course_video(
    req: HttpRequest,
    path: web::Path<(i64, i64)>,
) -> ActixResult<HttpResponse> {
    let (course_id, material_id) = path.into_inner();
    PROGRESS_SERVICE
        .get_course_material(&req, course_id, material_id)
        .await
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/videos/progress")
            .wrap(RequireRole::new(&UserRole::Student))
            .route(web::post().to(record_progress)),
    )
    .service(
        web::resource("/videos/progress/all")
            .wrap(RequireRole::new(&UserRole::Student))
            .route(web::get().to(own_completion)),
    )
    .service(
        web::resource("/student/{id}/videos/progress/all")
            .wrap(RequireRole::new(&UserRole::Admin))
            .route(web::get().to(student_completion)),
    )
    .service(
        web::resource("/course/{course_id}/videos")
            .wrap(RequireRole::new(&UserRole::Student))
            .route(web::get().to(list_course_videos)),
    )
    .service(
        web::resource("/course/{course_id}/material/{material_id}/video")
            .wrap(RequireRole::new(&UserRole::Student))
            .route(web::get().to(get_course_video)),
    );
}
