use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::RequireRole;
use crate::models::profiles::requests::{CreateProfessorRequest, CreateStudentRequest};
use crate::models::users::entities::UserRole;
use crate::services::ProfileService;

// 懒加载的全局 ProfileService 实例
static PROFILE_SERVICE: Lazy<ProfileService> = Lazy::new(ProfileService::new_lazy);

pub async fn create_student(
    req: HttpRequest,
    body: web::Json<CreateStudentRequest>,
) -> ActixResult<HttpResponse> {
    PROFILE_SERVICE.create_student(&req, body.into_inner()).await
}

pub async fn create_professor(
    req: HttpRequest,
    body: web::Json<CreateProfessorRequest>,
) -> ActixResult<HttpResponse> {
    PROFILE_SERVICE
        .create_professor(&req, body.into_inner())
        .await
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/students")
            .wrap(RequireRole::new(&UserRole::Admin))
            .route(web::post().to(create_student)),
    )
    .service(
        web::resource("/professors")
            .wrap(RequireRole::new(&UserRole::Admin))
            .route(web::post().to(create_professor)),
    );
}
