use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::RequireRole;
use crate::models::mcqs::requests::{CreateMcqsRequest, McqInput, SubmitAnswersRequest};
use crate::models::users::entities::UserRole;
use crate::services::McqService;

// 懒加载的全局 McqService 实例
static MCQ_SERVICE: Lazy<McqService> = Lazy::new(McqService::new_lazy);

pub async fn list_mcqs(
    req: HttpRequest,
    path: web::Path<(i64, i64)>,
) -> ActixResult<HttpResponse> {
    let (course_id, material_id) = path.into_inner();
    MCQ_SERVICE.list_mcqs(&req, course_id, material_id).await
}

pub async fn create_mcqs(
    req: HttpRequest,
    path: web::Path<(i64, i64)>,
    body: web::Json<CreateMcqsRequest>,
) -> ActixResult<HttpResponse> {
    let (course_id, material_id) = path.into_inner();
    MCQ_SERVICE
        .create_mcqs(&req, course_id, material_id, body.into_inner())
        .await
}

pub async fn update_mcq(
    req: HttpRequest,
    path: web::Path<i64>,
    body: web::Json<McqInput>,
) -> ActixResult<HttpResponse> {
    MCQ_SERVICE
        .update_mcq(&req, path.into_inner(), body.into_inner())
        .await
}

pub async fn delete_mcq(req: HttpRequest, path: web::Path<i64>) -> ActixResult<HttpResponse> {
    MCQ_SERVICE.delete_mcq(&req, path.into_inner()).await
}

pub async fn submit_answers(
    req: HttpRequest,
    path: web::Path<(i64, i64)>,
    body: web::Json<SubmitAnswersRequest>,
) -> ActixResult<HttpResponse> {
    let (course_id, material_id) = path.into_inner();
    MCQ_SERVICE
        .submit_answers(&req, course_id, material_id, body.into_inner())
        .await
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/mcqs/course/{course_id}/materials/{material_id}/mcq/submit")
            .wrap(RequireRole::new(&UserRole::Student))
            .route(web::post().to(submit_answers)),
    )
    .service(
        // 列表对所有角色开放，创建在业务层限制为教师或管理员
        web::resource("/mcqs/course/{course_id}/materials/{material_id}")
            .wrap(RequireRole::new_any(UserRole::all_roles()))
            .route(web::get().to(list_mcqs))
            .route(web::post().to(create_mcqs)),
    )
    .service(
        web::resource("/mcqs/{id}")
            .wrap(RequireRole::new_any(UserRole::professor_roles()))
            .route(web::put().to(update_mcq))
            .route(web::delete().to(delete_mcq)),
    );
}
