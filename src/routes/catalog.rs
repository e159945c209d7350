use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::RequireRole;
use crate::models::catalog::requests::{
    AssignBatchCourseRequest, CreateBatchRequest, CreateCourseRequest, CreateMaterialRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::CatalogService;

// 懒加载的全局 CatalogService 实例
static CATALOG_SERVICE: Lazy<CatalogService> = Lazy::new(CatalogService::new_lazy);

pub async fn create_batch(
    req: HttpRequest,
    body: web::Json<CreateBatchRequest>,
) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE.create_batch(&req, body.into_inner()).await
}

pub async fn list_batches(req: HttpRequest) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE.list_batches(&req).await
}

pub async fn assign_course(
    req: HttpRequest,
    path: web::Path<i64>,
    body: web::Json<AssignBatchCourseRequest>,
) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE
        .assign_course(&req, path.into_inner(), body.into_inner())
        .await
}

pub async fn list_batch_courses(
    req: HttpRequest,
    path: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE
        .list_batch_courses(&req, path.into_inner())
        .await
}

pub async fn create_course(
    req: HttpRequest,
    body: web::Json<CreateCourseRequest>,
) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE.create_course(&req, body.into_inner()).await
}

pub async fn list_courses(req: HttpRequest) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE.list_courses(&req).await
}

pub async fn create_material(
    req: HttpRequest,
    body: web::Json<CreateMaterialRequest>,
) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE
        .create_material(&req, body.into_inner())
        .await
}

pub async fn list_materials(req: HttpRequest, path: web::Path<i64>) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE
        .list_materials(&req, path.into_inner())
        .await
}

pub async fn delete_material(req: HttpRequest, path: web::Path<i64>) -> ActixResult<HttpResponse> {
    CATALOG_SERVICE
        .delete_material(&req, path.into_inner())
        .await
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/batches")
            .wrap(RequireRole::new(&UserRole::Admin))
            .route(web::post().to(create_batch))
            .route(web::get().to(list_batches)),
    )
    .service(
        web::resource("/batches/{id}/courses")
            .wrap(RequireRole::new(&UserRole::Admin))
            .route(web::post().to(assign_course))
            .route(web::get().to(list_batch_courses)),
    )
    .service(
        web::resource("/courses")
            .wrap(RequireRole::new(&UserRole::Admin))
            .route(web::post().to(create_course))
            .route(web::get().to(list_courses)),
    )
    .service(
        web::resource("/materials")
            .wrap(RequireRole::new_any(UserRole::professor_roles()))
            .route(web::post().to(create_material)),
    )
    .service(
        web::resource("/materials/course/{course_id}")
            .wrap(RequireRole::new_any(UserRole::professor_roles()))
            .route(web::get().to(list_materials)),
    )
    .service(
        web::resource("/materials/{id}")
            .wrap(RequireRole::new(&UserRole::Admin))
            .route(web::delete().to(delete_material)),
    );
}
