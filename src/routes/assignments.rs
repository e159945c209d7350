use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::RequireRole;
use crate::models::assignments::requests::GradeAssignmentRequest;
use crate::models::users::entities::UserRole;
use crate::services::AssignmentService;
use crate::services::assignments::{SubmissionTarget, grade::GradeTarget};

// 懒加载的全局 AssignmentService 实例
static ASSIGNMENT_SERVICE: Lazy<AssignmentService> = Lazy::new(AssignmentService::new_lazy);

pub async fn submit_assignment(
    req: HttpRequest,
    path: web::Path<(i64, i64)>,
    payload: Multipart,
) -> ActixResult<HttpResponse> {
    let (course_id, material_id) = path.into_inner();
    ASSIGNMENT_SERVICE
        .submit_assignment(
            &req,
            SubmissionTarget {
                course_id,
                material_id,
            },
            payload,
        )
        .await
}

pub async fn list_submissions(
    req: HttpRequest,
    path: web::Path<(i64, i64)>,
) -> ActixResult<HttpResponse> {
    let (course_id, material_id) = path.into_inner();
    ASSIGNMENT_SERVICE
        .list_submissions(&req, course_id, material_id)
        .await
}

pub async fn assign_marks(
    req: HttpRequest,
    path: web::Path<(i64, i64, i64)>,
    body: web::Json<GradeAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    let (course_id, material_id, student_id) = path.into_inner();
    ASSIGNMENT_SERVICE
        .grade_submission(
            &req,
            GradeTarget {
                course_id,
                material_id,
                student_id,
            },
            body.into_inner(),
        )
        .await
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/materials/submit-assignment/{course_id}/{material_id}")
            .wrap(RequireRole::new(&UserRole::Student))
            .route(web::post().to(submit_assignment)),
    )
    .service(
        web::resource("/materials/get-assignment/{course_id}/{material_id}")
            .wrap(RequireRole::new(&UserRole::Professor))
            .route(web::get().to(list_submissions)),
    )
    .service(
        web::resource(
            "/materials/assign-marks/course/{course_id}/material/{material_id}/student/{student_id}",
        )
        .wrap(RequireRole::new(&UserRole::Professor))
        .route(web::post().to(assign_marks)),
    );
}
