pub mod assignments;
pub mod auth;
pub mod catalog;
pub mod certificates;
pub mod marks;
pub mod mcqs;
pub mod notifications;
pub mod profiles;
pub mod progress;

use actix_web::web;

use crate::middlewares::RequireJWT;

/// 注册全部 `/api/v1` 路由
///
/// 除登录外的路由都经过 RequireJWT，各资源再按角色包一层 RequireRole。
pub fn configure_api_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(auth::configure_public)
            .service(
                web::scope("")
                    .wrap(RequireJWT)
                    .configure(auth::configure)
                    .configure(progress::configure)
                    .configure(mcqs::configure)
                    .configure(marks::configure)
                    .configure(assignments::configure)
                    .configure(certificates::configure)
                    .configure(catalog::configure)
                    .configure(profiles::configure)
                    .configure(notifications::configure),
            ),
    );
}
