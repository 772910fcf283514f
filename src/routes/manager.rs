use crate::handlers::manager_handler::{
    create_employee, get_profile, list_employee_users, list_employees,
};
use crate::middleware::auth::AuthMiddleware;
use actix_web::web;

pub fn configure_manager_routes() -> actix_web::Scope {
    web::scope("/manager")
        .route("/profile", web::get().to(get_profile).wrap(AuthMiddleware))
        .route("/employees", web::get().to(list_employees).wrap(AuthMiddleware))
        .route("/employees", web::post().to(create_employee).wrap(AuthMiddleware))
        .route(
            "/employees/{employee_id}/users",
            web::get().to(list_employee_users).wrap(AuthMiddleware),
        )
}
