use crate::handlers::employee_handler::{
    authorize_deposit, authorize_withdraw, get_deposits, get_profile, get_user_by_id,
    get_user_deposit_logs, get_user_withdraw_logs, get_users, get_withdraws, update_profile,
    update_user_profile, update_user_status,
};
use crate::middleware::auth::AuthMiddleware;
use actix_web::web;

pub fn configure_employee_routes() -> actix_web::Scope {
    web::scope("/employee")
        .route("/profile", web::get().to(get_profile).wrap(AuthMiddleware))
        .route("/profile", web::put().to(update_profile).wrap(AuthMiddleware))
        // Waiting requests and their resolution
        .route("/deposit", web::get().to(get_deposits).wrap(AuthMiddleware))
        .route(
            "/deposit/{transaction_id}",
            web::post().to(authorize_deposit).wrap(AuthMiddleware),
        )
        .route("/withdraw", web::get().to(get_withdraws).wrap(AuthMiddleware))
        .route(
            "/withdraw/{transaction_id}",
            web::post().to(authorize_withdraw).wrap(AuthMiddleware),
        )
        // Supervised accounts
        .route("/user", web::get().to(get_users).wrap(AuthMiddleware))
        .route(
            "/user/{account_id}",
            web::get().to(get_user_by_id).wrap(AuthMiddleware),
        )
        .route(
            "/user/{account_id}",
            web::put().to(update_user_profile).wrap(AuthMiddleware),
        )
        .route(
            "/user/{account_id}/deposit",
            web::get().to(get_user_deposit_logs).wrap(AuthMiddleware),
        )
        .route(
            "/user/{account_id}/withdraw",
            web::get().to(get_user_withdraw_logs).wrap(AuthMiddleware),
        )
        .route(
            "/user/{account_id}/status",
            web::put().to(update_user_status).wrap(AuthMiddleware),
        )
}
