use crate::handlers::account_handler::{
    get_profile, list_deposits, list_withdraws, request_deposit, request_withdraw,
};
use crate::middleware::auth::AuthMiddleware;
use actix_web::web;

pub fn configure_account_routes() -> actix_web::Scope {
    web::scope("/account")
        .route("/profile", web::get().to(get_profile).wrap(AuthMiddleware))
        .route("/deposit", web::post().to(request_deposit).wrap(AuthMiddleware))
        .route("/deposit", web::get().to(list_deposits).wrap(AuthMiddleware))
        .route("/withdraw", web::post().to(request_withdraw).wrap(AuthMiddleware))
        .route("/withdraw", web::get().to(list_withdraws).wrap(AuthMiddleware))
}
