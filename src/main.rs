use actix_cors::Cors;
use actix_web::{http::header, middleware::Logger, App, HttpServer};
use dotenv::dotenv;
use migration::Migrator;
use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;

use sbs_backend::constants::config;
use sbs_backend::routes;
use sbs_backend::store;
use sbs_backend::utils::password::hash_password;

/// Creates the configured manager on first start so there is someone to
/// hire employees.
async fn bootstrap_manager(db: &DatabaseConnection) -> Result<(), Box<dyn std::error::Error>> {
    let Some(manager) = config::get_bootstrap_manager() else {
        return Ok(());
    };

    let email = manager.email.trim().to_lowercase();
    if store::managers::find_by_email(db, &email).await?.is_some() {
        return Ok(());
    }

    let password_hash = hash_password(&manager.password)?;
    let created = store::managers::insert(db, manager.user_name, email, password_hash).await?;
    log::info!("Created bootstrap manager {} ({})", created.id, created.email);
    Ok(())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    // Database connection
    let database_url = config::get_database_url()
        .expect("DATABASE_URL environment variable is required");

    let db: DatabaseConnection = Database::connect(&database_url)
        .await
        .expect("Failed to connect to database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run database migrations");

    if let Err(e) = bootstrap_manager(&db).await {
        log::error!("Failed to create bootstrap manager: {}", e);
    }

    if config::is_default_jwt_secret() {
        log::warn!("JWT_SECRET is not set, using the development secret");
    }

    let server_address = config::get_server_address();
    let cors_origin = config::get_cors_origin();
    log::info!("Starting SBS Banking API server on http://{}", server_address);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&cors_origin)
            .allowed_methods(vec!["GET", "POST", "PUT"])
            .allowed_headers(vec![header::AUTHORIZATION, header::CONTENT_TYPE])
            .max_age(3600);

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .configure(routes::api::configure_app(db.clone()))
    })
    .bind(&server_address)?
    .run()
    .await
}
