use actix_web::{web, HttpResponse};
use entity::sea_orm_active_enums::AccountKind;
use sea_orm::{DatabaseConnection, TransactionTrait};
use serde_json::json;

use crate::error::ServiceError;
use crate::store;
use crate::store::accounts::NewAccount;
use crate::types::account::AccountResponse;
use crate::types::auth::{LoginRequest, LoginResponse, RegisterRequest, Role};
use crate::utils::auth::normalize_email;
use crate::utils::jwt::create_jwt_token;
use crate::utils::password::{hash_password, verify_password};

const MIN_PASSWORD_LEN: usize = 8;

fn issue_token(user_id: i32, role: Role) -> Result<String, ServiceError> {
    create_jwt_token(user_id, role).map_err(|e| {
        log::error!("JWT token creation error: {}", e);
        ServiceError::Internal("Failed to create authentication token".to_string())
    })
}

fn invalid_credentials() -> HttpResponse {
    HttpResponse::Unauthorized().json(json!({
        "message": "Invalid email or password",
        "status": "error"
    }))
}

pub async fn login(
    db: web::Data<DatabaseConnection>,
    req: web::Json<LoginRequest>,
) -> Result<HttpResponse, ServiceError> {
    let email = req.email.trim().to_lowercase();
    let db = db.get_ref();

    let (user_id, role, password_hash, is_active) =
        if let Some(manager) = store::managers::find_by_email(db, &email).await? {
            (manager.id, Role::Manager, manager.password_hash, true)
        } else if let Some(employee) = store::employees::find_by_email(db, &email).await? {
            (employee.id, Role::Employee, employee.password_hash, true)
        } else if let Some(account) = store::accounts::find_by_email(db, &email).await? {
            (
                account.id,
                Role::from(account.kind),
                account.password_hash,
                account.is_active,
            )
        } else {
            return Ok(invalid_credentials());
        };

    if !verify_password(&req.password, &password_hash)? {
        return Ok(invalid_credentials());
    }

    // Checked after the password so a miss reveals nothing.
    if !is_active {
        return Ok(HttpResponse::Unauthorized().json(json!({
            "message": "Account is deactivated",
            "status": "error"
        })));
    }

    let token = issue_token(user_id, role)?;
    log::info!("{} {} logged in", role, user_id);

    Ok(HttpResponse::Ok().json(json!({
        "message": "Login successful",
        "status": "success",
        "data": LoginResponse { token, role, email }
    })))
}

/// Opens a customer or merchant account and hands it to the employee with
/// the fewest clients.
pub async fn register(
    db: web::Data<DatabaseConnection>,
    req: web::Json<RegisterRequest>,
) -> Result<HttpResponse, ServiceError> {
    let req = req.into_inner();

    let kind = match req.role.as_deref() {
        None | Some("customer") => AccountKind::Customer,
        Some("merchant") => AccountKind::Merchant,
        Some(_) => return Err(ServiceError::validation("Wrong role")),
    };

    let user_name = req.user_name.trim().to_string();
    if user_name.is_empty() {
        return Err(ServiceError::validation("Please Type your Name!"));
    }
    if req.password.len() < MIN_PASSWORD_LEN {
        return Err(ServiceError::validation("Please Type A Strong Password!"));
    }
    let email = normalize_email(&req.email)?;

    if store::email_in_use(db.get_ref(), &email).await? {
        return Err(ServiceError::validation("User with this email already exists"));
    }

    let password_hash = hash_password(&req.password)?;

    let txn = db.begin().await?;

    let supervisor = match store::employees::least_loaded(&txn).await? {
        Some(employee) => employee,
        None => {
            log::warn!("Registration of {} refused: no employee to supervise it", email);
            return Ok(HttpResponse::ServiceUnavailable().json(json!({
                "message": "No employee is available to open new accounts",
                "status": "error"
            })));
        }
    };

    let account = store::accounts::insert(
        &txn,
        NewAccount {
            kind,
            user_name,
            email,
            password_hash,
            phone_number: req.phone_number,
            address: req.address,
            dob: req.dob,
            supervisor_id: supervisor.id,
        },
    )
    .await?;

    store::employees::increment_user_count(&txn, supervisor.id).await?;

    txn.commit().await?;

    log::info!(
        "Registered {} {} under employee {}",
        account.kind,
        account.id,
        supervisor.id
    );

    let role = Role::from(account.kind);
    let token = issue_token(account.id, role)?;

    Ok(HttpResponse::Created().json(json!({
        "message": "User registered successfully",
        "status": "success",
        "data": {
            "token": token,
            "role": role,
            "account": AccountResponse::new(account, supervisor.user_name),
        }
    })))
}
