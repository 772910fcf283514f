use actix_web::{web, HttpResponse};
use sea_orm::DatabaseConnection;
use serde_json::json;

use crate::error::ServiceError;
use crate::middleware::auth::AuthenticatedUser;
use crate::store;
use crate::types::account::AccountSummary;
use crate::types::employee::{CreateEmployeeRequest, EmployeeSummary, ManagerProfileResponse};
use crate::utils::auth::{manager_caller, normalize_email};
use crate::utils::password::hash_password;

const MIN_PASSWORD_LEN: usize = 8;

pub async fn get_profile(
    db: web::Data<DatabaseConnection>,
    auth_user: web::ReqData<AuthenticatedUser>,
) -> Result<HttpResponse, ServiceError> {
    let caller = manager_caller(&auth_user)?;

    let manager = store::managers::find_by_id(db.get_ref(), caller.manager_id)
        .await?
        .ok_or(ServiceError::NotFound("Manager"))?;
    let employee_count = store::employees::count_by_manager(db.get_ref(), manager.id).await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Profile retrieved successfully",
        "status": "success",
        "data": ManagerProfileResponse {
            id: manager.id,
            user_name: manager.user_name,
            email: manager.email,
            employee_count,
            date_created: manager.created_at,
        }
    })))
}

pub async fn list_employees(
    db: web::Data<DatabaseConnection>,
    auth_user: web::ReqData<AuthenticatedUser>,
) -> Result<HttpResponse, ServiceError> {
    let caller = manager_caller(&auth_user)?;

    let employees = store::employees::list_by_manager(db.get_ref(), caller.manager_id).await?;
    let data: Vec<EmployeeSummary> = employees.into_iter().map(EmployeeSummary::from).collect();

    Ok(HttpResponse::Ok().json(json!({
        "message": "Employees retrieved successfully",
        "status": "success",
        "data": data
    })))
}

pub async fn create_employee(
    db: web::Data<DatabaseConnection>,
    req: web::Json<CreateEmployeeRequest>,
    auth_user: web::ReqData<AuthenticatedUser>,
) -> Result<HttpResponse, ServiceError> {
    let caller = manager_caller(&auth_user)?;
    let req = req.into_inner();

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
    let employee =
        store::employees::insert(db.get_ref(), user_name, email, password_hash, caller.manager_id)
            .await?;

    log::info!("Manager {} created employee {}", caller.manager_id, employee.id);

    Ok(HttpResponse::Created().json(json!({
        "message": "Employee created successfully",
        "status": "success",
        "data": EmployeeSummary::from(employee)
    })))
}

pub async fn list_employee_users(
    db: web::Data<DatabaseConnection>,
    employee_id: web::Path<i32>,
    auth_user: web::ReqData<AuthenticatedUser>,
) -> Result<HttpResponse, ServiceError> {
    let caller = manager_caller(&auth_user)?;

    let employee = store::employees::find_by_id(db.get_ref(), *employee_id)
        .await?
        .ok_or(ServiceError::NotFound("Employee"))?;
    if employee.supervisor_id != caller.manager_id {
        return Err(ServiceError::not_authorized());
    }

    let accounts = store::accounts::list_supervised_by(db.get_ref(), employee.id).await?;
    let data: Vec<AccountSummary> = accounts.into_iter().map(AccountSummary::from).collect();

    Ok(HttpResponse::Ok().json(json!({
        "message": "Users retrieved successfully",
        "status": "success",
        "data": data
    })))
}
