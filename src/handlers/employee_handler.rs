use actix_web::{web, HttpResponse};
use entity::accounts;
use entity::sea_orm_active_enums::TransactionKind;
use sea_orm::DatabaseConnection;
use serde_json::json;

use crate::error::ServiceError;
use crate::middleware::auth::AuthenticatedUser;
use crate::store;
use crate::types::account::{AccountResponse, AccountSummary, UpdateAccountRequest, UpdateStatusRequest};
use crate::types::employee::{EmployeeProfileResponse, UpdateProfileRequest};
use crate::types::transaction::{AuthorizeRequest, PendingTransactionResponse, TransactionResponse};
use crate::utils::auth::employee_caller;
use crate::utils::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
use crate::workflow::{self, EmployeeCaller, ResolveRequest};

/// Loads an account the caller supervises.
async fn supervised_account(
    db: &DatabaseConnection,
    caller: &EmployeeCaller,
    account_id: i32,
) -> Result<accounts::Model, ServiceError> {
    let account = store::accounts::find_by_id(db, account_id)
        .await?
        .ok_or(ServiceError::NotFound("User"))?;

    if account.supervisor_id != caller.employee_id {
        return Err(ServiceError::not_authorized());
    }
    Ok(account)
}

async fn profile_response(
    db: &DatabaseConnection,
    caller: &EmployeeCaller,
) -> Result<EmployeeProfileResponse, ServiceError> {
    let employee = store::employees::find_by_id(db, caller.employee_id)
        .await?
        .ok_or(ServiceError::NotFound("Employee"))?;
    let manager = store::managers::find_by_id(db, employee.supervisor_id)
        .await?
        .ok_or_else(|| ServiceError::Internal(format!("employee {} has no manager", employee.id)))?;

    Ok(EmployeeProfileResponse::new(employee, &manager))
}

pub async fn get_profile(
    db: web::Data<DatabaseConnection>,
    auth_user: web::ReqData<AuthenticatedUser>,
) -> Result<HttpResponse, ServiceError> {
    let caller = employee_caller(&auth_user)?;
    let profile = profile_response(db.get_ref(), &caller).await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Profile retrieved successfully",
        "status": "success",
        "data": profile
    })))
}

pub async fn update_profile(
    db: web::Data<DatabaseConnection>,
    req: web::Json<UpdateProfileRequest>,
    auth_user: web::ReqData<AuthenticatedUser>,
) -> Result<HttpResponse, ServiceError> {
    let caller = employee_caller(&auth_user)?;
    let req = req.into_inner();

    let employee = store::employees::find_by_id(db.get_ref(), caller.employee_id)
        .await?
        .ok_or(ServiceError::NotFound("Employee"))?;
    store::employees::update_profile(db.get_ref(), employee, req.address, req.phone_number, req.dob)
        .await?;

    let profile = profile_response(db.get_ref(), &caller).await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "Profile updated successfully",
        "status": "success",
        "data": profile
    })))
}

pub async fn get_deposits(
    db: web::Data<DatabaseConnection>,
    auth_user: web::ReqData<AuthenticatedUser>,
) -> Result<HttpResponse, ServiceError> {
    pending(db.get_ref(), TransactionKind::Deposit, &auth_user).await
}

pub async fn get_withdraws(
    db: web::Data<DatabaseConnection>,
    auth_user: web::ReqData<AuthenticatedUser>,
) -> Result<HttpResponse, ServiceError> {
    pending(db.get_ref(), TransactionKind::Withdraw, &auth_user).await
}

async fn pending(
    db: &DatabaseConnection,
    kind: TransactionKind,
    auth_user: &AuthenticatedUser,
) -> Result<HttpResponse, ServiceError> {
    let caller = employee_caller(auth_user)?;

    let rows = store::transactions::list_waiting_for_supervisor(db, caller.employee_id, kind).await?;
    let data: Vec<PendingTransactionResponse> = rows
        .into_iter()
        .map(|(transaction, account)| PendingTransactionResponse::new(transaction, account))
        .collect();

    Ok(HttpResponse::Ok().json(json!({
        "message": format!("Waiting {} requests retrieved successfully", kind),
        "status": "success",
        "data": data
    })))
}

pub async fn authorize_deposit(
    db: web::Data<DatabaseConnection>,
    transaction_id: web::Path<i32>,
    req: web::Json<AuthorizeRequest>,
    auth_user: web::ReqData<AuthenticatedUser>,
) -> Result<HttpResponse, ServiceError> {
    authorize(db.get_ref(), TransactionKind::Deposit, *transaction_id, &req, &auth_user).await
}

pub async fn authorize_withdraw(
    db: web::Data<DatabaseConnection>,
    transaction_id: web::Path<i32>,
    req: web::Json<AuthorizeRequest>,
    auth_user: web::ReqData<AuthenticatedUser>,
) -> Result<HttpResponse, ServiceError> {
    authorize(db.get_ref(), TransactionKind::Withdraw, *transaction_id, &req, &auth_user).await
}

async fn authorize(
    db: &DatabaseConnection,
    kind: TransactionKind,
    transaction_id: i32,
    req: &AuthorizeRequest,
    auth_user: &AuthenticatedUser,
) -> Result<HttpResponse, ServiceError> {
    let caller = employee_caller(auth_user)?;
    let accept = req
        .accept
        .ok_or_else(|| ServiceError::validation("Please send the status"))?;

    let resolution = workflow::resolve(
        db,
        &caller,
        ResolveRequest {
            transaction_id,
            kind: Some(kind),
            accept,
        },
    )
    .await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": format!("{} {}", kind, resolution.status),
        "status": "success",
        "success": true,
        "data": resolution
    })))
}

pub async fn get_users(
    db: web::Data<DatabaseConnection>,
    auth_user: web::ReqData<AuthenticatedUser>,
) -> Result<HttpResponse, ServiceError> {
    let caller = employee_caller(&auth_user)?;

    let accounts = store::accounts::list_supervised_by(db.get_ref(), caller.employee_id).await?;
    let data: Vec<AccountSummary> = accounts.into_iter().map(AccountSummary::from).collect();

    Ok(HttpResponse::Ok().json(json!({
        "message": "Users retrieved successfully",
        "status": "success",
        "data": data
    })))
}

pub async fn get_user_by_id(
    db: web::Data<DatabaseConnection>,
    account_id: web::Path<i32>,
    auth_user: web::ReqData<AuthenticatedUser>,
) -> Result<HttpResponse, ServiceError> {
    let caller = employee_caller(&auth_user)?;
    let account = supervised_account(db.get_ref(), &caller, *account_id).await?;

    let supervisor = store::employees::find_by_id(db.get_ref(), caller.employee_id)
        .await?
        .map(|employee| employee.user_name)
        .unwrap_or_default();

    Ok(HttpResponse::Ok().json(json!({
        "message": "User retrieved successfully",
        "status": "success",
        "data": AccountResponse::new(account, supervisor)
    })))
}

pub async fn get_user_deposit_logs(
    db: web::Data<DatabaseConnection>,
    account_id: web::Path<i32>,
    query: web::Query<PaginationQuery>,
    auth_user: web::ReqData<AuthenticatedUser>,
) -> Result<HttpResponse, ServiceError> {
    user_logs(db.get_ref(), TransactionKind::Deposit, *account_id, &query, &auth_user).await
}

pub async fn get_user_withdraw_logs(
    db: web::Data<DatabaseConnection>,
    account_id: web::Path<i32>,
    query: web::Query<PaginationQuery>,
    auth_user: web::ReqData<AuthenticatedUser>,
) -> Result<HttpResponse, ServiceError> {
    user_logs(db.get_ref(), TransactionKind::Withdraw, *account_id, &query, &auth_user).await
}

async fn user_logs(
    db: &DatabaseConnection,
    kind: TransactionKind,
    account_id: i32,
    query: &PaginationQuery,
    auth_user: &AuthenticatedUser,
) -> Result<HttpResponse, ServiceError> {
    let caller = employee_caller(auth_user)?;
    let account = supervised_account(db, &caller, account_id).await?;

    let (rows, total) =
        store::transactions::history_for_account(db, account.id, kind, query).await?;

    let data: Vec<TransactionResponse> = rows.into_iter().map(TransactionResponse::from).collect();
    let response = PaginatedResponse::new(
        data,
        PaginationInfo::new(query.get_page(), total, query.get_limit()),
    );

    Ok(HttpResponse::Ok().json(json!({
        "message": format!("{} logs retrieved successfully", kind),
        "status": "success",
        "data": response.data,
        "pagination": response.pagination
    })))
}

pub async fn update_user_profile(
    db: web::Data<DatabaseConnection>,
    account_id: web::Path<i32>,
    req: web::Json<UpdateAccountRequest>,
    auth_user: web::ReqData<AuthenticatedUser>,
) -> Result<HttpResponse, ServiceError> {
    let caller = employee_caller(&auth_user)?;
    let account = supervised_account(db.get_ref(), &caller, *account_id).await?;

    if !account.is_active {
        return Err(ServiceError::Unauthorized("User is not active"));
    }

    let req = req.into_inner();
    let account =
        store::accounts::update_contact(db.get_ref(), account, req.address, req.phone_number)
            .await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": "User updated successfully",
        "status": "success",
        "success": true,
        "data": AccountSummary::from(account)
    })))
}

pub async fn update_user_status(
    db: web::Data<DatabaseConnection>,
    account_id: web::Path<i32>,
    req: web::Json<UpdateStatusRequest>,
    auth_user: web::ReqData<AuthenticatedUser>,
) -> Result<HttpResponse, ServiceError> {
    let caller = employee_caller(&auth_user)?;
    let active = req
        .status
        .ok_or_else(|| ServiceError::validation("Status is required"))?;

    let change = workflow::set_active(db.get_ref(), &caller, *account_id, active).await?;

    Ok(HttpResponse::Ok().json(json!({
        "message": if change.is_active { "User activated" } else { "User deactivated" },
        "status": "success",
        "success": true,
        "data": change
    })))
}
