use actix_web::{web, HttpResponse};
use entity::accounts;
use entity::sea_orm_active_enums::TransactionKind;
use sea_orm::DatabaseConnection;
use serde_json::json;

use crate::error::ServiceError;
use crate::middleware::auth::AuthenticatedUser;
use crate::store;
use crate::types::account::AccountResponse;
use crate::types::transaction::{TransactionRequest, TransactionResponse};
use crate::utils::auth::holder_caller;
use crate::utils::money::to_minor_units;
use crate::utils::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
use crate::utils::password::verify_password;
use crate::workflow::HolderCaller;

async fn own_account(
    db: &DatabaseConnection,
    caller: &HolderCaller,
) -> Result<accounts::Model, ServiceError> {
    store::accounts::find_by_id(db, caller.account_id)
        .await?
        .filter(|account| account.kind == caller.kind)
        .ok_or(ServiceError::NotFound("Account"))
}

pub async fn get_profile(
    db: web::Data<DatabaseConnection>,
    auth_user: web::ReqData<AuthenticatedUser>,
) -> Result<HttpResponse, ServiceError> {
    let caller = holder_caller(&auth_user)?;
    let account = own_account(db.get_ref(), &caller).await?;

    let supervisor = store::employees::find_by_id(db.get_ref(), account.supervisor_id)
        .await?
        .map(|employee| employee.user_name)
        .unwrap_or_default();

    Ok(HttpResponse::Ok().json(json!({
        "message": "Profile retrieved successfully",
        "status": "success",
        "data": AccountResponse::new(account, supervisor)
    })))
}

pub async fn request_deposit(
    db: web::Data<DatabaseConnection>,
    req: web::Json<TransactionRequest>,
    auth_user: web::ReqData<AuthenticatedUser>,
) -> Result<HttpResponse, ServiceError> {
    submit(db.get_ref(), TransactionKind::Deposit, &req, &auth_user).await
}

pub async fn request_withdraw(
    db: web::Data<DatabaseConnection>,
    req: web::Json<TransactionRequest>,
    auth_user: web::ReqData<AuthenticatedUser>,
) -> Result<HttpResponse, ServiceError> {
    submit(db.get_ref(), TransactionKind::Withdraw, &req, &auth_user).await
}

fn confirm_password(password: Option<&str>, account: &accounts::Model) -> Result<(), ServiceError> {
    let password = password
        .filter(|p| !p.is_empty())
        .ok_or_else(|| ServiceError::validation("Please enter your password"))?;

    if !verify_password(password, &account.password_hash)? {
        log::warn!("Account {} sent a wrong password with a deposit", account.id);
        return Err(ServiceError::Unauthorized("Wrong password"));
    }
    Ok(())
}

/// Queues a request for the account's supervisor. Balances only move when
/// the request is accepted.
async fn submit(
    db: &DatabaseConnection,
    kind: TransactionKind,
    req: &TransactionRequest,
    auth_user: &AuthenticatedUser,
) -> Result<HttpResponse, ServiceError> {
    let caller = holder_caller(auth_user)?;
    let amount = to_minor_units(req.amount)?;
    let account = own_account(db, &caller).await?;

    if !account.is_active {
        return Err(ServiceError::Unauthorized("User is not active"));
    }

    if kind == TransactionKind::Deposit {
        confirm_password(req.password.as_deref(), &account)?;
    }

    let transaction = store::transactions::insert(db, kind, account.id, amount).await?;

    log::info!(
        "Account {} requested {} {} of {}",
        account.id,
        kind,
        transaction.id,
        req.amount
    );

    Ok(HttpResponse::Created().json(json!({
        "message": format!("{} request submitted", kind),
        "status": "success",
        "data": TransactionResponse::from(transaction)
    })))
}

pub async fn list_deposits(
    db: web::Data<DatabaseConnection>,
    query: web::Query<PaginationQuery>,
    auth_user: web::ReqData<AuthenticatedUser>,
) -> Result<HttpResponse, ServiceError> {
    history(db.get_ref(), TransactionKind::Deposit, &query, &auth_user).await
}

pub async fn list_withdraws(
    db: web::Data<DatabaseConnection>,
    query: web::Query<PaginationQuery>,
    auth_user: web::ReqData<AuthenticatedUser>,
) -> Result<HttpResponse, ServiceError> {
    history(db.get_ref(), TransactionKind::Withdraw, &query, &auth_user).await
}

async fn history(
    db: &DatabaseConnection,
    kind: TransactionKind,
    query: &PaginationQuery,
    auth_user: &AuthenticatedUser,
) -> Result<HttpResponse, ServiceError> {
    let caller = holder_caller(auth_user)?;
    let account = own_account(db, &caller).await?;

    let (rows, total) =
        store::transactions::history_for_account(db, account.id, kind, query).await?;

    let data: Vec<TransactionResponse> = rows.into_iter().map(TransactionResponse::from).collect();
    let response = PaginatedResponse::new(
        data,
        PaginationInfo::new(query.get_page(), total, query.get_limit()),
    );

    Ok(HttpResponse::Ok().json(json!({
        "message": format!("{} history retrieved successfully", kind),
        "status": "success",
        "data": response.data,
        "pagination": response.pagination
    })))
}
