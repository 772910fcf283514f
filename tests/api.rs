mod common;

use actix_web::http::{header, StatusCode};
use actix_web::{test, App};
use common::{open_account, reload_account, reload_transaction, request, seed_bank, PASSWORD};
use entity::sea_orm_active_enums::{AccountKind, TransactionKind, TransactionStatus};
use sbs_backend::routes::api::configure_app;
use sbs_backend::store;
use sbs_backend::types::auth::Role;
use sbs_backend::utils::jwt::create_jwt_token;
use serde_json::{json, Value};

fn bearer(id: i32, role: Role) -> (header::HeaderName, String) {
    let token = create_jwt_token(id, role).expect("create token");
    (header::AUTHORIZATION, format!("Bearer {}", token))
}

#[actix_rt::test]
async fn health_endpoints_respond() {
    let bank = seed_bank().await;
    let app = test::init_service(App::new().configure(configure_app(bank.db.clone()))).await;

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_rt::test]
async fn health_reports_an_unreachable_database() {
    let bank = seed_bank().await;
    let app = test::init_service(App::new().configure(configure_app(bank.db.clone()))).await;

    bank.db.close().await.expect("close pool");

    let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "unhealthy");
}

#[actix_rt::test]
async fn deposit_request_flows_through_employee_approval() {
    let bank = seed_bank().await;
    let account = open_account(&bank.db, AccountKind::Customer, "cam@sbs.test", bank.employee.id, 10_000).await;
    let app = test::init_service(App::new().configure(configure_app(bank.db.clone()))).await;

    let req = test::TestRequest::post()
        .uri("/account/deposit")
        .insert_header(bearer(account.id, Role::Customer))
        .set_json(json!({ "amount": 50, "password": PASSWORD }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["status"], "waiting");
    let transaction_id = body["data"]["id"].as_i64().expect("transaction id") as i32;

    // Submitting does not move money.
    assert_eq!(reload_account(&bank.db, account.id).await.balance, 10_000);

    let req = test::TestRequest::get()
        .uri("/employee/deposit")
        .insert_header(bearer(bank.employee.id, Role::Employee))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let queue = body["data"].as_array().expect("queue");
    assert_eq!(queue.len(), 1);
    assert_eq!(queue[0]["id"], transaction_id);
    assert_eq!(queue[0]["client_id"], account.id);
    assert_eq!(queue[0]["user_name"], "cam");
    assert_eq!(queue[0]["role"], "customer");

    let req = test::TestRequest::post()
        .uri(&format!("/employee/deposit/{}", transaction_id))
        .insert_header(bearer(bank.employee.id, Role::Employee))
        .set_json(json!({ "accept": true }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["status"], "accept");

    assert_eq!(reload_account(&bank.db, account.id).await.balance, 15_000);
    assert_eq!(
        reload_transaction(&bank.db, transaction_id).await.status,
        TransactionStatus::Accept
    );

    let req = test::TestRequest::get()
        .uri("/employee/deposit")
        .insert_header(bearer(bank.employee.id, Role::Employee))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert!(body["data"].as_array().expect("queue").is_empty());
}

#[actix_rt::test]
async fn authorization_errors_map_to_status_codes() {
    let bank = seed_bank().await;
    let account = open_account(&bank.db, AccountKind::Customer, "cam@sbs.test", bank.employee.id, 10_000).await;
    let withdraw = request(&bank.db, TransactionKind::Withdraw, account.id, 15_000).await;
    let app = test::init_service(App::new().configure(configure_app(bank.db.clone()))).await;

    // missing `accept`
    let req = test::TestRequest::post()
        .uri(&format!("/employee/withdraw/{}", withdraw.id))
        .insert_header(bearer(bank.employee.id, Role::Employee))
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Please send the status");

    // another employee's client
    let req = test::TestRequest::post()
        .uri(&format!("/employee/withdraw/{}", withdraw.id))
        .insert_header(bearer(bank.other_employee.id, Role::Employee))
        .set_json(json!({ "accept": true }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

    // balance does not cover it
    let req = test::TestRequest::post()
        .uri(&format!("/employee/withdraw/{}", withdraw.id))
        .insert_header(bearer(bank.employee.id, Role::Employee))
        .set_json(json!({ "accept": true }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["message"],
        "The customer does not have enough balance for this withdrawal"
    );

    // a withdraw addressed through the deposit route
    let req = test::TestRequest::post()
        .uri(&format!("/employee/deposit/{}", withdraw.id))
        .insert_header(bearer(bank.employee.id, Role::Employee))
        .set_json(json!({ "accept": false }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);

    // decline works, then the request is settled
    let req = test::TestRequest::post()
        .uri(&format!("/employee/withdraw/{}", withdraw.id))
        .insert_header(bearer(bank.employee.id, Role::Employee))
        .set_json(json!({ "accept": false }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

    let req = test::TestRequest::post()
        .uri(&format!("/employee/withdraw/{}", withdraw.id))
        .insert_header(bearer(bank.employee.id, Role::Employee))
        .set_json(json!({ "accept": true }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Transaction already authorized");

    assert_eq!(reload_account(&bank.db, account.id).await.balance, 10_000);
}

#[actix_rt::test]
async fn routes_require_the_right_role() {
    let bank = seed_bank().await;
    let account = open_account(&bank.db, AccountKind::Customer, "cam@sbs.test", bank.employee.id, 0).await;
    let app = test::init_service(App::new().configure(configure_app(bank.db.clone()))).await;

    let req = test::TestRequest::get().uri("/employee/deposit").to_request();
    let err = test::try_call_service(&app, req).await.expect_err("missing token");
    assert_eq!(err.as_response_error().status_code(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::get()
        .uri("/employee/deposit")
        .insert_header((header::AUTHORIZATION, "Bearer not-a-token"))
        .to_request();
    let err = test::try_call_service(&app, req).await.expect_err("bad token");
    assert_eq!(err.as_response_error().status_code(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::get()
        .uri("/employee/deposit")
        .insert_header(bearer(account.id, Role::Customer))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::post()
        .uri("/account/deposit")
        .insert_header(bearer(bank.employee.id, Role::Employee))
        .set_json(json!({ "amount": 10 }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::get()
        .uri("/manager/employees")
        .insert_header(bearer(bank.employee.id, Role::Employee))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn account_holders_submit_valid_requests_only() {
    let bank = seed_bank().await;
    let account = open_account(&bank.db, AccountKind::Merchant, "max@sbs.test", bank.employee.id, 0).await;
    let app = test::init_service(App::new().configure(configure_app(bank.db.clone()))).await;

    for amount in [json!(0), json!(-5), json!(1.005), json!(1e28)] {
        let req = test::TestRequest::post()
            .uri("/account/withdraw")
            .insert_header(bearer(account.id, Role::Merchant))
            .set_json(json!({ "amount": amount }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
    }

    let req = test::TestRequest::post()
        .uri("/account/withdraw")
        .insert_header(bearer(account.id, Role::Merchant))
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "error");

    let req = test::TestRequest::post()
        .uri("/account/withdraw")
        .insert_header(bearer(account.id, Role::Merchant))
        .set_json(json!({ "amount": 20.5 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::get()
        .uri("/account/withdraw")
        .insert_header(bearer(account.id, Role::Merchant))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"].as_array().expect("history").len(), 1);
    assert_eq!(body["pagination"]["total_items"], 1);

    // A customer token for a merchant account id does not match.
    let req = test::TestRequest::get()
        .uri("/account/profile")
        .insert_header(bearer(account.id, Role::Customer))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn deposits_require_the_account_password() {
    let bank = seed_bank().await;
    let account = open_account(&bank.db, AccountKind::Customer, "cam@sbs.test", bank.employee.id, 0).await;
    let app = test::init_service(App::new().configure(configure_app(bank.db.clone()))).await;

    let req = test::TestRequest::post()
        .uri("/account/deposit")
        .insert_header(bearer(account.id, Role::Customer))
        .set_json(json!({ "amount": 25 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Please enter your password");

    let req = test::TestRequest::post()
        .uri("/account/deposit")
        .insert_header(bearer(account.id, Role::Customer))
        .set_json(json!({ "amount": 25, "password": "not-my-password" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Wrong password");

    let req = test::TestRequest::get()
        .uri("/account/deposit")
        .insert_header(bearer(account.id, Role::Customer))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["pagination"]["total_items"], 0);

    let req = test::TestRequest::post()
        .uri("/account/deposit")
        .insert_header(bearer(account.id, Role::Customer))
        .set_json(json!({ "amount": 25, "password": PASSWORD }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    // Withdraw requests do not ask for it.
    let req = test::TestRequest::post()
        .uri("/account/withdraw")
        .insert_header(bearer(account.id, Role::Customer))
        .set_json(json!({ "amount": 25 }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);
}

#[actix_rt::test]
async fn deactivation_endpoint_cascades_and_blocks_new_requests() {
    let bank = seed_bank().await;
    let account = open_account(&bank.db, AccountKind::Customer, "cam@sbs.test", bank.employee.id, 10_000).await;
    let deposit = request(&bank.db, TransactionKind::Deposit, account.id, 5_000).await;
    let withdraw = request(&bank.db, TransactionKind::Withdraw, account.id, 2_000).await;
    let app = test::init_service(App::new().configure(configure_app(bank.db.clone()))).await;

    let req = test::TestRequest::put()
        .uri(&format!("/employee/user/{}/status", account.id))
        .insert_header(bearer(bank.employee.id, Role::Employee))
        .set_json(json!({}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::put()
        .uri(&format!("/employee/user/{}/status", account.id))
        .insert_header(bearer(bank.employee.id, Role::Employee))
        .set_json(json!({ "status": false }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["declined"], 2);
    assert_eq!(body["data"]["is_active"], false);

    assert_eq!(reload_transaction(&bank.db, deposit.id).await.status, TransactionStatus::Decline);
    assert_eq!(reload_transaction(&bank.db, withdraw.id).await.status, TransactionStatus::Decline);
    assert_eq!(reload_account(&bank.db, account.id).await.balance, 10_000);

    let req = test::TestRequest::post()
        .uri("/account/deposit")
        .insert_header(bearer(account.id, Role::Customer))
        .set_json(json!({ "amount": 10 }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::put()
        .uri(&format!("/employee/user/{}", account.id))
        .insert_header(bearer(bank.employee.id, Role::Employee))
        .set_json(json!({ "address": "1 Main St" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn employees_manage_their_own_clients() {
    let bank = seed_bank().await;
    let mine = open_account(&bank.db, AccountKind::Customer, "cam@sbs.test", bank.employee.id, 0).await;
    let theirs = open_account(&bank.db, AccountKind::Merchant, "max@sbs.test", bank.other_employee.id, 0).await;
    request(&bank.db, TransactionKind::Deposit, mine.id, 100).await;
    request(&bank.db, TransactionKind::Deposit, mine.id, 200).await;
    let app = test::init_service(App::new().configure(configure_app(bank.db.clone()))).await;

    let req = test::TestRequest::get()
        .uri("/employee/user")
        .insert_header(bearer(bank.employee.id, Role::Employee))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let users = body["data"].as_array().expect("users");
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["id"], mine.id);

    let req = test::TestRequest::get()
        .uri(&format!("/employee/user/{}", theirs.id))
        .insert_header(bearer(bank.employee.id, Role::Employee))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::get()
        .uri(&format!("/employee/user/{}", mine.id))
        .insert_header(bearer(bank.employee.id, Role::Employee))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"]["supervisor"], "eli");

    let req = test::TestRequest::get()
        .uri(&format!("/employee/user/{}/deposit?page=1&limit=1", mine.id))
        .insert_header(bearer(bank.employee.id, Role::Employee))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"].as_array().expect("logs").len(), 1);
    assert_eq!(body["pagination"]["total_items"], 2);
    assert_eq!(body["pagination"]["total_pages"], 2);

    let req = test::TestRequest::put()
        .uri(&format!("/employee/user/{}", mine.id))
        .insert_header(bearer(bank.employee.id, Role::Employee))
        .set_json(json!({ "address": "1 Main St", "phone_number": "555-0100" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    let updated = reload_account(&bank.db, mine.id).await;
    assert_eq!(updated.address.as_deref(), Some("1 Main St"));
    assert_eq!(updated.phone_number.as_deref(), Some("555-0100"));

    let req = test::TestRequest::get()
        .uri("/employee/profile")
        .insert_header(bearer(bank.employee.id, Role::Employee))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"]["supervisor"], "mia");
}

#[actix_rt::test]
async fn login_issues_role_tokens() {
    let bank = seed_bank().await;
    let account = open_account(&bank.db, AccountKind::Merchant, "max@sbs.test", bank.employee.id, 0).await;
    let app = test::init_service(App::new().configure(configure_app(bank.db.clone()))).await;

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({ "email": "MAX@sbs.test", "password": PASSWORD }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["role"], "merchant");
    let token = body["data"]["token"].as_str().expect("token").to_string();

    let req = test::TestRequest::get()
        .uri("/account/profile")
        .insert_header((header::AUTHORIZATION, format!("Bearer {}", token)))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"]["id"], account.id);

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({ "email": "eli@sbs.test", "password": PASSWORD }))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"]["role"], "employee");

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({ "email": "max@sbs.test", "password": "wrong-password" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

    store::accounts::set_active(&bank.db, account, false).await.unwrap();
    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({ "email": "max@sbs.test", "password": PASSWORD }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Account is deactivated");

    // A wrong password on a deactivated account looks like any other miss.
    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({ "email": "max@sbs.test", "password": "wrong-password" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid email or password");
}

#[actix_rt::test]
async fn registration_assigns_the_least_loaded_employee() {
    std::env::set_var("BCRYPT_COST", "4");
    let bank = seed_bank().await;
    open_account(&bank.db, AccountKind::Customer, "cam@sbs.test", bank.employee.id, 0).await;
    let app = test::init_service(App::new().configure(configure_app(bank.db.clone()))).await;

    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(json!({
            "user_name": "nia",
            "email": "nia@sbs.test",
            "password": "long-enough",
            "role": "merchant"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["account"]["role"], "merchant");
    assert_eq!(body["data"]["account"]["supervisor"], "ora");
    assert_eq!(body["data"]["account"]["balance"], 0.0);

    let ora = store::employees::find_by_id(&bank.db, bank.other_employee.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(ora.user_count, 1);

    let duplicate = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(json!({
            "user_name": "nia",
            "email": "nia@sbs.test",
            "password": "long-enough"
        }))
        .to_request();
    assert_eq!(test::call_service(&app, duplicate).await.status(), StatusCode::BAD_REQUEST);

    let bad_role = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(json!({
            "user_name": "ivy",
            "email": "ivy@sbs.test",
            "password": "long-enough",
            "role": "employee"
        }))
        .to_request();
    assert_eq!(test::call_service(&app, bad_role).await.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn managers_oversee_their_employees() {
    std::env::set_var("BCRYPT_COST", "4");
    let bank = seed_bank().await;
    let client = open_account(&bank.db, AccountKind::Customer, "cam@sbs.test", bank.employee.id, 0).await;
    let app = test::init_service(App::new().configure(configure_app(bank.db.clone()))).await;

    let req = test::TestRequest::post()
        .uri("/manager/employees")
        .insert_header(bearer(bank.manager.id, Role::Manager))
        .set_json(json!({ "user_name": "uma", "email": "uma@sbs.test", "password": "long-enough" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::get()
        .uri("/manager/employees")
        .insert_header(bearer(bank.manager.id, Role::Manager))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let staff = body["data"].as_array().expect("employees");
    assert_eq!(staff.len(), 3);
    assert_eq!(staff[0]["user_count"], 1);

    let req = test::TestRequest::get()
        .uri(&format!("/manager/employees/{}/users", bank.employee.id))
        .insert_header(bearer(bank.manager.id, Role::Manager))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"][0]["id"], client.id);

    let req = test::TestRequest::get()
        .uri("/manager/profile")
        .insert_header(bearer(bank.manager.id, Role::Manager))
        .to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body["data"]["employee_count"], 3);
}
