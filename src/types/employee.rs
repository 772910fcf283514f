use entity::{employees, managers};
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct EmployeeProfileResponse {
    pub id: i32,
    pub user_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub dob: Option<chrono::NaiveDate>,
    pub supervisor: String,
}

impl EmployeeProfileResponse {
    pub fn new(employee: employees::Model, manager: &managers::Model) -> Self {
        Self {
            id: employee.id,
            user_name: employee.user_name,
            email: employee.email,
            phone_number: employee.phone_number,
            address: employee.address,
            dob: employee.dob,
            supervisor: manager.user_name.clone(),
        }
    }
}

#[derive(Deserialize)]
pub struct UpdateProfileRequest {
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub dob: Option<chrono::NaiveDate>,
}

#[derive(Deserialize)]
pub struct CreateEmployeeRequest {
    pub user_name: String,
    pub email: String,
    pub password: String,
}

/// Row of a manager's staff list.
#[derive(Serialize)]
pub struct EmployeeSummary {
    pub id: i32,
    pub user_name: String,
    pub email: String,
    pub user_count: i32,
    pub date_created: chrono::NaiveDateTime,
}

impl From<employees::Model> for EmployeeSummary {
    fn from(employee: employees::Model) -> Self {
        Self {
            id: employee.id,
            user_name: employee.user_name,
            email: employee.email,
            user_count: employee.user_count,
            date_created: employee.created_at,
        }
    }
}

#[derive(Serialize)]
pub struct ManagerProfileResponse {
    pub id: i32,
    pub user_name: String,
    pub email: String,
    pub employee_count: u64,
    pub date_created: chrono::NaiveDateTime,
}
