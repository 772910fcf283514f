use chrono::Utc;
use entity::employees;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Set,
};

pub async fn find_by_id<C: ConnectionTrait>(
    db: &C,
    employee_id: i32,
) -> Result<Option<employees::Model>, DbErr> {
    employees::Entity::find_by_id(employee_id).one(db).await
}

pub async fn find_by_email<C: ConnectionTrait>(
    db: &C,
    email: &str,
) -> Result<Option<employees::Model>, DbErr> {
    employees::Entity::find()
        .filter(employees::Column::Email.eq(email))
        .one(db)
        .await
}

/// The employee with the fewest supervised accounts; new accounts go here.
pub async fn least_loaded<C: ConnectionTrait>(db: &C) -> Result<Option<employees::Model>, DbErr> {
    employees::Entity::find()
        .order_by_asc(employees::Column::UserCount)
        .order_by_asc(employees::Column::Id)
        .one(db)
        .await
}

pub async fn increment_user_count<C: ConnectionTrait>(db: &C, employee_id: i32) -> Result<(), DbErr> {
    employees::Entity::update_many()
        .col_expr(
            employees::Column::UserCount,
            Expr::col(employees::Column::UserCount).add(1),
        )
        .filter(employees::Column::Id.eq(employee_id))
        .exec(db)
        .await?;
    Ok(())
}

pub async fn list_by_manager<C: ConnectionTrait>(
    db: &C,
    manager_id: i32,
) -> Result<Vec<employees::Model>, DbErr> {
    employees::Entity::find()
        .filter(employees::Column::SupervisorId.eq(manager_id))
        .order_by_asc(employees::Column::Id)
        .all(db)
        .await
}

pub async fn count_by_manager<C: ConnectionTrait>(db: &C, manager_id: i32) -> Result<u64, DbErr> {
    employees::Entity::find()
        .filter(employees::Column::SupervisorId.eq(manager_id))
        .count(db)
        .await
}

pub async fn insert<C: ConnectionTrait>(
    db: &C,
    user_name: String,
    email: String,
    password_hash: String,
    manager_id: i32,
) -> Result<employees::Model, DbErr> {
    let employee = employees::ActiveModel {
        user_name: Set(user_name),
        email: Set(email),
        password_hash: Set(password_hash),
        phone_number: Set(None),
        address: Set(None),
        dob: Set(None),
        user_count: Set(0),
        supervisor_id: Set(manager_id),
        created_at: Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    employee.insert(db).await
}

pub async fn update_profile<C: ConnectionTrait>(
    db: &C,
    employee: employees::Model,
    address: Option<String>,
    phone_number: Option<String>,
    dob: Option<chrono::NaiveDate>,
) -> Result<employees::Model, DbErr> {
    let mut active_employee: employees::ActiveModel = employee.into();
    if let Some(address) = address {
        active_employee.address = Set(Some(address));
    }
    if let Some(phone_number) = phone_number {
        active_employee.phone_number = Set(Some(phone_number));
    }
    if let Some(dob) = dob {
        active_employee.dob = Set(Some(dob));
    }
    active_employee.update(db).await
}
