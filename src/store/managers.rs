use chrono::Utc;
use entity::managers;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, Set};

pub async fn find_by_id<C: ConnectionTrait>(
    db: &C,
    manager_id: i32,
) -> Result<Option<managers::Model>, DbErr> {
    managers::Entity::find_by_id(manager_id).one(db).await
}

pub async fn find_by_email<C: ConnectionTrait>(
    db: &C,
    email: &str,
) -> Result<Option<managers::Model>, DbErr> {
    managers::Entity::find()
        .filter(managers::Column::Email.eq(email))
        .one(db)
        .await
}

pub async fn insert<C: ConnectionTrait>(
    db: &C,
    user_name: String,
    email: String,
    password_hash: String,
) -> Result<managers::Model, DbErr> {
    let manager = managers::ActiveModel {
        user_name: Set(user_name),
        email: Set(email),
        password_hash: Set(password_hash),
        created_at: Set(Utc::now().naive_utc()),
        ..Default::default()
    };

    manager.insert(db).await
}
