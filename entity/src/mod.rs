pub mod prelude;

pub mod accounts;
pub mod employees;
pub mod managers;
pub mod sea_orm_active_enums;
pub mod transactions;
