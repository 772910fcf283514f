pub use super::accounts::Entity as Accounts;
pub use super::employees::Entity as Employees;
pub use super::managers::Entity as Managers;
pub use super::transactions::Entity as Transactions;
