use entity::sea_orm_active_enums::AccountKind;

/// An authenticated employee acting in one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmployeeCaller {
    pub employee_id: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManagerCaller {
    pub manager_id: i32,
}

/// A customer or merchant acting on their own account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HolderCaller {
    pub account_id: i32,
    pub kind: AccountKind,
}
