pub mod employee;
pub mod leave_request;
pub mod leave_type;
pub mod notification;
pub mod role;

pub use employee::{Employee, EmployeeWithRole, NewEmployee};
pub use leave_request::{LeaveRequest, NewLeaveRequest};
pub use leave_type::{LeaveType, NewLeaveType};
pub use notification::{NewNotification, Notification};
pub use role::{NewRole, Role};

use sqlx::FromRow;

use crate::{db::DbRow, schema::Table};

/// A persisted record type with an `i32` surrogate key.
pub trait Entity: for<'r> FromRow<'r, DbRow> + Send + Unpin {
    const TABLE: Table;
    /// Key column name.
    const KEY: &'static str;

    fn key(&self) -> i32;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entities_map_to_their_tables_and_keys() {
        assert_eq!((Role::TABLE, Role::KEY), (Table::Roles, "role_id"));
        assert_eq!((Employee::TABLE, Employee::KEY), (Table::Employees, "emp_id"));
        assert_eq!((LeaveType::TABLE, LeaveType::KEY), (Table::LeaveTypes, "leave_type_id"));
        assert_eq!(
            (LeaveRequest::TABLE, LeaveRequest::KEY),
            (Table::LeaveRequests, "leave_id")
        );
        assert_eq!(
            (Notification::TABLE, Notification::KEY),
            (Table::Notifications, "not_id")
        );
    }

    #[test]
    fn key_returns_the_surrogate_key() {
        let role = Role {
            role_id: 3,
            role_name: "Manager".into(),
        };
        assert_eq!(role.key(), 3);
    }
}
