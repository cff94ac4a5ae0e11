//! Storage mapping for the five entities: one table each, foreign keys as
//! storage-level constraints, and an index on every foreign-key column.

use strum::IntoEnumIterator;
use tracing::{error, info};

use crate::db::DbPool;

/// Tables in dependency order: every table only references tables listed before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum Table {
    Roles,
    Employees,
    LeaveTypes,
    LeaveRequests,
    Notifications,
}

impl Table {
    pub fn name(&self) -> &str {
        self.as_ref()
    }

    /// Statements creating this table and its indexes.
    fn ddl(&self) -> &'static [&'static str] {
        match self {
            Table::Roles => ddl::ROLES,
            Table::Employees => ddl::EMPLOYEES,
            Table::LeaveTypes => ddl::LEAVE_TYPES,
            Table::LeaveRequests => ddl::LEAVE_REQUESTS,
            Table::Notifications => ddl::NOTIFICATIONS,
        }
    }
}

/// Creates any missing table. Safe to run against an existing schema.
pub async fn ensure_created(pool: &DbPool) -> Result<(), sqlx::Error> {
    for table in Table::iter() {
        for statement in table.ddl() {
            sqlx::query(statement).execute(pool).await.map_err(|e| {
                error!(error = %e, table = %table, "Failed to create table");
                e
            })?;
        }
    }

    info!("Schema ensured: {} tables", Table::iter().count());
    Ok(())
}

/// Drops every table, dependents first.
pub async fn ensure_deleted(pool: &DbPool) -> Result<(), sqlx::Error> {
    for table in Table::iter().rev() {
        let sql = format!("DROP TABLE IF EXISTS {}", table);
        sqlx::query(&sql).execute(pool).await.map_err(|e| {
            error!(error = %e, table = %table, "Failed to drop table");
            e
        })?;
    }

    info!("Schema dropped");
    Ok(())
}

#[cfg(feature = "mysql")]
mod ddl {
    pub const ROLES: &[&str] = &[r#"
        CREATE TABLE IF NOT EXISTS roles (
            role_id INT NOT NULL AUTO_INCREMENT,
            role_name VARCHAR(255) NOT NULL,
            PRIMARY KEY (role_id)
        )
        "#];

    pub const EMPLOYEES: &[&str] = &[r#"
        CREATE TABLE IF NOT EXISTS employees (
            emp_id INT NOT NULL AUTO_INCREMENT,
            name VARCHAR(100) NOT NULL,
            email VARCHAR(255) NOT NULL,
            password VARCHAR(255) NOT NULL,
            leave_balance INT NOT NULL DEFAULT 20,
            role_id INT NOT NULL,
            PRIMARY KEY (emp_id),
            INDEX ix_employees_role_id (role_id),
            CONSTRAINT fk_employees_roles FOREIGN KEY (role_id)
                REFERENCES roles (role_id) ON DELETE CASCADE
        )
        "#];

    pub const LEAVE_TYPES: &[&str] = &[r#"
        CREATE TABLE IF NOT EXISTS leave_types (
            leave_type_id INT NOT NULL AUTO_INCREMENT,
            type_name VARCHAR(255) NOT NULL,
            max_days INT NOT NULL,
            PRIMARY KEY (leave_type_id)
        )
        "#];

    pub const LEAVE_REQUESTS: &[&str] = &[r#"
        CREATE TABLE IF NOT EXISTS leave_requests (
            leave_id INT NOT NULL AUTO_INCREMENT,
            emp_id INT NOT NULL,
            start_date DATE NOT NULL,
            end_date DATE NOT NULL,
            leave_type_id INT NOT NULL,
            reason TEXT NOT NULL,
            status VARCHAR(255) NOT NULL,
            applied_on DATETIME(6) NOT NULL,
            PRIMARY KEY (leave_id),
            INDEX ix_leave_requests_emp_id (emp_id),
            INDEX ix_leave_requests_leave_type_id (leave_type_id),
            CONSTRAINT fk_leave_requests_employees FOREIGN KEY (emp_id)
                REFERENCES employees (emp_id) ON DELETE CASCADE,
            CONSTRAINT fk_leave_requests_leave_types FOREIGN KEY (leave_type_id)
                REFERENCES leave_types (leave_type_id) ON DELETE CASCADE
        )
        "#];

    pub const NOTIFICATIONS: &[&str] = &[r#"
        CREATE TABLE IF NOT EXISTS notifications (
            not_id INT NOT NULL AUTO_INCREMENT,
            user_id INT NOT NULL,
            message TEXT NOT NULL,
            sent_at DATETIME(6) NOT NULL,
            PRIMARY KEY (not_id),
            INDEX ix_notifications_user_id (user_id),
            CONSTRAINT fk_notifications_employees FOREIGN KEY (user_id)
                REFERENCES employees (emp_id) ON DELETE CASCADE
        )
        "#];
}

// AUTOINCREMENT keeps sqlite from handing out the key of a deleted row again
#[cfg(all(feature = "sqlite", not(feature = "mysql")))]
mod ddl {
    pub const ROLES: &[&str] = &[r#"
        CREATE TABLE IF NOT EXISTS roles (
            role_id INTEGER PRIMARY KEY AUTOINCREMENT,
            role_name TEXT NOT NULL
        )
        "#];

    pub const EMPLOYEES: &[&str] = &[
        r#"
        CREATE TABLE IF NOT EXISTS employees (
            emp_id INTEGER PRIMARY KEY AUTOINCREMENT,
            name VARCHAR(100) NOT NULL,
            email TEXT NOT NULL,
            password TEXT NOT NULL,
            leave_balance INTEGER NOT NULL DEFAULT 20,
            role_id INTEGER NOT NULL REFERENCES roles (role_id) ON DELETE CASCADE
        )
        "#,
        "CREATE INDEX IF NOT EXISTS ix_employees_role_id ON employees (role_id)",
    ];

    pub const LEAVE_TYPES: &[&str] = &[r#"
        CREATE TABLE IF NOT EXISTS leave_types (
            leave_type_id INTEGER PRIMARY KEY AUTOINCREMENT,
            type_name TEXT NOT NULL,
            max_days INTEGER NOT NULL
        )
        "#];

    pub const LEAVE_REQUESTS: &[&str] = &[
        r#"
        CREATE TABLE IF NOT EXISTS leave_requests (
            leave_id INTEGER PRIMARY KEY AUTOINCREMENT,
            emp_id INTEGER NOT NULL REFERENCES employees (emp_id) ON DELETE CASCADE,
            start_date TEXT NOT NULL,
            end_date TEXT NOT NULL,
            leave_type_id INTEGER NOT NULL REFERENCES leave_types (leave_type_id) ON DELETE CASCADE,
            reason TEXT NOT NULL,
            status TEXT NOT NULL,
            applied_on TEXT NOT NULL
        )
        "#,
        "CREATE INDEX IF NOT EXISTS ix_leave_requests_emp_id ON leave_requests (emp_id)",
        "CREATE INDEX IF NOT EXISTS ix_leave_requests_leave_type_id ON leave_requests (leave_type_id)",
    ];

    pub const NOTIFICATIONS: &[&str] = &[
        r#"
        CREATE TABLE IF NOT EXISTS notifications (
            not_id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL REFERENCES employees (emp_id) ON DELETE CASCADE,
            message TEXT NOT NULL,
            sent_at TEXT NOT NULL
        )
        "#,
        "CREATE INDEX IF NOT EXISTS ix_notifications_user_id ON notifications (user_id)",
    ];
}
