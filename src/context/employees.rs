use tracing::error;

use super::DbSet;
use crate::{
    error::StoreError,
    model::{Employee, EmployeeWithRole, NewEmployee, Role},
    utils::password::hash_password,
};

impl DbSet<'_, Employee> {
    /// Inserts the employee with its password hashed; `leave_balance` falls back to 20.
    pub async fn add(&self, new: NewEmployee) -> Result<Employee, StoreError> {
        new.validate()?;

        let hashed = hash_password(&new.password).map_err(|e| {
            error!(error = %e, "Failed to hash password");
            StoreError::Password(e.to_string())
        })?;

        let result = sqlx::query(
            r#"
            INSERT INTO employees
                (name, email, password, leave_balance, role_id)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&new.name)
        .bind(&new.email)
        .bind(&hashed)
        .bind(new.leave_balance_or_default())
        .bind(new.role_id)
        .execute(self.pool)
        .await
        .map_err(|e| self.failed("insert", e))?;

        self.inserted(&result).await
    }

    /// Writes every column but the key. `password` is stored as given, so
    /// callers changing it must hash it first.
    pub async fn update(&self, employee: &Employee) -> Result<bool, StoreError> {
        employee.validate()?;

        let result = sqlx::query(
            r#"
            UPDATE employees
            SET name = ?, email = ?, password = ?, leave_balance = ?, role_id = ?
            WHERE emp_id = ?
            "#,
        )
        .bind(&employee.name)
        .bind(&employee.email)
        .bind(&employee.password)
        .bind(employee.leave_balance)
        .bind(employee.role_id)
        .bind(employee.emp_id)
        .execute(self.pool)
        .await
        .map_err(|e| self.failed("update", e))?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn find_with_role(&self, emp_id: i32) -> Result<Option<EmployeeWithRole>, StoreError> {
        let Some(employee) = self.find(emp_id).await? else {
            return Ok(None);
        };
        let role = DbSet::<Role>::new(self.pool).get(employee.role_id).await?;

        Ok(Some(EmployeeWithRole { employee, role }))
    }

    pub async fn in_role(&self, role_id: i32) -> Result<Vec<Employee>, StoreError> {
        self.filter_by("role_id", role_id).await
    }
}
