use super::DbSet;
use crate::{
    error::StoreError,
    model::{NewRole, Role},
};

impl DbSet<'_, Role> {
    pub async fn add(&self, new: NewRole) -> Result<Role, StoreError> {
        new.validate()?;

        let result = sqlx::query("INSERT INTO roles (role_name) VALUES (?)")
            .bind(&new.role_name)
            .execute(self.pool)
            .await
            .map_err(|e| self.failed("insert", e))?;

        self.inserted(&result).await
    }

    pub async fn update(&self, role: &Role) -> Result<bool, StoreError> {
        role.validate()?;

        let result = sqlx::query("UPDATE roles SET role_name = ? WHERE role_id = ?")
            .bind(&role.role_name)
            .bind(role.role_id)
            .execute(self.pool)
            .await
            .map_err(|e| self.failed("update", e))?;

        Ok(result.rows_affected() > 0)
    }
}
