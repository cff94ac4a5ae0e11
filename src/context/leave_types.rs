use super::DbSet;
use crate::{
    error::StoreError,
    model::{LeaveType, NewLeaveType},
};

impl DbSet<'_, LeaveType> {
    pub async fn add(&self, new: NewLeaveType) -> Result<LeaveType, StoreError> {
        new.validate()?;

        let result = sqlx::query("INSERT INTO leave_types (type_name, max_days) VALUES (?, ?)")
            .bind(&new.type_name)
            .bind(new.max_days)
            .execute(self.pool)
            .await
            .map_err(|e| self.failed("insert", e))?;

        self.inserted(&result).await
    }

    pub async fn update(&self, leave_type: &LeaveType) -> Result<bool, StoreError> {
        leave_type.validate()?;

        let result = sqlx::query(
            "UPDATE leave_types SET type_name = ?, max_days = ? WHERE leave_type_id = ?",
        )
        .bind(&leave_type.type_name)
        .bind(leave_type.max_days)
        .bind(leave_type.leave_type_id)
        .execute(self.pool)
        .await
        .map_err(|e| self.failed("update", e))?;

        Ok(result.rows_affected() > 0)
    }
}
