use chrono::Utc;

use super::DbSet;
use crate::{
    error::StoreError,
    model::{LeaveRequest, NewLeaveRequest},
};

impl DbSet<'_, LeaveRequest> {
    /// Inserts the request; `applied_on` is stamped now unless supplied.
    pub async fn add(&self, new: NewLeaveRequest) -> Result<LeaveRequest, StoreError> {
        new.validate()?;

        let applied_on = new.applied_on.unwrap_or_else(Utc::now);

        let result = sqlx::query(
            r#"
            INSERT INTO leave_requests
                (emp_id, start_date, end_date, leave_type_id, reason, status, applied_on)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(new.emp_id)
        .bind(new.start_date)
        .bind(new.end_date)
        .bind(new.leave_type_id)
        .bind(&new.reason)
        .bind(&new.status)
        .bind(applied_on)
        .execute(self.pool)
        .await
        .map_err(|e| self.failed("insert", e))?;

        self.inserted(&result).await
    }

    /// `applied_on` is never rewritten.
    pub async fn update(&self, request: &LeaveRequest) -> Result<bool, StoreError> {
        request.validate()?;

        let result = sqlx::query(
            r#"
            UPDATE leave_requests
            SET emp_id = ?, start_date = ?, end_date = ?, leave_type_id = ?, reason = ?, status = ?
            WHERE leave_id = ?
            "#,
        )
        .bind(request.emp_id)
        .bind(request.start_date)
        .bind(request.end_date)
        .bind(request.leave_type_id)
        .bind(&request.reason)
        .bind(&request.status)
        .bind(request.leave_id)
        .execute(self.pool)
        .await
        .map_err(|e| self.failed("update", e))?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn for_employee(&self, emp_id: i32) -> Result<Vec<LeaveRequest>, StoreError> {
        self.filter_by("emp_id", emp_id).await
    }
}
