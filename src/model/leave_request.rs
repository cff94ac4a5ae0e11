use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Entity;
use crate::{error::ValidationError, schema::Table, utils::validation};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct LeaveRequest {
    #[schema(example = 1)]
    pub leave_id: i32,

    /// employee who applied
    #[schema(example = 1)]
    pub emp_id: i32,

    #[schema(example = "2026-01-01", format = "date", value_type = String)]
    pub start_date: NaiveDate,

    #[schema(example = "2026-01-03", format = "date", value_type = String)]
    pub end_date: NaiveDate,

    #[schema(example = 1)]
    pub leave_type_id: i32,

    #[schema(example = "Family event", min_length = 1)]
    pub reason: String,

    /// Free-form; no closed set of values is enforced
    #[schema(example = "Pending", min_length = 1)]
    pub status: String,

    /// Set once on insert
    #[schema(example = "2026-01-01T00:00:00Z", format = "date-time", value_type = String, read_only)]
    pub applied_on: DateTime<Utc>,
}

impl LeaveRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::required("reason", &self.reason)?;
        validation::required("status", &self.status)?;
        Ok(())
    }
}

impl Entity for LeaveRequest {
    const TABLE: Table = Table::LeaveRequests;
    const KEY: &'static str = "leave_id";

    fn key(&self) -> i32 {
        self.leave_id
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct NewLeaveRequest {
    #[schema(example = 1)]
    pub emp_id: Option<i32>,

    #[schema(example = "2026-01-01", format = "date", value_type = String)]
    pub start_date: Option<NaiveDate>,

    #[schema(example = "2026-01-03", format = "date", value_type = String)]
    pub end_date: Option<NaiveDate>,

    #[schema(example = 1)]
    pub leave_type_id: Option<i32>,

    #[schema(example = "Family event", min_length = 1)]
    pub reason: String,

    #[schema(example = "Pending", min_length = 1)]
    pub status: String,

    /// Defaults to the insert time
    #[schema(format = "date-time", value_type = String)]
    pub applied_on: Option<DateTime<Utc>>,
}

impl NewLeaveRequest {
    pub fn new(
        emp_id: i32,
        leave_type_id: i32,
        start_date: NaiveDate,
        end_date: NaiveDate,
        reason: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            emp_id: Some(emp_id),
            start_date: Some(start_date),
            end_date: Some(end_date),
            leave_type_id: Some(leave_type_id),
            reason: reason.into(),
            status: status.into(),
            applied_on: None,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::present("emp_id", self.emp_id)?;
        validation::present("start_date", self.start_date)?;
        validation::present("end_date", self.end_date)?;
        validation::present("leave_type_id", self.leave_type_id)?;
        validation::required("reason", &self.reason)?;
        validation::required("status", &self.status)?;
        Ok(())
    }
}
