use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Entity;
use crate::{error::ValidationError, schema::Table, utils::validation};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct LeaveType {
    #[schema(example = 1)]
    pub leave_type_id: i32,

    #[schema(example = "Annual", min_length = 1)]
    pub type_name: String,

    #[schema(example = 20)]
    pub max_days: i32,
}

impl LeaveType {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::required("type_name", &self.type_name)
    }
}

impl Entity for LeaveType {
    const TABLE: Table = Table::LeaveTypes;
    const KEY: &'static str = "leave_type_id";

    fn key(&self) -> i32 {
        self.leave_type_id
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct NewLeaveType {
    #[schema(example = "Annual", min_length = 1)]
    pub type_name: String,

    #[schema(example = 20)]
    pub max_days: Option<i32>,
}

impl NewLeaveType {
    pub fn new(type_name: impl Into<String>, max_days: i32) -> Self {
        Self {
            type_name: type_name.into(),
            max_days: Some(max_days),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::required("type_name", &self.type_name)?;
        validation::present("max_days", self.max_days)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_name_and_max_days_are_required() {
        assert!(NewLeaveType::new("Sick", 10).validate().is_ok());

        let missing_days = NewLeaveType {
            type_name: "Sick".into(),
            max_days: None,
        };
        assert_eq!(missing_days.validate().unwrap_err().field(), "max_days");

        assert_eq!(
            NewLeaveType::default().validate().unwrap_err().field(),
            "type_name"
        );
    }

    #[test]
    fn zero_max_days_is_accepted() {
        // required means present; no range is declared
        assert!(NewLeaveType::new("Unpaid", 0).validate().is_ok());
    }
}
