use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{Entity, role::Role};
use crate::{error::ValidationError, schema::Table, utils::validation};

/// Leave days a new employee starts with unless told otherwise.
pub const DEFAULT_LEAVE_BALANCE: i32 = 20;

pub const NAME_MAX_LEN: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "emp_id": 1,
        "name": "John Doe",
        "email": "john.doe@company.com",
        "leave_balance": 20,
        "role_id": 1
    })
)]
pub struct Employee {
    #[schema(example = 1)]
    pub emp_id: i32,

    #[schema(example = "John Doe", min_length = 1, max_length = 100)]
    pub name: String,

    #[schema(example = "john.doe@company.com", format = "email", value_type = String)]
    pub email: String,

    /// Argon2 PHC string; never serialized
    #[serde(skip_serializing, default)]
    #[schema(write_only, format = "password", value_type = String)]
    pub password: String,

    #[schema(example = 20)]
    pub leave_balance: i32,

    #[schema(example = 1)]
    pub role_id: i32,
}

impl Employee {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_identity(&self.name, &self.email, &self.password)
    }
}

impl Entity for Employee {
    const TABLE: Table = Table::Employees;
    const KEY: &'static str = "emp_id";

    fn key(&self) -> i32 {
        self.emp_id
    }
}

/// Insert payload. `password` is plaintext here and hashed on insert.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct NewEmployee {
    #[schema(example = "John Doe", min_length = 1, max_length = 100)]
    pub name: String,

    #[schema(example = "john.doe@company.com", format = "email", value_type = String)]
    pub email: String,

    #[schema(example = "s3cret", format = "password", value_type = String)]
    pub password: String,

    /// Defaults to 20
    #[schema(example = 20)]
    pub leave_balance: Option<i32>,

    #[schema(example = 1)]
    pub role_id: Option<i32>,
}

impl NewEmployee {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        role_id: i32,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            leave_balance: None,
            role_id: Some(role_id),
        }
    }

    pub fn with_leave_balance(mut self, leave_balance: i32) -> Self {
        self.leave_balance = Some(leave_balance);
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_identity(&self.name, &self.email, &self.password)?;
        validation::present("role_id", self.role_id)?;
        Ok(())
    }

    pub fn leave_balance_or_default(&self) -> i32 {
        self.leave_balance.unwrap_or(DEFAULT_LEAVE_BALANCE)
    }
}

fn check_identity(name: &str, email: &str, password: &str) -> Result<(), ValidationError> {
    validation::required("name", name)?;
    validation::max_length("name", name, NAME_MAX_LEN)?;
    validation::required("email", email)?;
    validation::email("email", email)?;
    validation::required("password", password)?;
    Ok(())
}

/// Employee resolved together with its role.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeWithRole {
    #[serde(flatten)]
    pub employee: Employee,
    pub role: Role,
}
