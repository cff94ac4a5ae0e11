use thiserror::Error;

use crate::schema::Table;

/// Field-level rejection raised before any write reaches the database.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },

    #[error("{field} is not a valid email address")]
    InvalidEmail { field: &'static str },
}

impl ValidationError {
    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Required { field }
            | ValidationError::TooLong { field, .. }
            | ValidationError::InvalidEmail { field } => field,
        }
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("referential integrity violation on {table}: {message}")]
    ReferentialIntegrity { table: Table, message: String },

    /// Only surrogate keys are unique in the shipped schema; this surfaces
    /// unique constraints a host adds on top (e.g. on `employees.email`).
    #[error("uniqueness violation on {table}: {message}")]
    Uniqueness { table: Table, message: String },

    #[error("{table} row {key} not found")]
    NotFound { table: Table, key: i32 },

    #[error("{table} assigned a key outside the i32 range")]
    KeyOutOfRange { table: Table },

    #[error("password hashing failed: {0}")]
    Password(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    /// Classifies a driver error raised while touching `table`.
    pub(crate) fn from_db(table: Table, err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.is_foreign_key_violation() {
                return StoreError::ReferentialIntegrity {
                    table,
                    message: db_err.message().to_owned(),
                };
            }
            if db_err.is_unique_violation() {
                return StoreError::Uniqueness {
                    table,
                    message: db_err.message().to_owned(),
                };
            }
        }
        StoreError::Database(err)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{key} must be set")]
    Missing { key: &'static str },

    #[error("{key} has an invalid value: {value}")]
    Invalid { key: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_reports_its_field() {
        assert_eq!(ValidationError::Required { field: "name" }.field(), "name");
        assert_eq!(
            ValidationError::TooLong { field: "name", max: 100 }.to_string(),
            "name must be at most 100 characters"
        );
        assert_eq!(ValidationError::InvalidEmail { field: "email" }.field(), "email");
    }

    #[test]
    fn non_database_errors_are_passed_through() {
        let err = StoreError::from_db(Table::Employees, sqlx::Error::RowNotFound);
        assert!(matches!(err, StoreError::Database(sqlx::Error::RowNotFound)));
    }

    #[test]
    fn store_error_names_the_table() {
        let err = StoreError::NotFound {
            table: Table::LeaveRequests,
            key: 7,
        };
        assert_eq!(err.to_string(), "leave_requests row 7 not found");
    }
}
