use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Entity;
use crate::{error::ValidationError, schema::Table, utils::validation};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Role {
    #[schema(example = 1)]
    pub role_id: i32,

    #[schema(example = "Manager", min_length = 1)]
    pub role_name: String,
}

impl Role {
    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::required("role_name", &self.role_name)
    }
}

impl Entity for Role {
    const TABLE: Table = Table::Roles;
    const KEY: &'static str = "role_id";

    fn key(&self) -> i32 {
        self.role_id
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct NewRole {
    #[schema(example = "Manager", min_length = 1)]
    pub role_name: String,
}

impl NewRole {
    pub fn new(role_name: impl Into<String>) -> Self {
        Self {
            role_name: role_name.into(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::required("role_name", &self.role_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_name_is_required() {
        assert!(NewRole::new("Manager").validate().is_ok());

        let err = NewRole::default().validate().unwrap_err();
        assert_eq!(err.field(), "role_name");

        let role = Role {
            role_id: 1,
            role_name: " ".into(),
        };
        assert!(role.validate().is_err());
    }
}
