use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::Entity;
use crate::{error::ValidationError, schema::Table, utils::validation};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Notification {
    #[schema(example = 1)]
    pub not_id: i32,

    /// recipient employee
    #[schema(example = 1)]
    pub user_id: i32,

    #[schema(example = "Your leave request was received")]
    pub message: String,

    #[schema(example = "2026-01-01T00:00:00Z", format = "date-time", value_type = String, read_only)]
    pub sent_at: DateTime<Utc>,
}

impl Entity for Notification {
    const TABLE: Table = Table::Notifications;
    const KEY: &'static str = "not_id";

    fn key(&self) -> i32 {
        self.not_id
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct NewNotification {
    #[schema(example = 1)]
    pub user_id: Option<i32>,

    #[schema(example = "Your leave request was received")]
    pub message: String,

    /// Defaults to the insert time
    #[schema(format = "date-time", value_type = String)]
    pub sent_at: Option<DateTime<Utc>>,
}

impl NewNotification {
    pub fn new(user_id: i32, message: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id),
            message: message.into(),
            sent_at: None,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validation::present("user_id", self.user_id)?;
        Ok(())
    }
}
