use chrono::Utc;

use super::DbSet;
use crate::{
    error::StoreError,
    model::{NewNotification, Notification},
};

impl DbSet<'_, Notification> {
    pub async fn add(&self, new: NewNotification) -> Result<Notification, StoreError> {
        new.validate()?;

        let sent_at = new.sent_at.unwrap_or_else(Utc::now);

        let result =
            sqlx::query("INSERT INTO notifications (user_id, message, sent_at) VALUES (?, ?, ?)")
                .bind(new.user_id)
                .bind(&new.message)
                .bind(sent_at)
                .execute(self.pool)
                .await
                .map_err(|e| self.failed("insert", e))?;

        self.inserted(&result).await
    }

    /// `sent_at` is never rewritten.
    pub async fn update(&self, notification: &Notification) -> Result<bool, StoreError> {
        let result =
            sqlx::query("UPDATE notifications SET user_id = ?, message = ? WHERE not_id = ?")
                .bind(notification.user_id)
                .bind(&notification.message)
                .bind(notification.not_id)
                .execute(self.pool)
                .await
                .map_err(|e| self.failed("update", e))?;

        Ok(result.rows_affected() > 0)
    }

    /// Notifications addressed to `user_id`, oldest first.
    pub async fn for_recipient(&self, user_id: i32) -> Result<Vec<Notification>, StoreError> {
        self.filter_by("user_id", user_id).await
    }
}
