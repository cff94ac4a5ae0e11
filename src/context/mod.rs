//! The aggregating context: one handle over the pool, one collection per entity.

mod employees;
mod leave_requests;
mod leave_types;
mod notifications;
mod roles;

use std::marker::PhantomData;

use tracing::{debug, error};

use crate::{
    config::Config,
    db::{self, DbPool, DbQueryResult},
    error::StoreError,
    model::{Employee, Entity, LeaveRequest, LeaveType, Notification, Role},
    schema,
};

/// Passed explicitly to whatever needs storage. Cloning shares the pool.
#[derive(Clone)]
pub struct LmsContext {
    pool: DbPool,
}

impl LmsContext {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn connect(config: &Config) -> Result<Self, StoreError> {
        let pool = db::init_db(config).await.map_err(|e| {
            error!(error = %e, "Failed to connect to database");
            e
        })?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    pub async fn ensure_created(&self) -> Result<(), StoreError> {
        Ok(schema::ensure_created(&self.pool).await?)
    }

    pub async fn ensure_deleted(&self) -> Result<(), StoreError> {
        Ok(schema::ensure_deleted(&self.pool).await?)
    }

    pub fn roles(&self) -> DbSet<'_, Role> {
        DbSet::new(&self.pool)
    }

    pub fn employees(&self) -> DbSet<'_, Employee> {
        DbSet::new(&self.pool)
    }

    pub fn leave_types(&self) -> DbSet<'_, LeaveType> {
        DbSet::new(&self.pool)
    }

    pub fn leave_requests(&self) -> DbSet<'_, LeaveRequest> {
        DbSet::new(&self.pool)
    }

    pub fn notifications(&self) -> DbSet<'_, Notification> {
        DbSet::new(&self.pool)
    }
}

/// Rows of one entity table.
pub struct DbSet<'c, E> {
    pool: &'c DbPool,
    entity: PhantomData<fn() -> E>,
}

impl<'c, E: Entity> DbSet<'c, E> {
    fn new(pool: &'c DbPool) -> Self {
        Self {
            pool,
            entity: PhantomData,
        }
    }

    pub async fn find(&self, key: i32) -> Result<Option<E>, StoreError> {
        let sql = format!("SELECT * FROM {} WHERE {} = ?", E::TABLE, E::KEY);

        sqlx::query_as::<_, E>(&sql)
            .bind(key)
            .fetch_optional(self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, table = %E::TABLE, key, "Failed to fetch row");
                StoreError::from_db(E::TABLE, e)
            })
    }

    /// Like [`find`](Self::find), but a missing row is an error.
    pub async fn get(&self, key: i32) -> Result<E, StoreError> {
        self.find(key).await?.ok_or(StoreError::NotFound {
            table: E::TABLE,
            key,
        })
    }

    pub async fn list(&self) -> Result<Vec<E>, StoreError> {
        let sql = format!("SELECT * FROM {} ORDER BY {}", E::TABLE, E::KEY);

        sqlx::query_as::<_, E>(&sql)
            .fetch_all(self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, table = %E::TABLE, "Failed to list rows");
                StoreError::from_db(E::TABLE, e)
            })
    }

    pub async fn count(&self) -> Result<i64, StoreError> {
        let sql = format!("SELECT COUNT(*) FROM {}", E::TABLE);

        sqlx::query_scalar::<_, i64>(&sql)
            .fetch_one(self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, table = %E::TABLE, "Failed to count rows");
                StoreError::from_db(E::TABLE, e)
            })
    }

    /// Deletes the row; dependent rows go with it (`ON DELETE CASCADE`).
    pub async fn remove(&self, key: i32) -> Result<bool, StoreError> {
        let sql = format!("DELETE FROM {} WHERE {} = ?", E::TABLE, E::KEY);

        let result = sqlx::query(&sql)
            .bind(key)
            .execute(self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, table = %E::TABLE, key, "Failed to delete row");
                StoreError::from_db(E::TABLE, e)
            })?;

        debug!(table = %E::TABLE, key, removed = result.rows_affected(), "Row removed");
        Ok(result.rows_affected() > 0)
    }

    /// Rows whose foreign-key `column` equals `key`, ordered by primary key.
    async fn filter_by(&self, column: &str, key: i32) -> Result<Vec<E>, StoreError> {
        let sql = format!(
            "SELECT * FROM {} WHERE {} = ? ORDER BY {}",
            E::TABLE,
            column,
            E::KEY
        );

        sqlx::query_as::<_, E>(&sql)
            .bind(key)
            .fetch_all(self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, table = %E::TABLE, column, key, "Failed to filter rows");
                StoreError::from_db(E::TABLE, e)
            })
    }

    /// Re-reads the row an INSERT just created.
    async fn inserted(&self, result: &DbQueryResult) -> Result<E, StoreError> {
        let key = db::inserted_key(result).ok_or(StoreError::KeyOutOfRange { table: E::TABLE })?;
        debug!(table = %E::TABLE, key, "Row inserted");
        self.get(key).await
    }

    fn failed(&self, action: &'static str, e: sqlx::Error) -> StoreError {
        error!(error = %e, table = %E::TABLE, action, "Write failed");
        StoreError::from_db(E::TABLE, e)
    }
}
