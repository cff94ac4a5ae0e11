use crate::config::Config;

#[cfg(feature = "mysql")]
pub type Db = sqlx::MySql;

#[cfg(all(feature = "sqlite", not(feature = "mysql")))]
pub type Db = sqlx::Sqlite;

#[cfg(not(any(feature = "mysql", feature = "sqlite")))]
compile_error!("enable the `mysql` or the `sqlite` feature to pick a database backend");

pub type DbPool = sqlx::Pool<Db>;
pub type DbRow = <Db as sqlx::Database>::Row;
pub type DbQueryResult = <Db as sqlx::Database>::QueryResult;

#[cfg(feature = "mysql")]
pub async fn init_db(config: &Config) -> Result<DbPool, sqlx::Error> {
    use sqlx::mysql::MySqlPoolOptions;

    MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.database_url)
        .await
}

#[cfg(all(feature = "sqlite", not(feature = "mysql")))]
pub async fn init_db(config: &Config) -> Result<DbPool, sqlx::Error> {
    use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
    use std::str::FromStr;

    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(true); // constraints are off by default in sqlite

    SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await
}

/// Key the database assigned to the row just inserted.
#[cfg(feature = "mysql")]
pub(crate) fn inserted_key(result: &DbQueryResult) -> Option<i32> {
    i32::try_from(result.last_insert_id()).ok()
}

#[cfg(all(feature = "sqlite", not(feature = "mysql")))]
pub(crate) fn inserted_key(result: &DbQueryResult) -> Option<i32> {
    i32::try_from(result.last_insert_rowid()).ok()
}
