//! Data model for a leave-management application: roles, employees, leave
//! types, leave requests and notifications, persisted through [`LmsContext`].

pub mod config;
pub mod context;
pub mod db;
pub mod docs;
pub mod error;
pub mod model;
pub mod schema;
pub mod utils;

pub use config::Config;
pub use context::{DbSet, LmsContext};
pub use error::{ConfigError, StoreError, ValidationError};
pub use schema::Table;
