use anyhow::Context;
use dotenvy::dotenv;
use tracing::info;
use tracing_appender::rolling;

use lms::{Config, LmsContext};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = Config::from_env()?;

    // Rolling daily log
    let file_appender = rolling::daily(&config.log_dir, "lms.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(config.log_level)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    info!("Schema bootstrap starting...");

    let ctx = LmsContext::connect(&config)
        .await
        .context("failed to connect to database")?;

    ctx.ensure_created()
        .await
        .context("failed to create schema")?;

    let roles = ctx.roles().count().await?;
    let employees = ctx.employees().count().await?;
    let leave_types = ctx.leave_types().count().await?;
    let leave_requests = ctx.leave_requests().count().await?;
    let notifications = ctx.notifications().count().await?;

    info!(
        roles,
        employees,
        leave_types,
        leave_requests,
        notifications,
        "Schema ready"
    );

    Ok(())
}
