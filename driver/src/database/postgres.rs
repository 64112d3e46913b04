use std::future::Future;
use std::time::Duration;

use error_stack::Report;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Error, Pool, Postgres};

use kernel::KernelError;

use crate::env;
use crate::error::ConvertError;

pub use self::book::*;

mod book;

static POSTGRES_URL: &str = "POSTGRES_URL";

/// Ceiling on any single database interaction, pool acquisition included.
pub(in crate::database) const OPERATION_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Clone)]
pub struct PostgresDatabase {
    pool: Pool<Postgres>,
}

impl PostgresDatabase {
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        let url = env(POSTGRES_URL)?;
        let pool = PgPoolOptions::new()
            .acquire_timeout(OPERATION_TIMEOUT)
            .connect(&url)
            .await
            .convert_error()?;
        tracing::debug!("connected to postgres");
        Ok(Self { pool })
    }

    pub(in crate::database) fn pool(&self) -> &Pool<Postgres> {
        &self.pool
    }
}

pub(in crate::database) async fn with_timeout<T, F>(query: F) -> error_stack::Result<T, KernelError>
where
    F: Future<Output = Result<T, Error>>,
{
    match tokio::time::timeout(OPERATION_TIMEOUT, query).await {
        Ok(result) => result.convert_error(),
        Err(_) => Err(Report::new(KernelError::Timeout).attach_printable("query did not finish in time")),
    }
}

impl<T> ConvertError for Result<T, Error> {
    type Ok = T;
    fn convert_error(self) -> error_stack::Result<T, KernelError> {
        self.map_err(|error| {
            let context = match &error {
                Error::PoolTimedOut => KernelError::Timeout,
                Error::Database(e) if e.is_unique_violation() => KernelError::NotUnique,
                _ => KernelError::Internal,
            };
            Report::from(error).change_context(context)
        })
    }
}
