//! Startup schema initialization
//!
//! Creates the `items` table if absent, retrying while the database
//! container is still coming up. The retry policy lives in a reusable
//! helper so other startup dependencies can share it.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use sqlx::PgPool;

/// How many times to attempt a startup operation before giving up.
pub const STARTUP_MAX_ATTEMPTS: u32 = 10;

/// Fixed delay between startup attempts.
pub const STARTUP_RETRY_DELAY: Duration = Duration::from_secs(1);

const CREATE_ITEMS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS items (
    id SERIAL PRIMARY KEY,
    name TEXT NOT NULL,
    description TEXT
)
"#;

/// Execute the idempotent `items` table creation once.
pub async fn ensure_schema(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_ITEMS_TABLE).execute(pool).await?;
    Ok(())
}

/// Ensure the schema exists, retrying on a fixed interval.
///
/// Gives up after [`STARTUP_MAX_ATTEMPTS`] with a warning; the process
/// still starts, and handlers surface connectivity errors at query time.
pub async fn init_schema(pool: &PgPool) {
    let created = with_startup_retries(
        "create items table",
        STARTUP_MAX_ATTEMPTS,
        STARTUP_RETRY_DELAY,
        || ensure_schema(pool),
    )
    .await;

    if created.is_some() {
        tracing::info!("Schema initialization complete");
    }
}

/// Run `op` until it succeeds, up to `max_attempts` with `delay` between
/// attempts. Returns `None` if every attempt failed; the final failure is
/// logged at warn level and the caller is expected to continue.
pub async fn with_startup_retries<T, E, F, Fut>(
    label: &str,
    max_attempts: u32,
    delay: Duration,
    mut op: F,
) -> Option<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    for attempt in 1..=max_attempts {
        match op().await {
            Ok(value) => return Some(value),
            Err(err) if attempt < max_attempts => {
                tracing::debug!(
                    "Startup step '{}' failed (attempt {}/{}): {}",
                    label,
                    attempt,
                    max_attempts,
                    err
                );
                tokio::time::sleep(delay).await;
            }
            Err(err) => {
                tracing::warn!(
                    "Startup step '{}' gave up after {} attempts: {}",
                    label,
                    max_attempts,
                    err
                );
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[tokio::test(start_paused = true)]
    async fn retries_until_success() {
        let calls = Cell::new(0u32);
        let result = with_startup_retries("flaky", 10, STARTUP_RETRY_DELAY, || {
            calls.set(calls.get() + 1);
            let n = calls.get();
            async move {
                if n < 3 {
                    Err("not yet")
                } else {
                    Ok(n)
                }
            }
        })
        .await;

        assert_eq!(result, Some(3));
        assert_eq!(calls.get(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn gives_up_after_max_attempts() {
        let calls = Cell::new(0u32);
        let result: Option<()> =
            with_startup_retries("down", 10, STARTUP_RETRY_DELAY, || {
                calls.set(calls.get() + 1);
                async { Err::<(), _>("connection refused") }
            })
            .await;

        assert_eq!(result, None);
        assert_eq!(calls.get(), 10);
    }

    #[tokio::test]
    async fn first_attempt_success_skips_sleep() {
        let result = with_startup_retries("up", 1, Duration::ZERO, || async { Ok::<_, &str>(42) })
            .await;
        assert_eq!(result, Some(42));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn schema_creation_is_idempotent() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).expect("pool creation failed");

        ensure_schema(&pool).await.expect("first creation failed");
        ensure_schema(&pool).await.expect("second creation failed");
    }
}
