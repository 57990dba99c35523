//! # Satchel DB
//!
//! Database connection pool initialization for the Satchel backend.
//!
//! # Example
//!
//! ```ignore
//! use satchel_db::init_db_pool;
//!
//! #[tokio::main]
//! async fn main() {
//!     let pool = init_db_pool().await;
//!     // Use pool for database operations
//! }
//! ```

use std::env;

/// Initializes a PostgreSQL connection pool.
///
/// Reads the database URL from the `DATABASE_URL` environment variable and
/// creates a connection pool. The pool is cheaply cloneable and shared across
/// async tasks.
///
/// # Panics
///
/// Panics if:
/// - `DATABASE_URL` environment variable is not set
/// - Connection to the database fails
///
/// # Note
///
/// Call once during startup and pass the pool down from there.
pub async fn init_db_pool() -> sqlx::PgPool {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    sqlx::PgPool::connect(&database_url)
        .await
        .expect("Failed to connect to database")
}

// Re-export PgPool for convenience
pub use sqlx::PgPool;
