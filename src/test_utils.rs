//! Test utilities with lazy testcontainers support
//!
//! The Postgres container is started lazily on first use and shared across
//! tests. Tests share one database, so every test works on rows it created
//! itself (unique names and categories) instead of truncating.

#[cfg(test)]
pub mod containers {
    use std::sync::OnceLock;

    use testcontainers::{ContainerAsync, runners::AsyncRunner};
    use testcontainers_modules::postgres::Postgres;

    static POSTGRES: OnceLock<ContainerAsync<Postgres>> = OnceLock::new();

    /// Get or start a PostgreSQL container (lazy initialization)
    pub async fn get_postgres() -> &'static ContainerAsync<Postgres> {
        if POSTGRES.get().is_none() {
            let container = Postgres::default()
                .with_user("computest")
                .with_password("computest_test")
                .with_db_name("computest_test")
                .start()
                .await
                .expect("Failed to start PostgreSQL container");

            let _ = POSTGRES.set(container);
        }
        POSTGRES.get().unwrap()
    }

    /// Get PostgreSQL connection URL from the container
    pub async fn postgres_url() -> String {
        let container = get_postgres().await;
        let host = container.get_host().await.unwrap();
        let port = container.get_host_port_ipv4(5432).await.unwrap();
        format!(
            "postgres://computest:computest_test@{}:{}/computest_test",
            host, port
        )
    }
}

#[cfg(test)]
pub mod db {
    use chrono::{DateTime, Utc};
    use sqlx::PgPool;

    use super::containers;

    /// Connect to the shared test database and run migrations
    pub async fn test_pool() -> PgPool {
        let pool = PgPool::connect(&containers::postgres_url().await)
            .await
            .expect("Failed to connect to test database");

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .expect("Failed to run migrations");

        pool
    }

    /// Insert a user row; names are unique, pick one per test
    pub async fn insert_user(pool: &PgPool, name: &str) -> i64 {
        sqlx::query_scalar(r#"INSERT INTO users (name, email) VALUES ($1, $2) RETURNING id"#)
            .bind(name)
            .bind(format!("{name}@example.com"))
            .fetch_one(pool)
            .await
            .expect("Failed to insert user")
    }

    /// Insert a challenge row
    pub async fn insert_challenge(
        pool: &PgPool,
        name: &str,
        category: &str,
        value: i32,
        hidden: bool,
    ) -> i64 {
        sqlx::query_scalar(
            r#"
            INSERT INTO challenges (name, category, value, hidden)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(name)
        .bind(category)
        .bind(value)
        .bind(hidden)
        .fetch_one(pool)
        .await
        .expect("Failed to insert challenge")
    }

    /// Insert a solve with an explicit timestamp
    pub async fn insert_solve_at(
        pool: &PgPool,
        user_id: i64,
        challenge_id: i64,
        submitted_at: DateTime<Utc>,
    ) -> i64 {
        sqlx::query_scalar(
            r#"
            INSERT INTO solves (user_id, challenge_id, submission, submitted_at)
            VALUES ($1, $2, 'flag', $3)
            RETURNING id
            "#,
        )
        .bind(user_id)
        .bind(challenge_id)
        .bind(submitted_at)
        .fetch_one(pool)
        .await
        .expect("Failed to insert solve")
    }
}
