use anyhow::{Context, Result};
use sqlx::{postgres::PgPoolOptions, Executor, PgPool};
use uuid::Uuid;

/// A throwaway schema holding a fresh copy of `sql/schema.sql`
pub struct TestDb {
    pub pool: PgPool,
    admin: PgPool,
    schema: String,
}

impl TestDb {
    /// `None` when DATABASE_URL is unset so suites can skip without a server
    pub async fn connect() -> Result<Option<Self>> {
        let _ = dotenvy::dotenv();
        let url = match std::env::var("DATABASE_URL") {
            Ok(url) if !url.trim().is_empty() => url,
            _ => {
                eprintln!("DATABASE_URL not set; skipping database test");
                return Ok(None);
            }
        };

        let admin = PgPool::connect(&url).await.context("failed to connect to DATABASE_URL")?;
        let schema = format!("test_{}", Uuid::new_v4().simple());
        admin
            .execute(format!("CREATE SCHEMA {}", schema).as_str())
            .await
            .context("failed to create test schema")?;

        let search_path = schema.clone();
        let pool = PgPoolOptions::new()
            .max_connections(4)
            .after_connect(move |conn, _meta| {
                let statement = format!("SET search_path TO {}", search_path);
                Box::pin(async move {
                    conn.execute(statement.as_str()).await?;
                    Ok(())
                })
            })
            .connect(&url)
            .await
            .context("failed to open schema pool")?;

        pool.execute(include_str!("../../sql/schema.sql"))
            .await
            .context("failed to apply schema")?;

        Ok(Some(Self { pool, admin, schema }))
    }

    pub async fn cleanup(self) -> Result<()> {
        self.pool.close().await;
        self.admin
            .execute(format!("DROP SCHEMA {} CASCADE", self.schema).as_str())
            .await?;
        Ok(())
    }
}

/// Insert a row with an explicit creation time so ordering is deterministic
pub async fn seed_asset(pool: &PgPool, name: &str, protocol_type: &str, dns_host_name: &str, minutes_ago: i32) -> Result<()> {
    sqlx::query(
        r#"INSERT INTO "networkassets" ("name", "address", "protocoltype", "dnshostname", "datasetid", "createdate")
           VALUES ($1, '10.0.0.1', $2, $3, 1, NOW() - make_interval(mins => $4))"#,
    )
    .bind(name)
    .bind(protocol_type)
    .bind(dns_host_name)
    .bind(minutes_ago)
    .execute(pool)
    .await?;
    Ok(())
}
