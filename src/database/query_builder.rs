use sqlx::{self, postgres::PgArguments, FromRow, PgPool, Row};

use crate::database::manager::DatabaseError;
use crate::filter::types::{FilterValue, SqlResult};

/// Executes rendered filter SQL, binding parameters in placeholder order
pub struct BoundQuery {
    sql: SqlResult,
}

impl BoundQuery {
    pub fn new(sql: SqlResult) -> Self {
        Self { sql }
    }

    pub async fn select_all<T>(&self, pool: &PgPool) -> Result<Vec<T>, DatabaseError>
    where
        T: for<'r> FromRow<'r, sqlx::postgres::PgRow> + Send + Unpin,
    {
        let mut q = sqlx::query_as::<_, T>(&self.sql.query);
        for p in self.sql.params.iter() {
            q = bind_param_query_as(q, p);
        }
        let rows = q.fetch_all(pool).await?;
        Ok(rows)
    }

    /// Runs a `COUNT(*) AS count` query
    pub async fn count(&self, pool: &PgPool) -> Result<i64, DatabaseError> {
        let mut q = sqlx::query(&self.sql.query);
        for p in self.sql.params.iter() {
            q = bind_param_query(q, p);
        }
        let row = q.fetch_one(pool).await?;
        let count: i64 = row.try_get("count")?;
        Ok(count)
    }

    /// True when the query yields at least one row
    pub async fn exists(&self, pool: &PgPool) -> Result<bool, DatabaseError> {
        let mut q = sqlx::query(&self.sql.query);
        for p in self.sql.params.iter() {
            q = bind_param_query(q, p);
        }
        Ok(q.fetch_optional(pool).await?.is_some())
    }
}

fn bind_param_query<'q>(
    q: sqlx::query::Query<'q, sqlx::Postgres, PgArguments>,
    v: &FilterValue,
) -> sqlx::query::Query<'q, sqlx::Postgres, PgArguments> {
    match v {
        FilterValue::Text(s) => q.bind(s.clone()),
        FilterValue::Int(i) => q.bind(*i),
        FilterValue::BigInt(i) => q.bind(*i),
    }
}

fn bind_param_query_as<'q, O>(
    q: sqlx::query::QueryAs<'q, sqlx::Postgres, O, PgArguments>,
    v: &FilterValue,
) -> sqlx::query::QueryAs<'q, sqlx::Postgres, O, PgArguments>
where
    O: for<'r> FromRow<'r, sqlx::postgres::PgRow>,
{
    match v {
        FilterValue::Text(s) => q.bind(s.clone()),
        FilterValue::Int(i) => q.bind(*i),
        FilterValue::BigInt(i) => q.bind(*i),
    }
}
