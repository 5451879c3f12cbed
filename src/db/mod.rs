// src/db/mod.rs

use sqlx::postgres::PgPoolOptions;
use sqlx::{PgConnection, Pool, Postgres};
use tracing::info;

use crate::config::Config;
use crate::models::{DateRange, SalesAggregate};

/// Store that never appears in sales reports.
pub const EXCLUDED_STORE: i64 = 19;

pub async fn connect(config: &Config) -> anyhow::Result<Pool<Postgres>> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(config.db_acquire_timeout)
        .connect(&config.database_url)
        .await?;

    info!(max_connections = config.db_max_connections, "connected to PostgreSQL");
    Ok(pool)
}

/// Sums sales per (product, department, description, store) over an inclusive range.
///
/// Products without a department or description come back as code 0 and `''`.
pub async fn sales_report(
    conn: &mut PgConnection,
    range: &DateRange,
) -> Result<Vec<SalesAggregate>, sqlx::Error> {
    sqlx::query_as::<_, SalesAggregate>(
        r#"
        SELECT v.produto::int8                AS produto,
               COALESCE(p.descritivo, '')     AS descricao,
               COALESCE(p.depto, 0)::int4     AS depto,
               SUM(v.qtde)::float8            AS qtde_vendida,
               SUM(v.valor)::float8           AS venda_bruta,
               v.empresa::int8                AS empresa
          FROM vwt_vendas_diarias v
          JOIN produtos p ON p.id = v.produto
         WHERE v.data BETWEEN $1 AND $2
           AND v.empresa <> $3
           AND v.valor > 0
         GROUP BY v.produto, p.depto, p.descritivo, v.empresa
         ORDER BY SUM(v.valor) DESC, v.produto ASC, v.empresa ASC
        "#,
    )
    .bind(range.start)
    .bind(range.end)
    .bind(EXCLUDED_STORE)
    .fetch_all(conn)
    .await
}
