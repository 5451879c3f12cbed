// src/models/mod.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

mod date_range;
mod department;

pub use date_range::{DateRange, DateRangeError, DATE_FORMAT};
pub use department::Department;

// ───────────────────────────────────────
// Report rows
// ───────────────────────────────────────

/// Raw aggregate as returned by the sales query; `depto` is still a code.
#[derive(Debug, FromRow)]
pub struct SalesAggregate {
    pub produto: i64,
    pub descricao: String,
    pub depto: i32,
    pub qtde_vendida: f64,
    pub venda_bruta: f64,
    pub empresa: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesReportRow {
    pub produto: i64,
    pub descricao: String,
    pub departamento: Department,
    pub qtde_vendida: f64,
    pub venda_bruta: f64,
    pub empresa: i64,
}

impl From<SalesAggregate> for SalesReportRow {
    fn from(a: SalesAggregate) -> Self {
        Self {
            produto: a.produto,
            descricao: a.descricao,
            departamento: a.depto.into(),
            qtde_vendida: a.qtde_vendida,
            venda_bruta: a.venda_bruta,
            empresa: a.empresa,
        }
    }
}

// ───────────────────────────────────────
// DTOs helpful for endpoints
// ───────────────────────────────────────
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
