// src/client/summary.rs
//
// Views derived from a fetched report: filtering, totals, rankings and
// per-store / per-department aggregates.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::{Department, SalesReportRow};

pub const DEFAULT_TOP_N: usize = 5;

const STORE_NAMES: [(i64, &str); 9] = [
    (8, "SAN MARCO"),
    (9, "BONFIM PAULISTA"),
    (14, "JARDIM BOTANICO"),
    (15, "SERTAOZINHO"),
    (16, "TAMANDARE"),
    (17, "NOVA ALIANCA"),
    (18, "PORTUGAL"),
    (20, "HENRIQUE DUMONT"),
    (21, "JARDIM CALIFORNIA"),
];

pub fn store_name(store: i64) -> String {
    STORE_NAMES
        .iter()
        .find(|(id, _)| *id == store)
        .map(|(_, name)| name.to_string())
        .unwrap_or_else(|| format!("EMPRESA {store}"))
}

/// Value per unit; zero when nothing was sold.
pub fn average(value: f64, quantity: f64) -> f64 {
    if quantity > 0.0 { value / quantity } else { 0.0 }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportFilter {
    pub store: Option<i64>,
    pub department: Option<Department>,
    /// Matches the product id or, case-insensitively, the description.
    pub product: Option<String>,
    pub top_n: usize,
}

impl Default for ReportFilter {
    fn default() -> Self {
        Self { store: None, department: None, product: None, top_n: DEFAULT_TOP_N }
    }
}

impl ReportFilter {
    pub fn matches(&self, row: &SalesReportRow) -> bool {
        if self.store.is_some_and(|s| s != row.empresa) {
            return false;
        }
        if self.department.is_some_and(|d| d != row.departamento) {
            return false;
        }
        match self.product.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(needle) => {
                row.produto.to_string().contains(needle)
                    || row.descricao.to_lowercase().contains(&needle.to_lowercase())
            }
        }
    }

    /// Keeps the input order.
    pub fn apply(&self, rows: &[SalesReportRow]) -> Vec<SalesReportRow> {
        rows.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Totals {
    pub quantity: f64,
    pub value: f64,
    pub average: f64,
}

impl Totals {
    pub fn of(rows: &[SalesReportRow]) -> Self {
        let (quantity, value) = rows
            .iter()
            .fold((0.0, 0.0), |(q, v), r| (q + r.qtde_vendida, v + r.venda_bruta));
        Self { quantity, value, average: average(value, quantity) }
    }
}

/// Report order: gross value desc, then product asc, then store asc.
pub fn sort_rows(rows: &mut [SalesReportRow]) {
    rows.sort_by(|a, b| {
        b.venda_bruta
            .total_cmp(&a.venda_bruta)
            .then(a.produto.cmp(&b.produto))
            .then(a.empresa.cmp(&b.empresa))
    });
}

// Stable sorts: equal values keep their position in `rows`.
pub fn top_n(rows: &[SalesReportRow], n: usize) -> Vec<SalesReportRow> {
    let mut ranked = rows.to_vec();
    ranked.sort_by(|a, b| b.venda_bruta.total_cmp(&a.venda_bruta));
    ranked.truncate(n);
    ranked
}

pub fn bottom_n(rows: &[SalesReportRow], n: usize) -> Vec<SalesReportRow> {
    let mut ranked = rows.to_vec();
    ranked.sort_by(|a, b| a.venda_bruta.total_cmp(&b.venda_bruta));
    ranked.truncate(n);
    ranked
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupTotal<K> {
    pub key: K,
    pub label: String,
    pub quantity: f64,
    pub value: f64,
    pub average: f64,
}

fn group_by<K: Ord + Copy>(
    rows: &[SalesReportRow],
    key: impl Fn(&SalesReportRow) -> K,
    label: impl Fn(K) -> String,
) -> Vec<GroupTotal<K>> {
    let mut sums: BTreeMap<K, (f64, f64)> = BTreeMap::new();
    for r in rows {
        let e = sums.entry(key(r)).or_insert((0.0, 0.0));
        e.0 += r.qtde_vendida;
        e.1 += r.venda_bruta;
    }
    sums.into_iter()
        .map(|(k, (quantity, value))| GroupTotal {
            key: k,
            label: label(k),
            quantity,
            value,
            average: average(value, quantity),
        })
        .collect()
}

/// Ordered by store id.
pub fn by_store(rows: &[SalesReportRow]) -> Vec<GroupTotal<i64>> {
    group_by(rows, |r| r.empresa, store_name)
}

/// Ordered by department code, fallback last.
pub fn by_department(rows: &[SalesReportRow]) -> Vec<GroupTotal<Department>> {
    group_by(rows, |r| r.departamento, |d| d.label().to_string())
}

/// Everything the dashboard shows for one filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub rows: Vec<SalesReportRow>,
    pub totals: Totals,
    pub top: Vec<SalesReportRow>,
    pub bottom: Vec<SalesReportRow>,
    pub by_store: Vec<GroupTotal<i64>>,
    pub by_department: Vec<GroupTotal<Department>>,
}

impl Dashboard {
    /// Rankings use the filtered order; `rows` is returned in report order.
    pub fn build(rows: &[SalesReportRow], filter: &ReportFilter) -> Self {
        let mut rows = filter.apply(rows);
        let top = top_n(&rows, filter.top_n);
        let bottom = bottom_n(&rows, filter.top_n);
        sort_rows(&mut rows);
        Self {
            totals: Totals::of(&rows),
            top,
            bottom,
            by_store: by_store(&rows),
            by_department: by_department(&rows),
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(produto: i64, empresa: i64, depto: i32, qtde: f64, valor: f64) -> SalesReportRow {
        SalesReportRow {
            produto,
            descricao: format!("PRODUTO {produto}"),
            departamento: Department::from_code(depto),
            qtde_vendida: qtde,
            venda_bruta: valor,
            empresa,
        }
    }

    fn sample() -> Vec<SalesReportRow> {
        vec![
            row(10, 8, 1, 2.0, 50.0),
            row(11, 9, 2, 4.0, 20.0),
            row(12, 8, 2, 1.0, 20.0),
            row(13, 14, 5, 10.0, 5.0),
            row(14, 9, 99, 3.0, 30.0),
        ]
    }

    #[test]
    fn totals_sum_quantity_and_value() {
        let t = Totals::of(&sample());
        assert_eq!(t.quantity, 20.0);
        assert_eq!(t.value, 125.0);
        assert_eq!(t.average, 6.25);
    }

    #[test]
    fn totals_of_nothing_have_zero_average() {
        assert_eq!(Totals::of(&[]), Totals::default());
    }

    #[test]
    fn top_and_bottom_keep_insertion_order_on_ties() {
        let rows = sample();
        let top: Vec<i64> = top_n(&rows, 3).iter().map(|r| r.produto).collect();
        assert_eq!(top, vec![10, 14, 11]);
        let bottom: Vec<i64> = bottom_n(&rows, 3).iter().map(|r| r.produto).collect();
        assert_eq!(bottom, vec![13, 11, 12]);
        assert_eq!(top_n(&rows, 50).len(), rows.len());
    }

    #[test]
    fn sort_rows_breaks_ties_by_product_then_store() {
        let mut rows = vec![
            row(2, 9, 1, 1.0, 10.0),
            row(1, 9, 1, 1.0, 10.0),
            row(1, 8, 1, 1.0, 10.0),
            row(3, 8, 1, 1.0, 40.0),
        ];
        sort_rows(&mut rows);
        let order: Vec<(i64, i64)> = rows.iter().map(|r| (r.produto, r.empresa)).collect();
        assert_eq!(order, vec![(3, 8), (1, 8), (1, 9), (2, 9)]);
    }

    #[test]
    fn store_groups_match_row_sums() {
        let rows = sample();
        let groups = by_store(&rows);
        let keys: Vec<i64> = groups.iter().map(|g| g.key).collect();
        assert_eq!(keys, vec![8, 9, 14]);

        for g in &groups {
            let qty: f64 = rows.iter().filter(|r| r.empresa == g.key).map(|r| r.qtde_vendida).sum();
            assert_eq!(g.quantity, qty);
        }
        assert_eq!(groups[0].label, "SAN MARCO");
        assert_eq!(groups[0].value, 70.0);
        assert_eq!(groups[0].average, 70.0 / 3.0);
    }

    #[test]
    fn department_average_comes_from_sums() {
        let groups = by_department(&sample());
        let frios = groups.iter().find(|g| g.key == Department::Frios).unwrap();
        // (20 + 20) / (4 + 1), not the mean of 5.0 and 20.0
        assert_eq!(frios.average, 8.0);
        assert_eq!(groups.last().unwrap().key, Department::Other);
    }

    #[test]
    fn unknown_store_gets_generic_name() {
        assert_eq!(store_name(8), "SAN MARCO");
        assert_eq!(store_name(42), "EMPRESA 42");
    }

    #[test]
    fn filter_combines_store_department_and_product_text() {
        let mut rows = sample();
        rows[1].descricao = "Cafe Torrado".into();

        let by_text = ReportFilter { product: Some("CAFE".into()), ..Default::default() };
        assert_eq!(by_text.apply(&rows).len(), 1);

        let by_id = ReportFilter { product: Some("13".into()), ..Default::default() };
        assert_eq!(by_id.apply(&rows)[0].produto, 13);

        let store_and_dept = ReportFilter {
            store: Some(8),
            department: Some(Department::Frios),
            ..Default::default()
        };
        let hit = store_and_dept.apply(&rows);
        assert_eq!(hit.len(), 1);
        assert_eq!(hit[0].produto, 12);

        let blank = ReportFilter { product: Some("  ".into()), ..Default::default() };
        assert_eq!(blank.apply(&rows).len(), rows.len());
    }

    #[test]
    fn dashboard_is_computed_on_filtered_rows() {
        let filter = ReportFilter { store: Some(9), top_n: 1, ..Default::default() };
        let dash = Dashboard::build(&sample(), &filter);
        assert_eq!(dash.rows.len(), 2);
        assert_eq!(dash.totals.value, 50.0);
        assert_eq!(dash.top[0].produto, 14);
        assert_eq!(dash.bottom[0].produto, 11);
        assert_eq!(dash.by_store.len(), 1);
    }

    #[test]
    fn dashboard_rows_are_in_report_order() {
        let rows = vec![
            row(5, 9, 1, 1.0, 10.0),
            row(3, 9, 1, 1.0, 10.0),
            row(3, 8, 1, 1.0, 10.0),
            row(7, 8, 1, 1.0, 90.0),
        ];
        let dash = Dashboard::build(&rows, &ReportFilter::default());
        let order: Vec<(i64, i64)> = dash.rows.iter().map(|r| (r.produto, r.empresa)).collect();
        assert_eq!(order, vec![(7, 8), (3, 8), (3, 9), (5, 9)]);
        // ties in the ranking keep the fetched order
        let bottom: Vec<i64> = dash.bottom.iter().map(|r| r.produto).collect();
        assert_eq!(bottom, vec![5, 3, 3, 7]);
    }
}
