use super::criteria::{AssetFilter, Pagination};
use super::filter_order::FilterOrder;
use super::filter_where::FilterWhere;
use super::types::{column_list, AssetColumn, FilterOp, FilterValue, Predicate, SqlResult, ASSET_TABLE, SUMMARY_COLUMNS};

/// An immutable predicate set over the asset table.
///
/// The listing, counting and existence queries are all rendered from the same
/// predicates through the same `FilterWhere::generate` call, so their WHERE
/// clauses and bound values are identical by construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    predicates: Vec<Predicate>,
}

impl Filter {
    pub fn from_criteria(criteria: &AssetFilter) -> Self {
        Self {
            predicates: FilterWhere::predicates(criteria),
        }
    }

    /// Single exact-match predicate
    pub fn exact(column: AssetColumn, value: impl Into<String>) -> Self {
        Self {
            predicates: vec![Predicate {
                column,
                operator: FilterOp::Equals,
                value: FilterValue::Text(value.into()),
            }],
        }
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    /// Paged listing of summary columns, newest first
    pub fn to_sql(&self, page: Pagination) -> SqlResult {
        let where_result = self.to_where_sql();
        let mut params = where_result.params;

        let next = params.len();
        let limit_clause = format!("LIMIT ${} OFFSET ${}", next + 1, next + 2);
        params.push(FilterValue::BigInt(page.limit));
        params.push(FilterValue::BigInt(page.offset()));

        let query = [
            format!("SELECT {}", column_list(SUMMARY_COLUMNS)),
            format!("FROM \"{}\"", ASSET_TABLE),
            Self::where_keyword(&where_result.query),
            FilterOrder::generate(&FilterOrder::newest_first()),
            limit_clause,
        ]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

        SqlResult { query, params }
    }

    pub fn to_where_sql(&self) -> SqlResult {
        let (query, params) = FilterWhere::generate(&self.predicates, 0);
        SqlResult { query, params }
    }

    /// Unpaged count over the same predicates
    pub fn to_count_sql(&self) -> SqlResult {
        let where_result = self.to_where_sql();
        let query = [
            format!("SELECT COUNT(*) AS count FROM \"{}\"", ASSET_TABLE),
            Self::where_keyword(&where_result.query),
        ]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
        SqlResult { query, params: where_result.params }
    }

    /// Probe for at least one matching row
    pub fn to_exists_sql(&self) -> SqlResult {
        let where_result = self.to_where_sql();
        let query = [
            format!("SELECT 1 FROM \"{}\"", ASSET_TABLE),
            Self::where_keyword(&where_result.query),
            "LIMIT 1".to_string(),
        ]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
        SqlResult { query, params: where_result.params }
    }

    fn where_keyword(condition: &str) -> String {
        if condition.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", condition)
        }
    }
}
