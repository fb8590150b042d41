use super::criteria::AssetFilter;
use super::types::{AssetColumn, FilterOp, FilterValue, Predicate};

pub struct FilterWhere {
    param_values: Vec<FilterValue>,
    param_index: usize,
}

impl FilterWhere {
    pub fn new(starting_param_index: usize) -> Self {
        Self {
            param_values: vec![],
            param_index: starting_param_index,
        }
    }

    /// Translate criteria into predicates, one per populated field, in a fixed order:
    /// name, address, protocol_type, address_type, dns_host_name, dataset_id.
    pub fn predicates(criteria: &AssetFilter) -> Vec<Predicate> {
        let text = [
            (AssetColumn::Name, FilterOp::Contains, &criteria.name),
            (AssetColumn::Address, FilterOp::Contains, &criteria.address),
            (AssetColumn::ProtocolType, FilterOp::Equals, &criteria.protocol_type),
            (AssetColumn::AddressType, FilterOp::Equals, &criteria.address_type),
            (AssetColumn::DnsHostName, FilterOp::Contains, &criteria.dns_host_name),
        ];

        let mut predicates: Vec<Predicate> = text
            .into_iter()
            .filter_map(|(column, operator, value)| {
                value.as_ref().filter(|v| !v.is_empty()).map(|v| Predicate {
                    column,
                    operator,
                    value: FilterValue::Text(v.clone()),
                })
            })
            .collect();

        if let Some(id) = criteria.dataset_id.filter(|id| *id > 0) {
            predicates.push(Predicate {
                column: AssetColumn::DatasetId,
                operator: FilterOp::Equals,
                value: FilterValue::Int(id),
            });
        }

        predicates
    }

    /// Render predicates as an AND-joined condition and its ordered parameters.
    /// An empty predicate list yields an empty condition.
    pub fn generate(predicates: &[Predicate], starting_param_index: usize) -> (String, Vec<FilterValue>) {
        let mut filter_where = Self::new(starting_param_index);
        let conditions: Vec<String> = predicates.iter().map(|p| filter_where.build_sql_condition(p)).collect();
        (conditions.join(" AND "), filter_where.param_values)
    }

    fn build_sql_condition(&mut self, predicate: &Predicate) -> String {
        let quoted_column = predicate.column.quoted();
        match predicate.operator {
            FilterOp::Contains => {
                let pattern = match &predicate.value {
                    FilterValue::Text(s) => format!("%{}%", escape_like(s)),
                    FilterValue::Int(i) => format!("%{}%", i),
                    FilterValue::BigInt(i) => format!("%{}%", i),
                };
                format!("{} ILIKE {}", quoted_column, self.param(FilterValue::Text(pattern)))
            }
            FilterOp::Equals => format!("{} = {}", quoted_column, self.param(predicate.value.clone())),
        }
    }

    fn param(&mut self, value: FilterValue) -> String {
        self.param_values.push(value);
        self.param_index += 1;
        format!("${}", self.param_index)
    }
}

/// Escape LIKE metacharacters so user input matches literally
pub fn escape_like(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> FilterValue {
        FilterValue::Text(s.to_string())
    }

    #[test]
    fn empty_criteria_produce_no_predicates() {
        assert!(FilterWhere::predicates(&AssetFilter::default()).is_empty());
        let (sql, params) = FilterWhere::generate(&[], 0);
        assert_eq!(sql, "");
        assert!(params.is_empty());
    }

    #[test]
    fn blank_strings_and_non_positive_ids_are_absent() {
        let criteria = AssetFilter {
            name: Some(String::new()),
            dataset_id: Some(0),
            ..Default::default()
        };
        assert!(FilterWhere::predicates(&criteria).is_empty());
    }

    #[test]
    fn fields_follow_fixed_order() {
        let criteria = AssetFilter {
            dataset_id: Some(7),
            dns_host_name: Some("corp".into()),
            address_type: Some("IPv4".into()),
            protocol_type: Some("TCP".into()),
            address: Some("10.0".into()),
            name: Some("srv".into()),
        };
        let columns: Vec<AssetColumn> = FilterWhere::predicates(&criteria).iter().map(|p| p.column).collect();
        assert_eq!(
            columns,
            vec![
                AssetColumn::Name,
                AssetColumn::Address,
                AssetColumn::ProtocolType,
                AssetColumn::AddressType,
                AssetColumn::DnsHostName,
                AssetColumn::DatasetId,
            ]
        );

        let (sql, params) = FilterWhere::generate(&FilterWhere::predicates(&criteria), 0);
        assert_eq!(
            sql,
            "\"name\" ILIKE $1 AND \"address\" ILIKE $2 AND \"protocoltype\" = $3 AND \"addresstype\" = $4 AND \"dnshostname\" ILIKE $5 AND \"datasetid\" = $6"
        );
        assert_eq!(
            params,
            vec![text("%srv%"), text("%10.0%"), text("TCP"), text("IPv4"), text("%corp%"), FilterValue::Int(7)]
        );
    }

    #[test]
    fn placeholders_continue_from_starting_index() {
        let preds = FilterWhere::predicates(&AssetFilter {
            protocol_type: Some("UDP".into()),
            ..Default::default()
        });
        let (sql, _) = FilterWhere::generate(&preds, 3);
        assert_eq!(sql, "\"protocoltype\" = $4");
    }

    #[test]
    fn substring_values_are_escaped() {
        let preds = FilterWhere::predicates(&AssetFilter {
            name: Some("50%_off\\x".into()),
            ..Default::default()
        });
        let (_, params) = FilterWhere::generate(&preds, 0);
        assert_eq!(params, vec![text("%50\\%\\_off\\\\x%")]);
    }

    #[test]
    fn hostile_input_never_reaches_query_text() {
        let preds = FilterWhere::predicates(&AssetFilter {
            name: Some("x'; DROP TABLE networkassets; --".into()),
            ..Default::default()
        });
        let (sql, _) = FilterWhere::generate(&preds, 0);
        assert_eq!(sql, "\"name\" ILIKE $1");
    }
}
