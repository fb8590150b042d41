use super::types::{AssetColumn, FilterOrderInfo, SortDirection};

pub struct FilterOrder;

impl FilterOrder {
    /// Listing order: newest records first
    pub fn newest_first() -> Vec<FilterOrderInfo> {
        vec![FilterOrderInfo {
            column: AssetColumn::CreateDate,
            sort: SortDirection::Desc,
        }]
    }

    pub fn generate(infos: &[FilterOrderInfo]) -> String {
        if infos.is_empty() {
            return String::new();
        }
        let parts: Vec<String> = infos
            .iter()
            .map(|i| format!("{} {}", i.column.quoted(), i.sort.to_sql()))
            .collect();
        format!("ORDER BY {}", parts.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_newest_first() {
        assert_eq!(FilterOrder::generate(&FilterOrder::newest_first()), "ORDER BY \"createdate\" DESC");
    }

    #[test]
    fn empty_order_renders_nothing() {
        assert_eq!(FilterOrder::generate(&[]), "");
    }
}
