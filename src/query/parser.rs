//! Grammar of the list query parameters
//!
//! - filter: `field__operator__value` (the value may itself contain `__`)
//! - sort: `field__asc` or `field__desc`
//! - fields: `a, b, c`

use super::{Filter, QueryError, Sort, TOKEN_DELIMITER};

/// Parse repeated `filter` parameters, preserving their order.
pub fn parse_filters(raw_filters: &[String]) -> Result<Vec<Filter>, QueryError> {
    raw_filters
        .iter()
        .map(|raw| {
            let parts: Vec<&str> = raw.splitn(3, TOKEN_DELIMITER).collect();
            match parts.as_slice() {
                [field, operator, value] => Ok(Filter {
                    field: field.to_string(),
                    operator: operator.to_string(),
                    value: value.to_string(),
                }),
                _ => Err(QueryError::InvalidFilterFormat(raw.clone())),
            }
        })
        .collect()
}

/// Parse repeated `sort` parameters. Directions are case-sensitive.
pub fn parse_sorts(raw_sorts: &[String]) -> Result<Vec<Sort>, QueryError> {
    raw_sorts
        .iter()
        .map(|raw| {
            let (field, order) = raw
                .split_once(TOKEN_DELIMITER)
                .ok_or_else(|| QueryError::InvalidSortFormat(raw.clone()))?;

            let descending = match order {
                "asc" => false,
                "desc" => true,
                other => return Err(QueryError::InvalidSortOrder(other.to_string())),
            };

            Ok(Sort {
                field: field.to_string(),
                descending,
            })
        })
        .collect()
}

/// Split the comma-joined `fields` parameter. Empty input means no restriction.
pub fn parse_fields(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(',').map(|f| f.trim().to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_filters() {
        let filters = parse_filters(&strings(&["title__ilike__%Go%", "author_id__eq__3"])).unwrap();
        assert_eq!(
            filters,
            vec![
                Filter {
                    field: "title".into(),
                    operator: "ilike".into(),
                    value: "%Go%".into()
                },
                Filter {
                    field: "author_id".into(),
                    operator: "eq".into(),
                    value: "3".into()
                },
            ]
        );
    }

    #[test]
    fn test_parse_filters_value_keeps_delimiter() {
        let filters = parse_filters(&strings(&["user_name__eq__john__doe__jr"])).unwrap();
        assert_eq!(filters[0].field, "user_name");
        assert_eq!(filters[0].operator, "eq");
        assert_eq!(filters[0].value, "john__doe__jr");
    }

    #[test]
    fn test_parse_filters_empty_segments() {
        let filters = parse_filters(&strings(&["name____x", "name__eq__"])).unwrap();
        assert_eq!(filters[0].operator, "");
        assert_eq!(filters[0].value, "x");
        assert_eq!(filters[1].value, "");
    }

    #[test]
    fn test_parse_filters_invalid() {
        for raw in ["title", "title__eq", "title_eq_x", ""] {
            assert_eq!(
                parse_filters(&strings(&[raw])),
                Err(QueryError::InvalidFilterFormat(raw.to_string())),
                "token {:?}",
                raw
            );
        }
    }

    #[test]
    fn test_parse_filters_stops_at_first_error() {
        let err = parse_filters(&strings(&["id__eq__1", "broken", "also_broken"])).unwrap_err();
        assert_eq!(err, QueryError::InvalidFilterFormat("broken".to_string()));
    }

    #[test]
    fn test_parse_filters_no_input() {
        assert!(parse_filters(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_parse_sorts() {
        let sorts = parse_sorts(&strings(&["published_at__desc", "title__asc"])).unwrap();
        assert_eq!(
            sorts,
            vec![
                Sort {
                    field: "published_at".into(),
                    descending: true
                },
                Sort {
                    field: "title".into(),
                    descending: false
                },
            ]
        );
    }

    #[test]
    fn test_parse_sorts_invalid_order() {
        assert_eq!(
            parse_sorts(&strings(&["title__DESC"])),
            Err(QueryError::InvalidSortOrder("DESC".to_string()))
        );
        assert_eq!(
            parse_sorts(&strings(&["title__up"])),
            Err(QueryError::InvalidSortOrder("up".to_string()))
        );
        // Only the first delimiter splits, the rest belongs to the direction
        assert_eq!(
            parse_sorts(&strings(&["title__asc__desc"])),
            Err(QueryError::InvalidSortOrder("asc__desc".to_string()))
        );
    }

    #[test]
    fn test_parse_sorts_invalid_format() {
        assert_eq!(
            parse_sorts(&strings(&["title"])),
            Err(QueryError::InvalidSortFormat("title".to_string()))
        );
    }

    #[test]
    fn test_parse_fields() {
        assert!(parse_fields("").is_empty());
        assert_eq!(parse_fields(" a , b ,c"), vec!["a", "b", "c"]);
        assert_eq!(parse_fields("id,id"), vec!["id", "id"]);
    }

    #[test]
    fn test_parse_fields_trailing_comma() {
        assert_eq!(parse_fields("id,title,"), vec!["id", "title", ""]);
        assert_eq!(parse_fields("  "), vec![""]);
    }
}
