//! SELECT statement construction from [`QueryOptions`]

use super::QueryOptions;

/// Build `SELECT <fields> FROM <table> [WHERE ...] [ORDER BY ...]`.
///
/// Placeholders are numbered `$1..$n` in filter order and the returned
/// arguments line up with them index for index. Identifiers are not quoted.
pub fn build_select_query(table_name: &str, opts: &QueryOptions) -> (String, Vec<String>) {
    let select_fields = if opts.fields.is_empty() {
        "*".to_string()
    } else {
        opts.fields.join(", ")
    };

    let mut args = Vec::with_capacity(opts.filters.len());
    let mut where_clauses = Vec::with_capacity(opts.filters.len());

    for (idx, filter) in opts.filters.iter().enumerate() {
        where_clauses.push(format!(
            "{} {} ${}",
            filter.field,
            filter.sql_operator().as_sql(),
            idx + 1
        ));
        args.push(filter.value.clone());
    }

    let mut query = format!("SELECT {} FROM {}", select_fields, table_name);

    if !where_clauses.is_empty() {
        query.push_str(" WHERE ");
        query.push_str(&where_clauses.join(" AND "));
    }

    if !opts.sorts.is_empty() {
        let sort_exprs: Vec<String> = opts
            .sorts
            .iter()
            .map(|s| format!("{} {}", s.field, if s.descending { "DESC" } else { "ASC" }))
            .collect();
        query.push_str(" ORDER BY ");
        query.push_str(&sort_exprs.join(", "));
    }

    (query, args)
}
