//! Column allow-lists for the tables exposed through list endpoints

use super::{FilterOperator, QueryError, QueryOptions};

/// SQL type of an exposed column, used to bind filter values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Integer,
    BigInt,
    Text,
}

/// A table name and the columns callers may select, filter or sort on
#[derive(Debug, Clone, Copy)]
pub struct TableSchema {
    pub name: &'static str,
    pub columns: &'static [(&'static str, ColumnType)],
}

impl TableSchema {
    pub fn column_type(&self, column: &str) -> Option<ColumnType> {
        self.columns
            .iter()
            .find(|(name, _)| *name == column)
            .map(|(_, ty)| *ty)
    }

    /// Type a filter value is bound with. `ilike` always compares text.
    pub fn bind_type(&self, column: &str, operator: FilterOperator) -> Option<ColumnType> {
        match operator {
            FilterOperator::ILike => Some(ColumnType::Text),
            _ => self.column_type(column),
        }
    }

    /// Reject any identifier in `opts` that is not a column of this table, and
    /// `ilike` filters on non-text columns.
    pub fn validate(&self, opts: &QueryOptions) -> Result<(), QueryError> {
        let identifiers = opts
            .fields
            .iter()
            .map(String::as_str)
            .chain(opts.filters.iter().map(|f| f.field.as_str()))
            .chain(opts.sorts.iter().map(|s| s.field.as_str()));

        for column in identifiers {
            if self.column_type(column).is_none() {
                return Err(QueryError::UnknownColumn {
                    table: self.name.to_string(),
                    column: column.to_string(),
                });
            }
        }

        for filter in &opts.filters {
            if filter.sql_operator() == FilterOperator::ILike
                && self.column_type(&filter.field) != Some(ColumnType::Text)
            {
                return Err(QueryError::UnsupportedOperator {
                    column: filter.field.clone(),
                    operator: filter.operator.clone(),
                });
            }
        }
        Ok(())
    }
}
