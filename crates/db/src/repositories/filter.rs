//! Internal helpers for dynamically-built list queries.

use lectern_core::pagination::PageWindow;
use lectern_core::types::DbId;
use sqlx::postgres::PgArguments;
use sqlx::query::{QueryAs, QueryScalar};
use sqlx::Postgres;

/// Typed bind value for a dynamically-built WHERE clause.
pub(crate) enum BindValue {
    Uuid(DbId),
    Text(String),
}

/// Accumulates `AND`-joined conditions and their positional binds.
///
/// Every clause starts with `deleted_at IS NULL`.
pub(crate) struct Filter {
    conditions: Vec<String>,
    values: Vec<BindValue>,
    next_idx: u32,
}

impl Filter {
    pub(crate) fn live() -> Self {
        Self {
            conditions: vec!["deleted_at IS NULL".to_string()],
            values: Vec::new(),
            next_idx: 1,
        }
    }

    /// `column = $n`
    pub(crate) fn eq(&mut self, column: &str, value: BindValue) {
        self.conditions
            .push(format!("{column} = ${idx}", idx = self.next_idx));
        self.values.push(value);
        self.next_idx += 1;
    }

    /// Case-insensitive substring match of `term` against any of `columns`.
    pub(crate) fn contains_any(&mut self, columns: &[&str], term: &str) {
        let idx = self.next_idx;
        let clauses: Vec<String> = columns
            .iter()
            .map(|column| format!("{column} ILIKE ${idx} ESCAPE '\\'"))
            .collect();
        self.conditions.push(format!("({})", clauses.join(" OR ")));
        self.values.push(BindValue::Text(like_pattern(term)));
        self.next_idx += 1;
    }

    pub(crate) fn where_clause(&self) -> String {
        format!("WHERE {}", self.conditions.join(" AND "))
    }

    pub(crate) fn values(&self) -> &[BindValue] {
        &self.values
    }

    /// `LIMIT $n OFFSET $n+1` for a window, or nothing.
    pub(crate) fn limit_clause(&self, window: Option<PageWindow>) -> String {
        match window {
            Some(_) => format!(
                "LIMIT ${} OFFSET ${}",
                self.next_idx,
                self.next_idx + 1
            ),
            None => String::new(),
        }
    }
}

/// Wrap `term` in `%` after escaping LIKE wildcards so they match literally.
pub(crate) fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

/// Bind a slice of `BindValue` to a sqlx `QueryAs`.
pub(crate) fn bind_values<'q, O>(
    mut q: QueryAs<'q, Postgres, O, PgArguments>,
    bind_values: &'q [BindValue],
) -> QueryAs<'q, Postgres, O, PgArguments> {
    for val in bind_values {
        match val {
            BindValue::Uuid(v) => q = q.bind(*v),
            BindValue::Text(v) => q = q.bind(v.as_str()),
        }
    }
    q
}

/// Bind a slice of `BindValue` to a sqlx `QueryScalar`.
pub(crate) fn bind_values_scalar<'q>(
    mut q: QueryScalar<'q, Postgres, i64, PgArguments>,
    bind_values: &'q [BindValue],
) -> QueryScalar<'q, Postgres, i64, PgArguments> {
    for val in bind_values {
        match val {
            BindValue::Uuid(v) => q = q.bind(*v),
            BindValue::Text(v) => q = q.bind(v.as_str()),
        }
    }
    q
}

/// Bind the window's limit and offset, if any.
pub(crate) fn bind_window<'q, O>(
    q: QueryAs<'q, Postgres, O, PgArguments>,
    window: Option<PageWindow>,
) -> QueryAs<'q, Postgres, O, PgArguments> {
    match window {
        Some(window) => q.bind(window.limit).bind(window.offset()),
        None => q,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("rust"), "%rust%");
        assert_eq!(like_pattern("100%"), "%100\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
        assert_eq!(like_pattern("c:\\"), "%c:\\\\%");
    }

    #[test]
    fn filter_numbers_binds_in_order() {
        let mut filter = Filter::live();
        filter.eq("course_id", BindValue::Uuid(DbId::nil()));
        filter.contains_any(&["title", "description"], "x");

        assert_eq!(
            filter.where_clause(),
            "WHERE deleted_at IS NULL AND course_id = $1 AND \
             (title ILIKE $2 ESCAPE '\\' OR description ILIKE $2 ESCAPE '\\')"
        );
        assert_eq!(filter.values().len(), 2);
        assert_eq!(
            filter.limit_clause(Some(PageWindow::from_request(None, None))),
            "LIMIT $3 OFFSET $4"
        );
        assert_eq!(filter.limit_clause(None), "");
    }
}
