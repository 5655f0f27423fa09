//! Row selection: equality and lower-bound filters, ordering, limit.

use folio_types::OrderBy;
use serde_json::Value;

/// A single column filter.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// `column = value`
    Eq(String, Value),
    /// `column >= value`
    Gte(String, Value),
}

impl Filter {
    pub fn column(&self) -> &str {
        match self {
            Self::Eq(c, _) | Self::Gte(c, _) => c,
        }
    }

    pub fn value(&self) -> &Value {
        match self {
            Self::Eq(_, v) | Self::Gte(_, v) => v,
        }
    }

    fn operator(&self) -> &'static str {
        match self {
            Self::Eq(..) => "eq",
            Self::Gte(..) => "gte",
        }
    }
}

/// What to select from a table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    filters: Vec<Filter>,
    order: Vec<OrderBy>,
    limit: Option<usize>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eq(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.filters.push(Filter::Eq(column.to_string(), value.into()));
        self
    }

    pub fn gte(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.filters.push(Filter::Gte(column.to_string(), value.into()));
        self
    }

    pub fn order(mut self, order: &[OrderBy]) -> Self {
        self.order.extend_from_slice(order);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    pub fn ordering(&self) -> &[OrderBy] {
        &self.order
    }

    pub fn row_limit(&self) -> Option<usize> {
        self.limit
    }

    /// Renders the PostgREST query string, starting with `select=*`.
    pub fn to_query_string(&self) -> String {
        let mut parts = vec!["select=*".to_string()];

        for f in &self.filters {
            parts.push(format!(
                "{}={}.{}",
                urlencoding::encode(f.column()),
                f.operator(),
                urlencoding::encode(&value_text(f.value()))
            ));
        }

        if !self.order.is_empty() {
            let order: Vec<String> = self
                .order
                .iter()
                .map(|o| {
                    let dir = if o.ascending { "asc" } else { "desc" };
                    format!("{}.{dir}", o.column)
                })
                .collect();
            parts.push(format!("order={}", order.join(",")));
        }

        if let Some(n) = self.limit {
            parts.push(format!("limit={n}"));
        }

        parts.join("&")
    }
}

/// Filter values go on the wire as bare text: strings unquoted, everything
/// else in its JSON form.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
