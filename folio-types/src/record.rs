use crate::RowId;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// One column of a server-side ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderBy {
    pub column: &'static str,
    pub ascending: bool,
}

impl OrderBy {
    pub const fn asc(column: &'static str) -> Self {
        Self { column, ascending: true }
    }

    pub const fn desc(column: &'static str) -> Self {
        Self { column, ascending: false }
    }
}

/// A row type stored in one remote table.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Remote table name.
    const TABLE: &'static str;

    fn id(&self) -> &RowId;

    /// Ordering applied when the whole collection is fetched.
    fn default_order() -> &'static [OrderBy];
}
