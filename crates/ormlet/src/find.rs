use ormlet_core::stmt::Value;
use ormlet_sql::{Clauses, Limit};

/// A WHERE clause and the values bound to its placeholders.
///
/// The clause is raw SQL written by the application developer and is
/// inserted into the statement verbatim. Never build it from end user input;
/// pass such values through `args` instead.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    pub sql: String,
    pub args: Vec<Value>,
}

impl Filter {
    pub fn new(sql: impl Into<String>) -> Filter {
        Filter {
            sql: sql.into(),
            args: vec![],
        }
    }

    /// Bind the next placeholder.
    pub fn arg(mut self, value: impl Into<Value>) -> Filter {
        self.args.push(value.into());
        self
    }

    pub fn args<I>(mut self, values: I) -> Filter
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.args.extend(values.into_iter().map(Into::into));
        self
    }
}

impl From<&str> for Filter {
    fn from(sql: &str) -> Filter {
        Filter::new(sql)
    }
}

/// Options for [`Db::find_all`](crate::Db::find_all).
///
/// ```
/// use ormlet::{find::Filter, FindAll};
///
/// let query = FindAll::new()
///     .filter(Filter::new("`user_id`=?").arg("0015"))
///     .order_by("`created_at` desc")
///     .limit((10_u64, 5_u64));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FindAll {
    pub(crate) filter: Option<Filter>,
    pub(crate) order_by: Option<String>,
    pub(crate) limit: Option<Limit>,
}

impl FindAll {
    pub fn new() -> FindAll {
        FindAll::default()
    }

    pub fn filter(mut self, filter: impl Into<Filter>) -> FindAll {
        self.filter = Some(filter.into());
        self
    }

    /// Raw ORDER BY text, e.g. `` `created_at` desc ``. Trusted like
    /// [`Filter`].
    pub fn order_by(mut self, order_by: impl Into<String>) -> FindAll {
        self.order_by = Some(order_by.into());
        self
    }

    pub fn limit(mut self, limit: impl Into<Limit>) -> FindAll {
        self.limit = Some(limit.into());
        self
    }

    /// Append the clauses to `template` and collect the statement's
    /// arguments: filter values first, then the LIMIT values.
    pub(crate) fn apply(&self, template: &str) -> (String, Vec<Value>) {
        let mut args = self
            .filter
            .as_ref()
            .map(|filter| filter.args.clone())
            .unwrap_or_default();

        let sql = Clauses {
            filter: self.filter.as_ref().map(|filter| filter.sql.as_str()),
            order_by: self.order_by.as_deref(),
            limit: self.limit,
        }
        .apply(template, &mut args);

        (sql, args)
    }
}
