use ormlet_core::{stmt::Value, Error, Result};

/// A LIMIT clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    /// `limit ?`: at most this many rows
    Count(u64),

    /// `limit ?, ?`: skip `offset` rows, then return at most `count`
    Window { offset: u64, count: u64 },
}

impl Limit {
    /// Values bound to the clause's placeholders, in order. Values beyond
    /// `i64::MAX` are bound as `i64::MAX`, which no table reaches.
    pub fn params(&self) -> Vec<Value> {
        let bind = |n: u64| Value::I64(i64::try_from(n).unwrap_or(i64::MAX));

        match *self {
            Limit::Count(count) => vec![bind(count)],
            Limit::Window { offset, count } => vec![bind(offset), bind(count)],
        }
    }
}

impl From<u64> for Limit {
    fn from(count: u64) -> Self {
        Limit::Count(count)
    }
}

impl From<(u64, u64)> for Limit {
    fn from((offset, count): (u64, u64)) -> Self {
        Limit::Window { offset, count }
    }
}

/// Builds a limit from a loosely typed shape: one integer (row cap) or two
/// integers (offset, count). Any other shape is rejected.
impl TryFrom<&[i64]> for Limit {
    type Error = Error;

    fn try_from(shape: &[i64]) -> Result<Self> {
        let non_negative = |n: i64| {
            u64::try_from(n).map_err(|_| {
                Error::invalid_configuration(format!("limit values must not be negative; got {n}"))
            })
        };

        match *shape {
            [count] => Ok(Limit::Count(non_negative(count)?)),
            [offset, count] => Ok(Limit::Window {
                offset: non_negative(offset)?,
                count: non_negative(count)?,
            }),
            _ => Err(Error::invalid_configuration(format!(
                "invalid limit value: {shape:?}; expected a row count or an (offset, count) pair"
            ))),
        }
    }
}

/// Same shapes as the slice form: an integer, or a string holding one or two
/// comma separated integers.
impl TryFrom<Value> for Limit {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::I64(count) => Limit::try_from(&[count][..]),
            Value::String(ref text) => {
                let shape = text
                    .split(',')
                    .map(|part| part.trim().parse::<i64>())
                    .collect::<core::result::Result<Vec<_>, _>>()
                    .map_err(|_| {
                        Error::invalid_configuration(format!("invalid limit value: {text:?}"))
                    })?;
                Limit::try_from(&shape[..])
            }
            value => Err(Error::invalid_configuration(format!(
                "invalid limit value: {value}"
            ))),
        }
    }
}

/// Optional clauses appended to a select template.
///
/// `filter` and `order_by` are raw SQL written by the application developer.
/// They are inserted verbatim and never escaped, so they must not contain
/// text supplied by end users; bind such values through placeholders
/// instead.
#[derive(Debug, Clone, Default)]
pub struct Clauses<'a> {
    pub filter: Option<&'a str>,
    pub order_by: Option<&'a str>,
    pub limit: Option<Limit>,
}

impl Clauses<'_> {
    /// Append the clauses to `template`. Values for the LIMIT placeholders
    /// are pushed onto `params`, after any values already there.
    pub fn apply(&self, template: &str, params: &mut Vec<Value>) -> String {
        let mut sql = vec![template];

        if let Some(filter) = self.filter {
            sql.push("where");
            sql.push(filter);
        }

        if let Some(order_by) = self.order_by {
            sql.push("order by");
            sql.push(order_by);
        }

        if let Some(limit) = &self.limit {
            sql.push("limit");
            sql.push(match limit {
                Limit::Count(_) => "?",
                Limit::Window { .. } => "?, ?",
            });
            params.extend(limit.params());
        }

        sql.join(" ")
    }
}
