use super::{Formatter, ToSql};

use crate::Flavor;

/// The generic placeholder written into statement templates.
pub(super) const GENERIC: char = '?';

/// A positional placeholder in the flavor's native syntax. Positions start
/// at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placeholder(pub usize);

impl Placeholder {
    pub(super) fn write(self, flavor: Flavor, dst: &mut String) {
        match flavor {
            Flavor::Mysql => dst.push('?'),
            Flavor::Sqlite => {
                dst.push('?');
                dst.push_str(&self.0.to_string());
            }
        }
    }
}

/// Placeholder inside a template, always the generic `?`.
pub(super) struct Generic;

impl ToSql for Generic {
    fn to_sql(self, f: &mut Formatter<'_>) {
        f.dst.push(GENERIC);
    }
}
