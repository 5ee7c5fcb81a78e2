/// SQL dialect of a database.
///
/// The flavor decides how identifiers are quoted and how positional
/// placeholders are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Flavor {
    #[default]
    Mysql,
    Sqlite,
}

impl Flavor {
    /// Character used to quote table and column names.
    pub const fn identifier_quote(self) -> char {
        match self {
            Flavor::Mysql => '`',
            Flavor::Sqlite => '"',
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Flavor::Mysql => "mysql",
            Flavor::Sqlite => "sqlite",
        }
    }
}

impl core::fmt::Display for Flavor {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
