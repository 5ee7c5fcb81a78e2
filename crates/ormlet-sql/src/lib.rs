pub mod clause;
pub use clause::{Clauses, Limit};

pub mod serializer;
pub use serializer::{Placeholder, Serializer};

pub mod stmt;
pub use stmt::Statement;

pub use ormlet_core::driver::Flavor;
