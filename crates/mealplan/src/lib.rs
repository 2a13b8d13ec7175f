mod command;
mod grocery;
mod query;
pub(crate) mod repository;

pub use command::*;
pub use grocery::*;
pub use query::*;
