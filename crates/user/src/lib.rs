mod command;
mod preferences;
mod query;

pub use command::*;
pub use preferences::*;
pub use query::*;
