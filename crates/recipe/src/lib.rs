mod params;
mod query;

pub use params::*;
pub use query::*;
