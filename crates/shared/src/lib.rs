mod error;
pub mod page;
pub mod recipe;

pub use error::*;
pub use page::{Page, PageRequest};
pub use recipe::{Allergy, DietType, diet_type_qualifies};

#[derive(Clone)]
pub struct State {
    pub read_db: sqlx::SqlitePool,
    pub write_db: sqlx::SqlitePool,
}

impl State {
    /// Single pool used for both reads and writes, as the CLI and tests do.
    pub fn new(pool: sqlx::SqlitePool) -> Self {
        Self {
            read_db: pool.clone(),
            write_db: pool,
        }
    }
}
