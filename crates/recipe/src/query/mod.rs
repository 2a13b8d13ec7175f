mod allergy;
mod detail;
mod search;

pub use allergy::*;
pub use detail::*;
pub use search::*;

use std::ops::Deref;

/// Read side of the recipe catalog. The catalog is populated offline and
/// never written through this type.
#[derive(Clone)]
pub struct Query(pub mealtime_shared::State);

impl Deref for Query {
    type Target = mealtime_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
