use std::ops::Deref;

mod grocery;
mod plan;

pub use plan::*;

#[derive(Clone)]
pub struct Query(pub mealtime_shared::State);

impl Deref for Query {
    type Target = mealtime_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
