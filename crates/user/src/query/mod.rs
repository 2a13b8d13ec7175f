use std::ops::Deref;

mod favourite;
mod preferences;
mod user;

pub use favourite::*;
pub use user::*;

#[derive(Clone)]
pub struct Query(pub mealtime_shared::State);

impl Deref for Query {
    type Target = mealtime_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
