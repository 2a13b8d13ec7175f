use std::ops::Deref;

mod create;
mod delete;
mod recipe;

/// Default number of servings for a recipe added to a plan.
pub const DEFAULT_SERVINGS: i64 = 2;

#[derive(Clone)]
pub struct Command(pub mealtime_shared::State);

impl Deref for Command {
    type Target = mealtime_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
