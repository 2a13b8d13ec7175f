use std::ops::Deref;

mod favourite;
mod preferences;
mod register;

pub use preferences::SetPreferencesInput;
pub use register::CreateUserInput;

#[derive(Clone)]
pub struct Command(pub mealtime_shared::State);

impl Deref for Command {
    type Target = mealtime_shared::State;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
