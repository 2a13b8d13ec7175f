mod favourite;
mod meal_plan;
mod preference;
mod user;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "mealtime",
    "m0_2",
    vec_box![crate::m0_1::Migration],
    vec_box![
        user::CreateTable,
        user::CreateIdx1,
        preference::CreateDietTable,
        preference::CreateAllergyTable,
        favourite::CreateTable,
        meal_plan::CreateTable,
        meal_plan::CreateIdx1,
        meal_plan::CreateRecipeTable,
    ]
);
