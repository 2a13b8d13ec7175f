mod allergy;
mod diet_type;
mod nutrition_value;
mod recipe;
mod recipe_ingredient;
mod recipe_instruction;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "mealtime",
    "m0_1",
    vec_box![],
    vec_box![
        recipe::CreateTable,
        recipe::CreateIdx1,
        recipe_ingredient::CreateTable,
        recipe_ingredient::CreateIdx1,
        recipe_instruction::CreateTable,
        nutrition_value::CreateTable,
        nutrition_value::CreateIdx1,
        diet_type::CreateTable,
        diet_type::CreateRecipeTable,
        diet_type::CreateIdx1,
        allergy::CreateTable,
        allergy::CreateRecipeTable,
        allergy::CreateIdx1,
    ]
);
