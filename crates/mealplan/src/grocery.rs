use serde::Serialize;
use sqlx::prelude::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct GroceryLine {
    pub recipe_id: i64,
    pub recipe_name: String,
    pub ingredient: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeGroceries {
    pub recipe_id: i64,
    pub recipe_name: String,
    pub ingredients: Vec<String>,
}

/// Ingredient lines of every recipe in one meal plan, ordered by recipe.
#[derive(Debug, Clone, Serialize)]
pub struct GroceryList {
    pub mealplan_id: i64,
    pub lines: Vec<GroceryLine>,
}

impl GroceryList {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Groups consecutive lines of the same recipe.
    pub fn by_recipe(&self) -> Vec<RecipeGroceries> {
        let mut groups: Vec<RecipeGroceries> = Vec::new();

        for line in &self.lines {
            match groups.last_mut() {
                Some(group) if group.recipe_id == line.recipe_id => {
                    group.ingredients.push(line.ingredient.clone());
                }
                _ => groups.push(RecipeGroceries {
                    recipe_id: line.recipe_id,
                    recipe_name: line.recipe_name.clone(),
                    ingredients: vec![line.ingredient.clone()],
                }),
            }
        }

        groups
    }
}
