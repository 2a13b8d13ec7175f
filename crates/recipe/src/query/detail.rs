use mealtime_db::table::{
    NutritionValues, RecipeAllergies, RecipeDietTypes, RecipeIngredients, RecipeInstructions,
    Recipes,
};
use mealtime_shared::{Allergy, DietType};
use sea_query::{Expr, ExprTrait, JoinType, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use sqlx::prelude::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Nutrition {
    pub calories: f64,
    pub fats: f64,
    pub saturates: f64,
    pub carbs: f64,
    pub sugars: f64,
    pub fibres: f64,
    pub proteins: f64,
    pub salts: f64,
}

#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Instruction {
    pub step_num: i64,
    pub step_description: String,
}

#[derive(FromRow)]
struct RecipeHead {
    recipe_id: i64,
    recipe_name: String,
    photo: Option<String>,
    serves: Option<i64>,
    cook_time: i64,
    prep_time: i64,
    total_time: i64,
    diet_type_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecipeDetail {
    pub recipe_id: i64,
    pub recipe_name: String,
    pub photo: Option<String>,
    pub serves: Option<i64>,
    pub cook_time: i64,
    pub prep_time: i64,
    pub total_time: i64,
    pub diet_type: Option<DietType>,
    pub nutrition: Option<Nutrition>,
    /// Allergens the recipe contains.
    pub allergies: Vec<Allergy>,
    pub ingredients: Vec<String>,
    pub instructions: Vec<Instruction>,
}

impl super::Query {
    pub async fn find(&self, recipe_id: i64) -> mealtime_shared::Result<Option<RecipeDetail>> {
        let (sql, values) = sea_query::Query::select()
            .columns([
                (Recipes::Table, Recipes::RecipeId),
                (Recipes::Table, Recipes::RecipeName),
                (Recipes::Table, Recipes::Photo),
                (Recipes::Table, Recipes::Serves),
                (Recipes::Table, Recipes::CookTime),
                (Recipes::Table, Recipes::PrepTime),
                (Recipes::Table, Recipes::TotalTime),
            ])
            .column((RecipeDietTypes::Table, RecipeDietTypes::DietTypeId))
            .from(Recipes::Table)
            .join(
                JoinType::LeftJoin,
                RecipeDietTypes::Table,
                Expr::col((Recipes::Table, Recipes::RecipeId))
                    .equals((RecipeDietTypes::Table, RecipeDietTypes::RecipeId)),
            )
            .and_where(Expr::col((Recipes::Table, Recipes::RecipeId)).eq(recipe_id))
            .limit(1)
            .build_sqlx(SqliteQueryBuilder);

        let Some(head) = sqlx::query_as_with::<_, RecipeHead, _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?
        else {
            return Ok(None);
        };

        let (sql, values) = sea_query::Query::select()
            .columns([
                NutritionValues::Calories,
                NutritionValues::Fats,
                NutritionValues::Saturates,
                NutritionValues::Carbs,
                NutritionValues::Sugars,
                NutritionValues::Fibres,
                NutritionValues::Proteins,
                NutritionValues::Salts,
            ])
            .from(NutritionValues::Table)
            .and_where(Expr::col(NutritionValues::RecipeId).eq(recipe_id))
            .limit(1)
            .build_sqlx(SqliteQueryBuilder);

        let nutrition = sqlx::query_as_with::<_, Nutrition, _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?;

        let (sql, values) = sea_query::Query::select()
            .column(RecipeAllergies::AllergyId)
            .from(RecipeAllergies::Table)
            .and_where(Expr::col(RecipeAllergies::RecipeId).eq(recipe_id))
            .order_by(RecipeAllergies::AllergyId, Order::Asc)
            .build_sqlx(SqliteQueryBuilder);

        let allergies = sqlx::query_scalar_with::<_, i64, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?
            .into_iter()
            .filter_map(Allergy::from_id)
            .collect();

        let (sql, values) = sea_query::Query::select()
            .column(RecipeIngredients::Ingredient)
            .from(RecipeIngredients::Table)
            .and_where(Expr::col(RecipeIngredients::RecipeId).eq(recipe_id))
            .order_by(RecipeIngredients::RecipeIngredientId, Order::Asc)
            .build_sqlx(SqliteQueryBuilder);

        let ingredients = sqlx::query_scalar_with::<_, String, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        let (sql, values) = sea_query::Query::select()
            .columns([
                RecipeInstructions::StepNum,
                RecipeInstructions::StepDescription,
            ])
            .from(RecipeInstructions::Table)
            .and_where(Expr::col(RecipeInstructions::RecipeId).eq(recipe_id))
            .order_by(RecipeInstructions::StepNum, Order::Asc)
            .build_sqlx(SqliteQueryBuilder);

        let instructions = sqlx::query_as_with::<_, Instruction, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        Ok(Some(RecipeDetail {
            recipe_id: head.recipe_id,
            recipe_name: head.recipe_name,
            photo: head.photo,
            serves: head.serves,
            cook_time: head.cook_time,
            prep_time: head.prep_time,
            total_time: head.total_time,
            diet_type: head.diet_type_id.and_then(DietType::from_id),
            nutrition,
            allergies,
            ingredients,
            instructions,
        }))
    }
}
