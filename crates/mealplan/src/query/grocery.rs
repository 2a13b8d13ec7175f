use mealtime_db::table::{MealPlanRecipes, RecipeIngredients, Recipes};
use sea_query::{Expr, ExprTrait, JoinType, Order, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

use crate::{GroceryLine, GroceryList, repository};

impl super::Query {
    #[tracing::instrument(skip(self))]
    pub async fn grocery_list(
        &self,
        user_id: i64,
        mealplan_id: i64,
    ) -> mealtime_shared::Result<GroceryList> {
        repository::ensure_owner(&self.read_db, user_id, mealplan_id).await?;

        let (sql, values) = Query::select()
            .column((Recipes::Table, Recipes::RecipeId))
            .column((Recipes::Table, Recipes::RecipeName))
            .column((RecipeIngredients::Table, RecipeIngredients::Ingredient))
            .from(MealPlanRecipes::Table)
            .join(
                JoinType::InnerJoin,
                Recipes::Table,
                Expr::col((MealPlanRecipes::Table, MealPlanRecipes::RecipeId))
                    .equals((Recipes::Table, Recipes::RecipeId)),
            )
            .join(
                JoinType::InnerJoin,
                RecipeIngredients::Table,
                Expr::col((Recipes::Table, Recipes::RecipeId))
                    .equals((RecipeIngredients::Table, RecipeIngredients::RecipeId)),
            )
            .and_where(
                Expr::col((MealPlanRecipes::Table, MealPlanRecipes::MealplanId)).eq(mealplan_id),
            )
            .order_by((Recipes::Table, Recipes::RecipeId), Order::Asc)
            .order_by(
                (RecipeIngredients::Table, RecipeIngredients::RecipeIngredientId),
                Order::Asc,
            )
            .build_sqlx(SqliteQueryBuilder);

        let lines = sqlx::query_as_with::<_, GroceryLine, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?;

        tracing::debug!(lines = lines.len(), "grocery list built");

        Ok(GroceryList { mealplan_id, lines })
    }
}
