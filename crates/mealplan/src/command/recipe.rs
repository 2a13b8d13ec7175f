use mealtime_db::table::MealPlanRecipes;
use mealtime_shared::Error;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

use crate::repository;

impl super::Command {
    /// Adds a recipe to the user's most recent plan and returns that plan id.
    #[tracing::instrument(skip(self))]
    pub async fn add_recipe(&self, user_id: i64, recipe_id: i64) -> mealtime_shared::Result<i64> {
        let Some(mealplan_id) = repository::most_recent(&self.read_db, user_id).await? else {
            return Err(Error::NotFound);
        };

        let (sql, values) = Query::insert()
            .into_table(MealPlanRecipes::Table)
            .columns([
                MealPlanRecipes::MealplanId,
                MealPlanRecipes::RecipeId,
                MealPlanRecipes::SelectedServings,
            ])
            .values_panic([
                mealplan_id.into(),
                recipe_id.into(),
                super::DEFAULT_SERVINGS.into(),
            ])
            .build_sqlx(SqliteQueryBuilder);

        sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await
            .map_err(Error::from_insert)?;

        Ok(mealplan_id)
    }

    /// Removes a recipe from `mealplan_id`, or from the most recent plan
    /// when it is `None`.
    #[tracing::instrument(skip(self))]
    pub async fn remove_recipe(
        &self,
        user_id: i64,
        mealplan_id: Option<i64>,
        recipe_id: i64,
    ) -> mealtime_shared::Result<()> {
        let mealplan_id = match mealplan_id {
            Some(id) => id,
            None => repository::most_recent(&self.read_db, user_id)
                .await?
                .ok_or(Error::NotFound)?,
        };

        repository::ensure_owner(&self.read_db, user_id, mealplan_id).await?;

        let (sql, values) = Query::delete()
            .from_table(MealPlanRecipes::Table)
            .and_where(Expr::col(MealPlanRecipes::MealplanId).eq(mealplan_id))
            .and_where(Expr::col(MealPlanRecipes::RecipeId).eq(recipe_id))
            .build_sqlx(SqliteQueryBuilder);

        let result = sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::NotFound);
        }

        Ok(())
    }
}
