use mealtime_db::table::{MealPlanRecipes, MealPlans, Recipes};
use sea_query::{Alias, Expr, ExprTrait, Func, JoinType, Order, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use sqlx::prelude::FromRow;
use time::{Date, OffsetDateTime};

use crate::repository;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MealPlanSummary {
    pub mealplan_id: i64,
    /// Unix timestamp, seconds.
    pub created_at: i64,
    pub recipe_count: i64,
}

impl MealPlanSummary {
    pub fn created_on(&self) -> Option<Date> {
        OffsetDateTime::from_unix_timestamp(self.created_at)
            .ok()
            .map(|d| d.date())
    }
}

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PlannedRecipe {
    pub recipe_id: i64,
    pub recipe_name: String,
    pub photo: Option<String>,
    pub total_time: i64,
    pub selected_servings: i64,
}

impl super::Query {
    pub async fn most_recent(&self, user_id: i64) -> mealtime_shared::Result<Option<i64>> {
        repository::most_recent(&self.read_db, user_id).await
    }

    /// Every plan of the user, most recent first.
    pub async fn history(&self, user_id: i64) -> mealtime_shared::Result<Vec<MealPlanSummary>> {
        let (sql, values) = Query::select()
            .columns([
                (MealPlans::Table, MealPlans::MealplanId),
                (MealPlans::Table, MealPlans::CreatedAt),
            ])
            .expr_as(
                Func::count(Expr::col((MealPlanRecipes::Table, MealPlanRecipes::RecipeId))),
                Alias::new("recipe_count"),
            )
            .from(MealPlans::Table)
            .join(
                JoinType::LeftJoin,
                MealPlanRecipes::Table,
                Expr::col((MealPlans::Table, MealPlans::MealplanId))
                    .equals((MealPlanRecipes::Table, MealPlanRecipes::MealplanId)),
            )
            .and_where(Expr::col((MealPlans::Table, MealPlans::UserId)).eq(user_id))
            .group_by_col((MealPlans::Table, MealPlans::MealplanId))
            .order_by((MealPlans::Table, MealPlans::MealplanId), Order::Desc)
            .build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, MealPlanSummary, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?)
    }

    pub async fn recipes(
        &self,
        user_id: i64,
        mealplan_id: i64,
    ) -> mealtime_shared::Result<Vec<PlannedRecipe>> {
        repository::ensure_owner(&self.read_db, user_id, mealplan_id).await?;

        let (sql, values) = Query::select()
            .columns([
                (Recipes::Table, Recipes::RecipeId),
                (Recipes::Table, Recipes::RecipeName),
                (Recipes::Table, Recipes::Photo),
                (Recipes::Table, Recipes::TotalTime),
            ])
            .column((MealPlanRecipes::Table, MealPlanRecipes::SelectedServings))
            .from(MealPlanRecipes::Table)
            .join(
                JoinType::InnerJoin,
                Recipes::Table,
                Expr::col((MealPlanRecipes::Table, MealPlanRecipes::RecipeId))
                    .equals((Recipes::Table, Recipes::RecipeId)),
            )
            .and_where(
                Expr::col((MealPlanRecipes::Table, MealPlanRecipes::MealplanId)).eq(mealplan_id),
            )
            .order_by((Recipes::Table, Recipes::RecipeId), Order::Asc)
            .build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, PlannedRecipe, _>(&sql, values)
            .fetch_all(&self.read_db)
            .await?)
    }
}
