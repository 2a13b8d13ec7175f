use mealtime_db::table::{Recipes, UserFavouriteRecipes};
use mealtime_shared::{Page, PageRequest};
use sea_query::{Expr, ExprTrait, JoinType, Order, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use serde::Serialize;
use sqlx::prelude::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FavouriteRow {
    pub recipe_id: i64,
    pub recipe_name: String,
    pub photo: Option<String>,
    pub total_time: i64,
}

impl super::Query {
    pub async fn favourites(
        &self,
        user_id: i64,
        request: PageRequest,
    ) -> mealtime_shared::Result<Page<FavouriteRow>> {
        let statement = Query::select()
            .columns([
                (Recipes::Table, Recipes::RecipeId),
                (Recipes::Table, Recipes::RecipeName),
                (Recipes::Table, Recipes::Photo),
                (Recipes::Table, Recipes::TotalTime),
            ])
            .from(UserFavouriteRecipes::Table)
            .join(
                JoinType::InnerJoin,
                Recipes::Table,
                Expr::col((UserFavouriteRecipes::Table, UserFavouriteRecipes::RecipeId))
                    .equals((Recipes::Table, Recipes::RecipeId)),
            )
            .and_where(
                Expr::col((UserFavouriteRecipes::Table, UserFavouriteRecipes::UserId)).eq(user_id),
            )
            .order_by((Recipes::Table, Recipes::RecipeId), Order::Asc)
            .to_owned();

        mealtime_shared::page::fetch(&self.read_db, statement, request).await
    }

    pub async fn is_favourite(
        &self,
        user_id: i64,
        recipe_id: i64,
    ) -> mealtime_shared::Result<bool> {
        let (sql, values) = Query::select()
            .expr(Expr::val(1))
            .from(UserFavouriteRecipes::Table)
            .and_where(Expr::col(UserFavouriteRecipes::UserId).eq(user_id))
            .and_where(Expr::col(UserFavouriteRecipes::RecipeId).eq(recipe_id))
            .limit(1)
            .build_sqlx(SqliteQueryBuilder);

        let found = sqlx::query_scalar_with::<_, i64, _>(&sql, values)
            .fetch_optional(&self.read_db)
            .await?;

        Ok(found.is_some())
    }
}
