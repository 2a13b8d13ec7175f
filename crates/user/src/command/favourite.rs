use mealtime_db::table::UserFavouriteRecipes;
use mealtime_shared::Error;
use sea_query::{Expr, ExprTrait, Query, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

impl super::Command {
    /// Fails with [`Error::Conflict`] when the recipe is already a favourite.
    #[tracing::instrument(skip(self))]
    pub async fn add_favourite(&self, user_id: i64, recipe_id: i64) -> mealtime_shared::Result<()> {
        let (sql, values) = Query::insert()
            .into_table(UserFavouriteRecipes::Table)
            .columns([UserFavouriteRecipes::UserId, UserFavouriteRecipes::RecipeId])
            .values_panic([user_id.into(), recipe_id.into()])
            .build_sqlx(SqliteQueryBuilder);

        sqlx::query_with(&sql, values)
            .execute(&self.write_db)
            .await
            .map_err(Error::from_insert)?;

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    pub async fn remove_favourite(
        &self,
        user_id: i64,
        recipe_id: i64,
    ) -> mealtime_shared::Result<()> {
        let (sql, values) = Query::delete()
            .from_table(UserFavouriteRecipes::Table)
            .and_where(Expr::col(UserFavouriteRecipes::UserId).eq(user_id))
            .and_where(Expr::col(UserFavouriteRecipes::RecipeId).eq(recipe_id))
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
